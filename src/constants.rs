use once_cell::sync::Lazy;
use regex::Regex;

pub const JLDC_BASE_URL: &str = "https://jldc.me";
pub const CRTSH_BASE_URL: &str = "https://crt.sh";

pub const DEFAULT_RETRIES: usize = 3;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1000;

/// Wildcard marker carried by certificate subject names.
pub const WILDCARD_PREFIX: &str = "*.";

/// Run of 29 U+115A (HANGUL CHOSEONG KIYEOK-TIKEUT) code points. Some crt.sh
/// `name_value` fields carry it from corrupted upstream certificate data.
pub const JUNK_SEQUENCE: &str = concat!(
    "\u{115A}\u{115A}\u{115A}\u{115A}\u{115A}\u{115A}\u{115A}\u{115A}\u{115A}\u{115A}",
    "\u{115A}\u{115A}\u{115A}\u{115A}\u{115A}\u{115A}\u{115A}\u{115A}\u{115A}\u{115A}",
    "\u{115A}\u{115A}\u{115A}\u{115A}\u{115A}\u{115A}\u{115A}\u{115A}\u{115A}",
);

pub static USER_AGENTS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15",
    ]
});

// Path separators, whitespace and JSON punctuation end a candidate.
pub static HOSTNAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"https?://[^/\s",\[\]]+|www\.[^/\s",\[\]]+|[^/\s",\[\]]+\.com"#).unwrap()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn junk_sequence_is_29_code_points() {
        assert_eq!(JUNK_SEQUENCE.chars().count(), 29);
        assert!(JUNK_SEQUENCE.chars().all(|c| c == '\u{115A}'));
        assert_eq!(&JUNK_SEQUENCE.as_bytes()[..3], &[0xE1u8, 0x85, 0x9A]);
    }
}
