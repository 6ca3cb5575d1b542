use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{CRTSH_BASE_URL, DEFAULT_RETRIES, DEFAULT_RETRY_DELAY_MS, JLDC_BASE_URL};
use crate::error::ReconError;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Target domain to perform subdomain enumeration on
    #[arg(short, long)]
    pub domain: Option<String>,

    /// File the deduplicated subdomains are written to
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of attempts per data source
    #[arg(short, long, default_value_t = DEFAULT_RETRIES)]
    pub retries: usize,

    /// Pause between attempts after a request error, in milliseconds
    #[arg(long, default_value_t = DEFAULT_RETRY_DELAY_MS)]
    pub retry_delay: u64,

    /// Request timeout in seconds (none by default)
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Normalize Anubis results the same way as crt.sh results
    #[arg(long)]
    pub normalize_all: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: usize,
    pub delay: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sources {
    pub jldc: String,
    pub crtsh: String,
}

impl Default for Sources {
    fn default() -> Self {
        Self {
            jldc: JLDC_BASE_URL.to_string(),
            crtsh: CRTSH_BASE_URL.to_string(),
        }
    }
}

/// Validated run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub domain: String,
    pub output: PathBuf,
    pub retry: RetryPolicy,
    pub timeout: Option<Duration>,
    pub normalize_all: bool,
    pub sources: Sources,
}

impl TryFrom<Args> for Config {
    type Error = ReconError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let domain = args
            .domain
            .filter(|d| !d.is_empty())
            .ok_or(ReconError::MissingDomain)?;
        let output = args
            .output
            .filter(|o| !o.as_os_str().is_empty())
            .ok_or(ReconError::MissingOutput)?;
        if args.retries == 0 {
            return Err(ReconError::InvalidRetries);
        }

        Ok(Config {
            domain,
            output,
            retry: RetryPolicy {
                attempts: args.retries,
                delay: Duration::from_millis(args.retry_delay),
            },
            timeout: args.timeout.map(Duration::from_secs),
            normalize_all: args.normalize_all,
            sources: Sources::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Config, ReconError> {
        let args = Args::try_parse_from(argv).expect("clap parse");
        Config::try_from(args)
    }

    #[test]
    fn defaults_match_fixed_policy() {
        let config = parse(&["subenum", "-d", "example.com", "-o", "out/subs.txt"]).unwrap();
        assert_eq!(config.domain, "example.com");
        assert_eq!(config.output, PathBuf::from("out/subs.txt"));
        assert_eq!(config.retry.attempts, 3);
        assert_eq!(config.retry.delay, Duration::from_secs(1));
        assert_eq!(config.timeout, None);
        assert!(!config.normalize_all);
        assert_eq!(config.sources, Sources::default());
    }

    #[test]
    fn missing_domain_is_rejected() {
        let err = parse(&["subenum", "-o", "out.txt"]).unwrap_err();
        assert!(matches!(err, ReconError::MissingDomain));
        assert_eq!(err.to_string(), "Please provide a domain using the -d flag");
    }

    #[test]
    fn empty_domain_is_rejected() {
        let err = parse(&["subenum", "-d", "", "-o", "out.txt"]).unwrap_err();
        assert!(matches!(err, ReconError::MissingDomain));
    }

    #[test]
    fn missing_output_is_rejected() {
        let err = parse(&["subenum", "-d", "example.com"]).unwrap_err();
        assert!(matches!(err, ReconError::MissingOutput));
        assert_eq!(
            err.to_string(),
            "Please provide an output file using the -o flag"
        );
    }

    #[test]
    fn domain_is_checked_before_output() {
        let err = parse(&["subenum"]).unwrap_err();
        assert!(matches!(err, ReconError::MissingDomain));
    }

    #[test]
    fn zero_retries_is_rejected() {
        let err = parse(&["subenum", "-d", "a.com", "-o", "o.txt", "-r", "0"]).unwrap_err();
        assert!(matches!(err, ReconError::InvalidRetries));
    }

    #[test]
    fn tuning_flags_are_applied() {
        let config = parse(&[
            "subenum",
            "--domain",
            "example.com",
            "--output",
            "o.txt",
            "--retries",
            "5",
            "--retry-delay",
            "250",
            "--timeout",
            "30",
            "--normalize-all",
        ])
        .unwrap();
        assert_eq!(config.retry.attempts, 5);
        assert_eq!(config.retry.delay, Duration::from_millis(250));
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert!(config.normalize_all);
    }
}
