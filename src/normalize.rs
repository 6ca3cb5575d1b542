use std::collections::HashSet;

use crate::constants::{JUNK_SEQUENCE, WILDCARD_PREFIX};

/// Drops the first wildcard marker (wherever it sits) and every occurrence of
/// the junk sequence. An empty result is kept as is.
pub fn normalize(name: &str) -> String {
    name.replacen(WILDCARD_PREFIX, "", 1)
        .replace(JUNK_SEQUENCE, "")
}

/// Keeps the first occurrence of each name, preserving order.
pub fn dedup<I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
