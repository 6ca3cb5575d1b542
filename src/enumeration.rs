use rand::seq::SliceRandom;
use reqwest::{header, Client};
use serde::Deserialize;
use serde_json::Value;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::args::RetryPolicy;
use crate::constants::{HOSTNAME_REGEX, USER_AGENTS};
use crate::normalize::normalize;

/// One crt.sh record. Fields other than `name_value` are ignored and the
/// value is kept loosely typed until it is checked to be a string.
#[derive(Debug, Deserialize)]
struct CrtShEntry {
    #[serde(default)]
    name_value: Option<Value>,
}

pub fn jldc_url(base: &str, domain: &str) -> String {
    format!("{}/anubis/subdomains/{}", base.trim_end_matches('/'), domain)
}

pub fn crtsh_url(base: &str, domain: &str) -> String {
    format!("{}/?q=%25.{}&output=json", base.trim_end_matches('/'), domain)
}

/// Hostname-like substrings in order of appearance.
pub fn extract_hostnames(body: &str) -> Vec<String> {
    HOSTNAME_REGEX
        .find_iter(body)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Normalized `name_value` strings of a crt.sh JSON array. Records without a
/// string `name_value` are skipped; a body that is not an array of objects
/// is an error.
pub fn extract_name_values(body: &[u8]) -> Result<Vec<String>, serde_json::Error> {
    let entries: Vec<CrtShEntry> = serde_json::from_slice(body)?;
    Ok(entries
        .into_iter()
        .filter_map(|entry| match entry.name_value {
            Some(Value::String(name)) => Some(normalize(&name)),
            _ => None,
        })
        .collect())
}

/// GETs `url` until `parse` accepts a body or the attempts run out.
///
/// Only a failed request is followed by the retry delay. A body that cannot
/// be read or parsed uses up an attempt and the next one starts at once.
async fn fetch_with_retry<T, E, F>(
    client: &Client,
    source: &str,
    url: &str,
    retry: RetryPolicy,
    mut parse: F,
) -> Option<T>
where
    F: FnMut(&[u8]) -> Result<T, E>,
    E: std::fmt::Display,
{
    for attempt in 1..=retry.attempts {
        let user_agent = *USER_AGENTS
            .choose(&mut rand::thread_rng())
            .unwrap_or(&"subenum");
        let resp = client
            .get(url)
            .header(header::USER_AGENT, user_agent)
            .send()
            .await;

        let resp = match resp {
            Ok(r) => r,
            Err(e) => {
                warn!(
                    "Error getting {} subdomains (attempt {}/{}): {}",
                    source, attempt, retry.attempts, e
                );
                if attempt < retry.attempts {
                    sleep(retry.delay).await;
                }
                continue;
            }
        };

        if !resp.status().is_success() {
            warn!("{} responded with status {}", source, resp.status());
        }

        let body = match resp.bytes().await {
            Ok(b) => b,
            Err(e) => {
                warn!(
                    "Error reading {} response (attempt {}/{}): {}",
                    source, attempt, retry.attempts, e
                );
                continue;
            }
        };

        match parse(&body) {
            Ok(parsed) => {
                debug!("{} returned {} bytes on attempt {}", source, body.len(), attempt);
                return Some(parsed);
            }
            Err(e) => {
                warn!(
                    "Error decoding {} response (attempt {}/{}): {}",
                    source, attempt, retry.attempts, e
                );
            }
        }
    }

    warn!(
        "Giving up on {} after {} attempts, continuing without it",
        source, retry.attempts
    );
    None
}

/// Anubis (jldc.me) subdomain listing. The body is scanned with a hostname
/// pattern instead of being decoded.
pub async fn jldc_enum_async(
    client: &Client,
    base: &str,
    domain: &str,
    retry: RetryPolicy,
) -> Vec<String> {
    let url = jldc_url(base, domain);
    fetch_with_retry(client, "jldc", &url, retry, |body| {
        Ok::<_, std::convert::Infallible>(extract_hostnames(&String::from_utf8_lossy(body)))
    })
    .await
    .unwrap_or_default()
}

/// crt.sh certificate transparency search for `%.<domain>`.
pub async fn crtsh_enum_async(
    client: &Client,
    base: &str,
    domain: &str,
    retry: RetryPolicy,
) -> Vec<String> {
    let url = crtsh_url(base, domain);
    fetch_with_retry(client, "crt.sh", &url, retry, extract_name_values)
        .await
        .unwrap_or_default()
}
