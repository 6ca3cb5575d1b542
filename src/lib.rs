pub mod args;
pub mod constants;
pub mod enumeration;
pub mod error;
pub mod normalize;
pub mod reporting;

pub use args::{Args, Config, RetryPolicy, Sources};
pub use error::{ReconError, Result};

use reqwest::Client;
use tracing::info;

use enumeration::{crtsh_enum_async, jldc_enum_async};
use normalize::{dedup, normalize};
use reporting::{prepare_output_dir, write_outputs};

/// Queries both sources one after the other and writes the merged list to
/// `config.output`. Returns the lines written.
pub async fn run(config: Config) -> Result<Vec<String>> {
    // Fail on an unusable output location before touching the network.
    prepare_output_dir(&config.output)?;

    info!("Enumerating subdomains of {}", config.domain);

    let mut builder = Client::builder();
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build()?;

    let mut jldc_subs =
        jldc_enum_async(&client, &config.sources.jldc, &config.domain, config.retry).await;
    if config.normalize_all {
        jldc_subs = jldc_subs.iter().map(|s| normalize(s)).collect();
    }
    info!("jldc found {} potential subdomains", jldc_subs.len());

    let crt_subs =
        crtsh_enum_async(&client, &config.sources.crtsh, &config.domain, config.retry).await;
    info!("crt.sh found {} potential subdomains", crt_subs.len());

    let all_subs = dedup(jldc_subs.into_iter().chain(crt_subs));

    write_outputs(&all_subs, &config.output)?;
    info!(
        "Wrote {} unique subdomains to {}",
        all_subs.len(),
        config.output.display()
    );

    Ok(all_subs)
}
