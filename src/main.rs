use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use serde_json::json;

use pricing_bridge::aws::resolve_available_aws_config;
use pricing_bridge::bridge::{PricingBridge, ProductRequest};
use pricing_bridge::catalog::{ProductSource, ReplaySource};
use pricing_bridge::cli::Cli;
use pricing_bridge::config::ConfigLoader;
use pricing_bridge::logging::setup_logging;
use pricing_bridge::pricing::PricingClient;

#[tokio::main]
pub async fn main() -> Result<()> {
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|e| anyhow!("Failed to install default crypto provider: {:?}", e))?;

    let cli = Cli::parse();
    setup_logging()?;

    let mut config = ConfigLoader::load_config(cli.config.as_deref())?;
    if let Some(region) = cli.region {
        config.aws_region = region;
    }
    if let Some(max_results) = cli.max_results {
        config.max_results = max_results;
    }

    let source = if cli.offline {
        ProductSource::Replay(fixture_catalog())
    } else {
        let sdk_conf =
            resolve_available_aws_config(config.aws_init_type.clone(), &config.aws_region)
                .await
                .context("no usable AWS credentials")?;
        ProductSource::Live(PricingClient::new(&sdk_conf))
    };

    let (bridge, mut ports) = PricingBridge::new(source, config.channel_capacity);
    tokio::spawn(bridge.run());

    // Stand-in for the application layer: walk the catalog one page at a
    // time, following continuation tokens.
    let mut next_token: Option<String> = None;
    let mut fetched = 0usize;
    loop {
        ports
            .requests
            .send(ProductRequest {
                next_token: next_token.clone(),
                max_results: config.max_results,
            })
            .await
            .map_err(|_| anyhow!("bridge stopped"))?;

        let page = tokio::select! {
            page = ports.products.recv() => {
                page.ok_or_else(|| anyhow!("products port closed"))?
            }
            failure = ports.failures.recv() => {
                let failure = failure.ok_or_else(|| anyhow!("failures port closed"))?;
                bail!("pricing request failed: {}", failure.error);
            }
        };

        fetched += 1;
        println!(
            "page {}: {} products{}",
            fetched,
            page.price_list.len(),
            if page.is_last() { " (last)" } else { "" }
        );

        if page.is_last() || (cli.pages != 0 && fetched >= cli.pages) {
            break;
        }
        next_token = page.next_token;
    }

    Ok(())
}

/// Two-page fixture catalog for `--offline` runs.
fn fixture_catalog() -> ReplaySource {
    ReplaySource::with_pages(vec![
        vec![
            json!({
                "product": { "attributes": { "instanceType": "t2.micro", "regionCode": "us-east-1" } },
                "terms": { "OnDemand": {} }
            }),
            json!({
                "product": { "attributes": { "instanceType": "t3.nano", "regionCode": "us-east-1" } },
                "terms": { "OnDemand": {} }
            }),
        ],
        vec![json!({
            "product": { "attributes": { "instanceType": "m5.large", "regionCode": "us-east-1" } },
            "terms": { "OnDemand": {} }
        })],
    ])
}
