//! AWS Pricing API client

use anyhow::{Context, Result};
use aws_config::SdkConfig;
use aws_sdk_pricing as pricing;

use super::query::{ProductQuery, FORMAT_VERSION, SERVICE_CODE};
use super::types::ProductPage;

/// Thin wrapper over the SDK pricing client. Constructed once at startup
/// and read-only afterwards; shared between in-flight requests.
pub struct PricingClient {
    client: pricing::Client,
}

impl PricingClient {
    pub fn new(conf: &SdkConfig) -> Self {
        Self {
            client: pricing::Client::new(conf),
        }
    }

    /// Issue one GetProducts call for the given page. No retry, no local
    /// timeout; whatever the SDK defaults enforce applies.
    pub async fn get_products(&self, query: &ProductQuery) -> Result<ProductPage> {
        let output = self
            .client
            .get_products()
            .service_code(SERVICE_CODE)
            .format_version(FORMAT_VERSION)
            .set_filters(Some(ProductQuery::filters()))
            .set_max_results(Some(query.max_results))
            .set_next_token(query.next_token.clone())
            .send()
            .await
            .context("GetProducts call failed")?;

        let price_list = output
            .price_list()
            .iter()
            .map(|product| {
                serde_json::from_str(product).context("price list entry is not valid JSON")
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ProductPage {
            price_list,
            next_token: output.next_token().map(str::to_string),
        })
    }
}
