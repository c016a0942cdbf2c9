//! Fixed-shape GetProducts query construction

use aws_sdk_pricing::types::{Filter as PricingFilter, FilterType as PricingFilterType};

/// Service code the catalog is pinned to. Only the token and page size
/// vary per call; everything else in the query is constant.
pub const SERVICE_CODE: &str = "AmazonEC2";

/// Price-list format version requested from the catalog.
pub const FORMAT_VERSION: &str = "aws_v1";

/// Per-call query parameters. Derived from an inbound request; the filter
/// set and service code are fixed and not part of this struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub next_token: Option<String>,
    pub max_results: i32,
}

impl ProductQuery {
    pub fn new(next_token: Option<String>, max_results: i32) -> Self {
        Self {
            next_token,
            max_results,
        }
    }

    /// The constant filter list: a single TERM_MATCH pin of `ServiceCode`
    /// to [`SERVICE_CODE`], regardless of input.
    pub fn filters() -> Vec<PricingFilter> {
        vec![PricingFilter::builder()
            .field("ServiceCode".to_string())
            .value(SERVICE_CODE.to_string())
            .r#type(PricingFilterType::TermMatch)
            .build()
            .expect("failed to build ServiceCode filter")]
    }
}
