//! Payload types crossing the port boundary

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One page of the product catalog, delivered to the application layer as a
/// structured object. Entries are the catalog's price-list documents parsed
/// into JSON values but otherwise unmodified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub price_list: Vec<Value>,
    /// Continuation cursor for the next page, absent on the last page.
    pub next_token: Option<String>,
}

impl ProductPage {
    pub fn is_last(&self) -> bool {
        self.next_token.is_none()
    }
}
