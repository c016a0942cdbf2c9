//! Product catalog sources behind the bridge

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{bail, Result};

use crate::pricing::{PricingClient, ProductPage, ProductQuery};

/// Where product pages come from. `Live` talks to the AWS Pricing API;
/// `Replay` serves scripted pages from memory, for offline runs and tests.
pub enum ProductSource {
    Live(PricingClient),
    Replay(ReplaySource),
}

impl ProductSource {
    pub async fn get_products(&self, query: &ProductQuery) -> Result<ProductPage> {
        match self {
            ProductSource::Live(client) => client.get_products(query).await,
            ProductSource::Replay(replay) => replay.get_products(query).await,
        }
    }
}

enum ReplayOutcome {
    Page(ProductPage),
    Failure(String),
}

struct ReplayEntry {
    outcome: ReplayOutcome,
    delay: Option<Duration>,
}

/// In-memory catalog keyed by continuation token. Every served query is
/// recorded, so callers can assert how many calls a scenario produced.
#[derive(Clone, Default)]
pub struct ReplaySource {
    entries: Arc<Mutex<HashMap<Option<String>, ReplayEntry>>>,
    served: Arc<Mutex<Vec<ProductQuery>>>,
}

impl ReplaySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a chain of pages: each page links to the next via a generated
    /// token, the last page carries no token.
    pub fn with_pages(pages: Vec<Vec<serde_json::Value>>) -> Self {
        let source = Self::new();
        let total = pages.len();
        for (index, price_list) in pages.into_iter().enumerate() {
            let token = (index > 0).then(|| format!("page-{}", index));
            let next_token = (index + 1 < total).then(|| format!("page-{}", index + 1));
            source.insert_page(
                token,
                ProductPage {
                    price_list,
                    next_token,
                },
            );
        }
        source
    }

    pub fn insert_page(&self, token: Option<String>, page: ProductPage) {
        self.entries.lock().unwrap().insert(
            token,
            ReplayEntry {
                outcome: ReplayOutcome::Page(page),
                delay: None,
            },
        );
    }

    pub fn insert_page_with_delay(&self, token: Option<String>, page: ProductPage, delay: Duration) {
        self.entries.lock().unwrap().insert(
            token,
            ReplayEntry {
                outcome: ReplayOutcome::Page(page),
                delay: Some(delay),
            },
        );
    }

    pub fn insert_failure(&self, token: Option<String>, message: impl Into<String>) {
        self.entries.lock().unwrap().insert(
            token,
            ReplayEntry {
                outcome: ReplayOutcome::Failure(message.into()),
                delay: None,
            },
        );
    }

    /// Queries served so far, in arrival order.
    pub fn served_queries(&self) -> Vec<ProductQuery> {
        self.served.lock().unwrap().clone()
    }

    async fn get_products(&self, query: &ProductQuery) -> Result<ProductPage> {
        self.served.lock().unwrap().push(query.clone());

        let (outcome, delay) = {
            let entries = self.entries.lock().unwrap();
            match entries.get(&query.next_token) {
                Some(entry) => (
                    match &entry.outcome {
                        ReplayOutcome::Page(page) => Ok(page.clone()),
                        ReplayOutcome::Failure(message) => Err(message.clone()),
                    },
                    entry.delay,
                ),
                // Unknown token: serve an empty last page.
                None => (Ok(ProductPage::default()), None),
            }
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match outcome {
            Ok(page) => Ok(page),
            Err(message) => bail!("replayed catalog failure: {message}"),
        }
    }
}
