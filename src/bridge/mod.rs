//! Pricing bridge: ports between the application layer and the catalog


use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::catalog::ProductSource;
use crate::pricing::{ProductPage, ProductQuery};

/// Inbound port payload: continuation cursor from a prior page (absent for
/// the first page) and the requested page size. Not validated further.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRequest {
    pub next_token: Option<String>,
    pub max_results: i32,
}

impl From<(Option<String>, i32)> for ProductRequest {
    fn from((next_token, max_results): (Option<String>, i32)) -> Self {
        Self {
            next_token,
            max_results,
        }
    }
}

/// Failure notification, delivered on its own port so a failed request is
/// distinguishable from one still pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingFailure {
    /// Token of the request that failed.
    pub next_token: Option<String>,
    pub error: String,
}

/// Application-layer end of the bridge.
pub struct BridgePorts {
    pub requests: mpsc::Sender<ProductRequest>,
    pub products: mpsc::Receiver<ProductPage>,
    pub failures: mpsc::Receiver<PricingFailure>,
}

/// Forwards each inbound request to the catalog and each result back out.
///
/// Requests are stateless and uncoordinated: every one spawns its own task
/// issuing exactly one catalog call, so overlapping requests complete in
/// whatever order the calls finish. No dedup, no retry, no cancellation.
pub struct PricingBridge {
    source: Arc<ProductSource>,
    requests: mpsc::Receiver<ProductRequest>,
    products: mpsc::Sender<ProductPage>,
    failures: mpsc::Sender<PricingFailure>,
}

impl PricingBridge {
    pub fn new(source: ProductSource, capacity: usize) -> (Self, BridgePorts) {
        let (requests_tx, requests_rx) = mpsc::channel(capacity);
        let (products_tx, products_rx) = mpsc::channel(capacity);
        let (failures_tx, failures_rx) = mpsc::channel(capacity);

        let bridge = Self {
            source: Arc::new(source),
            requests: requests_rx,
            products: products_tx,
            failures: failures_tx,
        };
        let ports = BridgePorts {
            requests: requests_tx,
            products: products_rx,
            failures: failures_rx,
        };
        (bridge, ports)
    }

    /// Consume inbound requests until the request port closes. The bridge
    /// itself never fails; per-request errors are logged and delivered on
    /// the failures port.
    pub async fn run(mut self) {
        while let Some(request) = self.requests.recv().await {
            let source = Arc::clone(&self.source);
            let products = self.products.clone();
            let failures = self.failures.clone();

            tokio::spawn(async move {
                handle_get_products(request, source, products, failures).await;
            });
        }
        tracing::debug!("request port closed, bridge stopping");
    }
}

/// One request, one catalog call, at most one outbound delivery.
async fn handle_get_products(
    request: ProductRequest,
    source: Arc<ProductSource>,
    products: mpsc::Sender<ProductPage>,
    failures: mpsc::Sender<PricingFailure>,
) {
    let query = ProductQuery::new(request.next_token.clone(), request.max_results);

    match source.get_products(&query).await {
        Ok(page) => {
            if products.send(page).await.is_err() {
                tracing::debug!("products port closed, dropping page");
            }
        }
        Err(err) => {
            tracing::error!(
                next_token = request.next_token.as_deref(),
                "GetProducts failed: {err:#}"
            );
            let notification = PricingFailure {
                next_token: request.next_token,
                error: format!("{err:#}"),
            };
            if failures.send(notification).await.is_err() {
                tracing::debug!("failures port closed, dropping notification");
            }
        }
    }
}
