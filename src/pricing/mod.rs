mod client;
mod query;
mod tests;
mod types;

pub use client::PricingClient;
pub use query::{ProductQuery, FORMAT_VERSION, SERVICE_CODE};
pub use types::ProductPage;
