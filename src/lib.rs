pub mod aws;
pub mod bridge;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod logging;
pub mod pricing;
