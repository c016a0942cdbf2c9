use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn setup_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr);

    let subscriber = tracing_subscriber::registry().with(filter).with(stderr_layer);

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    Ok(())
}
