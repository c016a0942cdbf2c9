use anyhow::{Context, Result};
use config::{Config as RConfig, Environment, File};
use serde::{Deserialize, Serialize};

use crate::aws::config::{get_aws_default_profile, AwsConfig};
use crate::constants::{
    AWS_REGION, CONFIG_FILE_NAME, DEFAULT_CHANNEL_CAPACITY, DEFAULT_MAX_RESULTS, ENV_PREFIX,
};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    pub aws_init_type: AwsConfig,
    pub aws_region: String,
    pub max_results: i32,
    pub channel_capacity: usize,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, overlaid by an optional toml file and `PRICING_BRIDGE_*`
    /// environment variables. Static access keys arrive through these
    /// sources, never through code.
    pub fn load_config(file: Option<&str>) -> Result<Config> {
        let mut builder = RConfig::builder();

        builder = builder
            .set_default(
                "aws_init_type",
                AwsConfig::Profile(get_aws_default_profile()),
            )?
            .set_default("aws_region", AWS_REGION)?
            .set_default("max_results", DEFAULT_MAX_RESULTS as i64)?
            .set_default("channel_capacity", DEFAULT_CHANNEL_CAPACITY as i64)?;

        builder = match file {
            Some(path) => builder.add_source(File::with_name(path)),
            None => builder.add_source(File::with_name(CONFIG_FILE_NAME).required(false)),
        };
        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX));

        builder
            .build()
            .context("failed to assemble configuration")?
            .try_deserialize()
            .context("failed to deserialize configuration")
    }

    pub fn load_default_config() -> Result<Config> {
        Self::load_config(None)
    }
}
