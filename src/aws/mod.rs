pub mod config;

pub use config::{get_initialized_aws_conf, resolve_available_aws_config, AwsConfig};
