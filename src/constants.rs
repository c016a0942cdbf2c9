/// Region the pricing catalog endpoint lives in.
pub const AWS_REGION: &str = "us-east-1";

/// Page size requested when the caller does not specify one.
pub const DEFAULT_MAX_RESULTS: i32 = 10;

/// Capacity of each bridge port channel.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

pub const CONFIG_FILE_NAME: &str = "pricing-bridge.toml";
pub const ENV_PREFIX: &str = "PRICING_BRIDGE";
