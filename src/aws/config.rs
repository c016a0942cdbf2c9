use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use aws_credential_types::Credentials;
use config::{Value, ValueKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AwsConfig {
    /// Static secrets supplied at startup from the configuration source.
    Keys {
        access_key_id: String,
        secret_access_key: String,
    },
    Profile(String),
    Env,
}

impl fmt::Display for AwsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AwsConfig::Keys { access_key_id, .. } => write!(f, "keys:{}", access_key_id),
            AwsConfig::Profile(profile) => write!(f, "profile:{}", profile),
            AwsConfig::Env => write!(f, "env"),
        }
    }
}

impl From<AwsConfig> for ValueKind {
    fn from(value: AwsConfig) -> Self {
        match value {
            AwsConfig::Keys {
                access_key_id,
                secret_access_key,
            } => {
                let mut keys = HashMap::new();
                keys.insert(
                    "access_key_id".to_string(),
                    Value::new(None, Self::String(access_key_id)),
                );
                keys.insert(
                    "secret_access_key".to_string(),
                    Value::new(None, Self::String(secret_access_key)),
                );
                let mut table = HashMap::new();
                table.insert("keys".to_string(), Value::new(None, Self::Table(keys)));
                Self::Table(table)
            }
            AwsConfig::Profile(profile) => {
                let mut table = HashMap::new();
                table.insert(
                    "profile".to_string(),
                    Value::new(None, Self::String(profile)),
                );
                Self::Table(table)
            }
            AwsConfig::Env => Self::String("env".to_string()),
        }
    }
}

//AWS SDK may fallback to IMDS if running inside EC2.
pub async fn get_initialized_aws_conf(
    initialization_conf: AwsConfig,
    region: impl Into<String>,
) -> Option<SdkConfig> {
    let config_loader = aws_config::defaults(BehaviorVersion::latest());
    let loader = match initialization_conf {
        AwsConfig::Keys {
            access_key_id,
            secret_access_key,
        } => {
            tracing::debug!("Trying to load AWS config using static access keys");
            config_loader.credentials_provider(Credentials::new(
                access_key_id,
                secret_access_key,
                None,
                None,
                "pricing-bridge-static",
            ))
        }
        AwsConfig::Profile(profile) => {
            tracing::debug!("Trying to load AWS config using profile '{}'", profile);
            config_loader.profile_name(profile)
        }
        AwsConfig::Env => {
            tracing::debug!("Trying to load AWS config from environment (EC2/IMDS)");
            aws_config::from_env()
        }
    };

    let config = loader.region(Region::new(region.into())).load().await;
    let credentials_provider = config.credentials_provider()?;

    match credentials_provider.provide_credentials().await {
        Ok(_) => {
            tracing::debug!("Successfully retrieved AWS credentials");
            Some(config)
        }
        Err(err) => {
            tracing::warn!("Failed to get AWS credentials: {:?}", err);
            None
        }
    }
}

pub async fn resolve_available_aws_config(conf: AwsConfig, region: &str) -> Option<SdkConfig> {
    match &conf {
        AwsConfig::Env => {}
        other => {
            let label = other.to_string();
            let resolved = get_initialized_aws_conf(conf.clone(), region).await;
            if resolved.is_some() {
                tracing::info!("Resolved AWS credentials using '{}'", label);
                return resolved;
            }
            tracing::warn!("Failed to resolve credentials using '{}'", label);
        }
    }

    let env_conf = get_initialized_aws_conf(AwsConfig::Env, region).await;
    if env_conf.is_some() {
        tracing::info!("Resolved AWS credentials using environment.");
        return env_conf;
    }

    tracing::warn!("Could not resolve AWS credentials from configuration or environment.");
    None
}

pub fn get_aws_default_profile() -> String {
    match dirs::home_dir() {
        None => "default",
        Some(path) => {
            if std::fs::read_to_string(path.join(".aws/credentials"))
                .unwrap_or_default()
                .contains("[me]")
            {
                "me"
            } else {
                "default"
            }
        }
    }
    .to_string()
}
