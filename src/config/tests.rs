//! Tests for configuration loading

#[cfg(test)]
mod tests {
    use config::Config as RConfig;
    use serde::Deserialize;

    use crate::aws::config::AwsConfig;
    use crate::config::ConfigLoader;

    #[test]
    fn defaults_pin_region_and_page_size() {
        let config = ConfigLoader::load_default_config().unwrap();

        assert_eq!(config.aws_region, "us-east-1");
        assert_eq!(config.max_results, 10);
        assert_eq!(config.channel_capacity, 32);
        assert!(matches!(config.aws_init_type, AwsConfig::Profile(_)));
    }

    #[derive(Debug, Deserialize)]
    struct Holder {
        aws_init_type: AwsConfig,
    }

    #[test]
    fn static_keys_survive_the_config_layer() {
        let holder: Holder = RConfig::builder()
            .set_default(
                "aws_init_type",
                AwsConfig::Keys {
                    access_key_id: "AKIAEXAMPLE".into(),
                    secret_access_key: "shhh".into(),
                },
            )
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        match holder.aws_init_type {
            AwsConfig::Keys {
                access_key_id,
                secret_access_key,
            } => {
                assert_eq!(access_key_id, "AKIAEXAMPLE");
                assert_eq!(secret_access_key, "shhh");
            }
            other => panic!("expected keys variant, got {other}"),
        }
    }

    #[test]
    fn display_never_prints_the_secret() {
        let conf = AwsConfig::Keys {
            access_key_id: "AKIAEXAMPLE".into(),
            secret_access_key: "shhh".into(),
        };
        let rendered = conf.to_string();
        assert!(rendered.contains("AKIAEXAMPLE"));
        assert!(!rendered.contains("shhh"));
    }
}
