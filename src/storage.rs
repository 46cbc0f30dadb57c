//! Object-storage client construction.

use crate::config::StorageConfig;
use crate::error::ConfigError;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::{Builder, Credentials, Region};
use aws_sdk_s3::Client;

const CREDENTIALS_PROVIDER: &str = "hotel-portal-env";

/// Build an S3 client. Static credentials are used when both keys are set; otherwise the default
/// AWS provider chain (profile, web identity, instance metadata) resolves them.
pub async fn build_client(config: &StorageConfig) -> Result<Client, ConfigError> {
    let region = config.region.clone().ok_or(ConfigError::Missing("AWS_REGION"))?;
    let builder = match (&config.access_key_id, &config.secret_access_key) {
        (Some(access_key), Some(secret)) => static_builder(access_key, secret, region),
        (Some(_), None) => return Err(ConfigError::Missing("AWS_SECRET_ACCESS_KEY")),
        (None, Some(_)) => return Err(ConfigError::Missing("AWS_ACCESS_KEY_ID")),
        (None, None) => {
            let shared = aws_config::defaults(BehaviorVersion::latest())
                .region(Region::new(region))
                .load()
                .await;
            Builder::from(&shared)
        }
    };
    let mut builder = builder.force_path_style(config.force_path_style);
    if let Some(endpoint) = &config.endpoint {
        builder = builder.endpoint_url(endpoint);
    }
    tracing::info!(
        endpoint = config.endpoint.as_deref().unwrap_or("aws"),
        path_style = config.force_path_style,
        "object storage client configured"
    );
    Ok(Client::from_conf(builder.build()))
}

fn static_builder(access_key: &str, secret: &str, region: String) -> Builder {
    let credentials = Credentials::new(access_key, secret, None, None, CREDENTIALS_PROVIDER);
    Builder::new()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new(region))
        .credentials_provider(credentials)
}
