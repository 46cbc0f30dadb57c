//! Shared application state for all routes. Clients are built once at startup and shared by reference.

use crate::baas::BaasClient;
use crate::config::AppConfig;
use crate::store::HotelStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn HotelStore>,
    pub config: Arc<AppConfig>,
    /// Service-role client; only present when BaaS credentials are configured.
    pub baas: Option<BaasClient>,
    pub storage: Option<aws_sdk_s3::Client>,
}

impl AppState {
    pub fn new(store: Arc<dyn HotelStore>, config: AppConfig) -> Self {
        AppState {
            store,
            config: Arc::new(config),
            baas: None,
            storage: None,
        }
    }

    pub fn with_baas(mut self, client: BaasClient) -> Self {
        self.baas = Some(client);
        self
    }

    pub fn with_storage(mut self, client: aws_sdk_s3::Client) -> Self {
        self.storage = Some(client);
        self
    }
}
