//! BaaS REST client. Two flavours share one type: the anon client (row-level security applies)
//! and the service-role client, which bypasses row-level security and is only built server-side.

use crate::config::BaasConfig;
use crate::error::{BaasError, ConfigError};
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BaasRole {
    Anon,
    ServiceRole,
}

#[derive(Clone)]
pub struct BaasClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    role: BaasRole,
}

impl std::fmt::Debug for BaasClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BaasClient")
            .field("base_url", &self.base_url)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

impl BaasClient {
    pub fn anon(config: &BaasConfig) -> Result<Self, ConfigError> {
        let url = config.url.as_deref().ok_or(ConfigError::Missing("SUPABASE_URL"))?;
        let key = config.anon_key.as_deref().ok_or(ConfigError::Missing("SUPABASE_ANON_KEY"))?;
        Ok(Self::build(url, key, BaasRole::Anon))
    }

    /// Privileged client. Missing credentials are a startup error, not something to retry.
    pub fn service_role(config: &BaasConfig) -> Result<Self, ConfigError> {
        let url = config.url.as_deref().ok_or(ConfigError::Missing("SUPABASE_URL"))?;
        let key = config
            .service_role_key
            .as_deref()
            .ok_or(ConfigError::Missing("SUPABASE_SERVICE_ROLE_KEY"))?;
        Ok(Self::build(url, key, BaasRole::ServiceRole))
    }

    fn build(url: &str, key: &str, role: BaasRole) -> Self {
        BaasClient {
            http: reqwest::Client::new(),
            base_url: url.trim_end_matches('/').to_string(),
            api_key: key.to_string(),
            role,
        }
    }

    pub fn role(&self) -> BaasRole {
        self.role
    }

    /// PostgREST endpoint for a table.
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Insert one row and return the stored representation as the BaaS sends it.
    pub async fn insert(&self, table: &str, row: &Value) -> Result<Value, BaasError> {
        tracing::debug!(table, role = ?self.role, "baas insert");
        let response = self
            .http
            .post(self.table_url(table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
            .json(row)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BaasError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<Value>().await?)
    }
}
