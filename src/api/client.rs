use super::LoginError;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{debug, error, info_span, Instrument};

/// The path to the authenticated tenant's metadata.
pub const TENANT_ENDPOINT: &str = "/tenant/currentTenant";

/// Metadata about the tenant the user belongs to.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Tenant {
    pub name: String,
}

/// An authenticated handle against the API host.
///
/// This is owned by whoever logged in; a new login produces a new client.
#[derive(Debug)]
pub struct ApiClient {
    /// The base URL all requests are made against.
    host: String,
    /// The bearer credential issued at login.
    access_token: SecretString,
    /// Populated once tenant metadata has been fetched.
    tenant_name: Option<String>,
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates a new API client around the given access token.
    pub fn new(http: reqwest::Client, host: &str, access_token: SecretString) -> Self {
        Self {
            host: host.trim_end_matches('/').to_string(),
            access_token,
            tenant_name: None,
            http,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn access_token(&self) -> &SecretString {
        &self.access_token
    }

    pub fn tenant_name(&self) -> Option<&str> {
        self.tenant_name.as_deref()
    }

    /// Fetches the current tenant and records its name on this client.
    pub async fn load_tenant(&mut self) -> Result<Tenant, LoginError> {
        let url = format!("{}{TENANT_ENDPOINT}", self.host);
        debug!("tenant URL: {}", url);

        let span = info_span!("api.tenant", http.method = "GET", url = %url);
        let response = self
            .http
            .get(&url)
            .bearer_auth(self.access_token.expose_secret())
            .send()
            .instrument(span)
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            error!("tenant lookup failed: {status}");
            return Err(LoginError::Tenant(status));
        }

        let tenant: Tenant = response.json().await.map_err(|err| {
            error!("unreadable tenant response: {err}");
            LoginError::Decode(err)
        })?;
        self.tenant_name = Some(tenant.name.clone());
        Ok(tenant)
    }
}
