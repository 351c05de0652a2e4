use super::{obtain_access_token, ApiClient, LoginError};
use secrecy::SecretString;
use tracing::info;

/// The API host all logins are made against.
pub const DEFAULT_API_HOST: &str = "https://dev.hennypenny.com";

/// The user's username and password, in a struct out of ease.
#[derive(Debug, Default)]
pub struct LoginCredentials {
    pub username: String,
    pub password: SecretString,
}

/// A login in progress.
///
/// ``submit`` borrows the page mutably, so only one login can be outstanding.
pub struct LoginPage {
    host: String,
    pub credentials: LoginCredentials,
    http: reqwest::Client,
}

impl LoginPage {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            credentials: LoginCredentials::default(),
            http: reqwest::Client::new(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Exchanges the credentials for a token, then loads the tenant it belongs to.
    ///
    /// The returned client carries both the bearer token and the tenant name.
    pub async fn submit(&mut self) -> Result<ApiClient, LoginError> {
        let access_token = obtain_access_token(&self.http, &self.host, &self.credentials).await?;

        let mut client = ApiClient::new(self.http.clone(), &self.host, access_token);
        let tenant = client.load_tenant().await?;
        info!("logged in to tenant {}", tenant.name);

        Ok(client)
    }
}
