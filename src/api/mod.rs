mod client;
mod login;
mod oauth_client;

pub use client::{ApiClient, Tenant, TENANT_ENDPOINT};
pub use login::{LoginCredentials, LoginPage, DEFAULT_API_HOST};
pub use oauth_client::{obtain_access_token, ACCESS_TOKEN_ENDPOINT};

use reqwest::StatusCode;

/// Possible error types while logging in.
/// Each message is what the user is shown.
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Unable to reach the login server.")]
    Reqwest(#[from] reqwest::Error),
    #[error("Login failed ({0}). Please check your username and password.")]
    Rejected(StatusCode),
    #[error("Unexpected response from the login server.")]
    Decode(#[source] reqwest::Error),
    #[error("Login failed: no access token was issued.")]
    MissingToken,
    #[error("Unable to load tenant details ({0}).")]
    Tenant(StatusCode),
}
