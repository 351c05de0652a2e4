use super::{LoginCredentials, LoginError};
use reqwest::header;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{debug, error, info_span, Instrument};

/// The endpoint leveraged for obtaining an access token.
pub const ACCESS_TOKEN_ENDPOINT: &str = "/tenant/oauth/token";

/// The platform expects the grant type in upper case.
const PASSWORD_GRANT: &str = "PASSWORD";

/// The fields we care about from the token response.
/// Anything else the host sends back is ignored.
#[derive(Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    token_type: Option<String>,
}

/// Exchanges a username and password for a bearer token via the password grant.
pub async fn obtain_access_token(
    client: &reqwest::Client,
    host: &str,
    credentials: &LoginCredentials,
) -> Result<SecretString, LoginError> {
    let url = format!("{}{ACCESS_TOKEN_ENDPOINT}", host.trim_end_matches('/'));
    debug!("access token URL: {}, username: {}", url, credentials.username);

    let span = info_span!("oauth.token", http.method = "POST", url = %url);
    let response = client
        .post(&url)
        .header(header::ACCEPT, "application/json")
        .form(&[
            ("grant_type", PASSWORD_GRANT),
            ("username", credentials.username.as_str()),
            ("password", credentials.password.expose_secret()),
        ])
        .send()
        .instrument(span)
        .await?;

    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        error!("login rejected: {status} - {text}");
        return Err(LoginError::Rejected(status));
    }

    let body: TokenResponse = response.json().await.map_err(|err| {
        error!("unreadable token response: {err}");
        LoginError::Decode(err)
    })?;
    if let Some(token_type) = &body.token_type {
        if !token_type.eq_ignore_ascii_case("bearer") {
            debug!("unexpected token type: {}", token_type);
        }
    }

    match body.access_token {
        Some(token) if !token.is_empty() => Ok(SecretString::from(token)),
        _ => Err(LoginError::MissingToken),
    }
}
