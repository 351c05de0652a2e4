use super::ResetError;
use crate::strength::StrengthTier;
use reqwest::{header, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, info_span, Instrument};

/// The path, relative to the tenant domain, that accepts reset requests.
pub const PASSWORD_RESET_PATH: &str = "/user/passwordReset";

/// How long we wait on the tenant before giving up.
pub const RESET_TIMEOUT: Duration = Duration::from_secs(10);

/// The body the tenant expects for a reset.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordResetRequest<'a> {
    token: &'a str,
    email: &'a str,
    new_password: &'a str,
    password_strength: StrengthTier,
}

/// Everything needed to issue a single reset request.
pub struct ResetSubmission<'a> {
    pub tenant_domain: &'a str,
    pub token: &'a str,
    pub email: &'a str,
    pub new_password: &'a SecretString,
    pub strength: StrengthTier,
}

/// Creates a client preconfigured for reset requests.
pub fn reset_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().timeout(RESET_TIMEOUT).build()
}

/// Joins the tenant domain with the reset path, tolerating a trailing slash.
pub fn reset_endpoint(tenant_domain: &str) -> String {
    format!(
        "{}{PASSWORD_RESET_PATH}",
        tenant_domain.trim_end_matches('/')
    )
}

/// Posts the reset request to the tenant.
///
/// Only 200 and 201 count as success. Whatever went wrong otherwise is
/// logged here and collapsed into ``ResetError::Failed``, as the user is
/// only ever told to try again.
pub async fn post_password_reset(
    client: &reqwest::Client,
    submission: ResetSubmission<'_>,
) -> Result<(), ResetError> {
    let endpoint = reset_endpoint(submission.tenant_domain);
    debug!("password reset endpoint: {}", endpoint);

    let body = PasswordResetRequest {
        token: submission.token,
        email: submission.email,
        new_password: submission.new_password.expose_secret(),
        password_strength: submission.strength,
    };

    let span = info_span!("reset.password", http.method = "POST", url = %endpoint);
    let result = client
        .post(&endpoint)
        .header(header::CONTENT_TYPE, "application/json")
        .json(&body)
        .send()
        .instrument(span)
        .await;

    let response = match result {
        Ok(response) => response,
        Err(err) => {
            error!("Reset password failed: {err}");
            return Err(ResetError::Failed);
        }
    };

    match response.status() {
        StatusCode::OK | StatusCode::CREATED => Ok(()),
        status => {
            let text = response.text().await.unwrap_or_default();
            error!("Reset password failed: {status} - {text}");
            Err(ResetError::Failed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::reset_endpoint;

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        assert_eq!(
            reset_endpoint("https://prod.hennypenny.com/"),
            "https://prod.hennypenny.com/user/passwordReset"
        );
        assert_eq!(
            reset_endpoint("http://127.0.0.1:8080"),
            "http://127.0.0.1:8080/user/passwordReset"
        );
    }
}
