mod dashboard;
mod http_client;
mod link;

pub use dashboard::resolve_dashboard_url;
pub use http_client::{reset_client, reset_endpoint, PASSWORD_RESET_PATH, RESET_TIMEOUT};
pub use link::ResetLink;

use crate::strength::calculate_strength;
use http_client::ResetSubmission;
use secrecy::{ExposeSecret, SecretString};
use tracing::info;

/// Reasons a reset was not carried out.
/// Each message is what the user is shown.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ResetError {
    #[error("Reset link is missing required details.")]
    MissingLinkDetails,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Reset failed. Please try again.")]
    Failed,
}

/// What the user has typed in so far.
#[derive(Debug, Default)]
pub struct ResetForm {
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

impl ResetForm {
    pub fn new(email: String, password: SecretString, confirm_password: SecretString) -> Self {
        Self {
            email,
            password,
            confirm_password,
        }
    }

    pub fn passwords_match(&self) -> bool {
        self.password.expose_secret() == self.confirm_password.expose_secret()
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_empty()
            && self.password.expose_secret().is_empty()
            && self.confirm_password.expose_secret().is_empty()
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A password reset in progress: the link it came from and the form.
///
/// ``submit`` borrows the page mutably, so a second submission cannot
/// start while one is outstanding; once it returns the page is usable again.
pub struct ResetPage {
    link: ResetLink,
    pub form: ResetForm,
    client: reqwest::Client,
}

impl ResetPage {
    /// Creates a page for the given link, using a client with the standard reset timeout.
    pub fn new(link: ResetLink) -> Result<Self, reqwest::Error> {
        Ok(Self::with_client(link, reset_client()?))
    }

    pub fn with_client(link: ResetLink, client: reqwest::Client) -> Self {
        Self {
            link,
            form: ResetForm::default(),
            client,
        }
    }

    pub fn link(&self) -> &ResetLink {
        &self.link
    }

    /// Validates the form and sends a single reset request.
    ///
    /// On success the form is cleared and the dashboard URL the user
    /// should continue at is returned. Validation failures never
    /// reach the network.
    pub async fn submit(&mut self) -> Result<String, ResetError> {
        if !self.link.is_complete() {
            return Err(ResetError::MissingLinkDetails);
        }
        if !self.form.passwords_match() {
            return Err(ResetError::PasswordMismatch);
        }

        let strength = calculate_strength(self.form.password.expose_secret());

        http_client::post_password_reset(
            &self.client,
            ResetSubmission {
                tenant_domain: &self.link.tenant_domain,
                token: &self.link.token,
                email: &self.form.email,
                new_password: &self.form.password,
                strength,
            },
        )
        .await?;
        self.form.clear();

        let dashboard_url = resolve_dashboard_url(&self.link.tenant_domain);
        info!("password reset accepted, continuing at {}", dashboard_url);
        Ok(dashboard_url)
    }
}
