use super::prompt::{interactive_prompt, secret_prompt};
use crate::api::{LoginCredentials, LoginPage};
use crate::reset::{ResetError, ResetForm, ResetLink, ResetPage};
use crate::strength::{calculate_strength, checklist};
use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

/// What the user asked us to do.
pub enum Action {
    CheckPassword {
        password: Option<SecretString>,
    },
    ResetPassword {
        link: ResetLink,
        email: Option<String>,
        password: Option<SecretString>,
    },
    Login {
        host: String,
        username: Option<String>,
        password: Option<SecretString>,
    },
}

impl Action {
    /// Runs the action to completion.
    ///
    /// # Errors
    /// Returns the user-facing failure of whichever flow ran.
    pub async fn execute(self) -> Result<()> {
        match self {
            Action::CheckPassword { password } => {
                let password = match password {
                    Some(password) => password,
                    None => secret_prompt("Password")?,
                };
                print!("{}", render_checklist(password.expose_secret()));
                Ok(())
            }
            Action::ResetPassword {
                link,
                email,
                password,
            } => reset_password(link, email, password).await,
            Action::Login {
                host,
                username,
                password,
            } => login(host, username, password).await,
        }
    }
}

/// Renders the requirement checklist followed by the overall tier.
pub fn render_checklist(password: &str) -> String {
    let mut rendered = String::from("Password must meet the requirements below:\n");
    for item in checklist(password) {
        let mark = if item.met { "x" } else { " " };
        rendered.push_str(&format!("  [{mark}] {}\n", item.requirement.label()));
    }
    rendered.push_str(&format!("Strength: {}\n", calculate_strength(password)));
    rendered
}

async fn reset_password(
    link: ResetLink,
    email: Option<String>,
    password: Option<SecretString>,
) -> Result<()> {
    debug!(
        "reset link: token present: {}, tenant domain: {}",
        !link.token.is_empty(),
        link.tenant_domain
    );

    // No point asking for anything if the link can't be used.
    if !link.is_complete() {
        return Err(ResetError::MissingLinkDetails.into());
    }

    let email = match email {
        Some(email) => email,
        None => interactive_prompt("Enter your email")?,
    };

    // A password handed to us up front doubles as its own confirmation.
    let (password, confirm_password) = match password {
        Some(password) => (
            SecretString::from(password.expose_secret().to_string()),
            password,
        ),
        None => {
            let password = secret_prompt("Enter your password")?;
            eprint!("{}", render_checklist(password.expose_secret()));
            (password, secret_prompt("Confirm your password")?)
        }
    };

    let mut page = ResetPage::new(link).context("failed to create HTTP client")?;
    page.form = ResetForm::new(email, password, confirm_password);

    eprintln!("Resetting...");
    let dashboard_url = page.submit().await?;
    println!("{dashboard_url}");
    Ok(())
}

async fn login(
    host: String,
    username: Option<String>,
    password: Option<SecretString>,
) -> Result<()> {
    let username = match username {
        Some(username) => username,
        None => interactive_prompt("Username")?,
    };
    let password = match password {
        Some(password) => password,
        None => secret_prompt("Password")?,
    };

    let mut page = LoginPage::new(host);
    page.credentials = LoginCredentials { username, password };

    let client = page.submit().await?;
    if let Some(tenant_name) = client.tenant_name() {
        println!("{tenant_name}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checklist_marks_met_requirements() {
        let rendered = render_checklist("abcdEFGH");

        assert!(rendered.contains("[x] Must have at least 8 characters"));
        assert!(rendered.contains("[x] Include uppercase characters"));
        assert!(rendered.contains("[ ] Include numbers"));
        assert!(rendered.ends_with("Strength: YELLOW\n"));
    }

    #[tokio::test]
    async fn incomplete_link_fails_before_prompting() {
        let action = Action::ResetPassword {
            link: ResetLink::new("", "https://prod.hennypenny.com"),
            email: None,
            password: None,
        };

        let err = action.execute().await.unwrap_err();
        assert_eq!(err.to_string(), "Reset link is missing required details.");
    }
}
