use url::Url;

/// Query parameter carrying the one-time reset token.
const TOKEN_PARAM: &str = "token";

/// Query parameter carrying the tenant's base URL.
const TENANT_DOMAIN_PARAM: &str = "tenantDomain";

/// The details carried by a password reset link.
///
/// Missing parameters are kept as empty strings; whether they are
/// present is only checked once the user submits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetLink {
    pub token: String,
    pub tenant_domain: String,
}

impl ResetLink {
    pub fn new(token: impl Into<String>, tenant_domain: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            tenant_domain: tenant_domain.into(),
        }
    }

    /// Extracts the token and tenant domain from a reset link's query.
    /// A repeated parameter keeps its first value.
    pub fn from_url(link: &Url) -> Self {
        let param = |name: &str| {
            link.query_pairs()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.into_owned())
                .unwrap_or_default()
        };

        Self {
            token: param(TOKEN_PARAM),
            tenant_domain: param(TENANT_DOMAIN_PARAM),
        }
    }

    /// Parses a link given as a string.
    pub fn parse(link: &str) -> Result<Self, url::ParseError> {
        Url::parse(link).map(|url| Self::from_url(&url))
    }

    pub fn is_complete(&self) -> bool {
        !self.token.is_empty() && !self.tenant_domain.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_both_parameters() {
        let link = ResetLink::parse(
            "https://reset.hennylink.com/?token=abc123&tenantDomain=https%3A%2F%2Fprod.hennypenny.com%2F",
        )
        .unwrap();

        assert_eq!(link.token, "abc123");
        assert_eq!(link.tenant_domain, "https://prod.hennypenny.com/");
        assert!(link.is_complete());
    }

    #[test]
    fn missing_parameters_are_empty() {
        let link = ResetLink::parse("https://reset.hennylink.com/?token=abc123").unwrap();

        assert_eq!(link.token, "abc123");
        assert_eq!(link.tenant_domain, "");
        assert!(!link.is_complete());
    }

    #[test]
    fn empty_parameters_are_incomplete() {
        let link = ResetLink::parse("https://reset.hennylink.com/?token=&tenantDomain=x").unwrap();
        assert!(!link.is_complete());
    }

    #[test]
    fn repeated_parameters_keep_the_first_value() {
        let link = ResetLink::parse(
            "https://reset.hennylink.com/?token=first&tenantDomain=https://dev.hennypenny.com&token=second",
        )
        .unwrap();

        assert_eq!(link.token, "first");
        assert_eq!(link.tenant_domain, "https://dev.hennypenny.com");
    }

    #[test]
    fn rejects_malformed_links() {
        assert!(ResetLink::parse("not a link").is_err());
    }
}
