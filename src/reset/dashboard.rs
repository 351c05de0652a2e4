/// Known tenant backends and the dashboard each one redirects to.
const DASHBOARDS: [(&str, &str); 3] = [
    ("https://dev.hennypenny.com", "https://dashboard-dev.hennylink.com/"),
    (
        "https://dashboard.hennypenny.com",
        "https://dashboard-test.hennylink.com/",
    ),
    ("https://prod.hennypenny.com", "https://dashboard.hennylink.com/"),
];

/// Determines where the user should land after a successful reset.
///
/// Unknown tenants are sent to their own login page.
pub fn resolve_dashboard_url(tenant_domain: &str) -> String {
    let normalized = tenant_domain.strip_suffix('/').unwrap_or(tenant_domain);

    DASHBOARDS
        .iter()
        .find(|(domain, _)| *domain == normalized)
        .map(|(_, dashboard)| dashboard.to_string())
        .unwrap_or_else(|| format!("{normalized}/login"))
}

#[cfg(test)]
mod tests {
    use super::resolve_dashboard_url;

    #[test]
    fn known_tenants() {
        assert_eq!(
            resolve_dashboard_url("https://prod.hennypenny.com/"),
            "https://dashboard.hennylink.com/"
        );
        assert_eq!(
            resolve_dashboard_url("https://dev.hennypenny.com"),
            "https://dashboard-dev.hennylink.com/"
        );
        assert_eq!(
            resolve_dashboard_url("https://dashboard.hennypenny.com/"),
            "https://dashboard-test.hennylink.com/"
        );
    }

    #[test]
    fn unknown_tenant_falls_back_to_login() {
        assert_eq!(
            resolve_dashboard_url("https://unknown.example.com"),
            "https://unknown.example.com/login"
        );
        assert_eq!(
            resolve_dashboard_url("https://unknown.example.com/"),
            "https://unknown.example.com/login"
        );
    }

    #[test]
    fn only_one_trailing_slash_is_stripped() {
        assert_eq!(
            resolve_dashboard_url("https://prod.hennypenny.com//"),
            "https://prod.hennypenny.com//login"
        );
    }
}
