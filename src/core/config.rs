/// Runtime configuration for the client utilities.
///
/// The browser provides no process environment, so configuration is a plain
/// struct with documented defaults; pages that need different paths construct
/// their own value and pass it to `init_page`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL for API requests. Empty means same-origin relative paths.
    pub api_base_url: String,
    /// Path the logout handler navigates to after clearing the session.
    pub login_path: String,
    /// Anchor href that identifies the logout link on a page.
    pub logout_path: String,
    /// Directive for the tracing filter (same syntax as `RUST_LOG`).
    pub log_filter: String,
}

impl AppConfig {
    const DEFAULT_LOGIN_PATH: &'static str = "/login";
    const DEFAULT_LOGOUT_PATH: &'static str = "/logout";
    const DEFAULT_LOG_FILTER: &'static str = "info";
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            login_path: Self::DEFAULT_LOGIN_PATH.to_string(),
            logout_path: Self::DEFAULT_LOGOUT_PATH.to_string(),
            log_filter: Self::DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Build a full API URL from a path.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_same_origin() {
        let config = AppConfig::default();
        assert_eq!(config.api_url("/api/categories"), "/api/categories");
    }

    #[test]
    fn test_api_url_strips_trailing_slash() {
        let config = AppConfig {
            api_base_url: "https://api.kurasimap.example/".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(
            config.api_url("/api/locations"),
            "https://api.kurasimap.example/api/locations"
        );
    }
}
