use crate::core::config::AppConfig;
use crate::core::error::Result;
use crate::features::auth::dto::{LoginRequest, SignupRequest, SignupResponse, TokenResponse};
use crate::features::auth::http::AuthorizedClient;

/// Service for the authentication endpoints of the Kurasi Map API.
pub struct AuthService {
    client: AuthorizedClient,
    config: AppConfig,
}

impl AuthService {
    pub fn new(client: AuthorizedClient, config: AppConfig) -> Self {
        Self { client, config }
    }

    /// Log in with email and password.
    ///
    /// The returned access token is stored in the session so subsequent
    /// authorized requests carry it.
    pub async fn login(&self, email: &str, password: &str, remember: bool) -> Result<TokenResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
            remember,
        };

        let response: TokenResponse = self
            .client
            .post_json(&self.config.api_url("/api/auth/login"), &request)
            .await?;

        self.client.session().store_token(&response.access_token);
        tracing::info!(
            "Login successful, token expires in {} seconds",
            response.expires_in
        );
        Ok(response)
    }

    /// Create a new account.
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        user_metadata: Option<serde_json::Value>,
    ) -> Result<SignupResponse> {
        let request = SignupRequest {
            email: email.to_string(),
            password: password.to_string(),
            user_metadata,
        };

        self.client
            .post_json(&self.config.api_url("/api/auth/signup"), &request)
            .await
    }

    /// Invalidate the session server-side, then clear the local token.
    ///
    /// The local token is cleared even when the server call fails.
    pub async fn logout_remote(&self) -> Result<()> {
        let result: Result<serde_json::Value> = self
            .client
            .post_json(&self.config.api_url("/api/auth/logout"), &serde_json::json!({}))
            .await;

        self.client.session().clear_token();
        result.map(|_| ())
    }

    /// Exchange a refresh token for a new access token and store it.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenResponse> {
        let body = serde_json::json!({ "refresh_token": refresh_token });
        let response: TokenResponse = self
            .client
            .post_json(&self.config.api_url("/api/auth/refresh"), &body)
            .await?;

        self.client.session().store_token(&response.access_token);
        tracing::debug!("Access token refreshed");
        Ok(response)
    }

    /// The current user's profile, per the stored token.
    pub async fn current_user(&self) -> Result<serde_json::Value> {
        self.client
            .get_json(&self.config.api_url("/api/auth/user"))
            .await
    }
}
