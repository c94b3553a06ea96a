use serde::{Deserialize, Serialize};

/// Credentials for `POST /api/auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

/// Payload for `POST /api/auth/signup`.
#[derive(Debug, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_metadata: Option<serde_json::Value>,
}

/// Response from login and token refresh.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub refresh_token: String,
    /// Present on login, absent on refresh.
    #[serde(default)]
    pub user: serde_json::Value,
}

/// Response from signup.
#[derive(Debug, Deserialize)]
pub struct SignupResponse {
    pub message: String,
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_omits_absent_metadata() {
        let request = SignupRequest {
            email: "a@b.c".to_string(),
            password: "secret".to_string(),
            user_metadata: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("user_metadata").is_none());
    }

    #[test]
    fn test_token_response_without_user_field() {
        let json = r#"{
            "access_token": "tok",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "ref"
        }"#;
        let response: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.access_token, "tok");
        assert!(response.user.is_null());
    }
}
