use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::error::{AppError, Result};
use crate::features::auth::session::SessionStore;
use crate::shared::types::ApiErrorBody;

/// HTTP client that injects the session's bearer token into every request.
///
/// Single-shot passthrough over the platform fetch primitive: no retry, no
/// timeout, no response caching.
#[derive(Clone)]
pub struct AuthorizedClient {
    http: reqwest::Client,
    session: SessionStore,
}

impl AuthorizedClient {
    pub fn new(session: SessionStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            session,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Start a request to `url`.
    ///
    /// When a token is stored the builder already carries
    /// `Authorization: Bearer <token>`; headers the caller chains onto the
    /// returned builder are preserved either way.
    pub fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// GET a JSON resource.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.request(Method::GET, url).send().await?;
        Self::parse_json(response).await
    }

    /// Send a prepared request builder and parse a JSON response.
    pub async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        Self::parse_json(response).await
    }

    /// POST a JSON body and parse a JSON response.
    pub async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.request(Method::POST, url).json(body).send().await?;
        Self::parse_json(response).await
    }

    /// PUT a JSON body and parse a JSON response.
    pub async fn put_json<B, T>(&self, url: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.request(Method::PUT, url).json(body).send().await?;
        Self::parse_json(response).await
    }

    /// DELETE a resource, expecting an empty success body.
    pub async fn delete(&self, url: &str) -> Result<()> {
        let response = self.request(Method::DELETE, url).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let response = Self::check(response).await?;
        response.json::<T>().await.map_err(|e| {
            tracing::error!("Failed to parse API response: {}", e);
            AppError::Http(e)
        })
    }

    /// Map non-success statuses to typed errors, extracting the API `detail`
    /// message when present.
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(err) if !err.detail.is_empty() => err.detail,
            _ => format!("HTTP {}", status.as_u16()),
        };
        tracing::error!("API error: HTTP {} - {}", status, message);

        Err(status_error(status.as_u16(), message))
    }
}

fn status_error(status: u16, message: String) -> AppError {
    match status {
        401 => AppError::Unauthorized(message),
        403 => AppError::Forbidden(message),
        404 => AppError::NotFound(message),
        status => AppError::Api { status, message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::memory_session;

    #[test]
    fn test_bearer_header_applied_when_token_stored() {
        let session = memory_session();
        session.store_token("tok-abc");
        let client = AuthorizedClient::new(session);

        let request = client
            .request(Method::GET, "http://localhost/api/locations")
            .build()
            .unwrap();

        assert_eq!(
            request.headers().get("authorization").unwrap(),
            "Bearer tok-abc"
        );
    }

    #[test]
    fn test_no_authorization_header_without_token() {
        let client = AuthorizedClient::new(memory_session());

        let request = client
            .request(Method::GET, "http://localhost/api/categories")
            .build()
            .unwrap();

        assert!(request.headers().get("authorization").is_none());
    }

    #[test]
    fn test_caller_headers_are_preserved() {
        let session = memory_session();
        session.store_token("tok-abc");
        let client = AuthorizedClient::new(session);

        let request = client
            .request(Method::POST, "http://localhost/api/locations")
            .header("X-Requested-With", "kurasi-map")
            .build()
            .unwrap();

        let headers = request.headers();
        assert_eq!(headers.get("authorization").unwrap(), "Bearer tok-abc");
        assert_eq!(headers.get("x-requested-with").unwrap(), "kurasi-map");
    }

    #[test]
    fn test_status_error_mapping() {
        assert!(matches!(
            status_error(401, "no".into()),
            AppError::Unauthorized(_)
        ));
        assert!(matches!(
            status_error(403, "no".into()),
            AppError::Forbidden(_)
        ));
        assert!(matches!(
            status_error(404, "no".into()),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            status_error(500, "no".into()),
            AppError::Api { status: 500, .. }
        ));
    }
}
