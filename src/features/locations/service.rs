use reqwest::Method;

use crate::core::config::AppConfig;
use crate::core::error::Result;
use crate::features::auth::http::AuthorizedClient;
use crate::features::locations::model::{
    Category, Location, LocationCreate, LocationUpdate, SubscriptionPlan, UserSubscription,
};
use crate::shared::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Filters for listing locations.
#[derive(Debug, Clone)]
pub struct LocationQuery {
    pub category_id: Option<String>,
    pub search: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

impl Default for LocationQuery {
    fn default() -> Self {
        Self {
            category_id: None,
            search: None,
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

impl LocationQuery {
    /// Clamped page size (the API accepts 1..=100).
    pub fn clamped_limit(&self) -> i64 {
        self.limit.clamp(1, MAX_PAGE_SIZE)
    }

    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("limit", self.clamped_limit().to_string()),
            ("offset", self.offset.max(0).to_string()),
        ];
        if let Some(category_id) = &self.category_id {
            pairs.push(("category_id", category_id.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        pairs
    }
}

/// Service for the location and category endpoints of the Kurasi Map API.
pub struct LocationService {
    client: AuthorizedClient,
    config: AppConfig,
}

impl LocationService {
    pub fn new(client: AuthorizedClient, config: AppConfig) -> Self {
        Self { client, config }
    }

    /// All categories visible to the current user.
    pub async fn categories(&self) -> Result<Vec<Category>> {
        self.client
            .get_json(&self.config.api_url("/api/categories"))
            .await
    }

    /// Locations matching the query filters.
    pub async fn locations(&self, query: &LocationQuery) -> Result<Vec<Location>> {
        let builder = self
            .client
            .request(Method::GET, &self.config.api_url("/api/locations"))
            .query(&query.to_query());
        self.client.send_json(builder).await
    }

    /// A single location by id.
    pub async fn location(&self, id: i64) -> Result<Location> {
        self.client
            .get_json(&self.config.api_url(&format!("/api/locations/{}", id)))
            .await
    }

    /// Create a new location (admin only).
    pub async fn create(&self, location: &LocationCreate) -> Result<Location> {
        self.client
            .post_json(&self.config.api_url("/api/locations"), location)
            .await
    }

    /// Update an existing location (admin only).
    pub async fn update(&self, id: i64, changes: &LocationUpdate) -> Result<Location> {
        self.client
            .put_json(
                &self.config.api_url(&format!("/api/locations/{}", id)),
                changes,
            )
            .await
    }

    /// Delete a location (admin only).
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client
            .delete(&self.config.api_url(&format!("/api/locations/{}", id)))
            .await
    }

    /// All subscription plans.
    pub async fn subscription_plans(&self) -> Result<Vec<SubscriptionPlan>> {
        self.client
            .get_json(&self.config.api_url("/api/subscription-plans"))
            .await
    }

    /// The current user's subscription; the API falls back to the free plan
    /// when none is stored.
    pub async fn user_subscription(&self) -> Result<UserSubscription> {
        self.client
            .get_json(&self.config.api_url("/api/user/subscription"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults() {
        let query = LocationQuery::default();
        let pairs = query.to_query();
        assert_eq!(pairs[0], ("limit", "50".to_string()));
        assert_eq!(pairs[1], ("offset", "0".to_string()));
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn test_query_clamps_limit() {
        let query = LocationQuery {
            limit: 1000,
            ..LocationQuery::default()
        };
        assert_eq!(query.clamped_limit(), 100);

        let query = LocationQuery {
            limit: 0,
            ..LocationQuery::default()
        };
        assert_eq!(query.clamped_limit(), 1);
    }

    #[test]
    fn test_query_includes_optional_filters() {
        let query = LocationQuery {
            category_id: Some("cafes".to_string()),
            search: Some("kopi".to_string()),
            ..LocationQuery::default()
        };
        let pairs = query.to_query();
        assert!(pairs.contains(&("category_id", "cafes".to_string())));
        assert!(pairs.contains(&("search", "kopi".to_string())));
    }
}
