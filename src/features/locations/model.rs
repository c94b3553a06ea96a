use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::format::{format_currency, OperatingHours};
use crate::shared::types::LatLng;

/// A curated location on the map.
#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
    pub operating_hours: Option<OperatingHours>,
    pub instagram: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub typical_spending: Option<String>,
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub premium_only: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Location {
    pub fn lat_lng(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }

    /// Distance from `origin` in kilometers.
    pub fn distance_from(&self, origin: &LatLng) -> f64 {
        origin.distance_to(&self.lat_lng())
    }
}

/// A location category.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    #[serde(default)]
    pub premium_only: bool,
}

/// Payload for creating a new location (admin only).
#[derive(Debug, Clone, Serialize)]
pub struct LocationCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category_id: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_hours: Option<OperatingHours>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typical_spending: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    pub premium_only: bool,
}

/// Partial update for an existing location (admin only).
///
/// Absent fields are left unchanged by the API.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LocationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_hours: Option<OperatingHours>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typical_spending: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_only: Option<bool>,
}

/// A subscription plan offered by the application.
#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionPlan {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub features: Vec<String>,
}

impl SubscriptionPlan {
    /// The plan price as US-dollar display text.
    pub fn display_price(&self) -> String {
        format_currency(self.price)
    }
}

/// The current user's subscription.
///
/// The API answers with a bare `{"plan_id": "free", "name": "Free Plan"}`
/// when the user has no stored subscription, so record fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UserSubscription {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub user_id: Option<String>,
    pub plan_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_active: bool,
}
