use serde::{Deserialize, Serialize};

use crate::shared::geo;

/// A geographic coordinate pair, degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to another coordinate, in kilometers.
    pub fn distance_to(&self, other: &LatLng) -> f64 {
        geo::calculate_distance(self.lat, self.lng, other.lat, other.lng)
    }
}

/// Error payload the API returns on non-2xx responses (FastAPI shape).
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latlng_distance_matches_free_function() {
        let jakarta = LatLng::new(-6.2088, 106.8456);
        let bandung = LatLng::new(-6.9175, 107.6191);
        assert_eq!(
            jakarta.distance_to(&bandung),
            geo::calculate_distance(-6.2088, 106.8456, -6.9175, 107.6191)
        );
    }

    #[test]
    fn test_api_error_body_defaults_detail() {
        let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.detail, "");

        let body: ApiErrorBody =
            serde_json::from_str(r#"{"detail": "Location not found"}"#).unwrap();
        assert_eq!(body.detail, "Location not found");
    }
}
