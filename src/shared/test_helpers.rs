#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use crate::features::auth::SessionStore;
#[cfg(test)]
use crate::features::locations::Location;
#[cfg(test)]
use crate::modules::storage::InMemoryStorage;

#[cfg(test)]
pub fn memory_session() -> SessionStore {
    SessionStore::new(Arc::new(InMemoryStorage::new()))
}

#[cfg(test)]
pub fn sample_location() -> Location {
    serde_json::from_value(serde_json::json!({
        "id": 1,
        "name": "Warung Sate Pak Haji",
        "description": "Legendary sate stall near the old town square",
        "category_id": "restaurants",
        "latitude": -6.2088,
        "longitude": 106.8456,
        "address": "Jl. Merdeka 1, Jakarta",
        "operating_hours": {"Mon": "9-5", "Sat": "10-2"},
        "instagram": null,
        "phone": "+62-21-555-0101",
        "website": null,
        "typical_spending": "Rp50.000",
        "images": ["sate.jpg"],
        "premium_only": false,
        "created_at": "2024-05-01T08:00:00Z",
        "updated_at": "2024-05-02T09:30:00Z"
    }))
    .expect("sample location fixture must deserialize")
}
