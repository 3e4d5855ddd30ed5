use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Land listing from `GET /listings/user/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    #[serde(default)]
    pub owner_id: i64,
    #[serde(default)]
    pub listing_type: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location_state: Option<String>,
    #[serde(default)]
    pub location_area: Option<String>,
    #[serde(default)]
    pub size_value: Option<i64>,
    #[serde(default)]
    pub size_unit: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub price_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
