use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Work agreement between two users, from `GET /api/my-contracts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkContract {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub party_a_id: i64,
    #[serde(default)]
    pub party_b_id: i64,
    #[serde(default)]
    pub terms: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    /// draft, pending, signed, breached or cancelled; the client only displays it.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub party_a_signed: bool,
    #[serde(default)]
    pub party_b_signed: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl WorkContract {
    /// The counterpart of `viewer_id` on this contract.
    pub fn other_party_id(&self, viewer_id: i64) -> i64 {
        if self.party_a_id == viewer_id {
            self.party_b_id
        } else {
            self.party_a_id
        }
    }
}
