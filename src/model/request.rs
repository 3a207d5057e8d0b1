use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::trip::TripId;

/// Body of `POST /trips`.
///
/// Only built by [`validate_draft`](super::validate_draft), so every field is
/// known to be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateTripRequest {
    pub destination: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub owner_name: String,
    pub owner_email: String,
    pub emails_to_invite: Vec<String>,
}

/// Successful response body of `POST /trips`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTripResponse {
    #[serde(rename = "tripId")]
    pub trip_id: TripId,
}
