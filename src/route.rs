//! Navigable app locations.

use crate::model::TripId;

/// All locations the app can navigate between.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`: plan a new trip.
    CreateTrip,
    /// `/trips/{id}`: a created trip.
    TripDetails(TripId),
}

impl Route {
    /// Returns the path for this route. Trip ids are used verbatim.
    pub fn path(&self) -> String {
        match self {
            Self::CreateTrip => "/".to_string(),
            Self::TripDetails(id) => format!("/trips/{id}"),
        }
    }
}
