//! TUI screen implementations.

pub mod create_trip;
pub mod trip_details;

pub use create_trip::{CreateTripState, draw_create_trip};
pub use trip_details::{TripDetailsState, draw_trip_details};
