//! Create-trip page state: the draft, panel visibility, and submission.

mod create_trip;
mod error;

pub use create_trip::{CreateTripController, Visibility};
pub use error::SubmitError;
