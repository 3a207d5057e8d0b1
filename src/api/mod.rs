//! Remote trip API: the [`TripApi`] seam and its HTTP implementation.

mod client;
mod error;
#[cfg(test)]
pub(crate) mod fake;

pub use client::{HttpTripApi, TripApi};
pub use error::ApiError;
