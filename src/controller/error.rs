use crate::api::ApiError;
use crate::model::ValidationError;

/// Why a trip submission did not produce a trip.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The draft is incomplete; the API was not called.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The API call failed. The draft is untouched, so submitting again is safe.
    #[error("could not create trip: {0}")]
    Api(#[from] ApiError),
}

impl SubmitError {
    /// Returns `true` if retrying the same draft could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Api(_))
    }
}
