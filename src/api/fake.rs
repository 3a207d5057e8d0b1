//! In-memory [`TripApi`] for tests.

use std::cell::{Cell, RefCell};

use reqwest::StatusCode;

use super::client::TripApi;
use super::error::ApiError;
use crate::model::{CreateTripRequest, TripId};

/// Records every request and answers with a fixed trip id, or a 500 when failing.
#[derive(Debug)]
pub(crate) struct FakeTripApi {
    trip_id: TripId,
    calls: RefCell<Vec<CreateTripRequest>>,
    fail: Cell<bool>,
}

impl FakeTripApi {
    pub(crate) fn returning(trip_id: &str) -> Self {
        Self {
            trip_id: TripId::new(trip_id),
            calls: RefCell::new(Vec::new()),
            fail: Cell::new(false),
        }
    }

    pub(crate) fn failing() -> Self {
        let api = Self::returning("abc123");
        api.fail.set(true);
        api
    }

    pub(crate) fn set_failing(&self, fail: bool) {
        self.fail.set(fail);
    }

    pub(crate) fn calls(&self) -> Vec<CreateTripRequest> {
        self.calls.borrow().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl TripApi for FakeTripApi {
    async fn create_trip(&self, request: &CreateTripRequest) -> Result<TripId, ApiError> {
        self.calls.borrow_mut().push(request.clone());
        if self.fail.get() {
            Err(ApiError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: "boom".into(),
            })
        } else {
            Ok(self.trip_id.clone())
        }
    }
}
