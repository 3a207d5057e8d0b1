use tracing::{debug, info, warn};

use super::error::SubmitError;
use crate::api::TripApi;
use crate::model::{
    CreateTripRequest, DateRange, DraftTrip, GuestList, ValidationError, validate_draft,
};
use crate::route::Route;

/// Which parts of the create-trip page are shown.
///
/// The three flags are independent; no combination is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Visibility {
    pub guests_input: bool,
    pub guests_modal: bool,
    pub confirm_trip_modal: bool,
}

/// Owns the draft trip and panel visibility for the create-trip page.
///
/// Every mutation is a plain method call; nothing here touches the terminal.
#[derive(Debug, Clone, Default)]
pub struct CreateTripController {
    draft: DraftTrip,
    visibility: Visibility,
}

impl CreateTripController {
    /// Creates a controller with an empty draft and every panel hidden.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &DraftTrip {
        &self.draft
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn guests(&self) -> &GuestList {
        &self.draft.guests
    }

    pub fn open_guests_input(&mut self) {
        self.visibility.guests_input = true;
    }

    pub fn close_guests_input(&mut self) {
        self.visibility.guests_input = false;
    }

    pub fn open_guests_modal(&mut self) {
        self.visibility.guests_modal = true;
    }

    pub fn close_guests_modal(&mut self) {
        self.visibility.guests_modal = false;
    }

    pub fn open_confirm_trip_modal(&mut self) {
        self.visibility.confirm_trip_modal = true;
    }

    pub fn close_confirm_trip_modal(&mut self) {
        self.visibility.confirm_trip_modal = false;
    }

    /// Invites `email` unless it is empty or already invited. Returns `true` if added.
    pub fn add_guest_email(&mut self, email: &str) -> bool {
        let added = self.draft.guests.add(email);
        if added {
            debug!(guests = self.draft.guests.len(), "guest added");
        }
        added
    }

    /// Uninvites `email`. Returns `true` if it was on the list.
    pub fn remove_guest_email(&mut self, email: &str) -> bool {
        self.draft.guests.remove(email)
    }

    pub fn set_destination(&mut self, destination: Option<String>) {
        self.draft.destination = destination;
    }

    pub fn set_owner_name(&mut self, owner_name: Option<String>) {
        self.draft.owner_name = owner_name;
    }

    pub fn set_owner_email(&mut self, owner_email: Option<String>) {
        self.draft.owner_email = owner_email;
    }

    pub fn set_date_range(&mut self, date_range: Option<DateRange>) {
        self.draft.date_range = date_range;
    }

    /// Checks the submit preconditions without side effects.
    pub fn validate(&self) -> Result<CreateTripRequest, ValidationError> {
        validate_draft(&self.draft)
    }

    /// Validates the draft and, if complete, creates the trip.
    ///
    /// An incomplete draft returns [`SubmitError::Invalid`] without calling
    /// `api`. On success returns the route of the new trip. The draft is left
    /// as it was in every case.
    pub async fn submit<A: TripApi>(&mut self, api: &A) -> Result<Route, SubmitError> {
        let request = match self.validate() {
            Ok(request) => request,
            Err(e) => {
                debug!(error = %e, "trip submit aborted");
                return Err(e.into());
            }
        };

        info!(
            destination = %request.destination,
            guests = request.emails_to_invite.len(),
            "submitting trip"
        );
        match api.create_trip(&request).await {
            Ok(trip_id) => Ok(Route::TripDetails(trip_id)),
            Err(e) => {
                warn!(error = %e, "trip creation failed");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::api::ApiError;
    use crate::api::fake::FakeTripApi;
    use crate::model::{MissingField, TripId, start_of_day};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn filled_controller() -> CreateTripController {
        let mut controller = CreateTripController::new();
        controller.set_destination(Some("Florianópolis".into()));
        controller.set_owner_name(Some("Jane".into()));
        controller.set_owner_email(Some("jane@example.com".into()));
        controller.set_date_range(Some(DateRange::new(date(2024, 3, 1), date(2024, 3, 10))));
        controller.add_guest_email("a@x.com");
        controller.add_guest_email("b@x.com");
        controller
    }

    mod visibility {
        use super::*;

        #[test]
        fn everything_hidden_at_start() {
            let controller = CreateTripController::new();
            assert_eq!(controller.visibility(), Visibility::default());
            assert_eq!(controller.draft(), &DraftTrip::default());
        }

        #[test]
        fn flags_toggle_independently() {
            let mut controller = CreateTripController::new();
            controller.open_guests_input();
            controller.open_confirm_trip_modal();
            assert_eq!(
                controller.visibility(),
                Visibility {
                    guests_input: true,
                    guests_modal: false,
                    confirm_trip_modal: true,
                }
            );
            controller.close_guests_input();
            assert!(!controller.visibility().guests_input);
            assert!(controller.visibility().confirm_trip_modal);
        }

        #[test]
        fn open_then_close_restores_flags_and_keeps_draft() {
            type Toggle = fn(&mut CreateTripController);
            let pairs: [(Toggle, Toggle); 3] = [
                (
                    CreateTripController::open_guests_input,
                    CreateTripController::close_guests_input,
                ),
                (
                    CreateTripController::open_guests_modal,
                    CreateTripController::close_guests_modal,
                ),
                (
                    CreateTripController::open_confirm_trip_modal,
                    CreateTripController::close_confirm_trip_modal,
                ),
            ];
            for (open, close) in pairs {
                let mut controller = filled_controller();
                let draft_before = controller.draft().clone();
                let flags_before = controller.visibility();
                open(&mut controller);
                close(&mut controller);
                assert_eq!(controller.visibility(), flags_before);
                assert_eq!(controller.draft(), &draft_before);
            }
        }

        #[test]
        fn close_when_closed_is_noop() {
            let mut controller = CreateTripController::new();
            controller.close_guests_modal();
            assert_eq!(controller.visibility(), Visibility::default());
        }
    }

    mod guests {
        use super::*;

        #[test]
        fn add_twice_keeps_one() {
            let mut controller = CreateTripController::new();
            assert!(controller.add_guest_email("a@x.com"));
            assert!(!controller.add_guest_email("a@x.com"));
            assert_eq!(controller.guests().len(), 1);
        }

        #[test]
        fn add_empty_is_ignored() {
            let mut controller = CreateTripController::new();
            assert!(!controller.add_guest_email(""));
            assert!(controller.guests().is_empty());
        }

        #[test]
        fn remove_makes_absent() {
            let mut controller = filled_controller();
            assert!(controller.remove_guest_email("a@x.com"));
            assert!(!controller.guests().contains("a@x.com"));
            assert_eq!(controller.guests().to_vec(), vec!["b@x.com"]);
        }

        #[test]
        fn remove_absent_is_noop() {
            let mut controller = filled_controller();
            assert!(!controller.remove_guest_email("z@x.com"));
            assert_eq!(controller.guests().len(), 2);
        }
    }

    mod setters {
        use super::*;

        #[test]
        fn setters_store_values() {
            let controller = filled_controller();
            let draft = controller.draft();
            assert_eq!(draft.destination.as_deref(), Some("Florianópolis"));
            assert_eq!(draft.owner_name.as_deref(), Some("Jane"));
            assert_eq!(draft.owner_email.as_deref(), Some("jane@example.com"));
            assert_eq!(
                draft.date_range,
                Some(DateRange::new(date(2024, 3, 1), date(2024, 3, 10)))
            );
        }

        #[test]
        fn setters_can_clear() {
            let mut controller = filled_controller();
            controller.set_destination(None);
            controller.set_date_range(None);
            assert_eq!(controller.draft().destination, None);
            assert_eq!(controller.draft().date_range, None);
        }
    }

    mod submit {
        use super::*;

        #[tokio::test]
        async fn complete_draft_calls_api_once_and_routes_to_trip() {
            let api = FakeTripApi::returning("abc123");
            let mut controller = filled_controller();

            let route = controller.submit(&api).await.unwrap();

            assert_eq!(route, Route::TripDetails(TripId::new("abc123")));
            assert_eq!(route.path(), "/trips/abc123");
            let calls = api.calls();
            assert_eq!(calls.len(), 1);
            assert_eq!(
                calls[0],
                CreateTripRequest {
                    destination: "Florianópolis".into(),
                    starts_at: start_of_day(date(2024, 3, 1)),
                    ends_at: start_of_day(date(2024, 3, 10)),
                    owner_name: "Jane".into(),
                    owner_email: "jane@example.com".into(),
                    emails_to_invite: vec!["a@x.com".into(), "b@x.com".into()],
                }
            );
        }

        #[tokio::test]
        async fn each_missing_field_prevents_the_call() {
            type Clear = fn(&mut CreateTripController);
            let clears: [(Clear, MissingField); 5] = [
                (|c| c.set_destination(None), MissingField::Destination),
                (|c| c.set_owner_name(None), MissingField::OwnerName),
                (|c| c.set_owner_email(None), MissingField::OwnerEmail),
                (
                    |c| {
                        c.set_date_range(Some(DateRange {
                            start: None,
                            end: Some(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()),
                        }))
                    },
                    MissingField::StartDate,
                ),
                (
                    |c| {
                        c.set_date_range(Some(DateRange {
                            start: Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
                            end: None,
                        }))
                    },
                    MissingField::EndDate,
                ),
            ];
            for (clear, field) in clears {
                let api = FakeTripApi::returning("abc123");
                let mut controller = filled_controller();
                clear(&mut controller);

                let err = controller.submit(&api).await.unwrap_err();

                assert_eq!(api.call_count(), 0, "{field:?} unset must not call the API");
                match err {
                    SubmitError::Invalid(ValidationError::MissingFields(fields)) => {
                        assert_eq!(fields, vec![field]);
                    }
                    other => panic!("expected Invalid, got {other:?}"),
                }
            }
        }

        #[tokio::test]
        async fn no_date_range_prevents_the_call() {
            let api = FakeTripApi::returning("abc123");
            let mut controller = filled_controller();
            controller.set_date_range(None);
            let err = controller.submit(&api).await.unwrap_err();
            assert!(!err.is_retryable());
            assert_eq!(api.call_count(), 0);
        }

        #[tokio::test]
        async fn api_failure_is_retryable_and_keeps_draft() {
            let api = FakeTripApi::failing();
            let mut controller = filled_controller();
            let draft_before = controller.draft().clone();

            let err = controller.submit(&api).await.unwrap_err();

            assert!(err.is_retryable());
            assert!(matches!(err, SubmitError::Api(ApiError::Status { .. })));
            assert_eq!(controller.draft(), &draft_before);

            api.set_failing(false);
            let route = controller.submit(&api).await.unwrap();
            assert_eq!(route.path(), "/trips/abc123");
            assert_eq!(api.call_count(), 2);
        }

        #[test]
        fn validate_has_no_side_effects() {
            let controller = CreateTripController::new();
            assert!(controller.validate().is_err());
            assert_eq!(controller.draft(), &DraftTrip::default());
        }
    }
}
