mod request;
mod trip;
mod validation;

pub use request::{CreateTripRequest, CreateTripResponse};
pub use trip::{DateRange, DraftTrip, GuestList, TripId, start_of_day};
pub use validation::{DATE_FORMAT, MissingField, ValidationError, parse_date, validate_draft};
