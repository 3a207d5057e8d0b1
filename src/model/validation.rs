use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

use super::request::CreateTripRequest;
use super::trip::{DraftTrip, start_of_day};

/// Input format accepted for trip dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A draft field that must be set before a trip can be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MissingField {
    Destination,
    StartDate,
    EndDate,
    OwnerName,
    OwnerEmail,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Destination => "destination",
            Self::StartDate => "start date",
            Self::EndDate => "end date",
            Self::OwnerName => "your name",
            Self::OwnerEmail => "your e-mail",
        })
    }
}

/// Validation errors for draft trip fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing {}", join(.0))]
    MissingFields(Vec<MissingField>),
    #[error("invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

fn join(fields: &[MissingField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parses a `YYYY-MM-DD` date as typed by the user.
pub fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(input.to_string()))
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Checks every submit precondition at once.
///
/// Returns the request payload when the draft is complete, or every missing
/// field (in form order) otherwise. A reversed date range is not an error.
pub fn validate_draft(draft: &DraftTrip) -> Result<CreateTripRequest, ValidationError> {
    let destination = present(&draft.destination);
    let start = draft.date_range.and_then(|range| range.start);
    let end = draft.date_range.and_then(|range| range.end);
    let owner_name = present(&draft.owner_name);
    let owner_email = present(&draft.owner_email);

    match (destination, start, end, owner_name, owner_email) {
        (Some(destination), Some(start), Some(end), Some(owner_name), Some(owner_email)) => {
            Ok(CreateTripRequest {
                destination: destination.to_string(),
                starts_at: start_of_day(start),
                ends_at: start_of_day(end),
                owner_name: owner_name.to_string(),
                owner_email: owner_email.to_string(),
                emails_to_invite: draft.guests.to_vec(),
            })
        }
        _ => {
            let checks = [
                (destination.is_none(), MissingField::Destination),
                (start.is_none(), MissingField::StartDate),
                (end.is_none(), MissingField::EndDate),
                (owner_name.is_none(), MissingField::OwnerName),
                (owner_email.is_none(), MissingField::OwnerEmail),
            ];
            let missing = checks
                .into_iter()
                .filter_map(|(is_missing, field)| is_missing.then_some(field))
                .collect();
            Err(ValidationError::MissingFields(missing))
        }
    }
}
