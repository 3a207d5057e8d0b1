use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// The travel dates chosen for a trip. Either end may still be unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Creates a range with both ends set.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Returns both ends when the range is complete.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.start.zip(self.end)
    }

    /// Returns `true` when both ends are set and the end comes before the start.
    ///
    /// Reversed ranges are reported to the user but never rejected.
    pub fn is_reversed(&self) -> bool {
        self.bounds().is_some_and(|(start, end)| end < start)
    }
}

/// Converts a calendar day to the instant at its start, in UTC.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Ordered, duplicate-free list of invitee e-mail addresses.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct GuestList(Vec<String>);

/// Reads a plain array, dropping empty and repeated entries.
impl<'de> Deserialize<'de> for GuestList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let emails = Vec::<String>::deserialize(deserializer)?;
        let mut guests = Self::new();
        for email in &emails {
            guests.add(email);
        }
        Ok(guests)
    }
}

impl GuestList {
    /// Creates an empty guest list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `email` unless it is empty or already present (exact match).
    ///
    /// Returns `true` if the list changed.
    pub fn add(&mut self, email: &str) -> bool {
        if email.is_empty() || self.contains(email) {
            return false;
        }
        self.0.push(email.to_string());
        true
    }

    /// Removes every entry equal to `email`. Returns `true` if the list changed.
    pub fn remove(&mut self, email: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|existing| existing != email);
        self.0.len() != before
    }

    pub fn contains(&self, email: &str) -> bool {
        self.0.iter().any(|existing| existing == email)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns the addresses as an owned vector, in insertion order.
    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }
}

/// The in-progress, unsubmitted record of a trip being planned.
///
/// Every field is optional until submit time; see
/// [`validate_draft`](super::validate_draft) for the submit preconditions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftTrip {
    pub destination: Option<String>,
    pub date_range: Option<DateRange>,
    pub owner_name: Option<String>,
    pub owner_email: Option<String>,
    pub guests: GuestList,
}

/// Opaque identifier the remote API assigns to a created trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripId(String);

impl TripId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TripId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
