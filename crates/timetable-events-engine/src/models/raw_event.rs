use chrono::NaiveDate;

use super::token::Point;

/// The reassembled text of one timetable cell, sealed by a `]` token.
///
/// Carries the anchor of its first token and the reference date that the
/// date sublanguage resolves partial dates against.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEvent {
    data: String,
    position: Point,
    initial_date: NaiveDate,
}

impl RawEvent {
    pub fn new(data: impl Into<String>, position: Point, initial_date: NaiveDate) -> Self {
        Self {
            data: data.into(),
            position,
            initial_date,
        }
    }

    /// Get the accumulated block text
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Get the anchor position captured from the first token
    pub fn position(&self) -> Point {
        self.position
    }

    /// Get the reference date used to resolve partial dates
    pub fn initial_date(&self) -> NaiveDate {
        self.initial_date
    }
}
