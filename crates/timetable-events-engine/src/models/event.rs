use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The closed set of session kinds a timetable cell can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Lecture,
    Seminar,
    Lab,
}

impl EventType {
    pub const ALL: [EventType; 3] = [EventType::Lecture, EventType::Seminar, EventType::Lab];

    pub fn as_str(self) -> &'static str {
        match self {
            EventType::Lecture => "lecture",
            EventType::Seminar => "seminar",
            EventType::Lab => "lab",
        }
    }

    /// Number of qualifier tokens that open the date group for this kind.
    ///
    /// Lab cells carry one extra field (the lab-hours marker) ahead of the dates.
    pub fn date_skip(self) -> usize {
        match self {
            EventType::Lab => 1,
            EventType::Lecture | EventType::Seminar => 0,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown event type: {0}")]
pub struct UnknownEventType(pub String);

impl FromStr for EventType {
    type Err = UnknownEventType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownEventType(s.to_string()))
    }
}

/// A fully parsed timetable entry, ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub teacher: String,
    #[serde(rename = "type")]
    pub kind: EventType,
    pub subgroup: String,
    pub location: String,
    pub dates: Vec<NaiveDate>,
}
