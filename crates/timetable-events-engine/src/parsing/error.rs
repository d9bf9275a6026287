use super::dates::DateError;

/// Why a single raw event block could not become an [`Event`](crate::models::Event).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("schedule event type is not found")]
    TypeNotFound,
    #[error("schedule event title is empty")]
    MissingTitle,
    #[error("schedule event location is empty")]
    MissingLocation,
    #[error("date parse error")]
    DateParse(#[from] DateError),
}

/// A batch failure: which block failed, and why.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("parse events[{index}]")]
pub struct IndexedParseError {
    /// Zero-based position of the failing block in the input sequence.
    pub index: usize,
    #[source]
    pub source: ParseError,
}
