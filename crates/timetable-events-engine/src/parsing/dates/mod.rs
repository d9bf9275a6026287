//! # Date Sublanguage
//!
//! Every timetable cell ends in a bracketed date group:
//!
//! ```text
//! group := '[' skipped* item (sep item)* ']'
//! item  := date ( '-' date step? )?
//! date  := DD '.' MM ( '.' YYYY )?
//! step  := 'к.н.' (weekly) | 'ч.н.' (every other week)
//! sep   := ',' | ';' | whitespace
//! ```
//!
//! Dates without a year resolve to the first occurrence on or after the
//! block's reference date; a range end resolves against the range start.
//!
//! ## Modules
//!
//! - **`cursor`**: byte `Cursor` with absolute offsets into the block text
//! - **`grammar`**: `scan()` turns the group contents into `Item`s
//! - **`resolve`**: year resolution and range expansion

pub mod cursor;
pub mod grammar;
pub mod resolve;

use chrono::NaiveDate;

use super::kinds::DateGroup;
use cursor::Cursor;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("no date group found")]
    MissingGroup,
    #[error("date group opened at byte {open} is never closed")]
    UnclosedGroup { open: usize },
    #[error("date group contains no dates")]
    NoDates,
    #[error("invalid date `{text}`")]
    InvalidDate { text: String },
    #[error("date range `{from}-{to}` ends before it starts")]
    InvalidRange { from: String, to: String },
    #[error("unexpected `{found}` at byte {offset}")]
    UnexpectedInput { offset: usize, found: char },
}

/// The resolved dates of one block and where its date group begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateList {
    /// Ascending, without duplicates, never empty.
    pub dates: Vec<NaiveDate>,
    /// Byte offset of the opening `[` in the block text.
    pub start: usize,
}

/// Parses the last date group found in `text[from..]`.
///
/// `skip` leading tokens inside the group are ignored (see
/// [`EventType::date_skip`](crate::models::EventType::date_skip)).
pub fn parse_dates(
    text: &str,
    from: usize,
    skip: usize,
    reference: NaiveDate,
) -> Result<DateList, DateError> {
    let tail = text.get(from..).ok_or(DateError::MissingGroup)?;
    let open = tail
        .bytes()
        .rposition(|b| b == DateGroup::OPEN)
        .map(|i| from + i)
        .ok_or(DateError::MissingGroup)?;
    let inner_start = open + 1;
    let close = text[inner_start..]
        .bytes()
        .position(|b| b == DateGroup::CLOSE)
        .map(|i| inner_start + i)
        .ok_or(DateError::UnclosedGroup { open })?;

    let items = grammar::scan(Cursor::new(&text[inner_start..close], inner_start), skip)?;

    let mut dates = vec![];
    for item in &items {
        resolve::expand(item, reference, &mut dates)?;
    }
    if dates.is_empty() {
        return Err(DateError::NoDates);
    }
    dates.sort_unstable();
    dates.dedup();

    Ok(DateList { dates, start: open })
}
