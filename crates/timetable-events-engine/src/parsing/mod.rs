//! # Event Parsing
//!
//! Two stages turn positioned tokens into events:
//!
//! 1. **Assembly** (`assembly`): `RawEventAssembler` joins tokens into
//!    `RawEvent` blocks, one per timetable cell, sealed by a `]` token
//! 2. **Field extraction** (`fields`, `dates`): each block is narrowed left to
//!    right (type phrase, then title/teacher before it, then the date group at
//!    the end, then subgroup/location in between)
//!
//! ## Modules
//!
//! - **`kinds`**: delimiter constants (`]`, `". "`, date group bytes)
//! - **`phrases`**: `TypePhrases` table from source phrases to `EventType`
//! - **`span`**: `Span` byte ranges handed between stages
//! - **`fields`**: pure stage functions with explicit offsets
//! - **`dates`**: the bracketed date sublanguage
//! - **`observer`**: `ParseObserver` sink for per-block diagnostics
//!
//! ## Key Invariants
//!
//! - A block either yields a complete `Event` or an error, never a partial one
//! - Batches are fail-fast and report the index of the failing block
//! - Blocks are independent; output order always matches input order

pub mod assembly;
pub mod dates;
pub mod error;
pub mod fields;
pub mod kinds;
pub mod observer;
pub mod phrases;
pub mod span;

#[cfg(test)]
mod tests;

pub use assembly::{RawEventAssembler, assemble};
pub use dates::{DateError, DateList, parse_dates};
pub use error::{IndexedParseError, ParseError};
pub use observer::{LogObserver, NoopObserver, ParseObserver};
pub use phrases::{PhraseError, TypePhrases};

use crate::models::{Event, RawEvent};

/// Parses raw event blocks against a type phrase table.
#[derive(Debug, Clone, Default)]
pub struct EventParser {
    phrases: TypePhrases,
}

impl EventParser {
    pub fn new(phrases: TypePhrases) -> Self {
        Self { phrases }
    }

    /// Parses one block into an event.
    pub fn parse(&self, raw: &RawEvent) -> Result<Event, ParseError> {
        parse_with_phrases(raw, &self.phrases)
    }

    /// Parses every block in order, stopping at the first failure.
    pub fn parse_all<I, O>(
        &self,
        blocks: I,
        observer: &mut O,
    ) -> Result<Vec<Event>, IndexedParseError>
    where
        I: IntoIterator<Item = RawEvent>,
        O: ParseObserver + ?Sized,
    {
        parse_batch(blocks, &self.phrases, observer)
    }
}

/// Parses one block with the standard type phrases.
pub fn parse_event(raw: &RawEvent) -> Result<Event, ParseError> {
    parse_with_phrases(raw, TypePhrases::standard())
}

/// Parses a batch with the standard type phrases, logging each block and event.
pub fn parse_events<I>(blocks: I) -> Result<Vec<Event>, IndexedParseError>
where
    I: IntoIterator<Item = RawEvent>,
{
    parse_events_with(blocks, &mut LogObserver)
}

/// Parses a batch with the standard type phrases, reporting to `observer`.
pub fn parse_events_with<I, O>(
    blocks: I,
    observer: &mut O,
) -> Result<Vec<Event>, IndexedParseError>
where
    I: IntoIterator<Item = RawEvent>,
    O: ParseObserver + ?Sized,
{
    parse_batch(blocks, TypePhrases::standard(), observer)
}

fn parse_batch<I, O>(
    blocks: I,
    phrases: &TypePhrases,
    observer: &mut O,
) -> Result<Vec<Event>, IndexedParseError>
where
    I: IntoIterator<Item = RawEvent>,
    O: ParseObserver + ?Sized,
{
    let mut events = vec![];
    for (index, raw) in blocks.into_iter().enumerate() {
        observer.on_block(index, &raw);
        let event =
            parse_with_phrases(&raw, phrases).map_err(|source| IndexedParseError { index, source })?;
        observer.on_event(index, &raw, &event);
        events.push(event);
    }
    Ok(events)
}

fn parse_with_phrases(raw: &RawEvent, phrases: &TypePhrases) -> Result<Event, ParseError> {
    let text = raw.data();

    let ty = fields::detect_type(text, phrases)?;
    let (title, teacher) = fields::split_title_teacher(fields::before_type(text, ty))?;
    let dates = parse_dates(text, ty.span.end, ty.kind.date_skip(), raw.initial_date())?;
    let (subgroup, location) =
        fields::split_subgroup_location(fields::after_type(text, ty, dates.start))?;

    Ok(Event {
        title,
        teacher,
        kind: ty.kind,
        subgroup,
        location,
        dates: dates.dates,
    })
}
