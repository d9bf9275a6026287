pub mod io;
pub mod models;
pub mod parsing;

// Re-export key types for easier usage
pub use models::{Event, EventType, Point, PositionedToken, RawEvent};
pub use parsing::{
    DateError, EventParser, IndexedParseError, LogObserver, NoopObserver, ParseError,
    ParseObserver, PhraseError, RawEventAssembler, TypePhrases, assemble, parse_event, parse_events,
    parse_events_with,
};
