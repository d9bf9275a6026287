pub mod event;
pub mod raw_event;
pub mod token;

pub use event::{Event, EventType};
pub use raw_event::RawEvent;
pub use token::{Point, PositionedToken};
