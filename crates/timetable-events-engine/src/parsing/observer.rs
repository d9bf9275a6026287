use crate::models::{Event, Point, RawEvent};

/// Receives diagnostics while a batch of blocks is parsed.
///
/// Both hooks default to doing nothing.
pub trait ParseObserver {
    /// Called before block `index` is parsed.
    fn on_block(&mut self, _index: usize, _raw: &RawEvent) {}

    /// Called after block `index` parsed successfully.
    fn on_event(&mut self, _index: usize, _raw: &RawEvent, _event: &Event) {}
}

/// Discards all diagnostics.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ParseObserver for NoopObserver {}

/// Writes each block and its parsed event to the `log` facade at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ParseObserver for LogObserver {
    fn on_block(&mut self, index: usize, raw: &RawEvent) {
        let Point { x, y } = raw.position();
        log::debug!("<--- [{index}] at ({x}, {y}): {:?} --->", raw.data());
    }

    fn on_event(&mut self, index: usize, _raw: &RawEvent, event: &Event) {
        log::debug!("<--- [{index}] {event:?} --->");
    }
}
