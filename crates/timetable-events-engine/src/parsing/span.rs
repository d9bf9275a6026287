/// A byte range `[start, end)` into a raw event's text.
///
/// Field stages hand spans to each other instead of copied text, so the
/// offset arithmetic between stages stays visible and testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Slices `text` with this span.
    ///
    /// Returns `None` when the span is out of bounds or splits a character.
    pub fn slice(self, text: &str) -> Option<&str> {
        text.get(self.start..self.end)
    }
}
