use chrono::NaiveDate;

use crate::models::{Point, PositionedToken, RawEvent};

use super::kinds::Terminator;

/// Groups positioned tokens into raw event blocks.
///
/// Tokens on the same line are concatenated directly; a change in `y` inserts
/// a single space. A `]` token seals the current block. Text after the last
/// terminator stays pending and is dropped by [`finish`](Self::finish).
pub struct RawEventAssembler {
    initial_date: NaiveDate,
    data: String,
    position: Point,
    last_y: Option<f64>,
    out: Vec<RawEvent>,
}

impl RawEventAssembler {
    pub fn new(initial_date: NaiveDate) -> Self {
        Self {
            initial_date,
            data: String::new(),
            position: Point::default(),
            last_y: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, token: &PositionedToken) {
        if self.data.is_empty() {
            self.position = token.position();
        } else if self.last_y != Some(token.y) {
            self.data.push(' ');
        }
        self.data.push_str(&token.text);
        self.last_y = Some(token.y);

        if token.text == Terminator::TOKEN {
            self.seal();
        }
    }

    /// Text accumulated since the last terminator, if any.
    pub fn pending(&self) -> Option<&str> {
        (!self.data.is_empty()).then_some(self.data.as_str())
    }

    /// Returns the sealed blocks. Unterminated trailing text is discarded.
    pub fn finish(self) -> Vec<RawEvent> {
        self.out
    }

    fn seal(&mut self) {
        let data = std::mem::take(&mut self.data);
        self.out
            .push(RawEvent::new(data, self.position, self.initial_date));
    }
}

/// Assembles `tokens` into raw event blocks that all share `initial_date`.
pub fn assemble<'a, I>(tokens: I, initial_date: NaiveDate) -> Vec<RawEvent>
where
    I: IntoIterator<Item = &'a PositionedToken>,
{
    let mut assembler = RawEventAssembler::new(initial_date);
    for token in tokens {
        assembler.push(token);
    }
    assembler.finish()
}
