//! # Delimiters
//!
//! Every literal the pipeline splits or scans on lives here. The assembler,
//! the field stages and the date sublanguage call these constants; they never
//! hardcode `]` or `". "` themselves.

/// The token that closes a timetable cell.
pub struct Terminator;

impl Terminator {
    /// The literal token text that seals a raw event block.
    pub const TOKEN: &'static str = "]";
}

/// Separator between adjacent free-text fields of a cell.
pub struct FieldSeparator;

impl FieldSeparator {
    /// Period followed by a space.
    pub const SEP: &'static str = ". ";
    /// The character that closes the type phrase.
    pub const PERIOD: char = '.';
}

/// The bracketed date group that ends every cell.
pub struct DateGroup;

impl DateGroup {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    /// Joins the two ends of a date range.
    pub const RANGE: u8 = b'-';
    /// Separates day, month and year inside a date.
    pub const DOT: u8 = b'.';
    /// Separators between items, in addition to whitespace.
    pub const ITEM_SEPARATORS: &'static [u8] = b",;";
}

/// Subgroup markers are wrapped in parentheses, e.g. `(1 п/г)`.
pub struct Subgroup;

impl Subgroup {
    pub const PARENS: [char; 2] = ['(', ')'];
}
