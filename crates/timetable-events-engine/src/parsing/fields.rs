use crate::models::EventType;

use super::{
    error::ParseError,
    kinds::{FieldSeparator, Subgroup},
    phrases::TypePhrases,
    span::Span,
};

/// The located type phrase of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMatch {
    pub kind: EventType,
    /// Covers the phrase and its closing period.
    pub span: Span,
}

/// Drops the `". "` that closes a field, or a single trailing space.
fn strip_field_end(s: &str) -> &str {
    s.strip_suffix(FieldSeparator::SEP)
        .or_else(|| s.strip_suffix(char::is_whitespace))
        .unwrap_or(s)
}

/// Finds the first type phrase followed by a period.
pub fn detect_type(text: &str, phrases: &TypePhrases) -> Result<TypeMatch, ParseError> {
    let (span, kind) = phrases.find(text).ok_or(ParseError::TypeNotFound)?;
    Ok(TypeMatch { kind, span })
}

/// The title/teacher text: everything before the type phrase, minus the
/// single space that precedes it. The closing period stays.
pub fn before_type(text: &str, ty: TypeMatch) -> &str {
    let before = &text[..ty.span.start];
    before.strip_suffix(char::is_whitespace).unwrap_or(before)
}

/// Splits the text before the type phrase into `(title, teacher)`.
///
/// Without a separator the last character (normally the closing period) is
/// dropped and the teacher is empty. Otherwise the closing period is removed
/// and the first two pieces are title and teacher.
pub fn split_title_teacher(before: &str) -> Result<(String, String), ParseError> {
    let body = before
        .strip_suffix(FieldSeparator::PERIOD)
        .unwrap_or(before);
    let mut pieces = body.split(FieldSeparator::SEP);
    let first = pieces.next().unwrap_or_default();
    let (title, teacher) = match pieces.next() {
        Some(teacher) => (first, teacher),
        None => (drop_last_char(before), ""),
    };

    if title.trim().is_empty() {
        return Err(ParseError::MissingTitle);
    }
    Ok((title.to_string(), teacher.to_string()))
}

fn drop_last_char(s: &str) -> &str {
    match s.char_indices().next_back() {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

/// The subgroup/location text between the type phrase and the date group.
pub fn after_type(text: &str, ty: TypeMatch, dates_start: usize) -> &str {
    let between = Span::new(ty.span.end, dates_start.max(ty.span.end))
        .slice(text)
        .unwrap_or_default();
    strip_field_end(between.strip_prefix(' ').unwrap_or(between))
}

/// Splits the text after the type phrase into `(subgroup, location)`.
///
/// Exactly two pieces give a parenthesised subgroup and a location; anything
/// else is read as a location alone, from the first piece.
pub fn split_subgroup_location(after: &str) -> Result<(String, String), ParseError> {
    let pieces: Vec<&str> = after.split(FieldSeparator::SEP).collect();
    let (subgroup, location) = match pieces.as_slice() {
        [subgroup, location] => (subgroup.trim_matches(&Subgroup::PARENS[..]), *location),
        [location, ..] => ("", *location),
        [] => ("", ""),
    };

    if location.trim().is_empty() {
        return Err(ParseError::MissingLocation);
    }
    Ok((subgroup.to_string(), location.to_string()))
}
