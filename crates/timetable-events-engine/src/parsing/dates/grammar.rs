use crate::parsing::kinds::DateGroup;

use super::{DateError, cursor::Cursor};

/// How often a range repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `к.н.`, every week. The default when a range has no marker.
    Weekly,
    /// `ч.н.`, every other week.
    Biweekly,
}

impl Step {
    pub const WEEKLY_MARK: &'static str = "к.н.";
    pub const BIWEEKLY_MARK: &'static str = "ч.н.";

    pub fn days(self) -> u64 {
        match self {
            Step::Weekly => 7,
            Step::Biweekly => 14,
        }
    }
}

/// A `DD.MM` or `DD.MM.YYYY` literal as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateLit {
    pub day: u32,
    pub month: u32,
    pub year: Option<i32>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Single(DateLit),
    Range {
        from: DateLit,
        to: DateLit,
        step: Step,
    },
}

fn is_separator(b: u8) -> bool {
    b.is_ascii_whitespace() || DateGroup::ITEM_SEPARATORS.contains(&b)
}

fn skip_separators(cur: &mut Cursor<'_>) {
    cur.eat_while(is_separator);
}

fn skip_spaces(cur: &mut Cursor<'_>) {
    cur.eat_while(|b| b.is_ascii_whitespace());
}

fn unexpected(cur: &Cursor<'_>) -> DateError {
    DateError::UnexpectedInput {
        offset: cur.pos(),
        found: cur.peek_char().unwrap_or(char::REPLACEMENT_CHARACTER),
    }
}

/// Scans the inside of a date group into items.
///
/// The first `skip` separator-delimited tokens are consumed without being
/// interpreted.
pub fn scan(mut cur: Cursor<'_>, skip: usize) -> Result<Vec<Item>, DateError> {
    for _ in 0..skip {
        skip_separators(&mut cur);
        cur.eat_while(|b| !is_separator(b));
    }

    let mut items = vec![];
    loop {
        skip_separators(&mut cur);
        if cur.eof() {
            break;
        }
        items.push(scan_item(&mut cur)?);
        if !cur.eof() && !cur.peek().is_some_and(is_separator) {
            return Err(unexpected(&cur));
        }
    }
    Ok(items)
}

fn scan_item(cur: &mut Cursor<'_>) -> Result<Item, DateError> {
    let from = scan_date(cur)?;

    let after_from = cur.clone();
    skip_spaces(cur);
    if cur.peek() != Some(DateGroup::RANGE) {
        *cur = after_from;
        return Ok(Item::Single(from));
    }
    cur.bump(); // -
    skip_spaces(cur);
    let to = scan_date(cur)?;

    let after_to = cur.clone();
    skip_spaces(cur);
    let step = if cur.starts_with(Step::WEEKLY_MARK.as_bytes()) {
        cur.bump_n(Step::WEEKLY_MARK.len());
        Step::Weekly
    } else if cur.starts_with(Step::BIWEEKLY_MARK.as_bytes()) {
        cur.bump_n(Step::BIWEEKLY_MARK.len());
        Step::Biweekly
    } else {
        *cur = after_to;
        Step::Weekly
    };

    Ok(Item::Range { from, to, step })
}

fn scan_date(cur: &mut Cursor<'_>) -> Result<DateLit, DateError> {
    let local_start = cur.i;

    let day = cur.eat_while(|b| b.is_ascii_digit());
    if day.is_empty() {
        return Err(unexpected(cur));
    }
    if cur.peek() != Some(DateGroup::DOT) {
        return Err(unexpected(cur));
    }
    cur.bump(); // .
    let month = cur.eat_while(|b| b.is_ascii_digit());
    if month.is_empty() {
        return Err(unexpected(cur));
    }

    let mut year = None;
    let before_year = cur.clone();
    if cur.peek() == Some(DateGroup::DOT) {
        cur.bump(); // .
        let digits = cur.eat_while(|b| b.is_ascii_digit());
        if digits.is_empty() {
            // A trailing period closes the literal rather than opening a year.
            *cur = before_year;
        } else {
            year = Some(digits);
        }
    }

    let text = cur.s[local_start..cur.i].to_string();
    let invalid = || DateError::InvalidDate { text: text.clone() };

    if day.len() > 2 || month.len() > 2 || year.is_some_and(|y| y.len() != 4) {
        return Err(invalid());
    }
    let day = day.parse().map_err(|_| invalid())?;
    let month = month.parse().map_err(|_| invalid())?;
    let year = year.map(str::parse::<i32>).transpose().map_err(|_| invalid())?;

    Ok(DateLit {
        day,
        month,
        year,
        text,
    })
}
