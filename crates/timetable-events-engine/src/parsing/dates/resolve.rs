use chrono::{Datelike, Days, NaiveDate};

use super::{
    DateError,
    grammar::{DateLit, Item, Step},
};

/// Resolves a literal to the first matching calendar date on or after `anchor`.
///
/// Literals with an explicit year ignore the anchor.
pub fn resolve(lit: &DateLit, anchor: NaiveDate) -> Result<NaiveDate, DateError> {
    let invalid = || DateError::InvalidDate {
        text: lit.text.clone(),
    };

    if let Some(year) = lit.year {
        return NaiveDate::from_ymd_opt(year, lit.month, lit.day).ok_or_else(invalid);
    }

    match NaiveDate::from_ymd_opt(anchor.year(), lit.month, lit.day) {
        Some(date) if date >= anchor => Ok(date),
        _ => NaiveDate::from_ymd_opt(anchor.year() + 1, lit.month, lit.day).ok_or_else(invalid),
    }
}

/// Expands one item into concrete dates, appending them to `out`.
pub fn expand(item: &Item, reference: NaiveDate, out: &mut Vec<NaiveDate>) -> Result<(), DateError> {
    match item {
        Item::Single(lit) => {
            out.push(resolve(lit, reference)?);
        }
        Item::Range { from, to, step } => {
            let start = resolve(from, reference)?;
            let end = resolve(to, start)?;
            if end < start {
                return Err(DateError::InvalidRange {
                    from: from.text.clone(),
                    to: to.text.clone(),
                });
            }
            expand_range(start, end, *step, out);
        }
    }
    Ok(())
}

fn expand_range(start: NaiveDate, end: NaiveDate, step: Step, out: &mut Vec<NaiveDate>) {
    let mut current = Some(start);
    while let Some(date) = current.filter(|d| *d <= end) {
        out.push(date);
        current = date.checked_add_days(Days::new(step.days()));
    }
}
