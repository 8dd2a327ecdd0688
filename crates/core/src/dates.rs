// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Calendar-date derivation: initiative spans and timeline bounds.

use chrono::{Datelike, Months, NaiveDate};

use crate::model::Epic;

/// Derive an initiative's span from its epics.
///
/// Each boundary is computed independently over defined values only: the
/// start is the min of defined epic starts (None when no epic has one),
/// the end is the max of defined epic ends. One side may be defined while
/// the other is not. No epic contributes a synthetic default.
pub fn derive_span(epics: &[Epic]) -> (Option<NaiveDate>, Option<NaiveDate>) {
    let start = epics.iter().filter_map(|e| e.start_date).min();
    let end = epics.iter().filter_map(|e| e.end_date).max();
    (start, end)
}

/// First day of the month containing `date`.
pub fn month_floor(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the month at or after `date`: `date` itself when it is
/// already a first-of-month, otherwise the first of the next month.
pub fn month_ceil(date: NaiveDate) -> NaiveDate {
    if date.day() == 1 {
        date
    } else {
        add_months(month_floor(date), 1)
    }
}

/// Shift a date by whole months, saturating at the calendar's edges.
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    if months >= 0 {
        date.checked_add_months(Months::new(months as u32))
            .unwrap_or(date)
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
            .unwrap_or(date)
    }
}

/// Month-aligned, padded timeline bounds over every usable date in the
/// result: month-floor of the earliest minus one month, month-ceil of the
/// latest plus one month. Returns None when no date exists at all — the
/// timeline has nothing to anchor on.
pub fn padded_bounds<I>(dates: I) -> Option<(NaiveDate, NaiveDate)>
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut earliest: Option<NaiveDate> = None;
    let mut latest: Option<NaiveDate> = None;
    for date in dates {
        earliest = Some(earliest.map_or(date, |d| d.min(date)));
        latest = Some(latest.map_or(date, |d| d.max(date)));
    }
    let (lo, hi) = (earliest?, latest?);
    Some((add_months(month_floor(lo), -1), add_months(month_ceil(hi), 1)))
}

#[cfg(test)]
#[path = "dates_tests.rs"]
mod tests;
