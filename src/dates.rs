//! Date handling for path parameters.
//!
//! Endpoint dates arrive as path segments in either `YYYY-MM-DD` or
//! `YYYYMMDD` form. Hyphens are stripped before parsing, so both spellings
//! of the same calendar date resolve to the same `NaiveDate`.

use chrono::{Days, NaiveDate};

/// Length of the rolling observation window used by the precipitation and
/// tobs endpoints, anchored at the newest measurement date.
pub const OBSERVATION_WINDOW_DAYS: u64 = 365;

/// Parses a caller-supplied date path parameter.
///
/// Returns `None` when the value matches neither accepted format or names an
/// impossible calendar date (e.g. month 13).
pub fn parse_path_date(raw: &str) -> Option<NaiveDate> {
    let compact = raw.replace('-', "");
    NaiveDate::parse_from_str(&compact, "%Y%m%d").ok()
}

/// Start of the one-year window ending at `anchor`.
pub fn window_start(anchor: NaiveDate) -> NaiveDate {
    anchor
        .checked_sub_days(Days::new(OBSERVATION_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MIN)
}
