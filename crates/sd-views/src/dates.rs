//! Date formatting
//!
//! Three variants: short (abbreviated month), long (full month name) and
//! a normalized calendar-date string usable as a form input value.
//! Month names follow the id-ID locale the dashboard renders in.

use chrono::{Datelike, NaiveDate};

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

const MONTHS_LONG: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// `5 Jan 2026`
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS_SHORT[date.month0() as usize],
        date.year()
    )
}

/// `5 Januari 2026`
pub fn format_date_long(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS_LONG[date.month0() as usize],
        date.year()
    )
}

/// `2026-01-05`, round-trippable through [`parse_date_input`].
pub fn format_date_input(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a value produced by [`format_date_input`].
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
