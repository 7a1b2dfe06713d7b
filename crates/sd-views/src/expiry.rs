//! Days-remaining and expiry-window classification
//!
//! Drives the renewal badges on legal documents and certificates. A
//! target date is treated as midnight UTC and the day count is rounded
//! up, so "tomorrow" reads as 1 until it arrives.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Default expiry warning window in days. Certificate views also pass 90.
pub const EXPIRING_SOON_DAYS: i64 = 30;

const SECS_PER_DAY: i64 = 24 * 60 * 60;

/// Signed day count from `now` to `target`, ceiling-rounded.
pub fn days_remaining(target: NaiveDate, now: DateTime<Utc>) -> i64 {
    let target_midnight = target.and_time(NaiveTime::MIN).and_utc();
    let secs = (target_midnight - now).num_seconds();
    secs.div_euclid(SECS_PER_DAY) + i64::from(secs.rem_euclid(SECS_PER_DAY) > 0)
}

/// Strictly positive remaining days, at or below `threshold`. A target
/// with exactly 0 days remaining is neither expiring-soon nor expired.
pub fn is_expiring_soon(target: NaiveDate, now: DateTime<Utc>, threshold: i64) -> bool {
    let remaining = days_remaining(target, now);
    remaining > 0 && remaining <= threshold
}

/// Strictly negative remaining days.
pub fn is_expired(target: NaiveDate, now: DateTime<Utc>) -> bool {
    days_remaining(target, now) < 0
}
