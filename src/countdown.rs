// SPDX-License-Identifier: MPL-2.0
//! Remaining-time computation for the conference countdown.
//!
//! [`Remaining::between`] is a pure function from a target instant and the
//! current instant to a days/hours/minutes/seconds breakdown. Both instants
//! are UTC; callers that accept timestamps from the outside world (the
//! config boundary) normalize to UTC before getting here, so the expiry
//! comparison is always between points on the same epoch.

use chrono::{DateTime, Utc};

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60_000;
const MILLIS_PER_HOUR: i64 = 3_600_000;
const MILLIS_PER_DAY: i64 = 86_400_000;

/// Wall-clock time remaining until a target instant, truncated to whole
/// seconds.
///
/// Invariant: when `expired` is true all numeric fields are zero; otherwise
/// `((days * 24 + hours) * 60 + minutes) * 60 + seconds` equals the floored
/// number of whole seconds between `now` and the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    /// 0–23
    pub hours: i64,
    /// 0–59
    pub minutes: i64,
    /// 0–59
    pub seconds: i64,
    pub expired: bool,
}

impl Remaining {
    /// The all-zero, expired breakdown.
    pub const EXPIRED: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        expired: true,
    };

    /// Computes the breakdown of `target - now`.
    ///
    /// A target at or before `now` yields [`Remaining::EXPIRED`] rather
    /// than a negative duration. Sub-second remainders are truncated.
    #[must_use]
    pub fn between(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let millis = (target - now).num_milliseconds();
        if millis <= 0 {
            return Self::EXPIRED;
        }

        Self {
            days: millis / MILLIS_PER_DAY,
            hours: (millis / MILLIS_PER_HOUR) % 24,
            minutes: (millis / MILLIS_PER_MINUTE) % 60,
            seconds: (millis / MILLIS_PER_SECOND) % 60,
            expired: false,
        }
    }

    /// Flattened total of whole seconds remaining. Zero once expired.
    #[must_use]
    pub fn total_seconds(&self) -> i64 {
        ((self.days * 24 + self.hours) * 60 + self.minutes) * 60 + self.seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn two_days_ahead_is_exactly_two_days() {
        let target = utc(2025, 9, 15, 9, 0, 0);
        let now = utc(2025, 9, 13, 9, 0, 0);
        let remaining = Remaining::between(target, now);
        assert_eq!(
            remaining,
            Remaining {
                days: 2,
                hours: 0,
                minutes: 0,
                seconds: 0,
                expired: false,
            }
        );
    }

    #[test]
    fn five_seconds_ahead() {
        let target = utc(2025, 9, 15, 9, 0, 5);
        let now = utc(2025, 9, 15, 9, 0, 0);
        let remaining = Remaining::between(target, now);
        assert_eq!(remaining.seconds, 5);
        assert_eq!(remaining.days, 0);
        assert_eq!(remaining.hours, 0);
        assert_eq!(remaining.minutes, 0);
        assert!(!remaining.expired);
    }

    #[test]
    fn past_target_is_expired_and_zero() {
        let target = utc(2025, 1, 1, 0, 0, 0);
        let now = utc(2025, 6, 1, 0, 0, 0);
        assert_eq!(Remaining::between(target, now), Remaining::EXPIRED);
    }

    #[test]
    fn target_equal_to_now_is_expired() {
        let instant = utc(2025, 9, 15, 9, 0, 0);
        assert!(Remaining::between(instant, instant).expired);
    }

    #[test]
    fn sub_second_remainder_truncates() {
        let now = utc(2025, 9, 15, 9, 0, 0);
        let target = now + chrono::Duration::milliseconds(1_999);
        let remaining = Remaining::between(target, now);
        assert_eq!(remaining.seconds, 1);
    }

    #[test]
    fn reconstruction_matches_floored_difference() {
        let now = utc(2025, 9, 1, 12, 30, 15);
        for offset_ms in [1_500_i64, 59_999, 60_000, 3_599_001, 86_400_000, 987_654_321] {
            let target = now + chrono::Duration::milliseconds(offset_ms);
            let remaining = Remaining::between(target, now);
            assert_eq!(
                remaining.total_seconds(),
                offset_ms / 1_000,
                "offset {offset_ms}ms should reconstruct to its floored seconds"
            );
        }
    }

    #[test]
    fn fields_stay_in_range() {
        let now = utc(2025, 3, 10, 0, 0, 0);
        let target = now + chrono::Duration::milliseconds(123_456_789);
        let remaining = Remaining::between(target, now);
        assert!((0..24).contains(&remaining.hours));
        assert!((0..60).contains(&remaining.minutes));
        assert!((0..60).contains(&remaining.seconds));
        assert!(remaining.days >= 0);
    }

    #[test]
    fn successive_instants_are_monotonically_non_increasing() {
        let target = utc(2025, 9, 15, 9, 0, 0);
        let mut now = utc(2025, 9, 14, 9, 0, 0);
        let mut previous = Remaining::between(target, now).total_seconds();
        for _ in 0..10 {
            now += chrono::Duration::seconds(7);
            let current = Remaining::between(target, now).total_seconds();
            assert!(current <= previous);
            previous = current;
        }
    }

    #[test]
    fn expiry_is_idempotent() {
        let target = utc(2025, 9, 15, 9, 0, 0);
        let mut now = target;
        for _ in 0..5 {
            assert_eq!(Remaining::between(target, now), Remaining::EXPIRED);
            now += chrono::Duration::hours(1);
        }
    }
}
