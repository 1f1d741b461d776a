//! Streak time logic.
//!
//! Claim eligibility is a civil-date rule, not an elapsed-duration rule: a
//! habit can be claimed again once the calendar day has rolled over in the
//! owner's time zone. 23:59 followed by 00:01 the next day is a valid pair
//! of claims two minutes apart; two claims inside the same local day are
//! not, however far apart.

use crate::CoreError;
use crate::error::Result;

use std::panic::Location;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use error_location::ErrorLocation;

/// Resolve an IANA zone name against the bundled zone database.
pub fn parse_time_zone(name: &str) -> Result<Tz> {
    name.parse::<Tz>().map_err(|_| CoreError::InvalidTimeZone {
        value: name.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// The calendar date of `instant` as observed in `tz`.
pub fn civil_date(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Strict date-only ordering: true iff `a` falls on an earlier calendar day
/// than `b` in `tz`. Two instants on the same local day compare false in
/// both directions.
pub fn is_before_by_date(a: DateTime<Utc>, b: DateTime<Utc>, tz: Tz) -> bool {
    civil_date(a, tz) < civil_date(b, tz)
}

/// Whether a habit with the given claim history can be claimed at `now`.
///
/// A never-claimed habit is always claimable. Otherwise the last claim's
/// civil date in the owner's zone must be strictly before today's.
pub fn can_claim(last_claimed_at: Option<DateTime<Utc>>, tz: Tz, now: DateTime<Utc>) -> bool {
    match last_claimed_at {
        None => true,
        Some(last) => is_before_by_date(last, now, tz),
    }
}

/// Whether an unclaimed streak has lapsed at `now`.
///
/// A claim made yesterday (in the owner's zone) still satisfies the streak,
/// because the owner has until the end of today to claim again. The streak
/// lapses once the last claim's civil date is before yesterday's civil
/// date, i.e. at least two local days stale. Never-claimed habits have no
/// streak to lapse.
pub fn should_reset(last_claimed_at: Option<DateTime<Utc>>, tz: Tz, now: DateTime<Utc>) -> bool {
    match last_claimed_at {
        None => false,
        Some(last) => {
            let yesterday = now - Duration::hours(24);
            civil_date(last, tz) < civil_date(yesterday, tz)
        }
    }
}
