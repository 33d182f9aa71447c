//! Timestamp predicates
//!
//! Predicates over [`chrono::DateTime`] in any time zone, plus a pair over
//! raw epoch milliseconds. "Now" is read from the system clock on every
//! check, never captured when the predicate is built.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};

use super::combinators::Predicate;
use super::number::greater_than;
use crate::checks::check_argument;
use crate::ValidationFailure;

/// Predicate for a timestamp strictly before the current instant.
#[derive(Clone, Copy, Default, Debug)]
pub struct InThePast;

impl<Tz> Predicate<DateTime<Tz>> for InThePast
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    fn check(&self, value: &DateTime<Tz>) -> Result<(), ValidationFailure> {
        let now = Utc::now();
        if *value < now {
            Ok(())
        } else {
            Err(ValidationFailure::new(format!(
                "Expected Timestamp {} to be in the past. Now: {}",
                value, now
            )))
        }
    }
}

/// Create a predicate that checks the timestamp has already happened.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
/// use chrono::{Duration, Utc};
///
/// assert!(in_the_past().check(&(Utc::now() - Duration::hours(1))).is_ok());
/// assert!(in_the_past().check(&(Utc::now() + Duration::hours(1))).is_err());
/// ```
pub fn in_the_past() -> InThePast {
    InThePast
}

/// Predicate for a timestamp strictly after the current instant.
#[derive(Clone, Copy, Default, Debug)]
pub struct InTheFuture;

impl<Tz> Predicate<DateTime<Tz>> for InTheFuture
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    fn check(&self, value: &DateTime<Tz>) -> Result<(), ValidationFailure> {
        let now = Utc::now();
        if *value > now {
            Ok(())
        } else {
            Err(ValidationFailure::new(format!(
                "Expected Timestamp {} to be in the future. Now: {}",
                value, now
            )))
        }
    }
}

/// Create a predicate that checks the timestamp has not happened yet.
pub fn in_the_future() -> InTheFuture {
    InTheFuture
}

/// Predicate for a timestamp strictly before a fixed instant.
#[derive(Clone, Debug)]
pub struct Before<Tz: TimeZone> {
    instant: DateTime<Tz>,
}

impl<Tz> Predicate<DateTime<Tz>> for Before<Tz>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display + Send + Sync,
{
    fn check(&self, value: &DateTime<Tz>) -> Result<(), ValidationFailure> {
        if *value < self.instant {
            Ok(())
        } else {
            Err(ValidationFailure::new(format!(
                "Expected Timestamp to be before {}",
                self.instant
            )))
        }
    }
}

/// Create a predicate that checks the timestamp is before `instant`.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
/// use chrono::{TimeZone, Utc};
///
/// let deadline = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
/// let submitted = Utc.with_ymd_and_hms(2029, 6, 1, 12, 0, 0).unwrap();
/// assert!(before(deadline).check(&submitted).is_ok());
/// assert!(before(submitted).check(&deadline).is_err());
/// ```
pub fn before<Tz: TimeZone>(instant: DateTime<Tz>) -> Before<Tz> {
    Before { instant }
}

/// Predicate for a timestamp strictly after a fixed instant.
#[derive(Clone, Debug)]
pub struct After<Tz: TimeZone> {
    instant: DateTime<Tz>,
}

impl<Tz> Predicate<DateTime<Tz>> for After<Tz>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display + Send + Sync,
{
    fn check(&self, value: &DateTime<Tz>) -> Result<(), ValidationFailure> {
        if *value > self.instant {
            Ok(())
        } else {
            Err(ValidationFailure::new(format!(
                "Expected Timestamp to be after {}",
                self.instant
            )))
        }
    }
}

/// Create a predicate that checks the timestamp is after `instant`.
pub fn after<Tz: TimeZone>(instant: DateTime<Tz>) -> After<Tz> {
    After { instant }
}

fn check_margin(margin_millis: i64, difference: i64) -> Result<(), ValidationFailure> {
    if difference > margin_millis {
        Err(ValidationFailure::new(format!(
            "Time difference of {} exceeded margin-of-error of {}ms",
            difference, margin_millis
        )))
    } else {
        Ok(())
    }
}

/// Predicate for a timestamp close to the current instant.
#[derive(Clone, Copy, Debug)]
pub struct NowWithinDelta {
    margin_millis: i64,
}

impl<Tz: TimeZone> Predicate<DateTime<Tz>> for NowWithinDelta {
    fn check(&self, value: &DateTime<Tz>) -> Result<(), ValidationFailure> {
        let now = Utc::now().timestamp_millis();
        let difference = value.timestamp_millis().saturating_sub(now).saturating_abs();
        check_margin(self.margin_millis, difference)
    }
}

/// Create a predicate that checks the timestamp is within
/// `margin_millis` of now, in either direction.
///
/// # Panics
///
/// Panics if `margin_millis` is negative.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
/// use chrono::{Duration, Utc};
///
/// let p = now_within_delta(60_000);
/// assert!(p.check(&Utc::now()).is_ok());
/// assert!(p.check(&(Utc::now() - Duration::hours(1))).is_err());
/// ```
#[track_caller]
pub fn now_within_delta(margin_millis: i64) -> NowWithinDelta {
    check_argument(margin_millis >= 0, "millis must be non-negative.");
    NowWithinDelta { margin_millis }
}

/// Create a predicate that checks the timestamp is within 5ms of now.
pub fn right_now() -> NowWithinDelta {
    now_within_delta(5)
}

/// Predicate for a timestamp close to a fixed instant.
#[derive(Clone, Debug)]
pub struct EqualToInstantWithinDelta<Tz: TimeZone> {
    instant: DateTime<Tz>,
    delta_millis: i64,
}

impl<Tz> Predicate<DateTime<Tz>> for EqualToInstantWithinDelta<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Send + Sync,
{
    fn check(&self, value: &DateTime<Tz>) -> Result<(), ValidationFailure> {
        let difference = value
            .timestamp_millis()
            .saturating_sub(self.instant.timestamp_millis())
            .saturating_abs();
        if difference > self.delta_millis {
            Err(ValidationFailure::new(format!(
                "Delta should not exceed {}ms, but is {}ms",
                self.delta_millis, difference
            )))
        } else {
            Ok(())
        }
    }
}

/// Create a predicate that checks the timestamp is within `|delta_millis|`
/// of `instant`.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
/// use chrono::{Duration, TimeZone, Utc};
///
/// let noon = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
/// let p = equal_to_instant_within_delta(noon, 500);
/// assert!(p.check(&(noon + Duration::milliseconds(300))).is_ok());
/// assert!(p.check(&(noon - Duration::seconds(1))).is_err());
/// ```
pub fn equal_to_instant_within_delta<Tz: TimeZone>(
    instant: DateTime<Tz>,
    delta_millis: i64,
) -> EqualToInstantWithinDelta<Tz> {
    EqualToInstantWithinDelta {
        instant,
        delta_millis: delta_millis.saturating_abs(),
    }
}

/// Predicate for epoch milliseconds close to the current instant.
#[derive(Clone, Copy, Debug)]
pub struct EpochNowWithinDelta {
    margin_millis: i64,
}

impl Predicate<i64> for EpochNowWithinDelta {
    fn check(&self, value: &i64) -> Result<(), ValidationFailure> {
        greater_than(0_i64).check(value)?;
        let now = Utc::now().timestamp_millis();
        check_margin(self.margin_millis, value.saturating_sub(now).saturating_abs())
    }
}

/// Create a predicate that checks epoch milliseconds are positive and
/// within `margin_millis` of now.
///
/// # Panics
///
/// Panics if `margin_millis` is negative.
#[track_caller]
pub fn epoch_now_within_delta(margin_millis: i64) -> EpochNowWithinDelta {
    check_argument(margin_millis >= 0, "millis must be non-negative.");
    EpochNowWithinDelta { margin_millis }
}

/// Create a predicate that checks epoch milliseconds are within 5ms of now.
pub fn epoch_right_now() -> EpochNowWithinDelta {
    epoch_now_within_delta(5)
}
