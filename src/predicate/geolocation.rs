//! Latitude and longitude predicates

use super::combinators::Predicate;
use super::number::{greater_than_or_equal_to, less_than_or_equal_to};
use crate::{check_that, ValidationFailure};

/// Predicate for a latitude in degrees, `[-90, 90]`.
#[derive(Clone, Copy, Default, Debug)]
pub struct ValidLatitude;

impl Predicate<f64> for ValidLatitude {
    fn check(&self, value: &f64) -> Result<(), ValidationFailure> {
        check_that(*value)
            .using_message(format!(
                "Latitude must be between -90 and 90, but was {}",
                value
            ))
            .is(less_than_or_equal_to(90.0))?
            .is(greater_than_or_equal_to(-90.0))?;
        Ok(())
    }
}

/// Create a predicate that checks a latitude in degrees.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
///
/// assert!(valid_latitude().check(&51.5).is_ok());
/// assert_eq!(
///     valid_latitude().check(&91.0).unwrap_err().message(),
///     "Latitude must be between -90 and 90, but was 91"
/// );
/// ```
pub fn valid_latitude() -> ValidLatitude {
    ValidLatitude
}

/// Predicate for a longitude in degrees, `[-180, 180]`.
#[derive(Clone, Copy, Default, Debug)]
pub struct ValidLongitude;

impl Predicate<f64> for ValidLongitude {
    fn check(&self, value: &f64) -> Result<(), ValidationFailure> {
        check_that(*value)
            .using_message(format!(
                "Longitude must be between -180 and 180, but was {}",
                value
            ))
            .is(greater_than_or_equal_to(-180.0))?
            .is(less_than_or_equal_to(180.0))?;
        Ok(())
    }
}

/// Create a predicate that checks a longitude in degrees.
pub fn valid_longitude() -> ValidLongitude {
    ValidLongitude
}
