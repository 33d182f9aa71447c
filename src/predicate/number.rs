//! Number predicates
//!
//! Bounds are named by kind: `greater_than` is exclusive,
//! `greater_than_or_equal_to` is inclusive. Exclusive bounds sitting at the
//! representable extreme of their type are rejected when the predicate is
//! built, since no value could satisfy them.
//!
//! Floating-point bounds accept a symmetric margin through the `*_within`
//! factories. The value is moved towards the bound by `|delta|` before
//! comparing, which absorbs rounding noise.

use std::fmt;

use super::combinators::Predicate;
use crate::checks::check_argument;
use crate::ValidationFailure;

/// Numeric types that the bound predicates work with.
pub trait Number: Copy + PartialOrd + fmt::Display + Send + Sync + 'static {
    /// Additive identity.
    const ZERO: Self;
    /// Smallest representable value.
    const MIN: Self;
    /// Largest representable value.
    const MAX: Self;

    /// Absolute value, saturating for signed integers.
    fn magnitude(self) -> Self;

    /// `self + margin`, saturating for integers.
    fn plus(self, margin: Self) -> Self;

    /// `self - margin`, saturating for integers.
    fn minus(self, margin: Self) -> Self;
}

/// Numbers that accept an error margin.
pub trait Float: Number {}

macro_rules! impl_signed_number {
    ($($ty:ty),+) => {
        $(
            impl Number for $ty {
                const ZERO: Self = 0;
                const MIN: Self = <$ty>::MIN;
                const MAX: Self = <$ty>::MAX;

                fn magnitude(self) -> Self {
                    self.saturating_abs()
                }

                fn plus(self, margin: Self) -> Self {
                    self.saturating_add(margin)
                }

                fn minus(self, margin: Self) -> Self {
                    self.saturating_sub(margin)
                }
            }
        )+
    };
}

macro_rules! impl_unsigned_number {
    ($($ty:ty),+) => {
        $(
            impl Number for $ty {
                const ZERO: Self = 0;
                const MIN: Self = <$ty>::MIN;
                const MAX: Self = <$ty>::MAX;

                fn magnitude(self) -> Self {
                    self
                }

                fn plus(self, margin: Self) -> Self {
                    self.saturating_add(margin)
                }

                fn minus(self, margin: Self) -> Self {
                    self.saturating_sub(margin)
                }
            }
        )+
    };
}

macro_rules! impl_float_number {
    ($($ty:ty),+) => {
        $(
            impl Number for $ty {
                const ZERO: Self = 0.0;
                const MIN: Self = <$ty>::MIN;
                const MAX: Self = <$ty>::MAX;

                fn magnitude(self) -> Self {
                    self.abs()
                }

                fn plus(self, margin: Self) -> Self {
                    self + margin
                }

                fn minus(self, margin: Self) -> Self {
                    self - margin
                }
            }

            impl Float for $ty {}
        )+
    };
}

impl_signed_number!(i8, i16, i32, i64, i128, isize);
impl_unsigned_number!(u8, u16, u32, u64, u128, usize);
impl_float_number!(f32, f64);

fn describe_bound<N: Number>(op: &str, bound: N, delta: N) -> String {
    if delta == N::ZERO {
        format!("Number must be {} {}", op, bound)
    } else {
        format!("Number must be {} {} +- {}", op, bound, delta)
    }
}

/// Predicate for an exclusive lower bound.
#[derive(Clone, Copy, Debug)]
pub struct GreaterThan<N> {
    bound: N,
    delta: N,
}

impl<N: Number> Predicate<N> for GreaterThan<N> {
    #[inline]
    fn check(&self, value: &N) -> Result<(), ValidationFailure> {
        if value.plus(self.delta) > self.bound {
            Ok(())
        } else {
            Err(ValidationFailure::new(describe_bound(">", self.bound, self.delta)))
        }
    }
}

/// Create a predicate that checks `value > exclusive_lower_bound`.
///
/// # Panics
///
/// Panics if the bound is the largest value of its type.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
///
/// assert!(greater_than(5).check(&6).is_ok());
/// assert!(greater_than(5).check(&5).is_err());
/// ```
#[track_caller]
pub fn greater_than<N: Number>(exclusive_lower_bound: N) -> GreaterThan<N> {
    check_argument(
        exclusive_lower_bound < N::MAX,
        format_args!("Numbers cannot exceed {}", N::MAX),
    );
    GreaterThan {
        bound: exclusive_lower_bound,
        delta: N::ZERO,
    }
}

/// Like [`greater_than`], allowing the value to fall short by up to `|delta|`.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
///
/// let p = greater_than_within(1.0, 0.01);
/// assert!(p.check(&0.995).is_ok());
/// assert!(p.check(&0.98).is_err());
/// ```
#[track_caller]
pub fn greater_than_within<F: Float>(exclusive_lower_bound: F, delta: F) -> GreaterThan<F> {
    GreaterThan {
        delta: delta.magnitude(),
        ..greater_than(exclusive_lower_bound)
    }
}

/// Predicate for an inclusive lower bound.
#[derive(Clone, Copy, Debug)]
pub struct GreaterThanOrEqualTo<N> {
    bound: N,
    delta: N,
}

impl<N: Number> Predicate<N> for GreaterThanOrEqualTo<N> {
    #[inline]
    fn check(&self, value: &N) -> Result<(), ValidationFailure> {
        if value.plus(self.delta) >= self.bound {
            Ok(())
        } else if self.delta == N::ZERO {
            Err(ValidationFailure::new(format!(
                "Number must be greater than or equal to {}",
                self.bound
            )))
        } else {
            Err(ValidationFailure::new(describe_bound(">=", self.bound, self.delta)))
        }
    }
}

/// Create a predicate that checks `value >= inclusive_lower_bound`.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
///
/// assert!(greater_than_or_equal_to(5).check(&5).is_ok());
/// assert!(greater_than_or_equal_to(5).check(&4).is_err());
/// ```
pub fn greater_than_or_equal_to<N: Number>(inclusive_lower_bound: N) -> GreaterThanOrEqualTo<N> {
    GreaterThanOrEqualTo {
        bound: inclusive_lower_bound,
        delta: N::ZERO,
    }
}

/// Like [`greater_than_or_equal_to`], with a margin of `|delta|`.
pub fn greater_than_or_equal_to_within<F: Float>(
    inclusive_lower_bound: F,
    delta: F,
) -> GreaterThanOrEqualTo<F> {
    GreaterThanOrEqualTo {
        bound: inclusive_lower_bound,
        delta: delta.magnitude(),
    }
}

/// Predicate for an exclusive upper bound.
#[derive(Clone, Copy, Debug)]
pub struct LessThan<N> {
    bound: N,
    delta: N,
}

impl<N: Number> Predicate<N> for LessThan<N> {
    #[inline]
    fn check(&self, value: &N) -> Result<(), ValidationFailure> {
        if value.minus(self.delta) < self.bound {
            Ok(())
        } else {
            Err(ValidationFailure::new(describe_bound("<", self.bound, self.delta)))
        }
    }
}

/// Create a predicate that checks `value < exclusive_upper_bound`.
///
/// # Panics
///
/// Panics if the bound is the smallest value of its type.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
///
/// assert!(less_than(5).check(&4).is_ok());
/// assert!(less_than(5).check(&5).is_err());
/// ```
#[track_caller]
pub fn less_than<N: Number>(exclusive_upper_bound: N) -> LessThan<N> {
    check_argument(
        exclusive_upper_bound > N::MIN,
        format_args!("Numbers cannot be less than {}", N::MIN),
    );
    LessThan {
        bound: exclusive_upper_bound,
        delta: N::ZERO,
    }
}

/// Like [`less_than`], allowing the value to overshoot by up to `|delta|`.
#[track_caller]
pub fn less_than_within<F: Float>(exclusive_upper_bound: F, delta: F) -> LessThan<F> {
    LessThan {
        delta: delta.magnitude(),
        ..less_than(exclusive_upper_bound)
    }
}

/// Predicate for an inclusive upper bound.
#[derive(Clone, Copy, Debug)]
pub struct LessThanOrEqualTo<N> {
    bound: N,
    delta: N,
}

impl<N: Number> Predicate<N> for LessThanOrEqualTo<N> {
    #[inline]
    fn check(&self, value: &N) -> Result<(), ValidationFailure> {
        if value.minus(self.delta) <= self.bound {
            Ok(())
        } else if self.delta == N::ZERO {
            Err(ValidationFailure::new(format!(
                "Number must be less than or equal to {}",
                self.bound
            )))
        } else {
            Err(ValidationFailure::new(describe_bound("<=", self.bound, self.delta)))
        }
    }
}

/// Create a predicate that checks `value <= inclusive_upper_bound`.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
///
/// assert!(less_than_or_equal_to(5).check(&5).is_ok());
/// assert!(less_than_or_equal_to(5).check(&6).is_err());
/// ```
pub fn less_than_or_equal_to<N: Number>(inclusive_upper_bound: N) -> LessThanOrEqualTo<N> {
    LessThanOrEqualTo {
        bound: inclusive_upper_bound,
        delta: N::ZERO,
    }
}

/// Like [`less_than_or_equal_to`], with a margin of `|delta|`.
pub fn less_than_or_equal_to_within<F: Float>(
    inclusive_upper_bound: F,
    delta: F,
) -> LessThanOrEqualTo<F> {
    LessThanOrEqualTo {
        bound: inclusive_upper_bound,
        delta: delta.magnitude(),
    }
}

/// Predicate for value in range (inclusive).
#[derive(Clone, Copy, Debug)]
pub struct NumberBetween<N> {
    min: N,
    max: N,
}

impl<N: Number> Predicate<N> for NumberBetween<N> {
    #[inline]
    fn check(&self, value: &N) -> Result<(), ValidationFailure> {
        if *value >= self.min && *value <= self.max {
            Ok(())
        } else {
            Err(ValidationFailure::new(format!(
                "Expected a number between {} and {} but got {} instead",
                self.min, self.max, value
            )))
        }
    }
}

/// Create a predicate that checks `min <= value <= max`.
///
/// # Panics
///
/// Panics unless `min < max`.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
///
/// let p = number_between(0, 100);
/// assert!(p.check(&0).is_ok());
/// assert!(p.check(&100).is_ok());
/// assert!(p.check(&101).is_err());
/// ```
#[track_caller]
pub fn number_between<N: Number>(min: N, max: N) -> NumberBetween<N> {
    check_argument(min < max, "Minimum must be less than Max.");
    NumberBetween { min, max }
}

/// Predicate for strictly positive numbers.
#[derive(Clone, Copy, Debug)]
pub struct Positive<N> {
    kind: &'static str,
    _number: std::marker::PhantomData<fn() -> N>,
}

impl<N: Number> Predicate<N> for Positive<N> {
    #[inline]
    fn check(&self, value: &N) -> Result<(), ValidationFailure> {
        if *value > N::ZERO {
            Ok(())
        } else {
            Err(ValidationFailure::new(format!(
                "Expected positive {}: {}",
                self.kind, value
            )))
        }
    }
}

/// Create a predicate that checks an `i32` is greater than zero.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
///
/// assert!(positive_integer().check(&1).is_ok());
/// assert_eq!(
///     positive_integer().check(&-1).unwrap_err().message(),
///     "Expected positive integer: -1"
/// );
/// ```
pub fn positive_integer() -> Positive<i32> {
    Positive {
        kind: "integer",
        _number: std::marker::PhantomData,
    }
}

/// Create a predicate that checks an `i64` is greater than zero.
pub fn positive_long() -> Positive<i64> {
    Positive {
        kind: "long",
        _number: std::marker::PhantomData,
    }
}

/// Create a predicate that checks an `i32` is less than zero.
pub fn negative_integer() -> LessThan<i32> {
    less_than(0)
}

/// Create a predicate that checks an `i64` is less than zero.
pub fn negative_long() -> LessThan<i64> {
    less_than(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::PredicateExt;

    #[test]
    fn test_greater_than() {
        assert!(greater_than(5).check(&6).is_ok());
        let failure = greater_than(5).check(&5).unwrap_err();
        assert_eq!(failure.message(), "Number must be > 5");
    }

    #[test]
    fn test_greater_than_long() {
        assert!(greater_than(5_i64).check(&i64::MAX).is_ok());
        assert!(greater_than(i64::MIN).check(&i64::MIN).is_err());
    }

    #[test]
    #[should_panic(expected = "Numbers cannot exceed")]
    fn test_greater_than_rejects_max_bound() {
        greater_than(i32::MAX);
    }

    #[test]
    #[should_panic(expected = "Numbers cannot exceed")]
    fn test_greater_than_rejects_float_max_bound() {
        greater_than(f64::MAX);
    }

    #[test]
    fn test_greater_than_within() {
        let p = greater_than_within(10.0, 0.5);
        assert!(p.check(&9.6).is_ok());
        let failure = p.check(&9.4).unwrap_err();
        assert_eq!(failure.message(), "Number must be > 10 +- 0.5");
    }

    #[test]
    fn test_negative_delta_is_treated_as_magnitude() {
        let p = greater_than_within(10.0, -0.5);
        assert!(p.check(&9.6).is_ok());
    }

    #[test]
    fn test_greater_than_or_equal_to() {
        assert!(greater_than_or_equal_to(5).check(&5).is_ok());
        let failure = greater_than_or_equal_to(5).check(&4).unwrap_err();
        assert_eq!(failure.message(), "Number must be greater than or equal to 5");
    }

    #[test]
    fn test_greater_than_or_equal_to_within() {
        let p = greater_than_or_equal_to_within(1.0_f32, 0.1);
        assert!(p.check(&0.95).is_ok());
        assert!(p.check(&0.8).is_err());
    }

    #[test]
    fn test_less_than() {
        assert!(less_than(5).check(&4).is_ok());
        let failure = less_than(5).check(&5).unwrap_err();
        assert_eq!(failure.message(), "Number must be < 5");
    }

    #[test]
    #[should_panic(expected = "Numbers cannot be less than")]
    fn test_less_than_rejects_min_bound() {
        less_than(i64::MIN);
    }

    #[test]
    #[should_panic(expected = "Numbers cannot be less than")]
    fn test_less_than_rejects_float_min_bound() {
        less_than(f64::MIN);
    }

    #[test]
    fn test_less_than_within() {
        let p = less_than_within(10.0, 0.5);
        assert!(p.check(&10.4).is_ok());
        assert!(p.check(&10.6).is_err());
    }

    #[test]
    fn test_less_than_or_equal_to() {
        assert!(less_than_or_equal_to(5).check(&5).is_ok());
        let failure = less_than_or_equal_to(5).check(&6).unwrap_err();
        assert_eq!(failure.message(), "Number must be less than or equal to 5");
    }

    #[test]
    fn test_less_than_or_equal_to_within() {
        let p = less_than_or_equal_to_within(90.0, 0.001);
        assert!(p.check(&90.0005).is_ok());
        let failure = p.check(&91.0).unwrap_err();
        assert_eq!(failure.message(), "Number must be <= 90 +- 0.001");
    }

    #[test]
    fn test_number_between() {
        let p = number_between(0, 100);
        assert!(p.check(&0).is_ok());
        assert!(p.check(&50).is_ok());
        assert!(p.check(&100).is_ok());
        let failure = p.check(&101).unwrap_err();
        assert_eq!(
            failure.message(),
            "Expected a number between 0 and 100 but got 101 instead"
        );
    }

    #[test]
    #[should_panic(expected = "Minimum must be less than Max.")]
    fn test_number_between_rejects_equal_bounds() {
        number_between(5, 5);
    }

    #[test]
    #[should_panic(expected = "Minimum must be less than Max.")]
    fn test_number_between_rejects_inverted_bounds() {
        number_between(10_i64, -10);
    }

    #[test]
    fn test_positive_integer() {
        assert!(positive_integer().check(&1).is_ok());
        assert!(positive_integer().check(&0).is_err());
        let failure = positive_integer().check(&-1).unwrap_err();
        assert!(failure.message().contains("-1"));
    }

    #[test]
    fn test_positive_long() {
        assert!(positive_long().check(&1).is_ok());
        let failure = positive_long().check(&-7).unwrap_err();
        assert_eq!(failure.message(), "Expected positive long: -7");
    }

    #[test]
    fn test_negative_integer_and_long() {
        assert!(negative_integer().check(&-1).is_ok());
        assert!(negative_integer().check(&0).is_err());
        assert!(negative_long().check(&-1).is_ok());
        assert!(negative_long().check(&1).is_err());
    }

    #[test]
    fn test_unsigned_bounds() {
        assert!(greater_than(0_u16).check(&1).is_ok());
        assert!(less_than_or_equal_to(10_u8).check(&11).is_err());
    }

    #[test]
    fn test_combined_number_predicates() {
        let p = greater_than(10).and(less_than(20));
        assert!(p.check(&15).is_ok());
        assert!(p.check(&10).is_err());
        assert!(p.check(&20).is_err());
    }
}
