//! General-purpose predicates: presence, identity, type and equality
//!
//! Absent values are modelled with `Option`. [`not_null`] and [`null_object`]
//! check presence directly, and [`present`] lifts any predicate over `T` into a
//! predicate over `Option<T>` that rejects `None` first.

use std::any::{type_name, Any};
use std::fmt;
use std::marker::PhantomData;
use std::ptr;

use super::combinators::Predicate;
use crate::ValidationFailure;

/// Predicate that rejects `None`.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotNull;

impl<T> Predicate<Option<T>> for NotNull {
    #[inline]
    fn check(&self, value: &Option<T>) -> Result<(), ValidationFailure> {
        match value {
            Some(_) => Ok(()),
            None => Err(ValidationFailure::new("Argument is null")),
        }
    }
}

/// Create a predicate that rejects `None`.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
///
/// assert!(not_null().check(&Some(5)).is_ok());
/// assert_eq!(
///     not_null().check(&None::<i32>).unwrap_err().message(),
///     "Argument is null"
/// );
/// ```
pub fn not_null() -> NotNull {
    NotNull
}

/// Predicate that accepts only `None`.
#[derive(Clone, Copy, Default, Debug)]
pub struct NullObject;

impl<T: fmt::Debug> Predicate<Option<T>> for NullObject {
    fn check(&self, value: &Option<T>) -> Result<(), ValidationFailure> {
        match value {
            None => Ok(()),
            Some(v) => Err(ValidationFailure::new(format!(
                "Argument is not null: {:?}",
                v
            ))),
        }
    }
}

/// Create a predicate that accepts only `None`.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
///
/// assert!(null_object().check(&None::<i32>).is_ok());
/// assert!(null_object().check(&Some(1)).is_err());
/// ```
pub fn null_object() -> NullObject {
    NullObject
}

/// Predicate over `Option<T>` that requires a value satisfying `P`.
#[derive(Clone, Copy, Debug)]
pub struct Present<P>(pub P);

impl<T, P: Predicate<T>> Predicate<Option<T>> for Present<P> {
    #[inline]
    fn check(&self, value: &Option<T>) -> Result<(), ValidationFailure> {
        match value {
            Some(v) => self.0.check(v),
            None => NotNull.check(value),
        }
    }
}

/// Lift a predicate over `T` to one over `Option<T>`.
///
/// `None` is rejected with the same failure as [`not_null`]; `Some(v)` is
/// checked with `predicate`.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
///
/// let p = present(positive_integer());
/// assert!(p.check(&Some(3)).is_ok());
/// assert!(p.check(&Some(-3)).is_err());
/// assert!(p.check(&None::<i32>).unwrap_err().message().contains("null"));
/// ```
pub fn present<P>(predicate: P) -> Present<P> {
    Present(predicate)
}

/// Predicate that requires the argument to be one specific instance.
///
/// The subject is a reference, so identity survives being handed to
/// [`check_that`](crate::check_that).
pub struct SameInstanceAs<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> fmt::Debug for SameInstanceAs<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SameInstanceAs({:p})", self.0)
    }
}

impl<T: ?Sized + Sync> Predicate<&T> for SameInstanceAs<'_, T> {
    fn check(&self, value: &&T) -> Result<(), ValidationFailure> {
        let value: &T = value;
        if ptr::eq(value, self.0) {
            Ok(())
        } else {
            Err(ValidationFailure::new(format!(
                "Expected {:p} to be the same instance as {:p}",
                value, self.0
            )))
        }
    }
}

/// Create a predicate that checks identity rather than equality.
///
/// # Example
///
/// ```rust
/// use alembic::prelude::*;
///
/// let original = String::from("alchemy");
/// let copy = original.clone();
///
/// assert!(check_that(&original).is(same_instance_as(&original)).is_ok());
/// assert!(check_that(&copy).is(same_instance_as(&original)).is_err());
/// ```
pub fn same_instance_as<T: ?Sized>(other: &T) -> SameInstanceAs<'_, T> {
    SameInstanceAs(other)
}

/// A value whose concrete type can be inspected at runtime.
pub trait AsAny {
    /// View the value as `dyn Any`.
    fn as_any(&self) -> &dyn Any;
}

impl AsAny for dyn Any {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl AsAny for dyn Any + Send {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl AsAny for dyn Any + Send + Sync {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<A: AsAny + ?Sized> AsAny for Box<A> {
    fn as_any(&self) -> &dyn Any {
        (**self).as_any()
    }
}

/// Predicate that requires a type-erased value to be a `U`.
pub struct InstanceOf<U>(PhantomData<fn() -> U>);

impl<U> Clone for InstanceOf<U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U> Copy for InstanceOf<U> {}

impl<U> fmt::Debug for InstanceOf<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InstanceOf({})", type_name::<U>())
    }
}

impl<U: Any, V: AsAny + ?Sized> Predicate<V> for InstanceOf<U> {
    fn check(&self, value: &V) -> Result<(), ValidationFailure> {
        if value.as_any().is::<U>() {
            Ok(())
        } else {
            Err(ValidationFailure::new(format!(
                "Expected Object of type: {}",
                type_name::<U>()
            )))
        }
    }
}

/// Create a predicate that checks the concrete type behind a `dyn Any`.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
/// use std::any::Any;
///
/// let value: Box<dyn Any> = Box::new(42_i32);
/// assert!(instance_of::<i32>().check(&value).is_ok());
/// assert!(instance_of::<String>().check(&value).is_err());
/// ```
pub fn instance_of<U: Any>() -> InstanceOf<U> {
    InstanceOf(PhantomData)
}

/// Predicate for equality with an expected value.
#[derive(Clone, Copy, Debug)]
pub struct EqualTo<T>(pub T);

impl<T: PartialEq + fmt::Debug + Send + Sync> Predicate<T> for EqualTo<T> {
    fn check(&self, value: &T) -> Result<(), ValidationFailure> {
        if *value == self.0 {
            Ok(())
        } else {
            Err(ValidationFailure::new(format!(
                "Expected {:?} to be equal to {:?}",
                value, self.0
            )))
        }
    }
}

/// Create a predicate that checks for equality.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
///
/// assert!(equal_to(5).check(&5).is_ok());
/// assert!(equal_to("a").check(&"b").is_err());
/// ```
pub fn equal_to<T: PartialEq + fmt::Debug + Send + Sync>(other: T) -> EqualTo<T> {
    EqualTo(other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{non_empty_string, not, positive_integer};

    #[test]
    fn test_not_null() {
        assert!(not_null().check(&Some("a")).is_ok());
        let failure = not_null().check(&None::<&str>).unwrap_err();
        assert_eq!(failure.message(), "Argument is null");
    }

    #[test]
    fn test_null_object() {
        assert!(null_object().check(&None::<i32>).is_ok());
        let failure = null_object().check(&Some(7)).unwrap_err();
        assert_eq!(failure.message(), "Argument is not null: 7");
    }

    #[test]
    fn test_not_null_and_null_object_are_opposites() {
        for value in [Some(1), None] {
            assert_ne!(
                not_null().check(&value).is_ok(),
                null_object().check(&value).is_ok()
            );
        }
    }

    #[test]
    fn test_present_rejects_none_first() {
        let p = present(non_empty_string());
        assert!(p.check(&Some("abc")).is_ok());
        assert_eq!(
            p.check(&Some("")).unwrap_err().message(),
            "String argument is empty"
        );
        assert_eq!(
            p.check(&None::<&str>).unwrap_err().message(),
            "Argument is null"
        );
    }

    #[test]
    fn test_present_with_negation() {
        let p = present(not(positive_integer()));
        assert!(p.check(&Some(-1)).is_ok());
        assert!(p.check(&None::<i32>).is_err());
    }

    #[test]
    fn test_same_instance_as() {
        let a = vec![1, 2, 3];
        let b = a.clone();
        let p = same_instance_as(&a);
        assert!(p.check(&&a).is_ok());

        let failure = p.check(&&b).unwrap_err();
        assert!(failure.message().contains("to be the same instance as"));
    }

    #[test]
    fn test_same_instance_as_through_builder() {
        let a = String::from("alembic");
        let b = a.clone();
        assert!(crate::check_that(&a).is(same_instance_as(&a)).is_ok());
        assert!(crate::check_that(&b).is(same_instance_as(&a)).is_err());
        assert!(crate::check_that_all(&a, [&a, &b])
            .are(same_instance_as(&a))
            .is_err());
    }

    #[test]
    fn test_instance_of_boxed_any() {
        let value: Box<dyn Any + Send + Sync> = Box::new(String::from("x"));
        assert!(instance_of::<String>().check(&value).is_ok());

        let failure = instance_of::<i64>().check(&value).unwrap_err();
        assert_eq!(failure.message(), "Expected Object of type: i64");
    }

    #[test]
    fn test_instance_of_any_reference() {
        let value = 3.5_f64;
        let erased: &dyn Any = &value;
        assert!(instance_of::<f64>().check(erased).is_ok());
        assert!(instance_of::<f32>().check(erased).is_err());
    }

    #[test]
    fn test_equal_to() {
        assert!(equal_to(String::from("a")).check(&String::from("a")).is_ok());
        let failure = equal_to(3).check(&4).unwrap_err();
        assert_eq!(failure.message(), "Expected 4 to be equal to 3");
    }
}
