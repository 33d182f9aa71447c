//! Core predicate trait and logical combinators
//!
//! This module provides the foundational `Predicate` trait and the
//! combinators for composing predicates: conjunction and negation.

use std::any::type_name;
use std::fmt;

use crate::ValidationFailure;

/// A reusable check over values of type T.
///
/// A predicate either accepts a value (`Ok(())`) or rejects it with a
/// [`ValidationFailure`] describing the violated condition. Predicates are
/// stateless: checking the same value twice gives the same answer.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
///
/// let valid_age = greater_than_or_equal_to(1).and(less_than_or_equal_to(120));
/// assert!(valid_age.check(&25).is_ok());
/// assert!(valid_age.check(&-5).is_err());
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check the value, returning a failure if it is rejected.
    fn check(&self, value: &T) -> Result<(), ValidationFailure>;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> Result<(), ValidationFailure> + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> Result<(), ValidationFailure> {
        self(value)
    }
}

/// A type-erased predicate, for storing heterogeneous predicates together.
pub struct BoxedPredicate<T: ?Sized>(Box<dyn Predicate<T>>);

impl<T: ?Sized> BoxedPredicate<T> {
    /// Box a predicate.
    pub fn new<P: Predicate<T> + 'static>(predicate: P) -> Self {
        BoxedPredicate(Box::new(predicate))
    }
}

impl<T: ?Sized> fmt::Debug for BoxedPredicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BoxedPredicate")
    }
}

impl<T: ?Sized> Predicate<T> for BoxedPredicate<T> {
    #[inline]
    fn check(&self, value: &T) -> Result<(), ValidationFailure> {
        self.0.check(value)
    }
}

/// Extension trait for predicate combinators.
///
/// All methods return concrete types, so chains cost nothing at runtime.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
///
/// let p = greater_than(0).and(less_than(100)).not();
/// assert!(p.check(&-5).is_ok());
/// assert!(p.check(&50).is_err());
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic.
    ///
    /// The second predicate only runs when the first one passes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use alembic::predicate::*;
    ///
    /// let p = greater_than(0).and(less_than(100));
    /// assert!(p.check(&50).is_ok());
    /// assert!(p.check(&0).is_err());
    /// assert!(p.check(&100).is_err());
    /// ```
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Invert the predicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use alembic::predicate::*;
    ///
    /// let p = positive_integer().not();
    /// assert!(p.check(&-5).is_ok());
    /// assert!(p.check(&5).is_err());
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }

    /// Erase the concrete type.
    fn boxed(self) -> BoxedPredicate<T>
    where
        Self: 'static,
    {
        BoxedPredicate::new(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must pass; the first failure wins.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> Result<(), ValidationFailure> {
        self.0.check(value)?;
        self.1.check(value)
    }
}

/// NOT combinator - passes only when the inner predicate fails.
#[derive(Clone, Copy)]
pub struct Not<P>(pub P);

impl<P> fmt::Debug for Not<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Not({})", type_name::<P>())
    }
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    fn check(&self, value: &T) -> Result<(), ValidationFailure> {
        match self.0.check(value) {
            Err(_) => Ok(()),
            Ok(()) => Err(ValidationFailure::new(format!(
                "Expected assertion to fail, but it passed: {}",
                type_name::<P>()
            ))),
        }
    }
}

/// Create a predicate that passes exactly when `predicate` fails.
///
/// Only a [`ValidationFailure`] counts as failing. A panic inside `predicate`
/// is not caught.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
///
/// let p = not(non_empty_string());
/// assert!(p.check("").is_ok());
/// assert!(p.check("abc").is_err());
/// ```
pub fn not<P>(predicate: P) -> Not<P> {
    Not(predicate)
}

/// Run a list of predicates in order, stopping at the first failure.
pub struct AllOf<T: ?Sized>(Vec<BoxedPredicate<T>>);

impl<T: ?Sized> fmt::Debug for AllOf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AllOf({} predicates)", self.0.len())
    }
}

impl<T: ?Sized> Predicate<T> for AllOf<T> {
    fn check(&self, value: &T) -> Result<(), ValidationFailure> {
        self.0.iter().try_for_each(|p| p.check(value))
    }
}

/// Combine a list of boxed predicates into one.
///
/// Use this when the predicates are chosen at runtime. For a fixed list,
/// [`combine!`](crate::combine) avoids the boxing.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
///
/// let valid_age = all_of(vec![
///     greater_than_or_equal_to(1).boxed(),
///     less_than_or_equal_to(120).boxed(),
/// ]);
/// assert!(valid_age.check(&30).is_ok());
/// assert!(valid_age.check(&200).is_err());
/// ```
pub fn all_of<T: ?Sized>(predicates: Vec<BoxedPredicate<T>>) -> AllOf<T> {
    AllOf(predicates)
}

/// Combine several predicates into one conjunction.
///
/// Expands to a chain of [`PredicateExt::and`], so the predicates may have
/// different concrete types. They run in order and the first failure is
/// returned.
///
/// # Example
///
/// ```rust
/// use alembic::combine;
/// use alembic::predicate::*;
///
/// let valid_age = combine!(
///     positive_integer(),
///     greater_than_or_equal_to(1),
///     less_than_or_equal_to(120),
/// );
/// assert!(valid_age.check(&30).is_ok());
/// assert!(valid_age.check(&0).is_err());
/// ```
#[macro_export]
macro_rules! combine {
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let combined = $first;
        $(
            let combined = $crate::predicate::And(combined, $rest);
        )*
        combined
    }};
}
