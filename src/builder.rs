//! The fluent assertion builder
//!
//! [`check_that`] and [`check_that_all`] capture one or more arguments. The
//! builder is then configured with an optional message override and an
//! exception strategy, and finally asked to check predicates:
//!
//! ```rust
//! use alembic::prelude::*;
//!
//! fn set_age(age: i32) -> Result<(), ValidationFailure> {
//!     check_that(age)
//!         .using_message("age must be between 1 and 120")
//!         .is(greater_than_or_equal_to(1))?
//!         .is(less_than_or_equal_to(120))?;
//!     Ok(())
//! }
//!
//! assert!(set_age(30).is_ok());
//! assert_eq!(
//!     set_age(300).unwrap_err().message(),
//!     "age must be between 1 and 120"
//! );
//! ```
//!
//! Every configuration method takes `&self` and returns a new builder, so a
//! configured builder can be kept and reused. Builders are cheap to clone.

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use crate::checks::check_not_empty;
use crate::mapper::{ExceptionMapper, Identity, Raisable, RaiseAs, WithMessage};
use crate::predicate::Predicate;
use crate::ValidationFailure;

/// Begin an assertion on a single argument.
///
/// # Example
///
/// ```rust
/// use alembic::prelude::*;
///
/// let name = "alembic";
/// assert!(check_that(name).is(non_empty_string()).is_ok());
/// ```
pub fn check_that<T>(argument: T) -> AssertionBuilder<T> {
    check_that_all(argument, [])
}

/// Begin an assertion on several arguments at once.
///
/// Every predicate is checked against `first` and then each of `others` in
/// order. With no `others` this is the same as [`check_that`].
///
/// # Example
///
/// ```rust
/// use alembic::prelude::*;
///
/// let result = check_that_all("host", ["", "port"]).are(non_empty_string());
/// assert_eq!(result.unwrap_err().message(), "String argument is empty");
/// ```
pub fn check_that_all<T>(first: T, others: impl IntoIterator<Item = T>) -> AssertionBuilder<T> {
    let mut arguments = vec![first];
    arguments.extend(others);
    AssertionBuilder {
        arguments: arguments.into(),
        mapper: Arc::new(Identity),
        override_message: None,
        last_predicate: None,
    }
}

/// An assertion in progress over arguments of type `T`, failing with `E`.
pub struct AssertionBuilder<T, E = ValidationFailure> {
    arguments: Arc<[T]>,
    mapper: Arc<dyn ExceptionMapper<E>>,
    override_message: Option<Arc<str>>,
    last_predicate: Option<&'static str>,
}

impl<T, E> Clone for AssertionBuilder<T, E> {
    fn clone(&self) -> Self {
        AssertionBuilder {
            arguments: Arc::clone(&self.arguments),
            mapper: Arc::clone(&self.mapper),
            override_message: self.override_message.clone(),
            last_predicate: self.last_predicate,
        }
    }
}

impl<T: fmt::Debug, E> fmt::Debug for AssertionBuilder<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssertionBuilder")
            .field("arguments", &self.arguments)
            .field("override_message", &self.override_message)
            .field("last_predicate", &self.last_predicate)
            .field("error", &type_name::<E>())
            .finish()
    }
}

impl<T, E> AssertionBuilder<T, E> {
    fn with_mapper<E2>(&self, mapper: Arc<dyn ExceptionMapper<E2>>) -> AssertionBuilder<T, E2> {
        AssertionBuilder {
            arguments: Arc::clone(&self.arguments),
            mapper,
            override_message: self.override_message.clone(),
            last_predicate: self.last_predicate,
        }
    }

    /// The arguments under test.
    pub fn arguments(&self) -> &[T] {
        &self.arguments
    }

    /// Type name of the last predicate that was checked, if any.
    pub fn last_predicate(&self) -> Option<&'static str> {
        self.last_predicate
    }

    /// Replace the message of every failure with `message`.
    ///
    /// The cause chain of the failure is untouched.
    ///
    /// # Panics
    ///
    /// Panics if `message` is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use alembic::prelude::*;
    ///
    /// let failure = check_that("")
    ///     .using_message("a name is required")
    ///     .is(non_empty_string())
    ///     .unwrap_err();
    /// assert_eq!(failure.message(), "a name is required");
    /// ```
    #[track_caller]
    pub fn using_message(&self, message: impl Into<String>) -> Self {
        let message = message.into();
        check_not_empty(&message, "error message cannot be empty");
        AssertionBuilder {
            override_message: Some(message.into()),
            ..self.clone()
        }
    }

    /// Map failures with `mapper`.
    ///
    /// Returning `None` from the mapper swallows the failure: a warning is
    /// logged and the assertion passes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use alembic::prelude::*;
    ///
    /// #[derive(Debug)]
    /// struct BadInput(String);
    ///
    /// let err = check_that(-1)
    ///     .throwing(|f| Some(BadInput(f.into_message())))
    ///     .is(positive_integer())
    ///     .unwrap_err();
    /// assert_eq!(err.0, "Expected positive integer: -1");
    /// ```
    pub fn throwing<E2, F>(&self, mapper: F) -> AssertionBuilder<T, E2>
    where
        F: Fn(ValidationFailure) -> Option<E2> + Send + Sync + 'static,
    {
        self.with_mapper(Arc::new(mapper))
    }

    /// Build errors with `factory`, which receives the failure's message
    /// (the override, if one is set) and the failure itself.
    ///
    /// # Example
    ///
    /// ```rust
    /// use alembic::prelude::*;
    /// use std::io;
    ///
    /// let err = check_that(String::new())
    ///     .using_message("empty config path")
    ///     .throwing_with(|message, _| io::Error::new(io::ErrorKind::InvalidInput, message))
    ///     .is(non_empty_string())
    ///     .unwrap_err();
    /// assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    /// assert_eq!(err.to_string(), "empty config path");
    /// ```
    pub fn throwing_with<E2, F>(&self, factory: F) -> AssertionBuilder<T, E2>
    where
        F: Fn(String, ValidationFailure) -> E2 + Send + Sync + 'static,
    {
        self.with_mapper(Arc::new(WithMessage(factory)))
    }

    /// Raise errors of type `E2` through its [`Raisable`] constructors.
    ///
    /// See [`Raisable`] for the order in which constructors are tried.
    pub fn throwing_type<E2: Raisable + 'static>(&self) -> AssertionBuilder<T, E2> {
        self.with_mapper(Arc::new(RaiseAs::<E2>::new()))
    }

    /// Check `predicate` against every argument.
    ///
    /// Stops at the first argument that fails; later arguments are not
    /// checked, even when the strategy swallows the failure. The failure gets
    /// the override message, if any, and is handed to the exception strategy
    /// once. A panic inside the predicate is not caught.
    ///
    /// On success the returned builder remembers `predicate` as the last one
    /// checked, so further predicates can be chained with `?`.
    pub fn is<P: Predicate<T>>(&self, predicate: P) -> Result<Self, E> {
        let last_predicate = type_name::<P>();
        let first_failure = self
            .arguments
            .iter()
            .find_map(|argument| predicate.check(argument).err());
        if let Some(failure) = first_failure {
            self.escalate(failure, last_predicate)?;
        }
        Ok(AssertionBuilder {
            last_predicate: Some(last_predicate),
            ..self.clone()
        })
    }

    /// Same as [`is`](Self::is), for predicates that read better with an
    /// article.
    pub fn is_a<P: Predicate<T>>(&self, predicate: P) -> Result<Self, E> {
        self.is(predicate)
    }

    /// Same as [`is`](Self::is), for several arguments.
    pub fn are<P: Predicate<T>>(&self, predicate: P) -> Result<Self, E> {
        self.is(predicate)
    }

    fn escalate(&self, mut failure: ValidationFailure, predicate: &str) -> Result<(), E> {
        if let Some(message) = &self.override_message {
            failure.change_message(message);
        }
        let description = failure.to_string();
        match self.mapper.apply(failure) {
            Some(error) => Err(error),
            None => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    "Exception strategy swallowed failure of {}: {}",
                    predicate,
                    description
                );
                #[cfg(not(feature = "tracing"))]
                eprintln!(
                    "Exception strategy swallowed failure of {}: {}",
                    predicate, description
                );
                Ok(())
            }
        }
    }
}
