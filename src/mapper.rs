//! Exception strategies: turning a [`ValidationFailure`] into the caller's
//! error type
//!
//! An [`AssertionBuilder`](crate::AssertionBuilder) hands every failure to an
//! [`ExceptionMapper`]. The mapper either produces an error, which the builder
//! returns, or `None`, in which case the failure is swallowed and the
//! assertion counts as passed.
//!
//! Three strategies are provided:
//!
//! - [`Identity`]: the default, returns the failure unchanged;
//! - any closure `Fn(ValidationFailure) -> Option<E>`;
//! - [`RaiseAs`]: builds an `E: Raisable` from whichever constructor the type
//!   supports.
//!
//! # Example
//!
//! ```rust
//! use alembic::mapper::{ExceptionMapper, Identity};
//! use alembic::ValidationFailure;
//!
//! let failure = ValidationFailure::new("Number must be > 3");
//! assert_eq!(Identity.apply(failure.clone()), Some(failure));
//! ```

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use crate::ValidationFailure;

/// Converts a validation failure into an error of type `E`.
///
/// Returning `None` swallows the failure.
pub trait ExceptionMapper<E>: Send + Sync {
    /// Map the failure.
    fn apply(&self, failure: ValidationFailure) -> Option<E>;
}

// Blanket impl for closures
impl<E, F> ExceptionMapper<E> for F
where
    F: Fn(ValidationFailure) -> Option<E> + Send + Sync,
{
    #[inline]
    fn apply(&self, failure: ValidationFailure) -> Option<E> {
        self(failure)
    }
}

/// The default strategy: return the failure itself.
#[derive(Clone, Copy, Default, Debug)]
pub struct Identity;

impl ExceptionMapper<ValidationFailure> for Identity {
    #[inline]
    fn apply(&self, failure: ValidationFailure) -> Option<ValidationFailure> {
        Some(failure)
    }
}

/// Strategy built from an error factory that receives the message and the
/// original failure.
#[derive(Clone, Copy)]
pub struct WithMessage<F>(pub F);

impl<F> fmt::Debug for WithMessage<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WithMessage({})", type_name::<F>())
    }
}

impl<E, F> ExceptionMapper<E> for WithMessage<F>
where
    F: Fn(String, ValidationFailure) -> E + Send + Sync,
{
    fn apply(&self, failure: ValidationFailure) -> Option<E> {
        let message = failure.message().to_owned();
        Some((self.0)(message, failure))
    }
}

/// An error type that can be raised from a validation failure.
///
/// Implement whichever constructors make sense for the type; the others
/// default to `None`. [`RaiseAs`] tries them in a fixed priority order:
///
/// - when the message was overridden with
///   [`using_message`](crate::AssertionBuilder::using_message):
///   `from_message_and_cause`, then `from_cause`, then `from_message`;
/// - otherwise: `from_cause`, then `from_message` with the failure's own
///   message;
/// - finally `from_nothing`.
///
/// Without an override, `from_message` is tried after `from_cause` as well,
/// so a type that only takes a message still gets the failure's own message
/// instead of falling straight through to `from_nothing`.
///
/// If every constructor returns `None` the failure is swallowed and a
/// warning is logged.
///
/// # Example
///
/// ```rust
/// use alembic::mapper::Raisable;
/// use alembic::ValidationFailure;
///
/// #[derive(Debug)]
/// struct BadRequest(String);
///
/// impl Raisable for BadRequest {
///     fn from_message(message: String) -> Option<Self> {
///         Some(BadRequest(message))
///     }
/// }
/// ```
pub trait Raisable: Sized {
    /// Construct from the overriding message plus the original failure.
    fn from_message_and_cause(message: String, cause: ValidationFailure) -> Option<Self> {
        let _ = (message, cause);
        None
    }

    /// Construct from the original failure alone.
    fn from_cause(cause: ValidationFailure) -> Option<Self> {
        let _ = cause;
        None
    }

    /// Construct from a message alone.
    fn from_message(message: String) -> Option<Self> {
        let _ = message;
        None
    }

    /// Construct with no information.
    fn from_nothing() -> Option<Self> {
        None
    }
}

impl Raisable for ValidationFailure {
    fn from_cause(cause: ValidationFailure) -> Option<Self> {
        Some(cause)
    }
}

/// Strategy that raises an `E` through its [`Raisable`] constructors.
pub struct RaiseAs<E>(PhantomData<fn() -> E>);

impl<E> RaiseAs<E> {
    /// Create the strategy.
    pub fn new() -> Self {
        RaiseAs(PhantomData)
    }
}

impl<E> Default for RaiseAs<E> {
    fn default() -> Self {
        RaiseAs::new()
    }
}

impl<E> Clone for RaiseAs<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for RaiseAs<E> {}

impl<E> fmt::Debug for RaiseAs<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RaiseAs({})", type_name::<E>())
    }
}

impl<E: Raisable> ExceptionMapper<E> for RaiseAs<E> {
    fn apply(&self, failure: ValidationFailure) -> Option<E> {
        let message = failure.message().to_owned();
        let raised = if failure.is_overridden() {
            E::from_message_and_cause(message.clone(), failure.clone())
                .or_else(|| E::from_cause(failure.clone()))
                .or_else(|| E::from_message(message))
        } else {
            E::from_cause(failure.clone()).or_else(|| E::from_message(message))
        };

        let raised = raised.or_else(E::from_nothing);
        if raised.is_none() {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                "Cannot raise {} from failure, no applicable constructor: {}",
                type_name::<E>(),
                failure
            );
            #[cfg(not(feature = "tracing"))]
            eprintln!(
                "Cannot raise {} from failure, no applicable constructor: {}",
                type_name::<E>(),
                failure
            );
        }
        raised
    }
}
