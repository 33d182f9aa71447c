//! The uniform failure signal raised by assertions
//!
//! Every [`Predicate`](crate::predicate::Predicate) reports a violation by
//! returning a [`ValidationFailure`]. It carries a human-readable message and,
//! optionally, the underlying error that caused it.
//!
//! # Examples
//!
//! ```
//! use alembic::ValidationFailure;
//!
//! let failure = ValidationFailure::new("Number must be > 3");
//! assert_eq!(failure.message(), "Number must be > 3");
//! assert!(failure.cause().is_none());
//! ```

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

type Cause = Arc<dyn StdError + Send + Sync + 'static>;

/// A value was rejected by an assertion.
///
/// The message can be rewritten once by the
/// [`AssertionBuilder`](crate::AssertionBuilder) to apply a caller-supplied
/// override. The cause is never touched.
///
/// # Examples
///
/// ```
/// use alembic::ValidationFailure;
/// use std::error::Error;
///
/// let parse = "x".parse::<i32>().unwrap_err();
/// let failure = ValidationFailure::with_cause("Expecting a number, instead: x", parse);
///
/// assert_eq!(failure.to_string(), "Expecting a number, instead: x");
/// assert!(failure.source().is_some());
/// ```
#[derive(Clone)]
pub struct ValidationFailure {
    message: String,
    cause: Option<Cause>,
    overridden: bool,
}

impl ValidationFailure {
    /// Create a failure with a message and no cause.
    pub fn new(message: impl Into<String>) -> Self {
        ValidationFailure {
            message: message.into(),
            cause: None,
            overridden: false,
        }
    }

    /// Create a failure caused by another error.
    pub fn with_cause<C>(message: impl Into<String>, cause: C) -> Self
    where
        C: StdError + Send + Sync + 'static,
    {
        ValidationFailure {
            message: message.into(),
            cause: Some(Arc::new(cause)),
            overridden: false,
        }
    }

    /// The human-readable description of the violated condition.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The error that caused this failure, if any.
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Whether the message was replaced by a caller-supplied override.
    pub fn is_overridden(&self) -> bool {
        self.overridden
    }

    /// Consume the failure, returning its message.
    pub fn into_message(self) -> String {
        self.message
    }

    pub(crate) fn change_message(&mut self, message: &str) {
        self.message = message.to_owned();
        self.overridden = true;
    }
}

impl fmt::Debug for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationFailure")
            .field("message", &self.message)
            .field("cause", &self.cause.as_ref().map(|c| c.to_string()))
            .finish()
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for ValidationFailure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_deref().map(|c| c as &(dyn StdError + 'static))
    }
}

/// Failures compare by message only.
impl PartialEq for ValidationFailure {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}

impl Eq for ValidationFailure {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_cause() {
        let failure = ValidationFailure::new("Argument is null");
        assert_eq!(failure.message(), "Argument is null");
        assert!(failure.cause().is_none());
        assert!(failure.source().is_none());
        assert!(!failure.is_overridden());
    }

    #[test]
    fn test_with_cause_exposes_source() {
        let cause = "abc".parse::<i32>().unwrap_err();
        let expected = cause.to_string();
        let failure = ValidationFailure::with_cause("bad number", cause);

        assert_eq!(failure.cause().map(|c| c.to_string()), Some(expected.clone()));
        assert_eq!(failure.source().map(|c| c.to_string()), Some(expected));
    }

    #[test]
    fn test_change_message_keeps_cause() {
        let cause = "abc".parse::<i32>().unwrap_err();
        let mut failure = ValidationFailure::with_cause("bad number", cause);
        failure.change_message("too short");

        assert_eq!(failure.message(), "too short");
        assert_eq!(failure.to_string(), "too short");
        assert!(failure.cause().is_some());
        assert!(failure.is_overridden());
    }

    #[test]
    fn test_clone_shares_cause() {
        let cause = "abc".parse::<i32>().unwrap_err();
        let failure = ValidationFailure::with_cause("bad number", cause);
        let copy = failure.clone();

        assert_eq!(copy, failure);
        assert!(copy.cause().is_some());
    }

    #[test]
    fn test_debug_includes_message() {
        let failure = ValidationFailure::new("Set is empty");
        let debug = format!("{:?}", failure);
        assert!(debug.contains("Set is empty"));
    }
}
