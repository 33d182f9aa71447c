//! Boolean predicates

use super::combinators::Predicate;
use crate::ValidationFailure;

/// Predicate that accepts `true`.
#[derive(Clone, Copy, Default, Debug)]
pub struct TrueStatement;

impl Predicate<bool> for TrueStatement {
    #[inline]
    fn check(&self, value: &bool) -> Result<(), ValidationFailure> {
        if *value {
            Ok(())
        } else {
            Err(ValidationFailure::new("Condition not met"))
        }
    }
}

/// Create a predicate that accepts only `true`.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
///
/// let items = vec![1, 2, 3];
/// assert!(true_statement().check(&items.contains(&2)).is_ok());
/// assert!(true_statement().check(&items.is_empty()).is_err());
/// ```
pub fn true_statement() -> TrueStatement {
    TrueStatement
}

/// Predicate that accepts `false`.
#[derive(Clone, Copy, Default, Debug)]
pub struct FalseStatement;

impl Predicate<bool> for FalseStatement {
    #[inline]
    fn check(&self, value: &bool) -> Result<(), ValidationFailure> {
        TrueStatement.check(&!*value)
    }
}

/// Create a predicate that accepts only `false`.
pub fn false_statement() -> FalseStatement {
    FalseStatement
}
