//! Assertion macros for testing predicates
//!
//! These macros make predicate tests read as one line each and print the
//! offending value and failure when they do not hold.
//!
//! # Example
//!
//! ```rust
//! use alembic::predicate::*;
//! use alembic::{assert_fails, assert_fails_with, assert_passes};
//!
//! assert_passes!(positive_integer(), 42);
//! assert_fails!(positive_integer(), 0);
//! assert_fails_with!(non_empty_string(), "", "String argument is empty");
//! ```

/// Assert that a predicate accepts a value.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
/// use alembic::assert_passes;
///
/// assert_passes!(string_with_length(3), "abc");
/// ```
#[macro_export]
macro_rules! assert_passes {
    ($predicate:expr, $value:expr) => {{
        let value = $value;
        match $crate::predicate::Predicate::check(&$predicate, &value) {
            ::std::result::Result::Ok(()) => {}
            ::std::result::Result::Err(failure) => {
                panic!(
                    "Expected {:?} to pass, got failure: {}",
                    value, failure
                );
            }
        }
    }};
}

/// Assert that a predicate rejects a value.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
/// use alembic::assert_fails;
///
/// assert_fails!(string_with_length(3), "abcd");
/// ```
#[macro_export]
macro_rules! assert_fails {
    ($predicate:expr, $value:expr) => {{
        let value = $value;
        match $crate::predicate::Predicate::check(&$predicate, &value) {
            ::std::result::Result::Err(_) => {}
            ::std::result::Result::Ok(()) => {
                panic!("Expected {:?} to fail, but it passed", value);
            }
        }
    }};
}

/// Assert that a predicate rejects a value with a specific message.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
/// use alembic::assert_fails_with;
///
/// assert_fails_with!(greater_than(3), 2, "Number must be > 3");
/// ```
#[macro_export]
macro_rules! assert_fails_with {
    ($predicate:expr, $value:expr, $message:expr) => {{
        let value = $value;
        match $crate::predicate::Predicate::check(&$predicate, &value) {
            ::std::result::Result::Err(failure) => {
                assert_eq!(failure.message(), $message);
            }
            ::std::result::Result::Ok(()) => {
                panic!(
                    "Expected {:?} to fail with {:?}, but it passed",
                    value, $message
                );
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    use crate::predicate::*;

    #[test]
    fn assert_passes_macro() {
        assert_passes!(positive_integer(), 1);
        assert_passes!(non_empty_string(), String::from("x"));
        assert_passes!(present(positive_integer()), Some(5));
    }

    #[test]
    fn assert_fails_macro() {
        assert_fails!(positive_integer(), -1);
        assert_fails!(empty_collection(), vec![1]);
    }

    #[test]
    fn assert_fails_with_macro() {
        assert_fails_with!(true_statement(), false, "Condition not met");
        assert_fails_with!(
            non_empty_map(),
            std::collections::HashMap::<i32, i32>::new(),
            "Map is empty"
        );
    }

    #[test]
    #[should_panic(expected = "to pass, got failure: Expected positive integer: 0")]
    fn assert_passes_panics_on_failure() {
        assert_passes!(positive_integer(), 0);
    }

    #[test]
    #[should_panic(expected = "Expected 1 to fail, but it passed")]
    fn assert_fails_panics_on_success() {
        assert_fails!(positive_integer(), 1);
    }

    #[test]
    #[should_panic(expected = "to fail with")]
    fn assert_fails_with_panics_on_success() {
        assert_fails_with!(positive_integer(), 1, "never");
    }

    #[test]
    #[should_panic]
    fn assert_fails_with_panics_on_other_message() {
        assert_fails_with!(positive_integer(), 0, "a different message");
    }
}
