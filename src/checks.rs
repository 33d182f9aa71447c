//! Small boolean helpers and configuration checks
//!
//! The public helpers answer "is this optional string usable?" questions
//! without building a predicate. The crate-internal checks guard factory
//! configuration: a violated check is a programmer error and panics at the
//! caller's location.
//!
//! # Example
//!
//! ```rust
//! use alembic::checks::*;
//!
//! assert!(is_null_or_empty(None));
//! assert!(is_null_or_empty(Some("")));
//! assert!(not_null_or_empty(Some("abc")));
//! assert!(any_are_null_or_empty([Some("a"), None]));
//! assert!(all_are_null_or_empty([Some(""), None]));
//! ```

use std::fmt;

/// True when the string is absent or empty.
pub fn is_null_or_empty(string: Option<&str>) -> bool {
    string.map_or(true, str::is_empty)
}

/// True when the string is present and non-empty.
pub fn not_null_or_empty(string: Option<&str>) -> bool {
    !is_null_or_empty(string)
}

/// True when at least one string is absent or empty.
///
/// An empty sequence counts as "all missing" and returns `true`.
pub fn any_are_null_or_empty<'a, I>(strings: I) -> bool
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut seen = false;
    for string in strings {
        seen = true;
        if is_null_or_empty(string) {
            return true;
        }
    }
    !seen
}

/// True when every string is absent or empty.
pub fn all_are_null_or_empty<'a, I>(strings: I) -> bool
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    strings.into_iter().all(is_null_or_empty)
}

/// Reject invalid configuration.
#[track_caller]
pub(crate) fn check_argument(condition: bool, message: impl fmt::Display) {
    if !condition {
        panic!("{}", message);
    }
}

/// Reject an empty configuration string.
#[track_caller]
pub(crate) fn check_not_empty(string: &str, message: &str) {
    check_argument(!string.is_empty(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_null_or_empty() {
        assert!(is_null_or_empty(None));
        assert!(is_null_or_empty(Some("")));
        assert!(!is_null_or_empty(Some(" ")));
        assert!(!is_null_or_empty(Some("abc")));
    }

    #[test]
    fn test_not_null_or_empty() {
        assert!(!not_null_or_empty(None));
        assert!(not_null_or_empty(Some("abc")));
    }

    #[test]
    fn test_any_are_null_or_empty() {
        assert!(any_are_null_or_empty([Some("a"), Some("")]));
        assert!(any_are_null_or_empty([None, Some("b")]));
        assert!(!any_are_null_or_empty([Some("a"), Some("b")]));
        assert!(any_are_null_or_empty(std::iter::empty()));
    }

    #[test]
    fn test_all_are_null_or_empty() {
        assert!(all_are_null_or_empty([None, Some("")]));
        assert!(!all_are_null_or_empty([None, Some("b")]));
        assert!(all_are_null_or_empty(std::iter::empty()));
    }

    #[test]
    fn test_check_argument_passes() {
        check_argument(true, "unused");
        check_not_empty("abc", "unused");
    }

    #[test]
    #[should_panic(expected = "Minimum must be less than Max.")]
    fn test_check_argument_panics() {
        check_argument(false, "Minimum must be less than Max.");
    }

    #[test]
    #[should_panic(expected = "missing prefix")]
    fn test_check_not_empty_panics() {
        check_not_empty("", "missing prefix");
    }
}
