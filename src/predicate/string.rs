//! String predicates
//!
//! Every predicate here accepts any `S: AsRef<str> + ?Sized`, so `str`,
//! `String`, `Cow<str>` and friends all work. Lengths count `char`s, not
//! bytes.
//!
//! Most content checks reject the empty string first with the
//! [`non_empty_string`] failure, so an empty argument never reaches the more
//! specific message.

use std::fmt;

use regex::Regex;
use uuid::Uuid;

use super::combinators::Predicate;
use crate::checks::{check_argument, check_not_empty};
use crate::ValidationFailure;

fn char_len(string: &str) -> usize {
    string.chars().count()
}

fn require_non_empty(string: &str) -> Result<(), ValidationFailure> {
    if string.is_empty() {
        Err(ValidationFailure::new("String argument is empty"))
    } else {
        Ok(())
    }
}

/// Predicate that requires the whole string to match a pattern.
#[derive(Clone, Debug)]
pub struct Matches {
    pattern: Regex,
    anchored: Regex,
}

impl<S: AsRef<str> + ?Sized> Predicate<S> for Matches {
    fn check(&self, value: &S) -> Result<(), ValidationFailure> {
        if self.anchored.is_match(value.as_ref()) {
            Ok(())
        } else {
            Err(ValidationFailure::new(format!(
                "Expected String to match pattern: {}",
                self.pattern
            )))
        }
    }
}

/// Create a predicate that checks the entire string matches `pattern`.
///
/// A partial match is not enough: `\d+` rejects `"12a"`.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
/// use regex::Regex;
///
/// let p = string_that_matches(Regex::new(r"\d+").unwrap());
/// assert!(p.check("123").is_ok());
/// assert!(p.check("12a").is_err());
/// ```
#[track_caller]
pub fn string_that_matches(pattern: Regex) -> Matches {
    let anchored = match Regex::new(&format!("^(?:{})$", pattern.as_str())) {
        Ok(anchored) => anchored,
        Err(e) => panic!("pattern cannot be anchored: {}", e),
    };
    Matches { pattern, anchored }
}

/// Predicate that accepts only the empty string.
#[derive(Clone, Copy, Default, Debug)]
pub struct EmptyString;

impl<S: AsRef<str> + ?Sized> Predicate<S> for EmptyString {
    #[inline]
    fn check(&self, value: &S) -> Result<(), ValidationFailure> {
        let string = value.as_ref();
        if string.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailure::new(format!(
                "Expected empty string but got: {}",
                string
            )))
        }
    }
}

/// Create a predicate that accepts only `""`.
pub fn empty_string() -> EmptyString {
    EmptyString
}

/// Predicate that rejects the empty string.
#[derive(Clone, Copy, Default, Debug)]
pub struct NonEmptyString;

impl<S: AsRef<str> + ?Sized> Predicate<S> for NonEmptyString {
    #[inline]
    fn check(&self, value: &S) -> Result<(), ValidationFailure> {
        require_non_empty(value.as_ref())
    }
}

/// Create a predicate that rejects `""`.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
///
/// assert!(non_empty_string().check("hello").is_ok());
/// assert_eq!(
///     non_empty_string().check("").unwrap_err().message(),
///     "String argument is empty"
/// );
/// ```
pub fn non_empty_string() -> NonEmptyString {
    NonEmptyString
}

/// Predicate for an exact string length.
#[derive(Clone, Copy, Debug)]
pub struct StringWithLength {
    expected: usize,
}

impl<S: AsRef<str> + ?Sized> Predicate<S> for StringWithLength {
    #[inline]
    fn check(&self, value: &S) -> Result<(), ValidationFailure> {
        if char_len(value.as_ref()) == self.expected {
            Ok(())
        } else {
            Err(ValidationFailure::new(format!(
                "Expecting a String with length {}",
                self.expected
            )))
        }
    }
}

/// Create a predicate that checks the string has exactly `expected` chars.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
///
/// assert!(string_with_length(3).check("abc").is_ok());
/// assert!(string_with_length(3).check("ab").is_err());
/// ```
pub fn string_with_length(expected: usize) -> StringWithLength {
    StringWithLength { expected }
}

/// Predicate for a string longer than a minimum.
#[derive(Clone, Copy, Debug)]
pub struct StringWithLengthGreaterThan {
    min: usize,
}

impl<S: AsRef<str> + ?Sized> Predicate<S> for StringWithLengthGreaterThan {
    fn check(&self, value: &S) -> Result<(), ValidationFailure> {
        let string = value.as_ref();
        require_non_empty(string)?;
        if char_len(string) > self.min {
            Ok(())
        } else {
            Err(ValidationFailure::new(format!(
                "Expected a String with length > {}",
                self.min
            )))
        }
    }
}

/// Create a predicate that checks the string is longer than `min` chars.
///
/// # Panics
///
/// Panics if `min` is zero (use [`non_empty_string`]) or `usize::MAX`.
#[track_caller]
pub fn string_with_length_greater_than(min: usize) -> StringWithLengthGreaterThan {
    check_argument(min > 0, "minimumLength must be > 0");
    check_argument(
        min < usize::MAX,
        format_args!("not possible to have a String larger than {}", usize::MAX),
    );
    StringWithLengthGreaterThan { min }
}

/// Predicate for a string at least some length.
#[derive(Clone, Copy, Debug)]
pub struct StringWithLengthGreaterThanOrEqualTo {
    min: usize,
}

impl<S: AsRef<str> + ?Sized> Predicate<S> for StringWithLengthGreaterThanOrEqualTo {
    fn check(&self, value: &S) -> Result<(), ValidationFailure> {
        if char_len(value.as_ref()) >= self.min {
            Ok(())
        } else {
            Err(ValidationFailure::new(format!(
                "Expecting a String with length >= {}",
                self.min
            )))
        }
    }
}

/// Create a predicate that checks the string has at least `min` chars.
pub fn string_with_length_greater_than_or_equal_to(
    min: usize,
) -> StringWithLengthGreaterThanOrEqualTo {
    StringWithLengthGreaterThanOrEqualTo { min }
}

/// Predicate for a non-empty string shorter than a maximum.
#[derive(Clone, Copy, Debug)]
pub struct StringWithLengthLessThan {
    max: usize,
}

impl<S: AsRef<str> + ?Sized> Predicate<S> for StringWithLengthLessThan {
    fn check(&self, value: &S) -> Result<(), ValidationFailure> {
        let string = value.as_ref();
        require_non_empty(string)?;
        if char_len(string) < self.max {
            Ok(())
        } else {
            Err(ValidationFailure::new(format!(
                "Expecting a String with length < {}",
                self.max
            )))
        }
    }
}

/// Create a predicate that checks the string is non-empty and shorter than
/// `max` chars.
///
/// # Panics
///
/// Panics if `max` is zero.
#[track_caller]
pub fn string_with_length_less_than(max: usize) -> StringWithLengthLessThan {
    check_argument(max > 0, "upperBound must be > 0");
    StringWithLengthLessThan { max }
}

/// Predicate for a string at most some length.
#[derive(Clone, Copy, Debug)]
pub struct StringWithLengthLessThanOrEqualTo {
    max: usize,
}

impl<S: AsRef<str> + ?Sized> Predicate<S> for StringWithLengthLessThanOrEqualTo {
    fn check(&self, value: &S) -> Result<(), ValidationFailure> {
        if char_len(value.as_ref()) <= self.max {
            Ok(())
        } else {
            Err(ValidationFailure::new(format!(
                "Argument exceeds the maximum string length of: {}",
                self.max
            )))
        }
    }
}

/// Create a predicate that checks the string has at most `max` chars.
pub fn string_with_length_less_than_or_equal_to(max: usize) -> StringWithLengthLessThanOrEqualTo {
    StringWithLengthLessThanOrEqualTo { max }
}

/// Predicate for string length in range (inclusive).
#[derive(Clone, Copy, Debug)]
pub struct StringWithLengthBetween {
    min: usize,
    max: usize,
}

impl<S: AsRef<str> + ?Sized> Predicate<S> for StringWithLengthBetween {
    fn check(&self, value: &S) -> Result<(), ValidationFailure> {
        let len = char_len(value.as_ref());
        if len >= self.min && len <= self.max {
            Ok(())
        } else {
            Err(ValidationFailure::new(format!(
                "Argument size is not between acceptable range of [{} -> {}]",
                self.min, self.max
            )))
        }
    }
}

/// Create a predicate that checks `min <= length <= max`.
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
/// let p = string_with_length_between(3, 10);
/// assert!(p.check("ab").is_err());
/// assert!(p.check("abc").is_ok());
/// assert!(p.check("1234567890").is_ok());
/// assert!(p.check("12345678901").is_err());
/// ```
#[track_caller]
pub fn string_with_length_between(min: usize, max: usize) -> StringWithLengthBetween {
    check_argument(min < max, "Minimum length must be < maximum length.");
    StringWithLengthBetween { min, max }
}

/// Predicate that rejects any whitespace.
#[derive(Clone, Copy, Default, Debug)]
pub struct NoWhitespace;

impl<S: AsRef<str> + ?Sized> Predicate<S> for NoWhitespace {
    fn check(&self, value: &S) -> Result<(), ValidationFailure> {
        let string = value.as_ref();
        if string.chars().any(char::is_whitespace) {
            Err(ValidationFailure::new(format!(
                "Argument should not have whitespace: [{}]",
                string
            )))
        } else {
            Ok(())
        }
    }
}

/// Create a predicate that rejects strings containing whitespace.
pub fn string_with_no_whitespace() -> NoWhitespace {
    NoWhitespace
}

/// Predicate for a required prefix.
#[derive(Clone, Debug)]
pub struct BeginningWith {
    prefix: String,
}

impl<S: AsRef<str> + ?Sized> Predicate<S> for BeginningWith {
    fn check(&self, value: &S) -> Result<(), ValidationFailure> {
        let string = value.as_ref();
        require_non_empty(string)?;
        if string.starts_with(self.prefix.as_str()) {
            Ok(())
        } else {
            Err(ValidationFailure::new(format!(
                "Expected \"{}\" to start with \"{}\"",
                string, self.prefix
            )))
        }
    }
}

/// Create a predicate that checks the string starts with `prefix`.
///
/// # Panics
///
/// Panics if `prefix` is empty.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
///
/// let p = string_beginning_with("http");
/// assert!(p.check("https://example.com").is_ok());
/// assert!(p.check("ftp://example.com").is_err());
/// ```
#[track_caller]
pub fn string_beginning_with(prefix: impl Into<String>) -> BeginningWith {
    let prefix = prefix.into();
    check_not_empty(&prefix, "missing prefix");
    BeginningWith { prefix }
}

/// Predicate for a required suffix.
#[derive(Clone, Debug)]
pub struct EndingWith {
    suffix: String,
}

impl<S: AsRef<str> + ?Sized> Predicate<S> for EndingWith {
    fn check(&self, value: &S) -> Result<(), ValidationFailure> {
        let string = value.as_ref();
        require_non_empty(string)?;
        if string.ends_with(self.suffix.as_str()) {
            Ok(())
        } else {
            Err(ValidationFailure::new(format!(
                "Expected {} to end with {}",
                string, self.suffix
            )))
        }
    }
}

/// Create a predicate that checks the string ends with `suffix`.
///
/// # Panics
///
/// Panics if `suffix` is empty.
#[track_caller]
pub fn string_ending_with(suffix: impl Into<String>) -> EndingWith {
    let suffix = suffix.into();
    check_not_empty(&suffix, "string should not be empty");
    EndingWith { suffix }
}

/// Predicate for a required substring.
#[derive(Clone, Debug)]
pub struct Containing {
    substring: String,
}

impl<S: AsRef<str> + ?Sized> Predicate<S> for Containing {
    fn check(&self, value: &S) -> Result<(), ValidationFailure> {
        let string = value.as_ref();
        require_non_empty(string)?;
        if string.contains(self.substring.as_str()) {
            Ok(())
        } else {
            Err(ValidationFailure::new(format!(
                "Expected {} to contain {}",
                string, self.substring
            )))
        }
    }
}

/// Create a predicate that checks the string contains `substring`.
///
/// # Panics
///
/// Panics if `substring` is empty.
#[track_caller]
pub fn string_containing(substring: impl Into<String>) -> Containing {
    let substring = substring.into();
    check_not_empty(&substring, "substring cannot be empty");
    Containing { substring }
}

/// Predicate that requires every char to pass a character class test.
///
/// Built by [`all_upper_case_string`], [`all_lower_case_string`],
/// [`alphabetic_string`] and [`alphanumeric_string`].
#[derive(Clone, Copy)]
pub struct CharacterClass {
    test: fn(char) -> bool,
    describe: fn(&str, char) -> String,
}

impl fmt::Debug for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharacterClass").finish_non_exhaustive()
    }
}

impl<S: AsRef<str> + ?Sized> Predicate<S> for CharacterClass {
    fn check(&self, value: &S) -> Result<(), ValidationFailure> {
        let string = value.as_ref();
        require_non_empty(string)?;
        match string.chars().find(|&c| !(self.test)(c)) {
            None => Ok(()),
            Some(c) => Err(ValidationFailure::new((self.describe)(string, c))),
        }
    }
}

/// Create a predicate that checks every char is upper-case.
///
/// Digits and punctuation are not upper-case, so `"ABC1"` fails.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
///
/// assert!(all_upper_case_string().check("ABC").is_ok());
/// assert!(all_upper_case_string().check("AbC").is_err());
/// ```
pub fn all_upper_case_string() -> CharacterClass {
    CharacterClass {
        test: char::is_uppercase,
        describe: |s, c| format!("Expected {} to be all upper-case, but {} isn't", s, c),
    }
}

/// Create a predicate that checks every char is lower-case.
pub fn all_lower_case_string() -> CharacterClass {
    CharacterClass {
        test: char::is_lowercase,
        describe: |s, c| format!("Expected {} to be all lower-case, but {} isn't", s, c),
    }
}

/// Create a predicate that checks every char is alphabetic.
pub fn alphabetic_string() -> CharacterClass {
    CharacterClass {
        test: char::is_alphabetic,
        describe: |_, c| format!("Expected alphabetic string, but '{}' is not alphabetic", c),
    }
}

/// Create a predicate that checks every char is a letter or a digit.
pub fn alphanumeric_string() -> CharacterClass {
    CharacterClass {
        test: char::is_alphanumeric,
        describe: |_, c| format!("Expected alphanumeric string, but character '{}' is not", c),
    }
}

/// Predicate that requires the string to parse as a 32-bit integer.
#[derive(Clone, Copy, Default, Debug)]
pub struct IntegerString;

impl<S: AsRef<str> + ?Sized> Predicate<S> for IntegerString {
    fn check(&self, value: &S) -> Result<(), ValidationFailure> {
        let string = value.as_ref();
        require_non_empty(string)?;
        string.parse::<i32>().map(|_| ()).map_err(|e| {
            ValidationFailure::with_cause(format!("Expecting a number, instead: {}", string), e)
        })
    }
}

/// Create a predicate that checks the string parses as an `i32`.
///
/// The parse error is kept as the failure's cause.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
///
/// assert!(integer_string().check("-42").is_ok());
/// let failure = integer_string().check("4.2").unwrap_err();
/// assert!(failure.cause().is_some());
/// ```
pub fn integer_string() -> IntegerString {
    IntegerString
}

/// Predicate that requires the string to parse as a decimal number.
#[derive(Clone, Copy, Default, Debug)]
pub struct DecimalString;

impl<S: AsRef<str> + ?Sized> Predicate<S> for DecimalString {
    fn check(&self, value: &S) -> Result<(), ValidationFailure> {
        let string = value.as_ref();
        require_non_empty(string)?;
        string.parse::<f64>().map(|_| ()).map_err(|e| {
            ValidationFailure::with_cause(
                format!("Expecting a decimal number, instead: {}", string),
                e,
            )
        })
    }
}

/// Create a predicate that checks the string parses as an `f64`.
pub fn decimal_string() -> DecimalString {
    DecimalString
}

/// Predicate that requires a UUID string.
#[derive(Clone, Copy, Default, Debug)]
pub struct ValidUuid;

impl<S: AsRef<str> + ?Sized> Predicate<S> for ValidUuid {
    fn check(&self, value: &S) -> Result<(), ValidationFailure> {
        let string = value.as_ref();
        require_non_empty(string)?;
        Uuid::parse_str(string).map(|_| ()).map_err(|e| {
            ValidationFailure::with_cause(format!("String is not a valid UUID: {}", string), e)
        })
    }
}

/// Create a predicate that checks the string is a UUID.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
///
/// assert!(valid_uuid().check("67e55044-10b1-426f-9247-bb680e5fe0c8").is_ok());
/// assert!(valid_uuid().check("not-a-uuid").is_err());
/// ```
pub fn valid_uuid() -> ValidUuid {
    ValidUuid
}

/// Predicate that requires an optional sign followed only by digits.
#[derive(Clone, Copy, Default, Debug)]
pub struct RepresentingInteger;

impl<S: AsRef<str> + ?Sized> Predicate<S> for RepresentingInteger {
    fn check(&self, value: &S) -> Result<(), ValidationFailure> {
        let string = value.as_ref();
        require_non_empty(string)?;
        let digits = string
            .strip_prefix(|c: char| c == '-' || c == '+')
            .unwrap_or(string);
        match digits.chars().find(|c| !c.is_ascii_digit()) {
            None => Ok(()),
            Some(c) => Err(ValidationFailure::new(format!(
                "Expected an Integer String, but {} is not a digit",
                c
            ))),
        }
    }
}

/// Create a predicate that checks the string looks like an integer of any
/// size.
///
/// Unlike [`integer_string`] there is no range limit: only the characters
/// are inspected.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
///
/// let p = string_representing_integer();
/// assert!(p.check("+123456789012345678901234567890").is_ok());
/// assert!(p.check("12-3").is_err());
/// ```
pub fn string_representing_integer() -> RepresentingInteger {
    RepresentingInteger
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_that_matches() {
        let p = string_that_matches(Regex::new("[a-z]+").unwrap());
        assert!(p.check("abc").is_ok());
        assert!(p.check(&String::from("xyz")).is_ok());

        let failure = p.check("abc1").unwrap_err();
        assert_eq!(failure.message(), "Expected String to match pattern: [a-z]+");
    }

    #[test]
    fn test_string_that_matches_with_alternation() {
        let p = string_that_matches(Regex::new("cat|dog").unwrap());
        assert!(p.check("dog").is_ok());
        assert!(p.check("catdog").is_err());
    }

    #[test]
    fn test_empty_string() {
        assert!(empty_string().check("").is_ok());
        let failure = empty_string().check("a").unwrap_err();
        assert_eq!(failure.message(), "Expected empty string but got: a");
    }

    #[test]
    fn test_non_empty_string() {
        assert!(non_empty_string().check("a").is_ok());
        assert!(non_empty_string().check(" ").is_ok());
        assert!(non_empty_string().check(&String::new()).is_err());
    }

    #[test]
    fn test_string_with_length_counts_chars() {
        assert!(string_with_length(3).check("abc").is_ok());
        assert!(string_with_length(2).check("éé").is_ok());
        let failure = string_with_length(3).check("abcd").unwrap_err();
        assert_eq!(failure.message(), "Expecting a String with length 3");
    }

    #[test]
    fn test_string_with_length_greater_than() {
        let p = string_with_length_greater_than(3);
        assert!(p.check("abcd").is_ok());
        assert_eq!(
            p.check("abc").unwrap_err().message(),
            "Expected a String with length > 3"
        );
        assert_eq!(p.check("").unwrap_err().message(), "String argument is empty");
    }

    #[test]
    #[should_panic(expected = "minimumLength must be > 0")]
    fn test_string_with_length_greater_than_rejects_zero() {
        string_with_length_greater_than(0);
    }

    #[test]
    #[should_panic(expected = "not possible to have a String larger than")]
    fn test_string_with_length_greater_than_rejects_max() {
        string_with_length_greater_than(usize::MAX);
    }

    #[test]
    fn test_string_with_length_greater_than_or_equal_to() {
        let p = string_with_length_greater_than_or_equal_to(2);
        assert!(p.check("ab").is_ok());
        assert_eq!(
            p.check("a").unwrap_err().message(),
            "Expecting a String with length >= 2"
        );
        assert!(string_with_length_greater_than_or_equal_to(0).check("").is_ok());
    }

    #[test]
    fn test_string_with_length_less_than() {
        let p = string_with_length_less_than(3);
        assert!(p.check("ab").is_ok());
        assert_eq!(
            p.check("abc").unwrap_err().message(),
            "Expecting a String with length < 3"
        );
        assert!(p.check("").is_err());
    }

    #[test]
    #[should_panic(expected = "upperBound must be > 0")]
    fn test_string_with_length_less_than_rejects_zero() {
        string_with_length_less_than(0);
    }

    #[test]
    fn test_string_with_length_less_than_or_equal_to() {
        let p = string_with_length_less_than_or_equal_to(3);
        assert!(p.check("").is_ok());
        assert!(p.check("abc").is_ok());
        assert_eq!(
            p.check("abcd").unwrap_err().message(),
            "Argument exceeds the maximum string length of: 3"
        );
    }

    #[test]
    fn test_string_with_length_between() {
        let p = string_with_length_between(2, 4);
        assert!(p.check("ab").is_ok());
        assert!(p.check("abcd").is_ok());
        assert_eq!(
            p.check("abcde").unwrap_err().message(),
            "Argument size is not between acceptable range of [2 -> 4]"
        );
    }

    #[test]
    #[should_panic(expected = "Minimum length must be < maximum length.")]
    fn test_string_with_length_between_rejects_equal_bounds() {
        string_with_length_between(4, 4);
    }

    #[test]
    fn test_string_with_no_whitespace() {
        assert!(string_with_no_whitespace().check("abc").is_ok());
        let failure = string_with_no_whitespace().check("a b").unwrap_err();
        assert_eq!(failure.message(), "Argument should not have whitespace: [a b]");
        assert!(string_with_no_whitespace().check("a\tb").is_err());
    }

    #[test]
    fn test_string_beginning_with() {
        let p = string_beginning_with("ab");
        assert!(p.check("abc").is_ok());
        assert_eq!(
            p.check("cab").unwrap_err().message(),
            "Expected \"cab\" to start with \"ab\""
        );
        assert_eq!(p.check("").unwrap_err().message(), "String argument is empty");
    }

    #[test]
    #[should_panic(expected = "missing prefix")]
    fn test_string_beginning_with_rejects_empty_prefix() {
        string_beginning_with("");
    }

    #[test]
    fn test_string_ending_with() {
        let p = string_ending_with(".rs");
        assert!(p.check("lib.rs").is_ok());
        assert_eq!(
            p.check("lib.kt").unwrap_err().message(),
            "Expected lib.kt to end with .rs"
        );
    }

    #[test]
    #[should_panic(expected = "string should not be empty")]
    fn test_string_ending_with_rejects_empty_suffix() {
        string_ending_with(String::new());
    }

    #[test]
    fn test_string_containing() {
        let p = string_containing("lem");
        assert!(p.check("alembic").is_ok());
        assert_eq!(
            p.check("retort").unwrap_err().message(),
            "Expected retort to contain lem"
        );
    }

    #[test]
    #[should_panic(expected = "substring cannot be empty")]
    fn test_string_containing_rejects_empty_substring() {
        string_containing("");
    }

    #[test]
    fn test_case_predicates() {
        assert!(all_upper_case_string().check("ÀBC").is_ok());
        assert_eq!(
            all_upper_case_string().check("ABc").unwrap_err().message(),
            "Expected ABc to be all upper-case, but c isn't"
        );
        assert!(all_upper_case_string().check("AB1").is_err());

        assert!(all_lower_case_string().check("abc").is_ok());
        assert_eq!(
            all_lower_case_string().check("aBc").unwrap_err().message(),
            "Expected aBc to be all lower-case, but B isn't"
        );
        assert!(all_lower_case_string().check("").is_err());
    }

    #[test]
    fn test_alphabetic_and_alphanumeric() {
        assert!(alphabetic_string().check("abcXYZ").is_ok());
        assert!(alphabetic_string().check("abc1").is_err());
        assert!(alphanumeric_string().check("abc123").is_ok());
        assert!(alphanumeric_string().check("abc-123").is_err());
    }

    #[test]
    fn test_integer_string() {
        assert!(integer_string().check("42").is_ok());
        assert!(integer_string().check("+42").is_ok());
        assert!(integer_string().check("-42").is_ok());

        let failure = integer_string().check("42a").unwrap_err();
        assert_eq!(failure.message(), "Expecting a number, instead: 42a");
        assert!(failure.cause().is_some());

        assert!(integer_string().check("99999999999").is_err());
        assert_eq!(
            integer_string().check("").unwrap_err().message(),
            "String argument is empty"
        );
    }

    #[test]
    fn test_decimal_string() {
        assert!(decimal_string().check("3.14").is_ok());
        assert!(decimal_string().check("-1e10").is_ok());
        let failure = decimal_string().check("pi").unwrap_err();
        assert_eq!(failure.message(), "Expecting a decimal number, instead: pi");
    }

    #[test]
    fn test_valid_uuid() {
        assert!(valid_uuid()
            .check("67e55044-10b1-426f-9247-bb680e5fe0c8")
            .is_ok());
        let failure = valid_uuid().check("67e55044").unwrap_err();
        assert_eq!(failure.message(), "String is not a valid UUID: 67e55044");
        assert!(failure.cause().is_some());
    }

    #[test]
    fn test_string_representing_integer() {
        let p = string_representing_integer();
        assert!(p.check("123").is_ok());
        assert!(p.check("-123").is_ok());
        assert!(p.check("+123").is_ok());
        assert!(p.check("1.5").is_err());
        assert!(p.check("--1").is_err());
        assert!(p.check("").is_err());
    }
}
