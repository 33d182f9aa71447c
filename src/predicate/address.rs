//! Postal address predicates (US ZIP codes)

use super::combinators::Predicate;
use super::string::{
    integer_string, non_empty_string, string_with_length_greater_than_or_equal_to,
    string_with_length_less_than_or_equal_to,
};
use crate::{check_that, ValidationFailure};

const ZIP_CODE_LIMIT: i64 = 100_000;

/// Predicate for a numeric ZIP code, `1..100000`.
#[derive(Clone, Copy, Default, Debug)]
pub struct ValidZipCode;

impl<N: Copy + Into<i64>> Predicate<N> for ValidZipCode {
    fn check(&self, value: &N) -> Result<(), ValidationFailure> {
        let zip: i64 = (*value).into();
        if zip <= 0 {
            Err(ValidationFailure::new("Zip Code must be > 0"))
        } else if zip >= ZIP_CODE_LIMIT {
            Err(ValidationFailure::new("Zip Code must be a 5 digit number"))
        } else {
            Ok(())
        }
    }
}

/// Create a predicate that checks a numeric ZIP code.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
///
/// assert!(valid_zip_code().check(&90210).is_ok());
/// assert!(valid_zip_code().check(&0).is_err());
/// assert!(valid_zip_code().check(&123456).is_err());
/// ```
pub fn valid_zip_code() -> ValidZipCode {
    ValidZipCode
}

/// Predicate for a ZIP code written as 4 or 5 digits.
#[derive(Clone, Copy, Default, Debug)]
pub struct ValidZipCodeString;

impl<S: AsRef<str> + ?Sized> Predicate<S> for ValidZipCodeString {
    fn check(&self, value: &S) -> Result<(), ValidationFailure> {
        let zip = value.as_ref();
        non_empty_string().check(zip)?;
        integer_string().check(zip)?;
        check_that(zip)
            .using_message("zip must consist of 4-5 characters")
            .is(string_with_length_greater_than_or_equal_to(4))?
            .is(string_with_length_less_than_or_equal_to(5))?;
        let number = zip.parse::<i32>().map_err(|e| {
            ValidationFailure::with_cause(format!("Expecting a number, instead: {}", zip), e)
        })?;
        valid_zip_code().check(&number)
    }
}

/// Create a predicate that checks a ZIP code string such as `"02134"`.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
///
/// assert!(valid_zip_code_string().check("02134").is_ok());
/// assert!(valid_zip_code_string().check("2134").is_ok());
/// assert!(valid_zip_code_string().check("021345").is_err());
/// assert!(valid_zip_code_string().check("abcde").is_err());
/// ```
pub fn valid_zip_code_string() -> ValidZipCodeString {
    ValidZipCodeString
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_zip_code() {
        assert!(valid_zip_code().check(&1).is_ok());
        assert!(valid_zip_code().check(&99_999).is_ok());
        assert!(valid_zip_code().check(&12345_u32).is_ok());

        assert_eq!(
            valid_zip_code().check(&-1).unwrap_err().message(),
            "Zip Code must be > 0"
        );
        assert_eq!(
            valid_zip_code().check(&100_000).unwrap_err().message(),
            "Zip Code must be a 5 digit number"
        );
    }

    #[test]
    fn test_valid_zip_code_string() {
        assert!(valid_zip_code_string().check("90210").is_ok());
        assert!(valid_zip_code_string().check(&String::from("1234")).is_ok());
    }

    #[test]
    fn test_zip_code_string_length() {
        assert_eq!(
            valid_zip_code_string().check("123").unwrap_err().message(),
            "zip must consist of 4-5 characters"
        );
        assert_eq!(
            valid_zip_code_string().check("123456").unwrap_err().message(),
            "zip must consist of 4-5 characters"
        );
    }

    #[test]
    fn test_zip_code_string_content() {
        assert_eq!(
            valid_zip_code_string().check("").unwrap_err().message(),
            "String argument is empty"
        );
        assert_eq!(
            valid_zip_code_string().check("12a45").unwrap_err().message(),
            "Expecting a number, instead: 12a45"
        );
        assert_eq!(
            valid_zip_code_string().check("0000").unwrap_err().message(),
            "Zip Code must be > 0"
        );
    }
}
