//! Predicates for personal details

use std::sync::LazyLock;

use regex::Regex;

use super::combinators::Predicate;
use crate::ValidationFailure;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^.+@.+\..+$").unwrap());

/// Predicate for a plausible e-mail address.
#[derive(Clone, Copy, Default, Debug)]
pub struct ValidEmailAddress;

impl<S: AsRef<str> + ?Sized> Predicate<S> for ValidEmailAddress {
    fn check(&self, value: &S) -> Result<(), ValidationFailure> {
        let email = value.as_ref();
        if email.is_empty() {
            return Err(ValidationFailure::new("Email is null or empty"));
        }
        if EMAIL_PATTERN.is_match(email) {
            Ok(())
        } else {
            Err(ValidationFailure::new(format!(
                "Invalid Email Address: {}",
                EMAIL_PATTERN.as_str()
            )))
        }
    }
}

/// Create a predicate that checks for `something@domain.tld`.
///
/// The check is deliberately loose: a local part, an `@`, and a domain
/// containing a dot.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
///
/// assert!(valid_email_address().check("ada@example.org").is_ok());
/// assert!(valid_email_address().check("ada@localhost").is_err());
/// ```
pub fn valid_email_address() -> ValidEmailAddress {
    ValidEmailAddress
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email_address() {
        assert!(valid_email_address().check("a@b.c").is_ok());
        assert!(valid_email_address()
            .check(&String::from("first.last+tag@mail.example.com"))
            .is_ok());
    }

    #[test]
    fn test_invalid_email_address() {
        for email in ["plainaddress", "@example.com", "user@", "user@domain"] {
            let failure = valid_email_address().check(email).unwrap_err();
            assert_eq!(failure.message(), r"Invalid Email Address: ^.+@.+\..+$");
        }
    }

    #[test]
    fn test_empty_email_address() {
        assert_eq!(
            valid_email_address().check("").unwrap_err().message(),
            "Email is null or empty"
        );
    }
}
