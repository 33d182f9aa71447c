//! URL and port predicates

use url::Url;

use super::combinators::Predicate;
use super::string::non_empty_string;
use crate::ValidationFailure;

const MAX_PORT: i64 = 65535;

/// Predicate for a string that parses as an absolute URL.
#[derive(Clone, Copy, Default, Debug)]
pub struct ValidUrl;

impl<S: AsRef<str> + ?Sized> Predicate<S> for ValidUrl {
    fn check(&self, value: &S) -> Result<(), ValidationFailure> {
        let string = value.as_ref();
        non_empty_string().check(string)?;
        Url::parse(string)
            .map(|_| ())
            .map_err(|e| ValidationFailure::with_cause(format!("Invalid URL: {}", string), e))
    }
}

/// Create a predicate that checks the string is an absolute URL.
///
/// The parse error is kept as the failure's cause.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
///
/// assert!(valid_url().check("https://github.com/rust-lang").is_ok());
/// assert!(valid_url().check("github.com").is_err());
/// ```
pub fn valid_url() -> ValidUrl {
    ValidUrl
}

/// Predicate for a TCP/UDP port number, `1..=65535`.
#[derive(Clone, Copy, Default, Debug)]
pub struct ValidPort;

impl<N: Copy + Into<i64>> Predicate<N> for ValidPort {
    fn check(&self, value: &N) -> Result<(), ValidationFailure> {
        let port: i64 = (*value).into();
        if port <= 0 {
            Err(ValidationFailure::new("Network port must be > 0"))
        } else if port > MAX_PORT {
            Err(ValidationFailure::new(format!(
                "Network port must be <= {}",
                MAX_PORT
            )))
        } else {
            Ok(())
        }
    }
}

/// Create a predicate that checks a port number.
///
/// Works with any integer type that widens losslessly into `i64`.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
///
/// assert!(valid_port().check(&8080_u16).is_ok());
/// assert!(valid_port().check(&0).is_err());
/// assert!(valid_port().check(&70_000).is_err());
/// ```
pub fn valid_port() -> ValidPort {
    ValidPort
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_valid_url() {
        assert!(valid_url().check("http://localhost:8080/path?q=1").is_ok());
        assert!(valid_url().check(&String::from("ftp://files.example")).is_ok());

        let failure = valid_url().check("not a url").unwrap_err();
        assert_eq!(failure.message(), "Invalid URL: not a url");
        assert!(failure.source().is_some());

        assert_eq!(
            valid_url().check("").unwrap_err().message(),
            "String argument is empty"
        );
    }

    #[test]
    fn test_valid_port() {
        assert!(valid_port().check(&1).is_ok());
        assert!(valid_port().check(&65535).is_ok());
        assert!(valid_port().check(&443_u16).is_ok());

        assert_eq!(
            valid_port().check(&0).unwrap_err().message(),
            "Network port must be > 0"
        );
        assert_eq!(
            valid_port().check(&-80).unwrap_err().message(),
            "Network port must be > 0"
        );
        assert_eq!(
            valid_port().check(&65536_u32).unwrap_err().message(),
            "Network port must be <= 65535"
        );
    }
}
