//! Serde support for validation failures (feature-gated)
//!
//! A [`ValidationFailure`] serializes as a struct with its message and the
//! cause's message, if any:
//!
//! ```json
//! {"message": "Invalid URL: not a url", "cause": "relative URL without a base"}
//! ```

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::ValidationFailure;

impl Serialize for ValidationFailure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationFailure", 2)?;
        state.serialize_field("message", self.message())?;
        state.serialize_field("cause", &self.cause().map(|c| c.to_string()))?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{valid_url, Predicate};

    #[test]
    fn test_serialize_without_cause() {
        let failure = ValidationFailure::new("Map is empty");
        let json = serde_json::to_string(&failure).unwrap();
        assert_eq!(json, r#"{"message":"Map is empty","cause":null}"#);
    }

    #[test]
    fn test_serialize_with_cause() {
        let failure = valid_url().check("not a url").unwrap_err();
        let value = serde_json::to_value(&failure).unwrap();
        assert_eq!(value["message"], "Invalid URL: not a url");
        assert_eq!(value["cause"], "relative URL without a base");
    }

    #[test]
    fn test_serialize_inside_derived_struct() {
        #[derive(serde::Serialize)]
        struct Response {
            status: u16,
            errors: Vec<ValidationFailure>,
        }

        let response = Response {
            status: 400,
            errors: vec![ValidationFailure::new("Argument is null")],
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(
            json,
            r#"{"status":400,"errors":[{"message":"Argument is null","cause":null}]}"#
        );
    }
}
