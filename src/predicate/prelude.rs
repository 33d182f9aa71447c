//! Predicate prelude for convenient imports
//!
//! Re-exports the traits and the most commonly used factories. The full
//! catalog lives in [`crate::predicate`].
//!
//! # Example
//!
//! ```rust
//! use alembic::predicate::prelude::*;
//!
//! let valid_age = greater_than_or_equal_to(0).and(less_than_or_equal_to(150));
//! assert!(valid_age.check(&25).is_ok());
//! ```

// Core traits
pub use super::combinators::{Predicate, PredicateExt};

// Logical combinators
pub use super::combinators::{all_of, not};

// Presence
pub use super::object::{equal_to, not_null, present};

// Number predicates
pub use super::number::{
    greater_than, greater_than_or_equal_to, less_than, less_than_or_equal_to, number_between,
    positive_integer,
};

// String predicates
pub use super::string::{
    non_empty_string, string_that_matches, string_with_length, string_with_length_between,
    string_with_no_whitespace,
};

// Collection predicates
pub use super::collection::{collection_containing, collection_of_size, non_empty_collection};
