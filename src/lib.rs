//! # Alembic
//!
//! Fluent argument checking for functions that want to reject bad input
//! up front.
//!
//! An assertion starts with [`check_that`], optionally overrides the failure
//! message or the error type, and then checks one or more
//! [predicates](predicate):
//!
//! ```rust
//! use alembic::prelude::*;
//!
//! #[derive(Debug)]
//! struct BadRequest(String);
//!
//! fn lookup_user(id: &str, page_size: i32) -> Result<(), BadRequest> {
//!     check_that(id)
//!         .throwing(|f| Some(BadRequest(f.into_message())))
//!         .is(non_empty_string())?
//!         .is(string_with_no_whitespace())?;
//!
//!     check_that(page_size)
//!         .using_message("page size must be 1-100")
//!         .throwing_with(|message, _| BadRequest(message))
//!         .is(number_between(1, 100))?;
//!
//!     Ok(())
//! }
//!
//! assert!(lookup_user("u-42", 20).is_ok());
//! assert_eq!(lookup_user("u 42", 20).unwrap_err().0, "Argument should not have whitespace: [u 42]");
//! assert_eq!(lookup_user("u-42", 0).unwrap_err().0, "page size must be 1-100");
//! ```
//!
//! Predicates are plain values implementing [`Predicate`](predicate::Predicate)
//! and can be used without the builder as well.
//!
//! ## Features
//!
//! - `tracing`: log swallowed failures with `tracing` instead of stderr.
//! - `serde`: `Serialize` for [`ValidationFailure`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod builder;
pub mod checks;
pub mod failure;
pub mod mapper;
pub mod predicate;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod testing;

// Re-exports
pub use builder::{check_that, check_that_all, AssertionBuilder};
pub use failure::ValidationFailure;
pub use mapper::{ExceptionMapper, Raisable};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::builder::{check_that, check_that_all, AssertionBuilder};
    pub use crate::failure::ValidationFailure;
    pub use crate::mapper::{ExceptionMapper, Raisable};
    pub use crate::predicate::*;
}
