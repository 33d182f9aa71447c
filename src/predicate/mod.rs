//! Reusable predicates for argument checking
//!
//! A [`Predicate`] either accepts a value or rejects it with a
//! [`ValidationFailure`](crate::ValidationFailure) explaining why. The factory
//! functions in this module build the predicates; [`PredicateExt`],
//! [`not`], [`all_of`] and [`combine!`](crate::combine) compose them.
//!
//! String predicates accept anything that is `AsRef<str>`, so chaining them
//! with [`PredicateExt::and`] needs the subject type spelled out. `combine!`
//! leaves it to the call to `check`.
//!
//! Factories check their own configuration eagerly and panic on nonsense
//! such as `number_between(10, 1)`, so a bad predicate never gets as far as
//! checking a value.
//!
//! # Example
//!
//! ```rust
//! use alembic::predicate::*;
//!
//! let username = alembic::combine!(string_with_length_between(3, 20), alphanumeric_string());
//!
//! assert!(username.check("jdoe42").is_ok());
//! assert!(username.check("jd").is_err());
//! assert_eq!(
//!     username.check("j.doe").unwrap_err().message(),
//!     "Expected alphanumeric string, but character '.' is not"
//! );
//! ```
//!
//! # Absent values
//!
//! Optional arguments are `Option<T>`. [`present`] lifts any predicate to
//! one over `Option<T>` that rejects `None` first:
//!
//! ```rust
//! use alembic::predicate::*;
//!
//! let nickname: Option<&str> = None;
//! let failure = present(non_empty_string()).check(&nickname).unwrap_err();
//! assert_eq!(failure.message(), "Argument is null");
//! ```

mod address;
mod boolean;
mod collection;
mod combinators;
mod geolocation;
mod network;
mod number;
mod object;
mod people;
mod string;
mod time;

pub mod prelude;

// Re-export core trait
pub use combinators::{Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::{all_of, not, AllOf, And, BoxedPredicate, Not};

// Re-export object predicates
pub use object::{
    equal_to, instance_of, not_null, null_object, present, same_instance_as, AsAny, EqualTo,
    InstanceOf, NotNull, NullObject, Present, SameInstanceAs,
};

// Re-export number predicates
pub use number::{
    greater_than, greater_than_or_equal_to, greater_than_or_equal_to_within, greater_than_within,
    less_than, less_than_or_equal_to, less_than_or_equal_to_within, less_than_within,
    negative_integer, negative_long, number_between, positive_integer, positive_long, Float,
    GreaterThan, GreaterThanOrEqualTo, LessThan, LessThanOrEqualTo, Number, NumberBetween,
    Positive,
};

// Re-export string predicates
pub use string::{
    all_lower_case_string, all_upper_case_string, alphabetic_string, alphanumeric_string,
    decimal_string, empty_string, integer_string, non_empty_string, string_beginning_with,
    string_containing, string_ending_with, string_representing_integer, string_that_matches,
    string_with_length, string_with_length_between, string_with_length_greater_than,
    string_with_length_greater_than_or_equal_to, string_with_length_less_than,
    string_with_length_less_than_or_equal_to, string_with_no_whitespace, valid_uuid,
    BeginningWith, CharacterClass, Containing, DecimalString, EmptyString, EndingWith,
    IntegerString, Matches, NoWhitespace, NonEmptyString, RepresentingInteger, StringWithLength,
    StringWithLengthBetween, StringWithLengthGreaterThan, StringWithLengthGreaterThanOrEqualTo,
    StringWithLengthLessThan, StringWithLengthLessThanOrEqualTo, ValidUuid,
};

// Re-export collection predicates
pub use collection::{
    collection_containing, collection_containing_all, collection_containing_at_least_one_of,
    collection_of_size, element_in_collection, empty_collection, key_in_map, map_with_key,
    map_with_key_value, non_empty_collection, non_empty_map, value_in_map, Collection,
    CollectionContaining, CollectionContainingAll, CollectionContainingAnyOf, CollectionOfSize,
    ElementInCollection, EmptyCollection, KeyInMap, Map, MapWithKey, MapWithKeyValue,
    NonEmptyCollection, NonEmptyMap, ValueInMap,
};

// Re-export time predicates
pub use time::{
    after, before, epoch_now_within_delta, epoch_right_now, equal_to_instant_within_delta,
    in_the_future, in_the_past, now_within_delta, right_now, After, Before, EpochNowWithinDelta,
    EqualToInstantWithinDelta, InTheFuture, InThePast, NowWithinDelta,
};

// Re-export domain predicates
pub use address::{valid_zip_code, valid_zip_code_string, ValidZipCode, ValidZipCodeString};
pub use boolean::{false_statement, true_statement, FalseStatement, TrueStatement};
pub use geolocation::{valid_latitude, valid_longitude, ValidLatitude, ValidLongitude};
pub use network::{valid_port, valid_url, ValidPort, ValidUrl};
pub use people::{valid_email_address, ValidEmailAddress};
