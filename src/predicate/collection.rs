//! Collection and map predicates
//!
//! Predicates are generic over the [`Collection`] and [`Map`] traits rather
//! than a concrete container, so the same predicate checks a `Vec`, a slice,
//! a `HashSet` or a `BTreeSet`.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::hash::{BuildHasher, Hash};

use super::combinators::Predicate;
use crate::ValidationFailure;

/// A finite container that can answer membership questions.
pub trait Collection {
    /// Element type.
    type Item;

    /// Number of elements.
    fn size(&self) -> usize;

    /// Whether `item` is one of the elements.
    fn includes(&self, item: &Self::Item) -> bool;
}

impl<T: PartialEq> Collection for [T] {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn includes(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: PartialEq, const N: usize> Collection for [T; N] {
    type Item = T;

    fn size(&self) -> usize {
        N
    }

    fn includes(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: PartialEq> Collection for Vec<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn includes(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: PartialEq> Collection for VecDeque<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn includes(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: Eq + Hash, S: BuildHasher> Collection for HashSet<T, S> {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn includes(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: Ord> Collection for BTreeSet<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn includes(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<C: Collection + ?Sized> Collection for &C {
    type Item = C::Item;

    fn size(&self) -> usize {
        (**self).size()
    }

    fn includes(&self, item: &C::Item) -> bool {
        (**self).includes(item)
    }
}

/// A key-value container.
pub trait Map {
    /// Key type.
    type Key;
    /// Value type.
    type Value;

    /// Number of entries.
    fn size(&self) -> usize;

    /// The value stored under `key`.
    fn lookup(&self, key: &Self::Key) -> Option<&Self::Value>;

    /// Whether any entry holds `value`.
    fn has_value(&self, value: &Self::Value) -> bool
    where
        Self::Value: PartialEq;

    /// Whether an entry exists for `key`.
    fn has_key(&self, key: &Self::Key) -> bool {
        self.lookup(key).is_some()
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> Map for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn size(&self) -> usize {
        self.len()
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn has_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|v| v == value)
    }
}

impl<K: Ord, V> Map for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn size(&self) -> usize {
        self.len()
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn has_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|v| v == value)
    }
}

impl<M: Map + ?Sized> Map for &M {
    type Key = M::Key;
    type Value = M::Value;

    fn size(&self) -> usize {
        (**self).size()
    }

    fn lookup(&self, key: &M::Key) -> Option<&M::Value> {
        (**self).lookup(key)
    }

    fn has_value(&self, value: &M::Value) -> bool
    where
        M::Value: PartialEq,
    {
        (**self).has_value(value)
    }
}

fn require_non_empty<C: Collection + ?Sized>(collection: &C) -> Result<(), ValidationFailure> {
    if collection.size() == 0 {
        Err(ValidationFailure::new("Collection is empty"))
    } else {
        Ok(())
    }
}

/// Predicate that rejects an empty collection.
#[derive(Clone, Copy, Default, Debug)]
pub struct NonEmptyCollection;

impl<C: Collection + ?Sized> Predicate<C> for NonEmptyCollection {
    #[inline]
    fn check(&self, value: &C) -> Result<(), ValidationFailure> {
        require_non_empty(value)
    }
}

/// Create a predicate that rejects empty collections.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
///
/// assert!(non_empty_collection().check(&vec![1, 2, 3]).is_ok());
/// assert!(non_empty_collection().check(&Vec::<i32>::new()).is_err());
/// ```
pub fn non_empty_collection() -> NonEmptyCollection {
    NonEmptyCollection
}

/// Predicate that accepts only an empty collection.
#[derive(Clone, Copy, Default, Debug)]
pub struct EmptyCollection;

impl<C: Collection + ?Sized> Predicate<C> for EmptyCollection {
    #[inline]
    fn check(&self, value: &C) -> Result<(), ValidationFailure> {
        match value.size() {
            0 => Ok(()),
            size => Err(ValidationFailure::new(format!(
                "Expected an empty collection, but it has size [{}]",
                size
            ))),
        }
    }
}

/// Create a predicate that accepts only empty collections.
pub fn empty_collection() -> EmptyCollection {
    EmptyCollection
}

/// Predicate that requires a specific element.
#[derive(Clone, Debug)]
pub struct CollectionContaining<E> {
    element: E,
}

impl<C, E> Predicate<C> for CollectionContaining<E>
where
    C: Collection<Item = E> + ?Sized,
    E: fmt::Debug + Send + Sync,
{
    fn check(&self, value: &C) -> Result<(), ValidationFailure> {
        if value.includes(&self.element) {
            Ok(())
        } else {
            Err(ValidationFailure::new(format!(
                "{:?} not found in Collection",
                self.element
            )))
        }
    }
}

/// Create a predicate that checks the collection contains `element`.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
///
/// let p = collection_containing("b");
/// assert!(p.check(&vec!["a", "b"]).is_ok());
/// assert!(p.check(&vec!["a", "c"]).is_err());
/// ```
pub fn collection_containing<E>(element: E) -> CollectionContaining<E> {
    CollectionContaining { element }
}

/// Predicate that requires several elements.
#[derive(Clone, Debug)]
pub struct CollectionContainingAll<E> {
    first: CollectionContaining<E>,
    others: Vec<E>,
}

impl<C, E> Predicate<C> for CollectionContainingAll<E>
where
    C: Collection<Item = E> + ?Sized,
    E: fmt::Debug + Send + Sync,
{
    fn check(&self, value: &C) -> Result<(), ValidationFailure> {
        self.first.check(value)?;
        match self.others.iter().find(|e| !value.includes(e)) {
            None => Ok(()),
            Some(missing) => Err(ValidationFailure::new(format!(
                "Element not found in Collection: {:?}",
                missing
            ))),
        }
    }
}

/// Create a predicate that checks every listed element is present.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
///
/// let p = collection_containing_all(1, [2, 3]);
/// assert!(p.check(&vec![3, 2, 1]).is_ok());
/// assert!(p.check(&vec![1, 2]).is_err());
/// ```
pub fn collection_containing_all<E>(
    first: E,
    others: impl IntoIterator<Item = E>,
) -> CollectionContainingAll<E> {
    CollectionContainingAll {
        first: collection_containing(first),
        others: others.into_iter().collect(),
    }
}

/// Predicate that requires at least one of several elements.
#[derive(Clone, Debug)]
pub struct CollectionContainingAnyOf<E> {
    candidates: Vec<E>,
}

impl<C, E> Predicate<C> for CollectionContainingAnyOf<E>
where
    C: Collection<Item = E> + ?Sized,
    E: fmt::Debug + Send + Sync,
{
    fn check(&self, value: &C) -> Result<(), ValidationFailure> {
        if self.candidates.iter().any(|e| value.includes(e)) {
            Ok(())
        } else {
            Err(ValidationFailure::new(format!(
                "Collection does not contain any of: {:?}",
                self.candidates
            )))
        }
    }
}

/// Create a predicate that passes when any listed element is present.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
///
/// let p = collection_containing_at_least_one_of("x", ["y", "z"]);
/// assert!(p.check(&vec!["a", "z"]).is_ok());
/// assert!(p.check(&vec!["a", "b"]).is_err());
/// ```
pub fn collection_containing_at_least_one_of<E>(
    first: E,
    others: impl IntoIterator<Item = E>,
) -> CollectionContainingAnyOf<E> {
    let mut candidates = vec![first];
    candidates.extend(others);
    CollectionContainingAnyOf { candidates }
}

/// Predicate for an exact, non-zero collection size.
#[derive(Clone, Copy, Debug)]
pub struct CollectionOfSize {
    size: usize,
}

impl<C: Collection + ?Sized> Predicate<C> for CollectionOfSize {
    fn check(&self, value: &C) -> Result<(), ValidationFailure> {
        require_non_empty(value)?;
        let actual = value.size();
        if actual == self.size {
            Ok(())
        } else {
            Err(ValidationFailure::new(format!(
                "Expected collection with size [{}] but is instead [{}]",
                self.size, actual
            )))
        }
    }
}

/// Create a predicate that checks the collection has exactly `size`
/// elements.
///
/// Empty collections are always rejected with the
/// [`non_empty_collection`] failure.
pub fn collection_of_size(size: usize) -> CollectionOfSize {
    CollectionOfSize { size }
}

/// Predicate that requires the argument to be a member of a collection.
#[derive(Clone, Debug)]
pub struct ElementInCollection<C> {
    collection: C,
}

impl<C> Predicate<C::Item> for ElementInCollection<C>
where
    C: Collection + Send + Sync,
    C::Item: fmt::Debug,
{
    fn check(&self, value: &C::Item) -> Result<(), ValidationFailure> {
        if self.collection.includes(value) {
            Ok(())
        } else {
            Err(ValidationFailure::new(format!(
                "Expected element [{:?}] to be in collection",
                value
            )))
        }
    }
}

/// Create a predicate that checks the argument is one of `collection`'s
/// elements.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
///
/// let p = element_in_collection(vec!["red", "green", "blue"]);
/// assert!(p.check(&"green").is_ok());
/// assert!(p.check(&"purple").is_err());
/// ```
pub fn element_in_collection<C: Collection>(collection: C) -> ElementInCollection<C> {
    ElementInCollection { collection }
}

/// Predicate that rejects an empty map.
#[derive(Clone, Copy, Default, Debug)]
pub struct NonEmptyMap;

impl<M: Map + ?Sized> Predicate<M> for NonEmptyMap {
    #[inline]
    fn check(&self, value: &M) -> Result<(), ValidationFailure> {
        if value.size() == 0 {
            Err(ValidationFailure::new("Map is empty"))
        } else {
            Ok(())
        }
    }
}

/// Create a predicate that rejects empty maps.
pub fn non_empty_map() -> NonEmptyMap {
    NonEmptyMap
}

/// Predicate that requires a key to be present.
#[derive(Clone, Debug)]
pub struct MapWithKey<K> {
    key: K,
}

impl<M, K> Predicate<M> for MapWithKey<K>
where
    M: Map<Key = K> + ?Sized,
    K: fmt::Debug + Send + Sync,
{
    fn check(&self, value: &M) -> Result<(), ValidationFailure> {
        if value.has_key(&self.key) {
            Ok(())
        } else {
            Err(self.missing())
        }
    }
}

impl<K: fmt::Debug> MapWithKey<K> {
    fn missing(&self) -> ValidationFailure {
        ValidationFailure::new(format!("Expected Key [{:?}] in Map", self.key))
    }
}

/// Create a predicate that checks the map has an entry for `key`.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
/// use std::collections::HashMap;
///
/// let map = HashMap::from([("a", 1)]);
/// assert!(map_with_key("a").check(&map).is_ok());
/// assert!(map_with_key("b").check(&map).is_err());
/// ```
pub fn map_with_key<K>(key: K) -> MapWithKey<K> {
    MapWithKey { key }
}

/// Predicate that requires a specific entry.
#[derive(Clone, Debug)]
pub struct MapWithKeyValue<K, V> {
    key: MapWithKey<K>,
    value: V,
}

impl<M, K, V> Predicate<M> for MapWithKeyValue<K, V>
where
    M: Map<Key = K, Value = V> + ?Sized,
    K: fmt::Debug + Send + Sync,
    V: PartialEq + fmt::Debug + Send + Sync,
{
    fn check(&self, value: &M) -> Result<(), ValidationFailure> {
        match value.lookup(&self.key.key) {
            None => Err(self.key.missing()),
            Some(actual) if *actual == self.value => Ok(()),
            Some(actual) => Err(ValidationFailure::new(format!(
                "Value in Map [{:?}] does not match expected value {:?}",
                actual, self.value
            ))),
        }
    }
}

/// Create a predicate that checks the map holds `value` under `key`.
pub fn map_with_key_value<K, V>(key: K, value: V) -> MapWithKeyValue<K, V> {
    MapWithKeyValue {
        key: map_with_key(key),
        value,
    }
}

/// Predicate that requires the argument to be a key of a map.
#[derive(Clone, Debug)]
pub struct KeyInMap<M> {
    map: M,
}

impl<M> Predicate<M::Key> for KeyInMap<M>
where
    M: Map + Send + Sync,
    M::Key: fmt::Debug,
{
    fn check(&self, value: &M::Key) -> Result<(), ValidationFailure> {
        if self.map.has_key(value) {
            Ok(())
        } else {
            Err(ValidationFailure::new(format!(
                "Expected key [{:?}] to be in map",
                value
            )))
        }
    }
}

/// Create a predicate that checks the argument is a key of `map`.
pub fn key_in_map<M: Map>(map: M) -> KeyInMap<M> {
    KeyInMap { map }
}

/// Predicate that requires the argument to be a value of a map.
#[derive(Clone, Debug)]
pub struct ValueInMap<M> {
    map: M,
}

impl<M> Predicate<M::Value> for ValueInMap<M>
where
    M: Map + Send + Sync,
    M::Value: PartialEq + fmt::Debug,
{
    fn check(&self, value: &M::Value) -> Result<(), ValidationFailure> {
        if self.map.has_value(value) {
            Ok(())
        } else {
            Err(ValidationFailure::new(format!(
                "Expected value [{:?}] to be in map",
                value
            )))
        }
    }
}

/// Create a predicate that checks the argument is one of `map`'s values.
///
/// # Example
///
/// ```rust
/// use alembic::predicate::*;
/// use std::collections::BTreeMap;
///
/// let map = BTreeMap::from([(1, "one"), (2, "two")]);
/// assert!(value_in_map(&map).check(&"two").is_ok());
/// assert!(value_in_map(&map).check(&"three").is_err());
/// ```
pub fn value_in_map<M: Map>(map: M) -> ValueInMap<M> {
    ValueInMap { map }
}
