//! An ordered collection that always holds at least one element.
//!
//! [`Nonempty`] backs the GA population: operations that would otherwise
//! need an "empty population" branch (best organism, head, sampling) are
//! total here.

use crate::random::{Generator, Seed};
use std::cmp::Ordering;
use std::ops::Index;

/// Error returned when building a [`Nonempty`] from an empty sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot build a non-empty collection from an empty sequence")]
pub struct EmptyError;

/// A `Vec` with at least one element.
///
/// # Examples
///
/// ```
/// use u_evolve::Nonempty;
///
/// let xs = Nonempty::new(3, vec![1, 2]);
/// assert_eq!(*xs.head(), 3);
/// assert_eq!(xs.sort_by_key(|x| *x).into_vec(), vec![1, 2, 3]);
/// assert!(Nonempty::<i32>::from_vec(vec![]).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Nonempty<T> {
    items: Vec<T>,
}

impl<T> Nonempty<T> {
    /// Builds from a head element and the remaining elements.
    pub fn new(head: T, tail: Vec<T>) -> Self {
        let mut items = Vec::with_capacity(tail.len() + 1);
        items.push(head);
        items.extend(tail);
        Self { items }
    }

    /// A one-element collection.
    pub fn singleton(value: T) -> Self {
        Self { items: vec![value] }
    }

    /// Returns `None` if `items` is empty.
    pub fn from_vec(items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }

    /// Draws `len` elements from `generator` (at least one).
    ///
    /// The head is drawn first, then `len - 1` tail elements, and the
    /// collection keeps that order. A `len` of 0 still draws the head.
    pub fn random<G>(len: usize, generator: &G, seed: Seed) -> (Self, Seed)
    where
        G: Generator<Output = T>,
    {
        let (head, seed) = generator.step(seed);
        let (tail, seed) = seed.list(len.saturating_sub(1), |s| generator.step(s));
        (Self::new(head, tail), seed)
    }

    pub fn head(&self) -> &T {
        &self.items[0]
    }

    pub fn tail(&self) -> &[T] {
        &self.items[1..]
    }

    pub fn last(&self) -> &T {
        &self.items[self.items.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; present for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn is_singleton(&self) -> bool {
        self.items.len() == 1
    }

    /// Element at `index` taken modulo [`len`](Self::len). Never fails.
    pub fn get(&self, index: usize) -> &T {
        &self.items[index % self.items.len()]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Picks one element uniformly, consuming one `int` draw.
    pub fn sample(&self, seed: Seed) -> (&T, Seed) {
        let (i, seed) = seed.int(0, self.items.len() as i64 - 1);
        (&self.items[i as usize], seed)
    }

    pub fn map<U, F>(self, f: F) -> Nonempty<U>
    where
        F: FnMut(T) -> U,
    {
        Nonempty {
            items: self.items.into_iter().map(f).collect(),
        }
    }

    /// Stable sort with a comparator.
    pub fn sort_by<F>(mut self, compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.items.sort_by(compare);
        self
    }

    /// Stable sort by a totally ordered key.
    pub fn sort_by_key<K, F>(mut self, key: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.items.sort_by_key(key);
        self
    }

    pub fn reverse(mut self) -> Self {
        self.items.reverse();
        self
    }

    /// Prepends `value`.
    pub fn cons(mut self, value: T) -> Self {
        self.items.insert(0, value);
        self
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Appends all elements of `other`.
    pub fn append(mut self, other: Nonempty<T>) -> Self {
        self.items.extend(other.items);
        self
    }
}

impl<T: Clone> Nonempty<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T> TryFrom<Vec<T>> for Nonempty<T> {
    type Error = EmptyError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_vec(items).ok_or(EmptyError)
    }
}

impl<T> From<Nonempty<T>> for Vec<T> {
    fn from(nonempty: Nonempty<T>) -> Self {
        nonempty.items
    }
}

impl<T> Index<usize> for Nonempty<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IntoIterator for Nonempty<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Nonempty<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Nonempty<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Nonempty<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Self::from_vec(items)
            .ok_or_else(|| serde::de::Error::invalid_length(0, &"at least one element"))
    }
}
