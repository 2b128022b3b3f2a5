//! Non-empty vector type for type-safe collections
//!
//! This module provides the `NonEmptyVec<T>` type, a vector guaranteed to contain
//! at least one element. A failed [`Outcome`](crate::Outcome) stores its messages in
//! one, so "a failure with no messages" cannot be constructed.
//!
//! # Examples
//!
//! ```
//! use confluence::NonEmptyVec;
//!
//! let nev = NonEmptyVec::new(1, vec![2, 3, 4]);
//! assert_eq!(nev.head(), &1);
//! assert_eq!(nev.as_slice(), &[1, 2, 3, 4]);
//! assert_eq!(nev.len(), 4);
//! ```

use crate::Semigroup;

/// A non-empty vector guaranteed to contain at least one element.
///
/// Elements are kept contiguously so the whole collection can be borrowed as a slice.
///
/// # Example
///
/// ```
/// use confluence::NonEmptyVec;
///
/// let nev = NonEmptyVec::new("a", vec!["b"]);
/// assert_eq!(nev.head(), &"a");
/// assert_eq!(nev.last(), &"b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyVec<T> {
    // Invariant: never empty.
    items: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Create a new non-empty vector with a head element and tail.
    ///
    /// # Example
    ///
    /// ```
    /// use confluence::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::new(1, vec![2, 3]);
    /// assert_eq!(nev.len(), 3);
    /// ```
    pub fn new(head: T, tail: Vec<T>) -> Self {
        let mut items = Vec::with_capacity(1 + tail.len());
        items.push(head);
        items.extend(tail);
        Self { items }
    }

    /// Create a non-empty vector from a single element.
    ///
    /// # Example
    ///
    /// ```
    /// use confluence::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::singleton(42);
    /// assert_eq!(nev.len(), 1);
    /// assert_eq!(nev.head(), &42);
    /// ```
    pub fn singleton(value: T) -> Self {
        Self { items: vec![value] }
    }

    /// Try to create a non-empty vector from a `Vec`.
    ///
    /// Returns `None` if the vector is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use confluence::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::from_vec(vec![1, 2, 3]).unwrap();
    /// assert_eq!(nev.len(), 3);
    ///
    /// let empty = NonEmptyVec::from_vec(Vec::<i32>::new());
    /// assert!(empty.is_none());
    /// ```
    pub fn from_vec(items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }

    /// Get the first element (always succeeds).
    pub fn head(&self) -> &T {
        &self.items[0]
    }

    /// Get the last element (always succeeds).
    pub fn last(&self) -> &T {
        &self.items[self.items.len() - 1]
    }

    /// Get the number of elements.
    ///
    /// Always >= 1.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always returns `false`.
    ///
    /// This method exists to satisfy clippy's `len_without_is_empty` lint.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Push an element to the end.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Borrow all elements as a slice, in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterate over all elements.
    ///
    /// # Example
    ///
    /// ```
    /// use confluence::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::new(1, vec![2, 3]);
    /// let sum: i32 = nev.iter().sum();
    /// assert_eq!(sum, 6);
    /// ```
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Convert to a regular `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

// Semigroup: concatenation, left elements first
impl<T> Semigroup for NonEmptyVec<T> {
    fn combine(mut self, other: Self) -> Self {
        self.items.extend(other.items);
        self
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a NonEmptyVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> std::ops::Index<usize> for NonEmptyVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for NonEmptyVec<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for NonEmptyVec<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        NonEmptyVec::from_vec(items)
            .ok_or_else(|| serde::de::Error::custom("expected at least one element"))
    }
}
