//! Monoid trait for types with identity elements
//!
//! A `Monoid` extends `Semigroup` by adding an identity element. For validation
//! outcomes the identity is [`Outcome::Success`](crate::Outcome::Success), which is
//! what lets any number of results be folded without a special first case.
//!
//! # Mathematical Properties
//!
//! For a type to be a valid Monoid, it must satisfy:
//! 1. **Associativity** (from Semigroup):
//!    ```text
//!    a.combine(b).combine(c) == a.combine(b.combine(c))
//!    ```
//! 2. **Right Identity**:
//!    ```text
//!    a.combine(M::empty()) == a
//!    ```
//! 3. **Left Identity**:
//!    ```text
//!    M::empty().combine(a) == a
//!    ```
//!
//! # Examples
//!
//! ```
//! use confluence::{Monoid, Outcome, Semigroup};
//!
//! let failed = Outcome::failure("too short");
//! let empty: Outcome = Monoid::empty();
//! assert_eq!(failed.clone().combine(empty.clone()), failed);
//! assert_eq!(empty.combine(failed.clone()), failed);
//! ```

use crate::Semigroup;

/// A `Monoid` is a `Semigroup` with an identity element.
///
/// # Laws
///
/// For any value `a` of type `M` where `M: Monoid`:
///
/// ```text
/// a.combine(M::empty()) == a           (right identity)
/// M::empty().combine(a) == a           (left identity)
/// ```
pub trait Monoid: Semigroup {
    /// The identity element for this monoid.
    ///
    /// Satisfies: `a.combine(Self::empty()) == a` and `Self::empty().combine(a) == a`
    fn empty() -> Self;
}

/// Fold all values in an iterator, left to right, starting from the identity.
///
/// # Example
///
/// ```
/// use confluence::monoid::fold_all;
/// use confluence::Outcome;
///
/// let folded: Outcome = fold_all(vec![
///     Outcome::Success,
///     Outcome::failure("a"),
///     Outcome::failure("b"),
/// ]);
/// assert_eq!(folded.messages().len(), 2);
///
/// let nothing: Outcome = fold_all(Vec::new());
/// assert!(nothing.is_success());
/// ```
pub fn fold_all<M, I>(iter: I) -> M
where
    M: Monoid,
    I: IntoIterator<Item = M>,
{
    iter.into_iter().fold(M::empty(), |acc, x| acc.combine(x))
}
