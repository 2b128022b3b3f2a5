//! Semigroup trait for associative operations
//!
//! A Semigroup is a type with an associative binary operation. In this crate it is the
//! law behind failure accumulation: combining two failed outcomes appends their
//! messages, and combining with a success leaves the other side untouched.
//!
//! # Mathematical Properties
//!
//! For a type to be a valid Semigroup, the `combine` operation must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use confluence::{Outcome, Semigroup};
//!
//! let a = Outcome::failure("name is blank");
//! let b = Outcome::failure("age is negative");
//!
//! let combined = a.combine(b);
//! assert_eq!(combined.messages().len(), 2);
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// Implementations must satisfy the associativity law:
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// # Note on Ownership
///
/// The `combine` method takes `self` by value, not by reference. If you need to
/// preserve the original values, you must clone them before combining.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::{Outcome, Semigroup};
    ///
    /// let result = Outcome::Success.combine(Outcome::failure("boom"));
    /// assert!(result.is_failure());
    /// ```
    fn combine(self, other: Self) -> Self;
}
