//! The validator abstraction
//!
//! A [`Validator<T, C>`] maps a borrowed subject of type `T` to an evaluation in the
//! contract `C`: `Result<Outcome, E>` under [`Direct`](crate::Direct), a
//! [`BoxFuture`](crate::contract::BoxFuture) of it under
//! [`Deferred`](crate::Deferred).
//!
//! Validators are built once and reused for many subjects. They hold no
//! per-subject state, which is why the trait requires `Send + Sync`.
//!
//! # Example
//!
//! ```
//! use confluence::prelude::*;
//! use confluence::validators::{self, direct};
//!
//! struct User {
//!     name: String,
//!     age: i32,
//! }
//!
//! let name_present = direct::rule(|name: &str| {
//!     if name.trim().is_empty() {
//!         Outcome::failure("name is blank")
//!     } else {
//!         Outcome::Success
//!     }
//! });
//! let adult = direct::rule(|age: &i32| {
//!     if *age >= 18 {
//!         Outcome::Success
//!     } else {
//!         Outcome::failure("must be an adult")
//!     }
//! });
//!
//! let user = validators::extract(|u: &User| u.name.as_str(), name_present)
//!     .merge(validators::extract(|u: &User| &u.age, adult));
//!
//! let outcome = user
//!     .validate(&User { name: " ".into(), age: 12 })
//!     .unwrap();
//! assert_eq!(outcome.to_string(), "Failure[name is blank; must be an adult]");
//! ```

use std::sync::Arc;

use crate::combinators::{Exceptionally, Merge, MergeFailFast};
use crate::contract::Contract;
use crate::error_case::{ErrorCase, ErrorCases};
use crate::message::Message;

/// A reusable check over subjects of type `T`, evaluated under contract `C`.
pub trait Validator<T: ?Sized, C: Contract>: Send + Sync {
    /// Validate `subject`.
    fn validate<'a>(&'a self, subject: &'a T) -> C::Eval<'a>;
}

/// Type-erased validator, for storing validators of different types together.
pub type BoxedValidator<T, C> = Box<dyn Validator<T, C>>;

impl<T: ?Sized, C: Contract, V: Validator<T, C> + ?Sized> Validator<T, C> for Box<V> {
    #[inline]
    fn validate<'a>(&'a self, subject: &'a T) -> C::Eval<'a> {
        (**self).validate(subject)
    }
}

impl<T: ?Sized, C: Contract, V: Validator<T, C> + ?Sized> Validator<T, C> for Arc<V> {
    #[inline]
    fn validate<'a>(&'a self, subject: &'a T) -> C::Eval<'a> {
        (**self).validate(subject)
    }
}

impl<T: ?Sized, C: Contract, V: Validator<T, C> + ?Sized> Validator<T, C> for &V {
    #[inline]
    fn validate<'a>(&'a self, subject: &'a T) -> C::Eval<'a> {
        (**self).validate(subject)
    }
}

/// Method-chaining combinators, available on every validator.
pub trait ValidatorExt<T: ?Sized, C: Contract>: Validator<T, C> + Sized {
    /// Run `self` and `other`, accumulating failures from both.
    ///
    /// Same as [`validators::merge`](crate::validators::merge) over the pair.
    fn merge<V>(self, other: V) -> Merge<BoxedValidator<T, C>>
    where
        Self: 'static,
        V: Validator<T, C> + 'static,
    {
        Merge::new(vec![self.boxed(), Box::new(other)])
    }

    /// Run `other` only when `self` succeeds.
    ///
    /// Same as [`validators::merge_fail_fast`](crate::validators::merge_fail_fast)
    /// over the pair.
    fn merge_fail_fast<V>(self, other: V) -> MergeFailFast<BoxedValidator<T, C>>
    where
        Self: 'static,
        V: Validator<T, C> + 'static,
    {
        MergeFailFast::new(vec![self.boxed(), Box::new(other)])
    }

    /// Convert faults matched by `cases` into failures.
    fn exceptionally(self, cases: impl Into<ErrorCases<C::Fault>>) -> Exceptionally<Self, C::Fault> {
        Exceptionally::new(self, cases.into())
    }

    /// Convert every fault into a failure described by `provider`.
    fn exceptionally_with<H, M>(self, provider: H) -> Exceptionally<Self, C::Fault>
    where
        H: Fn(&C::Fault) -> M + Send + Sync + 'static,
        M: Into<Message>,
    {
        Exceptionally::new(self, ErrorCase::otherwise(provider).into())
    }

    /// Erase the concrete type.
    fn boxed(self) -> BoxedValidator<T, C>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<T: ?Sized, C: Contract, V: Validator<T, C>> ValidatorExt<T, C> for V {}
