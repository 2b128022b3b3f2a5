//! Merge combinators: run several validators against one subject.

use crate::contract::Contract;
use crate::validator::Validator;

/// Runs every validator and accumulates all failures, in list order.
///
/// Under [`Deferred`](crate::Deferred) all sub-validators are started before any
/// is awaited.
///
/// # Example
///
/// ```rust
/// use confluence::prelude::*;
/// use confluence::validators::{self, direct};
///
/// let checks = validators::merge(vec![
///     direct::rule(|n: &i32| if *n > 0 { Outcome::Success } else { Outcome::failure("positive") }).boxed(),
///     direct::rule(|n: &i32| if n % 2 == 0 { Outcome::Success } else { Outcome::failure("even") }).boxed(),
/// ]);
///
/// assert_eq!(checks.validate(&-3).unwrap().to_string(), "Failure[positive; even]");
/// ```
pub struct Merge<V> {
    validators: Vec<V>,
}

impl<V> Merge<V> {
    /// Create a merge over `validators`.
    pub fn new(validators: Vec<V>) -> Self {
        Self { validators }
    }

    /// Add one more validator at the end of the list.
    pub fn push(mut self, validator: V) -> Self {
        self.validators.push(validator);
        self
    }
}

impl<V> std::fmt::Debug for Merge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Merge")
            .field("validators", &self.validators.len())
            .finish()
    }
}

impl<T, C, V> Validator<T, C> for Merge<V>
where
    T: ?Sized + Sync,
    C: Contract,
    V: Validator<T, C>,
{
    fn validate<'a>(&'a self, subject: &'a T) -> C::Eval<'a> {
        C::merge_all(self.validators.iter().map(move |v| v.validate(subject)))
    }
}

/// Runs validators in list order and stops at the first failure.
///
/// Later validators are never invoked once an earlier one fails, so they may
/// assume every earlier check passed. Under [`Deferred`](crate::Deferred) the
/// next future is only created after the previous one resolved.
pub struct MergeFailFast<V> {
    validators: Vec<V>,
}

impl<V> MergeFailFast<V> {
    /// Create a fail-fast merge over `validators`.
    pub fn new(validators: Vec<V>) -> Self {
        Self { validators }
    }

    /// Add one more validator at the end of the chain.
    pub fn push(mut self, validator: V) -> Self {
        self.validators.push(validator);
        self
    }
}

impl<V> std::fmt::Debug for MergeFailFast<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MergeFailFast")
            .field("validators", &self.validators.len())
            .finish()
    }
}

impl<T, C, V> Validator<T, C> for MergeFailFast<V>
where
    T: ?Sized + Sync,
    C: Contract,
    V: Validator<T, C>,
{
    fn validate<'a>(&'a self, subject: &'a T) -> C::Eval<'a> {
        C::first_failure(self.validators.iter().map(move |v| v.validate(subject)))
    }
}
