//! Leaf validators: adapters from plain functions, and the identity validator.

use std::marker::PhantomData;

use crate::contract::{BoxFuture, Contract, Deferred, Direct};
use crate::outcome::Outcome;
use crate::validator::Validator;

/// The identity validator: always succeeds.
///
/// Merging with `Neutral` changes nothing, which makes it a convenient seed
/// when a list of validators is built up conditionally.
pub struct Neutral<C> {
    _contract: PhantomData<fn() -> C>,
}

impl<C> Neutral<C> {
    /// Create the identity validator.
    pub fn new() -> Self {
        Self {
            _contract: PhantomData,
        }
    }
}

impl<C> Default for Neutral<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for Neutral<C> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<C> Copy for Neutral<C> {}

impl<C> std::fmt::Debug for Neutral<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Neutral")
    }
}

impl<T: ?Sized, C: Contract> Validator<T, C> for Neutral<C> {
    #[inline]
    fn validate<'a>(&'a self, _subject: &'a T) -> C::Eval<'a> {
        C::pure(Ok(Outcome::Success))
    }
}

/// An infallible rule: `Fn(&T) -> Outcome`, usable under any contract.
///
/// Under [`Deferred`] the rule runs when `validate` is called and the returned
/// future is already resolved.
pub struct Rule<F, C> {
    rule: F,
    _contract: PhantomData<fn() -> C>,
}

impl<F, C> Rule<F, C> {
    /// Wrap `rule`.
    pub fn new(rule: F) -> Self {
        Self {
            rule,
            _contract: PhantomData,
        }
    }
}

impl<F: Clone, C> Clone for Rule<F, C> {
    fn clone(&self) -> Self {
        Self::new(self.rule.clone())
    }
}

impl<F, C> std::fmt::Debug for Rule<F, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("rule", &"<function>").finish()
    }
}

impl<T, C, F> Validator<T, C> for Rule<F, C>
where
    T: ?Sized,
    C: Contract,
    F: Fn(&T) -> Outcome + Send + Sync,
{
    #[inline]
    fn validate<'a>(&'a self, subject: &'a T) -> C::Eval<'a> {
        C::pure(Ok((self.rule)(subject)))
    }
}

/// A fallible direct leaf: `Fn(&T) -> Result<Outcome, E>`.
///
/// An `Err` is a fault; it propagates through every combinator except
/// [`Exceptionally`](super::Exceptionally).
pub struct FromFn<F, E> {
    check: F,
    _fault: PhantomData<fn() -> E>,
}

impl<F, E> FromFn<F, E> {
    /// Wrap `check`.
    pub fn new(check: F) -> Self {
        Self {
            check,
            _fault: PhantomData,
        }
    }
}

impl<F, E> std::fmt::Debug for FromFn<F, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").field("check", &"<function>").finish()
    }
}

impl<T, E, F> Validator<T, Direct<E>> for FromFn<F, E>
where
    T: ?Sized,
    E: 'static,
    F: Fn(&T) -> Result<Outcome, E> + Send + Sync,
{
    #[inline]
    fn validate<'a>(&'a self, subject: &'a T) -> Result<Outcome, E> {
        (self.check)(subject)
    }
}

/// A deferred leaf built from a function returning a boxed future.
///
/// The future may borrow the subject for as long as it runs.
///
/// # Example
///
/// ```rust
/// use confluence::prelude::*;
/// use confluence::validators::deferred;
/// use futures::FutureExt;
///
/// let known = deferred::from_async(|name: &String| {
///     async move {
///         // A real leaf would look the name up somewhere.
///         if name == "ada" {
///             Ok(Outcome::Success)
///         } else {
///             Ok(Outcome::failure(format!("unknown user {}", name)))
///         }
///     }
///     .boxed()
/// });
///
/// let outcome: Result<Outcome, Fault> =
///     futures::executor::block_on(known.validate(&"bob".to_string()));
/// assert_eq!(outcome.unwrap().to_string(), "Failure[unknown user bob]");
/// ```
pub struct FromAsync<F, E> {
    check: F,
    _fault: PhantomData<fn() -> E>,
}

impl<F, E> FromAsync<F, E> {
    /// Wrap `check`.
    pub fn new(check: F) -> Self {
        Self {
            check,
            _fault: PhantomData,
        }
    }
}

impl<F, E> std::fmt::Debug for FromAsync<F, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromAsync")
            .field("check", &"<async function>")
            .finish()
    }
}

impl<T, E, F> Validator<T, Deferred<E>> for FromAsync<F, E>
where
    T: ?Sized,
    E: Send + 'static,
    F: for<'a> Fn(&'a T) -> BoxFuture<'a, Result<Outcome, E>> + Send + Sync,
{
    #[inline]
    fn validate<'a>(&'a self, subject: &'a T) -> BoxFuture<'a, Result<Outcome, E>> {
        (self.check)(subject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_case::Fault;
    use futures::executor::block_on;

    #[test]
    fn test_neutral_succeeds_under_both_contracts() {
        let direct: Result<Outcome, Fault> = Neutral::<Direct>::new().validate(&"anything");
        assert!(direct.unwrap().is_success());

        let deferred = block_on(Neutral::<Deferred>::new().validate(&42));
        assert!(deferred.unwrap().is_success());
    }

    #[test]
    fn test_rule_under_deferred_is_already_resolved() {
        let rule = Rule::<_, Deferred>::new(|n: &i32| {
            if *n < 0 {
                Outcome::failure("negative")
            } else {
                Outcome::Success
            }
        });
        let outcome = futures::FutureExt::now_or_never(rule.validate(&-1));
        assert_eq!(outcome.map(Result::unwrap), Some(Outcome::failure("negative")));
    }

    #[test]
    fn test_from_fn_passes_faults_through() {
        #[derive(Debug, PartialEq)]
        struct Down;

        let check = FromFn::new(|_: &i32| Err(Down));
        let result: Result<Outcome, Down> = check.validate(&0);
        assert_eq!(result, Err(Down));
    }
}
