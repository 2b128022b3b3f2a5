//! Execution contracts
//!
//! Every combinator in this crate is written once, against the [`Contract`] trait,
//! and works under both execution models:
//!
//! - [`Direct`]: validation runs to completion on the caller's thread and a
//!   validator returns `Result<Outcome, E>` straight away.
//! - [`Deferred`]: a validator returns a [`BoxFuture`] that eventually resolves to
//!   `Result<Outcome, E>`, so leaf validators may perform I/O and sibling
//!   validators may run concurrently.
//!
//! A contract says how to wrap a known result, how to run many evaluations and
//! fold their outcomes, how to walk evaluations until the first failure, how to
//! chain a dependent evaluation and how to recover from a fault. The combinators
//! derive all their ordering and short-circuit behaviour from these operations.
//!
//! # Ordering
//!
//! [`Contract::merge_all`] always folds in *iteration* order. Under `Deferred`
//! the futures are joined concurrently, yet the failure messages still come out in
//! list order rather than completion order. When several evaluations fault, the
//! one reported is the first in iteration order.
//!
//! [`Contract::first_failure`] pulls one evaluation at a time from a lazy
//! iterator, so evaluations after the first failure are never created. Under
//! `Deferred` it is a single loop, which keeps long sequences off the stack.

use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;

use futures::future::{self, FutureExt};

use crate::error_case::Fault;
use crate::outcome::Outcome;

/// A boxed, sendable future, as produced by deferred validators.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The effect operations validators are composed with.
///
/// Implemented by [`Direct`] and [`Deferred`].
pub trait Contract: Sized + Send + Sync + 'static {
    /// Error type carried alongside outcomes.
    type Fault;

    /// What a validator returns for a subject borrowed for `'a`.
    type Eval<'a>;

    /// Wrap an already known result.
    fn pure<'a>(result: Result<Outcome, Self::Fault>) -> Self::Eval<'a>;

    /// Run every evaluation and fold their outcomes with [`Outcome::concat`], in
    /// iteration order.
    ///
    /// A fault turns the whole fold into that fault. `Direct` stops pulling
    /// evaluations at the first one. `Deferred` lets every started future finish
    /// and reports the fault that comes first in iteration order.
    fn merge_all<'a, I>(evals: I) -> Self::Eval<'a>
    where
        I: IntoIterator<Item = Self::Eval<'a>>;

    /// Resolve evaluations one after the other and return the first failure, or
    /// success when none fails.
    ///
    /// The next evaluation is pulled from `evals` only after the previous one
    /// resolved to a success. A fault stops the walk.
    fn first_failure<'a, I>(evals: I) -> Self::Eval<'a>
    where
        I: IntoIterator<Item = Self::Eval<'a>>,
        I::IntoIter: Send + 'a;

    /// Feed the outcome of `eval` into `next`.
    ///
    /// `next` is not invoked, and the evaluation it would build is never created,
    /// when `eval` ends in a fault.
    fn and_then<'a, F>(eval: Self::Eval<'a>, next: F) -> Self::Eval<'a>
    where
        F: FnOnce(Outcome) -> Self::Eval<'a> + Send + 'a;

    /// Hand a fault raised by `eval` to `handler`; outcomes pass through untouched.
    fn recover<'a, H>(eval: Self::Eval<'a>, handler: H) -> Self::Eval<'a>
    where
        H: FnOnce(Self::Fault) -> Result<Outcome, Self::Fault> + Send + 'a;
}

/// Synchronous contract: validators return `Result<Outcome, E>`.
pub struct Direct<E = Fault>(PhantomData<fn() -> E>);

/// Future-based contract: validators return `BoxFuture<'a, Result<Outcome, E>>`.
pub struct Deferred<E = Fault>(PhantomData<fn() -> E>);

impl<E: 'static> Contract for Direct<E> {
    type Fault = E;
    type Eval<'a> = Result<Outcome, E>;

    #[inline]
    fn pure<'a>(result: Result<Outcome, E>) -> Self::Eval<'a> {
        result
    }

    fn merge_all<'a, I>(evals: I) -> Self::Eval<'a>
    where
        I: IntoIterator<Item = Self::Eval<'a>>,
    {
        // Lazy iterators stop pulling validators once a fault shows up.
        evals
            .into_iter()
            .try_fold(Outcome::Success, |acc, next| next.map(|outcome| acc.concat(outcome)))
    }

    fn first_failure<'a, I>(evals: I) -> Self::Eval<'a>
    where
        I: IntoIterator<Item = Self::Eval<'a>>,
        I::IntoIter: Send + 'a,
    {
        for eval in evals {
            let outcome = eval?;
            if outcome.is_failure() {
                return Ok(outcome);
            }
        }
        Ok(Outcome::Success)
    }

    #[inline]
    fn and_then<'a, F>(eval: Self::Eval<'a>, next: F) -> Self::Eval<'a>
    where
        F: FnOnce(Outcome) -> Self::Eval<'a> + Send + 'a,
    {
        eval.and_then(next)
    }

    #[inline]
    fn recover<'a, H>(eval: Self::Eval<'a>, handler: H) -> Self::Eval<'a>
    where
        H: FnOnce(E) -> Result<Outcome, E> + Send + 'a,
    {
        eval.or_else(handler)
    }
}

impl<E: Send + 'static> Contract for Deferred<E> {
    type Fault = E;
    type Eval<'a> = BoxFuture<'a, Result<Outcome, E>>;

    fn pure<'a>(result: Result<Outcome, E>) -> Self::Eval<'a> {
        future::ready(result).boxed()
    }

    fn merge_all<'a, I>(evals: I) -> Self::Eval<'a>
    where
        I: IntoIterator<Item = Self::Eval<'a>>,
    {
        // Every future is created before any is awaited, and each one runs to
        // completion even when a sibling faults.
        let launched: Vec<_> = evals.into_iter().collect();
        future::join_all(launched)
            .map(|results| {
                results
                    .into_iter()
                    .try_fold(Outcome::Success, |acc, next| next.map(|outcome| acc.concat(outcome)))
            })
            .boxed()
    }

    fn first_failure<'a, I>(evals: I) -> Self::Eval<'a>
    where
        I: IntoIterator<Item = Self::Eval<'a>>,
        I::IntoIter: Send + 'a,
    {
        let pending = evals.into_iter();
        async move {
            for eval in pending {
                let outcome = eval.await?;
                if outcome.is_failure() {
                    return Ok(outcome);
                }
            }
            Ok(Outcome::Success)
        }
        .boxed()
    }

    fn and_then<'a, F>(eval: Self::Eval<'a>, next: F) -> Self::Eval<'a>
    where
        F: FnOnce(Outcome) -> Self::Eval<'a> + Send + 'a,
    {
        async move {
            match eval.await {
                Ok(outcome) => next(outcome).await,
                Err(fault) => Err(fault),
            }
        }
        .boxed()
    }

    fn recover<'a, H>(eval: Self::Eval<'a>, handler: H) -> Self::Eval<'a>
    where
        H: FnOnce(E) -> Result<Outcome, E> + Send + 'a,
    {
        async move {
            match eval.await {
                Ok(outcome) => Ok(outcome),
                Err(fault) => handler(fault),
            }
        }
        .boxed()
    }
}

impl<E> std::fmt::Debug for Direct<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Direct")
    }
}

impl<E> std::fmt::Debug for Deferred<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Deferred")
    }
}

/// An already resolved successful evaluation, for deferred leaf validators.
///
/// # Example
///
/// ```
/// use confluence::contract::valid;
///
/// let outcome = futures::executor::block_on(valid::<String>()).unwrap();
/// assert!(outcome.is_success());
/// ```
pub fn valid<E: Send + 'static>() -> BoxFuture<'static, Result<Outcome, E>> {
    Deferred::<E>::pure(Ok(Outcome::Success))
}

/// An already resolved failed evaluation holding one message.
pub fn invalid<E: Send + 'static>(
    message: impl Into<crate::message::Message>,
) -> BoxFuture<'static, Result<Outcome, E>> {
    Deferred::<E>::pure(Ok(Outcome::failure(message)))
}
