//! Tracing support for validators.
//!
//! Combinators never log on their own. Wrapping a subtree with
//! [`ValidatorTracingExt::instrument`] runs it inside a span and records how it
//! ended: a `debug` event carrying the failure count for a failed outcome, a
//! `warn` event for a fault. Feature-gated behind `#[cfg(feature = "tracing")]`.

use std::fmt::Display;

use futures::future::FutureExt;

use crate::contract::{BoxFuture, Contract, Deferred, Direct};
use crate::outcome::Outcome;
use crate::validator::Validator;

/// A validator wrapped in a tracing span.
///
/// Created by [`ValidatorTracingExt::instrument`].
#[derive(Debug)]
pub struct Instrument<V> {
    inner: V,
    span: ::tracing::Span,
}

fn record<E: Display>(result: &Result<Outcome, E>) {
    match result {
        Ok(Outcome::Success) => {}
        Ok(Outcome::Failure(messages)) => {
            ::tracing::debug!(failures = messages.len(), "validation failed");
        }
        Err(fault) => {
            ::tracing::warn!(error = %fault, "validator raised a fault");
        }
    }
}

impl<T, E, V> Validator<T, Direct<E>> for Instrument<V>
where
    T: ?Sized,
    E: Display + 'static,
    V: Validator<T, Direct<E>>,
{
    fn validate<'a>(&'a self, subject: &'a T) -> Result<Outcome, E> {
        let _entered = self.span.enter();
        let result = self.inner.validate(subject);
        record(&result);
        result
    }
}

impl<T, E, V> Validator<T, Deferred<E>> for Instrument<V>
where
    T: ?Sized,
    E: Display + Send + 'static,
    V: Validator<T, Deferred<E>>,
{
    fn validate<'a>(&'a self, subject: &'a T) -> BoxFuture<'a, Result<Outcome, E>> {
        let eval = self.inner.validate(subject);
        let observed = async move {
            let result = eval.await;
            record(&result);
            result
        };
        ::tracing::Instrument::instrument(observed, self.span.clone()).boxed()
    }
}

/// Extension trait for adding tracing instrumentation to validators.
///
/// This trait is only available when the `tracing` feature is enabled.
pub trait ValidatorTracingExt<T: ?Sized, C: Contract>: Validator<T, C> + Sized {
    /// Wrap this validator in a tracing span.
    ///
    /// The span is entered for every `validate` call, and for every poll of the
    /// future under the deferred contract.
    ///
    /// # Example
    ///
    /// ```rust
    /// use confluence::prelude::*;
    /// use confluence::tracing::ValidatorTracingExt;
    /// use confluence::validators::direct;
    ///
    /// let age = direct::rule(|age: &u8| {
    ///     if *age >= 18 { Outcome::Success } else { Outcome::failure("underage") }
    /// })
    /// .instrument(tracing::debug_span!("age_check"));
    ///
    /// assert!(age.validate(&30).unwrap().is_success());
    /// ```
    fn instrument(self, span: ::tracing::Span) -> Instrument<Self> {
        Instrument { inner: self, span }
    }
}

impl<T: ?Sized, C: Contract, V: Validator<T, C>> ValidatorTracingExt<T, C> for V {}
