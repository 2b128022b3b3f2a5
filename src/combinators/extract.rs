//! Projection combinators: reuse a validator over a part of a larger value.

use std::marker::PhantomData;

use crate::contract::Contract;
use crate::message::Message;
use crate::outcome::Outcome;
use crate::validator::Validator;

/// Validates `A` by projecting it to `B` and delegating.
///
/// # Example
///
/// ```rust
/// use confluence::prelude::*;
/// use confluence::validators::{self, direct};
///
/// struct Email(String);
///
/// let has_at = direct::rule(|s: &str| {
///     if s.contains('@') { Outcome::Success } else { Outcome::failure("missing @") }
/// });
/// let email = validators::extract(|e: &Email| e.0.as_str(), has_at);
///
/// assert!(email.validate(&Email("a@b".into())).unwrap().is_success());
/// ```
pub struct Extract<F, V, B: ?Sized> {
    extractor: F,
    validator: V,
    _marker: PhantomData<fn(&B)>,
}

impl<F, V, B: ?Sized> Extract<F, V, B> {
    /// Create a projection through `extractor` into `validator`.
    pub fn new(extractor: F, validator: V) -> Self {
        Self {
            extractor,
            validator,
            _marker: PhantomData,
        }
    }
}

impl<F, V, B: ?Sized> std::fmt::Debug for Extract<F, V, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extract")
            .field("extractor", &"<function>")
            .field("validator", &"<validator>")
            .finish()
    }
}

impl<A, B, C, F, V> Validator<A, C> for Extract<F, V, B>
where
    A: ?Sized,
    B: ?Sized,
    C: Contract,
    F: Fn(&A) -> &B + Send + Sync,
    V: Validator<B, C>,
{
    #[inline]
    fn validate<'a>(&'a self, subject: &'a A) -> C::Eval<'a> {
        self.validator.validate((self.extractor)(subject))
    }
}

/// Validates an optional part; absence is a success.
pub struct IfExists<F, V, B: ?Sized> {
    extractor: F,
    validator: V,
    _marker: PhantomData<fn(&B)>,
}

impl<F, V, B: ?Sized> IfExists<F, V, B> {
    /// Delegate to `validator` whenever `extractor` finds a value.
    pub fn new(extractor: F, validator: V) -> Self {
        Self {
            extractor,
            validator,
            _marker: PhantomData,
        }
    }
}

impl<F, V, B: ?Sized> std::fmt::Debug for IfExists<F, V, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IfExists")
            .field("extractor", &"<function>")
            .field("validator", &"<validator>")
            .finish()
    }
}

impl<A, B, C, F, V> Validator<A, C> for IfExists<F, V, B>
where
    A: ?Sized,
    B: ?Sized,
    C: Contract,
    F: Fn(&A) -> Option<&B> + Send + Sync,
    V: Validator<B, C>,
{
    fn validate<'a>(&'a self, subject: &'a A) -> C::Eval<'a> {
        match (self.extractor)(subject) {
            Some(part) => self.validator.validate(part),
            None => C::pure(Ok(Outcome::Success)),
        }
    }
}

/// Validates a mandatory part; absence fails with a fixed message.
pub struct IfExistsOrElse<F, V, B: ?Sized> {
    extractor: F,
    validator: V,
    missing: Message,
    _marker: PhantomData<fn(&B)>,
}

impl<F, V, B: ?Sized> IfExistsOrElse<F, V, B> {
    /// Delegate to `validator` when present, otherwise fail with `missing`.
    pub fn new(extractor: F, validator: V, missing: Message) -> Self {
        Self {
            extractor,
            validator,
            missing,
            _marker: PhantomData,
        }
    }
}

impl<F, V, B: ?Sized> std::fmt::Debug for IfExistsOrElse<F, V, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IfExistsOrElse")
            .field("extractor", &"<function>")
            .field("validator", &"<validator>")
            .field("missing", &self.missing)
            .finish()
    }
}

impl<A, B, C, F, V> Validator<A, C> for IfExistsOrElse<F, V, B>
where
    A: ?Sized,
    B: ?Sized,
    C: Contract,
    F: Fn(&A) -> Option<&B> + Send + Sync,
    V: Validator<B, C>,
{
    fn validate<'a>(&'a self, subject: &'a A) -> C::Eval<'a> {
        match (self.extractor)(subject) {
            Some(part) => self.validator.validate(part),
            None => C::pure(Ok(Outcome::failure(self.missing.clone()))),
        }
    }
}
