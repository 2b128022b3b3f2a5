//! Combinator facade
//!
//! Free functions that build every validator in this crate. The top-level
//! functions are generic over the contract, which is inferred from the
//! validators passed in. The [`direct`] and [`deferred`] submodules pin the
//! contract for leaf constructors, so closures need no extra annotations.
//!
//! # Example
//!
//! ```rust
//! use confluence::prelude::*;
//! use confluence::validators::{self, direct};
//!
//! struct Line {
//!     sku: String,
//!     quantity: u32,
//! }
//!
//! struct Order {
//!     id: Option<String>,
//!     lines: Vec<Line>,
//! }
//!
//! let quantity = validators::extract(
//!     |l: &Line| &l.quantity,
//!     direct::rule(|q: &u32| if *q > 0 { Outcome::Success } else { Outcome::failure("empty line") }),
//! );
//! let sku = validators::extract(
//!     |l: &Line| l.sku.as_str(),
//!     direct::rule(|s: &str| if s.len() == 8 { Outcome::Success } else { Outcome::failure("bad sku") }),
//! );
//!
//! let order = validators::merge(vec![
//!     validators::if_exists_or_else(|o: &Order| o.id.as_deref(), direct::neutral(), "missing id").boxed(),
//!     validators::for_each_in(|o: &Order| o.lines.as_slice(), quantity.merge(sku)).boxed(),
//! ]);
//!
//! let outcome = order
//!     .validate(&Order {
//!         id: None,
//!         lines: vec![Line { sku: "ABCDEFGH".into(), quantity: 0 }],
//!     })
//!     .unwrap();
//! assert_eq!(outcome.to_string(), "Failure[missing id; empty line]");
//! ```

use crate::combinators::{
    Exceptionally, Extract, ForEach, ForEachFailFast, IfExists, IfExistsOrElse, Lift, LiftOn,
    Merge, MergeFailFast, Neutral, Rule,
};
use crate::error_case::{ErrorCase, ErrorCases};
use crate::executor::Executor;
use crate::message::Message;
use crate::outcome::Outcome;

/// Run every validator and accumulate all failures, in list order.
///
/// Under the deferred contract the validators run concurrently; the messages
/// still come out in list order.
pub fn merge<V, I>(validators: I) -> Merge<V>
where
    I: IntoIterator<Item = V>,
{
    Merge::new(validators.into_iter().collect())
}

/// Run validators in list order, stopping at the first failure.
pub fn merge_fail_fast<V, I>(validators: I) -> MergeFailFast<V>
where
    I: IntoIterator<Item = V>,
{
    MergeFailFast::new(validators.into_iter().collect())
}

/// Validate every element of a sequence, accumulating failures in element order.
pub fn for_each<V>(validator: V) -> ForEach<V> {
    ForEach::new(validator)
}

/// Validate elements in order, stopping at the first failing one.
pub fn for_each_fail_fast<V>(validator: V) -> ForEachFailFast<V> {
    ForEachFailFast::new(validator)
}

/// Validate every element of the collection `extractor` finds inside the subject.
///
/// The collection may be a slice or any of the standard collections [`ForEach`]
/// accepts.
pub fn for_each_in<A, S, F, V>(extractor: F, validator: V) -> Extract<F, ForEach<V>, S>
where
    A: ?Sized,
    S: ?Sized,
    F: Fn(&A) -> &S + Send + Sync,
{
    Extract::new(extractor, ForEach::new(validator))
}

/// Fail-fast version of [`for_each_in`].
pub fn for_each_fail_fast_in<A, S, F, V>(
    extractor: F,
    validator: V,
) -> Extract<F, ForEachFailFast<V>, S>
where
    A: ?Sized,
    S: ?Sized,
    F: Fn(&A) -> &S + Send + Sync,
{
    Extract::new(extractor, ForEachFailFast::new(validator))
}

/// Validate the part of the subject `extractor` points at.
pub fn extract<A, B, F, V>(extractor: F, validator: V) -> Extract<F, V, B>
where
    A: ?Sized,
    B: ?Sized,
    F: Fn(&A) -> &B + Send + Sync,
{
    Extract::new(extractor, validator)
}

/// Validate an optional part; absence is a success.
pub fn if_exists<A, B, F, V>(extractor: F, validator: V) -> IfExists<F, V, B>
where
    A: ?Sized,
    B: ?Sized,
    F: Fn(&A) -> Option<&B> + Send + Sync,
{
    IfExists::new(extractor, validator)
}

/// Validate a mandatory part; absence fails with `missing`.
pub fn if_exists_or_else<A, B, F, V>(
    extractor: F,
    validator: V,
    missing: impl Into<Message>,
) -> IfExistsOrElse<F, V, B>
where
    A: ?Sized,
    B: ?Sized,
    F: Fn(&A) -> Option<&B> + Send + Sync,
{
    IfExistsOrElse::new(extractor, validator, missing.into())
}

/// Convert faults matched by `cases` into failures; others keep propagating.
pub fn exceptionally<V, E>(validator: V, cases: impl Into<ErrorCases<E>>) -> Exceptionally<V, E> {
    Exceptionally::new(validator, cases.into())
}

/// Convert every fault into a failure described by `provider`.
pub fn exceptionally_with<V, E, H, M>(validator: V, provider: H) -> Exceptionally<V, E>
where
    H: Fn(&E) -> M + Send + Sync + 'static,
    M: Into<Message>,
{
    Exceptionally::new(validator, ErrorCase::otherwise(provider).into())
}

/// The identity validator under contract `C`.
pub fn neutral<C>() -> Neutral<C> {
    Neutral::new()
}

/// An infallible rule under contract `C`.
pub fn rule<C, T, F>(rule: F) -> Rule<F, C>
where
    T: ?Sized,
    F: Fn(&T) -> Outcome + Send + Sync,
{
    Rule::new(rule)
}

/// Adapt a direct validator into the deferred contract.
pub fn lift<V>(validator: V) -> Lift<V> {
    Lift::new(validator)
}

/// Adapt a direct validator into the deferred contract, running it on `executor`.
pub fn lift_on<V, X: Executor>(validator: V, executor: X) -> LiftOn<V, X> {
    LiftOn::new(validator, executor)
}

/// Leaf constructors for the direct contract.
pub mod direct {
    use crate::combinators::{FromFn, Neutral, Rule};
    use crate::contract::Direct;
    use crate::outcome::Outcome;

    /// An infallible direct rule.
    pub fn rule<T, F>(rule: F) -> Rule<F, Direct>
    where
        T: ?Sized,
        F: Fn(&T) -> Outcome + Send + Sync,
    {
        Rule::new(rule)
    }

    /// A direct leaf that may raise a fault.
    pub fn from_fn<T, E, F>(check: F) -> FromFn<F, E>
    where
        T: ?Sized,
        F: Fn(&T) -> Result<Outcome, E> + Send + Sync,
    {
        FromFn::new(check)
    }

    /// The direct identity validator.
    pub fn neutral() -> Neutral<Direct> {
        Neutral::new()
    }
}

/// Leaf constructors for the deferred contract.
pub mod deferred {
    use crate::combinators::{FromAsync, Neutral, Rule};
    use crate::contract::{BoxFuture, Deferred};
    use crate::outcome::Outcome;

    pub use crate::contract::{invalid, valid};

    /// An infallible rule evaluated eagerly, resolved immediately.
    pub fn rule<T, F>(rule: F) -> Rule<F, Deferred>
    where
        T: ?Sized,
        F: Fn(&T) -> Outcome + Send + Sync,
    {
        Rule::new(rule)
    }

    /// A deferred leaf from a function returning a boxed future.
    pub fn from_async<T, E, F>(check: F) -> FromAsync<F, E>
    where
        T: ?Sized,
        F: for<'a> Fn(&'a T) -> BoxFuture<'a, Result<Outcome, E>> + Send + Sync,
    {
        FromAsync::new(check)
    }

    /// The deferred identity validator.
    pub fn neutral() -> Neutral<Deferred> {
        Neutral::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{Deferred, Direct};
    use crate::error_case::Fault;
    use crate::validator::{Validator, ValidatorExt};
    use tokio_test::block_on;

    #[test]
    fn test_neutral_is_identity_for_merge() {
        let failing = || direct::rule(|_: &i32| Outcome::failure("A")).boxed();
        let with_neutral = merge(vec![neutral::<Direct>().boxed(), failing()]);
        let without = merge(vec![failing()]);
        assert_eq!(
            with_neutral.validate(&0).unwrap(),
            without.validate(&0).unwrap()
        );
    }

    #[test]
    fn test_generic_rule_picks_contract() {
        let positive = rule::<Deferred, _, _>(|n: &i64| {
            if *n > 0 {
                Outcome::Success
            } else {
                Outcome::failure("positive")
            }
        });
        let outcome: Result<Outcome, Fault> = block_on(positive.validate(&0));
        assert_eq!(outcome.unwrap(), Outcome::failure("positive"));
    }

    #[test]
    fn test_for_each_fail_fast_in_projects_sequence() {
        struct Batch {
            items: Vec<i32>,
        }

        let each = for_each_fail_fast_in(
            |b: &Batch| b.items.as_slice(),
            direct::rule(|n: &i32| Outcome::failure(format!("item {}", n))),
        );
        let outcome = each.validate(&Batch { items: vec![1, 2] }).unwrap();
        assert_eq!(outcome.to_string(), "Failure[item 1]");
    }

    #[test]
    fn test_exceptionally_with_plain_error_type() {
        #[derive(Debug)]
        enum Lookup {
            Gone,
        }

        let check = exceptionally_with(
            direct::from_fn(|_: &i32| Err(Lookup::Gone)),
            |e: &Lookup| format!("{:?}", e),
        );
        let outcome: Result<Outcome, Lookup> = check.validate(&1);
        assert_eq!(outcome.unwrap(), Outcome::failure("Gone"));
    }

    #[test]
    fn test_for_each_in_accepts_a_set_field() {
        use std::collections::BTreeSet;

        struct Team {
            members: BTreeSet<String>,
        }

        let each = for_each_in(
            |t: &Team| &t.members,
            direct::rule(|name: &String| {
                if name.len() > 3 {
                    Outcome::Success
                } else {
                    Outcome::failure(format!("{} is too short", name))
                }
            }),
        );
        let team = Team {
            members: ["zed", "alexandra", "bo"].iter().map(|s| s.to_string()).collect(),
        };
        let outcome = each.validate(&team).unwrap();
        assert_eq!(outcome.to_string(), "Failure[bo is too short; zed is too short]");
    }
}
