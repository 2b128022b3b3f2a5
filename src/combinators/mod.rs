//! Concrete validator types returned by the combinators.
//!
//! Every type here is written once against [`Contract`](crate::Contract) and
//! implements [`Validator`](crate::Validator) for both [`Direct`](crate::Direct)
//! and [`Deferred`](crate::Deferred), except the leaves and bridges that only
//! make sense under one of them ([`FromFn`], [`FromAsync`], [`Lift`],
//! [`LiftOn`]).
//!
//! Most users won't name these types directly. The free functions in
//! [`validators`](crate::validators) build them and infer their parameters.

mod exceptionally;
mod extract;
mod for_each;
mod leaf;
mod lift;
mod merge;

pub use exceptionally::Exceptionally;
pub use extract::{Extract, IfExists, IfExistsOrElse};
pub use for_each::{ForEach, ForEachFailFast};
pub use leaf::{FromAsync, FromFn, Neutral, Rule};
pub use lift::{Lift, LiftOn};
pub use merge::{Merge, MergeFailFast};
