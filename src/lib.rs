//! # Confluence
//!
//! > *Many small streams, one river.*
//!
//! A Rust library for composing validators out of small, independent checks.
//!
//! ## Philosophy
//!
//! A validator answers one question about one value. Real rules are built by
//! combining validators with a handful of algebraic combinators:
//!
//! - **merge** runs every check and reports every violation at once
//! - **fail-fast** stops at the first violation, so later checks may rely on
//!   earlier ones
//! - **for-each** applies a check to every element of a sequence
//! - **extract** reuses a check on a field of a larger value
//! - **exceptionally** turns unexpected faults into ordinary failures
//!
//! Every combinator works under two execution contracts. Under [`Direct`] a
//! validator returns `Result<Outcome, E>` on the calling thread. Under
//! [`Deferred`] it returns a future, so leaves may perform I/O and merged
//! siblings run concurrently. Failure messages always come out in the order the
//! validators were combined, never in completion order.
//!
//! ## Quick Example
//!
//! ```rust
//! use confluence::prelude::*;
//! use confluence::validators::{self, direct};
//!
//! struct Signup {
//!     email: String,
//!     age: u32,
//! }
//!
//! let email = validators::extract(
//!     |s: &Signup| s.email.as_str(),
//!     direct::rule(|e: &str| {
//!         if e.contains('@') {
//!             Outcome::Success
//!         } else {
//!             Outcome::failure("email must contain @")
//!         }
//!     }),
//! );
//! let age = validators::extract(
//!     |s: &Signup| &s.age,
//!     direct::rule(|a: &u32| {
//!         if *a >= 18 {
//!             Outcome::Success
//!         } else {
//!             Outcome::failure("must be 18 or older")
//!         }
//!     }),
//! );
//!
//! // Collect all violations at once
//! let signup = email.merge(age);
//! let outcome = signup
//!     .validate(&Signup { email: "nobody".into(), age: 12 })
//!     .unwrap();
//!
//! match outcome {
//!     Outcome::Success => println!("welcome"),
//!     Outcome::Failure(messages) => {
//!         assert_eq!(messages.len(), 2);
//!         for message in &messages {
//!             println!("{}", message);
//!         }
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod combinators;
pub mod contract;
pub mod error_case;
pub mod executor;
pub mod message;
pub mod monoid;
pub mod nonempty;
pub mod outcome;
pub mod semigroup;
pub mod testing;
#[cfg(feature = "tracing")]
pub mod tracing;
pub mod validator;
pub mod validators;

// Re-exports
pub use contract::{BoxFuture, Contract, Deferred, Direct};
pub use error_case::{ErrorCase, ErrorCases, Fault};
pub use executor::{Executor, Job};
pub use message::{Code, Message, Param, ParamValue};
pub use monoid::Monoid;
pub use nonempty::NonEmptyVec;
pub use outcome::Outcome;
pub use semigroup::Semigroup;
pub use validator::{BoxedValidator, Validator, ValidatorExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::contract::{BoxFuture, Contract, Deferred, Direct};
    pub use crate::error_case::{ErrorCase, ErrorCases, Fault};
    pub use crate::message::{Code, Message, Param};
    pub use crate::monoid::Monoid;
    pub use crate::nonempty::NonEmptyVec;
    pub use crate::outcome::Outcome;
    pub use crate::semigroup::Semigroup;
    pub use crate::validator::{BoxedValidator, Validator, ValidatorExt};
}
