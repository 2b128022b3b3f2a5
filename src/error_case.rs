//! Converting faults into failures
//!
//! A validator can fail in two ways. A rule violation is data: an
//! [`Outcome::Failure`]. A *fault* is an unexpected error raised while running the
//! rule (a lookup that timed out, a parser that hit malformed input) and travels as
//! the `Err` side of a `Result`.
//!
//! An [`ErrorCase`] is a partial function from a fault to a failure message. An
//! [`ErrorCases`] chain is tried in order: the first case that matches produces the
//! outcome, and a fault no case matches is handed back unchanged, with its concrete
//! type intact, so an outer handler can still inspect it.
//!
//! Order cases from most specific to least specific. A catch-all placed first
//! shadows every case after it.
//!
//! # Examples
//!
//! ```
//! use std::fmt;
//! use confluence::error_case::{ErrorCase, ErrorCases, Fault};
//!
//! #[derive(Debug)]
//! struct Timeout;
//!
//! impl fmt::Display for Timeout {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         f.write_str("timed out")
//!     }
//! }
//!
//! impl std::error::Error for Timeout {}
//!
//! let cases = ErrorCases::new()
//!     .case(ErrorCase::of_type(|_: &Timeout| "service unavailable"))
//!     .case(ErrorCase::otherwise(|fault: &Fault| format!("unexpected: {}", fault)));
//!
//! let outcome = cases.dispatch(Box::new(Timeout)).unwrap();
//! assert_eq!(outcome.to_string(), "Failure[service unavailable]");
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::message::Message;
use crate::outcome::Outcome;

/// Default fault type: any boxed error.
///
/// The concrete error can be recovered with `downcast_ref`, which is what
/// [`ErrorCase::of_type`] matches on.
pub type Fault = Box<dyn StdError + Send + Sync + 'static>;

type PartialHandler<E> = Box<dyn Fn(&E) -> Option<Message> + Send + Sync>;

/// One predicate/handler rule turning a fault into a failure.
pub struct ErrorCase<E = Fault> {
    handler: PartialHandler<E>,
}

impl<E> ErrorCase<E> {
    /// Match faults accepted by `predicate`, describing them with `provider`.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::error_case::ErrorCase;
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum LookupError {
    ///     NotFound,
    ///     Unavailable,
    /// }
    ///
    /// let case = ErrorCase::when(
    ///     |e: &LookupError| *e == LookupError::NotFound,
    ///     |_| "no such account",
    /// );
    /// assert!(case.apply(&LookupError::NotFound).is_some());
    /// assert!(case.apply(&LookupError::Unavailable).is_none());
    /// ```
    pub fn when<P, H, M>(predicate: P, provider: H) -> Self
    where
        P: Fn(&E) -> bool + Send + Sync + 'static,
        H: Fn(&E) -> M + Send + Sync + 'static,
        M: Into<Message>,
    {
        ErrorCase {
            handler: Box::new(move |fault| {
                if predicate(fault) {
                    Some(provider(fault).into())
                } else {
                    None
                }
            }),
        }
    }

    /// Match every fault.
    pub fn otherwise<H, M>(provider: H) -> Self
    where
        H: Fn(&E) -> M + Send + Sync + 'static,
        M: Into<Message>,
    {
        ErrorCase {
            handler: Box::new(move |fault| Some(provider(fault).into())),
        }
    }

    /// Whether this case accepts `fault`.
    pub fn matches(&self, fault: &E) -> bool {
        (self.handler)(fault).is_some()
    }

    /// The failure this case produces for `fault`, or `None` when it does not match.
    pub fn apply(&self, fault: &E) -> Option<Outcome> {
        (self.handler)(fault).map(Outcome::failure)
    }
}

impl ErrorCase<Fault> {
    /// Match boxed faults whose concrete type is `X`.
    pub fn of_type<X, H, M>(provider: H) -> Self
    where
        X: StdError + 'static,
        H: Fn(&X) -> M + Send + Sync + 'static,
        M: Into<Message>,
    {
        ErrorCase {
            handler: Box::new(move |fault: &Fault| {
                fault.downcast_ref::<X>().map(|x| provider(x).into())
            }),
        }
    }
}

impl<E> fmt::Debug for ErrorCase<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorCase")
            .field("handler", &"<partial function>")
            .finish()
    }
}

/// Ordered chain of [`ErrorCase`]s; first match wins.
pub struct ErrorCases<E = Fault> {
    cases: Vec<ErrorCase<E>>,
}

impl<E> ErrorCases<E> {
    /// An empty chain. Dispatching through it hands every fault back.
    pub fn new() -> Self {
        ErrorCases { cases: Vec::new() }
    }

    /// Append a case after the existing ones.
    pub fn case(mut self, case: ErrorCase<E>) -> Self {
        self.cases.push(case);
        self
    }

    /// Number of cases in the chain.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether the chain has no cases.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Convert `fault` with the first matching case.
    ///
    /// # Errors
    ///
    /// Returns the original `fault`, untouched, when no case matches.
    pub fn dispatch(&self, fault: E) -> Result<Outcome, E> {
        dispatch(&self.cases, fault)
    }
}

impl<E> Default for ErrorCases<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> From<Vec<ErrorCase<E>>> for ErrorCases<E> {
    fn from(cases: Vec<ErrorCase<E>>) -> Self {
        ErrorCases { cases }
    }
}

impl<E> From<ErrorCase<E>> for ErrorCases<E> {
    fn from(case: ErrorCase<E>) -> Self {
        ErrorCases { cases: vec![case] }
    }
}

impl<E> FromIterator<ErrorCase<E>> for ErrorCases<E> {
    fn from_iter<I: IntoIterator<Item = ErrorCase<E>>>(iter: I) -> Self {
        ErrorCases {
            cases: iter.into_iter().collect(),
        }
    }
}

impl<E> fmt::Debug for ErrorCases<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorCases")
            .field("cases", &self.cases.len())
            .finish()
    }
}

/// Run `fault` through `cases` in order.
///
/// # Errors
///
/// Returns the original `fault` when no case matches.
pub fn dispatch<E>(cases: &[ErrorCase<E>], fault: E) -> Result<Outcome, E> {
    for case in cases {
        if let Some(outcome) = case.apply(&fault) {
            return Ok(outcome);
        }
    }
    Err(fault)
}
