//! Validation outcomes
//!
//! [`Outcome`] is the value every validator produces: either `Success`, or a
//! `Failure` carrying one or more [`Message`]s in the order they were produced.
//!
//! `Outcome` is a monoid. [`Outcome::concat`] is the binary operation and
//! `Success` is the identity:
//!
//! | a \ b        | Success      | Failure(bm)       |
//! |--------------|--------------|-------------------|
//! | Success      | Success      | Failure(bm)       |
//! | Failure(am)  | Failure(am)  | Failure(am ++ bm) |
//!
//! # Examples
//!
//! ```
//! use confluence::Outcome;
//!
//! let result = Outcome::concat_many([
//!     Outcome::Success,
//!     Outcome::failure("A"),
//!     Outcome::Success,
//!     Outcome::failure("B"),
//! ]);
//!
//! assert_eq!(result.to_string(), "Failure[A; B]");
//! ```
//!
//! # Equality
//!
//! Two failures are equal when they hold the same number of messages and every
//! message of each one appears somewhere in the other. Message *order* is
//! preserved for display and concatenation but does not take part in equality.
//!
//! ```
//! use confluence::Outcome;
//!
//! assert_eq!(
//!     Outcome::failures(["A", "B"]),
//!     Outcome::failures(["B", "A"]),
//! );
//! assert_ne!(Outcome::failures(["A", "A"]), Outcome::failures(["A", "B"]));
//! ```

use std::fmt;

use crate::message::{Code, Message, Param, ParamValue};
use crate::monoid::{fold_all, Monoid};
use crate::{NonEmptyVec, Semigroup};

/// Outcome of validating one subject.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// No violation was found
    #[default]
    Success,
    /// One or more violations, in production order
    Failure(NonEmptyVec<Message>),
}

impl Outcome {
    /// The identity outcome.
    #[inline]
    pub fn success() -> Self {
        Outcome::Success
    }

    /// A failure holding a single message.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::{message::Message, Outcome};
    ///
    /// let failed = Outcome::failure("must not be blank");
    /// assert_eq!(failed.messages(), &[Message::plain("must not be blank")]);
    /// ```
    #[inline]
    pub fn failure(message: impl Into<Message>) -> Self {
        Outcome::Failure(NonEmptyVec::singleton(message.into()))
    }

    /// A failure holding every message of `messages`, in order.
    ///
    /// An empty iterator yields `Success`, since there is nothing to report.
    pub fn failures<I>(messages: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Message>,
    {
        let messages: Vec<Message> = messages.into_iter().map(Into::into).collect();
        match NonEmptyVec::from_vec(messages) {
            Some(messages) => Outcome::Failure(messages),
            None => Outcome::Success,
        }
    }

    /// A failure holding one coded message built from a parameter map.
    pub fn coded<I, V>(code: Code, params: I) -> Self
    where
        I: IntoIterator<Item = (Param, V)>,
        V: Into<ParamValue>,
    {
        Outcome::failure(Message::coded(code, params))
    }

    /// Check if no violation was found
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Check if at least one violation was found
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Messages in production order; empty for `Success`.
    pub fn messages(&self) -> &[Message] {
        match self {
            Outcome::Success => &[],
            Outcome::Failure(messages) => messages.as_slice(),
        }
    }

    /// Consume the outcome, returning its messages; empty for `Success`.
    pub fn into_messages(self) -> Vec<Message> {
        match self {
            Outcome::Success => Vec::new(),
            Outcome::Failure(messages) => messages.into_vec(),
        }
    }

    /// Convert into a `Result`, so callers can use `?` at a boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::Outcome;
    ///
    /// assert!(Outcome::Success.into_result().is_ok());
    /// assert_eq!(Outcome::failure("x").into_result().unwrap_err().len(), 1);
    /// ```
    pub fn into_result(self) -> Result<(), NonEmptyVec<Message>> {
        match self {
            Outcome::Success => Ok(()),
            Outcome::Failure(messages) => Err(messages),
        }
    }

    /// Combine two outcomes; see the table in the module docs.
    ///
    /// Messages of `self` come before messages of `other`.
    pub fn concat(self, other: Outcome) -> Outcome {
        match (self, other) {
            (Outcome::Success, Outcome::Success) => Outcome::Success,
            (Outcome::Success, failure @ Outcome::Failure(_)) => failure,
            (failure @ Outcome::Failure(_), Outcome::Success) => failure,
            (Outcome::Failure(left), Outcome::Failure(right)) => {
                Outcome::Failure(left.combine(right))
            }
        }
    }

    /// Fold outcomes left to right with [`concat`](Outcome::concat), seeded with `Success`.
    pub fn concat_many<I>(outcomes: I) -> Outcome
    where
        I: IntoIterator<Item = Outcome>,
    {
        fold_all(outcomes)
    }
}

impl Semigroup for Outcome {
    #[inline]
    fn combine(self, other: Self) -> Self {
        self.concat(other)
    }
}

impl Monoid for Outcome {
    fn empty() -> Self {
        Outcome::Success
    }
}

impl FromIterator<Outcome> for Outcome {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        Outcome::concat_many(iter)
    }
}

fn contains_all(haystack: &NonEmptyVec<Message>, needles: &NonEmptyVec<Message>) -> bool {
    needles.iter().all(|needle| haystack.iter().any(|m| m == needle))
}

impl PartialEq for Outcome {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Outcome::Success, Outcome::Success) => true,
            (Outcome::Failure(a), Outcome::Failure(b)) => {
                a.len() == b.len() && contains_all(a, b) && contains_all(b, a)
            }
            _ => false,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => f.write_str("Success"),
            Outcome::Failure(messages) => {
                f.write_str("Failure[")?;
                for (idx, message) in messages.iter().enumerate() {
                    if idx > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{}", message)?;
                }
                f.write_str("]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(outcome: &Outcome) -> Vec<String> {
        outcome.messages().iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_success_is_identity() {
        let failed = Outcome::failure("A");
        assert_eq!(Outcome::Success.concat(failed.clone()), failed);
        assert_eq!(failed.clone().concat(Outcome::Success), failed);
        assert_eq!(Outcome::Success.concat(Outcome::Success), Outcome::Success);
    }

    #[test]
    fn test_concat_preserves_order() {
        let result = Outcome::failures(["A", "B"]).concat(Outcome::failure("C"));
        assert_eq!(texts(&result), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_concat_is_associative() {
        let a = Outcome::failure("A");
        let b = Outcome::Success;
        let c = Outcome::failures(["C1", "C2"]);

        let left = a.clone().concat(b.clone()).concat(c.clone());
        let right = a.concat(b.concat(c));
        assert_eq!(texts(&left), texts(&right));
    }

    #[test]
    fn test_concat_many_empty_is_success() {
        assert!(Outcome::concat_many(Vec::new()).is_success());
    }

    #[test]
    fn test_concat_many_keeps_duplicates() {
        let result = Outcome::concat_many([Outcome::failure("A"), Outcome::failure("A")]);
        assert_eq!(result.messages().len(), 2);
    }

    #[test]
    fn test_collect_into_outcome() {
        let result: Outcome = vec![Outcome::failure("A"), Outcome::Success, Outcome::failure("B")]
            .into_iter()
            .collect();
        assert_eq!(texts(&result), vec!["A", "B"]);
    }

    #[test]
    fn test_failures_from_empty_is_success() {
        let nothing: [&str; 0] = [];
        assert!(Outcome::failures(nothing).is_success());
    }

    #[test]
    fn test_equality_ignores_order() {
        assert_eq!(Outcome::failures(["A", "B"]), Outcome::failures(["B", "A"]));
    }

    #[test]
    fn test_equality_requires_same_count() {
        assert_ne!(Outcome::failures(["A", "A"]), Outcome::failure("A"));
    }

    #[test]
    fn test_equality_is_symmetric_with_duplicates() {
        let aa = Outcome::failures(["A", "A"]);
        let ab = Outcome::failures(["A", "B"]);
        assert_ne!(aa, ab);
        assert_ne!(ab, aa);
    }

    #[test]
    fn test_success_never_equals_failure() {
        assert_ne!(Outcome::Success, Outcome::failure("A"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Outcome::Success.to_string(), "Success");
        assert_eq!(Outcome::failures(["A", "B"]).to_string(), "Failure[A; B]");
    }

    #[test]
    fn test_into_result() {
        assert_eq!(Outcome::Success.into_result(), Ok(()));
        let err = Outcome::failure("A").into_result().unwrap_err();
        assert_eq!(err.head(), &Message::plain("A"));
    }

    #[test]
    fn test_coded_failure() {
        let outcome = Outcome::coded(Code::new("range"), [(Param::new("max"), 10)]);
        assert_eq!(outcome.to_string(), "Failure[range(max=10)]");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let outcome = Outcome::failures(["A", "B"]);
        let json = serde_json::to_string(&outcome).unwrap();
        let back: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(texts(&back), vec!["A", "B"]);
    }
}
