//! Testing utilities for validators
//!
//! Assertion macros for [`Outcome`](crate::Outcome) values, plus
//! property-based testing support behind the `proptest` feature.
//!
//! # Examples
//!
//! ```rust
//! use confluence::{assert_failure, assert_messages, assert_success, Outcome};
//!
//! assert_success!(Outcome::Success);
//! assert_failure!(Outcome::failure("blank"));
//! assert_messages!(Outcome::failures(["A", "B"]), ["A", "B"]);
//! ```

/// Assert that an outcome is a success.
///
/// This macro will panic if the outcome is a `Failure`.
///
/// # Example
///
/// ```rust
/// use confluence::{assert_success, Outcome};
///
/// assert_success!(Outcome::Success);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Success => {}
            $crate::Outcome::Failure(messages) => {
                panic!("Expected Success, got Failure: {:?}", messages);
            }
        }
    };
}

/// Assert that an outcome is a failure.
///
/// This macro will panic if the outcome is a `Success`.
///
/// # Example
///
/// ```rust
/// use confluence::{assert_failure, Outcome};
///
/// assert_failure!(Outcome::failure("too short"));
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Failure(_) => {}
            $crate::Outcome::Success => {
                panic!("Expected Failure, got Success");
            }
        }
    };
}

/// Assert that an outcome fails with exactly the given messages, in order.
///
/// Unlike `==` on [`Outcome`](crate::Outcome), message order matters here.
///
/// # Example
///
/// ```rust
/// use confluence::{assert_messages, Outcome};
///
/// let outcome = Outcome::failure("A").concat(Outcome::failure("B"));
/// assert_messages!(outcome, ["A", "B"]);
/// ```
#[macro_export]
macro_rules! assert_messages {
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            $crate::Outcome::Failure(messages) => {
                let expected: ::std::vec::Vec<$crate::message::Message> = $expected
                    .into_iter()
                    .map(::std::convert::Into::into)
                    .collect();
                assert_eq!(messages.as_slice(), expected.as_slice());
            }
            $crate::Outcome::Success => {
                panic!(
                    "Expected Failure with messages {:?}, got Success",
                    $expected
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::message::{Code, Message, Param, ParamValue};
#[cfg(feature = "proptest")]
use crate::outcome::Outcome;

#[cfg(feature = "proptest")]
fn param_value() -> impl Strategy<Value = ParamValue> {
    prop_oneof![
        any::<bool>().prop_map(ParamValue::Bool),
        any::<i64>().prop_map(ParamValue::Int),
        "[a-z]{0,6}".prop_map(ParamValue::Text),
    ]
}

#[cfg(feature = "proptest")]
impl Arbitrary for Message {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        let coded = (
            "[a-z]{1,8}",
            proptest::collection::btree_map("[a-z]{1,4}", param_value(), 0..3),
        )
            .prop_map(|(code, params)| {
                Message::coded(
                    Code::owned(code),
                    params.into_iter().map(|(k, v)| (Param::owned(k), v)),
                )
            });

        prop_oneof!["[A-Za-z ]{1,12}".prop_map(Message::plain), coded].boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for Outcome {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(Outcome::Success),
            proptest::collection::vec(any::<Message>(), 1..4).prop_map(Outcome::failures),
        ]
        .boxed()
    }
}
