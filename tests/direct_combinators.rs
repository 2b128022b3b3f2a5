//! Integration tests for the synchronous combinators

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use confluence::prelude::*;
use confluence::validators::{self, direct};
use confluence::{assert_failure, assert_messages, assert_success};

#[derive(Clone, Debug)]
struct Address {
    city: String,
    zip: Option<String>,
}

#[derive(Clone, Debug)]
struct Customer {
    name: String,
    email: Option<String>,
    addresses: Vec<Address>,
}

#[derive(Debug)]
struct TypeX(&'static str);

impl fmt::Display for TypeX {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type x: {}", self.0)
    }
}

impl std::error::Error for TypeX {}

#[derive(Debug)]
struct TypeY(u32);

impl fmt::Display for TypeY {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type y: {}", self.0)
    }
}

impl std::error::Error for TypeY {}

fn always_fail(message: &'static str) -> BoxedValidator<Customer, Direct> {
    direct::rule(move |_: &Customer| Outcome::failure(message)).boxed()
}

fn spy(counter: &Arc<AtomicUsize>) -> BoxedValidator<Customer, Direct> {
    let counter = Arc::clone(counter);
    direct::rule(move |_: &Customer| {
        counter.fetch_add(1, Ordering::SeqCst);
        Outcome::Success
    })
    .boxed()
}

fn not_blank(field: &'static str) -> impl Validator<str, Direct> {
    direct::rule(move |s: &str| {
        if s.trim().is_empty() {
            Outcome::failure(format!("{} must not be blank", field))
        } else {
            Outcome::Success
        }
    })
}

fn customer() -> Customer {
    Customer {
        name: "Ada".to_string(),
        email: Some("ada@example.com".to_string()),
        addresses: vec![
            Address {
                city: "London".to_string(),
                zip: Some("N1".to_string()),
            },
            Address {
                city: "Paris".to_string(),
                zip: None,
            },
        ],
    }
}

#[test]
fn test_merge_reports_every_failure_in_order() {
    let merged = validators::merge(vec![always_fail("A"), always_fail("B")]);
    assert_messages!(merged.validate(&customer()).unwrap(), ["A", "B"]);
}

#[test]
fn test_merge_fail_fast_leaves_spy_untouched() {
    let counter = Arc::new(AtomicUsize::new(0));
    let chain = validators::merge_fail_fast(vec![always_fail("A"), spy(&counter)]);

    assert_messages!(chain.validate(&customer()).unwrap(), ["A"]);
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

#[test]
fn test_nested_fields() {
    let city = validators::extract(|a: &Address| a.city.as_str(), not_blank("city"));
    let zip = validators::if_exists_or_else(
        |a: &Address| a.zip.as_deref(),
        not_blank("zip"),
        Message::code(Code::new("zip.required")),
    );

    let checks = validators::merge(vec![
        validators::extract(|c: &Customer| c.name.as_str(), not_blank("name")).boxed(),
        validators::if_exists(|c: &Customer| c.email.as_deref(), not_blank("email")).boxed(),
        validators::for_each_in(|c: &Customer| c.addresses.as_slice(), city.merge(zip)).boxed(),
    ]);

    let mut subject = customer();
    subject.name = "  ".to_string();
    subject.email = None;

    let outcome = checks.validate(&subject).unwrap();
    assert_messages!(
        outcome,
        vec![
            Message::plain("name must not be blank"),
            Message::code(Code::new("zip.required")),
        ]
    );
}

#[test]
fn test_for_each_versus_fail_fast() {
    let seen = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&seen);
    let rejects_odd = move |n: &i32| {
        counter.fetch_add(1, Ordering::SeqCst);
        if n % 2 != 0 {
            Outcome::failure(format!("element {} is odd", n))
        } else {
            Outcome::Success
        }
    };

    let elements = vec![1, 2, 3];

    let all = validators::for_each(direct::rule(rejects_odd.clone()));
    assert_messages!(
        all.validate(&elements).unwrap(),
        ["element 1 is odd", "element 3 is odd"]
    );
    assert_eq!(seen.load(Ordering::SeqCst), 3);

    seen.store(0, Ordering::SeqCst);
    let first = validators::for_each_fail_fast(direct::rule(rejects_odd));
    assert_messages!(first.validate(&elements).unwrap(), ["element 1 is odd"]);
    assert_eq!(seen.load(Ordering::SeqCst), 1);
}

#[test]
fn test_for_each_on_empty_sequence() {
    let each = validators::for_each(direct::rule(|_: &i32| Outcome::failure("never")));
    assert_success!(each.validate(&Vec::new()).unwrap());
}

#[test]
fn test_exceptionally_dispatches_by_type() {
    let raising = |fault: fn() -> Fault| direct::from_fn(move |_: &Customer| Err(fault()));
    let cases = || {
        ErrorCases::new()
            .case(ErrorCase::of_type(|x: &TypeX| format!("h1 {}", x.0)))
            .case(ErrorCase::otherwise(|f: &Fault| format!("h2 {}", f)))
    };

    let x = raising(|| Box::new(TypeX("bad"))).exceptionally(cases());
    assert_messages!(x.validate(&customer()).unwrap(), ["h1 bad"]);

    let y = raising(|| Box::new(TypeY(4))).exceptionally(cases());
    assert_messages!(y.validate(&customer()).unwrap(), ["h2 type y: 4"]);
}

#[test]
fn test_exceptionally_with_empty_chain_keeps_fault() {
    let raising = direct::from_fn(|_: &Customer| Err::<Outcome, Fault>(Box::new(TypeY(9))));
    let wrapped = validators::exceptionally(raising, ErrorCases::new());

    let fault = wrapped.validate(&customer()).unwrap_err();
    assert_eq!(fault.downcast_ref::<TypeY>().map(|y| y.0), Some(9));
}

#[test]
fn test_fault_aborts_merge_but_recovery_is_local() {
    let counter = Arc::new(AtomicUsize::new(0));
    let raising = || {
        direct::from_fn(|_: &Customer| Err::<Outcome, Fault>(Box::new(TypeX("io")))).boxed()
    };

    let unprotected = validators::merge(vec![raising(), spy(&counter)]);
    assert!(unprotected.validate(&customer()).is_err());

    let protected = validators::merge(vec![
        raising()
            .exceptionally_with(|f: &Fault| format!("recovered: {}", f))
            .boxed(),
        spy(&counter),
    ]);
    let outcome = protected.validate(&customer()).unwrap();
    assert_messages!(outcome, ["recovered: type x: io"]);
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[test]
fn test_neutral_changes_nothing() {
    let base = validators::merge(vec![always_fail("A")]);
    let padded = validators::merge(vec![direct::neutral().boxed(), always_fail("A")]);
    assert_eq!(
        base.validate(&customer()).unwrap(),
        padded.validate(&customer()).unwrap()
    );
    assert_success!(direct::neutral().validate(&customer()).unwrap());
}

#[test]
fn test_chained_methods_build_the_same_tree() {
    let chained = always_fail("A").merge(always_fail("B")).merge_fail_fast(always_fail("C"));
    let outcome = chained.validate(&customer()).unwrap();
    assert_failure!(outcome.clone());
    assert_messages!(outcome, ["A", "B"]);
}

#[test]
fn test_coded_messages_compare_structurally() {
    let range = Code::new("range");
    let built = Message::coded(range.clone(), [(Param::new("min"), 1), (Param::new("max"), 5)]);
    let chained = Message::from(
        confluence::message::CodedMessage::new(range)
            .with_param(Param::new("max"), 5)
            .with_param(Param::new("min"), 1),
    );
    assert_eq!(built, chained);
}
