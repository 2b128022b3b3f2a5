//! Element-wise combinators over sequence subjects.
//!
//! Both validate slices and the standard collections (`Vec`, `VecDeque`,
//! `LinkedList`, `BTreeSet`, `HashSet`), walking elements in iteration order.
//! To iterate a collection held inside a larger value, combine them with
//! [`Extract`](super::Extract), which is what
//! [`validators::for_each_in`](crate::validators::for_each_in) does.

use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};

use crate::contract::Contract;
use crate::validator::Validator;

/// Validates every element, accumulating failures in element order.
///
/// An empty sequence is a success.
pub struct ForEach<V> {
    validator: V,
}

impl<V> ForEach<V> {
    /// Apply `validator` to each element.
    pub fn new(validator: V) -> Self {
        Self { validator }
    }
}

impl<V> std::fmt::Debug for ForEach<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForEach")
            .field("validator", &"<validator>")
            .finish()
    }
}

/// Validates elements in order and stops at the first failing one.
///
/// Elements after the failing one are never handed to the validator.
pub struct ForEachFailFast<V> {
    validator: V,
}

impl<V> ForEachFailFast<V> {
    /// Apply `validator` to each element until one fails.
    pub fn new(validator: V) -> Self {
        Self { validator }
    }
}

impl<V> std::fmt::Debug for ForEachFailFast<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForEachFailFast")
            .field("validator", &"<validator>")
            .finish()
    }
}

macro_rules! sequence_subject {
    ($($subject:ty),* $(,)?) => {$(
        impl<A, C, V> Validator<$subject, C> for ForEach<V>
        where
            A: Sync,
            C: Contract,
            V: Validator<A, C>,
        {
            fn validate<'a>(&'a self, subject: &'a $subject) -> C::Eval<'a> {
                C::merge_all(subject.iter().map(move |element| self.validator.validate(element)))
            }
        }

        impl<A, C, V> Validator<$subject, C> for ForEachFailFast<V>
        where
            A: Sync,
            C: Contract,
            V: Validator<A, C>,
        {
            fn validate<'a>(&'a self, subject: &'a $subject) -> C::Eval<'a> {
                let validator = &self.validator;
                C::first_failure(subject.iter().map(move |element| validator.validate(element)))
            }
        }
    )*};
}

sequence_subject!([A], Vec<A>, VecDeque<A>, LinkedList<A>, BTreeSet<A>, HashSet<A>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{Deferred, Direct};
    use crate::outcome::Outcome;
    use crate::validators::{deferred, direct};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn odd_fails(seen: Arc<AtomicUsize>) -> impl Validator<i32, Direct> {
        direct::rule(move |n: &i32| {
            seen.fetch_add(1, Ordering::SeqCst);
            if n % 2 == 1 {
                Outcome::failure(format!("odd {}", n))
            } else {
                Outcome::Success
            }
        })
    }

    #[test]
    fn test_empty_sequence_is_success() {
        let seen = Arc::new(AtomicUsize::new(0));
        let each = ForEach::new(odd_fails(seen.clone()));
        let empty: Vec<i32> = Vec::new();
        assert_eq!(each.validate(&empty).unwrap(), Outcome::Success);
        assert_eq!(seen.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_for_each_accumulates_every_element() {
        let seen = Arc::new(AtomicUsize::new(0));
        let each = ForEach::new(odd_fails(seen.clone()));
        let outcome = each.validate(&vec![1, 2, 3]).unwrap();
        assert_eq!(outcome.to_string(), "Failure[odd 1; odd 3]");
        assert_eq!(seen.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_for_each_fail_fast_stops_at_first_failure() {
        let seen = Arc::new(AtomicUsize::new(0));
        let each = ForEachFailFast::new(odd_fails(seen.clone()));
        let outcome = each.validate(&[1, 2, 3][..]).unwrap();
        assert_eq!(outcome, Outcome::failure("odd 1"));
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_for_each_fail_fast_all_passing() {
        let seen = Arc::new(AtomicUsize::new(0));
        let each = ForEachFailFast::new(odd_fails(seen.clone()));
        assert_eq!(each.validate(&vec![2, 4, 6]).unwrap(), Outcome::Success);
        assert_eq!(seen.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_for_each_walks_other_collections() {
        let seen = Arc::new(AtomicUsize::new(0));
        let each = ForEach::new(odd_fails(seen.clone()));

        let ordered: BTreeSet<i32> = [3, 2, 1].into_iter().collect();
        assert_eq!(each.validate(&ordered).unwrap().to_string(), "Failure[odd 1; odd 3]");

        let queue: VecDeque<i32> = VecDeque::from(vec![4, 5]);
        assert_eq!(each.validate(&queue).unwrap(), Outcome::failure("odd 5"));

        let set: HashSet<i32> = [2, 4].into_iter().collect();
        assert_eq!(each.validate(&set).unwrap(), Outcome::Success);
        assert_eq!(seen.load(Ordering::SeqCst), 7);
    }

    #[test]
    fn test_for_each_fail_fast_over_linked_list() {
        let seen = Arc::new(AtomicUsize::new(0));
        let each = ForEachFailFast::new(odd_fails(seen.clone()));
        let list: LinkedList<i32> = [2, 7, 9].into_iter().collect();
        assert_eq!(each.validate(&list).unwrap(), Outcome::failure("odd 7"));
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_deferred_fail_fast_handles_long_sequences() {
        let each = ForEachFailFast::new(deferred::rule(|_: &u32| Outcome::Success));
        let subject = vec![0u32; 200_000];
        let outcome: Result<Outcome, crate::Fault> =
            futures::executor::block_on(Validator::<Vec<u32>, Deferred>::validate(&each, &subject));
        assert_eq!(outcome.unwrap(), Outcome::Success);
    }

    #[test]
    fn test_deferred_for_each_handles_long_sequences() {
        let each = ForEach::new(deferred::rule(|n: &u32| {
            if *n == 1 {
                Outcome::failure("one")
            } else {
                Outcome::Success
            }
        }));
        let mut subject = vec![0u32; 100_000];
        subject[99_999] = 1;
        let outcome = futures::executor::block_on(each.validate(&subject)).unwrap();
        assert_eq!(outcome, Outcome::failure("one"));
    }
}
