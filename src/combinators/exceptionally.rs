//! Exceptionally combinator: opt-in fault recovery for one subtree.

use crate::contract::Contract;
use crate::error_case::ErrorCases;
use crate::validator::Validator;

/// Converts faults raised by the wrapped validator into failures.
///
/// Faults are run through an [`ErrorCases`] chain. A fault no case matches keeps
/// propagating, unchanged. Outcomes, successful or failed, pass through untouched.
///
/// # Example
///
/// ```rust
/// use confluence::prelude::*;
/// use confluence::validators::direct;
///
/// let lookup = direct::from_fn(|_: &u32| Err::<Outcome, Fault>("connection reset".into()));
/// let tamed = lookup.exceptionally_with(|fault: &Fault| format!("lookup failed: {}", fault));
///
/// let outcome = tamed.validate(&7).unwrap();
/// assert_eq!(outcome.to_string(), "Failure[lookup failed: connection reset]");
/// ```
pub struct Exceptionally<V, E> {
    validator: V,
    cases: ErrorCases<E>,
}

impl<V, E> Exceptionally<V, E> {
    /// Recover faults from `validator` through `cases`.
    pub fn new(validator: V, cases: ErrorCases<E>) -> Self {
        Self { validator, cases }
    }
}

impl<V, E> std::fmt::Debug for Exceptionally<V, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Exceptionally")
            .field("validator", &"<validator>")
            .field("cases", &self.cases)
            .finish()
    }
}

impl<T, E, C, V> Validator<T, C> for Exceptionally<V, E>
where
    T: ?Sized,
    C: Contract<Fault = E>,
    V: Validator<T, C>,
{
    fn validate<'a>(&'a self, subject: &'a T) -> C::Eval<'a> {
        let cases = &self.cases;
        C::recover(self.validator.validate(subject), move |fault| cases.dispatch(fault))
    }
}
