//! Bridges from the direct contract into the deferred one.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use futures::channel::oneshot;
use futures::future::{self, FutureExt};

use crate::contract::{BoxFuture, Deferred, Direct};
use crate::executor::Executor;
use crate::outcome::Outcome;
use crate::validator::Validator;

/// Runs a direct validator and hands its result back as a resolved future.
///
/// The direct validator runs when `validate` is called, on the calling thread.
/// A fault it raises resolves the future to that same `Err`; it is never turned
/// into a failure.
pub struct Lift<V> {
    validator: V,
}

impl<V> Lift<V> {
    /// Lift `validator` into the deferred contract.
    pub fn new(validator: V) -> Self {
        Self { validator }
    }
}

impl<V> std::fmt::Debug for Lift<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lift")
            .field("validator", &"<validator>")
            .finish()
    }
}

impl<T, E, V> Validator<T, Deferred<E>> for Lift<V>
where
    T: ?Sized,
    E: Send + 'static,
    V: Validator<T, Direct<E>>,
{
    fn validate<'a>(&'a self, subject: &'a T) -> BoxFuture<'a, Result<Outcome, E>> {
        future::ready(self.validator.validate(subject)).boxed()
    }
}

/// Runs a direct validator on an [`Executor`] and awaits its result.
///
/// The subject is cloned into the job, since the job may outlive the borrow the
/// caller handed to `validate`. Nothing runs until the returned future is first
/// polled.
///
/// # Panics
///
/// A panic inside the wrapped validator is resumed in the task awaiting the
/// future. Awaiting also panics if the executor drops the job without running it.
pub struct LiftOn<V, X> {
    validator: Arc<V>,
    executor: Arc<X>,
}

impl<V, X> LiftOn<V, X> {
    /// Lift `validator`, scheduling each run on `executor`.
    pub fn new(validator: V, executor: X) -> Self {
        Self {
            validator: Arc::new(validator),
            executor: Arc::new(executor),
        }
    }

    /// Like [`new`](LiftOn::new), for an executor that is already shared.
    pub fn shared(validator: V, executor: Arc<X>) -> Self {
        Self {
            validator: Arc::new(validator),
            executor,
        }
    }
}

impl<V, X> std::fmt::Debug for LiftOn<V, X> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiftOn")
            .field("validator", &"<validator>")
            .field("executor", &"<executor>")
            .finish()
    }
}

type Reply<E> = std::thread::Result<Result<Outcome, E>>;

impl<T, E, V, X> Validator<T, Deferred<E>> for LiftOn<V, X>
where
    T: Clone + Send + Sync + 'static,
    E: Send + 'static,
    V: Validator<T, Direct<E>> + 'static,
    X: Executor + 'static,
{
    fn validate<'a>(&'a self, subject: &'a T) -> BoxFuture<'a, Result<Outcome, E>> {
        let validator = Arc::clone(&self.validator);
        let executor = Arc::clone(&self.executor);
        let subject = subject.clone();

        async move {
            let (tx, rx) = oneshot::channel::<Reply<E>>();
            executor.execute(Box::new(move || {
                let reply = panic::catch_unwind(AssertUnwindSafe(|| validator.validate(&subject)));
                // The receiver is gone only if the caller stopped waiting.
                let _ = tx.send(reply);
            }));

            match rx.await {
                Ok(Ok(result)) => result,
                Ok(Err(payload)) => panic::resume_unwind(payload),
                Err(oneshot::Canceled) => {
                    panic!("executor dropped a lifted validation job without running it")
                }
            }
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_case::Fault;
    use crate::executor::Job;
    use crate::validators::direct;
    use futures::executor::{block_on, ThreadPool};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_lift_keeps_outcome() {
        let lifted = Lift::new(direct::rule(|n: &i32| {
            if *n > 10 {
                Outcome::failure("too big")
            } else {
                Outcome::Success
            }
        }));
        let outcome: Result<Outcome, Fault> = block_on(lifted.validate(&11));
        assert_eq!(outcome.unwrap(), Outcome::failure("too big"));
    }

    #[test]
    fn test_lift_resolves_to_the_same_fault() {
        let lifted = Lift::new(direct::from_fn(|_: &i32| Err::<Outcome, _>("down")));
        let fault = block_on(lifted.validate(&0)).unwrap_err();
        assert_eq!(fault, "down");
    }

    #[test]
    fn test_lift_on_runs_on_executor() {
        let scheduled = Arc::new(AtomicUsize::new(0));
        let counter = scheduled.clone();
        let counting = move |job: Job| {
            counter.fetch_add(1, Ordering::SeqCst);
            job();
        };

        let lifted = LiftOn::new(direct::rule(|s: &String| Outcome::failure(s.clone())), counting);
        let outcome: Result<Outcome, Fault> = block_on(lifted.validate(&"late".to_string()));

        assert_eq!(outcome.unwrap(), Outcome::failure("late"));
        assert_eq!(scheduled.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_lift_on_thread_pool_returns_fault() {
        let pool = ThreadPool::new().unwrap();
        let lifted = LiftOn::new(direct::from_fn(|_: &u8| Err::<Outcome, _>(7u8)), pool);
        assert_eq!(block_on(lifted.validate(&1)), Err(7));
    }

    #[test]
    #[should_panic(expected = "rule exploded")]
    fn test_lift_on_resumes_panics() {
        let exploding = direct::rule(|_: &i32| -> Outcome { panic!("rule exploded") });
        let lifted = LiftOn::new(exploding, |job: Job| job());
        let _: Result<Outcome, Fault> = block_on(lifted.validate(&0));
    }

    #[test]
    #[should_panic(expected = "without running it")]
    fn test_lift_on_detects_dropped_jobs() {
        let lifted = LiftOn::new(direct::rule(|_: &i32| Outcome::Success), |job: Job| drop(job));
        let _: Result<Outcome, Fault> = block_on(lifted.validate(&0));
    }
}
