//! Execution contexts for offloaded validation
//!
//! [`validators::lift_on`](crate::validators::lift_on) moves a direct validator
//! off the task that awaits it, for CPU-bound checks that should not stall a
//! latency-sensitive thread. Where the work runs is decided by an [`Executor`].
//!
//! Implementations are provided for:
//!
//! - any `Fn(Job) + Send + Sync` closure
//! - [`futures::executor::ThreadPool`]
//! - `tokio::runtime::Handle` (feature `async`), via `spawn_blocking`
//!
//! # Example
//!
//! ```rust
//! use confluence::executor::{Executor, Job};
//!
//! // Run every job on a fresh OS thread.
//! let per_thread = |job: Job| {
//!     std::thread::spawn(job);
//! };
//! per_thread.execute(Box::new(|| println!("offloaded")));
//! ```

/// A unit of work handed to an [`Executor`].
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Somewhere to run [`Job`]s.
///
/// An executor must eventually run every job it accepts. Dropping a job without
/// running it makes the task awaiting its result panic.
pub trait Executor: Send + Sync {
    /// Schedule `job`.
    fn execute(&self, job: Job);
}

impl<F> Executor for F
where
    F: Fn(Job) + Send + Sync,
{
    #[inline]
    fn execute(&self, job: Job) {
        self(job)
    }
}

impl Executor for futures::executor::ThreadPool {
    fn execute(&self, job: Job) {
        self.spawn_ok(async move { job() });
    }
}

#[cfg(feature = "async")]
impl Executor for tokio::runtime::Handle {
    fn execute(&self, job: Job) {
        // The join handle is not needed: results travel back over a channel.
        drop(self.spawn_blocking(job));
    }
}
