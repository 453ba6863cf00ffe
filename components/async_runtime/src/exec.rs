//! Single-threaded cooperative drivers.
//!
//! All futures in this workspace are `!Send`; the concurrency model is one
//! cooperative scheduler on the calling thread. Driving a chain means
//! handing its future to one of the entry points here.

use std::future::Future;

use futures::executor::LocalPool;

/// Run a future to completion on the current thread.
///
/// This is the usual way to drive a chain from synchronous code.
pub fn block_on<F: Future>(future: F) -> F::Output {
    futures::executor::block_on(future)
}

/// A reusable single-threaded driver.
///
/// Wraps a local task pool; successive [`run_until`](Driver::run_until)
/// calls reuse the same pool, so interleaved cooperative work scheduled by
/// one call is still drained by the next.
#[derive(Default)]
pub struct Driver {
    pool: LocalPool,
}

impl Driver {
    /// Creates a new driver with an empty pool.
    pub fn new() -> Self {
        Self {
            pool: LocalPool::new(),
        }
    }

    /// Runs the given future to completion, cooperatively interleaving any
    /// other work the pool holds.
    pub fn run_until<F: Future>(&mut self, future: F) -> F::Output {
        self.pool.run_until(future)
    }
}
