//! Deferred computations.
//!
//! A [`Pending`] wraps a computation that eventually yields a [`Value`] or a
//! [`ChainError`]. It is lazy (nothing runs until it is driven), memoizing
//! (a settled computation never re-runs) and cloneable (all clones observe
//! the same settlement). The current state is observable without driving it
//! through [`Outcome`].

use std::fmt;
use std::future::Future;

use futures::future::{LocalBoxFuture, Shared};
use futures::FutureExt;

use crate::error::{ChainError, ChainResult};
use crate::value::Value;

type SharedFuture = Shared<LocalBoxFuture<'static, ChainResult<Value>>>;

/// The observable state of a deferred computation.
///
/// Once a computation reports `Fulfilled` or `Failed` it never changes
/// state again. Only the recovery operation on a chain turns `Failed` into
/// a value.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The computation has not settled yet
    Pending,
    /// The computation settled with a value
    Fulfilled(Value),
    /// The computation settled with a failure
    Failed(ChainError),
}

/// A deferred computation yielding a [`Value`].
///
/// # Examples
///
/// ```
/// use core_types::{Outcome, Pending, Value};
///
/// let pending = Pending::fulfilled(Value::from(42));
/// // Nothing has run yet: the computation is driven on demand.
/// assert!(matches!(pending.state(), Outcome::Pending));
///
/// let value = futures::executor::block_on(pending.wait()).unwrap();
/// assert_eq!(value, Value::from(42));
/// assert!(matches!(pending.state(), Outcome::Fulfilled(_)));
/// ```
#[derive(Clone)]
pub struct Pending {
    future: SharedFuture,
}

impl Pending {
    /// Wrap a computation.
    ///
    /// The future is boxed and shared: it runs at most once, on first
    /// demand, and every clone observes the same result.
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = ChainResult<Value>> + 'static,
    {
        Pending {
            future: future.boxed_local().shared(),
        }
    }

    /// A computation that immediately settles with a value
    pub fn fulfilled(value: impl Into<Value>) -> Self {
        let value = value.into();
        Pending::new(async move { Ok(value) })
    }

    /// A computation that immediately settles with a rejection reason
    pub fn rejected(reason: impl Into<Value>) -> Self {
        Pending::failed(ChainError::thrown(reason))
    }

    /// A computation that immediately settles with the given failure
    pub fn failed(error: ChainError) -> Self {
        Pending::new(async move { Err(error) })
    }

    /// Peek at the current state without driving the computation
    pub fn state(&self) -> Outcome {
        match self.future.peek() {
            None => Outcome::Pending,
            Some(Ok(value)) => Outcome::Fulfilled(value.clone()),
            Some(Err(error)) => Outcome::Failed(error.clone()),
        }
    }

    /// Drive the computation to its settlement.
    ///
    /// Subsequent calls return the memoized result.
    pub async fn wait(&self) -> ChainResult<Value> {
        self.future.clone().await
    }
}

impl fmt::Debug for Pending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.future.peek() {
            None => write!(f, "Pending(<unsettled>)"),
            Some(Ok(value)) => write!(f, "Pending(Fulfilled({:?}))", value),
            Some(Err(error)) => write!(f, "Pending(Failed({:?}))", error),
        }
    }
}
