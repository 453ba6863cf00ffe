//! Recursive value resolution.
//!
//! Resolution is what turns a value that may contain deferred computations
//! into one that provably contains none: deferred layers are awaited, and
//! arrays are rebuilt from their concurrently resolved elements, however
//! deeply nested. Everything else passes through untouched.

use core_types::{ChainResult, Value};
use futures::future::{try_join_all, LocalBoxFuture};

/// Await a value until it is no longer a deferred computation.
///
/// This is the shallow half of resolution: nested array elements are left
/// alone. Callback results are settled this way, so a callback returning an
/// array of deferred elements keeps them deferred until the next full
/// resolution point.
pub async fn settle(mut value: Value) -> ChainResult<Value> {
    loop {
        match value {
            Value::Pending(pending) => value = pending.wait().await?,
            other => return Ok(other),
        }
    }
}

/// Fully resolve a value.
///
/// Deferred layers are awaited; if the settled value is an array, every
/// element is resolved recursively, with all elements in flight at once.
/// The first failing element fails the whole resolution. Non-arrays are
/// returned as-is, which also makes resolution idempotent.
///
/// # Examples
///
/// ```
/// use async_runtime::resolver::resolve;
/// use core_types::{Pending, Value};
///
/// let nested = Value::array_from(vec![
///     Value::from("a"),
///     Value::from(Pending::fulfilled(Value::from("b"))),
/// ]);
/// let flat = futures::executor::block_on(resolve(nested)).unwrap();
/// assert_eq!(flat, Value::array_from(vec![Value::from("a"), Value::from("b")]));
/// ```
pub fn resolve(value: Value) -> LocalBoxFuture<'static, ChainResult<Value>> {
    Box::pin(async move {
        let value = settle(value).await?;
        match value {
            Value::Array(data) => {
                let elements = data.borrow().elements.clone();
                let resolved = try_join_all(elements.into_iter().map(resolve)).await?;
                Ok(Value::array_from(resolved))
            }
            other => Ok(other),
        }
    })
}
