//! Transparent deferred-value chaining.
//!
//! Wrap any value - plain, deferred, or an array with deferred elements
//! nested arbitrarily deep - and navigate it as if it were already
//! resolved. Property lookups, method calls and recovery are all deferred;
//! nothing runs until the chain is driven with
//! [`settle`](Chain::settle) or `.await`.
//!
//! Arrays get asynchronous reimplementations of the iteration helpers
//! (`filter`, `find`, `every`, `some`, `reduce`, `reduceRight`, `forEach`,
//! `findIndex`) whose predicates may return deferred values or be match
//! patterns. Caller-supplied [`Extensions`] can add methods globally, per
//! kind, or override the built-in helpers.
//!
//! # Examples
//!
//! ```
//! use chain::wrap;
//! use core_types::{Pending, Value};
//!
//! // Elements may be deferred; resolution flattens them like a deep all()
//! let chain = wrap(Value::array_from(vec![
//!     Value::from(1),
//!     Value::from(Pending::fulfilled(Value::from(2))),
//!     Value::from(3),
//! ]))
//! .call(
//!     "filter",
//!     vec![Value::function(|_, args| {
//!         Ok(Value::from(args[0].as_number().unwrap_or(0.0) > 1.0))
//!     })],
//! );
//!
//! let kept = async_runtime::block_on(chain.settle()).unwrap();
//! assert_eq!(
//!     kept,
//!     Value::array_from(vec![Value::from(2), Value::from(3)])
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod overlay;
pub mod proxy;
pub mod registry;

pub use proxy::Chain;
pub use registry::{Extensions, OverlayFn};

use core_types::Value;

/// Wrap a value into a chain with no extensions.
pub fn wrap(value: impl Into<Value>) -> Chain {
    Chain::root_node(value.into(), Extensions::default())
}

/// Wrap a value into a chain with caller-supplied extension tables.
pub fn wrap_with(value: impl Into<Value>, extensions: Extensions) -> Chain {
    Chain::root_node(value.into(), extensions)
}
