//! Resolution machinery for deferred values.
//!
//! This crate owns the two halves of making a deferred value real:
//! - [`resolver`] - shallow settling and fully recursive resolution of
//!   nested array elements, all elements in flight at once
//! - [`exec`] - the single-threaded cooperative drivers that actually run
//!   a deferred computation
//!
//! # Examples
//!
//! ```
//! use async_runtime::{exec, resolver};
//! use core_types::{Pending, Value};
//!
//! let value = Value::array_from(vec![
//!     Value::from(Pending::fulfilled(Value::from(1))),
//!     Value::from(2),
//! ]);
//! let resolved = exec::block_on(resolver::resolve(value)).unwrap();
//! assert_eq!(
//!     resolved,
//!     Value::array_from(vec![Value::from(1), Value::from(2)])
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod exec;
pub mod resolver;

// Re-export main entry points at crate root
pub use exec::{block_on, Driver};
pub use resolver::{resolve, settle};
