//! Core types for the eventual runtime.
//!
//! This crate provides the data model every other component builds on:
//! - [`Value`] - the dynamic value vocabulary, with reference-counted
//!   aggregates and an embedded deferred-computation variant
//! - [`Pending`] - a lazy, memoizing, cloneable deferred computation
//! - [`Outcome`] - the explicit pending / fulfilled / failed state sum
//! - [`ChainError`] - the two-variant failure taxonomy
//! - [`SymbolValue`] - unique symbols for side-channel property keys
//!
//! # Examples
//!
//! ```
//! use core_types::{Pending, Value};
//!
//! let nested = Value::array_from(vec![
//!     Value::from("a"),
//!     Value::from(Pending::fulfilled(Value::from("b"))),
//! ]);
//! assert!(nested.is_truthy());
//! assert_eq!(nested.type_of(), "object");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod pending;
pub mod symbol;
pub mod value;

// Re-export main types at crate root
pub use error::{ChainError, ChainResult};
pub use pending::{Outcome, Pending};
pub use symbol::SymbolValue;
pub use value::{ArrayData, ErrorData, FunctionData, ObjectData, PatternData, Value};
