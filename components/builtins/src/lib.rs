//! Native prototype members for resolved values.
//!
//! This crate provides the built-in methods a chain can reach once its value
//! has resolved: array, string, number and pattern prototypes, plus the
//! string-keyed [`dispatch`] that binds a named member to its receiver.
//! Extension tables and the array helper overlay take precedence over
//! everything here; these members are the fallback before plain property
//! lookup.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod array;
pub mod dispatch;
pub mod number;
pub mod pattern;
pub mod string;

// Re-export main entry points at crate root
pub use array::ArrayPrototype;
pub use dispatch::method_of;
pub use number::NumberPrototype;
pub use pattern::PatternPrototype;
pub use string::StringPrototype;
