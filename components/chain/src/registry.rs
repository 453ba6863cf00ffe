//! Extension tables.
//!
//! A chain consults its registry before anything else when a property is
//! looked up on a resolved value. The registry is built once per root and
//! shared read-only by every descendant node; the precedence between its
//! sections is fixed: global entries beat kind-specific entries, which beat
//! the built-in array helper overlay (pre-seeded into the array section,
//! user entries override), which beats native members, which beat plain
//! properties.

use std::collections::HashMap;
use std::rc::Rc;

use core_types::{ChainResult, Value};

use crate::overlay;

/// An overlay implementation: (resolved receiver, arguments) -> result.
///
/// Overlays may defer by returning a pending value; the chain resolves it
/// at the next resolution point.
pub type OverlayFn = Rc<dyn Fn(Value, Vec<Value>) -> ChainResult<Value>>;

/// Caller-supplied extension configuration.
///
/// # Examples
///
/// ```
/// use chain::Extensions;
/// use core_types::Value;
///
/// let extensions = Extensions::new().global("double", |receiver, _args| {
///     let n = receiver.as_number().unwrap_or(0.0);
///     Ok(Value::from(n * 2.0))
/// });
/// let chain = chain::wrap_with(Value::from(21), extensions);
/// let result = async_runtime::block_on(chain.call("double", vec![]).settle());
/// assert_eq!(result.unwrap(), Value::from(42.0));
/// ```
#[derive(Default, Clone)]
pub struct Extensions {
    global: HashMap<String, OverlayFn>,
    number: HashMap<String, OverlayFn>,
    string: HashMap<String, OverlayFn>,
    array: HashMap<String, OverlayFn>,
}

impl Extensions {
    /// An empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a method that applies to a link regardless of the resolved
    /// value's kind
    pub fn global<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(Value, Vec<Value>) -> ChainResult<Value> + 'static,
    {
        self.global.insert(name.into(), Rc::new(f));
        self
    }

    /// Register a method that applies only when the resolved value is a
    /// number
    pub fn number<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(Value, Vec<Value>) -> ChainResult<Value> + 'static,
    {
        self.number.insert(name.into(), Rc::new(f));
        self
    }

    /// Register a method that applies only when the resolved value is a
    /// string
    pub fn string<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(Value, Vec<Value>) -> ChainResult<Value> + 'static,
    {
        self.string.insert(name.into(), Rc::new(f));
        self
    }

    /// Register a method that applies only when the resolved value is an
    /// array, layered over (and able to override) the built-in helpers
    pub fn array<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(Value, Vec<Value>) -> ChainResult<Value> + 'static,
    {
        self.array.insert(name.into(), Rc::new(f));
        self
    }
}

/// The immutable per-root dispatch table.
pub(crate) struct ExtensionRegistry {
    global: HashMap<String, OverlayFn>,
    number: HashMap<String, OverlayFn>,
    string: HashMap<String, OverlayFn>,
    array: HashMap<String, OverlayFn>,
}

impl ExtensionRegistry {
    /// Build the registry from a configuration, seeding the array section
    /// with the built-in helper overlay.
    pub(crate) fn build(extensions: Extensions) -> Rc<Self> {
        let mut array = overlay::builtin_table();
        array.extend(extensions.array);
        Rc::new(Self {
            global: extensions.global,
            number: extensions.number,
            string: extensions.string,
            array,
        })
    }

    /// Find the overlay answering `name` for the given resolved value, in
    /// precedence order.
    pub(crate) fn lookup(&self, value: &Value, name: &str) -> Option<&OverlayFn> {
        if let Some(f) = self.global.get(name) {
            return Some(f);
        }
        match value {
            Value::Number(_) => self.number.get(name),
            Value::String(_) => self.string.get(name),
            Value::Array(_) => self.array.get(name),
            _ => None,
        }
    }
}
