//! Symbol primitive type.
//!
//! Symbols are unique identifiers usable as property keys. Property access
//! through a symbol bypasses the extension machinery entirely and reads the
//! keyed value directly, so they double as a side channel that overlays can
//! never shadow.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for generating unique symbol IDs
static SYMBOL_COUNTER: AtomicU64 = AtomicU64::new(1);

/// A unique, immutable symbol value.
///
/// Each symbol has a process-unique id and an optional description used only
/// for display. Two symbols are equal exactly when they are the same symbol,
/// regardless of description.
#[derive(Debug, Clone)]
pub struct SymbolValue {
    id: u64,
    description: Option<String>,
}

impl SymbolValue {
    /// Create a new unique symbol with an optional description
    pub fn new(description: Option<String>) -> Self {
        let id = SYMBOL_COUNTER.fetch_add(1, Ordering::SeqCst);
        SymbolValue { id, description }
    }

    /// The unique id of this symbol
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The description, if any
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for SymbolValue {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SymbolValue {}

impl std::hash::Hash for SymbolValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for SymbolValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(description) => write!(f, "Symbol({})", description),
            None => write!(f, "Symbol()"),
        }
    }
}
