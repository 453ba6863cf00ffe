//! Chain nodes.
//!
//! A [`Chain`] is an immutable triple of a deferred computation, a shared
//! extension registry and a root flag. Navigation (`property`, `invoke`,
//! `catch`) never mutates a node and never runs anything; each step wraps a
//! new deferred computation around the previous one. Work happens only when
//! the chain is driven through [`settle`](Chain::settle) or `.await`.

use std::fmt;
use std::future::IntoFuture;
use std::rc::Rc;

use async_runtime::resolver::resolve;
use builtins::method_of;
use core_types::{ChainError, ChainResult, Outcome, Pending, SymbolValue, Value};
use futures::future::LocalBoxFuture;

use crate::registry::{ExtensionRegistry, Extensions};

/// A handle onto a not-yet-resolved value.
///
/// Every navigation produces a fresh non-root node; only the initial wrap
/// and the result of a recovery are roots. Root nodes expose property
/// access but cannot be invoked.
#[derive(Clone)]
pub struct Chain {
    pending: Pending,
    registry: Rc<ExtensionRegistry>,
    root: bool,
}

/// Resolve a value and answer a property lookup on it, in precedence
/// order: extension tables, then native members, then plain properties.
/// Table hits come back as functions bound to the resolved receiver.
fn lookup(registry: &ExtensionRegistry, value: &Value, name: &str) -> Value {
    if let Some(overlay) = registry.lookup(value, name) {
        let overlay = overlay.clone();
        let receiver = value.clone();
        return Value::function(move |_this, args| overlay(receiver.clone(), args));
    }
    if let Some(member) = method_of(value, name) {
        return member;
    }
    value.get_property(name)
}

impl Chain {
    /// Create a root node over a value with the given extension tables.
    pub(crate) fn root_node(value: Value, extensions: Extensions) -> Self {
        Chain {
            pending: Pending::fulfilled(value),
            registry: ExtensionRegistry::build(extensions),
            root: true,
        }
    }

    fn derived(&self, pending: Pending, root: bool) -> Chain {
        Chain {
            pending,
            registry: self.registry.clone(),
            root,
        }
    }

    /// Whether this node is a root (initial wrap or recovery result).
    pub fn is_root(&self) -> bool {
        self.root
    }

    /// Peek at this link's own computation state without driving it.
    pub fn state(&self) -> Outcome {
        self.pending.state()
    }

    /// Defer a property lookup.
    ///
    /// When driven, the underlying value is fully resolved first, then the
    /// name is dispatched through the registry, the native members and
    /// finally plain property access.
    pub fn property(&self, name: impl Into<String>) -> Chain {
        let name = name.into();
        let parent = self.pending.clone();
        let registry = self.registry.clone();
        self.derived(
            Pending::new(async move {
                let value = resolve(Value::Pending(parent)).await?;
                Ok(lookup(&registry, &value, &name))
            }),
            false,
        )
    }

    /// Defer a symbol-keyed property lookup.
    ///
    /// Symbol keys bypass the registry and the native members entirely and
    /// read the resolved value's symbol table directly.
    pub fn property_symbol(&self, key: &SymbolValue) -> Chain {
        let key = key.clone();
        let parent = self.pending.clone();
        self.derived(
            Pending::new(async move {
                let value = resolve(Value::Pending(parent)).await?;
                Ok(value.get_symbol_property(&key))
            }),
            false,
        )
    }

    /// Numeric sugar over [`property`](Chain::property).
    pub fn index(&self, index: usize) -> Chain {
        self.property(index.to_string())
    }

    /// Defer an invocation of the underlying value.
    ///
    /// When driven, the value is resolved and called with the receiver
    /// unset. Non-functions, and root nodes regardless of their value,
    /// fail asynchronously with the not-callable diagnostic; nothing here
    /// panics or fails synchronously.
    pub fn invoke(&self, args: Vec<Value>) -> Chain {
        let parent = self.pending.clone();
        let root = self.root;
        self.derived(
            Pending::new(async move {
                let value = resolve(Value::Pending(parent)).await?;
                if root {
                    return Err(ChainError::not_callable(&value));
                }
                value.call(Value::Undefined, args)
            }),
            false,
        )
    }

    /// Sugar for `property(name).invoke(args)`: a deferred method call.
    pub fn call(&self, name: impl Into<String>, args: Vec<Value>) -> Chain {
        self.property(name).invoke(args)
    }

    /// Defer a recovery.
    ///
    /// On failure anywhere upstream the handler receives the failure
    /// reason and its result becomes the chain's new value; the node it
    /// comes back on is a root, so navigation continues transparently
    /// after recovery. On success the value passes through untouched. A
    /// handler error becomes the new upstream failure.
    pub fn catch<F>(&self, handler: F) -> Chain
    where
        F: FnOnce(Value) -> ChainResult<Value> + 'static,
    {
        let parent = self.pending.clone();
        self.derived(
            Pending::new(async move {
                match resolve(Value::Pending(parent)).await {
                    Ok(value) => Ok(value),
                    Err(error) => handler(error.reason()),
                }
            }),
            true,
        )
    }

    /// Drive the whole chain and fully resolve its result.
    pub async fn settle(&self) -> ChainResult<Value> {
        resolve(Value::Pending(self.pending.clone())).await
    }
}

impl IntoFuture for Chain {
    type Output = ChainResult<Value>;
    type IntoFuture = LocalBoxFuture<'static, ChainResult<Value>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move { self.settle().await })
    }
}

impl IntoFuture for &Chain {
    type Output = ChainResult<Value>;
    type IntoFuture = LocalBoxFuture<'static, ChainResult<Value>>;

    fn into_future(self) -> Self::IntoFuture {
        let chain = self.clone();
        Box::pin(async move { chain.settle().await })
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("root", &self.root)
            .field("state", &self.pending.state())
            .finish()
    }
}
