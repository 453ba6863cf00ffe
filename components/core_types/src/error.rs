//! Failure taxonomy for chain evaluation.
//!
//! There are exactly two ways a chain can fail: an invocation landed on a
//! value that is not a function, or something upstream rejected (the
//! originally wrapped computation, a nested array element, or a user
//! callback returning an error). Failures travel unchanged through any
//! number of chain links until they are observed or recovered.

use thiserror::Error;

use crate::value::Value;

/// Result type for chain evaluation
pub type ChainResult<T> = Result<T, ChainError>;

/// A chain evaluation failure.
#[derive(Debug, Clone, Error)]
pub enum ChainError {
    /// An invocation landed on a value that is not a function.
    ///
    /// The message carries the offending value's rendering and kind and the
    /// two usual ways this happens: calling the result of a chain directly,
    /// or calling a helper's result as if it were another callback.
    #[error(
        "You tried to call the non-function \"{rendered}\" ({kind}). \
         This can happen when the result of a chain is invoked directly, \
         or when a helper's result is invoked as if it were another callback."
    )]
    NotCallable {
        /// JSON rendering of the offending value
        rendered: String,
        /// Kind string of the offending value
        kind: &'static str,
    },

    /// An upstream computation or callback rejected with the given reason.
    #[error("{0}")]
    Rejected(Value),
}

impl ChainError {
    /// Build the not-callable failure for an invocation target.
    pub fn not_callable(value: &Value) -> Self {
        let rendered =
            serde_json::to_string(value).unwrap_or_else(|_| value.to_string());
        ChainError::NotCallable {
            rendered,
            kind: value.type_of(),
        }
    }

    /// Build the failure a user callback raises.
    pub fn thrown(reason: impl Into<Value>) -> Self {
        ChainError::Rejected(reason.into())
    }

    /// The reason delivered to a recovery handler.
    ///
    /// Rejections carry their payload verbatim; the not-callable failure
    /// synthesizes an error value whose `message` property is the
    /// diagnostic.
    pub fn reason(&self) -> Value {
        match self {
            ChainError::Rejected(value) => value.clone(),
            ChainError::NotCallable { .. } => {
                Value::error_named("TypeError", self.to_string())
            }
        }
    }
}
