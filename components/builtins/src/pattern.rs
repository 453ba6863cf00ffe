//! Pattern (regular expression) operations

use core_types::{PatternData, Value};

/// Pattern methods
pub struct PatternPrototype;

impl PatternPrototype {
    /// `test(value)` - matches against the value's string rendering
    pub fn test(pattern: &PatternData, value: &Value) -> bool {
        pattern.regex.is_match(&value.to_string())
    }
}
