//! String prototype methods

use core_types::{ChainError, ChainResult, Value};

/// String prototype methods
pub struct StringPrototype;

impl StringPrototype {
    /// `split(separator?)`
    ///
    /// An empty separator splits into individual characters; a missing one
    /// yields the whole string as a single element.
    pub fn split(s: &str, separator: Option<&str>) -> Value {
        let parts: Vec<Value> = match separator {
            None => vec![Value::string(s)],
            Some("") => s.chars().map(|c| Value::string(c.to_string())).collect(),
            Some(sep) => s.split(sep).map(Value::string).collect(),
        };
        Value::array_from(parts)
    }

    /// `slice(start?, end?)` with negative index handling, char-based
    pub fn slice(s: &str, start: i32, end: Option<i32>) -> Value {
        let len = s.chars().count() as i32;

        let start_idx = if start < 0 {
            (len + start).max(0) as usize
        } else {
            start.min(len) as usize
        };

        let end_idx = match end {
            Some(e) if e < 0 => (len + e).max(0) as usize,
            Some(e) => e.min(len) as usize,
            None => len as usize,
        };

        if start_idx >= end_idx {
            Value::string("")
        } else {
            Value::string(
                s.chars()
                    .skip(start_idx)
                    .take(end_idx - start_idx)
                    .collect::<String>(),
            )
        }
    }

    /// `trim()`
    pub fn trim(s: &str) -> Value {
        Value::string(s.trim())
    }

    /// `toUpperCase()`
    pub fn to_upper_case(s: &str) -> Value {
        Value::string(s.to_uppercase())
    }

    /// `toLowerCase()`
    pub fn to_lower_case(s: &str) -> Value {
        Value::string(s.to_lowercase())
    }

    /// `includes(search)`
    pub fn includes(s: &str, search: &str) -> Value {
        Value::boolean(s.contains(search))
    }

    /// `startsWith(search)`
    pub fn starts_with(s: &str, search: &str) -> Value {
        Value::boolean(s.starts_with(search))
    }

    /// `endsWith(search)`
    pub fn ends_with(s: &str, search: &str) -> Value {
        Value::boolean(s.ends_with(search))
    }

    /// `charAt(index?)` - empty string when out of range
    pub fn char_at(s: &str, index: usize) -> Value {
        Value::string(
            s.chars()
                .nth(index)
                .map(|c| c.to_string())
                .unwrap_or_default(),
        )
    }

    /// `repeat(count)` - fails on a negative count
    pub fn repeat(s: &str, count: f64) -> ChainResult<Value> {
        if count < 0.0 || !count.is_finite() {
            return Err(ChainError::thrown(Value::error_named(
                "RangeError",
                "Invalid count value",
            )));
        }
        Ok(Value::string(s.repeat(count as usize)))
    }
}
