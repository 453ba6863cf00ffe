//! Array prototype methods

use core_types::{ChainError, ChainResult, Value};

fn type_error(message: &str) -> ChainError {
    ChainError::thrown(Value::error_named("TypeError", message))
}

/// Array prototype methods
pub struct ArrayPrototype;

impl ArrayPrototype {
    /// `map(callback, thisArg?)`
    ///
    /// Calls the callback synchronously per element and collects the
    /// results, deferred or not, into a fresh array. A callback error
    /// aborts the remaining elements.
    pub fn map(arr: &Value, callback: &Value, this_arg: Option<Value>) -> ChainResult<Value> {
        let elements = arr
            .as_elements()
            .ok_or_else(|| type_error("map called on non-array"))?;
        let this = this_arg.unwrap_or(Value::Undefined);
        let mut mapped = Vec::with_capacity(elements.len());
        for (index, element) in elements.into_iter().enumerate() {
            let result = callback.call(
                this.clone(),
                vec![element, Value::Number(index as f64), arr.clone()],
            )?;
            mapped.push(result);
        }
        Ok(Value::array_from(mapped))
    }

    /// `join(separator?)` - elements rendered with undefined and null as
    /// empty strings
    pub fn join(arr: &Value, separator: &str) -> ChainResult<Value> {
        let elements = arr
            .as_elements()
            .ok_or_else(|| type_error("join called on non-array"))?;
        let parts: Vec<String> = elements
            .iter()
            .map(|el| match el {
                Value::Undefined | Value::Null => String::new(),
                other => other.to_string(),
            })
            .collect();
        Ok(Value::string(parts.join(separator)))
    }

    /// `slice(start?, end?)` with negative index handling
    pub fn slice(arr: &Value, start: i32, end: Option<i32>) -> ChainResult<Value> {
        let elements = arr
            .as_elements()
            .ok_or_else(|| type_error("slice called on non-array"))?;
        let len = elements.len() as i32;

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

        let sliced: Vec<Value> = if start_idx < end_idx {
            elements[start_idx..end_idx].to_vec()
        } else {
            Vec::new()
        };

        Ok(Value::array_from(sliced))
    }

    /// `concat(...items)` - array arguments are flattened one level
    pub fn concat(arr: &Value, items: Vec<Value>) -> ChainResult<Value> {
        let mut combined = arr
            .as_elements()
            .ok_or_else(|| type_error("concat called on non-array"))?;
        for item in items {
            match item {
                Value::Array(data) => combined.extend(data.borrow().elements.iter().cloned()),
                other => combined.push(other),
            }
        }
        Ok(Value::array_from(combined))
    }

    /// `includes(value)`
    pub fn includes(arr: &Value, value: &Value) -> ChainResult<Value> {
        let elements = arr
            .as_elements()
            .ok_or_else(|| type_error("includes called on non-array"))?;
        Ok(Value::boolean(elements.iter().any(|el| el == value)))
    }

    /// `indexOf(value)` - -1 when absent
    pub fn index_of(arr: &Value, value: &Value) -> ChainResult<Value> {
        let elements = arr
            .as_elements()
            .ok_or_else(|| type_error("indexOf called on non-array"))?;
        let index = elements
            .iter()
            .position(|el| el == value)
            .map(|i| i as f64)
            .unwrap_or(-1.0);
        Ok(Value::Number(index))
    }

    /// `push(...items)` - returns the new length
    pub fn push(arr: &Value, items: Vec<Value>) -> ChainResult<Value> {
        if let Value::Array(data) = arr {
            let mut data = data.borrow_mut();
            data.elements.extend(items);
            Ok(Value::Number(data.elements.len() as f64))
        } else {
            Err(type_error("push called on non-array"))
        }
    }

    /// `pop()` - undefined on an empty array
    pub fn pop(arr: &Value) -> ChainResult<Value> {
        if let Value::Array(data) = arr {
            let mut data = data.borrow_mut();
            Ok(data.elements.pop().unwrap_or(Value::Undefined))
        } else {
            Err(type_error("pop called on non-array"))
        }
    }

    /// `reverse()` - reverses in place and returns the receiver
    pub fn reverse(arr: &Value) -> ChainResult<Value> {
        if let Value::Array(data) = arr {
            data.borrow_mut().elements.reverse();
            Ok(arr.clone())
        } else {
            Err(type_error("reverse called on non-array"))
        }
    }
}
