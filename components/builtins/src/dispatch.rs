//! String-keyed member lookup.
//!
//! `method_of` is what a chain consults after the extension tables have had
//! their chance: given a resolved value and a member name, it returns the
//! named prototype method bound to that receiver, or `None` so that lookup
//! can fall through to plain property access. Bound methods ignore the
//! receiver argument they are later invoked with; binding already fixed it.

use core_types::{ChainResult, Value};

use crate::array::ArrayPrototype;
use crate::number::NumberPrototype;
use crate::pattern::PatternPrototype;
use crate::string::StringPrototype;

fn arg(args: &[Value], index: usize) -> Value {
    args.get(index).cloned().unwrap_or(Value::Undefined)
}

fn arg_number(args: &[Value], index: usize) -> Option<f64> {
    args.get(index).and_then(Value::as_number)
}

fn arg_i32(args: &[Value], index: usize) -> Option<i32> {
    arg_number(args, index).map(|n| n as i32)
}

/// A separator-style argument: absent and undefined count as missing,
/// anything else is rendered to its string form.
fn arg_string(args: &[Value], index: usize) -> Option<String> {
    match args.get(index) {
        None | Some(Value::Undefined) => None,
        Some(value) => Some(value.to_string()),
    }
}

fn bound<F>(f: F) -> Value
where
    F: Fn(Vec<Value>) -> ChainResult<Value> + 'static,
{
    Value::function(move |_this, args| f(args))
}

/// Look up a callable member of a resolved value, bound to its receiver.
pub fn method_of(value: &Value, name: &str) -> Option<Value> {
    match value {
        Value::Array(_) => array_method(value, name),
        Value::String(s) => string_method(s.clone(), name),
        Value::Number(n) => number_method(*n, name),
        Value::Pattern(_) => pattern_method(value, name),
        _ => None,
    }
}

fn array_method(value: &Value, name: &str) -> Option<Value> {
    let recv = value.clone();
    match name {
        "map" => Some(bound(move |args| {
            ArrayPrototype::map(&recv, &arg(&args, 0), args.get(1).cloned())
        })),
        "join" => Some(bound(move |args| {
            let separator = arg_string(&args, 0).unwrap_or_else(|| ",".to_string());
            ArrayPrototype::join(&recv, &separator)
        })),
        "slice" => Some(bound(move |args| {
            ArrayPrototype::slice(&recv, arg_i32(&args, 0).unwrap_or(0), arg_i32(&args, 1))
        })),
        "concat" => Some(bound(move |args| ArrayPrototype::concat(&recv, args))),
        "includes" => Some(bound(move |args| {
            ArrayPrototype::includes(&recv, &arg(&args, 0))
        })),
        "indexOf" => Some(bound(move |args| {
            ArrayPrototype::index_of(&recv, &arg(&args, 0))
        })),
        "push" => Some(bound(move |args| ArrayPrototype::push(&recv, args))),
        "pop" => Some(bound(move |_args| ArrayPrototype::pop(&recv))),
        "reverse" => Some(bound(move |_args| ArrayPrototype::reverse(&recv))),
        _ => None,
    }
}

fn string_method(s: String, name: &str) -> Option<Value> {
    match name {
        "split" => Some(bound(move |args| {
            Ok(StringPrototype::split(&s, arg_string(&args, 0).as_deref()))
        })),
        "slice" => Some(bound(move |args| {
            Ok(StringPrototype::slice(
                &s,
                arg_i32(&args, 0).unwrap_or(0),
                arg_i32(&args, 1),
            ))
        })),
        "trim" => Some(bound(move |_args| Ok(StringPrototype::trim(&s)))),
        "toUpperCase" => Some(bound(move |_args| Ok(StringPrototype::to_upper_case(&s)))),
        "toLowerCase" => Some(bound(move |_args| Ok(StringPrototype::to_lower_case(&s)))),
        "includes" => Some(bound(move |args| {
            Ok(StringPrototype::includes(&s, &arg(&args, 0).to_string()))
        })),
        "startsWith" => Some(bound(move |args| {
            Ok(StringPrototype::starts_with(&s, &arg(&args, 0).to_string()))
        })),
        "endsWith" => Some(bound(move |args| {
            Ok(StringPrototype::ends_with(&s, &arg(&args, 0).to_string()))
        })),
        "charAt" => Some(bound(move |args| {
            let index = arg_number(&args, 0).unwrap_or(0.0).max(0.0) as usize;
            Ok(StringPrototype::char_at(&s, index))
        })),
        "repeat" => Some(bound(move |args| {
            StringPrototype::repeat(&s, arg_number(&args, 0).unwrap_or(0.0))
        })),
        _ => None,
    }
}

fn number_method(n: f64, name: &str) -> Option<Value> {
    match name {
        "toFixed" => Some(bound(move |args| {
            NumberPrototype::to_fixed(n, arg_number(&args, 0).unwrap_or(0.0))
        })),
        "toString" => Some(bound(move |args| {
            NumberPrototype::to_string(n, arg_number(&args, 0).map(|r| r as u32))
        })),
        _ => None,
    }
}

fn pattern_method(value: &Value, name: &str) -> Option<Value> {
    let recv = value.clone();
    match name {
        "test" => Some(bound(move |args| {
            if let Value::Pattern(data) = &recv {
                Ok(Value::boolean(PatternPrototype::test(data, &arg(&args, 0))))
            } else {
                Ok(Value::Boolean(false))
            }
        })),
        _ => None,
    }
}
