//! Dynamic value representation shared by every component.
//!
//! `Value` is the vocabulary the whole workspace speaks: plain scalars,
//! reference-counted aggregates, compiled match patterns, callable functions,
//! and not-yet-settled computations. Aggregates use `Rc<RefCell<...>>`, so
//! cloning a `Value` aliases the same storage and in-place mutation through
//! one handle is observable through every other handle.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use num_bigint::BigInt;
use num_traits::Zero;
use regex::Regex;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::error::{ChainError, ChainResult};
use crate::pending::Pending;
use crate::symbol::SymbolValue;

/// Internal array data
#[derive(Debug, Clone)]
pub struct ArrayData {
    /// Array elements, possibly containing pending computations
    pub elements: Vec<Value>,
}

/// Internal object data
#[derive(Debug, Clone)]
pub struct ObjectData {
    /// String-keyed properties
    pub properties: HashMap<String, Value>,
    /// Symbol-keyed properties, stored in a side table by symbol id
    pub symbol_properties: HashMap<u64, Value>,
}

/// Internal error-value data
#[derive(Debug, Clone)]
pub struct ErrorData {
    /// Error name, e.g. "Error" or "TypeError"
    pub name: String,
    /// Human-readable message
    pub message: String,
}

/// A compiled match pattern usable as a predicate
#[derive(Debug)]
pub struct PatternData {
    /// The original pattern text
    pub source: String,
    /// The compiled expression
    pub regex: Regex,
}

/// Internal function data
pub struct FunctionData {
    /// The function implementation: (receiver, arguments) -> result
    pub func: Box<dyn Fn(Value, Vec<Value>) -> ChainResult<Value>>,
}

impl fmt::Debug for FunctionData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionData").finish()
    }
}

/// A dynamic value.
///
/// Scalars are stored inline; aggregates are reference-counted so that
/// cloning aliases rather than copies. The `Pending` variant embeds a
/// deferred computation, which is what lets arrays carry not-yet-settled
/// elements until the resolver flattens them.
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// let n = Value::number(42.0);
/// assert!(n.is_truthy());
/// assert_eq!(n.type_of(), "number");
/// assert_eq!(n.to_string(), "42");
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// The undefined value, also the result of absent property lookups
    Undefined,
    /// The null value
    Null,
    /// Boolean value
    Boolean(bool),
    /// Number (IEEE 754 double)
    Number(f64),
    /// Arbitrary precision integer
    BigInt(BigInt),
    /// String value
    String(String),
    /// Symbol value
    Symbol(SymbolValue),
    /// Array of values, possibly containing pending elements
    Array(Rc<RefCell<ArrayData>>),
    /// Object with string- and symbol-keyed properties
    Object(Rc<RefCell<ObjectData>>),
    /// Error value carrying a name and a message
    Error(Rc<RefCell<ErrorData>>),
    /// Compiled match pattern
    Pattern(Rc<PatternData>),
    /// Callable function
    Function(Rc<FunctionData>),
    /// A deferred computation that settles to another value
    Pending(Pending),
}

impl Value {
    /// Create the undefined value
    pub fn undefined() -> Self {
        Value::Undefined
    }

    /// Create the null value
    pub fn null() -> Self {
        Value::Null
    }

    /// Create a boolean value
    pub fn boolean(v: bool) -> Self {
        Value::Boolean(v)
    }

    /// Create a number value
    pub fn number(v: f64) -> Self {
        Value::Number(v)
    }

    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Create a big integer value
    pub fn bigint(v: BigInt) -> Self {
        Value::BigInt(v)
    }

    /// Create a fresh symbol value with the given description
    pub fn symbol(description: impl Into<String>) -> Self {
        Value::Symbol(SymbolValue::new(Some(description.into())))
    }

    /// Create an empty array
    pub fn array() -> Self {
        Value::Array(Rc::new(RefCell::new(ArrayData {
            elements: Vec::new(),
        })))
    }

    /// Create an array from values
    pub fn array_from(values: Vec<Value>) -> Self {
        Value::Array(Rc::new(RefCell::new(ArrayData { elements: values })))
    }

    /// Create an empty object
    pub fn object() -> Self {
        Value::Object(Rc::new(RefCell::new(ObjectData {
            properties: HashMap::new(),
            symbol_properties: HashMap::new(),
        })))
    }

    /// Create an object from string-keyed entries
    pub fn object_from<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let properties = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v))
            .collect::<HashMap<String, Value>>();
        Value::Object(Rc::new(RefCell::new(ObjectData {
            properties,
            symbol_properties: HashMap::new(),
        })))
    }

    /// Create a generic error value
    pub fn error(message: impl Into<String>) -> Self {
        Value::error_named("Error", message)
    }

    /// Create an error value with an explicit name
    pub fn error_named(name: impl Into<String>, message: impl Into<String>) -> Self {
        Value::Error(Rc::new(RefCell::new(ErrorData {
            name: name.into(),
            message: message.into(),
        })))
    }

    /// Compile a match pattern.
    ///
    /// Fails with a rejected-value error when the pattern text does not
    /// compile.
    pub fn pattern(source: &str) -> ChainResult<Self> {
        let regex = Regex::new(source).map_err(|err| {
            ChainError::thrown(Value::error(format!("invalid pattern /{source}/: {err}")))
        })?;
        Ok(Value::Pattern(Rc::new(PatternData {
            source: source.to_string(),
            regex,
        })))
    }

    /// Create a function value
    pub fn function<F>(func: F) -> Self
    where
        F: Fn(Value, Vec<Value>) -> ChainResult<Value> + 'static,
    {
        Value::Function(Rc::new(FunctionData {
            func: Box::new(func),
        }))
    }

    /// Whether this value is truthy.
    ///
    /// Falsy values: undefined, null, false, 0 and NaN, the zero big
    /// integer, and the empty string. Everything else, aggregates included,
    /// is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined => false,
            Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Number(n) => !n.is_nan() && *n != 0.0,
            Value::BigInt(n) => !n.is_zero(),
            Value::String(s) => !s.is_empty(),
            Value::Symbol(_) => true,
            Value::Array(_) => true,
            Value::Object(_) => true,
            Value::Error(_) => true,
            Value::Pattern(_) => true,
            Value::Function(_) => true,
            Value::Pending(_) => true,
        }
    }

    /// The kind string for this value, as reported in diagnostics.
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Array(_) => "object",
            Value::Object(_) => "object",
            Value::Error(_) => "object",
            Value::Pattern(_) => "object",
            Value::Function(_) => "function",
            Value::Pending(_) => "object",
        }
    }

    /// Check if value is undefined
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Check if value is an array
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Check if value is callable
    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    /// Check if value is a deferred computation
    pub fn is_pending(&self) -> bool {
        matches!(self, Value::Pending(_))
    }

    /// The number payload, if this is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The string payload, if this is a string
    pub fn as_str(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// A snapshot of the elements, if this is an array
    pub fn as_elements(&self) -> Option<Vec<Value>> {
        match self {
            Value::Array(data) => Some(data.borrow().elements.clone()),
            _ => None,
        }
    }

    /// Call this value as a function with the given receiver and arguments.
    ///
    /// Non-functions fail with the not-callable diagnostic.
    pub fn call(&self, this: Value, args: Vec<Value>) -> ChainResult<Value> {
        match self {
            Value::Function(data) => (data.func)(this, args),
            other => Err(ChainError::not_callable(other)),
        }
    }

    /// Plain property lookup.
    ///
    /// Objects read their property table; arrays answer `length` and
    /// numeric indices; strings answer `length`; error values answer
    /// `name` and `message`. Absent keys yield `Undefined`.
    pub fn get_property(&self, key: &str) -> Value {
        match self {
            Value::Object(data) => data
                .borrow()
                .properties
                .get(key)
                .cloned()
                .unwrap_or(Value::Undefined),
            Value::Array(data) => {
                let data = data.borrow();
                if key == "length" {
                    return Value::Number(data.elements.len() as f64);
                }
                match key.parse::<usize>() {
                    Ok(index) => data.elements.get(index).cloned().unwrap_or(Value::Undefined),
                    Err(_) => Value::Undefined,
                }
            }
            Value::String(s) => {
                if key == "length" {
                    Value::Number(s.chars().count() as f64)
                } else if let Ok(index) = key.parse::<usize>() {
                    s.chars()
                        .nth(index)
                        .map(|c| Value::String(c.to_string()))
                        .unwrap_or(Value::Undefined)
                } else {
                    Value::Undefined
                }
            }
            Value::Error(data) => {
                let data = data.borrow();
                match key {
                    "name" => Value::String(data.name.clone()),
                    "message" => Value::String(data.message.clone()),
                    _ => Value::Undefined,
                }
            }
            Value::Pattern(data) => match key {
                "source" => Value::String(data.source.clone()),
                _ => Value::Undefined,
            },
            _ => Value::Undefined,
        }
    }

    /// Symbol-keyed property lookup; only objects carry a symbol table.
    pub fn get_symbol_property(&self, key: &SymbolValue) -> Value {
        match self {
            Value::Object(data) => data
                .borrow()
                .symbol_properties
                .get(&key.id())
                .cloned()
                .unwrap_or(Value::Undefined),
            _ => Value::Undefined,
        }
    }

    /// Property assignment.
    ///
    /// Objects insert into their property table; arrays accept in-range
    /// numeric indices and the one-past-the-end append. Assignment to any
    /// other kind is silently ignored.
    pub fn set_property(&self, key: impl Into<String>, value: Value) {
        let key = key.into();
        match self {
            Value::Object(data) => {
                data.borrow_mut().properties.insert(key, value);
            }
            Value::Array(data) => {
                if let Ok(index) = key.parse::<usize>() {
                    let mut data = data.borrow_mut();
                    if index < data.elements.len() {
                        data.elements[index] = value;
                    } else if index == data.elements.len() {
                        data.elements.push(value);
                    }
                }
            }
            _ => {}
        }
    }

    /// Symbol-keyed property assignment; ignored on non-objects.
    pub fn set_symbol_property(&self, key: &SymbolValue, value: Value) {
        if let Value::Object(data) = self {
            data.borrow_mut().symbol_properties.insert(key.id(), value);
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => {
                Rc::ptr_eq(a, b) || a.borrow().elements == b.borrow().elements
            }
            (Value::Object(a), Value::Object(b)) => {
                Rc::ptr_eq(a, b) || {
                    let a = a.borrow();
                    let b = b.borrow();
                    a.properties == b.properties && a.symbol_properties == b.symbol_properties
                }
            }
            (Value::Error(a), Value::Error(b)) => {
                let a = a.borrow();
                let b = b.borrow();
                a.name == b.name && a.message == b.message
            }
            (Value::Pattern(a), Value::Pattern(b)) => a.source == b.source,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            // Deferred computations have no observable identity
            (Value::Pending(_), Value::Pending(_)) => false,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", if *b { "true" } else { "false" }),
            Value::Number(n) => {
                if n.is_nan() {
                    write!(f, "NaN")
                } else if n.is_infinite() {
                    if n.is_sign_positive() {
                        write!(f, "Infinity")
                    } else {
                        write!(f, "-Infinity")
                    }
                } else if n.fract() == 0.0 && n.abs() < 1e15 {
                    // Integer-valued doubles display without a decimal point
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::BigInt(n) => write!(f, "{}n", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Symbol(sym) => write!(f, "{}", sym),
            Value::Array(data) => {
                let data = data.borrow();
                let parts: Vec<String> = data
                    .elements
                    .iter()
                    .map(|el| match el {
                        Value::Undefined | Value::Null => String::new(),
                        other => other.to_string(),
                    })
                    .collect();
                write!(f, "{}", parts.join(","))
            }
            Value::Object(_) => write!(f, "[object Object]"),
            Value::Error(data) => {
                let data = data.borrow();
                write!(f, "{}: {}", data.name, data.message)
            }
            Value::Pattern(data) => write!(f, "/{}/", data.source),
            Value::Function(_) => write!(f, "function () {{ [native code] }}"),
            Value::Pending(_) => write!(f, "[object Promise]"),
        }
    }
}

/// Serialization used by the not-callable diagnostic: data kinds render
/// structurally, callables and deferred computations render as null.
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Undefined | Value::Null => serializer.serialize_unit(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
                    serializer.serialize_i64(*n as i64)
                } else {
                    serializer.serialize_f64(*n)
                }
            }
            Value::BigInt(n) => serializer.serialize_str(&n.to_string()),
            Value::String(s) => serializer.serialize_str(s),
            Value::Symbol(sym) => serializer.serialize_str(&sym.to_string()),
            Value::Array(data) => {
                let data = data.borrow();
                let mut seq = serializer.serialize_seq(Some(data.elements.len()))?;
                for element in &data.elements {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(data) => {
                let data = data.borrow();
                let mut map = serializer.serialize_map(Some(data.properties.len()))?;
                for (key, value) in &data.properties {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Value::Error(data) => {
                let data = data.borrow();
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("name", &data.name)?;
                map.serialize_entry("message", &data.message)?;
                map.end()
            }
            Value::Pattern(data) => serializer.serialize_str(&format!("/{}/", data.source)),
            Value::Function(_) | Value::Pending(_) => serializer.serialize_unit(),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(v as f64)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::array_from(v)
    }
}

impl From<BigInt> for Value {
    fn from(v: BigInt) -> Self {
        Value::BigInt(v)
    }
}

impl From<SymbolValue> for Value {
    fn from(v: SymbolValue) -> Self {
        Value::Symbol(v)
    }
}

impl From<Pending> for Value {
    fn from(v: Pending) -> Self {
        Value::Pending(v)
    }
}
