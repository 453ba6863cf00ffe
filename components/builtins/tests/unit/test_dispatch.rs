//! Unit tests for string-keyed member dispatch

use builtins::method_of;
use core_types::Value;

fn call(value: &Value, name: &str, args: Vec<Value>) -> Value {
    method_of(value, name)
        .unwrap_or_else(|| panic!("no member {name}"))
        .call(Value::Undefined, args)
        .unwrap()
}

#[test]
fn join_defaults_to_a_comma() {
    let arr = Value::array_from(vec![Value::from(1), Value::from(2)]);
    assert_eq!(call(&arr, "join", vec![]), Value::from("1,2"));
    assert_eq!(
        call(&arr, "join", vec![Value::from(".")]),
        Value::from("1.2")
    );
}

#[test]
fn slice_defaults_cover_the_whole_value() {
    let s = Value::from("Hello");
    assert_eq!(call(&s, "slice", vec![]), Value::from("Hello"));
    assert_eq!(
        call(&s, "slice", vec![Value::from(0), Value::from(5)]),
        Value::from("Hello")
    );
}

#[test]
fn char_at_out_of_range_is_empty() {
    let s = Value::from("ab");
    assert_eq!(call(&s, "charAt", vec![Value::from(9)]), Value::from(""));
    assert_eq!(call(&s, "charAt", vec![]), Value::from("a"));
}

#[test]
fn search_arguments_are_rendered_to_strings() {
    let s = Value::from("a1b");
    assert_eq!(
        call(&s, "includes", vec![Value::from(1)]),
        Value::from(true)
    );
    assert_eq!(
        call(&s, "startsWith", vec![Value::from("a")]),
        Value::from(true)
    );
}

#[test]
fn pattern_test_member_is_reachable() {
    let pattern = Value::pattern("(b|c)").unwrap();
    assert_eq!(
        call(&pattern, "test", vec![Value::from("abc")]),
        Value::from(true)
    );
    assert_eq!(
        call(&pattern, "test", vec![Value::from("a")]),
        Value::from(false)
    );
}

#[test]
fn to_string_accepts_a_radix_argument() {
    let n = Value::from(255);
    assert_eq!(
        call(&n, "toString", vec![Value::from(16)]),
        Value::from("ff")
    );
    assert_eq!(call(&n, "toString", vec![]), Value::from("255"));
}
