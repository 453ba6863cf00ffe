//! Unit tests for the dynamic value type

use core_types::{Pending, SymbolValue, Value};
use num_bigint::BigInt;

#[test]
fn from_conversions_cover_the_scalar_kinds() {
    assert_eq!(Value::from(true), Value::Boolean(true));
    assert_eq!(Value::from(3), Value::Number(3.0));
    assert_eq!(Value::from(3.5), Value::Number(3.5));
    assert_eq!(Value::from("a"), Value::String("a".to_string()));
    assert_eq!(Value::from("a".to_string()), Value::String("a".to_string()));
    assert_eq!(
        Value::from(BigInt::from(7)),
        Value::BigInt(BigInt::from(7))
    );
}

#[test]
fn vec_conversion_builds_an_array() {
    let arr = Value::from(vec![Value::from(1), Value::from(2)]);
    assert!(arr.is_array());
    assert_eq!(arr.as_elements().unwrap().len(), 2);
}

#[test]
fn error_values_expose_name_and_message() {
    let err = Value::error("boom");
    assert_eq!(err.get_property("name"), Value::from("Error"));
    assert_eq!(err.get_property("message"), Value::from("boom"));
    assert_eq!(err.get_property("stack"), Value::Undefined);

    let typed = Value::error_named("TypeError", "bad");
    assert_eq!(typed.get_property("name"), Value::from("TypeError"));
    assert_eq!(typed.to_string(), "TypeError: bad");
}

#[test]
fn patterns_compile_and_expose_their_source() {
    let pattern = Value::pattern("(b|c)").unwrap();
    assert_eq!(pattern.get_property("source"), Value::from("(b|c)"));
    assert_eq!(pattern.to_string(), "/(b|c)/");
}

#[test]
fn invalid_patterns_fail_to_compile() {
    let error = Value::pattern("(unclosed").unwrap_err();
    assert!(error.reason().to_string().contains("invalid pattern"));
}

#[test]
fn string_properties() {
    let s = Value::from("abc");
    assert_eq!(s.get_property("length"), Value::from(3));
    assert_eq!(s.get_property("1"), Value::from("b"));
    assert_eq!(s.get_property("9"), Value::Undefined);
}

#[test]
fn array_assignment_accepts_in_range_and_append_only() {
    let arr = Value::array_from(vec![Value::from(1)]);
    arr.set_property("0", Value::from(9));
    arr.set_property("1", Value::from(2));
    arr.set_property("5", Value::from(99));
    assert_eq!(
        arr.as_elements().unwrap(),
        vec![Value::from(9), Value::from(2)]
    );
}

#[test]
fn assignment_to_scalars_is_ignored() {
    let n = Value::from(3);
    n.set_property("x", Value::from(1));
    assert_eq!(n.get_property("x"), Value::Undefined);
}

#[test]
fn symbol_keys_never_collide_with_string_keys() {
    let sym = SymbolValue::new(Some("meta".to_string()));
    let obj = Value::object_from([("meta", Value::from("plain"))]);
    obj.set_symbol_property(&sym, Value::from("keyed"));
    assert_eq!(obj.get_property("meta"), Value::from("plain"));
    assert_eq!(obj.get_symbol_property(&sym), Value::from("keyed"));
}

#[test]
fn json_rendering_for_diagnostics() {
    let arr = Value::array_from(vec![Value::from(true)]);
    assert_eq!(serde_json::to_string(&arr).unwrap(), "[true]");

    let nested = Value::array_from(vec![Value::from(3), Value::from("a")]);
    assert_eq!(serde_json::to_string(&nested).unwrap(), "[3,\"a\"]");

    let f = Value::function(|_, _| Ok(Value::Undefined));
    assert_eq!(serde_json::to_string(&f).unwrap(), "null");

    let pending = Value::from(Pending::fulfilled(Value::from(1)));
    assert_eq!(serde_json::to_string(&pending).unwrap(), "null");
}

#[test]
fn pending_values_are_never_structurally_equal() {
    let a = Value::from(Pending::fulfilled(Value::from(1)));
    let b = Value::from(Pending::fulfilled(Value::from(1)));
    assert_ne!(a, b);
}

#[test]
fn bigint_display_and_truthiness() {
    assert_eq!(Value::from(BigInt::from(12)).to_string(), "12n");
    assert!(Value::from(BigInt::from(-1)).is_truthy());
    assert!(!Value::from(BigInt::from(0)).is_truthy());
}
