//! Contract tests for the async_runtime component
//!
//! These tests verify the resolution guarantees the chain layer depends on:
//! no remaining nested pendingness after resolve, idempotence, and
//! first-failure propagation.

use async_runtime::exec::block_on;
use async_runtime::resolver::resolve;
use core_types::{Pending, Value};

fn contains_pending(value: &Value) -> bool {
    match value {
        Value::Pending(_) => true,
        Value::Array(data) => data.borrow().elements.iter().any(contains_pending),
        _ => false,
    }
}

#[test]
fn resolve_leaves_no_nested_pendingness() {
    let value = Value::array_from(vec![
        Value::from(Pending::fulfilled(Value::array_from(vec![Value::from(
            Pending::fulfilled(Value::from("x")),
        )]))),
        Value::array_from(vec![Value::from(Pending::fulfilled(Value::from("y")))]),
    ]);
    let resolved = block_on(resolve(value)).unwrap();
    assert!(!contains_pending(&resolved));
}

#[test]
fn resolve_twice_equals_resolve_once() {
    let value = Value::array_from(vec![
        Value::from(Pending::fulfilled(Value::from(1))),
        Value::from(2),
    ]);
    let once = block_on(resolve(value)).unwrap();
    let twice = block_on(resolve(once.clone())).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn rejection_reason_is_unmodified() {
    let reason = Value::object_from([("code", Value::from(7))]);
    let value = Value::array_from(vec![Value::from(Pending::rejected(reason.clone()))]);
    let error = block_on(resolve(value)).unwrap_err();
    assert_eq!(error.reason(), reason);
}
