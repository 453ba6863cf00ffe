//! Unit tests for recursive resolution

use async_runtime::exec::block_on;
use async_runtime::resolver::{resolve, settle};
use core_types::{ChainError, Pending, Value};
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn resolves_nested_arrays_recursively() {
    let value = Value::array_from(vec![
        Value::from("a"),
        Value::from(Pending::fulfilled(Value::from("b"))),
        Value::array_from(vec![Value::from(Pending::fulfilled(Value::from("c")))]),
    ]);
    let resolved = block_on(resolve(value)).unwrap();
    assert_eq!(
        resolved,
        Value::array_from(vec![
            Value::from("a"),
            Value::from("b"),
            Value::array_from(vec![Value::from("c")]),
        ])
    );
}

#[test]
fn nested_rejection_fails_the_whole_resolution() {
    let value = Value::array_from(vec![
        Value::from("a"),
        Value::from(Pending::fulfilled(Value::from("b"))),
        Value::array_from(vec![Value::from(Pending::rejected("c"))]),
    ]);
    let error = block_on(resolve(value)).unwrap_err();
    assert_eq!(error.reason(), Value::from("c"));
}

#[test]
fn earliest_failing_element_wins() {
    let value = Value::array_from(vec![
        Value::from(Pending::rejected("first")),
        Value::from(Pending::rejected("second")),
    ]);
    let error = block_on(resolve(value)).unwrap_err();
    assert_eq!(error.reason(), Value::from("first"));
}

#[test]
fn every_element_is_resolved_even_with_mixed_depths() {
    let value = Value::array_from(vec![
        Value::array_from(vec![Value::array_from(vec![Value::from(Pending::fulfilled(
            Value::from(1),
        ))])]),
        Value::from(Pending::fulfilled(Value::array_from(vec![Value::from(
            Pending::fulfilled(Value::from(2)),
        )]))),
    ]);
    let resolved = block_on(resolve(value)).unwrap();
    assert_eq!(
        resolved,
        Value::array_from(vec![
            Value::array_from(vec![Value::array_from(vec![Value::from(1)])]),
            Value::array_from(vec![Value::from(2)]),
        ])
    );
}

#[test]
fn resolution_preserves_non_deferred_values() {
    let obj = Value::object_from([("a", Value::from(3))]);
    let resolved = block_on(resolve(obj.clone())).unwrap();
    assert_eq!(resolved, obj);
}

#[test]
fn resolution_is_driven_on_demand_only() {
    let ran = Rc::new(Cell::new(false));
    let flag = ran.clone();
    let value = Value::array_from(vec![Value::from(Pending::new(async move {
        flag.set(true);
        Ok(Value::from(1))
    }))]);
    let future = resolve(value);
    assert!(!ran.get());
    block_on(future).unwrap();
    assert!(ran.get());
}

#[test]
fn settle_propagates_failures() {
    let error = block_on(settle(Value::from(Pending::failed(ChainError::thrown(
        Value::error("boom"),
    )))))
    .unwrap_err();
    assert_eq!(error.reason().get_property("message"), Value::from("boom"));
}
