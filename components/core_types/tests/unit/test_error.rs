//! Unit tests for the failure taxonomy

use core_types::{ChainError, Value};

#[test]
fn not_callable_messages_for_each_kind() {
    let cases = [
        (Value::from(true), "(boolean)"),
        (Value::from(3), "(number)"),
        (Value::from("a"), "(string)"),
        (Value::array(), "(object)"),
        (Value::object(), "(object)"),
        (Value::Undefined, "(undefined)"),
    ];
    for (value, kind) in cases {
        let message = ChainError::not_callable(&value).to_string();
        assert!(message.contains("non-function"), "{message}");
        assert!(message.contains(kind), "{message}");
    }
}

#[test]
fn not_callable_message_hints_at_both_misuses() {
    let message = ChainError::not_callable(&Value::array()).to_string();
    assert!(message.contains("invoked directly"));
    assert!(message.contains("another callback"));
}

#[test]
fn rejected_display_is_the_reason_rendering() {
    let error = ChainError::thrown(Value::from("Hello"));
    assert_eq!(error.to_string(), "Hello");

    let error = ChainError::thrown(Value::error("rejected"));
    assert_eq!(error.to_string(), "Error: rejected");
}

#[test]
fn errors_clone_without_losing_their_reason() {
    let error = ChainError::thrown(Value::from(3));
    let clone = error.clone();
    assert_eq!(clone.reason(), Value::from(3));
}
