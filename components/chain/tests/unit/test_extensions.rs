//! Unit tests for caller-supplied extensions

use async_runtime::exec::block_on;
use chain::{wrap_with, Extensions};
use core_types::{ChainResult, Pending, Value};

fn settle(chain: &chain::Chain) -> ChainResult<Value> {
    block_on(chain.settle())
}

fn doubled(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::string(format!("{s}{s}")),
        Value::Number(n) => Value::from(n * 2.0),
        other => other.clone(),
    }
}

fn double_extensions() -> Extensions {
    Extensions::new().global("double", |receiver, _args| {
        Ok(match &receiver {
            Value::Array(_) => Value::array_from(
                receiver
                    .as_elements()
                    .unwrap_or_default()
                    .iter()
                    .map(doubled)
                    .collect(),
            ),
            other => doubled(other),
        })
    })
}

#[test]
fn global_extensions_apply_to_any_kind() {
    assert_eq!(
        settle(&wrap_with(Value::from("a"), double_extensions()).call("double", vec![])).unwrap(),
        Value::from("aa")
    );
    assert_eq!(
        settle(
            &wrap_with(
                Value::array_from(vec![Value::from("a")]),
                double_extensions()
            )
            .call("double", vec![])
        )
        .unwrap(),
        Value::array_from(vec![Value::from("aa")])
    );
}

#[test]
fn extensions_work_later_in_the_chain() {
    let chain = wrap_with(Value::from("abc"), double_extensions())
        .call("slice", vec![Value::from(0), Value::from(1)])
        .call("double", vec![]);
    assert_eq!(settle(&chain).unwrap(), Value::from("aa"));
}

#[test]
fn extension_results_keep_their_kind_methods() {
    let chain = wrap_with(Value::from("a"), double_extensions())
        .call("double", vec![])
        .call("slice", vec![Value::from(0), Value::from(2)]);
    assert_eq!(settle(&chain).unwrap(), Value::from("aa"));
}

#[test]
fn extensions_receive_arguments_and_may_defer() {
    let extensions = Extensions::new().array("abc", |receiver, args| {
        let own: Vec<String> = receiver
            .as_elements()
            .unwrap_or_default()
            .iter()
            .map(Value::to_string)
            .collect();
        let extra: Vec<String> = args.iter().map(Value::to_string).collect();
        let rendered = format!("a{}{}f", own.join(""), extra.join(""));
        Ok(Value::from(Pending::fulfilled(Value::string(rendered))))
    });
    let chain = wrap_with(
        Value::array_from(vec![Value::from("b"), Value::from("c")]),
        extensions,
    )
    .call(
        "map",
        vec![Value::function(|_, args| Ok(args[0].clone()))],
    )
    .call("abc", vec![Value::from("d"), Value::from("e")]);
    assert_eq!(settle(&chain).unwrap(), Value::from("abcdef"));
}

#[test]
fn kind_extensions_do_not_leak_across_kinds() {
    let extensions = Extensions::new().number("half", |receiver, _| {
        Ok(Value::from(receiver.as_number().unwrap_or(0.0) / 2.0))
    });
    assert_eq!(
        settle(&wrap_with(Value::from(4), extensions.clone()).call("half", vec![])).unwrap(),
        Value::from(2.0)
    );
    // On a string the name falls through to plain property lookup, which
    // yields undefined, so invoking it is the not-callable failure.
    let error =
        settle(&wrap_with(Value::from("abcd"), extensions).call("half", vec![])).unwrap_err();
    assert!(error.to_string().contains("non-function"));
}

#[test]
fn array_extensions_override_the_builtin_helpers() {
    let extensions = Extensions::new().array("filter", |receiver, _args| {
        // Deliberately ignores the predicate
        Ok(receiver)
    });
    let numbers = Value::array_from(vec![Value::from(1), Value::from(2)]);
    let chain = wrap_with(numbers.clone(), extensions).call(
        "filter",
        vec![Value::function(|_, _| Ok(Value::from(false)))],
    );
    assert_eq!(settle(&chain).unwrap(), numbers);
}

#[test]
fn global_extensions_shadow_native_members() {
    let extensions =
        Extensions::new().global("toUpperCase", |_receiver, _| Ok(Value::from("shadowed")));
    let chain = wrap_with(Value::from("abc"), extensions).call("toUpperCase", vec![]);
    assert_eq!(settle(&chain).unwrap(), Value::from("shadowed"));
}

#[test]
fn the_registry_is_shared_by_descendant_nodes() {
    let chain = wrap_with(Value::from("a"), double_extensions());
    let first = chain.call("double", vec![]);
    let second = first.call("double", vec![]);
    assert_eq!(settle(&second).unwrap(), Value::from("aaaa"));
    // The earlier links are unaffected by later navigation
    assert_eq!(settle(&first).unwrap(), Value::from("aa"));
    assert_eq!(settle(&chain).unwrap(), Value::from("a"));
}
