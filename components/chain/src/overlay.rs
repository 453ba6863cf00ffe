//! Async reimplementations of the array iteration helpers.
//!
//! These replace the native helpers so that predicates can be asynchronous
//! (returning a pending value) or pattern-typed. The sequencing rules are
//! part of the contract:
//!
//! - `every` / `some` / `find` / `findIndex` run strictly in index order and
//!   stop at the first definitive answer; later predicates are never
//!   invoked.
//! - `filter` / `forEach` launch every per-element predicate at once and
//!   always let all of them run to completion, even when the outcome is
//!   already determined. `filter` restores original order afterwards.
//! - `reduce` / `reduceRight` fold strictly in order, awaiting each step.
//!
//! `map` is deliberately absent: the native map already does the right
//! thing, with the resolver flattening any deferred results afterwards.

use std::collections::HashMap;
use std::rc::Rc;

use async_runtime::resolver::settle;
use builtins::PatternPrototype;
use core_types::{ChainError, ChainResult, Pending, Value};
use futures::future::join_all;

use crate::registry::OverlayFn;

/// The built-in helper table seeded into every registry's array section.
pub(crate) fn builtin_table() -> HashMap<String, OverlayFn> {
    let mut table: HashMap<String, OverlayFn> = HashMap::new();
    let entries: [(&str, fn(Value, Vec<Value>) -> ChainResult<Value>); 8] = [
        ("every", every_entry),
        ("some", some_entry),
        ("find", find_entry),
        ("findIndex", find_index_entry),
        ("filter", filter_entry),
        ("forEach", for_each_entry),
        ("reduce", reduce_entry),
        ("reduceRight", reduce_right_entry),
    ];
    for (name, entry) in entries {
        table.insert(name.to_string(), Rc::new(entry));
    }
    table
}

fn type_error(message: String) -> ChainError {
    ChainError::thrown(Value::error_named("TypeError", message))
}

/// Call a callback with pattern coercion: patterns test their first
/// argument's string rendering, everything else must be a function.
fn invoke_callback(callback: &Value, this: &Value, args: Vec<Value>) -> ChainResult<Value> {
    match callback {
        Value::Pattern(data) => {
            let subject = args.first().cloned().unwrap_or(Value::Undefined);
            Ok(Value::boolean(PatternPrototype::test(data, &subject)))
        }
        other => other.call(this.clone(), args),
    }
}

/// Predicate invocation with the (element, index, array) argument shape.
fn invoke_predicate(
    callback: &Value,
    this: &Value,
    element: Value,
    index: usize,
    all: &Value,
) -> ChainResult<Value> {
    invoke_callback(
        callback,
        this,
        vec![element, Value::Number(index as f64), all.clone()],
    )
}

struct HelperInput {
    all: Value,
    elements: Vec<Value>,
    callback: Value,
    this: Value,
    seed: Option<Value>,
}

fn helper_input(name: &str, receiver: Value, args: Vec<Value>) -> ChainResult<HelperInput> {
    let elements = receiver
        .as_elements()
        .ok_or_else(|| type_error(format!("{name} called on non-array")))?;
    let mut args = args.into_iter();
    let callback = args.next().unwrap_or(Value::Undefined);
    let seed = args.next();
    Ok(HelperInput {
        all: receiver,
        elements,
        callback,
        // The optional second argument doubles as thisArg for predicates
        // and as the seed for the folds
        this: seed.clone().unwrap_or(Value::Undefined),
        seed,
    })
}

fn every_entry(receiver: Value, args: Vec<Value>) -> ChainResult<Value> {
    let input = helper_input("every", receiver, args)?;
    Ok(Value::from(Pending::new(every(input))))
}

async fn every(input: HelperInput) -> ChainResult<Value> {
    for (index, element) in input.elements.iter().enumerate() {
        let verdict = settle(invoke_predicate(
            &input.callback,
            &input.this,
            element.clone(),
            index,
            &input.all,
        )?)
        .await?;
        if !verdict.is_truthy() {
            return Ok(Value::boolean(false));
        }
    }
    Ok(Value::boolean(true))
}

fn some_entry(receiver: Value, args: Vec<Value>) -> ChainResult<Value> {
    let input = helper_input("some", receiver, args)?;
    Ok(Value::from(Pending::new(some(input))))
}

async fn some(input: HelperInput) -> ChainResult<Value> {
    for (index, element) in input.elements.iter().enumerate() {
        let verdict = settle(invoke_predicate(
            &input.callback,
            &input.this,
            element.clone(),
            index,
            &input.all,
        )?)
        .await?;
        if verdict.is_truthy() {
            return Ok(Value::boolean(true));
        }
    }
    Ok(Value::boolean(false))
}

fn find_entry(receiver: Value, args: Vec<Value>) -> ChainResult<Value> {
    let input = helper_input("find", receiver, args)?;
    Ok(Value::from(Pending::new(find(input))))
}

async fn find(input: HelperInput) -> ChainResult<Value> {
    for (index, element) in input.elements.iter().enumerate() {
        let verdict = settle(invoke_predicate(
            &input.callback,
            &input.this,
            element.clone(),
            index,
            &input.all,
        )?)
        .await?;
        if verdict.is_truthy() {
            return Ok(element.clone());
        }
    }
    Ok(Value::Undefined)
}

fn find_index_entry(receiver: Value, args: Vec<Value>) -> ChainResult<Value> {
    let input = helper_input("findIndex", receiver, args)?;
    Ok(Value::from(Pending::new(find_index(input))))
}

async fn find_index(input: HelperInput) -> ChainResult<Value> {
    for (index, element) in input.elements.iter().enumerate() {
        let verdict = settle(invoke_predicate(
            &input.callback,
            &input.this,
            element.clone(),
            index,
            &input.all,
        )?)
        .await?;
        if verdict.is_truthy() {
            return Ok(Value::Number(index as f64));
        }
    }
    Ok(Value::Number(-1.0))
}

/// One per-element check used by the parallel helpers. The predicate is
/// invoked inside the future, and every future is polled to completion by
/// `join_all` before any verdict is inspected.
async fn checked(
    callback: Value,
    this: Value,
    element: Value,
    index: usize,
    all: Value,
) -> ChainResult<bool> {
    let verdict = settle(invoke_predicate(&callback, &this, element, index, &all)?).await?;
    Ok(verdict.is_truthy())
}

fn filter_entry(receiver: Value, args: Vec<Value>) -> ChainResult<Value> {
    let input = helper_input("filter", receiver, args)?;
    Ok(Value::from(Pending::new(filter(input))))
}

async fn filter(input: HelperInput) -> ChainResult<Value> {
    let checks = input.elements.iter().enumerate().map(|(index, element)| {
        checked(
            input.callback.clone(),
            input.this.clone(),
            element.clone(),
            index,
            input.all.clone(),
        )
    });
    let verdicts = join_all(checks).await;

    let mut kept = Vec::new();
    for (element, verdict) in input.elements.into_iter().zip(verdicts) {
        if verdict? {
            kept.push(element);
        }
    }
    Ok(Value::array_from(kept))
}

fn for_each_entry(receiver: Value, args: Vec<Value>) -> ChainResult<Value> {
    let input = helper_input("forEach", receiver, args)?;
    Ok(Value::from(Pending::new(for_each(input))))
}

async fn for_each(input: HelperInput) -> ChainResult<Value> {
    let effects = input.elements.iter().enumerate().map(|(index, element)| {
        checked(
            input.callback.clone(),
            input.this.clone(),
            element.clone(),
            index,
            input.all.clone(),
        )
    });
    for outcome in join_all(effects).await {
        outcome?;
    }
    // Pass the receiver through so the chain can keep going
    Ok(input.all)
}

fn reduce_entry(receiver: Value, args: Vec<Value>) -> ChainResult<Value> {
    let input = helper_input("reduce", receiver, args)?;
    Ok(Value::from(Pending::new(reduce(input))))
}

async fn reduce(input: HelperInput) -> ChainResult<Value> {
    let (mut accumulator, start) = match input.seed {
        Some(seed) => (seed, 0),
        None => (
            input.elements.first().cloned().unwrap_or(Value::Undefined),
            1,
        ),
    };
    for index in start..input.elements.len() {
        let step = invoke_callback(
            &input.callback,
            &Value::Undefined,
            vec![
                accumulator,
                input.elements[index].clone(),
                Value::Number(index as f64),
                input.all.clone(),
            ],
        )?;
        accumulator = settle(step).await?;
    }
    Ok(accumulator)
}

fn reduce_right_entry(receiver: Value, args: Vec<Value>) -> ChainResult<Value> {
    let input = helper_input("reduceRight", receiver, args)?;
    Ok(Value::from(Pending::new(reduce_right(input))))
}

async fn reduce_right(input: HelperInput) -> ChainResult<Value> {
    let len = input.elements.len() as isize;
    let (mut accumulator, mut index) = match input.seed {
        Some(seed) => (seed, len - 1),
        None => (
            input.elements.last().cloned().unwrap_or(Value::Undefined),
            len - 2,
        ),
    };
    while index >= 0 {
        let i = index as usize;
        let step = invoke_callback(
            &input.callback,
            &Value::Undefined,
            vec![
                accumulator,
                input.elements[i].clone(),
                Value::Number(i as f64),
                input.all.clone(),
            ],
        )?;
        accumulator = settle(step).await?;
        index -= 1;
    }
    Ok(accumulator)
}
