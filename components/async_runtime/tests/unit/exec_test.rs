//! Unit tests for the cooperative drivers

use async_runtime::exec::{block_on, Driver};
use async_runtime::resolver::resolve;
use core_types::{Pending, Value};

#[test]
fn block_on_drives_a_resolution() {
    let value = Value::from(Pending::fulfilled(Value::from("done")));
    assert_eq!(block_on(resolve(value)).unwrap(), Value::from("done"));
}

#[test]
fn driver_drains_interleaved_resolutions() {
    let mut driver = Driver::new();
    let first = Value::from(Pending::fulfilled(Value::from(1)));
    let second = Value::from(Pending::fulfilled(Value::from(2)));
    assert_eq!(driver.run_until(resolve(first)).unwrap(), Value::from(1));
    assert_eq!(driver.run_until(resolve(second)).unwrap(), Value::from(2));
}
