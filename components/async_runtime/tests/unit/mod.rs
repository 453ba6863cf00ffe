//! Unit test modules for the async_runtime component

mod exec_test;
mod resolver_test;
