// The same operation mix drives the in-crate fuzzers.
#[path = "../../src/test/quick.rs"]
mod quick;

mod tree;
