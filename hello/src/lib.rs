//! Greeting helpers for the `hello` binary.

pub const DEFAULT_NAME: &str = "World";

/// Returns `Hello, {name}!`.
pub fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}
