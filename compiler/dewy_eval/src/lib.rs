//! Dewy Eval - tree-walking evaluator and lexical scopes for Dewy.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Scope`: reference-counted chain of name/value frames
//! - `Value`: closed enum of runtime values, with `Void` as the no-value marker
//! - `evaluate_binary`: direct enum-based binary operator dispatch
//! - `evaluate_unary`: direct enum-based unary operator dispatch
//! - `Interpreter`: per-node dispatch with call-depth and step limits
//!
//! Failures are returned as `EvalError` values; nothing in this crate prints.
//! Diagnostics are `tracing` events and cost nothing without a subscriber.
//!
//! Scopes and values are `Rc`-based and stay on the thread that built them.
//! Independent programs may run on separate threads, each with its own root
//! scope, sharing only the `StringInterner`.

mod builtins;
pub mod driver;
mod environment;
pub mod errors;
pub mod interpreter;
mod limits;
mod operators;
mod teardown;
mod unary_operators;
mod value;

pub use driver::{run_source, run_source_with, Frontend, RunError};
pub use environment::{LocalScope, Scope, Unbound};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{evaluate, Interpreter, InterpreterBuilder};
pub use limits::EvalLimits;
pub use operators::{evaluate_binary, values_equal};
pub use unary_operators::evaluate_unary;
pub use value::{Builtin, BuiltinFn, FunctionValue, Heap, RecordMap, Value, ValueKind};

#[cfg(test)]
mod tests;
