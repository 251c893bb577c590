//! Abstract syntax tree.
//!
//! Produced by the parsing collaborator, read by the evaluator. Nodes are
//! never mutated after construction.

mod expr;
mod operators;

pub use expr::{Expr, ExprKind, Literal};
pub use operators::{BinaryOp, UnaryOp};
