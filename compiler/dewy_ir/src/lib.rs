//! Dewy IR - the tree the evaluator consumes.
//!
//! This crate holds the data handed over by the parsing collaborator:
//! - `Name` and `StringInterner` for identifiers
//! - `Span` for source locations
//! - `BinaryOp` / `UnaryOp`
//! - the immutable AST (`Expr`, `ExprKind`, `Literal`)
//!
//! The evaluator only reads these types. Nodes that a closure must keep
//! alive after the enclosing tree is dropped (function bodies) are held in
//! `Rc`, so re-entering the same node from a loop or a repeated call is safe.

pub mod ast;
mod interner;
mod name;
mod span;

pub use ast::{BinaryOp, Expr, ExprKind, Literal, UnaryOp};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use span::Span;
