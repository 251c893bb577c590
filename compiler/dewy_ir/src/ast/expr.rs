//! Expression nodes.
//!
//! Every construct in the language is an expression: statements are
//! expressions whose result is void. Children are boxed, except function
//! bodies and parameter lists, which are `Rc`-shared so a closure can keep
//! them alive independently of the tree that defined it.

use std::rc::Rc;

use super::{BinaryOp, UnaryOp};
use crate::{Name, Span};

/// Literal payload embedded in the tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Number(f64),
    Text(String),
    Bool(bool),
    /// The `void` keyword.
    Void,
}

/// Expression node with its source location.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

/// Expression kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Literal(Literal),

    /// Variable reference.
    Name(Name),

    /// Declare `name` in the current scope: `name = value`.
    Bind { name: Name, value: Box<Expr> },

    /// Overwrite the nearest existing binding of `name`: `name <- value`.
    Assign { name: Name, value: Box<Expr> },

    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    Unary { op: UnaryOp, operand: Box<Expr> },

    /// `if cond then_branch else else_branch`
    If {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Option<Box<Expr>>,
    },

    /// `loop cond body`
    Loop { cond: Box<Expr>, body: Box<Expr> },

    /// `{ a b c }`
    Block(Vec<Expr>),

    /// `(a b) => body`
    Function { params: Rc<[Name]>, body: Rc<Expr> },

    Call { callee: Box<Expr>, args: Vec<Expr> },

    /// `[a b c]`
    Sequence(Vec<Expr>),

    /// `[a = 1  b = 2]`
    Record(Vec<(Name, Expr)>),

    /// `base.[index]`
    Index { base: Box<Expr>, index: Box<Expr> },
}

impl ExprKind {
    /// Short name of the node kind, for traces and debugging.
    pub const fn label(&self) -> &'static str {
        match self {
            ExprKind::Literal(_) => "literal",
            ExprKind::Name(_) => "name",
            ExprKind::Bind { .. } => "bind",
            ExprKind::Assign { .. } => "assign",
            ExprKind::Binary { .. } => "binary",
            ExprKind::Unary { .. } => "unary",
            ExprKind::If { .. } => "if",
            ExprKind::Loop { .. } => "loop",
            ExprKind::Block(_) => "block",
            ExprKind::Function { .. } => "function",
            ExprKind::Call { .. } => "call",
            ExprKind::Sequence(_) => "sequence",
            ExprKind::Record(_) => "record",
            ExprKind::Index { .. } => "index",
        }
    }
}

// Deep trees are freed from a work list; recursive drop glue would overflow
// the native stack on long nesting chains.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.kind.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.kind.detach_children(&mut pending);
        }
    }
}

impl ExprKind {
    /// Move owned children into `out`, leaving leaves in their place.
    /// A shared function body is left alone.
    fn detach_children(&mut self, out: &mut Vec<Expr>) {
        match self {
            ExprKind::Literal(_) | ExprKind::Name(_) => {}
            ExprKind::Bind { value, .. } | ExprKind::Assign { value, .. } => out.push(take(value)),
            ExprKind::Binary { left, right, .. } => {
                out.push(take(left));
                out.push(take(right));
            }
            ExprKind::Unary { operand, .. } => out.push(take(operand)),
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                out.push(take(cond));
                out.push(take(then_branch));
                if let Some(else_branch) = else_branch {
                    out.push(take(else_branch));
                }
            }
            ExprKind::Loop { cond, body } => {
                out.push(take(cond));
                out.push(take(body));
            }
            ExprKind::Block(items) | ExprKind::Sequence(items) => out.append(items),
            ExprKind::Function { body, .. } => {
                if let Some(body) = Rc::get_mut(body) {
                    out.push(take(body));
                }
            }
            ExprKind::Call { callee, args } => {
                out.push(take(callee));
                out.append(args);
            }
            ExprKind::Record(fields) => out.extend(fields.drain(..).map(|(_, expr)| expr)),
            ExprKind::Index { base, index } => {
                out.push(take(base));
                out.push(take(index));
            }
        }
    }
}

fn take(slot: &mut Expr) -> Expr {
    std::mem::replace(slot, Expr::void())
}

// Builders
//
// Synthesized nodes carry `Span::DUMMY`; attach a real location with
// `with_span`.

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    fn synth(kind: ExprKind) -> Self {
        Expr::new(kind, Span::DUMMY)
    }

    pub fn literal(lit: Literal) -> Self {
        Self::synth(ExprKind::Literal(lit))
    }

    pub fn number(n: f64) -> Self {
        Self::literal(Literal::Number(n))
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::literal(Literal::Text(s.into()))
    }

    pub fn boolean(b: bool) -> Self {
        Self::literal(Literal::Bool(b))
    }

    pub fn void() -> Self {
        Self::literal(Literal::Void)
    }

    pub fn name(name: Name) -> Self {
        Self::synth(ExprKind::Name(name))
    }

    pub fn bind(name: Name, value: Expr) -> Self {
        Self::synth(ExprKind::Bind {
            name,
            value: Box::new(value),
        })
    }

    pub fn assign(name: Name, value: Expr) -> Self {
        Self::synth(ExprKind::Assign {
            name,
            value: Box::new(value),
        })
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Self::synth(ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Self::synth(ExprKind::Unary {
            op,
            operand: Box::new(operand),
        })
    }

    pub fn if_then(cond: Expr, then_branch: Expr) -> Self {
        Self::synth(ExprKind::If {
            cond: Box::new(cond),
            then_branch: Box::new(then_branch),
            else_branch: None,
        })
    }

    pub fn if_else(cond: Expr, then_branch: Expr, else_branch: Expr) -> Self {
        Self::synth(ExprKind::If {
            cond: Box::new(cond),
            then_branch: Box::new(then_branch),
            else_branch: Some(Box::new(else_branch)),
        })
    }

    pub fn loop_while(cond: Expr, body: Expr) -> Self {
        Self::synth(ExprKind::Loop {
            cond: Box::new(cond),
            body: Box::new(body),
        })
    }

    pub fn block(stmts: Vec<Expr>) -> Self {
        Self::synth(ExprKind::Block(stmts))
    }

    pub fn function(params: Vec<Name>, body: Expr) -> Self {
        Self::synth(ExprKind::Function {
            params: params.into(),
            body: Rc::new(body),
        })
    }

    pub fn call(callee: Expr, args: Vec<Expr>) -> Self {
        Self::synth(ExprKind::Call {
            callee: Box::new(callee),
            args,
        })
    }

    pub fn sequence(items: Vec<Expr>) -> Self {
        Self::synth(ExprKind::Sequence(items))
    }

    pub fn record(fields: Vec<(Name, Expr)>) -> Self {
        Self::synth(ExprKind::Record(fields))
    }

    pub fn index(base: Expr, index: Expr) -> Self {
        Self::synth(ExprKind::Index {
            base: Box::new(base),
            index: Box::new(index),
        })
    }
}
