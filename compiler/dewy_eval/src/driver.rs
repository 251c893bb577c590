//! Run a source string through a parsing frontend and the evaluator.
//!
//! The frontend owns everything textual (tokens, grammar). This module only
//! sequences the three frontend steps, evaluates the resulting tree once in a
//! builtin root scope, and reports the outcome. No I/O happens here.

use dewy_ir::{Expr, StringInterner};

use crate::{EvalError, Interpreter, Scope, Value};

/// The parsing collaborator.
pub trait Frontend {
    type Tokens;
    type Error;

    fn tokenize(&self, source: &str) -> Result<Self::Tokens, Self::Error>;

    /// Rewrite the token stream in place before parsing.
    fn post_process(&self, tokens: &mut Self::Tokens);

    /// Parse the whole program. The root scope is visible so the parser can
    /// consult names that are already bound (builtins).
    fn top_level_parse(&self, tokens: Self::Tokens, scope: &Scope) -> Result<Expr, Self::Error>;
}

/// Failure of `run_source`.
#[derive(Debug, thiserror::Error)]
pub enum RunError<E> {
    #[error("frontend error: {0}")]
    Frontend(E),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Run `source` with default limits.
///
/// Returns `Ok(None)` when the program evaluates to void, so the caller has
/// nothing to display.
pub fn run_source<F: Frontend>(
    frontend: &F,
    source: &str,
    interner: &StringInterner,
) -> Result<Option<Value>, RunError<F::Error>> {
    let mut interpreter = Interpreter::new(interner);
    run_source_with(&mut interpreter, frontend, source)
}

/// Run `source` on a configured interpreter.
pub fn run_source_with<F: Frontend>(
    interpreter: &mut Interpreter<'_>,
    frontend: &F,
    source: &str,
) -> Result<Option<Value>, RunError<F::Error>> {
    let scope = Scope::with_builtins(interpreter.interner());
    let mut tokens = frontend.tokenize(source).map_err(RunError::Frontend)?;
    frontend.post_process(&mut tokens);
    let program = frontend
        .top_level_parse(tokens, &scope)
        .map_err(RunError::Frontend)?;
    tracing::debug!(root = program.kind.label(), "evaluating program");
    let value = interpreter.eval(&program, &scope)?;
    Ok((!value.is_void()).then_some(value))
}
