//! Stack safety for the recursive tree walker.
//!
//! The evaluator recurses once per nested node, and a program can nest
//! blocks, calls and operators arbitrarily deep. Every recursive step runs
//! through [`ensure_sufficient_stack`], which grows the native stack before
//! it runs out instead of letting the host abort.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker` allocates a new stack segment on demand.
//! - **WASM targets**: plain passthrough; the evaluator's call depth limit is
//!   the only guard there.
//!
//! # Configuration
//!
//! - **Red zone**: 128KB. Below this much remaining stack, grow.
//! - **Segment size**: 2MB per growth.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn eval(&mut self, expr: &Expr, scope: &Scope) -> EvalResult {
///     ensure_sufficient_stack(|| self.eval_inner(expr, scope))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM version: call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Approximate stack space left on the current segment, if known.
///
/// Used by the evaluator's trace output when a depth limit trips.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn remaining_stack() -> Option<usize> {
    stacker::remaining_stack()
}

/// WASM version: unknown.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn remaining_stack() -> Option<usize> {
    None
}
