//! Stack growth for deeply nested programs.
//!
//! The reader, the evaluator and the printer all recurse once per level of
//! nesting (and the evaluator once per call). None of them impose a depth
//! limit, so each recursive step goes through [`ensure_sufficient_stack`],
//! which moves execution onto a freshly allocated segment when the current
//! one is nearly used up.
//!
//! - **Native targets**: `stacker::maybe_grow`.
//! - **WASM targets**: calls the closure directly.
//!
//! A program that recurses forever still fails; it just runs out of memory
//! instead of overflowing a fixed-size thread stack.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
///
/// ```text
/// fn eval(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
///     ensure_sufficient_stack(|| self.eval_inner(expr, env))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
