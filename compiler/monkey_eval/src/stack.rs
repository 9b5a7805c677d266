//! Stack growth for deep recursion.
//!
//! Every expression evaluation goes through [`ensure_sufficient_stack`], so a
//! deeply nested or deeply recursive Monkey program grows the native stack in
//! segments instead of overflowing the thread's initial stack. Truly
//! unbounded recursion still exhausts memory eventually; the optional call
//! depth limit on `InterpreterBuilder` turns that into an `EvalError`.

/// Grow the stack when less than this much remains.
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
#[cfg(not(target_arch = "wasm32"))]
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if the red zone has been reached.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
