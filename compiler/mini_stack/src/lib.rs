//! Stack growth for the recursive-descent parser.
//!
//! Every nonterminal of the mini grammar is one native call, and a
//! parenthesised factor re-enters `expr -> term -> factor`, so each nesting
//! level of `x = ((((1))))` adds three frames. The parser's depth guard and
//! the `ab-cd` character recognizer wrap every recursive step in
//! [`ensure_sufficient_stack`], so the `--max-depth` limit decides how deep a
//! program may nest, not the thread's stack size.
//!
//! On `wasm32` there is no `stacker` support and the call is a passthrough.

/// Stack that must remain free when a nonterminal is entered.
///
/// Checks happen once per nonterminal, so this has to hold everything that
/// runs between two checks: one grammar method, its cursor calls, and a
/// `tracing` event being recorded by the installed subscriber. None of
/// those keep more than a few kilobytes live.
const RED_ZONE: usize = 64 * 1024;

/// Size of each new stack segment.
///
/// One segment holds several thousand nonterminal frames, so a program at
/// the default depth limit of 1024 needs at most a couple of segments.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, moving to a fresh stack segment first if less than
/// [`RED_ZONE`] bytes remain on the current one.
///
/// ```text
/// self.depth += 1;
/// let result = ensure_sufficient_stack(|| f(self));
/// self.depth -= 1;
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
