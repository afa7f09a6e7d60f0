//! Stack growth for recursive tree walks.
//!
//! The automaton itself keeps explicit stacks, but folding a recovered
//! tree and printing a syntax tree recurse once per nesting level. Input
//! with tens of thousands of unclosed braces would otherwise overflow the
//! thread stack. Native targets grow the stack on demand through
//! `stacker`; on wasm the call passes straight through.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated segment.
const SEGMENT: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// Wrap the recursive step of a walk:
///
/// ```text
/// fn stmt(&mut self, id: StmtId) {
///     ensure_sufficient_stack(|| self.stmt_inner(id));
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::ensure_sufficient_stack;
    use pretty_assertions::assert_eq;

    #[test]
    fn passes_the_result_through() {
        let result: Result<u8, &str> = ensure_sufficient_stack(|| Ok(7));
        assert_eq!(result, Ok(7));
    }

    #[test]
    fn nesting_far_beyond_the_main_stack() {
        fn depth(n: u32) -> u32 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
        }

        assert_eq!(depth(200_000), 200_000);
    }
}
