// src/rules/callback.rs
//! Callback nesting estimate.
//!
//! Each literal `function` opens a level and each `}` closes one (never
//! below zero). Braces are not scope-aware, so `}` closing an `if` or an
//! object literal also pops a level, and `function` inside a string or an
//! identifier such as `functionName` pushes one. The result is an estimate.

const KEYWORD: &[u8] = b"function";

/// Maximum nesting depth observed while scanning `text`.
// Indexing is safe: the loop keeps i < bytes.len().
#[must_use]
#[allow(clippy::indexing_slicing)]
pub fn max_depth(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut max = 0usize;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i..].starts_with(KEYWORD) {
            depth += 1;
            max = max.max(depth);
            i += KEYWORD.len();
            continue;
        }
        if bytes[i] == b'}' {
            depth = depth.saturating_sub(1);
        }
        i += 1;
    }

    max
}

#[cfg(test)]
mod tests {
    use super::max_depth;

    #[test]
    fn flat_functions_stay_shallow() {
        assert_eq!(max_depth("function a() {}\nfunction b() {}"), 1);
    }

    #[test]
    fn nested_callbacks_accumulate() {
        let code = "a(function() { b(function() { c(function() { d(function() { }); }); }); });";
        assert_eq!(max_depth(code), 4);
    }

    #[test]
    fn stray_braces_floor_at_zero() {
        assert_eq!(max_depth("}}}} function() {"), 1);
        assert_eq!(max_depth(""), 0);
    }

    #[test]
    fn non_function_braces_close_levels() {
        // The `if` block's `}` pops the outer function's level.
        let code = "function a() { if (x) { } function b() { } }";
        assert_eq!(max_depth(code), 1);
    }

    #[test]
    fn identifiers_containing_keyword_count() {
        assert_eq!(max_depth("functionName(); functional();"), 2);
    }
}
