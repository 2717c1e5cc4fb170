//! # Clause Formatting
//!
//! String helpers shared by every `repr()` in the crate.
//!
//! gnuplot clauses are whitespace-separated `keyword value` pairs. Builders
//! concatenate optional clauses freely and rely on
//! [`collapse_whitespace`] to clean up the gaps left by empty ones.

/// # Option Clause
///
/// Formats `option value ` with a trailing space, or nothing at all when the
/// value is empty. Omitting empty clauses here keeps callers free of
/// conditionals.
///
/// ## Example
///
/// ```
/// use plotspec::gnuplot::format::option_value;
///
/// assert_eq!(option_value("with", "lines"), "with lines ");
/// assert_eq!(option_value("using", ""), "");
/// ```
pub fn option_value(option: &str, value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    format!("{} {} ", option, value)
}

/// # Single-Quoted String
///
/// Wraps `text` in single quotes. gnuplot does not process backslash escapes
/// inside single quotes; a literal quote is written as two quotes.
///
/// ## Example
///
/// ```
/// use plotspec::gnuplot::format::quoted;
///
/// assert_eq!(quoted("sin(x)"), "'sin(x)'");
/// assert_eq!(quoted("it's"), "'it''s'");
/// ```
pub fn quoted(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

/// Collapse every run of whitespace into a single space.
///
/// Leading and trailing whitespace is collapsed too but not removed, so a
/// fragment ending in a separator still ends in exactly one space.
pub fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}

/// Remove trailing occurrences of `ch`.
#[inline]
pub fn trim_right(s: &str, ch: char) -> &str {
    s.trim_end_matches(ch)
}

/// Format a number the way gnuplot expects it: `2` rather than `2.0`.
///
/// Rust's `Display` for `f64` already prints the shortest representation
/// that round-trips, without a trailing `.0` for integral values.
///
/// Non-finite values pass through as `NaN`, `inf` and `-inf`. gnuplot has
/// no literals for these, so the backend rejects the resulting clause;
/// callers that take numbers from untrusted input should check
/// `f64::is_finite` first.
#[inline]
pub fn number(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_value_skips_empty() {
        assert_eq!(option_value("title", ""), "");
        assert_eq!(option_value("title", "'A'"), "title 'A' ");
    }

    #[test]
    fn test_quoted_doubles_single_quotes() {
        assert_eq!(quoted(""), "''");
        assert_eq!(quoted("Bob's data"), "'Bob''s data'");
        assert_eq!(quoted("say \"hi\""), "'say \"hi\"'");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("a  b   c"), "a b c");
        assert_eq!(collapse_whitespace("lw 2    "), "lw 2 ");
        assert_eq!(collapse_whitespace("  x"), " x");
        assert_eq!(collapse_whitespace("a\t\n b"), "a b");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_trim_right_only_trailing() {
        assert_eq!(trim_right("1:2::", ':'), "1:2");
        assert_eq!(trim_right(":1:2", ':'), ":1:2");
        assert_eq!(trim_right(":::", ':'), "");
    }

    #[test]
    fn test_number() {
        assert_eq!(number(2.0), "2");
        assert_eq!(number(0.5), "0.5");
        assert_eq!(number(-1.25), "-1.25");
    }

    #[test]
    fn test_number_passes_non_finite_through() {
        assert_eq!(number(f64::NAN), "NaN");
        assert_eq!(number(f64::INFINITY), "inf");
        assert_eq!(number(f64::NEG_INFINITY), "-inf");
    }
}
