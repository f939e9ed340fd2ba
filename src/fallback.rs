//! Syntactic fallback rewrites
//!
//! When the pretty-printing service rejects its input, the dispatcher falls
//! back to the rewrites in this module so the display pane still receives
//! something readable. These are deterministic, non-semantic text
//! transforms: they have no syntax awareness and make no attempt to validate
//! the input. Each one is a short sequence of explicit rewrite steps.

use anyhow::{Result, bail};

/// Re-indent markup without parsing it.
///
/// Adjacent tags (`><`) are split onto separate lines, the whole text is
/// stripped of leading and trailing whitespace, and every line is trimmed
/// independently.
pub fn reindent_markup(text: &str) -> Result<String> {
    let split = text.replace("><", ">\n<");
    let lines: Vec<&str> = split.trim().lines().map(str::trim).collect();
    ensure_populated(text, lines.join("\n"))
}

/// Re-indent a stylesheet without parsing it.
///
/// Declaration blocks are broken open (`{` starts an indented line, `;` ends
/// one, `}` closes the block on its own line) and spacing around `:` and
/// after `,` is normalized.
pub fn reindent_stylesheet(text: &str) -> Result<String> {
    let out = break_blocks(text);
    let out = normalize_around(&out, ':', ": ");
    let out = normalize_after(&out, ',', ", ");
    ensure_populated(text, tidy_lines(&out))
}

/// Rewrite `{`, `;`, and `}` so each declaration sits on its own
/// two-space-indented line.
fn break_blocks(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for ch in text.chars() {
        match ch {
            '{' => {
                pop_horizontal_whitespace(&mut out);
                if !out.is_empty() && !out.ends_with('\n') {
                    out.push(' ');
                }
                out.push_str("{\n  ");
            }
            ';' => {
                pop_horizontal_whitespace(&mut out);
                out.push_str(";\n  ");
            }
            '}' => {
                pop_horizontal_whitespace(&mut out);
                out.push_str("\n}");
            }
            _ => out.push(ch),
        }
    }
    out
}

fn pop_horizontal_whitespace(out: &mut String) {
    while out.ends_with(' ') || out.ends_with('\t') {
        out.pop();
    }
}

/// Collapse horizontal whitespace on both sides of `needle` into
/// `replacement`.
fn normalize_around(text: &str, needle: char, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == needle {
            pop_horizontal_whitespace(&mut out);
            out.push_str(replacement);
            while matches!(chars.peek(), Some(' ' | '\t')) {
                chars.next();
            }
        } else {
            out.push(ch);
        }
    }
    out
}

/// Collapse horizontal whitespace after `needle` into `replacement`.
fn normalize_after(text: &str, needle: char, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == needle {
            out.push_str(replacement);
            while matches!(chars.peek(), Some(' ' | '\t')) {
                chars.next();
            }
        } else {
            out.push(ch);
        }
    }
    out
}

/// Drop whitespace-only lines and trailing per-line whitespace.
fn tidy_lines(text: &str) -> String {
    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// A fallback must keep the display pane populated: empty output for
/// non-empty input is an internal failure, not a result.
fn ensure_populated(input: &str, out: String) -> Result<String> {
    if out.is_empty() && !input.is_empty() {
        bail!("fallback rewrite produced no output");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_splits_adjacent_tags() {
        let out = reindent_markup("<div><span>hi</span></div>").unwrap();
        assert_eq!(out, "<div>\n<span>hi</span>\n</div>");
    }

    #[test]
    fn markup_trims_every_line() {
        let out = reindent_markup("  <ul>\n   <li>a</li></ul>  ").unwrap();
        assert_eq!(out, "<ul>\n<li>a</li>\n</ul>");
        assert!(out.lines().all(|line| line.trim() == line));
    }

    #[test]
    fn stylesheet_breaks_blocks_and_normalizes_spacing() {
        let out = reindent_stylesheet(".a{color:red;margin:0;}").unwrap();
        assert_eq!(out, ".a {\n  color: red;\n  margin: 0;\n}");
    }

    #[test]
    fn stylesheet_collapses_existing_spacing() {
        let out = reindent_stylesheet(".a  {color :red ;}").unwrap();
        assert_eq!(out, ".a {\n  color: red;\n}");
    }

    #[test]
    fn stylesheet_normalizes_comma_spacing() {
        let out = reindent_stylesheet("h1,h2{font-weight:bold;}").unwrap();
        assert_eq!(out, "h1, h2 {\n  font-weight: bold;\n}");
    }

    #[test]
    fn whitespace_only_input_is_an_internal_failure() {
        assert!(reindent_markup("   ").is_err());
        assert!(reindent_stylesheet(" \t ").is_err());
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(reindent_markup("").unwrap(), "");
        assert_eq!(reindent_stylesheet("").unwrap(), "");
    }
}
