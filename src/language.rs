//! Language auto-detection
//!
//! This module provides the [`LanguageId`] tag for the languages the
//! beautifier can dispatch, and the [`infer`] heuristic used when the caller
//! has not chosen a language explicitly.
//!
//! # Example
//!
//! ```rust
//! use webfmt::language::{LanguageId, infer};
//!
//! assert_eq!(infer(".box { color: red; }"), LanguageId::Css);
//! assert_eq!(infer("<!DOCTYPE html><body></body>"), LanguageId::Html);
//! assert_eq!(infer("const x = 1"), LanguageId::Javascript);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::printer::Grammar;

/// A language the beautifier knows how to dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LanguageId {
    Javascript,
    Html,
    Css,
}

impl LanguageId {
    /// The grammar the pretty-printing service should parse this language with.
    pub fn grammar(self) -> Grammar {
        match self {
            LanguageId::Javascript => Grammar::Script,
            LanguageId::Html => Grammar::Markup,
            LanguageId::Css => Grammar::Stylesheet,
        }
    }

    /// Map a file extension to a language, if it is one the beautifier handles.
    pub fn from_extension(ext: &str) -> Option<LanguageId> {
        match ext {
            "js" | "mjs" | "cjs" | "jsx" => Some(LanguageId::Javascript),
            "html" | "htm" => Some(LanguageId::Html),
            "css" => Some(LanguageId::Css),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LanguageId::Javascript => "javascript",
            LanguageId::Html => "html",
            LanguageId::Css => "css",
        }
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "javascript" | "js" | "jsx" => Ok(LanguageId::Javascript),
            "html" | "htm" => Ok(LanguageId::Html),
            "css" => Ok(LanguageId::Css),
            other => Err(format!(
                "unknown language '{other}' (expected javascript, html, or css)"
            )),
        }
    }
}

/// Guess the language of `text`.
///
/// The checks run in a fixed priority order because the patterns overlap:
/// markup is recognized first, then stylesheets, and everything else is
/// treated as JavaScript. Empty text defaults to JavaScript.
///
/// This is a heuristic, not a grammar check. A JavaScript object literal
/// holding a CSS-like selector string can be misclassified; that imprecision
/// is accepted in exchange for a fast default when no language was chosen.
pub fn infer(text: &str) -> LanguageId {
    if text.is_empty() {
        return LanguageId::Javascript;
    }
    if looks_like_markup(text) {
        return LanguageId::Html;
    }
    if looks_like_stylesheet(text) {
        return LanguageId::Css;
    }
    LanguageId::Javascript
}

fn looks_like_markup(text: &str) -> bool {
    text.contains("<html")
        || text.contains("<!DOCTYPE")
        || (text.contains('<') && text.contains("</") && text.contains('>'))
}

fn looks_like_stylesheet(text: &str) -> bool {
    text.contains('{')
        && text.contains('}')
        && (text.contains('.') || text.contains('#'))
        && text.contains(':')
        && !text.contains("function")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_defaults_to_javascript() {
        assert_eq!(infer(""), LanguageId::Javascript);
    }

    #[test]
    fn doctype_is_html() {
        assert_eq!(infer("<!DOCTYPE html><body></body>"), LanguageId::Html);
    }

    #[test]
    fn paired_tags_are_html() {
        assert_eq!(infer("<div>hi</div>"), LanguageId::Html);
    }

    #[test]
    fn selector_block_is_css() {
        assert_eq!(infer(".box { color: red; }"), LanguageId::Css);
    }

    #[test]
    fn id_selector_is_css() {
        assert_eq!(infer("#nav { margin: 0; }"), LanguageId::Css);
    }

    #[test]
    fn plain_function_is_javascript() {
        assert_eq!(infer("function f() { return 1; }"), LanguageId::Javascript);
    }

    #[test]
    fn function_keyword_blocks_css_classification() {
        // Braces, a dot, and a colon would otherwise satisfy the stylesheet check.
        let text = "function f() { obj.x = 1; return flag ? 1 : 2; }";
        assert_eq!(infer(text), LanguageId::Javascript);
    }

    #[test]
    fn markup_wins_over_stylesheet_shaped_text() {
        assert_eq!(infer("<style>.a{color:red;}</style>"), LanguageId::Html);
    }

    #[test]
    fn extension_mapping() {
        assert_eq!(
            LanguageId::from_extension("jsx"),
            Some(LanguageId::Javascript)
        );
        assert_eq!(LanguageId::from_extension("htm"), Some(LanguageId::Html));
        assert_eq!(LanguageId::from_extension("css"), Some(LanguageId::Css));
        assert_eq!(LanguageId::from_extension("rs"), None);
    }

    #[test]
    fn parses_aliases() {
        assert_eq!("js".parse(), Ok(LanguageId::Javascript));
        assert_eq!("HTML".parse(), Ok(LanguageId::Html));
        assert!("pony".parse::<LanguageId>().is_err());
    }
}
