//! Format dispatch
//!
//! This is the entry point tying the other modules together: given raw
//! source text and an optional declared language, [`dispatch`] resolves the
//! language to format as, invokes the pretty-printing service, and recovers
//! from a service failure with a per-language syntactic fallback. The
//! result is always a [`DispatchResult`] value; no error escapes the
//! component boundary, so a caller can always render something
//! deterministic.
//!
//! The dispatcher is a pure, stateless, reentrant function. The printer,
//! style configuration, and declared language are explicit parameters; there
//! is no shared mutable state between calls, and overlapping requests are
//! the caller's concern (queue or discard, as it sees fit).
//!
//! # Example
//!
//! ```rust
//! use webfmt::dispatch::dispatch;
//! use webfmt::printer::{Grammar, PrettyPrinter, StyleOptions};
//!
//! struct Passthrough;
//!
//! impl PrettyPrinter for Passthrough {
//!     fn format(&self, text: &str, _: Grammar, _: &StyleOptions) -> anyhow::Result<String> {
//!         Ok(text.to_owned())
//!     }
//! }
//!
//! let result = dispatch(&Passthrough, "const x = 1", None, &StyleOptions::default());
//! assert_eq!(result.display_text(), "const x = 1");
//! ```

use anyhow::Error;

use crate::fallback;
use crate::language::{LanguageId, infer};
use crate::printer::{PrettyPrinter, StyleOptions};

/// Message reported when dispatch is invoked with nothing to format.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some code first.";

/// Outcome of one dispatch call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchResult {
    /// The service accepted the input; `text` is its output, verbatim.
    Formatted { text: String },
    /// The service was not called or reported an error. `fallback_text` is
    /// what a display pane should show instead; it is non-empty whenever the
    /// input was non-empty.
    Failed {
        message: String,
        fallback_text: String,
    },
}

impl DispatchResult {
    /// The text a display pane should render for this result.
    pub fn display_text(&self) -> &str {
        match self {
            DispatchResult::Formatted { text } => text,
            DispatchResult::Failed { fallback_text, .. } => fallback_text,
        }
    }

    pub fn is_formatted(&self) -> bool {
        matches!(self, DispatchResult::Formatted { .. })
    }
}

/// Format `text` as `declared`, or as whatever [`infer`] resolves when no
/// language was declared.
///
/// Empty text with no declared language is rejected up front without a
/// service call. A declared language forces an attempt even on empty text.
///
/// On success the service output is returned verbatim: no post-processing
/// and no re-validation against the input. The service is trusted
/// completely, so formatting already-formatted text is a fixed point exactly
/// when the service itself is idempotent.
///
/// On failure the per-language fallback from [`crate::fallback`] populates
/// the result, except for JavaScript, which has no structural fallback and
/// surfaces the service message verbatim. A single failed attempt goes
/// straight to fallback; there are no retries.
pub fn dispatch(
    printer: &dyn PrettyPrinter,
    text: &str,
    declared: Option<LanguageId>,
    style: &StyleOptions,
) -> DispatchResult {
    if text.is_empty() && declared.is_none() {
        return DispatchResult::Failed {
            message: EMPTY_INPUT_MESSAGE.to_owned(),
            fallback_text: String::new(),
        };
    }
    let language = declared.unwrap_or_else(|| infer(text));
    match printer.format(text, language.grammar(), style) {
        Ok(text) => DispatchResult::Formatted { text },
        Err(error) => recover(text, language, error),
    }
}

/// Build the per-language fallback result for a service failure.
fn recover(text: &str, language: LanguageId, error: Error) -> DispatchResult {
    let message = error.to_string();
    let rewritten = match language {
        LanguageId::Html => fallback::reindent_markup(text),
        LanguageId::Css => fallback::reindent_stylesheet(text),
        LanguageId::Javascript => {
            let fallback_text = format!("Error: {message}");
            return DispatchResult::Failed {
                message,
                fallback_text,
            };
        }
    };
    match rewritten {
        Ok(fallback_text) => DispatchResult::Failed {
            message,
            fallback_text,
        },
        Err(inner) => {
            let message = format!("Failed to beautify code. {inner}");
            let fallback_text = format!("Error: {message}");
            DispatchResult::Failed {
                message,
                fallback_text,
            }
        }
    }
}
