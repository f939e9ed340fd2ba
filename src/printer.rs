//! Pretty-printing service integration
//!
//! This module provides the seam between the dispatcher and the external
//! pretty-printing service that does the actual formatting work. The
//! [`PrettyPrinter`] trait describes the capability; [`PrettierCli`] is the
//! bundled implementation, an adapter that drives a [prettier] executable
//! over stdin/stdout. Embedding callers can supply their own implementation
//! instead (an in-process formatter, a networked one behind a timeout, a
//! test stub).
//!
//! [prettier]: https://prettier.io/
//!
//! # Example
//!
//! ```rust,no_run
//! use webfmt::printer::{Grammar, PrettierCli, PrettyPrinter, StyleOptions};
//!
//! let printer = PrettierCli::new();
//! let formatted = printer
//!     .format("const x=1", Grammar::Script, &StyleOptions::default())
//!     .unwrap();
//! assert!(formatted.contains("const x = 1"));
//! ```
//!
//! # Note
//!
//! The service call is synchronous and is awaited to completion. No retry is
//! attempted here; the dispatcher treats a single failure as final and moves
//! on to its fallback path.

use std::ffi::OsString;
use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};
use once_cell::sync::Lazy;

/// Program used for formatting unless overridden via the `PRETTIER`
/// environment variable.
///
/// Resolved once and reused for every [`PrettierCli`] constructed with
/// [`PrettierCli::new`].
static PRETTIER_PROGRAM: Lazy<OsString> =
    Lazy::new(|| std::env::var_os("PRETTIER").unwrap_or_else(|| OsString::from("prettier")));

/// The syntax ruleset the service should parse input with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grammar {
    Script,
    Markup,
    Stylesheet,
}

impl Grammar {
    /// Name of the service-side parser for this grammar.
    pub fn parser_name(self) -> &'static str {
        match self {
            Grammar::Script => "babel",
            Grammar::Markup => "html",
            Grammar::Stylesheet => "css",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuoteStyle {
    Single,
    Double,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrailingComma {
    None,
    Es5,
    All,
}

impl TrailingComma {
    fn as_str(self) -> &'static str {
        match self {
            TrailingComma::None => "none",
            TrailingComma::Es5 => "es5",
            TrailingComma::All => "all",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrowParens {
    Always,
    Avoid,
}

impl ArrowParens {
    fn as_str(self) -> &'static str {
        match self {
            ArrowParens::Always => "always",
            ArrowParens::Avoid => "avoid",
        }
    }
}

/// Style configuration handed to the pretty-printing service.
///
/// The configuration is applied uniformly regardless of the resolved
/// language and is never mutated mid-call. [`StyleOptions::default`] is the
/// fixed playground style: semicolons on, single quotes, ES5 trailing
/// commas, 80-column width, 2-space indentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleOptions {
    pub use_semicolons: bool,
    pub quote_style: QuoteStyle,
    pub trailing_comma: TrailingComma,
    pub print_width: u32,
    pub tab_width: u32,
    pub use_tabs: bool,
    pub bracket_spacing: bool,
    pub arrow_parens: ArrowParens,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            use_semicolons: true,
            quote_style: QuoteStyle::Single,
            trailing_comma: TrailingComma::Es5,
            print_width: 80,
            tab_width: 2,
            use_tabs: false,
            bracket_spacing: true,
            arrow_parens: ArrowParens::Always,
        }
    }
}

/// Capability of the external pretty-printing service.
///
/// Implementations parse `text` with the requested grammar and return the
/// fully formatted result, or an error carrying a human-readable message
/// (typically the service's own syntax-error report).
pub trait PrettyPrinter {
    fn format(&self, text: &str, grammar: Grammar, style: &StyleOptions) -> Result<String>;
}

/// Adapter that drives a `prettier` executable.
///
/// Source text is piped through the child's stdin and the formatted result
/// is read from its stdout. [`StyleOptions`] is mapped onto the tool's
/// command-line flags by [`style_args`]. A non-zero exit status is reported
/// as an error carrying the tool's stderr output.
pub struct PrettierCli {
    program: OsString,
}

impl PrettierCli {
    /// Adapter using the program named by `PRETTIER`, or `prettier` on the
    /// search path.
    pub fn new() -> PrettierCli {
        PrettierCli {
            program: PRETTIER_PROGRAM.clone(),
        }
    }

    /// Adapter using a specific executable.
    pub fn with_program(program: impl Into<OsString>) -> PrettierCli {
        PrettierCli {
            program: program.into(),
        }
    }
}

impl Default for PrettierCli {
    fn default() -> Self {
        Self::new()
    }
}

impl PrettyPrinter for PrettierCli {
    fn format(&self, text: &str, grammar: Grammar, style: &StyleOptions) -> Result<String> {
        let mut child = Command::new(&self.program)
            .args(style_args(grammar, style))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("failed to launch {}", self.program.to_string_lossy()))?;

        {
            let mut stdin = child
                .stdin
                .take()
                .context("failed to open formatter stdin")?;
            stdin
                .write_all(text.as_bytes())
                .context("failed to stream source text to the formatter")?;
        }

        let output = child
            .wait_with_output()
            .context("failed to wait for the formatter")?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = stderr.trim();
            if detail.is_empty() {
                bail!(
                    "{} exited with {}",
                    self.program.to_string_lossy(),
                    output.status
                );
            }
            bail!("{}", detail);
        }
        String::from_utf8(output.stdout).context("formatter produced non-UTF-8 output")
    }
}

/// Map a grammar and style configuration onto the service's argv.
///
/// Pure function, kept separate from the process plumbing so the flag
/// mapping can be checked without a `prettier` installation.
///
/// ```rust
/// use webfmt::printer::{Grammar, StyleOptions, style_args};
///
/// let args = style_args(Grammar::Stylesheet, &StyleOptions::default());
/// assert_eq!(args[0..2], ["--parser", "css"]);
/// ```
pub fn style_args(grammar: Grammar, style: &StyleOptions) -> Vec<String> {
    let mut args = vec![
        "--parser".to_owned(),
        grammar.parser_name().to_owned(),
        "--print-width".to_owned(),
        style.print_width.to_string(),
        "--tab-width".to_owned(),
        style.tab_width.to_string(),
        "--trailing-comma".to_owned(),
        style.trailing_comma.as_str().to_owned(),
        "--arrow-parens".to_owned(),
        style.arrow_parens.as_str().to_owned(),
    ];
    if matches!(style.quote_style, QuoteStyle::Single) {
        args.push("--single-quote".to_owned());
    }
    if !style.use_semicolons {
        args.push("--no-semi".to_owned());
    }
    if style.use_tabs {
        args.push("--use-tabs".to_owned());
    }
    if !style.bracket_spacing {
        args.push("--no-bracket-spacing".to_owned());
    }
    args
}
