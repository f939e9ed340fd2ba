//! # WebFmt - Experimental JavaScript/HTML/CSS Beautifier
//!
//! WebFmt is a beautifier front-end for the three core web languages. It
//! owns no formatting algorithm of its own: tokenizing, AST construction,
//! and pretty-printing are delegated entirely to an external
//! pretty-printing service (by default a [prettier](https://prettier.io/)
//! executable). What this crate implements is the glue with actual design
//! content: language auto-detection, format dispatch with a fixed style
//! configuration, and a per-language syntactic fallback for input the
//! service rejects.
//!
//! ## Status
//!
//! This is an early prototype. The language detection is a fast heuristic,
//! not a grammar check, and the fallback rewrites are deliberately
//! non-semantic. Formatted output is exactly what the external service
//! produces; no correctness verification is performed here.
//!
//! ## Usage
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use webfmt::dispatch::dispatch;
//! use webfmt::printer::{PrettierCli, StyleOptions};
//!
//! let printer = PrettierCli::new();
//! let result = dispatch(&printer, "const x=1", None, &StyleOptions::default());
//! println!("{}", result.display_text());
//! ```
//!
//! Any type implementing [`printer::PrettyPrinter`] can stand in for the
//! bundled `prettier` adapter, which is also how the dispatch logic is
//! tested without an external installation.
//!
//! ### As a CLI Tool
//!
//! The library is also available as a command-line tool. See the `main`
//! module for CLI usage details.
//!
//! ## Modules
//!
//! - [`language`] - Language tags and the auto-detection heuristic
//! - [`printer`] - Pretty-printing service seam and the `prettier` adapter
//! - [`fallback`] - Per-language rewrites applied when the service fails
//! - [`dispatch`] - Dispatch entry point and result type
//!
//! ## Limitations
//!
//! - Language detection can misclassify overlapping inputs (e.g. a
//!   JavaScript object literal holding a CSS-like selector string)
//! - Fallback output is readable, not syntactically validated
//! - The bundled adapter requires a `prettier` executable at runtime

/// Language tags and auto-detection
pub mod language;

/// Pretty-printing service seam and the bundled `prettier` adapter
pub mod printer;

/// Syntactic fallback rewrites for rejected input
pub mod fallback;

/// Format dispatch and its result type
pub mod dispatch;
