//! # Introduction
//!
//! transpyle translates programs written in a tiny declare-before-use
//! language into Python, statement by statement, in a single forward pass.
//! The translated program is written out as the parser recognizes each
//! construct; no syntax tree is ever built.
//!
//! ## Translation pipeline
//!
//! ```text
//! Source → Lexer → (lookahead queue) → Parser → Emitter → Python text
//! ```
//!
//! 1. [`parser::lexer`]: pulls one token at a time from the buffered source.
//! 2. [`parser::parse`]: predictive recursive descent over the token stream,
//!    resolving names against a [`parser::scope::SymbolTable`].
//! 3. [`emit`]: formats Python statements into any `io::Write` sink.
//! 4. [`driver`]: file and string entry points.
//! 5. [`ui`]: ratatui-based side-by-side viewer; not part of the stable
//!    library API.
//!
//! ## Errors
//!
//! Lexical and grammar errors are fatal ([`errors::TranslateError`]).
//! Undeclared or redeclared variables are not: they are reported as
//! [`errors::Diagnostic`]s and written into the output as comments.
//!
//! ## Example
//!
//! ```
//! use transpyle::config::TranslateOptions;
//! use transpyle::driver::translate_str;
//!
//! let options = TranslateOptions::default().without_header().without_annotations();
//! let (python, _) = translate_str("declare int x\nx = 5\nprint x\n", &options).unwrap();
//! assert_eq!(python, "x = 0\nx = 5\nprint(x)\n");
//! ```

pub mod config;
pub mod driver;
pub mod emit;
pub mod errors;
pub mod parser;
pub mod ui;
