//! Source text parser and translator
//!
//! This module turns source text into Python in one forward pass:
//! - [`lexer`]: Tokenization (source text → tokens, pulled on demand)
//! - [`parse`]: The [`parse::Parser`] struct, lookahead queue, and helpers
//! - `statements` / `expressions`: grammar rules, emitting as they recognize
//! - [`scope`]: The symbol table used for declare-before-use checking
//!
//! # Language
//!
//! - Types: `boolean`, `char`, `int`, `float`, `String`
//! - Statements: declarations (`[declare] int x`), assignments (`x = e`),
//!   `print e`, `input` / `input()`
//! - Expressions: names, number literals, `input`, parenthesized expressions
//!
//! # Parser Implementation
//!
//! Hand-written predictive recursive descent with one token of lookahead.
//! No syntax tree is built and no input is ever re-read.

mod expressions;
pub mod lexer;
pub mod parse;
pub mod scope;
mod statements;
