//! Python code emission
//!
//! The parser never formats host code itself; it calls the [`Emitter`], which
//! appends text to any [`Write`] sink in program order. Every statement ends
//! with exactly one newline, preceded by a trailing comment for each
//! diagnostic raised while translating it.

use crate::errors::Diagnostic;
use crate::parser::lexer::Number;
use crate::parser::scope::DeclaredType;
use std::borrow::Cow;
use std::io::{self, Write};

pub const HEADER: &str = "# Generated by transpyle. Do not edit.";

/// Python reserved words. Source identifiers are alphanumeric only, so
/// appending `_` to one of these can never collide with another source name.
const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise",
    "return", "try", "while", "with", "yield",
];

/// The Python identifier used for a source variable.
pub fn host_name(name: &str) -> Cow<'_, str> {
    if PYTHON_KEYWORDS.contains(&name) {
        Cow::Owned(format!("{}_", name))
    } else {
        Cow::Borrowed(name)
    }
}

pub struct Emitter<W: Write> {
    out: W,
    annotate_declarations: bool,
    lines: usize,
}

impl<W: Write> Emitter<W> {
    pub fn new(out: W, annotate_declarations: bool) -> Self {
        Emitter {
            out,
            annotate_declarations,
            lines: 0,
        }
    }

    pub fn header(&mut self) -> io::Result<()> {
        self.write(HEADER)?;
        self.newline()
    }

    pub fn print_open(&mut self) -> io::Result<()> {
        self.write("print(")
    }

    pub fn print_close(&mut self) -> io::Result<()> {
        self.write(")")
    }

    pub fn input_call(&mut self) -> io::Result<()> {
        self.write("input()")
    }

    pub fn name(&mut self, name: &str) -> io::Result<()> {
        self.write(&host_name(name))
    }

    pub fn number(&mut self, number: Number) -> io::Result<()> {
        write!(self.out, "{}", number)
    }

    pub fn assign(&mut self) -> io::Result<()> {
        self.write(" = ")
    }

    /// `name = <default>`, optionally annotated with the declared type.
    ///
    /// Defaults are literals, so a source variable named `int` or `bool`
    /// cannot change what a later declaration produces.
    pub fn declaration(&mut self, name: &str, ty: DeclaredType) -> io::Result<()> {
        write!(self.out, "{} = {}", host_name(name), ty.default_literal())?;
        if self.annotate_declarations {
            write!(self.out, "  # declare {}: {}", name, ty)?;
        }
        Ok(())
    }

    /// Close the current statement: one comment per diagnostic, then `\n`.
    pub fn end_statement(&mut self, diagnostics: &[Diagnostic]) -> io::Result<()> {
        for diagnostic in diagnostics {
            write!(self.out, "  # warning: {}", diagnostic)?;
        }
        self.newline()
    }

    /// Number of complete lines written so far.
    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    fn newline(&mut self) -> io::Result<()> {
        self.lines += 1;
        self.write("\n")
    }
}
