//! Error and diagnostic types for translation
//!
//! Two severities exist and are kept apart on purpose:
//!
//! - [`TranslateError`]: fatal. A lexical failure ([`LexError`]) or a
//!   [`GrammarViolation`] aborts the run; output already written is left as is.
//! - [`Diagnostic`]: recoverable. Undeclared or redeclared variables are
//!   annotated in the emitted code and translation continues.

use crate::parser::lexer::{LexError, SourceLocation, Token, TokenKind};
use std::fmt;
use std::io;
use thiserror::Error;

/// Fatal translation errors
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Grammar(#[from] GrammarViolation),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl TranslateError {
    pub fn location(&self) -> Option<SourceLocation> {
        match self {
            TranslateError::Lex(LexError::UnrecognizedInput { location, .. }) => Some(*location),
            TranslateError::Lex(LexError::PrematureEnd { .. }) => None,
            TranslateError::Grammar(violation) => Some(violation.found.location),
            TranslateError::Io(_) => None,
        }
    }
}

/// What a grammar rule required at the point it failed. `None` fields are
/// wildcards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expected {
    pub kind: Option<TokenKind>,
    pub value: Option<String>,
    /// Set when several alternatives were possible, e.g. "a statement".
    pub description: Option<&'static str>,
}

impl Expected {
    pub fn token(kind: TokenKind, value: Option<&str>) -> Self {
        Expected {
            kind: Some(kind),
            value: value.map(str::to_string),
            description: None,
        }
    }

    pub fn rule(description: &'static str) -> Self {
        Expected {
            kind: None,
            value: None,
            description: Some(description),
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(description) = self.description {
            return f.write_str(description);
        }
        match (&self.kind, &self.value) {
            (Some(kind), Some(value)) => write!(f, "{} '{}'", kind, value),
            (Some(kind), None) => write!(f, "any {}", kind),
            (None, Some(value)) => write!(f, "'{}'", value),
            (None, None) => write!(f, "any token"),
        }
    }
}

/// The parser met a token that the current rule does not allow.
#[derive(Debug, Clone, PartialEq)]
pub struct GrammarViolation {
    pub expected: Expected,
    pub found: Token,
    /// Tokens that followed `found`, for context.
    pub context: Vec<Token>,
}

impl fmt::Display for GrammarViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at {}: expected {}, found {}",
            self.found.location, self.expected, self.found
        )?;
        if !self.context.is_empty() {
            write!(f, "\n  upcoming:")?;
            for token in &self.context {
                write!(f, "\n    {} ({})", token, token.location)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for GrammarViolation {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    Undeclared,
    Redeclared,
}

/// A recoverable problem, baked into the translated output as a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub name: String,
    pub location: SourceLocation,
}

impl Diagnostic {
    pub fn undeclared(name: &str, location: SourceLocation) -> Self {
        Diagnostic {
            kind: DiagnosticKind::Undeclared,
            name: name.to_string(),
            location,
        }
    }

    pub fn redeclared(name: &str, location: SourceLocation) -> Self {
        Diagnostic {
            kind: DiagnosticKind::Redeclared,
            name: name.to_string(),
            location,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::Undeclared => write!(f, "variable '{}' is undeclared", self.name),
            DiagnosticKind::Redeclared => write!(f, "variable '{}' redeclared", self.name),
        }
    }
}
