//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct: the lookahead queue over the
//! lexer, the symbol table, the output emitter, and the helper methods the
//! grammar rules are built from.
//!
//! # Parser Architecture
//!
//! The parser is predictive recursive descent with no backtracking. It never
//! builds a tree; each rule writes its translation through the
//! [`Emitter`] as soon as it has recognized enough input.
//! - This module: Parser struct, lookahead, `expect`, and the file rule
//! - `statements`: `print`, `input`, declarations, assignments
//! - `expressions`: the expression rule and `input` calls
//!
//! # Lookahead
//!
//! Tokens are pulled from the lexer lazily. `look_ahead(k)` fills the queue
//! only up to `k` tokens; `consume_token` pops the oldest one, in FIFO order.

use crate::config::TranslateOptions;
use crate::emit::Emitter;
use crate::errors::{Diagnostic, Expected, GrammarViolation, TranslateError};
use crate::parser::lexer::{Lexer, SourceLocation, Token, TokenKind, TokenValue};
use crate::parser::scope::SymbolTable;
use std::collections::VecDeque;
use std::io::Write;
use tracing::warn;

/// Outcome of a successful translation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationSummary {
    pub statements: usize,
    /// Lines written, header included.
    pub lines: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Recursive descent translator, bound to one source text and one sink.
pub struct Parser<W: Write> {
    pub(crate) lexer: Lexer,
    pub(crate) lookahead: VecDeque<Token>,
    pub(crate) symbols: SymbolTable,
    pub(crate) out: Emitter<W>,
    pub(crate) options: TranslateOptions,
    /// Diagnostics raised by the statement being translated.
    pub(crate) pending: Vec<Diagnostic>,
    pub(crate) summary: TranslationSummary,
}

impl<W: Write> Parser<W> {
    pub fn new(source: &str, out: W, options: TranslateOptions) -> Self {
        Self {
            lexer: Lexer::with_policy(source, options.keyword_policy),
            lookahead: VecDeque::new(),
            symbols: SymbolTable::new(),
            out: Emitter::new(out, options.annotate_declarations),
            options,
            pending: Vec::new(),
            summary: TranslationSummary::default(),
        }
    }

    /// Translate the whole source, writing Python to the sink.
    ///
    /// Consumes the parser: a parser translates exactly one file.
    pub fn translate_file(mut self) -> Result<(TranslationSummary, W), TranslateError> {
        self.symbols.push_scope();
        if self.options.emit_header {
            self.out.header()?;
        }
        self.parse_file()?;
        self.symbols.pop_scope();
        debug_assert_eq!(self.symbols.depth(), 0);
        self.out.flush()?;
        self.summary.lines = self.out.lines();

        Ok((self.summary, self.out.into_inner()))
    }

    // File := StreamStart Statement* StreamEnd
    fn parse_file(&mut self) -> Result<(), TranslateError> {
        self.expect(Some(TokenKind::StreamStart), None)?;

        while !self.check(1, TokenKind::StreamEnd, None)? {
            self.parse_statement()?;
        }

        self.expect(Some(TokenKind::StreamEnd), None)?;
        Ok(())
    }

    // ===== Helper methods =====

    /// The `k`-th unconsumed token (1-based), pulling from the lexer only as
    /// far as needed.
    pub(crate) fn look_ahead(&mut self, k: usize) -> Result<&Token, TranslateError> {
        let k = k.max(1);
        while self.lookahead.len() < k {
            let token = self.lexer.next_token()?;
            self.lookahead.push_back(token);
        }
        Ok(&self.lookahead[k - 1])
    }

    pub(crate) fn check(
        &mut self,
        k: usize,
        kind: TokenKind,
        value: Option<&str>,
    ) -> Result<bool, TranslateError> {
        Ok(self.look_ahead(k)?.is(kind, value))
    }

    pub(crate) fn consume_token(&mut self) -> Result<Token, TranslateError> {
        match self.lookahead.pop_front() {
            Some(token) => Ok(token),
            None => Ok(self.lexer.next_token()?),
        }
    }

    /// Consume the next token and fail unless it matches. `None` is a
    /// wildcard for either half.
    pub(crate) fn expect(
        &mut self,
        kind: Option<TokenKind>,
        value: Option<&str>,
    ) -> Result<Token, TranslateError> {
        let token = self.consume_token()?;

        let kind_ok = kind.map_or(true, |k| token.kind == k);
        let value_ok = value.map_or(true, |v| token.text() == Some(v));
        if kind_ok && value_ok {
            return Ok(token);
        }

        let expected = Expected {
            kind,
            value: value.map(str::to_string),
            description: None,
        };
        Err(self.violation(expected, token))
    }

    pub(crate) fn expect_symbol(&mut self, symbol: &str) -> Result<Token, TranslateError> {
        self.expect(Some(TokenKind::SyntaxSymbol), Some(symbol))
    }

    pub(crate) fn expect_keyword(&mut self, keyword: &str) -> Result<Token, TranslateError> {
        self.expect(Some(TokenKind::Keyword), Some(keyword))
    }

    /// Build a grammar violation, attaching the next few tokens as context.
    pub(crate) fn violation(&mut self, expected: Expected, found: Token) -> TranslateError {
        let mut context = Vec::new();

        if !found.is_stream_end() {
            for k in 1..=self.options.error_context {
                let Ok(token) = self.look_ahead(k) else {
                    break;
                };
                let token = token.clone();
                let done = token.is_stream_end();
                context.push(token);
                if done {
                    break;
                }
            }
        }

        TranslateError::Grammar(GrammarViolation {
            expected,
            found,
            context,
        })
    }

    /// Record an undeclared-variable diagnostic unless `name` resolves.
    pub(crate) fn resolve(&mut self, name: &str, location: SourceLocation) {
        if !self.symbols.is_declared(name) {
            warn!(name, line = location.line, column = location.column, "undeclared variable");
            self.pending.push(Diagnostic::undeclared(name, location));
        }
    }

    /// Terminate the current statement's output line.
    pub(crate) fn finish_statement(&mut self) -> Result<(), TranslateError> {
        let diagnostics = std::mem::take(&mut self.pending);
        self.out.end_statement(&diagnostics)?;
        self.summary.diagnostics.extend(diagnostics);
        self.summary.statements += 1;
        Ok(())
    }
}

/// Text payload of an identifier, keyword, or type-name token.
pub(crate) fn token_text(token: Token) -> String {
    match token.value {
        TokenValue::Text(text) => text,
        _ => String::new(),
    }
}
