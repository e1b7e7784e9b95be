//! Expression translation
//!
//! ```text
//! expression ::= input
//!              | "(" expression ")"
//!              | VariableName
//!              | Number
//! input      ::= "input" ["(" ")"]
//! ```
//!
//! Grouping parentheses are recognized but not emitted; the host expression
//! is always a single call, name, or literal.

use crate::errors::{Expected, TranslateError};
use crate::parser::lexer::{TokenKind, TokenValue};
use crate::parser::parse::{token_text, Parser};
use std::io::Write;

impl<W: Write> Parser<W> {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<(), TranslateError> {
        if self.check(1, TokenKind::Keyword, Some("input"))? {
            return self.parse_input();
        }

        if self.check(1, TokenKind::SyntaxSymbol, Some("("))? {
            self.expect_symbol("(")?;
            self.parse_expression()?;
            self.expect_symbol(")")?;
            return Ok(());
        }

        if self.check(1, TokenKind::VariableName, None)? {
            let token = self.consume_token()?;
            let location = token.location;
            let name = token_text(token);
            self.out.name(&name)?;
            self.resolve(&name, location);
            return Ok(());
        }

        let token = self.consume_token()?;
        match token.value {
            TokenValue::Number(number) => {
                self.out.number(number)?;
                Ok(())
            }
            _ => Err(self.violation(Expected::rule("an expression"), token)),
        }
    }

    /// `input` or `input()`, usable as a statement or an expression
    pub(crate) fn parse_input(&mut self) -> Result<(), TranslateError> {
        self.expect_keyword("input")?;
        if self.check(1, TokenKind::SyntaxSymbol, Some("("))? {
            self.expect_symbol("(")?;
            self.expect_symbol(")")?;
        }
        self.out.input_call()?;
        Ok(())
    }
}
