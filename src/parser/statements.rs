//! Statement translation
//!
//! # Grammar
//!
//! ```text
//! statement   ::= "print" expression
//!               | input
//!               | declaration
//!               | VariableName "=" expression
//! declaration ::= ["declare"] TypeName VariableName
//! ```
//!
//! One token of lookahead picks the alternative; the alternatives are
//! disjoint, so there is never anything to undo.

use crate::errors::{Diagnostic, Expected, TranslateError};
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{token_text, Parser};
use crate::parser::scope::DeclaredType;
use std::io::Write;
use tracing::{debug, warn};

impl<W: Write> Parser<W> {
    /// Parse a statement and emit its line
    pub(crate) fn parse_statement(&mut self) -> Result<(), TranslateError> {
        let location = self.look_ahead(1)?.location;
        debug!(line = location.line, "statement");

        if self.check(1, TokenKind::Keyword, Some("print"))? {
            self.parse_print_statement()?;
        } else if self.check(1, TokenKind::Keyword, Some("input"))? {
            self.parse_input()?;
        } else if self.check(1, TokenKind::TypeName, None)?
            || self.check(1, TokenKind::Keyword, Some("declare"))?
        {
            self.parse_declaration()?;
        } else if self.check(1, TokenKind::VariableName, None)? {
            self.parse_assignment()?;
        } else {
            let found = self.consume_token()?;
            return Err(self.violation(Expected::rule("a statement"), found));
        }

        self.finish_statement()
    }

    fn parse_print_statement(&mut self) -> Result<(), TranslateError> {
        self.expect_keyword("print")?;
        self.out.print_open()?;
        self.parse_expression()?;
        self.out.print_close()?;
        Ok(())
    }

    fn parse_declaration(&mut self) -> Result<(), TranslateError> {
        if self.check(1, TokenKind::Keyword, Some("declare"))? {
            self.expect_keyword("declare")?;
        }

        let type_token = self.expect(Some(TokenKind::TypeName), None)?;
        let Some(ty) = type_token.text().and_then(DeclaredType::from_name) else {
            return Err(self.violation(Expected::token(TokenKind::TypeName, None), type_token));
        };

        let name_token = self.expect(Some(TokenKind::VariableName), None)?;
        let location = name_token.location;
        let name = token_text(name_token);

        if let Some(previous) = self.symbols.declare(&name, ty) {
            warn!(name = %name, %previous, line = location.line, "variable redeclared");
            self.pending.push(Diagnostic::redeclared(&name, location));
        }

        self.out.declaration(&name, ty)?;
        Ok(())
    }

    fn parse_assignment(&mut self) -> Result<(), TranslateError> {
        let target = self.expect(Some(TokenKind::VariableName), None)?;
        let location = target.location;
        let name = token_text(target);

        self.resolve(&name, location);
        self.out.name(&name)?;

        self.expect_symbol("=")?;
        self.out.assign()?;

        self.parse_expression()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::TranslateOptions;
    use crate::errors::{DiagnosticKind, TranslateError};
    use crate::parser::lexer::{SourceLocation, TokenKind};
    use crate::parser::parse::{Parser, TranslationSummary};

    fn translate(source: &str) -> Result<(TranslationSummary, String), TranslateError> {
        let options = TranslateOptions::default().without_header();
        let (summary, out) = Parser::new(source, Vec::new(), options).translate_file()?;
        Ok((summary, String::from_utf8(out).unwrap()))
    }

    fn output(source: &str) -> String {
        translate(source).unwrap().1
    }

    #[test]
    fn test_declare_assign_pr0() {
        assert_eq!(
            output("declare int x\nx = 5\nprint x\n"),
            "x = 0  # declare x: int\nx = 5\nprint(x)\n"
        );
    }

    #[test]
    fn test_declaration_defaults() {
        assert_eq!(
            output("boolean a char b int c float d String e"),
            "a = False  # declare a: boolean\n\
             b = \"\"  # declare b: char\n\
             c = 0  # declare c: int\n\
             d = 0.0  # declare d: float\n\
             e = \"\"  # declare e: String\n"
        );
    }

    #[test]
    fn test_input_statement_forms() {
        assert_eq!(output("input\ninput()\n"), "input()\ninput()\n");
    }

    #[test]
    fn test_undeclared_assignment_is_annotated() {
        let (summary, out) = translate("x = 5\n").unwrap();
        assert_eq!(out, "x = 5  # warning: variable 'x' is undeclared\n");
        assert_eq!(summary.diagnostics.len(), 1);
        assert_eq!(summary.diagnostics[0].kind, DiagnosticKind::Undeclared);
        assert_eq!(summary.diagnostics[0].location, SourceLocation::new(1, 1));
    }

    #[test]
    fn test_undeclared_reference_keeps_line_valid() {
        assert_eq!(
            output("print y"),
            "print(y)  # warning: variable 'y' is undeclared\n"
        );
    }

    #[test]
    fn test_undeclared_on_both_sides() {
        assert_eq!(
            output("a = b"),
            "a = b  # warning: variable 'a' is undeclared  # warning: variable 'b' is undeclared\n"
        );
    }

    #[test]
    fn test_redeclaration_is_annotated() {
        let (summary, out) = translate("int x\nfloat x\n").unwrap();
        assert_eq!(
            out,
            "x = 0  # declare x: int\n\
             x = 0.0  # declare x: float  # warning: variable 'x' redeclared\n"
        );
        assert_eq!(summary.diagnostics[0].kind, DiagnosticKind::Redeclared);
    }

    #[test]
    fn test_use_before_declaration_is_annotated() {
        let out = output("print x\nint x\nprint x\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "print(x)  # warning: variable 'x' is undeclared");
        assert_eq!(lines[2], "print(x)");
    }

    #[test]
    fn test_double_equals_is_grammar_violation() {
        let err = translate("x ==").unwrap_err();
        match err {
            TranslateError::Grammar(violation) => {
                assert!(violation.found.is(TokenKind::SyntaxSymbol, Some("=")));
                assert_eq!(violation.found.location, SourceLocation::new(1, 4));
            }
            other => panic!("Expected grammar violation, got {:?}", other),
        }
    }

    #[test]
    fn test_declare_without_type_fails() {
        let err = translate("declare x").unwrap_err();
        match err {
            TranslateError::Grammar(violation) => {
                assert_eq!(violation.expected.kind, Some(TokenKind::TypeName));
                assert!(violation.found.is(TokenKind::VariableName, Some("x")));
            }
            other => panic!("Expected grammar violation, got {:?}", other),
        }
    }

    #[test]
    fn test_statement_cannot_start_with_symbol() {
        let err = translate(") x").unwrap_err();
        assert!(matches!(
            err,
            TranslateError::Grammar(ref v) if v.expected.description == Some("a statement")
        ));
    }

    #[test]
    fn test_statement_cannot_start_with_number() {
        assert!(matches!(translate("5"), Err(TranslateError::Grammar(_))));
    }

    #[test]
    fn test_partial_output_survives_failure() {
        let mut buf = Vec::new();
        let options = TranslateOptions::default().without_header();
        let result = Parser::new("int x\nprint x\nprint (", &mut buf, options).translate_file();

        assert!(result.is_err());
        let written = String::from_utf8(buf).unwrap();
        assert!(written.starts_with("x = 0  # declare x: int\nprint(x)\n"));
    }
}
