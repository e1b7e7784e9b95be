//! Lexer (tokenizer) for transpyle source text
//!
//! The lexer owns the whole input as a `Vec<char>` and hands out one
//! [`Token`] per [`Lexer::next_token`] call. Recognizers are tried in a fixed
//! priority order (whitespace, syntax symbols, keywords, type names,
//! identifiers, numbers) and the first one that matches a non-empty prefix
//! at the cursor wins. Whitespace tokens are classified but never returned
//! from `next_token`.
//!
//! The stream is bracketed by two payload-free sentinels: the first call
//! returns [`TokenKind::StreamStart`], and once the input is exhausted every
//! further call returns [`TokenKind::StreamEnd`] without moving the cursor.

use crate::config::KeywordPolicy;
use std::fmt;
use thiserror::Error;
use tracing::trace;

/// Reserved words, in the order the keyword recognizer tries them.
pub const KEYWORDS: [&str; 3] = ["print", "input", "declare"];

/// Built-in type names, in the order the type-name recognizer tries them.
pub const TYPE_NAMES: [&str; 5] = ["boolean", "char", "int", "float", "String"];

/// Single-character punctuation.
pub const SYNTAX_SYMBOLS: [char; 3] = ['(', ')', '='];

/// Source location information for error reporting (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Closed set of token classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    StreamStart,
    StreamEnd,
    Whitespace,
    SyntaxSymbol,
    Keyword,
    TypeName,
    VariableName,
    Number,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::StreamStart => "start of stream",
            TokenKind::StreamEnd => "end of stream",
            TokenKind::Whitespace => "whitespace",
            TokenKind::SyntaxSymbol => "symbol",
            TokenKind::Keyword => "keyword",
            TokenKind::TypeName => "type name",
            TokenKind::VariableName => "variable name",
            TokenKind::Number => "number",
        };
        f.write_str(name)
    }
}

/// Numeric literal payload. The variant is chosen by whether the source text
/// contained a `.`, not by the value.
///
/// Literals keep their digits rather than a machine value, so any length of
/// digit run is accepted. The text is normalized to a valid Python literal:
/// integers lose leading zeros, floats gain a digit on a bare side of the
/// point (`3.` is `3.0`, `.5` is `0.5`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Number {
    Int(String),
    Float(String),
}

impl Number {
    pub fn int(text: &str) -> Self {
        let digits = text.trim_start_matches('0');
        Number::Int(if digits.is_empty() { "0" } else { digits }.to_string())
    }

    pub fn float(text: &str) -> Self {
        let mut literal = String::with_capacity(text.len() + 2);
        if text.starts_with('.') {
            literal.push('0');
        }
        literal.push_str(text);
        if text.ends_with('.') {
            literal.push('0');
        }
        Number::Float(literal)
    }

    pub fn literal(&self) -> &str {
        match self {
            Number::Int(text) | Number::Float(text) => text,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Text(String),
    Number(Number),
    StreamStart,
    StreamEnd,
}

/// A classified lexical unit. Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub location: SourceLocation,
}

impl Token {
    fn stream_start(location: SourceLocation) -> Self {
        Token {
            kind: TokenKind::StreamStart,
            value: TokenValue::StreamStart,
            location,
        }
    }

    fn stream_end(location: SourceLocation) -> Self {
        Token {
            kind: TokenKind::StreamEnd,
            value: TokenValue::StreamEnd,
            location,
        }
    }

    /// Text payload of symbols, keywords, type names and identifiers.
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// `true` if this token has `kind` and, when given, the text `value`.
    pub fn is(&self, kind: TokenKind, value: Option<&str>) -> bool {
        self.kind == kind && value.map_or(true, |v| self.text() == Some(v))
    }

    pub fn is_stream_end(&self) -> bool {
        self.kind == TokenKind::StreamEnd
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            TokenValue::Text(s) => write!(f, "{} '{}'", self.kind, s),
            TokenValue::Number(n) => write!(f, "number {}", n),
            TokenValue::StreamStart | TokenValue::StreamEnd => write!(f, "{}", self.kind),
        }
    }
}

/// Lexer failures. All of them abort the translation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    /// No recognizer matched at the cursor.
    #[error("unrecognized input at {location}: {remainder:?}")]
    UnrecognizedInput {
        remainder: String,
        location: SourceLocation,
    },

    /// Internal invariant violation: the cursor was asked to move past the
    /// end of the buffer.
    #[error("lexer reached end of input too soon (index {index}, end {end})")]
    PrematureEnd { index: usize, end: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    BeforeStart,
    At(usize),
}

/// Pull-based lexer over a fully buffered character sequence.
pub struct Lexer {
    input: Vec<char>,
    cursor: Cursor,
    line: usize,
    column: usize,
    policy: KeywordPolicy,
}

impl Lexer {
    /// Create a new lexer using the word-boundary keyword policy.
    pub fn new(input: &str) -> Self {
        Self::with_policy(input, KeywordPolicy::default())
    }

    pub fn with_policy(input: &str, policy: KeywordPolicy) -> Self {
        Self {
            input: input.chars().collect(),
            cursor: Cursor::BeforeStart,
            line: 1,
            column: 1,
            policy,
        }
    }

    /// Return the next significant token, skipping whitespace.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        loop {
            let token = self.scan()?;
            if token.kind != TokenKind::Whitespace {
                trace!(token = %token, "lexed");
                return Ok(token);
            }
        }
    }

    /// Lex the entire input: `StreamStart`, every significant token, then
    /// `StreamEnd`.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let done = token.is_stream_end();
            tokens.push(token);
            if done {
                break;
            }
        }

        Ok(tokens)
    }

    /// Every token between the sentinels, whitespace included. Consecutive
    /// tokens cover the input without gaps.
    pub fn raw_tokens(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.scan()?;
            match token.kind {
                TokenKind::StreamStart => continue,
                TokenKind::StreamEnd => break,
                _ => tokens.push(token),
            }
        }

        Ok(tokens)
    }

    /// Produce one token, whitespace included.
    fn scan(&mut self) -> Result<Token, LexError> {
        let start = match self.cursor {
            Cursor::BeforeStart => {
                self.cursor = Cursor::At(0);
                return Ok(Token::stream_start(self.current_location()));
            }
            Cursor::At(pos) => pos,
        };

        if start >= self.input.len() {
            return Ok(Token::stream_end(self.current_location()));
        }

        let location = self.current_location();
        let (kind, end) = self
            .recognize(start)
            .ok_or_else(|| LexError::UnrecognizedInput {
                remainder: self.input[start..].iter().collect(),
                location,
            })?;

        let text: String = self.input[start..end].iter().collect();
        let value = match kind {
            TokenKind::Number => TokenValue::Number(parse_number(&text)),
            _ => TokenValue::Text(text),
        };

        self.advance_to(end)?;

        Ok(Token {
            kind,
            value,
            location,
        })
    }

    /// Try each recognizer in priority order; return the kind and end index
    /// of the first match.
    fn recognize(&self, start: usize) -> Option<(TokenKind, usize)> {
        self.match_whitespace(start)
            .map(|end| (TokenKind::Whitespace, end))
            .or_else(|| self.match_symbol(start).map(|end| (TokenKind::SyntaxSymbol, end)))
            .or_else(|| self.match_word(start, &KEYWORDS).map(|end| (TokenKind::Keyword, end)))
            .or_else(|| self.match_word(start, &TYPE_NAMES).map(|end| (TokenKind::TypeName, end)))
            .or_else(|| self.match_identifier(start).map(|end| (TokenKind::VariableName, end)))
            .or_else(|| self.match_number(start).map(|end| (TokenKind::Number, end)))
    }

    fn match_whitespace(&self, start: usize) -> Option<usize> {
        let end = self.skip_while(start, |c| matches!(c, ' ' | '\t' | '\n' | '\r'));
        (end > start).then_some(end)
    }

    fn match_symbol(&self, start: usize) -> Option<usize> {
        self.peek(start)
            .filter(|c| SYNTAX_SYMBOLS.contains(c))
            .map(|_| start + 1)
    }

    /// Match the first word of `words` that the input spells at `start`.
    fn match_word(&self, start: usize, words: &[&str]) -> Option<usize> {
        words.iter().find_map(|word| {
            let mut end = start;
            for expected in word.chars() {
                if self.peek(end) != Some(expected) {
                    return None;
                }
                end += 1;
            }

            match self.policy {
                KeywordPolicy::LiteralPrefix => Some(end),
                KeywordPolicy::WordBoundary => {
                    let continues = self.peek(end).is_some_and(|c| c.is_alphanumeric());
                    (!continues).then_some(end)
                }
            }
        })
    }

    // variable_name = alpha alnum*
    fn match_identifier(&self, start: usize) -> Option<usize> {
        if !self.peek(start)?.is_alphabetic() {
            return None;
        }
        Some(self.skip_while(start + 1, |c| c.is_alphanumeric()))
    }

    // number = '.' digit+ | digit+ ('.' digit*)?
    fn match_number(&self, start: usize) -> Option<usize> {
        let is_digit = |c: char| c.is_ascii_digit();

        if self.peek(start) == Some('.') {
            let end = self.skip_while(start + 1, is_digit);
            return (end > start + 1).then_some(end);
        }

        let end = self.skip_while(start, is_digit);
        if end == start {
            return None;
        }

        if self.peek(end) == Some('.') {
            Some(self.skip_while(end + 1, is_digit))
        } else {
            Some(end)
        }
    }

    fn skip_while(&self, mut pos: usize, pred: impl Fn(char) -> bool) -> usize {
        while self.peek(pos).is_some_and(&pred) {
            pos += 1;
        }
        pos
    }

    fn peek(&self, pos: usize) -> Option<char> {
        self.input.get(pos).copied()
    }

    /// Move the cursor to `end`, updating line and column.
    fn advance_to(&mut self, end: usize) -> Result<(), LexError> {
        let start = match self.cursor {
            Cursor::At(pos) => pos,
            Cursor::BeforeStart => 0,
        };

        if end > self.input.len() {
            return Err(LexError::PrematureEnd {
                index: end,
                end: self.input.len(),
            });
        }

        for &ch in &self.input[start..end] {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        self.cursor = Cursor::At(end);
        Ok(())
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

fn parse_number(text: &str) -> Number {
    if text.contains('.') {
        Number::float(text)
    } else {
        Number::int(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_and_text(source: &str, policy: KeywordPolicy) -> Vec<(TokenKind, Option<String>)> {
        Lexer::with_policy(source, policy)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| (t.kind, t.text().map(str::to_string)))
            .collect()
    }

    fn number(source: &str) -> Number {
        let tokens = Lexer::new(source).tokenize().unwrap();
        match &tokens[1].value {
            TokenValue::Number(n) => n.clone(),
            ref other => panic!("Expected number, got {:?}", other),
        }
    }

    #[test]
    fn test_simple_tokens() {
        let tokens = Lexer::new("declare int x\nx = input()").tokenize().unwrap();

        assert_eq!(tokens[0].kind, TokenKind::StreamStart);
        assert!(tokens[1].is(TokenKind::Keyword, Some("declare")));
        assert!(tokens[2].is(TokenKind::TypeName, Some("int")));
        assert!(tokens[3].is(TokenKind::VariableName, Some("x")));
        assert!(tokens[4].is(TokenKind::VariableName, Some("x")));
        assert!(tokens[5].is(TokenKind::SyntaxSymbol, Some("=")));
        assert!(tokens[6].is(TokenKind::Keyword, Some("input")));
        assert!(tokens[7].is(TokenKind::SyntaxSymbol, Some("(")));
        assert!(tokens[8].is(TokenKind::SyntaxSymbol, Some(")")));
        assert!(tokens[9].is_stream_end());
        assert_eq!(tokens.len(), 10);
    }

    #[test]
    fn test_number_classification() {
        assert_eq!(number("3"), Number::Int("3".into()));
        assert_eq!(number("3."), Number::Float("3.0".into()));
        assert_eq!(number(".5"), Number::Float("0.5".into()));
        assert_eq!(number("3.5"), Number::Float("3.5".into()));
        assert_eq!(number("007"), Number::Int("7".into()));
        assert_eq!(number("000"), Number::Int("0".into()));
    }

    #[test]
    fn test_float_display_is_python_literal() {
        assert_eq!(number("3.").to_string(), "3.0");
        assert_eq!(number(".5").to_string(), "0.5");
        assert_eq!(number("42").to_string(), "42");
    }

    #[test]
    fn test_long_digit_runs_are_kept() {
        assert_eq!(
            number("99999999999999999999"),
            Number::Int("99999999999999999999".into())
        );
        let long_float = format!("1{}.5", "0".repeat(400));
        assert_eq!(number(&long_float).literal(), long_float);
    }

    #[test]
    fn test_lone_dot_is_unrecognized() {
        let err = Lexer::new("x .").tokenize().unwrap_err();
        match err {
            LexError::UnrecognizedInput { remainder, location } => {
                assert_eq!(remainder, ".");
                assert_eq!(location, SourceLocation::new(1, 3));
            }
            other => panic!("Expected UnrecognizedInput, got {:?}", other),
        }
    }

    #[test]
    fn test_unrecognized_reports_remainder() {
        let err = Lexer::new("print x\n$oops rest").tokenize().unwrap_err();
        assert_eq!(
            err,
            LexError::UnrecognizedInput {
                remainder: "$oops rest".to_string(),
                location: SourceLocation::new(2, 1),
            }
        );
    }

    #[test]
    fn test_keyword_spelled_identifier_is_keyword() {
        for policy in [KeywordPolicy::WordBoundary, KeywordPolicy::LiteralPrefix] {
            let tokens = kinds_and_text("print", policy);
            assert_eq!(tokens[1], (TokenKind::Keyword, Some("print".to_string())));
        }
    }

    #[test]
    fn test_word_boundary_policy() {
        let tokens = kinds_and_text("printer integer", KeywordPolicy::WordBoundary);
        assert_eq!(tokens[1], (TokenKind::VariableName, Some("printer".to_string())));
        assert_eq!(tokens[2], (TokenKind::VariableName, Some("integer".to_string())));
        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn test_literal_prefix_policy() {
        let tokens = kinds_and_text("printer integer", KeywordPolicy::LiteralPrefix);
        assert_eq!(tokens[1], (TokenKind::Keyword, Some("print".to_string())));
        assert_eq!(tokens[2], (TokenKind::VariableName, Some("er".to_string())));
        assert_eq!(tokens[3], (TokenKind::TypeName, Some("int".to_string())));
        assert_eq!(tokens[4], (TokenKind::VariableName, Some("eger".to_string())));
    }

    #[test]
    fn test_keyword_followed_by_symbol() {
        let tokens = kinds_and_text("input()", KeywordPolicy::WordBoundary);
        assert_eq!(tokens[1], (TokenKind::Keyword, Some("input".to_string())));
        assert_eq!(tokens[2], (TokenKind::SyntaxSymbol, Some("(".to_string())));
    }

    #[test]
    fn test_stream_end_is_idempotent() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::StreamStart);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::VariableName);

        let end = lexer.next_token().unwrap();
        assert!(end.is_stream_end());
        for _ in 0..5 {
            assert_eq!(lexer.next_token().unwrap(), end);
        }
    }

    #[test]
    fn test_empty_input() {
        let tokens = Lexer::new("").tokenize().unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::StreamStart);
        assert!(tokens[1].is_stream_end());
    }

    #[test]
    fn test_locations() {
        let tokens = Lexer::new("declare int x\n  x = y").tokenize().unwrap();
        assert_eq!(tokens[3].location, SourceLocation::new(1, 13));
        assert_eq!(tokens[4].location, SourceLocation::new(2, 3));
        assert_eq!(tokens[6].location, SourceLocation::new(2, 7));
    }

    #[test]
    fn test_crlf_is_whitespace() {
        let lf = kinds_and_text("int x\nx = y\n", KeywordPolicy::WordBoundary);
        let crlf = kinds_and_text("int x\r\nx = y\r\n", KeywordPolicy::WordBoundary);
        assert_eq!(lf, crlf);
    }

    #[test]
    fn test_raw_tokens_cover_input() {
        let source = "print  (x)\n";
        let tokens = Lexer::new(source).raw_tokens().unwrap();
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Keyword,
                TokenKind::Whitespace,
                TokenKind::SyntaxSymbol,
                TokenKind::VariableName,
                TokenKind::SyntaxSymbol,
                TokenKind::Whitespace,
            ]
        );
        let rebuilt: String = tokens.iter().filter_map(Token::text).collect();
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn test_token_display() {
        let tokens = Lexer::new("declare x 2.5").tokenize().unwrap();
        assert_eq!(tokens[1].to_string(), "keyword 'declare'");
        assert_eq!(tokens[2].to_string(), "variable name 'x'");
        assert_eq!(tokens[3].to_string(), "number 2.5");
        assert_eq!(tokens[4].to_string(), "end of stream");
    }
}
