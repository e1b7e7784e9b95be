//! Translation options
//!
//! [`TranslateOptions`] is threaded from the command line (or a test) down to
//! the lexer and the emitter. Every field has a sensible default, so most
//! callers only touch the one they care about.

/// How keyword and type-name recognizers treat the character that follows a
/// match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeywordPolicy {
    /// Accept a reserved word only when the next character is not
    /// alphanumeric, so `printer` lexes as one identifier.
    #[default]
    WordBoundary,
    /// Accept a reserved word as a literal prefix: `printer` lexes as the
    /// keyword `print` followed by the identifier `er`.
    LiteralPrefix,
}

/// Options controlling a single translation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateOptions {
    pub keyword_policy: KeywordPolicy,
    /// Write a "generated file" comment as the first output line.
    pub emit_header: bool,
    /// Append `# declare name: type` after each declaration.
    pub annotate_declarations: bool,
    /// Number of upcoming tokens shown when a grammar violation is reported.
    pub error_context: usize,
}

impl TranslateOptions {
    pub const DEFAULT_ERROR_CONTEXT: usize = 7;

    pub fn with_keyword_policy(mut self, policy: KeywordPolicy) -> Self {
        self.keyword_policy = policy;
        self
    }

    pub fn without_header(mut self) -> Self {
        self.emit_header = false;
        self
    }

    pub fn without_annotations(mut self) -> Self {
        self.annotate_declarations = false;
        self
    }
}

impl Default for TranslateOptions {
    fn default() -> Self {
        TranslateOptions {
            keyword_policy: KeywordPolicy::default(),
            emit_header: true,
            annotate_declarations: true,
            error_context: Self::DEFAULT_ERROR_CONTEXT,
        }
    }
}
