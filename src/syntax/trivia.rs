// src/syntax/trivia.rs
//! Trivia: whitespace, comments and preprocessor directives attached to tokens.
//!
//! Trivia never contributes to semantic meaning. A token's trailing trivia
//! runs up to and including the first end-of-line after it; everything else
//! becomes the next token's leading trivia.

use crate::syntax::TextSpan;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DirectiveKind {
    Region,
    EndRegion,
    If,
    EndIf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriviaKind {
    Whitespace,
    EndOfLine,
    LineComment,
    BlockComment,
    Directive(DirectiveKind),
}

/// One piece of trivia with its raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trivia {
    pub kind: TriviaKind,
    pub text: String,
    pub span: TextSpan,
}

impl Trivia {
    #[must_use]
    pub fn new(kind: TriviaKind, text: impl Into<String>, span: TextSpan) -> Self {
        Self { kind, text: text.into(), span }
    }

    /// Detached trivia for synthesized tokens.
    #[must_use]
    pub fn synthesized(kind: TriviaKind, text: impl Into<String>) -> Self {
        Self::new(kind, text, TextSpan::SYNTHESIZED)
    }

    #[must_use]
    pub fn whitespace(text: &str) -> Self {
        Self::synthesized(TriviaKind::Whitespace, text)
    }

    #[must_use]
    pub fn end_of_line() -> Self {
        Self::synthesized(TriviaKind::EndOfLine, "\n")
    }

    #[must_use]
    pub fn is_whitespace_or_eol(&self) -> bool {
        matches!(self.kind, TriviaKind::Whitespace | TriviaKind::EndOfLine)
    }

    #[must_use]
    pub fn is_comment(&self) -> bool {
        matches!(self.kind, TriviaKind::LineComment | TriviaKind::BlockComment)
    }

    #[must_use]
    pub fn is_directive(&self) -> bool {
        matches!(self.kind, TriviaKind::Directive(_))
    }
}
