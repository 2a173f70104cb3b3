//! Error types for the tokenizer.
//!
//! This module provides the error type returned by strict-mode parsing and
//! its conversion into a renderable diagnostic.

use codespan_reporting::diagnostic::{Diagnostic, Label};
use thiserror::Error;

use crate::tokenizer::Span;

/// A failure reported by `Tokenizer::parse` in strict mode.
///
/// Lenient tokenizers never produce these. Both variants carry the
/// offending character and the byte span where it opened the scope that
/// was still open when the input ran out.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input ended while a quoted span was still open.
    #[error("unterminated quote: '{quote}' is never closed")]
    UnterminatedQuote { quote: char, span: Span },

    /// The input ended right after the escape character.
    #[error("unterminated escape: input ends right after '{escape}'")]
    UnterminatedEscape { escape: char, span: Span },
}

impl ParseError {
    /// The byte range of the character that opened the unfinished scope.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnterminatedQuote { span, .. } => *span,
            ParseError::UnterminatedEscape { span, .. } => *span,
        }
    }

    /// Converts the error into a codespan-reporting diagnostic for `file_id`.
    pub fn to_diagnostic(&self, file_id: usize) -> Diagnostic<usize> {
        let labels = match self {
            ParseError::UnterminatedQuote { span, .. } => {
                vec![Label::primary(file_id, span.start..span.end)
                    .with_message("this quote is never closed")]
            }
            ParseError::UnterminatedEscape { span, .. } => {
                vec![Label::primary(file_id, span.start..span.end)
                    .with_message("nothing follows this escape character")]
            }
        };

        Diagnostic::error()
            .with_message(self.to_string())
            .with_labels(labels)
    }
}

/// Result alias for tokenizer operations.
pub type ParseResult<T> = Result<T, ParseError>;
