//! The tokenizer configuration and its scanning engine.

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, ParseResult};
use crate::tokenizer::scope::{Scope, ScopeStack};
use crate::tokenizer::span::Span;

/// What role a single character plays under a given configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharKind {
    Escape,
    Quote,
    Delimiter,
    Literal,
}

/// A configurable shell-style argument tokenizer.
///
/// A tokenizer holds configuration only. Each [`parse`](Tokenizer::parse)
/// call scans with its own local state, so one tokenizer can be shared
/// between call sites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tokenizer {
    quotes: String,
    delimiters: String,
    escape: char,
    lenient: bool,
}

impl Tokenizer {
    /// Creates a tokenizer from the given configuration.
    ///
    /// Any delimiter between a pair of identical quote characters is kept as
    /// ordinary text, and the escape character makes the single character
    /// after it literal no matter how that character would otherwise
    /// classify. Several quote characters and several delimiters may be
    /// supplied, but only identical quote characters pair up with each
    /// other. When `lenient` is true, input that ends with an open quote or
    /// a dangling escape is flushed on a best-effort basis instead of
    /// reported as an error.
    ///
    /// The configuration is not validated. A character claimed by more than
    /// one role resolves in a fixed order: escape first, then quote, then
    /// delimiter.
    pub fn new(quotes: &str, delimiters: &str, escape: char, lenient: bool) -> Self {
        Self {
            quotes: quotes.to_string(),
            delimiters: delimiters.to_string(),
            escape,
            lenient,
        }
    }

    /// A lenient tokenizer for ordinary shell-like input: `"` and `'` as
    /// quotes, space and tab as delimiters, `\` as the escape character.
    pub fn general() -> Self {
        Self::new("\"'", " \t", '\\', true)
    }

    fn classify(&self, c: char) -> CharKind {
        if c == self.escape {
            CharKind::Escape
        } else if self.quotes.contains(c) {
            CharKind::Quote
        } else if self.delimiters.contains(c) {
            CharKind::Delimiter
        } else {
            CharKind::Literal
        }
    }

    /// Splits `text` into argument tokens.
    ///
    /// Tokens come back in input order. Runs of delimiters collapse, so
    /// blank or delimiter-only input yields an empty vector, and so does a
    /// quoted span with nothing in it. In strict mode (`lenient == false`)
    /// input that ends inside a quoted span or right after the escape
    /// character fails with [`ParseError::UnterminatedQuote`] or
    /// [`ParseError::UnterminatedEscape`], and no tokens are returned.
    pub fn parse(&self, text: &str) -> ParseResult<Vec<String>> {
        let mut scan = Scan::new();

        for (at, c) in text.char_indices() {
            match self.classify(c) {
                CharKind::Escape => {
                    if !scan.consume_escape(c) {
                        scan.scopes.push(Scope::Escape, at);
                    }
                }
                CharKind::Quote => match scan.scopes.top() {
                    Scope::Quote(open) if open == c => {
                        scan.finish_scope();
                        scan.scopes.push(Scope::Delimiter, at);
                    }
                    Scope::Quote(_) => scan.buffer.push(c),
                    Scope::Escape => {
                        scan.consume_escape(c);
                    }
                    Scope::Delimiter => {
                        scan.finish_scope();
                        scan.scopes.push(Scope::Quote(c), at);
                    }
                },
                CharKind::Delimiter => match scan.scopes.top() {
                    Scope::Quote(_) => scan.buffer.push(c),
                    Scope::Escape => {
                        scan.consume_escape(c);
                    }
                    Scope::Delimiter => {
                        scan.finish_scope();
                        scan.scopes.push(Scope::Delimiter, at);
                    }
                },
                CharKind::Literal => {
                    if !scan.consume_escape(c) {
                        scan.buffer.push(c);
                    }
                }
            }
        }

        scan.finish(self.lenient, self.escape)
    }
}

impl Default for Tokenizer {
    /// Same configuration as [`Tokenizer::general`].
    fn default() -> Self {
        Self::general()
    }
}

/// Scanning state local to one `parse` call.
struct Scan {
    scopes: ScopeStack,
    buffer: String,
    tokens: Vec<String>,
}

impl Scan {
    fn new() -> Self {
        Self {
            scopes: ScopeStack::new(),
            buffer: String::new(),
            tokens: Vec::new(),
        }
    }

    /// Closes the scope on top of the stack and commits the buffered token.
    /// An empty buffer commits nothing.
    fn finish_scope(&mut self) {
        self.scopes.pop();
        self.flush();
    }

    fn flush(&mut self) {
        if !self.buffer.is_empty() {
            self.tokens.push(std::mem::take(&mut self.buffer));
        }
    }

    /// Absorbs `c` as an escaped literal when an `Escape` scope is on top,
    /// closing that scope. Returns false when no escape is pending.
    fn consume_escape(&mut self, c: char) -> bool {
        if self.scopes.top() == Scope::Escape {
            self.buffer.push(c);
            self.scopes.pop();
            true
        } else {
            false
        }
    }

    /// Finalizes the scan once the input is exhausted.
    ///
    /// Lenient scans always flush whatever is buffered. Strict scans only
    /// succeed when the scanner rests on a `Delimiter` scope; an open
    /// `Quote` or `Escape` scope reports the character that opened it.
    fn finish(mut self, lenient: bool, escape: char) -> ParseResult<Vec<String>> {
        if lenient {
            self.flush();
            return Ok(self.tokens);
        }

        if let Some(entry) = self.scopes.pop() {
            match entry.scope {
                Scope::Delimiter => {}
                Scope::Quote(quote) => {
                    return Err(ParseError::UnterminatedQuote {
                        quote,
                        span: Span::of_char(quote, entry.opened_at),
                    });
                }
                Scope::Escape => {
                    return Err(ParseError::UnterminatedEscape {
                        escape,
                        span: Span::of_char(escape, entry.opened_at),
                    });
                }
            }
        }
        self.flush();
        Ok(self.tokens)
    }
}
