//! Shell-style argument tokenization.
//!
//! This module splits a single line of text into argument tokens. Splitting
//! honors configurable quote characters (a delimiter between identical
//! quotes is ordinary text), a configurable escape character (the character
//! after it is always literal), and collapses runs of delimiters so empty
//! tokens never appear.
//!
//! ```
//! use argsplit::Tokenizer;
//!
//! let tokens = Tokenizer::general().parse(r#"run "two words" three"#)?;
//! assert_eq!(tokens, vec!["run", "two words", "three"]);
//! # Ok::<(), argsplit::ParseError>(())
//! ```

mod scope;
mod span;
mod tokenizer;

pub use span::Span;
pub use tokenizer::Tokenizer;
