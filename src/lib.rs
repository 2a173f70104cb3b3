//! Argsplit Library
//!
//! This library provides the core functionality for splitting shell-style
//! command lines into argument tokens.

pub mod error;
pub mod tokenizer;

// Re-export commonly used types
pub use error::{ParseError, ParseResult};
pub use tokenizer::{Span, Tokenizer};
