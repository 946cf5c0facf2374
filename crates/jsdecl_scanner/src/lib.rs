//! jsdecl_scanner: Lexer for JavaScript source text.
//!
//! Produces the token stream the declaration parser consumes, with support for:
//! - All JavaScript punctuators and keywords
//! - Template literals, split at their substitutions
//! - Regular expression literals
//! - Unicode identifiers

mod char_codes;
mod scanner;

pub use jsdecl_syntax::TokenInfo;
pub use scanner::{tokenize, Scanner};
