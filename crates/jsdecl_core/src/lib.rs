//! jsdecl_core: Core utilities shared by the jsdecl analyzer crates.
//!
//! Provides text spans and line maps used to locate tokens, declarations
//! and diagnostics in source text.

pub mod text;

// Re-export commonly used types
pub use text::{LineAndColumn, LineMap, TextPos, TextSpan};
