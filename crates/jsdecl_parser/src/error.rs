//! Error types for declaration extraction.

use jsdecl_core::text::{TextPos, TextSpan};
use jsdecl_diagnostics::{format_message, Diagnostic, DiagnosticCategory, DiagnosticMessage};
use thiserror::Error;

/// Fatal extraction failures. Any of these aborts the parse with no
/// partial declaration list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// Nesting is unbalanced, or a declaration keyword is not followed by a
    /// valid name and parameter list.
    #[error("malformed source at offset {offset}: {message}")]
    MalformedSource {
        /// Byte offset of the first unmatched or offending token.
        offset: TextPos,
        code: u32,
        message: String,
    },
}

/// Convenient `Result` alias for fallible extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;

impl ExtractError {
    pub(crate) fn malformed(offset: TextPos, message: &DiagnosticMessage, args: &[&str]) -> Self {
        ExtractError::MalformedSource {
            offset,
            code: message.code,
            message: format_message(message.message, args),
        }
    }

    pub fn offset(&self) -> TextPos {
        match self {
            ExtractError::MalformedSource { offset, .. } => *offset,
        }
    }

    pub fn code(&self) -> u32 {
        match self {
            ExtractError::MalformedSource { code, .. } => *code,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ExtractError::MalformedSource { message, .. } => message,
        }
    }

    /// Express the failure as an error diagnostic anchored at its offset.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic {
            file: None,
            span: Some(TextSpan::empty(self.offset())),
            message_text: self.message().to_string(),
            code: self.code(),
            category: DiagnosticCategory::Error,
        }
    }
}
