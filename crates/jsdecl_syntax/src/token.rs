//! Token information produced by the scanner and consumed by the declaration parser.

use crate::syntax_kind::SyntaxKind;
use crate::types::TokenFlags;
use jsdecl_core::text::TextSpan;

/// Information about a scanned token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    /// The kind of token.
    pub kind: SyntaxKind,
    /// Start byte offset in the source text.
    pub pos: u32,
    /// End byte offset in the source text (exclusive).
    pub end: u32,
    /// The text of the token (for identifiers, literals, etc.).
    pub text: String,
    /// Token flags (preceding line break, unterminated, numeric format).
    pub flags: TokenFlags,
}

impl TokenInfo {
    pub fn new(kind: SyntaxKind, pos: u32, end: u32) -> Self {
        Self {
            kind,
            pos,
            end,
            text: String::new(),
            flags: TokenFlags::NONE,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_flags(mut self, flags: TokenFlags) -> Self {
        self.flags = flags;
        self
    }

    /// The length of this token in bytes.
    pub fn len(&self) -> u32 {
        self.end - self.pos
    }

    /// Whether this token has zero length.
    pub fn is_empty(&self) -> bool {
        self.pos == self.end
    }

    pub fn span(&self) -> TextSpan {
        TextSpan::from_bounds(self.pos, self.end)
    }

    /// Whether there was a line break before this token.
    pub fn has_preceding_line_break(&self) -> bool {
        self.flags.contains(TokenFlags::PRECEDING_LINE_BREAK)
    }

    pub fn is_unterminated(&self) -> bool {
        self.flags.contains(TokenFlags::UNTERMINATED)
    }

    /// Source text for diagnostics: the token text when present, otherwise
    /// the fixed spelling of the kind.
    pub fn display_text(&self) -> &str {
        if self.text.is_empty() {
            self.kind.describe()
        } else {
            &self.text
        }
    }
}
