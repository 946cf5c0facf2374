//! Modifier classification for function declarations.

use jsdecl_syntax::{ModifierFlags, SyntaxKind, TokenInfo};

/// Determine a declaration's modifiers from the tokens around its `function`
/// keyword.
///
/// `preceding` is the token right before the keyword and `following` the
/// tokens right after it. An `async` marker counts only when no line break
/// separates it from the keyword; a `*` counts only when it directly follows
/// the keyword.
pub fn classify(
    preceding: Option<&TokenInfo>,
    keyword: &TokenInfo,
    following: &[TokenInfo],
) -> ModifierFlags {
    let mut modifiers = ModifierFlags::NONE;
    if preceding.map_or(false, |token| token.kind == SyntaxKind::AsyncKeyword)
        && !keyword.has_preceding_line_break()
    {
        modifiers |= ModifierFlags::ASYNC;
    }
    if following
        .first()
        .map_or(false, |token| token.kind == SyntaxKind::AsteriskToken)
    {
        modifiers |= ModifierFlags::GENERATOR;
    }
    modifiers
}

/// Whether an `async` marker is cut off from the keyword by a line break, in
/// which case it is an ordinary expression statement and not a modifier.
pub fn is_detached_async(preceding: Option<&TokenInfo>, keyword: &TokenInfo) -> bool {
    preceding.map_or(false, |token| token.kind == SyntaxKind::AsyncKeyword)
        && keyword.has_preceding_line_break()
}
