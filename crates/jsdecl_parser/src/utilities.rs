//! Parser utility functions.

use jsdecl_syntax::SyntaxKind;

/// Check if a token, when it directly precedes another, leaves that token at
/// the start of a statement.
pub fn ends_statement_prefix(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::OpenBraceToken
            | SyntaxKind::SemicolonToken
            | SyntaxKind::CloseBraceToken
            | SyntaxKind::CloseParenToken
            | SyntaxKind::ElseKeyword
            | SyntaxKind::DoKeyword
            | SyntaxKind::TryKeyword
            | SyntaxKind::CatchKeyword
            | SyntaxKind::FinallyKeyword
            | SyntaxKind::ExportKeyword
            | SyntaxKind::DefaultKeyword
    )
}

/// Keywords whose operand may not follow a line break; a line break after
/// one of them always ends the statement.
pub fn is_restricted_production(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::ReturnKeyword
            | SyntaxKind::BreakKeyword
            | SyntaxKind::ContinueKeyword
            | SyntaxKind::YieldKeyword
    )
}

/// Check if a token kind introduces a class member and so turns a following
/// word into a member name.
pub fn is_member_modifier(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::StaticKeyword
            | SyntaxKind::AsyncKeyword
            | SyntaxKind::GetKeyword
            | SyntaxKind::SetKeyword
    )
}

/// Check if a token can begin the value of an object or class property,
/// making a following `function` an expression rather than a member name.
pub fn precedes_property_value(kind: SyntaxKind) -> bool {
    !kind.can_end_expression()
        && !is_member_modifier(kind)
        && !matches!(
            kind,
            SyntaxKind::OpenBraceToken
                | SyntaxKind::CommaToken
                | SyntaxKind::SemicolonToken
                | SyntaxKind::AsteriskToken
                | SyntaxKind::AtToken
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_prefixes() {
        assert!(ends_statement_prefix(SyntaxKind::SemicolonToken));
        assert!(ends_statement_prefix(SyntaxKind::DefaultKeyword));
        assert!(!ends_statement_prefix(SyntaxKind::EqualsToken));
        assert!(!ends_statement_prefix(SyntaxKind::ReturnKeyword));
    }

    #[test]
    fn test_property_values() {
        assert!(precedes_property_value(SyntaxKind::ColonToken));
        assert!(precedes_property_value(SyntaxKind::EqualsToken));
        assert!(!precedes_property_value(SyntaxKind::CommaToken));
        assert!(!precedes_property_value(SyntaxKind::StaticKeyword));
        assert!(!precedes_property_value(SyntaxKind::Identifier));
    }
}
