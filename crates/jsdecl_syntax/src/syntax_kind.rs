//! SyntaxKind enum - every token kind the scanner can produce.
//!
//! Variants are grouped in contiguous ranges (literals, punctuation, reserved
//! words, contextual words) so the range predicates below stay cheap.

/// The kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum SyntaxKind {
    // ========================================================================
    // Special
    // ========================================================================
    Unknown = 0,
    EndOfFileToken,

    // ========================================================================
    // Literals
    // ========================================================================
    NumericLiteral,
    BigIntLiteral,
    StringLiteral,
    RegularExpressionLiteral,
    NoSubstitutionTemplateLiteral,

    // Template pieces
    TemplateHead,
    TemplateMiddle,
    TemplateTail,

    // ========================================================================
    // Punctuation
    // ========================================================================
    OpenBraceToken,
    CloseBraceToken,
    OpenParenToken,
    CloseParenToken,
    OpenBracketToken,
    CloseBracketToken,
    DotToken,
    DotDotDotToken,
    SemicolonToken,
    CommaToken,
    QuestionDotToken,
    LessThanToken,
    GreaterThanToken,
    LessThanEqualsToken,
    GreaterThanEqualsToken,
    EqualsEqualsToken,
    ExclamationEqualsToken,
    EqualsEqualsEqualsToken,
    ExclamationEqualsEqualsToken,
    EqualsGreaterThanToken,
    PlusToken,
    MinusToken,
    AsteriskToken,
    AsteriskAsteriskToken,
    SlashToken,
    PercentToken,
    PlusPlusToken,
    MinusMinusToken,
    LessThanLessThanToken,
    GreaterThanGreaterThanToken,
    GreaterThanGreaterThanGreaterThanToken,
    AmpersandToken,
    BarToken,
    CaretToken,
    ExclamationToken,
    TildeToken,
    AmpersandAmpersandToken,
    BarBarToken,
    QuestionToken,
    ColonToken,
    AtToken,
    QuestionQuestionToken,

    // Assignment operators
    EqualsToken,
    PlusEqualsToken,
    MinusEqualsToken,
    AsteriskEqualsToken,
    AsteriskAsteriskEqualsToken,
    SlashEqualsToken,
    PercentEqualsToken,
    LessThanLessThanEqualsToken,
    GreaterThanGreaterThanEqualsToken,
    GreaterThanGreaterThanGreaterThanEqualsToken,
    AmpersandEqualsToken,
    BarEqualsToken,
    CaretEqualsToken,
    BarBarEqualsToken,
    AmpersandAmpersandEqualsToken,
    QuestionQuestionEqualsToken,

    // ========================================================================
    // Names
    // ========================================================================
    Identifier,
    PrivateIdentifier,

    // ========================================================================
    // Reserved words
    // ========================================================================
    BreakKeyword,
    CaseKeyword,
    CatchKeyword,
    ClassKeyword,
    ConstKeyword,
    ContinueKeyword,
    DebuggerKeyword,
    DefaultKeyword,
    DeleteKeyword,
    DoKeyword,
    ElseKeyword,
    EnumKeyword,
    ExportKeyword,
    ExtendsKeyword,
    FalseKeyword,
    FinallyKeyword,
    ForKeyword,
    FunctionKeyword,
    IfKeyword,
    ImportKeyword,
    InKeyword,
    InstanceOfKeyword,
    NewKeyword,
    NullKeyword,
    ReturnKeyword,
    SuperKeyword,
    SwitchKeyword,
    ThisKeyword,
    ThrowKeyword,
    TrueKeyword,
    TryKeyword,
    TypeOfKeyword,
    VarKeyword,
    VoidKeyword,
    WhileKeyword,
    WithKeyword,

    // ========================================================================
    // Contextual words (valid identifiers outside their special position)
    // ========================================================================
    AsyncKeyword,
    AwaitKeyword,
    GetKeyword,
    LetKeyword,
    OfKeyword,
    SetKeyword,
    StaticKeyword,
    YieldKeyword,
}

impl SyntaxKind {
    pub const FIRST_CONTEXTUAL_KEYWORD: SyntaxKind = SyntaxKind::AsyncKeyword;
    pub const LAST_KEYWORD: SyntaxKind = SyntaxKind::YieldKeyword;

    /// Every keyword kind, in declaration order.
    pub const KEYWORDS: &'static [SyntaxKind] = &[
        SyntaxKind::BreakKeyword,
        SyntaxKind::CaseKeyword,
        SyntaxKind::CatchKeyword,
        SyntaxKind::ClassKeyword,
        SyntaxKind::ConstKeyword,
        SyntaxKind::ContinueKeyword,
        SyntaxKind::DebuggerKeyword,
        SyntaxKind::DefaultKeyword,
        SyntaxKind::DeleteKeyword,
        SyntaxKind::DoKeyword,
        SyntaxKind::ElseKeyword,
        SyntaxKind::EnumKeyword,
        SyntaxKind::ExportKeyword,
        SyntaxKind::ExtendsKeyword,
        SyntaxKind::FalseKeyword,
        SyntaxKind::FinallyKeyword,
        SyntaxKind::ForKeyword,
        SyntaxKind::FunctionKeyword,
        SyntaxKind::IfKeyword,
        SyntaxKind::ImportKeyword,
        SyntaxKind::InKeyword,
        SyntaxKind::InstanceOfKeyword,
        SyntaxKind::NewKeyword,
        SyntaxKind::NullKeyword,
        SyntaxKind::ReturnKeyword,
        SyntaxKind::SuperKeyword,
        SyntaxKind::SwitchKeyword,
        SyntaxKind::ThisKeyword,
        SyntaxKind::ThrowKeyword,
        SyntaxKind::TrueKeyword,
        SyntaxKind::TryKeyword,
        SyntaxKind::TypeOfKeyword,
        SyntaxKind::VarKeyword,
        SyntaxKind::VoidKeyword,
        SyntaxKind::WhileKeyword,
        SyntaxKind::WithKeyword,
        SyntaxKind::AsyncKeyword,
        SyntaxKind::AwaitKeyword,
        SyntaxKind::GetKeyword,
        SyntaxKind::LetKeyword,
        SyntaxKind::OfKeyword,
        SyntaxKind::SetKeyword,
        SyntaxKind::StaticKeyword,
        SyntaxKind::YieldKeyword,
    ];

    /// Whether this kind is a contextual keyword.
    #[inline]
    pub fn is_contextual_keyword(self) -> bool {
        self >= Self::FIRST_CONTEXTUAL_KEYWORD && self <= Self::LAST_KEYWORD
    }

    /// Whether this kind can be used as a binding name, e.g. a function name.
    #[inline]
    pub fn is_binding_name(self) -> bool {
        self == SyntaxKind::Identifier || self.is_contextual_keyword()
    }

    /// Whether this kind represents a template token.
    #[inline]
    pub fn is_template(self) -> bool {
        self >= SyntaxKind::NoSubstitutionTemplateLiteral && self <= SyntaxKind::TemplateTail
    }

    /// Whether this kind accesses a member (`.` or `?.`), turning the next
    /// word into a property name.
    #[inline]
    pub fn is_member_access(self) -> bool {
        matches!(self, SyntaxKind::DotToken | SyntaxKind::QuestionDotToken)
    }

    /// Whether a token of this kind can be the last token of an expression.
    ///
    /// A line break after such a token may terminate the statement.
    pub fn can_end_expression(self) -> bool {
        match self {
            SyntaxKind::Identifier
            | SyntaxKind::PrivateIdentifier
            | SyntaxKind::NumericLiteral
            | SyntaxKind::BigIntLiteral
            | SyntaxKind::StringLiteral
            | SyntaxKind::RegularExpressionLiteral
            | SyntaxKind::NoSubstitutionTemplateLiteral
            | SyntaxKind::TemplateTail
            | SyntaxKind::CloseParenToken
            | SyntaxKind::CloseBracketToken
            | SyntaxKind::CloseBraceToken
            | SyntaxKind::PlusPlusToken
            | SyntaxKind::MinusMinusToken
            | SyntaxKind::ThisKeyword
            | SyntaxKind::SuperKeyword
            | SyntaxKind::TrueKeyword
            | SyntaxKind::FalseKeyword
            | SyntaxKind::NullKeyword => true,
            SyntaxKind::YieldKeyword | SyntaxKind::AwaitKeyword => false,
            kind => kind.is_contextual_keyword(),
        }
    }

    /// Get the keyword text for a keyword kind, or None if not a keyword.
    pub fn keyword_text(self) -> Option<&'static str> {
        match self {
            SyntaxKind::BreakKeyword => Some("break"),
            SyntaxKind::CaseKeyword => Some("case"),
            SyntaxKind::CatchKeyword => Some("catch"),
            SyntaxKind::ClassKeyword => Some("class"),
            SyntaxKind::ConstKeyword => Some("const"),
            SyntaxKind::ContinueKeyword => Some("continue"),
            SyntaxKind::DebuggerKeyword => Some("debugger"),
            SyntaxKind::DefaultKeyword => Some("default"),
            SyntaxKind::DeleteKeyword => Some("delete"),
            SyntaxKind::DoKeyword => Some("do"),
            SyntaxKind::ElseKeyword => Some("else"),
            SyntaxKind::EnumKeyword => Some("enum"),
            SyntaxKind::ExportKeyword => Some("export"),
            SyntaxKind::ExtendsKeyword => Some("extends"),
            SyntaxKind::FalseKeyword => Some("false"),
            SyntaxKind::FinallyKeyword => Some("finally"),
            SyntaxKind::ForKeyword => Some("for"),
            SyntaxKind::FunctionKeyword => Some("function"),
            SyntaxKind::IfKeyword => Some("if"),
            SyntaxKind::ImportKeyword => Some("import"),
            SyntaxKind::InKeyword => Some("in"),
            SyntaxKind::InstanceOfKeyword => Some("instanceof"),
            SyntaxKind::NewKeyword => Some("new"),
            SyntaxKind::NullKeyword => Some("null"),
            SyntaxKind::ReturnKeyword => Some("return"),
            SyntaxKind::SuperKeyword => Some("super"),
            SyntaxKind::SwitchKeyword => Some("switch"),
            SyntaxKind::ThisKeyword => Some("this"),
            SyntaxKind::ThrowKeyword => Some("throw"),
            SyntaxKind::TrueKeyword => Some("true"),
            SyntaxKind::TryKeyword => Some("try"),
            SyntaxKind::TypeOfKeyword => Some("typeof"),
            SyntaxKind::VarKeyword => Some("var"),
            SyntaxKind::VoidKeyword => Some("void"),
            SyntaxKind::WhileKeyword => Some("while"),
            SyntaxKind::WithKeyword => Some("with"),
            SyntaxKind::AsyncKeyword => Some("async"),
            SyntaxKind::AwaitKeyword => Some("await"),
            SyntaxKind::GetKeyword => Some("get"),
            SyntaxKind::LetKeyword => Some("let"),
            SyntaxKind::OfKeyword => Some("of"),
            SyntaxKind::SetKeyword => Some("set"),
            SyntaxKind::StaticKeyword => Some("static"),
            SyntaxKind::YieldKeyword => Some("yield"),
            _ => None,
        }
    }

    /// Get the source text of a punctuation kind, or None if not punctuation.
    pub fn punctuation_text(self) -> Option<&'static str> {
        match self {
            SyntaxKind::OpenBraceToken => Some("{"),
            SyntaxKind::CloseBraceToken => Some("}"),
            SyntaxKind::OpenParenToken => Some("("),
            SyntaxKind::CloseParenToken => Some(")"),
            SyntaxKind::OpenBracketToken => Some("["),
            SyntaxKind::CloseBracketToken => Some("]"),
            SyntaxKind::DotToken => Some("."),
            SyntaxKind::DotDotDotToken => Some("..."),
            SyntaxKind::SemicolonToken => Some(";"),
            SyntaxKind::CommaToken => Some(","),
            SyntaxKind::QuestionDotToken => Some("?."),
            SyntaxKind::LessThanToken => Some("<"),
            SyntaxKind::GreaterThanToken => Some(">"),
            SyntaxKind::LessThanEqualsToken => Some("<="),
            SyntaxKind::GreaterThanEqualsToken => Some(">="),
            SyntaxKind::EqualsEqualsToken => Some("=="),
            SyntaxKind::ExclamationEqualsToken => Some("!="),
            SyntaxKind::EqualsEqualsEqualsToken => Some("==="),
            SyntaxKind::ExclamationEqualsEqualsToken => Some("!=="),
            SyntaxKind::EqualsGreaterThanToken => Some("=>"),
            SyntaxKind::PlusToken => Some("+"),
            SyntaxKind::MinusToken => Some("-"),
            SyntaxKind::AsteriskToken => Some("*"),
            SyntaxKind::AsteriskAsteriskToken => Some("**"),
            SyntaxKind::SlashToken => Some("/"),
            SyntaxKind::PercentToken => Some("%"),
            SyntaxKind::PlusPlusToken => Some("++"),
            SyntaxKind::MinusMinusToken => Some("--"),
            SyntaxKind::LessThanLessThanToken => Some("<<"),
            SyntaxKind::GreaterThanGreaterThanToken => Some(">>"),
            SyntaxKind::GreaterThanGreaterThanGreaterThanToken => Some(">>>"),
            SyntaxKind::AmpersandToken => Some("&"),
            SyntaxKind::BarToken => Some("|"),
            SyntaxKind::CaretToken => Some("^"),
            SyntaxKind::ExclamationToken => Some("!"),
            SyntaxKind::TildeToken => Some("~"),
            SyntaxKind::AmpersandAmpersandToken => Some("&&"),
            SyntaxKind::BarBarToken => Some("||"),
            SyntaxKind::QuestionToken => Some("?"),
            SyntaxKind::ColonToken => Some(":"),
            SyntaxKind::AtToken => Some("@"),
            SyntaxKind::QuestionQuestionToken => Some("??"),
            SyntaxKind::EqualsToken => Some("="),
            SyntaxKind::PlusEqualsToken => Some("+="),
            SyntaxKind::MinusEqualsToken => Some("-="),
            SyntaxKind::AsteriskEqualsToken => Some("*="),
            SyntaxKind::AsteriskAsteriskEqualsToken => Some("**="),
            SyntaxKind::SlashEqualsToken => Some("/="),
            SyntaxKind::PercentEqualsToken => Some("%="),
            SyntaxKind::LessThanLessThanEqualsToken => Some("<<="),
            SyntaxKind::GreaterThanGreaterThanEqualsToken => Some(">>="),
            SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken => Some(">>>="),
            SyntaxKind::AmpersandEqualsToken => Some("&="),
            SyntaxKind::BarEqualsToken => Some("|="),
            SyntaxKind::CaretEqualsToken => Some("^="),
            SyntaxKind::BarBarEqualsToken => Some("||="),
            SyntaxKind::AmpersandAmpersandEqualsToken => Some("&&="),
            SyntaxKind::QuestionQuestionEqualsToken => Some("??="),
            _ => None,
        }
    }

    /// Short human-readable description used in diagnostics.
    pub fn describe(self) -> &'static str {
        if let Some(text) = self.punctuation_text().or_else(|| self.keyword_text()) {
            return text;
        }
        match self {
            SyntaxKind::EndOfFileToken => "end of file",
            SyntaxKind::Identifier => "identifier",
            SyntaxKind::PrivateIdentifier => "private identifier",
            SyntaxKind::NumericLiteral | SyntaxKind::BigIntLiteral => "number",
            SyntaxKind::StringLiteral => "string",
            SyntaxKind::RegularExpressionLiteral => "regular expression",
            SyntaxKind::NoSubstitutionTemplateLiteral
            | SyntaxKind::TemplateHead
            | SyntaxKind::TemplateMiddle
            | SyntaxKind::TemplateTail => "template",
            _ => "token",
        }
    }
}
