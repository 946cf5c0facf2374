//! The JavaScript scanner/lexer.
//!
//! Converts source text into the flat token stream the declaration parser
//! consumes. Two pieces of context are kept while scanning so that the
//! stream needs no rescanning afterwards: the previous significant token
//! (deciding between `/` and a regular expression literal), a stack of
//! open braces (telling the `}` closing a template substitution apart from
//! an ordinary one) and a stack of open parens (telling the `)` that ends an
//! `if`/`for`/`while`/`with` header apart from one that ends an expression).

use crate::char_codes::*;
use jsdecl_core::text::TextSpan;
use jsdecl_diagnostics::{messages, Diagnostic, DiagnosticCollection, DiagnosticMessage};
use jsdecl_syntax::{SyntaxKind, TokenFlags, TokenInfo};
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// Scan a whole source text into tokens.
///
/// The returned stream always ends with exactly one `EndOfFileToken`. The
/// diagnostics hold every recoverable lexical problem found on the way.
pub fn tokenize(text: &str) -> (Vec<TokenInfo>, DiagnosticCollection) {
    let mut scanner = Scanner::new(text);
    scanner.skip_shebang();
    let mut tokens = Vec::new();
    loop {
        let kind = scanner.scan();
        tokens.push(scanner.token_info());
        if kind == SyntaxKind::EndOfFileToken {
            break;
        }
    }
    (tokens, scanner.take_diagnostics())
}

/// Look up the keyword kind for an identifier's text.
fn keyword_kind(text: &str) -> Option<SyntaxKind> {
    static KEYWORDS: OnceLock<FxHashMap<&'static str, SyntaxKind>> = OnceLock::new();
    KEYWORDS
        .get_or_init(|| {
            SyntaxKind::KEYWORDS
                .iter()
                .filter_map(|&kind| kind.keyword_text().map(|text| (text, kind)))
                .collect()
        })
        .get(text)
        .copied()
}

/// The scanner converts JavaScript source text into tokens.
pub struct Scanner {
    /// The source text being scanned.
    text: Vec<char>,
    /// UTF-8 byte offset of each char, plus one entry for the end of text.
    offsets: Vec<u32>,
    /// Current position in `text`.
    pos: usize,
    /// Start of the current token (after leading trivia).
    token_start: usize,
    /// The current token kind.
    token: SyntaxKind,
    /// The text of the current token.
    token_value: String,
    /// Token flags for the current token.
    token_flags: TokenFlags,
    /// Kind of the last token scanned, if any.
    previous: Option<SyntaxKind>,
    /// One entry per open `{` or `${`; `true` marks a template substitution.
    brace_stack: Vec<bool>,
    /// One entry per open `(`; `true` marks a control statement header.
    paren_stack: Vec<bool>,
    /// The last token was the `)` closing a control statement header.
    after_header: bool,
    /// Accumulated diagnostics.
    diagnostics: DiagnosticCollection,
}

impl Scanner {
    /// Create a new scanner for the given source text.
    pub fn new(text: &str) -> Self {
        let mut chars = Vec::with_capacity(text.len());
        let mut offsets = Vec::with_capacity(text.len() + 1);
        for (offset, ch) in text.char_indices() {
            chars.push(ch);
            offsets.push(offset as u32);
        }
        offsets.push(text.len() as u32);
        Self {
            text: chars,
            offsets,
            pos: 0,
            token_start: 0,
            token: SyntaxKind::Unknown,
            token_value: String::new(),
            token_flags: TokenFlags::NONE,
            previous: None,
            brace_stack: Vec::new(),
            paren_stack: Vec::new(),
            after_header: false,
            diagnostics: DiagnosticCollection::new(),
        }
    }

    /// Skip a shebang line at the very beginning of the file (e.g., `#!/usr/bin/env node`).
    /// Call this before the first `scan()` call.
    pub fn skip_shebang(&mut self) {
        if self.pos == 0 && self.text.len() >= 2 && self.text[0] == '#' && self.text[1] == '!' {
            self.pos = 2;
            while !self.is_eof() && !is_line_break(self.text[self.pos]) {
                self.pos += 1;
            }
        }
    }

    pub fn token(&self) -> SyntaxKind {
        self.token
    }

    pub fn token_value(&self) -> &str {
        &self.token_value
    }

    /// Byte offset where the current token starts.
    pub fn token_start(&self) -> u32 {
        self.offsets[self.token_start]
    }

    /// Byte offset where the current token ends (exclusive).
    pub fn token_end(&self) -> u32 {
        self.offsets[self.pos]
    }

    pub fn token_flags(&self) -> TokenFlags {
        self.token_flags
    }

    pub fn has_preceding_line_break(&self) -> bool {
        self.token_flags.contains(TokenFlags::PRECEDING_LINE_BREAK)
    }

    pub fn diagnostics(&self) -> &DiagnosticCollection {
        &self.diagnostics
    }

    /// Take the accumulated diagnostics, leaving an empty collection.
    pub fn take_diagnostics(&mut self) -> DiagnosticCollection {
        std::mem::take(&mut self.diagnostics)
    }

    /// Get a TokenInfo for the current token.
    pub fn token_info(&self) -> TokenInfo {
        TokenInfo {
            kind: self.token,
            pos: self.token_start(),
            end: self.token_end(),
            text: self.token_value.clone(),
            flags: self.token_flags,
        }
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    #[inline]
    fn current_char(&self) -> Option<char> {
        self.text.get(self.pos).copied()
    }

    /// Look at the character at position pos + offset.
    #[inline]
    fn char_at(&self, offset: usize) -> Option<char> {
        self.text.get(self.pos + offset).copied()
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Record a diagnostic covering `start..pos`.
    fn report(&mut self, start: usize, message: &DiagnosticMessage) {
        let span = TextSpan::from_bounds(self.offsets[start], self.offsets[self.pos]);
        self.diagnostics.add(Diagnostic::at(span, message, &[]));
    }

    /// Skip whitespace and comments (trivia), setting token_flags for line breaks.
    fn skip_trivia(&mut self) {
        loop {
            if self.is_eof() {
                return;
            }
            let ch = self.text[self.pos];
            match ch {
                '\r' | '\n' | '\u{2028}' | '\u{2029}' => {
                    self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
                    self.pos += 1;
                }
                '/' if self.char_at(1) == Some('/') => {
                    self.pos += 2;
                    while !self.is_eof() && !is_line_break(self.text[self.pos]) {
                        self.pos += 1;
                    }
                }
                '/' if self.char_at(1) == Some('*') => {
                    let start = self.pos;
                    self.pos += 2;
                    let mut closed = false;
                    while !self.is_eof() {
                        if self.text[self.pos] == '*' && self.char_at(1) == Some('/') {
                            self.pos += 2;
                            closed = true;
                            break;
                        }
                        if is_line_break(self.text[self.pos]) {
                            self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
                        }
                        self.pos += 1;
                    }
                    if !closed {
                        // Only the end-of-file token can follow; it carries the flag.
                        self.report(start, &messages::ASTERISK_SLASH_EXPECTED);
                        self.token_flags |= TokenFlags::UNTERMINATED;
                    }
                }
                c if is_white_space_single_line(c) => {
                    self.pos += 1;
                }
                _ => return,
            }
        }
    }

    /// Scan the next token and return its kind.
    pub fn scan(&mut self) -> SyntaxKind {
        self.token_flags = TokenFlags::NONE;
        self.token_value.clear();

        self.skip_trivia();
        self.token_start = self.pos;

        if self.is_eof() {
            self.token = SyntaxKind::EndOfFileToken;
            return self.token;
        }

        let ch = self.text[self.pos];
        let mut closes_header = false;
        self.token = match ch {
            '(' => {
                self.pos += 1;
                self.paren_stack.push(matches!(
                    self.previous,
                    Some(
                        SyntaxKind::IfKeyword
                            | SyntaxKind::ForKeyword
                            | SyntaxKind::WhileKeyword
                            | SyntaxKind::WithKeyword
                    )
                ));
                SyntaxKind::OpenParenToken
            }
            ')' => {
                self.pos += 1;
                closes_header = self.paren_stack.pop() == Some(true);
                SyntaxKind::CloseParenToken
            }
            '{' => {
                self.pos += 1;
                self.brace_stack.push(false);
                SyntaxKind::OpenBraceToken
            }
            '}' => {
                if self.brace_stack.pop() == Some(true) {
                    self.scan_template_continuation()
                } else {
                    self.pos += 1;
                    SyntaxKind::CloseBraceToken
                }
            }
            '[' => { self.pos += 1; SyntaxKind::OpenBracketToken }
            ']' => { self.pos += 1; SyntaxKind::CloseBracketToken }
            ';' => { self.pos += 1; SyntaxKind::SemicolonToken }
            ',' => { self.pos += 1; SyntaxKind::CommaToken }
            '~' => { self.pos += 1; SyntaxKind::TildeToken }
            '@' => { self.pos += 1; SyntaxKind::AtToken }
            ':' => { self.pos += 1; SyntaxKind::ColonToken }
            '#' if self.char_at(1).map_or(false, is_identifier_start) => self.scan_private_identifier(),

            '.' => self.scan_dot(),
            '?' => self.scan_question(),
            '<' => self.scan_less_than(),
            '>' => self.scan_greater_than(),
            '=' => self.scan_equals(),
            '!' => self.scan_exclamation(),
            '+' => self.scan_plus(),
            '-' => self.scan_minus(),
            '*' => self.scan_asterisk(),
            '/' if self.regex_allowed() => self.scan_regular_expression(),
            '/' => self.scan_slash(),
            '%' => self.scan_percent(),
            '&' => self.scan_ampersand(),
            '|' => self.scan_bar(),
            '^' => self.scan_caret(),

            '\'' | '"' => self.scan_string_literal(ch),
            '`' => self.scan_template_literal(),

            '0'..='9' => self.scan_number(),

            _ if is_identifier_start(ch) => self.scan_identifier(),

            _ => {
                self.pos += 1;
                self.token_value.push(ch);
                SyntaxKind::Unknown
            }
        };

        self.previous = Some(self.token);
        self.after_header = closes_header;
        self.token
    }

    /// Whether a `/` at the current position starts a regular expression.
    ///
    /// After a token that can end an expression the slash divides; `}` is the
    /// exception, since it far more often closes a block than an object literal,
    /// and so is the `)` ending a control statement header.
    fn regex_allowed(&self) -> bool {
        match self.previous {
            None => true,
            Some(SyntaxKind::CloseBraceToken) => true,
            Some(SyntaxKind::CloseParenToken) => self.after_header,
            Some(kind) => !kind.can_end_expression(),
        }
    }

    // ========================================================================
    // Token-specific scanning methods
    // ========================================================================

    fn scan_dot(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('.') && self.char_at(2) == Some('.') {
            self.pos += 3;
            SyntaxKind::DotDotDotToken
        } else if self.char_at(1).map_or(false, is_digit) {
            self.scan_number()
        } else {
            self.pos += 1;
            SyntaxKind::DotToken
        }
    }

    fn scan_question(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('?') {
            if self.char_at(2) == Some('=') {
                self.pos += 3;
                SyntaxKind::QuestionQuestionEqualsToken
            } else {
                self.pos += 2;
                SyntaxKind::QuestionQuestionToken
            }
        } else if self.char_at(1) == Some('.') && !self.char_at(2).map_or(false, is_digit) {
            self.pos += 2;
            SyntaxKind::QuestionDotToken
        } else {
            self.pos += 1;
            SyntaxKind::QuestionToken
        }
    }

    fn scan_less_than(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('<') {
            if self.char_at(2) == Some('=') {
                self.pos += 3;
                SyntaxKind::LessThanLessThanEqualsToken
            } else {
                self.pos += 2;
                SyntaxKind::LessThanLessThanToken
            }
        } else if self.char_at(1) == Some('=') {
            self.pos += 2;
            SyntaxKind::LessThanEqualsToken
        } else {
            self.pos += 1;
            SyntaxKind::LessThanToken
        }
    }

    fn scan_greater_than(&mut self) -> SyntaxKind {
        match (self.char_at(1), self.char_at(2), self.char_at(3)) {
            (Some('>'), Some('>'), Some('=')) => {
                self.pos += 4;
                SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken
            }
            (Some('>'), Some('>'), _) => {
                self.pos += 3;
                SyntaxKind::GreaterThanGreaterThanGreaterThanToken
            }
            (Some('>'), Some('='), _) => {
                self.pos += 3;
                SyntaxKind::GreaterThanGreaterThanEqualsToken
            }
            (Some('>'), _, _) => {
                self.pos += 2;
                SyntaxKind::GreaterThanGreaterThanToken
            }
            (Some('='), _, _) => {
                self.pos += 2;
                SyntaxKind::GreaterThanEqualsToken
            }
            _ => {
                self.pos += 1;
                SyntaxKind::GreaterThanToken
            }
        }
    }

    fn scan_equals(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('=') {
            if self.char_at(2) == Some('=') {
                self.pos += 3;
                SyntaxKind::EqualsEqualsEqualsToken
            } else {
                self.pos += 2;
                SyntaxKind::EqualsEqualsToken
            }
        } else if self.char_at(1) == Some('>') {
            self.pos += 2;
            SyntaxKind::EqualsGreaterThanToken
        } else {
            self.pos += 1;
            SyntaxKind::EqualsToken
        }
    }

    fn scan_exclamation(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('=') {
            if self.char_at(2) == Some('=') {
                self.pos += 3;
                SyntaxKind::ExclamationEqualsEqualsToken
            } else {
                self.pos += 2;
                SyntaxKind::ExclamationEqualsToken
            }
        } else {
            self.pos += 1;
            SyntaxKind::ExclamationToken
        }
    }

    fn scan_plus(&mut self) -> SyntaxKind {
        match self.char_at(1) {
            Some('+') => { self.pos += 2; SyntaxKind::PlusPlusToken }
            Some('=') => { self.pos += 2; SyntaxKind::PlusEqualsToken }
            _ => { self.pos += 1; SyntaxKind::PlusToken }
        }
    }

    fn scan_minus(&mut self) -> SyntaxKind {
        match self.char_at(1) {
            Some('-') => { self.pos += 2; SyntaxKind::MinusMinusToken }
            Some('=') => { self.pos += 2; SyntaxKind::MinusEqualsToken }
            _ => { self.pos += 1; SyntaxKind::MinusToken }
        }
    }

    fn scan_asterisk(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('*') {
            if self.char_at(2) == Some('=') {
                self.pos += 3;
                SyntaxKind::AsteriskAsteriskEqualsToken
            } else {
                self.pos += 2;
                SyntaxKind::AsteriskAsteriskToken
            }
        } else if self.char_at(1) == Some('=') {
            self.pos += 2;
            SyntaxKind::AsteriskEqualsToken
        } else {
            self.pos += 1;
            SyntaxKind::AsteriskToken
        }
    }

    fn scan_slash(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('=') {
            self.pos += 2;
            SyntaxKind::SlashEqualsToken
        } else {
            self.pos += 1;
            SyntaxKind::SlashToken
        }
    }

    fn scan_percent(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('=') {
            self.pos += 2;
            SyntaxKind::PercentEqualsToken
        } else {
            self.pos += 1;
            SyntaxKind::PercentToken
        }
    }

    fn scan_ampersand(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('&') {
            if self.char_at(2) == Some('=') {
                self.pos += 3;
                SyntaxKind::AmpersandAmpersandEqualsToken
            } else {
                self.pos += 2;
                SyntaxKind::AmpersandAmpersandToken
            }
        } else if self.char_at(1) == Some('=') {
            self.pos += 2;
            SyntaxKind::AmpersandEqualsToken
        } else {
            self.pos += 1;
            SyntaxKind::AmpersandToken
        }
    }

    fn scan_bar(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('|') {
            if self.char_at(2) == Some('=') {
                self.pos += 3;
                SyntaxKind::BarBarEqualsToken
            } else {
                self.pos += 2;
                SyntaxKind::BarBarToken
            }
        } else if self.char_at(1) == Some('=') {
            self.pos += 2;
            SyntaxKind::BarEqualsToken
        } else {
            self.pos += 1;
            SyntaxKind::BarToken
        }
    }

    fn scan_caret(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('=') {
            self.pos += 2;
            SyntaxKind::CaretEqualsToken
        } else {
            self.pos += 1;
            SyntaxKind::CaretToken
        }
    }

    /// Consume a backslash escape, appending it to `out`. A `\` before a
    /// CRLF pair is a line continuation and swallows both characters.
    fn scan_escape(&mut self, out: &mut String) {
        out.push('\\');
        self.pos += 1;
        if let Some(ch) = self.current_char() {
            out.push(ch);
            self.pos += 1;
            if ch == '\r' && self.current_char() == Some('\n') {
                out.push('\n');
                self.pos += 1;
            }
        }
    }

    fn scan_string_literal(&mut self, quote: char) -> SyntaxKind {
        let start = self.pos;
        self.pos += 1; // skip opening quote
        let mut result = String::new();
        loop {
            let Some(ch) = self.current_char() else {
                self.report(start, &messages::UNTERMINATED_STRING_LITERAL);
                self.token_flags |= TokenFlags::UNTERMINATED;
                break;
            };
            if ch == quote {
                self.pos += 1;
                break;
            }
            if ch == '\\' {
                self.scan_escape(&mut result);
                continue;
            }
            if is_line_break(ch) {
                self.report(start, &messages::UNTERMINATED_STRING_LITERAL);
                self.token_flags |= TokenFlags::UNTERMINATED;
                break;
            }
            result.push(ch);
            self.pos += 1;
        }
        self.token_value = result;
        SyntaxKind::StringLiteral
    }

    /// Scan from an opening backtick.
    fn scan_template_literal(&mut self) -> SyntaxKind {
        self.pos += 1; // skip backtick
        self.scan_template_piece(SyntaxKind::NoSubstitutionTemplateLiteral, SyntaxKind::TemplateHead)
    }

    /// Scan from the `}` that closes a template substitution.
    fn scan_template_continuation(&mut self) -> SyntaxKind {
        self.pos += 1; // skip `}`
        self.scan_template_piece(SyntaxKind::TemplateTail, SyntaxKind::TemplateMiddle)
    }

    /// Scan template characters up to the closing backtick (`closed`) or the
    /// next `${` (`open`). An open piece pushes a substitution brace.
    fn scan_template_piece(&mut self, closed: SyntaxKind, open: SyntaxKind) -> SyntaxKind {
        let mut result = String::new();
        loop {
            let Some(ch) = self.current_char() else {
                self.report(self.token_start, &messages::UNTERMINATED_TEMPLATE_LITERAL);
                self.token_flags |= TokenFlags::UNTERMINATED;
                self.token_value = result;
                return closed;
            };
            if ch == '`' {
                self.pos += 1;
                self.token_value = result;
                return closed;
            }
            if ch == '$' && self.char_at(1) == Some('{') {
                self.pos += 2;
                self.brace_stack.push(true);
                self.token_value = result;
                return open;
            }
            if ch == '\\' {
                self.scan_escape(&mut result);
                continue;
            }
            result.push(ch);
            self.pos += 1;
        }
    }

    fn scan_regular_expression(&mut self) -> SyntaxKind {
        let start = self.pos;
        self.pos += 1; // after the /
        let mut result = String::from("/");
        let mut in_character_class = false;

        loop {
            let Some(ch) = self.current_char() else {
                self.report(start, &messages::UNTERMINATED_REGULAR_EXPRESSION_LITERAL);
                self.token_flags |= TokenFlags::UNTERMINATED;
                break;
            };
            if is_line_break(ch) {
                self.report(start, &messages::UNTERMINATED_REGULAR_EXPRESSION_LITERAL);
                self.token_flags |= TokenFlags::UNTERMINATED;
                break;
            }
            if ch == '\\' {
                result.push(ch);
                self.pos += 1;
                if let Some(next) = self.current_char().filter(|c| !is_line_break(*c)) {
                    result.push(next);
                    self.pos += 1;
                }
                continue;
            }
            if ch == '[' {
                in_character_class = true;
            } else if ch == ']' {
                in_character_class = false;
            } else if ch == '/' && !in_character_class {
                result.push(ch);
                self.pos += 1;
                // Flags
                while !self.is_eof() && is_identifier_part(self.text[self.pos]) {
                    result.push(self.text[self.pos]);
                    self.pos += 1;
                }
                break;
            }
            result.push(ch);
            self.pos += 1;
        }

        self.token_value = result;
        SyntaxKind::RegularExpressionLiteral
    }

    fn scan_number(&mut self) -> SyntaxKind {
        let start = self.pos;

        if self.text[self.pos] == '0' {
            let radix = match self.char_at(1) {
                Some('x') | Some('X') => Some((TokenFlags::HEX_SPECIFIER, is_hex_digit as fn(char) -> bool)),
                Some('b') | Some('B') => Some((TokenFlags::BINARY_SPECIFIER, is_binary_digit as fn(char) -> bool)),
                Some('o') | Some('O') => Some((TokenFlags::OCTAL_SPECIFIER, is_octal_digit as fn(char) -> bool)),
                _ => None,
            };
            if let Some((flag, is_radix_digit)) = radix {
                self.pos += 2; // skip 0x / 0b / 0o
                self.token_flags |= flag;
                self.scan_digits(is_radix_digit);
                return self.finish_number(start);
            }
        }

        // Decimal number
        self.scan_digits(is_digit);

        if self.current_char() == Some('.') {
            self.pos += 1;
            self.scan_digits(is_digit);
        }

        // Exponent
        if let Some('e') | Some('E') = self.current_char() {
            self.pos += 1;
            self.token_flags |= TokenFlags::SCIENTIFIC;
            if let Some('+') | Some('-') = self.current_char() {
                self.pos += 1;
            }
            self.scan_digits(is_digit);
        }

        self.finish_number(start)
    }

    /// Consume an optional BigInt suffix and record the literal's text.
    fn finish_number(&mut self, start: usize) -> SyntaxKind {
        let kind = if self.current_char() == Some('n') {
            self.pos += 1;
            SyntaxKind::BigIntLiteral
        } else {
            SyntaxKind::NumericLiteral
        };
        self.token_value = self.chars_to_string(start, self.pos);
        kind
    }

    fn scan_digits(&mut self, is_valid_digit: fn(char) -> bool) {
        while let Some(ch) = self.current_char() {
            if ch == '_' {
                self.token_flags |= TokenFlags::CONTAINS_SEPARATOR;
                self.pos += 1;
            } else if is_valid_digit(ch) {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn scan_identifier(&mut self) -> SyntaxKind {
        let start = self.pos;
        self.pos += 1;
        while !self.is_eof() && is_identifier_part(self.text[self.pos]) {
            self.pos += 1;
        }
        let text = self.chars_to_string(start, self.pos);
        let kind = keyword_kind(&text).unwrap_or(SyntaxKind::Identifier);
        self.token_value = text;
        kind
    }

    fn scan_private_identifier(&mut self) -> SyntaxKind {
        self.pos += 1; // skip #
        self.scan_identifier();
        self.token_value.insert(0, '#');
        SyntaxKind::PrivateIdentifier
    }

    fn chars_to_string(&self, start: usize, end: usize) -> String {
        self.text[start..end].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_simple_tokens() {
        let mut scanner = Scanner::new("( ) { } [ ] ; , :");
        assert_eq!(scanner.scan(), SyntaxKind::OpenParenToken);
        assert_eq!(scanner.scan(), SyntaxKind::CloseParenToken);
        assert_eq!(scanner.scan(), SyntaxKind::OpenBraceToken);
        assert_eq!(scanner.scan(), SyntaxKind::CloseBraceToken);
        assert_eq!(scanner.scan(), SyntaxKind::OpenBracketToken);
        assert_eq!(scanner.scan(), SyntaxKind::CloseBracketToken);
        assert_eq!(scanner.scan(), SyntaxKind::SemicolonToken);
        assert_eq!(scanner.scan(), SyntaxKind::CommaToken);
        assert_eq!(scanner.scan(), SyntaxKind::ColonToken);
        assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
    }

    #[test]
    fn test_scan_operators() {
        let mut scanner = Scanner::new("a + ++ += - -- -= * ** *=");
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.scan(), SyntaxKind::PlusToken);
        assert_eq!(scanner.scan(), SyntaxKind::PlusPlusToken);
        assert_eq!(scanner.scan(), SyntaxKind::PlusEqualsToken);
        assert_eq!(scanner.scan(), SyntaxKind::MinusToken);
        assert_eq!(scanner.scan(), SyntaxKind::MinusMinusToken);
        assert_eq!(scanner.scan(), SyntaxKind::MinusEqualsToken);
        assert_eq!(scanner.scan(), SyntaxKind::AsteriskToken);
        assert_eq!(scanner.scan(), SyntaxKind::AsteriskAsteriskToken);
        assert_eq!(scanner.scan(), SyntaxKind::AsteriskEqualsToken);
        assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);

        let mut scanner = Scanner::new("x / y /= z");
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.scan(), SyntaxKind::SlashToken);
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.scan(), SyntaxKind::SlashEqualsToken);
        let mut scanner = Scanner::new("1 % %= === !== >>>= => ?.x");
        assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
        assert_eq!(scanner.scan(), SyntaxKind::PercentToken);
        assert_eq!(scanner.scan(), SyntaxKind::PercentEqualsToken);
        assert_eq!(scanner.scan(), SyntaxKind::EqualsEqualsEqualsToken);
        assert_eq!(scanner.scan(), SyntaxKind::ExclamationEqualsEqualsToken);
        assert_eq!(scanner.scan(), SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken);
        assert_eq!(scanner.scan(), SyntaxKind::EqualsGreaterThanToken);
        assert_eq!(scanner.scan(), SyntaxKind::QuestionDotToken);
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
    }

    #[test]
    fn test_scan_identifier_and_keyword() {
        let mut scanner = Scanner::new("async function inner");
        assert_eq!(scanner.scan(), SyntaxKind::AsyncKeyword);
        assert_eq!(scanner.token_value(), "async");
        assert_eq!(scanner.scan(), SyntaxKind::FunctionKeyword);
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.token_value(), "inner");
        assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
    }

    #[test]
    fn test_token_offsets_are_bytes() {
        let mut scanner = Scanner::new("'é' x");
        assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
        assert_eq!((scanner.token_start(), scanner.token_end()), (0, 4));
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!((scanner.token_start(), scanner.token_end()), (5, 6));
    }

    #[test]
    fn test_preceding_line_break() {
        let mut scanner = Scanner::new("a /* \n */ b\nc");
        scanner.scan();
        assert!(!scanner.has_preceding_line_break());
        scanner.scan();
        assert!(scanner.has_preceding_line_break());
        scanner.scan();
        assert!(scanner.has_preceding_line_break());
    }

    #[test]
    fn test_shebang() {
        let mut scanner = Scanner::new("#!/usr/bin/env node\nfunction");
        scanner.skip_shebang();
        assert_eq!(scanner.scan(), SyntaxKind::FunctionKeyword);
        assert!(scanner.has_preceding_line_break());
    }

    #[test]
    fn test_keyword_table_covers_all_keywords() {
        for &kind in SyntaxKind::KEYWORDS {
            let text = kind.keyword_text().unwrap();
            assert_eq!(keyword_kind(text), Some(kind));
        }
        assert_eq!(keyword_kind("functions"), None);
    }
}
