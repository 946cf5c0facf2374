//! The declaration parser.
//!
//! A single forward pass over the token stream. Instead of building a full
//! syntax tree the parser keeps a stack of open delimiter frames, which is
//! enough to tell where statements may start, to match every brace, paren,
//! bracket and template substitution, and to know which braces open the
//! body of a declared function. Declarations are handed to the
//! [`ScopeTracker`], which owns the resulting scope tree.

use crate::error::{ExtractError, ExtractResult};
use crate::modifiers;
use crate::tracker::{ScopeHandle, ScopeTracker};
use crate::utilities::{ends_statement_prefix, is_restricted_production, precedes_property_value};
use jsdecl_core::text::{TextPos, TextSpan};
use jsdecl_diagnostics::{messages, Diagnostic, DiagnosticCategory, DiagnosticCollection, DiagnosticMessage};
use jsdecl_syntax::{Scope, SyntaxKind, TokenInfo};
use log::{debug, trace, warn};

/// The kind of an open delimiter frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameKind {
    /// The whole input.
    Module,
    /// Body of a declared function; the only frame that opens a scope.
    FunctionBody,
    /// Body of a function expression, arrow function or method.
    Body,
    /// Block statement.
    Block,
    ClassBody,
    ObjectLiteral,
    Paren,
    Bracket,
    /// Template substitution, from the template head to its tail.
    Template,
}

impl FrameKind {
    /// Whether statements (and so declarations) may appear directly inside.
    fn is_statement_context(self) -> bool {
        matches!(
            self,
            FrameKind::Module | FrameKind::FunctionBody | FrameKind::Body | FrameKind::Block
        )
    }

    /// The token kind that closes this frame.
    fn closer(self) -> Option<SyntaxKind> {
        match self {
            FrameKind::Module => None,
            FrameKind::FunctionBody
            | FrameKind::Body
            | FrameKind::Block
            | FrameKind::ClassBody
            | FrameKind::ObjectLiteral => Some(SyntaxKind::CloseBraceToken),
            FrameKind::Paren => Some(SyntaxKind::CloseParenToken),
            FrameKind::Bracket => Some(SyntaxKind::CloseBracketToken),
            FrameKind::Template => Some(SyntaxKind::TemplateTail),
        }
    }

    fn closer_text(self) -> &'static str {
        match self {
            FrameKind::Paren => ")",
            FrameKind::Bracket => "]",
            FrameKind::Module => "end of file",
            _ => "}",
        }
    }
}

/// The function whose parameter list a paren frame holds.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FunctionHeader {
    /// A declaration already recorded at `owner` in the innermost scope.
    Declaration { owner: usize, name: String },
    Expression,
}

/// What a `function` keyword is, judged from where it appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Declaration,
    Expression,
    /// A property or method named `function`.
    MemberName,
}

#[derive(Debug)]
struct Frame {
    kind: FrameKind,
    /// Index of the opening token; `None` for the module frame.
    open: Option<usize>,
    /// `?` tokens still waiting for their `:`.
    pending_conditionals: u32,
    /// Index of the last `:` that ended a label or a `case` clause.
    statement_colon: Option<usize>,
    /// A `class` keyword was seen and its body brace is still to come.
    class_header: bool,
    header: Option<FunctionHeader>,
    scope: Option<ScopeHandle>,
}

impl Frame {
    fn new(kind: FrameKind, open: Option<usize>) -> Self {
        Self {
            kind,
            open,
            pending_conditionals: 0,
            statement_colon: None,
            class_header: false,
            header: None,
            scope: None,
        }
    }
}

/// A successful parse: the module scope tree plus every non-fatal anomaly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutput {
    pub root: Scope,
    pub anomalies: DiagnosticCollection,
}

/// The declaration parser over one token stream.
pub struct Parser<'t> {
    tokens: &'t [TokenInfo],
    module: Frame,
    /// Frames opened inside the module, innermost last.
    frames: Vec<Frame>,
    tracker: ScopeTracker,
    /// Set when a function's parameter list just closed and its body brace
    /// must come next.
    expect_body: Option<FunctionHeader>,
    anomalies: DiagnosticCollection,
}

impl<'t> Parser<'t> {
    /// Create a parser over `tokens`. The stream may end with an
    /// `EndOfFileToken`; the end of the slice counts as end of input too.
    pub fn new(tokens: &'t [TokenInfo]) -> Self {
        Self {
            tokens,
            module: Frame::new(FrameKind::Module, None),
            frames: Vec::new(),
            tracker: ScopeTracker::new(),
            expect_body: None,
            anomalies: DiagnosticCollection::new(),
        }
    }

    pub fn parse(mut self) -> ExtractResult<ParseOutput> {
        let tokens = self.tokens;
        debug!("parsing {} tokens", tokens.len());
        let mut index = 0;
        while let Some(token) = tokens.get(index) {
            if token.kind == SyntaxKind::EndOfFileToken {
                if token.is_unterminated() {
                    return Err(ExtractError::malformed(
                        token.pos,
                        &messages::ASTERISK_SLASH_EXPECTED,
                        &[],
                    ));
                }
                break;
            }
            index = self.step(index)?;
        }
        self.finish()
    }

    fn finish(self) -> ExtractResult<ParseOutput> {
        let end = self.end_offset();
        if let Some(FunctionHeader::Declaration { name, .. }) = &self.expect_body {
            return Err(ExtractError::malformed(
                end,
                &messages::FUNCTION_BODY_EXPECTED,
                &[name.as_str()],
            ));
        }
        if let Some(frame) = self.frames.first() {
            return Err(self.unclosed(frame));
        }
        let root = self.tracker.finish(end)?;
        debug!("parsed {} declarations", root.declaration_count());
        Ok(ParseOutput {
            root,
            anomalies: self.anomalies,
        })
    }

    // ========================================================================
    // Token dispatch
    // ========================================================================

    /// Process the token at `index` and return the index of the next one.
    fn step(&mut self, index: usize) -> ExtractResult<usize> {
        let tokens = self.tokens;
        let token = &tokens[index];

        if let Some(header) = self.expect_body.take() {
            if token.kind == SyntaxKind::OpenBraceToken {
                self.open_function_body(index, header)?;
                return Ok(index + 1);
            }
            if let FunctionHeader::Declaration { name, .. } = header {
                return Err(ExtractError::malformed(
                    token.pos,
                    &messages::FUNCTION_BODY_EXPECTED,
                    &[name.as_str()],
                ));
            }
        }

        match token.kind {
            SyntaxKind::FunctionKeyword => return self.parse_function_keyword(index),
            SyntaxKind::ClassKeyword => self.note_class_keyword(index),
            SyntaxKind::OpenBraceToken => {
                let kind = self.classify_brace(index);
                self.push_frame(Frame::new(kind, Some(index)));
            }
            SyntaxKind::OpenParenToken => self.push_frame(Frame::new(FrameKind::Paren, Some(index))),
            SyntaxKind::OpenBracketToken => self.push_frame(Frame::new(FrameKind::Bracket, Some(index))),
            SyntaxKind::TemplateHead => self.push_frame(Frame::new(FrameKind::Template, Some(index))),
            SyntaxKind::TemplateMiddle => self.expect_template_frame(index)?,
            SyntaxKind::CloseBraceToken
            | SyntaxKind::CloseParenToken
            | SyntaxKind::CloseBracketToken
            | SyntaxKind::TemplateTail => self.close_frame(index)?,
            SyntaxKind::NoSubstitutionTemplateLiteral => check_template_terminated(token)?,
            SyntaxKind::QuestionToken => self.top_mut().pending_conditionals += 1,
            SyntaxKind::ColonToken => self.note_colon(index),
            SyntaxKind::Unknown => {
                self.report(token.span(), &messages::UNRECOGNIZED_TOKEN_SKIPPED, &[token.display_text()])
            }
            _ => {}
        }
        Ok(index + 1)
    }

    // ========================================================================
    // Frames
    // ========================================================================

    fn top(&self) -> &Frame {
        self.frames.last().unwrap_or(&self.module)
    }

    fn top_mut(&mut self) -> &mut Frame {
        match self.frames.last_mut() {
            Some(frame) => frame,
            None => &mut self.module,
        }
    }

    fn push_frame(&mut self, frame: Frame) {
        trace!("open {:?} at token {:?}", frame.kind, frame.open);
        self.frames.push(frame);
    }

    fn close_frame(&mut self, index: usize) -> ExtractResult<()> {
        let tokens = self.tokens;
        let token = &tokens[index];
        check_template_terminated(token)?;
        let Some(frame) = self.frames.pop() else {
            return Err(stray_closer(token));
        };
        if frame.kind.closer() != Some(token.kind) {
            return Err(self.unclosed(&frame));
        }
        trace!("close {:?} at {}", frame.kind, token.pos);
        if let Some(handle) = frame.scope {
            self.tracker.exit(handle, token)?;
        }
        if let Some(header) = frame.header {
            self.expect_body = Some(header);
        }
        Ok(())
    }

    fn expect_template_frame(&self, index: usize) -> ExtractResult<()> {
        let token = &self.tokens[index];
        check_template_terminated(token)?;
        match self.frames.last() {
            Some(frame) if frame.kind == FrameKind::Template => Ok(()),
            Some(frame) => Err(self.unclosed(frame)),
            None => Err(stray_closer(token)),
        }
    }

    /// The error for a frame whose closer never arrived, reported at its opener.
    fn unclosed(&self, frame: &Frame) -> ExtractError {
        let opener = frame.open.and_then(|index| self.tokens.get(index));
        let offset = opener.map_or(0, |token| token.pos);
        let opener_text = opener.map_or("", |token| match token.kind {
            SyntaxKind::TemplateHead => "${",
            kind => kind.describe(),
        });
        ExtractError::malformed(
            offset,
            &messages::THE_PARSER_EXPECTED_TO_FIND_A_0_TO_MATCH_THE_1_TOKEN_HERE,
            &[frame.kind.closer_text(), opener_text],
        )
    }

    /// Decide what an opening brace at `index` opens.
    fn classify_brace(&mut self, index: usize) -> FrameKind {
        {
            let top = self.top_mut();
            if top.class_header {
                top.class_header = false;
                return FrameKind::ClassBody;
            }
        }
        let prev = self.previous(index).map(|(_, token)| token.kind);
        match prev {
            Some(SyntaxKind::EqualsGreaterThanToken) => return FrameKind::Body,
            // `export default { .. }` and `export { a, b }`.
            Some(SyntaxKind::DefaultKeyword | SyntaxKind::ExportKeyword) => return FrameKind::ObjectLiteral,
            _ => {}
        }
        match self.top().kind {
            kind if kind.is_statement_context() => {
                if self.at_statement_position(index) {
                    FrameKind::Block
                } else {
                    FrameKind::ObjectLiteral
                }
            }
            FrameKind::ClassBody => match prev {
                Some(SyntaxKind::CloseParenToken) => FrameKind::Body,
                Some(SyntaxKind::StaticKeyword) => FrameKind::Block,
                _ => FrameKind::ObjectLiteral,
            },
            FrameKind::ObjectLiteral if prev == Some(SyntaxKind::CloseParenToken) => FrameKind::Body,
            _ => FrameKind::ObjectLiteral,
        }
    }

    fn open_function_body(&mut self, index: usize, header: FunctionHeader) -> ExtractResult<()> {
        let token = &self.tokens[index];
        let frame = match header {
            FunctionHeader::Declaration { owner, .. } => {
                let handle = self.tracker.enter(token, owner)?;
                Frame {
                    scope: Some(handle),
                    ..Frame::new(FrameKind::FunctionBody, Some(index))
                }
            }
            FunctionHeader::Expression => Frame::new(FrameKind::Body, Some(index)),
        };
        self.push_frame(frame);
        Ok(())
    }

    // ========================================================================
    // Statement position
    // ========================================================================

    /// The nearest token before `index`, skipping unrecognized ones.
    fn previous(&self, index: usize) -> Option<(usize, &'t TokenInfo)> {
        let tokens = self.tokens;
        tokens[..index]
            .iter()
            .enumerate()
            .rev()
            .find(|(_, token)| token.kind != SyntaxKind::Unknown)
    }

    /// Whether the token at `lead` starts a statement in the innermost frame.
    fn at_statement_position(&self, lead: usize) -> bool {
        let top = self.top();
        if !top.kind.is_statement_context() {
            return false;
        }
        let Some((prev_index, prev)) = self.previous(lead) else {
            return true;
        };
        if ends_statement_prefix(prev.kind) {
            return true;
        }
        if prev.kind == SyntaxKind::ColonToken && top.statement_colon == Some(prev_index) {
            return true;
        }
        // Automatic semicolon insertion.
        self.tokens[lead].has_preceding_line_break()
            && (prev.kind.can_end_expression() || is_restricted_production(prev.kind))
    }

    fn note_colon(&mut self, index: usize) {
        let top = self.top_mut();
        if top.pending_conditionals > 0 {
            top.pending_conditionals -= 1;
        } else if top.kind.is_statement_context() {
            top.statement_colon = Some(index);
        }
    }

    fn note_class_keyword(&mut self, index: usize) {
        if self.previous(index).map_or(false, |(_, token)| token.kind.is_member_access()) {
            return;
        }
        let opens_class = self.tokens.get(index + 1).map_or(false, |next| {
            next.kind.is_binding_name()
                || matches!(next.kind, SyntaxKind::OpenBraceToken | SyntaxKind::ExtendsKeyword)
        });
        if opens_class {
            self.top_mut().class_header = true;
        }
    }

    // ========================================================================
    // Functions
    // ========================================================================

    fn parse_function_keyword(&mut self, index: usize) -> ExtractResult<usize> {
        let tokens = self.tokens;
        let keyword = &tokens[index];
        let before = self.previous(index);
        if before.map_or(false, |(_, token)| token.kind.is_member_access()) {
            return Ok(index + 1);
        }
        let lead = match before {
            Some((marker, token))
                if token.kind == SyntaxKind::AsyncKeyword && !keyword.has_preceding_line_break() =>
            {
                marker
            }
            _ => index,
        };

        let role = match self.top().kind {
            kind if kind.is_statement_context() => {
                if self.at_statement_position(lead) {
                    Role::Declaration
                } else {
                    Role::Expression
                }
            }
            FrameKind::ClassBody | FrameKind::ObjectLiteral => {
                if self.previous(lead).map_or(false, |(_, token)| precedes_property_value(token.kind)) {
                    Role::Expression
                } else {
                    Role::MemberName
                }
            }
            _ => Role::Expression,
        };
        trace!("function keyword at {} is {:?}", keyword.pos, role);

        match role {
            Role::MemberName => Ok(index + 1),
            Role::Expression => Ok(self.parse_function_expression(index)),
            Role::Declaration => self.parse_function_declaration(index, lead),
        }
    }

    fn kind_at(&self, index: usize) -> Option<SyntaxKind> {
        self.tokens.get(index).map(|token| token.kind)
    }

    /// Offset of the token at `index`, or the end of input past the last token.
    fn offset_at(&self, index: usize) -> TextPos {
        self.tokens.get(index).map_or_else(|| self.end_offset(), |token| token.pos)
    }

    fn end_offset(&self) -> TextPos {
        self.tokens.last().map_or(0, |token| token.end)
    }

    /// Skip a function expression's header and arm its parameter list, so
    /// that the brace after it opens a body.
    fn parse_function_expression(&mut self, index: usize) -> usize {
        let mut cursor = index + 1;
        if self.kind_at(cursor) == Some(SyntaxKind::AsteriskToken) {
            cursor += 1;
        }
        if self.kind_at(cursor).map_or(false, SyntaxKind::is_binding_name) {
            cursor += 1;
        }
        if self.kind_at(cursor) == Some(SyntaxKind::OpenParenToken) {
            self.push_frame(Frame {
                header: Some(FunctionHeader::Expression),
                ..Frame::new(FrameKind::Paren, Some(cursor))
            });
            cursor += 1;
        }
        cursor
    }

    fn parse_function_declaration(&mut self, index: usize, lead: usize) -> ExtractResult<usize> {
        let tokens = self.tokens;
        let keyword = &tokens[index];
        let before = self.previous(index).map(|(_, token)| token);

        let mut cursor = index + 1;
        if self.kind_at(cursor) == Some(SyntaxKind::AsteriskToken) {
            cursor += 1;
        }
        let name = match tokens.get(cursor) {
            Some(token) if token.kind.is_binding_name() => token,
            Some(token)
                if token.kind == SyntaxKind::OpenParenToken
                    && self.previous(lead).map(|(_, prev)| prev.kind) == Some(SyntaxKind::DefaultKeyword) =>
            {
                let span = TextSpan::from_bounds(tokens[lead].pos, keyword.end);
                self.report(span, &messages::ANONYMOUS_FUNCTION_DECLARATION_NOT_REPORTED, &[]);
                return Ok(self.parse_function_expression(index));
            }
            _ => {
                return Err(ExtractError::malformed(
                    self.offset_at(cursor),
                    &messages::IDENTIFIER_EXPECTED,
                    &[],
                ))
            }
        };
        cursor += 1;
        if self.kind_at(cursor) != Some(SyntaxKind::OpenParenToken) {
            return Err(ExtractError::malformed(
                self.offset_at(cursor),
                &messages::_0_EXPECTED,
                &["("],
            ));
        }

        let name = name.display_text().to_string();
        if let Some(marker) = before.filter(|marker| modifiers::is_detached_async(Some(*marker), keyword)) {
            self.report(marker.span(), &messages::NEWLINE_SEPARATES_ASYNC_FROM_FUNCTION, &[name.as_str()]);
        }
        let modifiers = modifiers::classify(before, keyword, &tokens[index + 1..]);
        debug!(
            "declaration '{}' [{}] at depth {}",
            name,
            modifiers,
            self.tracker.current_depth()
        );
        let owner = self.tracker.declare(name.clone(), modifiers, tokens[lead].pos);
        self.push_frame(Frame {
            header: Some(FunctionHeader::Declaration { owner, name }),
            ..Frame::new(FrameKind::Paren, Some(cursor))
        });
        Ok(cursor + 1)
    }

    // ========================================================================
    // Anomalies
    // ========================================================================

    fn report(&mut self, span: TextSpan, message: &DiagnosticMessage, args: &[&str]) {
        let diagnostic = Diagnostic::at(span, message, args);
        match diagnostic.category {
            DiagnosticCategory::Message => debug!("{}", diagnostic),
            _ => warn!("{}", diagnostic),
        }
        self.anomalies.add(diagnostic);
    }
}

fn check_template_terminated(token: &TokenInfo) -> ExtractResult<()> {
    if token.kind.is_template() && token.is_unterminated() {
        return Err(ExtractError::malformed(
            token.pos,
            &messages::UNTERMINATED_TEMPLATE_LITERAL,
            &[],
        ));
    }
    Ok(())
}

fn stray_closer(token: &TokenInfo) -> ExtractError {
    ExtractError::malformed(token.pos, &messages::UNEXPECTED_TOKEN_0, &[token.kind.describe()])
}
