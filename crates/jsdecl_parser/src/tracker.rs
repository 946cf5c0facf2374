//! Scope nesting tracker.
//!
//! Keeps the stack of open declaration scopes while the parser walks the
//! token stream. The module scope sits at the bottom of the stack for the
//! whole parse; function body scopes are pushed on their opening brace and
//! sealed into their parent on the matching closing brace, so the finished
//! tree is built bottom-up with each parent owning its children.

use crate::error::{ExtractError, ExtractResult};
use jsdecl_core::text::{TextPos, TextSpan};
use jsdecl_diagnostics::messages;
use jsdecl_syntax::{FunctionDeclaration, ModifierFlags, Scope, ScopeKind, TokenInfo};
use log::trace;

/// Identifies one open scope. Only the innermost open scope may be exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeHandle {
    id: u32,
}

#[derive(Debug)]
struct OpenScope {
    id: u32,
    scope: Scope,
    /// Index of the owning declaration in the parent scope.
    owner: usize,
    owner_name: String,
}

#[derive(Debug)]
pub struct ScopeTracker {
    root: Scope,
    open: Vec<OpenScope>,
    next_id: u32,
}

impl Default for ScopeTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeTracker {
    pub fn new() -> Self {
        Self {
            root: Scope::new(ScopeKind::Module, TextSpan::default()),
            open: Vec::new(),
            next_id: 0,
        }
    }

    fn innermost(&self) -> &Scope {
        self.open.last().map_or(&self.root, |open| &open.scope)
    }

    fn innermost_mut(&mut self) -> &mut Scope {
        match self.open.last_mut() {
            Some(open) => &mut open.scope,
            None => &mut self.root,
        }
    }

    /// Number of open function body scopes.
    pub fn current_depth(&self) -> u32 {
        self.open.len() as u32
    }

    /// Name of the declaration owning the innermost open function body.
    pub fn current_parent(&self) -> Option<&str> {
        self.open.last().map(|open| open.owner_name.as_str())
    }

    /// Append a declaration to the innermost open scope and return its index
    /// there. The span runs to `start` until the body is sealed.
    pub fn declare(&mut self, name: String, modifiers: ModifierFlags, start: TextPos) -> usize {
        let declaration = FunctionDeclaration {
            name,
            modifiers,
            depth: self.current_depth(),
            parent_name: self.current_parent().map(str::to_string),
            span: TextSpan::empty(start),
        };
        let declarations = &mut self.innermost_mut().declarations;
        declarations.push(declaration);
        declarations.len() - 1
    }

    /// Open a function body scope for the declaration at `owner` in the
    /// innermost scope.
    pub fn enter(&mut self, open: &TokenInfo, owner: usize) -> ExtractResult<ScopeHandle> {
        let Some(owner_name) = self
            .innermost()
            .declarations
            .get(owner)
            .map(|declaration| declaration.name.clone())
        else {
            return Err(ExtractError::malformed(
                open.pos,
                &messages::UNEXPECTED_TOKEN_0,
                &[open.display_text()],
            ));
        };
        let id = self.next_id;
        self.next_id += 1;
        trace!("enter scope {} for '{}' at {}", id, owner_name, open.pos);
        self.open.push(OpenScope {
            id,
            scope: Scope::new(ScopeKind::FunctionBody, TextSpan::empty(open.pos)),
            owner,
            owner_name,
        });
        Ok(ScopeHandle { id })
    }

    /// Seal the innermost scope at its closing brace and attach it to its parent.
    pub fn exit(&mut self, handle: ScopeHandle, close: &TokenInfo) -> ExtractResult<()> {
        let unexpected = || {
            ExtractError::malformed(close.pos, &messages::UNEXPECTED_TOKEN_0, &[close.display_text()])
        };
        if self.open.last().map(|open| open.id) != Some(handle.id) {
            return Err(unexpected());
        }
        let OpenScope { id, mut scope, owner, .. } = self.open.pop().ok_or_else(unexpected)?;
        trace!("exit scope {} at {}", id, close.end);
        scope.span = TextSpan::from_bounds(scope.span.start, close.end);
        let parent = self.innermost_mut();
        if let Some(declaration) = parent.declarations.get_mut(owner) {
            declaration.span = TextSpan::from_bounds(declaration.span.start, close.end);
        }
        parent.children.push(scope);
        Ok(())
    }

    /// Return the sealed module scope covering `0..end`.
    pub fn finish(mut self, end: TextPos) -> ExtractResult<Scope> {
        if let Some(open) = self.open.first() {
            return Err(ExtractError::malformed(
                open.scope.span.start,
                &messages::THE_PARSER_EXPECTED_TO_FIND_A_0_TO_MATCH_THE_1_TOKEN_HERE,
                &["}", "{"],
            ));
        }
        self.root.span = TextSpan::from_bounds(0, end);
        Ok(self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsdecl_syntax::SyntaxKind;

    fn brace(kind: SyntaxKind, pos: u32) -> TokenInfo {
        TokenInfo::new(kind, pos, pos + 1)
    }

    #[test]
    fn test_depth_and_parent_follow_open_scopes() {
        let mut tracker = ScopeTracker::new();
        let outer = tracker.declare("outer".into(), ModifierFlags::NONE, 0);
        assert_eq!(tracker.current_depth(), 0);
        let handle = tracker.enter(&brace(SyntaxKind::OpenBraceToken, 17), outer).unwrap();
        assert_eq!(tracker.current_depth(), 1);
        assert_eq!(tracker.current_parent(), Some("outer"));
        tracker.declare("inner".into(), ModifierFlags::ASYNC, 19);
        tracker.exit(handle, &brace(SyntaxKind::CloseBraceToken, 50)).unwrap();

        let root = tracker.finish(51).unwrap();
        assert_eq!(root.span, TextSpan::from_bounds(0, 51));
        assert_eq!(root.declarations[0].span, TextSpan::from_bounds(0, 51));
        let body = &root.children[0];
        assert_eq!(body.kind, ScopeKind::FunctionBody);
        assert_eq!(body.span, TextSpan::from_bounds(17, 51));
        assert_eq!(body.declarations[0].depth, 1);
        assert_eq!(body.declarations[0].parent_name.as_deref(), Some("outer"));
    }

    #[test]
    fn test_exit_requires_innermost_handle() {
        let mut tracker = ScopeTracker::new();
        let a = tracker.declare("a".into(), ModifierFlags::NONE, 0);
        let outer = tracker.enter(&brace(SyntaxKind::OpenBraceToken, 5), a).unwrap();
        let b = tracker.declare("b".into(), ModifierFlags::NONE, 6);
        let _inner = tracker.enter(&brace(SyntaxKind::OpenBraceToken, 12), b).unwrap();
        let err = tracker.exit(outer, &brace(SyntaxKind::CloseBraceToken, 20)).unwrap_err();
        assert_eq!(err.offset(), 20);
    }

    #[test]
    fn test_exit_without_open_scope_fails() {
        let mut tracker = ScopeTracker::new();
        let err = tracker
            .exit(ScopeHandle { id: 0 }, &brace(SyntaxKind::CloseBraceToken, 3))
            .unwrap_err();
        assert_eq!(err.offset(), 3);
    }

    #[test]
    fn test_finish_with_open_scope_fails() {
        let mut tracker = ScopeTracker::new();
        let f = tracker.declare("f".into(), ModifierFlags::NONE, 0);
        tracker.enter(&brace(SyntaxKind::OpenBraceToken, 13), f).unwrap();
        let err = tracker.finish(14).unwrap_err();
        assert_eq!(err.offset(), 13);
    }

    #[test]
    fn test_enter_unknown_owner_fails() {
        let mut tracker = ScopeTracker::new();
        assert!(tracker.enter(&brace(SyntaxKind::OpenBraceToken, 0), 0).is_err());
    }
}
