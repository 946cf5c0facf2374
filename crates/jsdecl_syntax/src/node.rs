//! The declaration data model: function declaration records and the scope
//! tree they are collected into.

use crate::types::ModifierFlags;
use jsdecl_core::text::TextSpan;
use serde::Serialize;

/// One extracted named function declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDeclaration {
    /// The declared binding name.
    pub name: String,
    pub modifiers: ModifierFlags,
    /// Number of enclosing function bodies; 0 at module level.
    pub depth: u32,
    /// Name of the innermost enclosing declared function, if any.
    pub parent_name: Option<String>,
    /// From the first token of the declaration (`async` or `function`) to the
    /// end of its closing brace.
    pub span: TextSpan,
}

impl FunctionDeclaration {
    pub fn is_async(&self) -> bool {
        self.modifiers.contains(ModifierFlags::ASYNC)
    }

    pub fn is_generator(&self) -> bool {
        self.modifiers.contains(ModifierFlags::GENERATOR)
    }

    pub fn is_nested(&self) -> bool {
        self.depth > 0
    }
}

/// Kind of a lexical region that can own declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScopeKind {
    Module,
    FunctionBody,
}

/// A region of source holding declarations and nested function bodies.
///
/// `declarations` and `children` are both kept in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scope {
    pub kind: ScopeKind,
    pub span: TextSpan,
    pub declarations: Vec<FunctionDeclaration>,
    pub children: Vec<Scope>,
}

impl Scope {
    pub fn new(kind: ScopeKind, span: TextSpan) -> Self {
        Self {
            kind,
            span,
            declarations: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Total declarations in this scope and every scope beneath it.
    pub fn declaration_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(scope) = stack.pop() {
            count += scope.declarations.len();
            stack.extend(scope.children.iter());
        }
        count
    }
}
