//! Result emitter: flattens a scope tree into declaration records.

use jsdecl_syntax::{FunctionDeclaration, Scope};

/// Flatten `root` in pre-order: each scope's own declarations in source
/// order, then its child scopes in source order.
pub fn emit(root: &Scope) -> Vec<FunctionDeclaration> {
    let mut declarations = Vec::with_capacity(root.declaration_count());
    let mut stack = vec![root];
    while let Some(scope) = stack.pop() {
        declarations.extend(scope.declarations.iter().cloned());
        stack.extend(scope.children.iter().rev());
    }
    declarations
}
