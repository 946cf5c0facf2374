//! jsdecl_syntax: Token kinds, flag types and the declaration data model.
//!
//! The token vocabulary is a closed enum so the declaration parser can match
//! on it exhaustively. The data model describes what extraction produces: a
//! tree of scopes holding function declaration records.

pub mod node;
pub mod syntax_kind;
pub mod token;
pub mod types;

// Re-export key types
pub use node::{FunctionDeclaration, Scope, ScopeKind};
pub use syntax_kind::SyntaxKind;
pub use token::TokenInfo;
pub use types::{ModifierFlags, TokenFlags};
