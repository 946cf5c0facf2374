//! jsdecl_parser: Function declaration extraction engine.
//!
//! Consumes the scanner's token stream and reports every named function
//! declaration with its modifiers, nesting depth and enclosing declaration.
//! The pieces run in order:
//! - the declaration parser walks the tokens and tracks delimiter frames
//! - the modifier classifier reads `async` / `*` around each `function`
//! - the scope tracker builds the tree of function body scopes
//! - the emitter flattens that tree in pre-order

mod emitter;
mod error;
mod modifiers;
mod parser;
mod tracker;
mod utilities;

pub use emitter::emit;
pub use error::{ExtractError, ExtractResult};
pub use modifiers::classify;
pub use parser::{ParseOutput, Parser};
pub use tracker::{ScopeHandle, ScopeTracker};

use jsdecl_diagnostics::DiagnosticCollection;
use jsdecl_syntax::{FunctionDeclaration, TokenInfo};
use serde::Serialize;

/// The result of extracting declarations from one source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// Declarations in pre-order.
    pub declarations: Vec<FunctionDeclaration>,
    /// Non-fatal findings: skipped constructs and lexical warnings.
    pub anomalies: DiagnosticCollection,
}

/// Parse a token stream into its module scope tree.
pub fn parse(tokens: &[TokenInfo]) -> ExtractResult<ParseOutput> {
    Parser::new(tokens).parse()
}

/// Extract the declarations of a token stream.
pub fn extract(tokens: &[TokenInfo]) -> ExtractResult<Extraction> {
    let output = parse(tokens)?;
    Ok(Extraction {
        declarations: emit(&output.root),
        anomalies: output.anomalies,
    })
}

/// Scan `text` and extract its declarations. Scanner diagnostics are merged
/// into the anomalies, ordered by position.
pub fn extract_source(text: &str) -> ExtractResult<Extraction> {
    let (tokens, mut anomalies) = jsdecl_scanner::tokenize(text);
    let extraction = extract(&tokens)?;
    anomalies.extend(extraction.anomalies);
    anomalies.sort();
    Ok(Extraction {
        declarations: extraction.declarations,
        anomalies,
    })
}
