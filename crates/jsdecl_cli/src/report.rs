//! Text and diagnostic rendering for the command line.

use jsdecl_core::LineMap;
use jsdecl_diagnostics::Diagnostic;
use jsdecl_parser::ExtractError;
use jsdecl_syntax::FunctionDeclaration;
use miette::{NamedSource, SourceSpan};
use thiserror::Error;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// One declaration as a report line:
/// `file:line:col  name  depth=N  parent=P  [async] [generator]`, indented by depth.
pub fn format_declaration(
    file: &str,
    line_map: &LineMap,
    declaration: &FunctionDeclaration,
    use_color: bool,
) -> String {
    let location = line_map.line_and_column_of(declaration.span.start);
    let indent = "  ".repeat(declaration.depth as usize);
    let parent = declaration.parent_name.as_deref().unwrap_or("-");
    let tags: String = declaration
        .modifiers
        .names()
        .map(|name| format!("  [{}]", name))
        .collect();
    if use_color {
        format!(
            "{}{}{}:{}{}  {}{}{}  {}depth={}  parent={}{}{}{}{}",
            indent,
            CYAN,
            file,
            location,
            RESET,
            BOLD,
            declaration.name,
            RESET,
            GRAY,
            declaration.depth,
            parent,
            RESET,
            YELLOW,
            tags,
            RESET
        )
    } else {
        format!(
            "{}{}:{}  {}  depth={}  parent={}{}",
            indent, file, location, declaration.name, declaration.depth, parent, tags
        )
    }
}

/// An anomaly as `file:line:col: warning JSDnnnn: message`.
pub fn format_anomaly(diagnostic: &Diagnostic, line_map: &LineMap) -> String {
    let file = diagnostic.file.as_deref().unwrap_or("<input>");
    let location = diagnostic
        .span
        .map(|span| format!(":{}", line_map.line_and_column_of(span.start)))
        .unwrap_or_default();
    format!(
        "{}{}: {} JSD{}: {}",
        file, location, diagnostic.category, diagnostic.code, diagnostic.message_text
    )
}

/// A fatal extraction error pointing into the file's source.
#[derive(Debug, Error, miette::Diagnostic)]
#[error("{message}")]
#[diagnostic(
    code(jsdecl::malformed_source),
    help("no declarations are reported for a file that fails to parse")
)]
pub struct MalformedSourceReport {
    message: String,
    #[source_code]
    source_code: NamedSource<String>,
    #[label("here")]
    span: SourceSpan,
}

impl MalformedSourceReport {
    pub fn new(file: &str, text: &str, err: &ExtractError) -> Self {
        let offset = (err.offset() as usize).min(text.len());
        Self {
            message: format!("JSD{}: {}", err.code(), err.message()),
            source_code: NamedSource::new(file, text.to_string()),
            span: SourceSpan::from((offset, 0)),
        }
    }

    pub fn offset(&self) -> usize {
        self.span.offset()
    }
}
