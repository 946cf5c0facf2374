//! jsdecl_analyzer: Multi-file declaration analysis.
//!
//! Collects the source files of a run, extracts each one in parallel and
//! aggregates the results.

mod summary;

pub use summary::Summary;

use jsdecl_diagnostics::{messages, Diagnostic, DiagnosticCollection};
use jsdecl_options::{discover_source_files, Config, ConfigError};
use jsdecl_parser::{extract_source, ExtractError, Extraction};
use jsdecl_syntax::FunctionDeclaration;
use rayon::prelude::*;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

/// Application-level failures, as opposed to per-file failures.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("No input files found.")]
    NoInputFiles,
}

impl AnalyzerError {
    /// The diagnostic code shown for this error.
    pub fn code(&self) -> Option<u32> {
        match self {
            AnalyzerError::NoInputFiles => Some(messages::NO_INPUT_FILES_FOUND.code),
            _ => None,
        }
    }
}

/// One source file of a run. A file that could not be read keeps its place
/// with empty text and the reason in `read_error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub file_name: String,
    pub text: String,
    pub read_error: Option<String>,
}

/// Why a file produced no declarations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileError {
    #[error("cannot read file: {reason}")]
    Unreadable { reason: String },
    #[error(transparent)]
    Malformed(#[from] ExtractError),
}

impl FileError {
    /// The failure as a diagnostic stamped with `file_name`.
    pub fn to_diagnostic(&self, file_name: &str) -> Diagnostic {
        let diagnostic = match self {
            FileError::Unreadable { reason } => {
                Diagnostic::new(&messages::CANNOT_READ_FILE_0_1, &[file_name, reason.as_str()])
            }
            FileError::Malformed(err) => err.to_diagnostic(),
        };
        diagnostic.with_file(file_name)
    }
}

/// The extraction outcome for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub file_name: String,
    pub outcome: Result<Extraction, FileError>,
}

impl FileReport {
    pub fn is_failed(&self) -> bool {
        self.outcome.is_err()
    }

    /// Declarations of a successful extraction; empty for a failed one.
    pub fn declarations(&self) -> &[FunctionDeclaration] {
        match &self.outcome {
            Ok(extraction) => &extraction.declarations,
            Err(_) => &[],
        }
    }

    pub fn anomalies(&self) -> Option<&DiagnosticCollection> {
        self.outcome.as_ref().ok().map(|extraction| &extraction.anomalies)
    }

    pub fn failure(&self) -> Option<&FileError> {
        self.outcome.as_ref().err()
    }

    /// The extraction error of a file that was read but failed to parse.
    pub fn error(&self) -> Option<&ExtractError> {
        match self.failure() {
            Some(FileError::Malformed(err)) => Some(err),
            _ => None,
        }
    }

    /// The failure as a diagnostic stamped with this file's name.
    pub fn error_diagnostic(&self) -> Option<Diagnostic> {
        self.failure().map(|err| err.to_diagnostic(&self.file_name))
    }
}

impl Serialize for FileReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let empty = DiagnosticCollection::new();
        let mut report = serializer.serialize_struct("FileReport", 4)?;
        report.serialize_field("file", &self.file_name)?;
        report.serialize_field("declarations", self.declarations())?;
        report.serialize_field("anomalies", self.anomalies().unwrap_or(&empty))?;
        report.serialize_field("error", &self.error_diagnostic())?;
        report.end()
    }
}

/// A set of source files analyzed together.
#[derive(Debug, Default)]
pub struct Program {
    options: Config,
    source_files: Vec<SourceFile>,
}

impl Program {
    pub fn new(options: Config) -> Self {
        Self {
            options,
            source_files: Vec::new(),
        }
    }

    pub fn options(&self) -> &Config {
        &self.options
    }

    pub fn source_files(&self) -> &[SourceFile] {
        &self.source_files
    }

    /// Add an in-memory source file.
    pub fn add_source(&mut self, file_name: impl Into<String>, text: impl Into<String>) {
        self.source_files.push(SourceFile {
            file_name: file_name.into(),
            text: text.into(),
            read_error: None,
        });
    }

    /// Read `paths` from disk, in order. A missing file or one that is not
    /// valid UTF-8 is kept as a failed file; the others are still analyzed.
    pub fn load_files(&mut self, paths: &[String]) {
        for path in paths {
            match std::fs::read_to_string(path) {
                Ok(text) => self.add_source(path.as_str(), text),
                Err(err) => {
                    log::warn!("cannot read {}: {}", path, err);
                    self.source_files.push(SourceFile {
                        file_name: path.clone(),
                        text: String::new(),
                        read_error: Some(err.to_string()),
                    });
                }
            }
        }
    }

    /// Find the source files under `root_dir` selected by this program's
    /// options.
    pub fn discover(&self, root_dir: &str) -> Result<Vec<String>, AnalyzerError> {
        let files = discover_source_files(
            root_dir,
            &self.options.include,
            &self.options.exclude,
            &self.options.extensions,
        );
        if files.is_empty() {
            return Err(AnalyzerError::NoInputFiles);
        }
        Ok(files)
    }

    /// Extract every source file in parallel. Reports keep the order in which
    /// the files were added.
    pub fn analyze(&self) -> Vec<FileReport> {
        log::info!("analyzing {} source files", self.source_files.len());
        self.source_files.par_iter().map(analyze_file).collect()
    }
}

fn analyze_file(file: &SourceFile) -> FileReport {
    let outcome = match &file.read_error {
        Some(reason) => Err(FileError::Unreadable {
            reason: reason.clone(),
        }),
        None => extract_source(&file.text)
            .map(|mut extraction| {
                extraction.anomalies.set_file(&file.file_name);
                extraction
            })
            .map_err(FileError::from),
    };
    match &outcome {
        Ok(extraction) => log::debug!(
            "{}: {} declarations, {} anomalies",
            file.file_name,
            extraction.declarations.len(),
            extraction.anomalies.len()
        ),
        Err(err) => log::warn!("{}: {}", file.file_name, err),
    }
    FileReport {
        file_name: file.file_name.clone(),
        outcome,
    }
}
