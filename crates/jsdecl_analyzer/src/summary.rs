//! Aggregate counts over a run.

use crate::FileReport;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub files: usize,
    pub failed: usize,
    pub declarations: usize,
    /// Declarations with a parent declaration.
    pub nested: usize,
    pub max_depth: u32,
    pub anomalies: usize,
    /// Declaration count per modifier name.
    pub modifiers: FxHashMap<&'static str, usize>,
}

impl Summary {
    pub fn from_reports(reports: &[FileReport]) -> Self {
        let mut summary = Summary {
            files: reports.len(),
            ..Summary::default()
        };
        for report in reports {
            if report.is_failed() {
                summary.failed += 1;
            }
            summary.anomalies += report.anomalies().map_or(0, |anomalies| anomalies.len());
            for declaration in report.declarations() {
                summary.declarations += 1;
                if declaration.is_nested() {
                    summary.nested += 1;
                }
                summary.max_depth = summary.max_depth.max(declaration.depth);
                for name in declaration.modifiers.names() {
                    *summary.modifiers.entry(name).or_insert(0) += 1;
                }
            }
        }
        summary
    }

    pub fn async_count(&self) -> usize {
        self.modifiers.get("async").copied().unwrap_or(0)
    }

    pub fn generator_count(&self) -> usize {
        self.modifiers.get("generator").copied().unwrap_or(0)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files ({} failed), {} declarations: {} async, {} generator, {} nested, max depth {}; {} anomalies",
            self.files,
            self.failed,
            self.declarations,
            self.async_count(),
            self.generator_count(),
            self.nested,
            self.max_depth,
            self.anomalies
        )
    }
}
