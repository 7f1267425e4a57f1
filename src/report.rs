use serde::Serialize;

use crate::hit::Hit;

/// Hits found in one template file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// Root-relative path with `/` separators.
    pub path: String,
    pub hits: Vec<Hit>,
}

/// Findings for a whole run, in directory-walk order.
///
/// Only files with at least one hit are recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub files: Vec<FileReport>,
    pub total_hits: usize,
    pub total_files: usize,
}

impl Report {
    /// Records a file's hits; an empty list is dropped.
    pub fn record(&mut self, path: impl Into<String>, hits: Vec<Hit>) {
        if hits.is_empty() {
            return;
        }
        self.total_hits += hits.len();
        self.total_files += 1;
        self.files.push(FileReport {
            path: path.into(),
            hits,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
