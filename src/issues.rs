use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Elements dropped during conversion, keyed by source file then by a
/// description of the dropped element, valued by occurrence count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionIssueList {
    files: BTreeMap<String, BTreeMap<String, u32>>,
}

/// The issues recorded for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileIssues {
    pub file_id: String,
    pub issues: BTreeMap<String, u32>,
}

impl FileIssues {
    pub fn total(&self) -> u32 {
        self.issues.values().sum()
    }
}

impl ConversionIssueList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the count for `description` under `file_id`.
    pub fn add_issue(&mut self, file_id: &str, description: &str) {
        *self
            .files
            .entry(file_id.to_string())
            .or_default()
            .entry(description.to_string())
            .or_insert(0) += 1;
    }

    pub fn is_populated(&self) -> bool {
        !self.files.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, u32>)> {
        self.files.iter().map(|(file, issues)| (file.as_str(), issues))
    }

    pub fn issues_for(&self, file_id: &str) -> Option<&BTreeMap<String, u32>> {
        self.files.get(file_id)
    }

    pub fn count(&self, file_id: &str, description: &str) -> u32 {
        self.files
            .get(file_id)
            .and_then(|issues| issues.get(description))
            .copied()
            .unwrap_or(0)
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    /// Reads every entry and leaves the list empty.
    pub fn drain(&mut self) -> Vec<FileIssues> {
        std::mem::take(&mut self.files)
            .into_iter()
            .map(|(file_id, issues)| FileIssues { file_id, issues })
            .collect()
    }
}
