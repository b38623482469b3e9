use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::issues::FileIssues;
use crate::schema_version::SchemaVersion;
use crate::upconvert_engine::FolderFailure;

/// Renders the issue record left over after a run.
pub struct IssueReporter {
    output_format: ReportFormat,
}

/// Available output formats for conversion reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Console,
    Json,
    Yaml,
}

/// Everything a run produced that the user should see.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionReport {
    pub target_version: SchemaVersion,
    pub updated: Vec<String>,
    pub failures: Vec<FailureEntry>,
    pub dropped_elements: Vec<FileIssues>,
    pub summary: ReportSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureEntry {
    pub file_id: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub files_converted: usize,
    pub files_failed: usize,
    pub files_with_losses: usize,
    pub elements_dropped: u32,
}

impl ConversionReport {
    pub fn is_lossless(&self) -> bool {
        self.dropped_elements.is_empty()
    }
}

impl IssueReporter {
    pub fn new() -> Self {
        Self {
            output_format: ReportFormat::Console,
        }
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Builds the report from a drained issue record.
    pub fn generate_report(
        &self,
        updated: Vec<String>,
        failures: &[FolderFailure],
        dropped_elements: Vec<FileIssues>,
    ) -> ConversionReport {
        let failures: Vec<FailureEntry> = failures
            .iter()
            .map(|failure| FailureEntry {
                file_id: failure.file_id.clone(),
                error: failure.error.to_string(),
            })
            .collect();
        let summary = ReportSummary {
            files_converted: updated.len(),
            files_failed: failures.len(),
            files_with_losses: dropped_elements.len(),
            elements_dropped: dropped_elements.iter().map(FileIssues::total).sum(),
        };

        ConversionReport {
            target_version: SchemaVersion::current(),
            updated,
            failures,
            dropped_elements,
            summary,
        }
    }

    /// Format the report according to the configured output format
    pub fn format_report(&self, report: &ConversionReport) -> Result<String, ReportError> {
        match self.output_format {
            ReportFormat::Console => self.format_console_report(report),
            ReportFormat::Json => self.format_json_report(report),
            ReportFormat::Yaml => self.format_yaml_report(report),
        }
    }

    fn format_console_report(&self, report: &ConversionReport) -> Result<String, ReportError> {
        let mut output = String::new();

        if report.is_lossless() && report.failures.is_empty() {
            writeln!(
                output,
                "✓ All documents converted to version {} with no information loss",
                report.target_version
            )?;
            return Ok(output);
        }

        output.push_str("=== Conversion Report ===\n\n");
        writeln!(output, "Target Version: {}", report.target_version)?;
        writeln!(output, "Files Converted: {}", report.summary.files_converted)?;

        if !report.failures.is_empty() {
            writeln!(output, "\nFailed ({}):", report.summary.files_failed)?;
            for failure in &report.failures {
                writeln!(output, "  ✗ {}: {}", failure.file_id, failure.error)?;
            }
        }

        if !report.is_lossless() {
            writeln!(
                output,
                "\nElements not carried over ({} in {} file(s)):",
                report.summary.elements_dropped, report.summary.files_with_losses
            )?;
            for file in &report.dropped_elements {
                writeln!(output, "  {}", file.file_id)?;
                for (element, count) in &file.issues {
                    writeln!(output, "    • {}: {}", element, count)?;
                }
            }
        }

        Ok(output)
    }

    fn format_json_report(&self, report: &ConversionReport) -> Result<String, ReportError> {
        serde_json::to_string_pretty(report)
            .map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format_yaml_report(&self, report: &ConversionReport) -> Result<String, ReportError> {
        serde_yaml::to_string(report).map_err(|e| ReportError::SerializationError(e.to_string()))
    }
}

impl Default for IssueReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}
