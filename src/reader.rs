use std::fmt;

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;
use tracing::warn;

use crate::document_kind::SchemaDescriptor;
use crate::schema::{SchemaTree, TreeError};

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("Malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Document has no root element")]
    MissingRoot,

    #[error("Document does not match its schema: {0}")]
    Tree(#[from] TreeError),

    #[error("Validation failed with {} finding(s): {}", .findings.len(), join(.findings))]
    Validation { findings: Vec<ValidationFinding> },
}

/// Something the reader noticed that a schema-valid document would not contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationFinding {
    RootElementMismatch {
        expected: &'static str,
        found: String,
    },
    ElementsNotRetained {
        input: usize,
        retained: usize,
    },
}

impl fmt::Display for ValidationFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationFinding::RootElementMismatch { expected, found } => {
                write!(f, "expected root element <{expected}>, found <{found}>")
            }
            ValidationFinding::ElementsNotRetained { input, retained } => write!(
                f,
                "{} of {input} element(s) are not part of the schema",
                input - retained
            ),
        }
    }
}

fn join(findings: &[ValidationFinding]) -> String {
    findings
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Turns document text into the typed tree a converter expects.
pub trait DocumentReader {
    /// Parses `text` as the descriptor's kind at the descriptor's version.
    ///
    /// With `strict` set, any validation finding fails the read; otherwise
    /// findings are logged and the parsed tree is returned.
    fn parse_and_validate(
        &self,
        descriptor: &SchemaDescriptor,
        text: &str,
        strict: bool,
    ) -> Result<SchemaTree, ReadError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct XmlDocumentReader;

impl XmlDocumentReader {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentReader for XmlDocumentReader {
    fn parse_and_validate(
        &self,
        descriptor: &SchemaDescriptor,
        text: &str,
        strict: bool,
    ) -> Result<SchemaTree, ReadError> {
        let root = sniff_root(text)?;
        let mut findings = Vec::new();

        let expected = descriptor.root_element();
        if root.name != expected {
            findings.push(ValidationFinding::RootElementMismatch {
                expected,
                found: root.name,
            });
        }

        let tree = SchemaTree::parse(descriptor.version, descriptor.kind, text)?;

        let input = count_elements(text)?;
        let retained = count_elements(&tree.to_xml()?)?;
        if input > retained {
            findings.push(ValidationFinding::ElementsNotRetained { input, retained });
        }

        if findings.is_empty() {
            return Ok(tree);
        }
        if strict {
            return Err(ReadError::Validation { findings });
        }
        for finding in &findings {
            warn!(
                kind = %descriptor.kind,
                version = %descriptor.version,
                "Validation finding: {finding}"
            );
        }
        Ok(tree)
    }
}

/// Name and `version` attribute of a document's root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootElement {
    pub name: String,
    pub version: Option<String>,
}

/// Reads events up to the first element and returns its local name and
/// `version` attribute. Nothing past the root start tag is examined.
pub fn sniff_root(text: &str) -> Result<RootElement, ReadError> {
    let mut reader = Reader::from_str(text);
    reader.trim_text(true);
    loop {
        match reader.read_event()? {
            Event::Start(element) | Event::Empty(element) => {
                let name = String::from_utf8_lossy(element.local_name().as_ref()).into_owned();
                // A blank version reads the same as a missing one.
                let version = match element.try_get_attribute("version")? {
                    Some(attribute) => {
                        Some(attribute.unescape_value()?.trim().to_string())
                            .filter(|version| !version.is_empty())
                    }
                    None => None,
                };
                return Ok(RootElement { name, version });
            }
            Event::Eof => return Err(ReadError::MissingRoot),
            _ => {}
        }
    }
}

/// The root element's `version` attribute, if present and not blank.
pub fn sniff_root_version(text: &str) -> Result<Option<String>, ReadError> {
    Ok(sniff_root(text)?.version)
}

fn count_elements(text: &str) -> Result<usize, ReadError> {
    let mut reader = Reader::from_str(text);
    let mut count = 0;
    loop {
        match reader.read_event()? {
            Event::Start(_) | Event::Empty(_) => count += 1,
            Event::Eof => return Ok(count),
            _ => {}
        }
    }
}
