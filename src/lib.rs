//! Upconversion of authoring-tool XML documents through successive schema
//! versions until they reach the current one.

pub mod config;
pub mod converters;
pub mod document_kind;
pub mod folder;
pub mod issues;
pub mod reader;
pub mod reporter;
pub mod schema;
pub mod schema_registry;
pub mod schema_version;
pub mod upconvert_engine;

#[cfg(test)]
mod fixtures;

// Re-export core types for convenience
pub use config::{ConfigError, UpconvertConfig};
pub use converters::{ConversionContext, MappingError, SchemaConverter};
pub use document_kind::{DocumentKind, SchemaDescriptor};
pub use folder::{DocumentFolder, FolderError, LocalFolder};
pub use issues::{ConversionIssueList, FileIssues};
pub use reader::{DocumentReader, ReadError, XmlDocumentReader};
pub use reporter::{ConversionReport, IssueReporter, ReportFormat};
pub use schema::SchemaTree;
pub use schema_registry::{ConverterRegistry, RegistryError};
pub use schema_version::SchemaVersion;
pub use upconvert_engine::{
    ConversionError, ConversionOutcome, ConvertOptions, ConvertedDocument, FolderOptions,
    FolderUpconversion, UpconvertEngine,
};
