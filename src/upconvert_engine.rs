use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::converters::{continue_chain, ChainError, ConversionContext, MappingError, SchemaConverter};
use crate::document_kind::{DocumentKind, SchemaDescriptor};
use crate::folder::{DocumentFolder, FolderError};
use crate::issues::{ConversionIssueList, FileIssues};
use crate::reader::{sniff_root_version, DocumentReader, ReadError, XmlDocumentReader};
use crate::schema::{SchemaTree, TreeError};
use crate::schema_registry::ConverterRegistry;
use crate::schema_version::SchemaVersion;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error(
        "{file_id}: version '{version}' is not supported ({reason}); supported versions are {} to {}",
        SchemaVersion::minimum(),
        SchemaVersion::current()
    )]
    UnsupportedVersion {
        file_id: String,
        version: String,
        reason: String,
    },

    #[error("{file_id}: the root element has no version attribute; confirm to treat it as {}", SchemaVersion::minimum())]
    UnknownVersion { file_id: String },

    #[error("{file_id}: converting the {kind} from {from} to {to} failed: {source}")]
    StructuralMismatch {
        file_id: String,
        kind: DocumentKind,
        from: SchemaVersion,
        to: SchemaVersion,
        #[source]
        source: MappingError,
    },

    #[error("{file_id}: the conversion chain is broken: {source}")]
    Chain {
        file_id: String,
        #[source]
        source: ChainError,
    },

    #[error("{file_id}: {source}")]
    Read {
        file_id: String,
        #[source]
        source: ReadError,
    },

    #[error("{file_id}: failed to serialize the converted document: {source}")]
    Serialize {
        file_id: String,
        #[source]
        source: TreeError,
    },

    #[error(transparent)]
    Io(#[from] FolderError),

    #[error("No converters are registered")]
    RegistryUnavailable,
}

impl ConversionError {
    fn unsupported(file_id: &str, version: impl Into<String>, reason: impl Into<String>) -> Self {
        ConversionError::UnsupportedVersion {
            file_id: file_id.to_string(),
            version: version.into(),
            reason: reason.into(),
        }
    }
}

/// Per-call switches for [`UpconvertEngine::convert_document`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Treat a document without a version attribute as the oldest supported version.
    pub confirm_unknown_version: bool,
    pub strict_validation: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FolderOptions {
    pub convert: ConvertOptions,
    pub make_backup: bool,
    /// Convert everything but write nothing back.
    pub dry_run: bool,
}

/// Where a version string leads.
#[derive(Debug, Clone)]
pub enum Resolution {
    AlreadyCurrent,
    Convert {
        /// The version the converter is registered under.
        version: SchemaVersion,
        converter: Arc<dyn SchemaConverter>,
    },
}

#[derive(Debug, Clone)]
pub enum ConversionOutcome {
    AlreadyCurrent,
    Converted(ConvertedDocument),
}

/// A document brought to the current version.
#[derive(Debug, Clone)]
pub struct ConvertedDocument {
    pub file_id: String,
    pub kind: DocumentKind,
    pub source_version: SchemaVersion,
    pub tree: SchemaTree,
    /// The converted tree as an XML document.
    pub xml: String,
    /// Dropped elements recorded for this document, in the order found.
    pub issues: Vec<String>,
}

/// A conversion whose issues are not yet in the engine's record.
struct Staged {
    document: ConvertedDocument,
    context: ConversionContext,
}

#[derive(Debug)]
pub struct FolderFailure {
    pub file_id: String,
    pub error: ConversionError,
}

#[derive(Debug, Default)]
pub struct FolderUpconversion {
    /// Files brought to the current version, root first.
    pub updated: Vec<String>,
    pub failures: Vec<FolderFailure>,
}

impl FolderUpconversion {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Drives documents through the converter chain.
pub struct UpconvertEngine<R = XmlDocumentReader> {
    registry: ConverterRegistry,
    reader: R,
    schema_root: PathBuf,
    issues: ConversionIssueList,
}

impl UpconvertEngine<XmlDocumentReader> {
    pub fn new(registry: ConverterRegistry) -> Self {
        Self::with_reader(registry, XmlDocumentReader)
    }
}

impl<R: DocumentReader> UpconvertEngine<R> {
    pub fn with_reader(registry: ConverterRegistry, reader: R) -> Self {
        Self {
            registry,
            reader,
            schema_root: PathBuf::from("schemas"),
            issues: ConversionIssueList::new(),
        }
    }

    pub fn with_schema_root(mut self, schema_root: impl Into<PathBuf>) -> Self {
        self.schema_root = schema_root.into();
        self
    }

    pub fn registry(&self) -> &ConverterRegistry {
        &self.registry
    }

    /// Issues recorded by successful conversions so far.
    pub fn issues(&self) -> &ConversionIssueList {
        &self.issues
    }

    /// Returns every recorded issue and empties the record.
    pub fn drain_issues(&mut self) -> Vec<FileIssues> {
        self.issues.drain()
    }

    /// Resolves the converter that starts the chain for `version`.
    pub fn resolve_converter_for_version(&self, version: &str) -> Result<Resolution, ConversionError> {
        if self.registry.is_empty() {
            return Err(ConversionError::RegistryUnavailable);
        }
        let version = version.trim();
        match parse_version(version, version)? {
            Some(parsed) => self.resolve_parsed(parsed, version),
            None => Ok(Resolution::AlreadyCurrent),
        }
    }

    fn resolve_parsed(&self, version: SchemaVersion, file_id: &str) -> Result<Resolution, ConversionError> {
        if !version.is_supported() {
            return Err(ConversionError::unsupported(
                file_id,
                version.to_string(),
                "outside the supported range",
            ));
        }
        if version.is_current() {
            return Ok(Resolution::AlreadyCurrent);
        }
        match self.registry.resolve(version) {
            Some((version, converter)) => Ok(Resolution::Convert { version, converter }),
            None => Err(ConversionError::unsupported(
                file_id,
                version.to_string(),
                "no converter is registered at or below it",
            )),
        }
    }

    /// Converts one document of `kind` to the current version.
    ///
    /// Issues are added to the engine's record only when the whole chain
    /// succeeds and the result serializes.
    pub fn convert_document(
        &mut self,
        kind: DocumentKind,
        file_id: &str,
        text: &str,
        options: ConvertOptions,
    ) -> Result<ConversionOutcome, ConversionError> {
        match self.stage(kind, file_id, text, options)? {
            Some(staged) => Ok(ConversionOutcome::Converted(self.commit(staged))),
            None => Ok(ConversionOutcome::AlreadyCurrent),
        }
    }

    /// Reads, converts and writes back one file. Returns whether the file
    /// was converted.
    ///
    /// Issues are recorded only after the write succeeds, so a file that
    /// could not be written leaves no trace in the engine's record.
    pub fn upconvert_file(
        &mut self,
        kind: DocumentKind,
        file: &Path,
        folder: &dyn DocumentFolder,
        options: FolderOptions,
    ) -> Result<bool, ConversionError> {
        let file_id = file.display().to_string();
        let text = folder.read_document(file)?;
        let Some(staged) = self.stage(kind, &file_id, &text, options.convert)? else {
            return Ok(false);
        };
        if options.dry_run {
            debug!(file = %file_id, "Dry run, not writing");
        } else {
            folder.write_back(file, &staged.document.xml, options.make_backup)?;
        }
        self.commit(staged);
        Ok(true)
    }

    /// Runs the chain and serializes the result. `None` means the document
    /// is already current.
    fn stage(
        &self,
        kind: DocumentKind,
        file_id: &str,
        text: &str,
        options: ConvertOptions,
    ) -> Result<Option<Staged>, ConversionError> {
        if self.registry.is_empty() {
            return Err(ConversionError::RegistryUnavailable);
        }
        let read_error = |source| ConversionError::Read {
            file_id: file_id.to_string(),
            source,
        };

        let version = match sniff_root_version(text).map_err(read_error)? {
            Some(raw) => match parse_version(&raw, file_id)? {
                Some(version) => version,
                None => {
                    debug!(file = file_id, "Already at the current version");
                    return Ok(None);
                }
            },
            None if options.confirm_unknown_version => {
                warn!(
                    file = file_id,
                    assumed = %SchemaVersion::minimum(),
                    "Document has no version attribute, treating it as the oldest supported version"
                );
                SchemaVersion::minimum()
            }
            None => {
                return Err(ConversionError::UnknownVersion {
                    file_id: file_id.to_string(),
                })
            }
        };

        let converter = match self.resolve_parsed(version, file_id)? {
            Resolution::AlreadyCurrent => return Ok(None),
            Resolution::Convert { converter, .. } => converter,
        };

        let descriptor = SchemaDescriptor::new(kind, version, &self.schema_root)
            .ok_or_else(|| {
                ConversionError::unsupported(
                    file_id,
                    version.to_string(),
                    format!("no {kind} schema exists before {}", kind.first_version()),
                )
            })?;

        let tree = self
            .reader
            .parse_and_validate(&descriptor, text, options.strict_validation)
            .map_err(read_error)?;

        let mut context = ConversionContext::new(file_id);
        let tree = continue_chain(&self.registry, converter, tree, &mut context).map_err(
            |error| match error {
                ChainError::Step { from, to, source } => ConversionError::StructuralMismatch {
                    file_id: file_id.to_string(),
                    kind,
                    from,
                    to,
                    source,
                },
                other => ConversionError::Chain {
                    file_id: file_id.to_string(),
                    source: other,
                },
            },
        )?;

        let xml = tree
            .to_xml()
            .map(|body| format!("{XML_DECLARATION}{body}"))
            .map_err(|source| ConversionError::Serialize {
                file_id: file_id.to_string(),
                source,
            })?;

        Ok(Some(Staged {
            document: ConvertedDocument {
                file_id: file_id.to_string(),
                kind,
                source_version: version,
                tree,
                xml,
                issues: context.issues().to_vec(),
            },
            context,
        }))
    }

    fn commit(&mut self, staged: Staged) -> ConvertedDocument {
        let Staged { document, context } = staged;
        context.commit(&mut self.issues);
        info!(
            file = %document.file_id,
            kind = %document.kind,
            from = %document.source_version,
            to = %SchemaVersion::current(),
            dropped = document.issues.len(),
            "Converted document"
        );
        document
    }

    /// Converts the root document, then every auxiliary document in its folder.
    ///
    /// A failure on the root aborts the batch. Auxiliary failures are
    /// collected and the remaining files are still attempted.
    pub fn upconvert_folder(
        &mut self,
        root_kind: DocumentKind,
        root_file: &Path,
        folder: &dyn DocumentFolder,
        options: FolderOptions,
    ) -> Result<FolderUpconversion, ConversionError> {
        let mut result = FolderUpconversion::default();

        let root_id = root_file.display().to_string();
        let root_path = canonical(root_file);
        if !self.upconvert_file(root_kind, root_file, folder, options)? {
            info!(file = %root_id, "Root document is already current, nothing to do");
            return Ok(result);
        }
        result.updated.push(root_id);

        for kind in DocumentKind::AUXILIARY {
            let files = match folder.find_files_by_extension(kind.extension()) {
                Ok(files) => files,
                Err(error) => {
                    result.failures.push(FolderFailure {
                        file_id: kind.extension().to_string(),
                        error: error.into(),
                    });
                    continue;
                }
            };
            for file in files.iter().filter(|file| canonical(file) != root_path) {
                let file_id = file.display().to_string();
                match self.upconvert_file(kind, file, folder, options) {
                    Ok(true) => result.updated.push(file_id),
                    Ok(false) => {}
                    Err(error) => {
                        warn!(file = %file_id, %error, "Failed to convert document");
                        result.failures.push(FolderFailure { file_id, error });
                    }
                }
            }
        }

        info!(
            updated = result.updated.len(),
            failed = result.failures.len(),
            "Folder upconversion finished"
        );
        Ok(result)
    }
}

/// The resolved form of `path`, or `path` itself when it cannot be resolved.
fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// Parses a root version string. `None` means the string names the current
/// version, which is checked by string comparison before any parsing.
fn parse_version(raw: &str, file_id: &str) -> Result<Option<SchemaVersion>, ConversionError> {
    if raw == SchemaVersion::current().to_string() {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|_| ConversionError::unsupported(file_id, raw, "not a version number"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::v10_v11::CONCEPT_ATTRIBUTE_ISSUE;
    use crate::folder::LocalFolder;
    use crate::schema::{v11, v7};
    use std::fs;

    const V2_GUIDANCE_COURSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Course version="2.0" name="Intro">
    <transitions>
        <Guidance><message>Welcome aboard</message></Guidance>
    </transitions>
</Course>"#;

    const V10_METADATA: &str = r#"<Metadata version="10.0">
    <PresentAt><MerrillQuadrant>Rule</MerrillQuadrant></PresentAt>
    <Simple value="cover.html"/>
    <Concepts>
        <Concept name="Cover">
            <ActivityType>
                <Passive>
                    <Attributes>
                        <Attribute value="Auditory"/>
                        <Attribute value="Visual"/>
                    </Attributes>
                </Passive>
            </ActivityType>
        </Concept>
    </Concepts>
</Metadata>"#;

    const LEARNER_CONFIG: &str = r#"<LearnerConfiguration version="4.0">
    <Inputs>
        <Input>
            <Classifier><classifierImpl>learner.clusterer.BasicClusterer</classifierImpl></Classifier>
            <Predictor><predictorImpl>learner.predictor.BasicPredictor</predictorImpl></Predictor>
            <Translator><translatorImpl>learner.translator.BasicTranslator</translatorImpl></Translator>
        </Input>
    </Inputs>
</LearnerConfiguration>"#;

    fn engine() -> UpconvertEngine {
        UpconvertEngine::new(ConverterRegistry::standard().unwrap())
    }

    fn convert(
        engine: &mut UpconvertEngine,
        kind: DocumentKind,
        file_id: &str,
        text: &str,
    ) -> Result<ConversionOutcome, ConversionError> {
        engine.convert_document(kind, file_id, text, ConvertOptions::default())
    }

    fn converted(outcome: ConversionOutcome) -> ConvertedDocument {
        match outcome {
            ConversionOutcome::Converted(document) => document,
            ConversionOutcome::AlreadyCurrent => panic!("expected a conversion"),
        }
    }

    #[test]
    fn test_resolve_rejects_out_of_range_versions() {
        let engine = engine();
        for version in ["1.9", "99.0", "11.1", "two"] {
            assert!(
                matches!(
                    engine.resolve_converter_for_version(version),
                    Err(ConversionError::UnsupportedVersion { .. })
                ),
                "{version} should be unsupported"
            );
        }
    }

    #[test]
    fn test_resolve_current_and_fallback() {
        let engine = engine();
        assert!(matches!(
            engine.resolve_converter_for_version("11.0"),
            Ok(Resolution::AlreadyCurrent)
        ));
        assert!(matches!(
            engine.resolve_converter_for_version("11.0.2"),
            Ok(Resolution::AlreadyCurrent)
        ));
        match engine.resolve_converter_for_version("5.1").unwrap() {
            Resolution::Convert { version, converter } => {
                assert_eq!(version, SchemaVersion::new(5, 0, 0));
                assert_eq!(converter.name(), "v5_to_v6");
            }
            Resolution::AlreadyCurrent => panic!("5.1 is not current"),
        }
    }

    #[test]
    fn test_empty_registry_is_unavailable() {
        let mut engine = UpconvertEngine::new(ConverterRegistry::new());
        assert!(matches!(
            engine.resolve_converter_for_version("2.0"),
            Err(ConversionError::RegistryUnavailable)
        ));
        assert!(matches!(
            convert(&mut engine, DocumentKind::Course, "a.course.xml", V2_GUIDANCE_COURSE),
            Err(ConversionError::RegistryUnavailable)
        ));
    }

    #[test]
    fn test_current_document_is_untouched() {
        let mut engine = engine();
        let text = r#"<Course version="11.0" name="Intro"><transitions/></Course>"#;
        let outcome = convert(&mut engine, DocumentKind::Course, "a.course.xml", text).unwrap();
        assert!(matches!(outcome, ConversionOutcome::AlreadyCurrent));
        assert!(!engine.issues().is_populated());
    }

    #[test]
    fn test_guidance_course_end_to_end() {
        let mut engine = engine();
        let document = converted(
            convert(&mut engine, DocumentKind::Course, "intro.course.xml", V2_GUIDANCE_COURSE)
                .unwrap(),
        );
        assert_eq!(document.source_version, SchemaVersion::new(2, 0, 0));
        assert_eq!(document.tree.version_attribute(), Some("11.0"));
        assert!(document.issues.is_empty());
        assert_eq!(engine.issues().issues_for("intro.course.xml"), None);

        let SchemaTree::V11(v11::Document::Course(course)) = &document.tree else {
            panic!("expected an 11.0 course");
        };
        assert_eq!(course.transitions.transition.len(), 1);
        let v11::course::Transition::Guidance(guidance) = &course.transitions.transition[0] else {
            panic!("expected guidance");
        };
        assert!(matches!(
            &guidance.choice,
            v11::course::GuidanceChoice::Message(message) if message.content == "Welcome aboard"
        ));

        let xml = &document.xml;
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains(r#"version="11.0""#));
    }

    #[test]
    fn test_metadata_attributes_are_reported() {
        let mut engine = engine();
        let document = converted(
            convert(&mut engine, DocumentKind::Metadata, "cover.metadata.xml", V10_METADATA)
                .unwrap(),
        );
        assert_eq!(
            engine.issues().count("cover.metadata.xml", CONCEPT_ATTRIBUTE_ISSUE),
            2
        );
        assert_eq!(document.issues.len(), 2);

        let SchemaTree::V11(v11::Document::Metadata(metadata)) = &document.tree else {
            panic!("expected 11.0 metadata");
        };
        assert_eq!(
            metadata.concepts.concept[0].activity_type.as_ref().unwrap().kind,
            v11::metadata::ActivityKind::Passive(v11::metadata::EmptyActivity {})
        );

        let drained = engine.drain_issues();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].total(), 2);
        assert!(!engine.issues().is_populated());
    }

    #[test]
    fn test_chain_is_total_from_every_registered_version() {
        let mut engine = engine();
        let versions: Vec<SchemaVersion> = engine
            .registry()
            .versions()
            .iter()
            .copied()
            .filter(|version| *version >= SchemaVersion::new(4, 0, 0))
            .collect();
        assert!(!versions.is_empty());

        for version in versions {
            let mut steps = 1;
            let mut cursor = version;
            while let Some((next, _)) = engine.registry().next_after(cursor) {
                steps += 1;
                cursor = next;
            }
            let expected = engine
                .registry()
                .versions()
                .iter()
                .filter(|registered| **registered >= version)
                .count();
            assert_eq!(steps, expected);

            let text = LEARNER_CONFIG.replace("version=\"4.0\"", &format!("version=\"{version}\""));
            let document = converted(
                convert(&mut engine, DocumentKind::LearnerConfig, "a.learnerconfig.xml", &text)
                    .unwrap(),
            );
            assert_eq!(document.tree.generation(), SchemaVersion::current(), "from {version}");
            assert_eq!(document.tree.version_attribute(), Some("11.0"));
        }
    }

    #[test]
    fn test_intermediate_version_uses_fallback() {
        let mut engine = engine();
        let text = r#"<Course version="5.1" name="Intro"><transitions><AAR/></transitions></Course>"#;
        let document = converted(convert(&mut engine, DocumentKind::Course, "a.course.xml", text).unwrap());
        assert_eq!(document.source_version, SchemaVersion::new(5, 1, 0));
        assert_eq!(document.tree.version_attribute(), Some("11.0"));
    }

    #[test]
    fn test_missing_version_needs_confirmation() {
        let mut engine = engine();
        let text = r#"<Course name="Intro"><transitions><Guidance><message>Hi</message></Guidance></transitions></Course>"#;

        let err = convert(&mut engine, DocumentKind::Course, "a.course.xml", text).unwrap_err();
        assert!(matches!(err, ConversionError::UnknownVersion { .. }));

        let options = ConvertOptions {
            confirm_unknown_version: true,
            ..ConvertOptions::default()
        };
        let document = converted(
            engine
                .convert_document(DocumentKind::Course, "a.course.xml", text, options)
                .unwrap(),
        );
        assert_eq!(document.source_version, SchemaVersion::minimum());
    }

    #[test]
    fn test_unsupported_document_versions() {
        let mut engine = engine();
        for version in ["1.9", "99.0", "latest"] {
            let text = format!(r#"<Course version="{version}" name="Intro"><transitions/></Course>"#);
            let err = convert(&mut engine, DocumentKind::Course, "a.course.xml", &text).unwrap_err();
            assert!(
                matches!(err, ConversionError::UnsupportedVersion { .. }),
                "{version}: {err}"
            );
        }
    }

    #[test]
    fn test_kind_older_than_its_first_schema() {
        let mut engine = engine();
        let text = r#"<Metadata version="3.0"/>"#;
        let err = convert(&mut engine, DocumentKind::Metadata, "a.metadata.xml", text).unwrap_err();
        let ConversionError::UnsupportedVersion { reason, .. } = err else {
            panic!("expected an unsupported version");
        };
        assert!(reason.contains("5.0"));
    }

    #[test]
    fn test_structural_mismatch_names_the_step() {
        let mut engine = engine();
        let text = r#"<Metadata version="7.0">
            <MerrillQuadrant>Rule</MerrillQuadrant>
            <Concepts><Concept name="Cover"/></Concepts>
        </Metadata>"#;
        let err = convert(&mut engine, DocumentKind::Metadata, "a.metadata.xml", text).unwrap_err();
        match err {
            ConversionError::StructuralMismatch {
                file_id,
                kind,
                from,
                to,
                source,
            } => {
                assert_eq!(file_id, "a.metadata.xml");
                assert_eq!(kind, DocumentKind::Metadata);
                assert_eq!(from, SchemaVersion::new(7, 0, 0));
                assert_eq!(to, SchemaVersion::new(8, 0, 0));
                assert_eq!(source, MappingError::MissingRequired("metadata content reference"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!engine.issues().is_populated());
    }

    #[test]
    fn test_malformed_document_is_a_read_error() {
        let mut engine = engine();
        let err = convert(&mut engine, DocumentKind::Course, "a.course.xml", "not xml at all")
            .unwrap_err();
        assert!(matches!(err, ConversionError::Read { .. }));
    }

    fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_folder_upconversion_continues_past_failures() {
        let dir = tempfile::tempdir().unwrap();
        let root = write(dir.path(), "intro.course.xml", V2_GUIDANCE_COURSE);
        write(dir.path(), "cover.metadata.xml", V10_METADATA);
        write(
            dir.path(),
            "broken.metadata.xml",
            r#"<Metadata version="7.0"><MerrillQuadrant>Rule</MerrillQuadrant><Concepts/></Metadata>"#,
        );
        write(dir.path(), "learner.learnerconfig.xml", LEARNER_CONFIG);
        write(
            dir.path(),
            "done.learnerconfig.xml",
            &LEARNER_CONFIG.replace("4.0", "11.0"),
        );

        let mut engine = engine();
        let folder = LocalFolder::new(dir.path());
        let options = FolderOptions {
            make_backup: true,
            ..FolderOptions::default()
        };
        let result = engine
            .upconvert_folder(DocumentKind::Course, &root, &folder, options)
            .unwrap();

        let id = |name: &str| dir.path().join(name).display().to_string();
        assert_eq!(
            result.updated,
            vec![
                id("intro.course.xml"),
                id("cover.metadata.xml"),
                id("learner.learnerconfig.xml"),
            ]
        );
        assert_eq!(result.failures.len(), 1);
        assert_eq!(result.failures[0].file_id, id("broken.metadata.xml"));
        assert!(matches!(
            result.failures[0].error,
            ConversionError::StructuralMismatch { .. }
        ));

        let rewritten = fs::read_to_string(&root).unwrap();
        assert!(rewritten.contains(r#"version="11.0""#));
        assert_eq!(
            fs::read_to_string(dir.path().join("intro.course.xml.bak")).unwrap(),
            V2_GUIDANCE_COURSE
        );
        assert_eq!(engine.issues().count(&id("cover.metadata.xml"), CONCEPT_ATTRIBUTE_ISSUE), 2);
    }

    #[test]
    fn test_current_root_makes_folder_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let root = write(
            dir.path(),
            "intro.course.xml",
            r#"<Course version="11.0" name="Intro"><transitions/></Course>"#,
        );
        write(dir.path(), "cover.metadata.xml", V10_METADATA);

        let mut engine = engine();
        let folder = LocalFolder::new(dir.path());
        let result = engine
            .upconvert_folder(DocumentKind::Course, &root, &folder, FolderOptions::default())
            .unwrap();
        assert!(result.updated.is_empty());
        assert!(result.is_clean());
        assert_eq!(
            fs::read_to_string(dir.path().join("cover.metadata.xml")).unwrap(),
            V10_METADATA
        );
    }

    #[test]
    fn test_root_failure_aborts_folder() {
        let dir = tempfile::tempdir().unwrap();
        let root = write(
            dir.path(),
            "intro.course.xml",
            r#"<Course version="1.0" name="Intro"><transitions/></Course>"#,
        );
        write(dir.path(), "cover.metadata.xml", V10_METADATA);

        let mut engine = engine();
        let folder = LocalFolder::new(dir.path());
        let err = engine
            .upconvert_folder(DocumentKind::Course, &root, &folder, FolderOptions::default())
            .unwrap_err();
        assert!(matches!(err, ConversionError::UnsupportedVersion { .. }));
        assert!(!engine.issues().is_populated());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let root = write(dir.path(), "intro.course.xml", V2_GUIDANCE_COURSE);

        let mut engine = engine();
        let folder = LocalFolder::new(dir.path());
        let options = FolderOptions {
            dry_run: true,
            make_backup: true,
            ..FolderOptions::default()
        };
        let result = engine
            .upconvert_folder(DocumentKind::Course, &root, &folder, options)
            .unwrap();
        assert_eq!(result.updated.len(), 1);
        assert_eq!(fs::read_to_string(&root).unwrap(), V2_GUIDANCE_COURSE);
        assert!(!dir.path().join("intro.course.xml.bak").exists());
    }

    #[test]
    fn test_failed_write_back_records_no_issues() {
        let dir = tempfile::tempdir().unwrap();
        let file = write(dir.path(), "cover.metadata.xml", V10_METADATA);
        // A directory where the backup should go makes the write fail.
        fs::create_dir(dir.path().join("cover.metadata.xml.bak")).unwrap();

        let mut engine = engine();
        let folder = LocalFolder::new(dir.path());
        let options = FolderOptions {
            make_backup: true,
            ..FolderOptions::default()
        };
        let err = engine
            .upconvert_file(DocumentKind::Metadata, &file, &folder, options)
            .unwrap_err();
        assert!(matches!(err, ConversionError::Io(FolderError::Write { .. })), "{err}");
        assert!(!engine.issues().is_populated());
        assert_eq!(fs::read_to_string(&file).unwrap(), V10_METADATA);
    }

    #[test]
    fn test_unrecognized_alternative_is_structural() {
        // The reader never produces the unrecognized alternative.
        let engine = engine();
        let Resolution::Convert { converter, .. } =
            engine.resolve_converter_for_version("7.0").unwrap()
        else {
            panic!("7.0 is convertible");
        };
        let mut scenario = crate::fixtures::v7_scored_scenario(&[v7::dkf::Operator::Equals]);
        let strategies = scenario.actions.as_mut().unwrap();
        strategies.instructional_strategies.as_mut().unwrap().strategy[0].kind =
            v7::dkf::StrategyType::Unrecognized(crate::schema::common::UnrecognizedElement::new(
                "Hologram",
            ));
        let mut context = ConversionContext::new("scored.dkf.xml");
        let err = continue_chain(
            engine.registry(),
            converter,
            SchemaTree::V7(v7::Document::Scenario(scenario)),
            &mut context,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ChainError::Step {
                source: MappingError::UnhandledVariant { .. },
                ..
            }
        ));
    }
}
