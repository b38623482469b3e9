use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::schema_version::SchemaVersion;

const fn v(major: u32, minor: u32) -> SchemaVersion {
    SchemaVersion::new(major, minor, 0)
}

const COURSE_CHANGES: &[SchemaVersion] = &[v(2, 0), v(3, 0), v(4, 0), v(6, 0), v(10, 0)];
const SCENARIO_CHANGES: &[SchemaVersion] =
    &[v(2, 0), v(3, 0), v(4, 0), v(5, 0), v(7, 0), v(9, 0), v(10, 0)];
const METADATA_CHANGES: &[SchemaVersion] = &[v(5, 0), v(6, 0), v(8, 0), v(10, 0), v(11, 0)];
const TRAINING_APP_REF_CHANGES: &[SchemaVersion] = &[v(5, 0), v(6, 0), v(10, 0)];
const SENSOR_CONFIG_CHANGES: &[SchemaVersion] = &[v(6, 0), v(9, 0)];
const LEARNER_CONFIG_CHANGES: &[SchemaVersion] = &[v(3, 0), v(4, 0)];
const PEDAGOGY_CONFIG_CHANGES: &[SchemaVersion] = &[v(3, 0), v(4, 0), v(6, 0)];
const LESSON_MATERIAL_REF_CHANGES: &[SchemaVersion] = &[v(6, 0), v(10, 0)];
const CONVERSATION_TREE_CHANGES: &[SchemaVersion] = &[v(7, 0), v(11, 0)];

/// The document families that each carry their own schema lineage.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Course,
    Scenario,
    Metadata,
    TrainingAppRef,
    SensorConfig,
    LearnerConfig,
    PedagogyConfig,
    LessonMaterialRef,
    ConversationTree,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 9] = [
        DocumentKind::Course,
        DocumentKind::Scenario,
        DocumentKind::Metadata,
        DocumentKind::TrainingAppRef,
        DocumentKind::SensorConfig,
        DocumentKind::LearnerConfig,
        DocumentKind::PedagogyConfig,
        DocumentKind::LessonMaterialRef,
        DocumentKind::ConversationTree,
    ];

    /// Kinds converted alongside a course during folder upconversion, in
    /// discovery order.
    pub const AUXILIARY: [DocumentKind; 8] = [
        DocumentKind::Scenario,
        DocumentKind::Metadata,
        DocumentKind::TrainingAppRef,
        DocumentKind::SensorConfig,
        DocumentKind::LearnerConfig,
        DocumentKind::PedagogyConfig,
        DocumentKind::LessonMaterialRef,
        DocumentKind::ConversationTree,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            DocumentKind::Course => ".course.xml",
            DocumentKind::Scenario => ".dkf.xml",
            DocumentKind::Metadata => ".metadata.xml",
            DocumentKind::TrainingAppRef => ".trainingapp.xml",
            DocumentKind::SensorConfig => ".sensorconfig.xml",
            DocumentKind::LearnerConfig => ".learnerconfig.xml",
            DocumentKind::PedagogyConfig => ".pedagogicalconfig.xml",
            DocumentKind::LessonMaterialRef => ".lessonMaterial.xml",
            DocumentKind::ConversationTree => ".conversationTree.xml",
        }
    }

    /// Infers the kind from a file name by its compound extension.
    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| name.len() > kind.extension().len() && name.ends_with(kind.extension()))
    }

    /// Root element name of this kind's documents at the given generation.
    pub fn root_element(&self, version: SchemaVersion) -> &'static str {
        match self {
            DocumentKind::Course => "Course",
            DocumentKind::Scenario => "Scenario",
            DocumentKind::Metadata => "Metadata",
            DocumentKind::TrainingAppRef => "TrainingApplicationWrapper",
            DocumentKind::SensorConfig => "SensorsConfiguration",
            DocumentKind::LearnerConfig => "LearnerConfiguration",
            DocumentKind::PedagogyConfig if version.generation() < v(4, 0) => "EMAP",
            DocumentKind::PedagogyConfig => "EM2AP",
            DocumentKind::LessonMaterialRef => "LessonMaterialList",
            DocumentKind::ConversationTree => "Conversation",
        }
    }

    /// Schema file of this kind, relative to a generation directory.
    pub fn schema_file(&self) -> &'static str {
        match self {
            DocumentKind::Course | DocumentKind::TrainingAppRef => "domain/course/course.xsd",
            DocumentKind::Scenario => "domain/dkf/dkf.xsd",
            DocumentKind::Metadata => "domain/metadata/metadata.xsd",
            DocumentKind::SensorConfig => "sensor/sensorConfig.xsd",
            DocumentKind::LearnerConfig => "learner/learnerConfig.xsd",
            DocumentKind::PedagogyConfig => "ped/eMAP.xsd",
            DocumentKind::LessonMaterialRef => "domain/lessonMaterial/lessonMaterial.xsd",
            DocumentKind::ConversationTree => "domain/conversationTree/conversationTree.xsd",
        }
    }

    /// Versions whose schema changed the shape of this kind, oldest first.
    /// The first entry is the version the kind was introduced in.
    pub fn changed_in(&self) -> &'static [SchemaVersion] {
        match self {
            DocumentKind::Course => COURSE_CHANGES,
            DocumentKind::Scenario => SCENARIO_CHANGES,
            DocumentKind::Metadata => METADATA_CHANGES,
            DocumentKind::TrainingAppRef => TRAINING_APP_REF_CHANGES,
            DocumentKind::SensorConfig => SENSOR_CONFIG_CHANGES,
            DocumentKind::LearnerConfig => LEARNER_CONFIG_CHANGES,
            DocumentKind::PedagogyConfig => PEDAGOGY_CONFIG_CHANGES,
            DocumentKind::LessonMaterialRef => LESSON_MATERIAL_REF_CHANGES,
            DocumentKind::ConversationTree => CONVERSATION_TREE_CHANGES,
        }
    }

    pub fn first_version(&self) -> SchemaVersion {
        self.changed_in()[0]
    }

    pub fn exists_at(&self, version: SchemaVersion) -> bool {
        version.generation() >= self.first_version()
    }

    /// The generation whose schema describes this kind at `version`: the
    /// latest change at or below it.
    pub fn schema_generation(&self, version: SchemaVersion) -> Option<SchemaVersion> {
        let generation = version.generation();
        self.changed_in()
            .iter()
            .rev()
            .find(|changed| **changed <= generation)
            .copied()
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentKind::Course => "course",
            DocumentKind::Scenario => "scenario",
            DocumentKind::Metadata => "metadata",
            DocumentKind::TrainingAppRef => "training application reference",
            DocumentKind::SensorConfig => "sensor configuration",
            DocumentKind::LearnerConfig => "learner configuration",
            DocumentKind::PedagogyConfig => "pedagogical configuration",
            DocumentKind::LessonMaterialRef => "lesson material reference",
            DocumentKind::ConversationTree => "conversation tree",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Locates the schema a document of one kind was written against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDescriptor {
    pub kind: DocumentKind,
    /// Version of the converter reading the document.
    pub version: SchemaVersion,
    /// Generation that last changed this kind's shape.
    pub generation: SchemaVersion,
    pub resource_path: PathBuf,
}

impl SchemaDescriptor {
    pub fn new(kind: DocumentKind, version: SchemaVersion, schema_root: &Path) -> Option<Self> {
        let generation = kind.schema_generation(version)?;
        let resource_path = schema_root
            .join(format!("v{}", generation))
            .join(kind.schema_file());
        Some(Self {
            kind,
            version: version.generation(),
            generation,
            resource_path,
        })
    }

    pub fn root_element(&self) -> &'static str {
        self.kind.root_element(self.generation)
    }
}
