use serde::{Deserialize, Serialize};

use crate::schema::common::UnrecognizedElement;

pub use crate::schema::v6::metadata::{Attribute, Attributes};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(rename = "@version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "displayName", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "PresentAt")]
    pub present_at: PresentAt,
    #[serde(rename = "$value")]
    pub content: Content,
    #[serde(rename = "Concepts")]
    pub concepts: Concepts,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentAt {
    #[serde(rename = "MerrillQuadrant")]
    pub merrill_quadrant: String,
}

/// What the metadata describes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Content {
    Simple(ContentRef),
    TrainingApp(ContentRef),
    #[serde(rename = "URL")]
    Url(ContentRef),
    LessonMaterial(ContentRef),
    #[serde(skip)]
    Unrecognized(UnrecognizedElement),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRef {
    #[serde(rename = "@value")]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Concepts {
    #[serde(rename = "Concept", default)]
    pub concept: Vec<Concept>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "ActivityType", default, skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<ActivityType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityType {
    #[serde(rename = "$value")]
    pub kind: ActivityKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActivityKind {
    Passive(Passive),
    #[serde(skip)]
    Unrecognized(UnrecognizedElement),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Passive {
    #[serde(rename = "Attributes", default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

choice! {
    Content => "metadata content",
    ActivityKind => "activity type",
}

recognizable! {
    Metadata { content, concepts },
    Concepts { concept },
    Concept { activity_type },
    ActivityType { kind },
}
