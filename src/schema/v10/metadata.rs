use serde::{Deserialize, Serialize};

use crate::schema::common::{BooleanEnum, UnrecognizedElement};

pub use crate::schema::v8::metadata::{Attribute, Attributes, Content, ContentRef, Passive};

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
    #[serde(rename = "remediationOnly", default, skip_serializing_if = "Option::is_none")]
    pub remediation_only: Option<BooleanEnum>,
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

/// Interactive, constructive and active content is tagged without attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActivityKind {
    Passive(Passive),
    Interactive(EmptyActivity),
    Constructive(EmptyActivity),
    Active(EmptyActivity),
    #[serde(skip)]
    Unrecognized(UnrecognizedElement),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmptyActivity {}

choice! {
    ActivityKind => "activity type",
}

recognizable! {
    Metadata { content, concepts },
    Concepts { concept },
    Concept { activity_type },
    ActivityType { kind },
}
