use serde::{Deserialize, Serialize};

use crate::schema::common::UnrecognizedElement;

pub use crate::schema::v10::metadata::{Content, ContentRef, EmptyActivity, PresentAt};

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
    Passive(EmptyActivity),
    Interactive(EmptyActivity),
    Constructive(EmptyActivity),
    Active(EmptyActivity),
    #[serde(skip)]
    Unrecognized(UnrecognizedElement),
}

choice! {
    ActivityKind => "activity type",
}

recognizable! {
    Metadata { content, concepts },
    Concepts { concept },
    Concept { activity_type },
    ActivityType { kind },
}
