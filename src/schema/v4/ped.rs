use serde::{Deserialize, Serialize};

pub use crate::schema::v3::ped::{
    Attribute, Attributes, MetadataAttribute, MetadataAttributes, QuadrantAttributes,
};

/// Pedagogical configuration, renamed from `EMAP` to `EM2AP`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Em2ap {
    #[serde(rename = "@version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "Example")]
    pub example: QuadrantAttributes,
    #[serde(rename = "Practice")]
    pub practice: QuadrantAttributes,
    #[serde(rename = "Recall")]
    pub recall: QuadrantAttributes,
    #[serde(rename = "Rule")]
    pub rule: QuadrantAttributes,
}

recognizable! {
    Em2ap {},
}
