use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emap {
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

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuadrantAttributes {
    #[serde(rename = "Attributes", default)]
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(rename = "Attribute", default)]
    pub attribute: Vec<Attribute>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    #[serde(rename = "@type")]
    pub attribute_type: String,
    #[serde(rename = "@value")]
    pub value: String,
    #[serde(rename = "MetadataAttributes", default)]
    pub metadata_attributes: MetadataAttributes,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetadataAttributes {
    #[serde(rename = "MetadataAttribute", default)]
    pub metadata_attribute: Vec<MetadataAttribute>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataAttribute {
    #[serde(rename = "@value")]
    pub value: String,
    #[serde(rename = "@isQuadrantSpecific", default, skip_serializing_if = "Option::is_none")]
    pub is_quadrant_specific: Option<bool>,
}

recognizable! {
    Emap {},
}
