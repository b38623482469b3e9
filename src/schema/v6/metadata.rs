use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(rename = "@version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "MerrillQuadrant")]
    pub merrill_quadrant: String,
    #[serde(rename = "simpleRef", default, skip_serializing_if = "Option::is_none")]
    pub simple_ref: Option<String>,
    #[serde(rename = "trainingAppRef", default, skip_serializing_if = "Option::is_none")]
    pub training_app_ref: Option<String>,
    #[serde(rename = "URL", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "lessonMaterialRef", default, skip_serializing_if = "Option::is_none")]
    pub lesson_material_ref: Option<String>,
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
    #[serde(rename = "Attributes", default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(rename = "Attribute", default)]
    pub attribute: Vec<Attribute>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    #[serde(rename = "@value")]
    pub value: String,
}

recognizable! {
    Metadata {},
}
