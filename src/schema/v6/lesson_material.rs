use serde::{Deserialize, Serialize};

use crate::schema::v6::course::Media;

/// A list of media stored outside any course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonMaterialList {
    #[serde(rename = "@version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "@isCollection", default, skip_serializing_if = "Option::is_none")]
    pub is_collection: Option<bool>,
    #[serde(rename = "Media", default)]
    pub media: Vec<Media>,
}

recognizable! {
    LessonMaterialList { media },
}
