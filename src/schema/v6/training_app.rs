use serde::{Deserialize, Serialize};

use crate::schema::v6::course::TrainingApplication;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingApplicationWrapper {
    #[serde(rename = "@version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "TrainingApplication")]
    pub training_application: TrainingApplication,
}

recognizable! {
    TrainingApplicationWrapper { training_application },
}
