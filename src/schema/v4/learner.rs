use serde::{Deserialize, Serialize};

pub use crate::schema::v3::learner::{Classifier, Predictor, Properties, Property, Translator};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnerConfiguration {
    #[serde(rename = "@version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "Inputs")]
    pub inputs: Inputs,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Inputs {
    #[serde(rename = "Input", default)]
    pub input: Vec<Input>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Input {
    #[serde(rename = "Classifier")]
    pub classifier: Classifier,
    #[serde(rename = "Predictor")]
    pub predictor: Predictor,
    #[serde(rename = "Producers", default, skip_serializing_if = "Option::is_none")]
    pub producers: Option<Producers>,
    #[serde(rename = "Translator")]
    pub translator: Translator,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Producers {
    #[serde(rename = "Producer", default)]
    pub producer: Vec<Producer>,
}

/// A producer names its sensor by the sensor's configured type string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Producer {
    #[serde(rename = "sensorType")]
    pub sensor_type: String,
}

recognizable! {
    LearnerConfiguration {},
}
