use serde::{Deserialize, Serialize};

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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classifier {
    #[serde(rename = "classifierImpl")]
    pub classifier_impl: String,
    #[serde(rename = "Properties", default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Properties {
    #[serde(rename = "Property", default)]
    pub property: Vec<Property>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@value")]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predictor {
    #[serde(rename = "predictorImpl")]
    pub predictor_impl: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translator {
    #[serde(rename = "translatorImpl")]
    pub translator_impl: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Producers {
    #[serde(rename = "Producer", default)]
    pub producer: Vec<Producer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Producer {
    #[serde(rename = "sensorType")]
    pub sensor_type: SensorType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SensorType {
    #[serde(rename = "MOUSE_TEMP_HUMIDITY")]
    MouseTempHumidity,
    #[serde(rename = "EMOTIV")]
    Emotiv,
    #[serde(rename = "Q_SENSOR")]
    QSensor,
    #[serde(rename = "KINECT")]
    Kinect,
    #[serde(rename = "SELF_ASSESSMENT")]
    SelfAssessment,
    #[serde(rename = "BIOHARNESS")]
    Bioharness,
}

impl SensorType {
    pub fn xml_value(&self) -> &'static str {
        match self {
            SensorType::MouseTempHumidity => "MOUSE_TEMP_HUMIDITY",
            SensorType::Emotiv => "EMOTIV",
            SensorType::QSensor => "Q_SENSOR",
            SensorType::Kinect => "KINECT",
            SensorType::SelfAssessment => "SELF_ASSESSMENT",
            SensorType::Bioharness => "BIOHARNESS",
        }
    }
}

recognizable! {
    LearnerConfiguration {},
}
