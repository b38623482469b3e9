use serde::{Deserialize, Serialize};

pub use crate::schema::v6::sensor::{Filter, Filters, Properties, Writer, Writers};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorsConfiguration {
    #[serde(rename = "@version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "Sensors")]
    pub sensors: Sensors,
    #[serde(rename = "Filters", default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Filters>,
    #[serde(rename = "Writers", default, skip_serializing_if = "Option::is_none")]
    pub writers: Option<Writers>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Sensors {
    #[serde(rename = "Sensor", default)]
    pub sensor: Vec<Sensor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    #[serde(rename = "@id")]
    pub id: u32,
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "sensorImpl")]
    pub sensor_impl: String,
    #[serde(rename = "intervalMs", default, skip_serializing_if = "Option::is_none")]
    pub interval_ms: Option<u64>,
    #[serde(rename = "distributeExternally", default, skip_serializing_if = "Option::is_none")]
    pub distribute_externally: Option<bool>,
    #[serde(rename = "filterInstance", default, skip_serializing_if = "Option::is_none")]
    pub filter_instance: Option<u32>,
    #[serde(rename = "Properties", default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
}

recognizable! {
    SensorsConfiguration {},
}
