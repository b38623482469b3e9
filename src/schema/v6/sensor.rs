use serde::{Deserialize, Serialize};

use crate::schema::common::Nvpair;

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

/// `interval` is the sampling period in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    #[serde(rename = "@id")]
    pub id: u32,
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "sensorImpl")]
    pub sensor_impl: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<f64>,
    #[serde(rename = "distributeExternally", default, skip_serializing_if = "Option::is_none")]
    pub distribute_externally: Option<bool>,
    #[serde(rename = "filterInstance", default, skip_serializing_if = "Option::is_none")]
    pub filter_instance: Option<u32>,
    #[serde(rename = "Properties", default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Filters {
    #[serde(rename = "Filter", default)]
    pub filter: Vec<Filter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    #[serde(rename = "@id")]
    pub id: u32,
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "filterImpl")]
    pub filter_impl: String,
    #[serde(rename = "writerInstance", default, skip_serializing_if = "Option::is_none")]
    pub writer_instance: Option<u32>,
    #[serde(rename = "Properties", default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Writers {
    #[serde(rename = "Writer", default)]
    pub writer: Vec<Writer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Writer {
    #[serde(rename = "@id")]
    pub id: u32,
    #[serde(rename = "writerImpl")]
    pub writer_impl: String,
    #[serde(rename = "Properties", default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Properties {
    #[serde(default)]
    pub nvpair: Vec<Nvpair>,
}

recognizable! {
    SensorsConfiguration {},
}
