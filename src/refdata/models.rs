use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// One line as declared by the route table.
#[derive(Deserialize, Debug, Clone)]
pub struct LineRecord {
    pub line_name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: LineKindRecord,
    pub color: Option<String>,
    #[serde(default)]
    pub services: Vec<ServiceRecord>,
}

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LineKindRecord {
    #[default]
    Linear,
    Loop,
}

/// One service under a line. Older data files name the service through
/// `type`, newer ones through `service_name`; both are accepted.
#[derive(Deserialize, Debug, Clone)]
pub struct ServiceRecord {
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub service_name: Option<String>,
    #[serde(default)]
    pub stations: Vec<String>,
    pub terminal_station: Option<String>,
}

/// Raw station table: station name to a list of `[line-code, index]` pairs.
/// Codes appear as numeric strings, bare numbers or alphanumeric strings;
/// entries stay raw here and are interpreted by the repository.
pub type StationTable = HashMap<String, Vec<Value>>;

/// Station name to secondary-language display name.
pub type TranslationTable = HashMap<String, String>;

/// Line key to theme color.
pub type ColorTable = HashMap<String, String>;
