use std::{collections::HashMap, sync::Arc};

mod models;
pub use models::*;
use serde_json::Value;
use tracing::warn;

use crate::{
    refdata::{
        RefData,
        models::{LineKindRecord, LineRecord},
    },
    shared::LineCode,
};

/// Fallback theme color for lines absent from the color table.
pub const DEFAULT_LINE_COLOR: &str = "#9b5de5";

type KeyToIndex = HashMap<Arc<str>, usize>;

/// Immutable, process-lifetime store of the reference data.
///
/// Built once from [`RefData`]; safe to share behind an `Arc` for concurrent
/// readers, never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    pub lines: Box<[Line]>,
    line_lookup: Arc<KeyToIndex>,
    stations: Arc<HashMap<Arc<str>, Box<[StationEntry]>>>,
    translations: Arc<HashMap<Arc<str>, Arc<str>>>,
    colors: Arc<HashMap<Arc<str>, Arc<str>>>,
}

impl Repository {
    pub fn new() -> Self {
        Default::default()
    }

    /// Builds the typed tables. Lines come out sorted by key so enumeration
    /// is deterministic; service identity is normalized to a single name at
    /// this boundary so nothing downstream branches on field presence.
    pub fn with_refdata(mut self, data: RefData) -> Self {
        let mut keys: Vec<&String> = data.routes.keys().collect();
        keys.sort();

        let mut line_lookup: KeyToIndex = HashMap::new();
        let mut lines: Vec<Line> = Vec::with_capacity(keys.len());
        for key in keys {
            let line = build_line(key, &data.routes[key]);
            line_lookup.insert(line.key.clone(), lines.len());
            lines.push(line);
        }
        self.lines = lines.into();
        self.line_lookup = line_lookup.into();

        let stations: HashMap<Arc<str>, Box<[StationEntry]>> = data
            .stations
            .iter()
            .map(|(name, raw)| (Arc::from(name.as_str()), parse_entries(name, raw)))
            .collect();
        self.stations = stations.into();

        let translations: HashMap<Arc<str>, Arc<str>> = data
            .translations
            .iter()
            .map(|(name, translated)| (Arc::from(name.as_str()), Arc::from(translated.as_str())))
            .collect();
        self.translations = translations.into();

        let colors: HashMap<Arc<str>, Arc<str>> = data
            .colors
            .iter()
            .filter(|(_, color)| !color.trim().is_empty())
            .map(|(key, color)| (Arc::from(key.as_str()), Arc::from(color.as_str())))
            .collect();
        self.colors = colors.into();

        self
    }

    /// Line keys in sorted order.
    pub fn line_keys(&self) -> Vec<Arc<str>> {
        self.lines.iter().map(|line| line.key.clone()).collect()
    }

    /// Get a line with the given key.
    /// If no line is found with the given key None is returned.
    pub fn line_by_key(&self, key: &str) -> Option<&Line> {
        let index = self.line_lookup.get(key)?;
        Some(&self.lines[*index])
    }

    /// Every `[line-code, index]` pair recorded for a station.
    /// Unknown stations yield an empty slice, never an error.
    pub fn station_entries(&self, name: &str) -> &[StationEntry] {
        self.stations.get(name).map(|e| &**e).unwrap_or(&[])
    }

    /// Secondary-language name for a station, falling back to the original.
    pub fn translated_name(&self, name: &str) -> Arc<str> {
        match self.translations.get(name) {
            Some(translated) => translated.clone(),
            None => name.into(),
        }
    }

    /// Theme color for a line key: color table first, then the route table's
    /// own color field, then [`DEFAULT_LINE_COLOR`].
    pub fn line_color(&self, key: &str) -> Arc<str> {
        if let Some(color) = self.colors.get(key) {
            return color.clone();
        }
        if let Some(color) = self.line_by_key(key).and_then(|line| line.color.clone()) {
            return color;
        }
        DEFAULT_LINE_COLOR.into()
    }

    /// Theme color looked up through a station-table code.
    pub fn color_by_code(&self, code: &LineCode) -> Arc<str> {
        self.line_color(&code.to_line_key())
    }
}

fn build_line(key: &str, record: &LineRecord) -> Line {
    let full = record.line_name.clone().unwrap_or_else(|| key.to_string());
    let (display_name, en_name) = match full.split_once('-') {
        Some((name, en)) => (name.to_string(), en.to_string()),
        None => (full.clone(), derive_en_name(key)),
    };

    let mut services: Vec<Service> = Vec::with_capacity(record.services.len());
    for service in &record.services {
        let name = service
            .type_name
            .as_deref()
            .or(service.service_name.as_deref());
        let Some(name) = name else {
            warn!(line = key, "skipping unnamed service");
            continue;
        };
        let terminal = service
            .terminal_station
            .as_deref()
            .map(str::trim)
            .filter(|terminal| !terminal.is_empty())
            .map(Arc::from);
        services.push(Service {
            name: name.into(),
            stations: service
                .stations
                .iter()
                .map(|station| Arc::from(station.as_str()))
                .collect(),
            terminal,
        });
    }

    Line {
        key: key.into(),
        name: full.as_str().into(),
        display_name: display_name.as_str().into(),
        en_name: en_name.as_str().into(),
        code: LineCode::from_key(key),
        kind: match record.kind {
            LineKindRecord::Linear => LineKind::Linear,
            LineKindRecord::Loop => LineKind::Loop,
        },
        color: record
            .color
            .as_deref()
            .map(str::trim)
            .filter(|color| !color.is_empty())
            .map(Arc::from),
        services: services.into(),
    }
}

fn derive_en_name(key: &str) -> String {
    match key.strip_prefix("line_") {
        Some(part) => format!("Line {part}"),
        None => key.to_string(),
    }
}

/// Entries are raw `[code, index]` arrays. Entries without a usable code are
/// dropped; a missing index is kept as None.
fn parse_entries(name: &str, raw: &[Value]) -> Box<[StationEntry]> {
    let mut entries = Vec::with_capacity(raw.len());
    for value in raw {
        let Some(items) = value.as_array() else {
            warn!(station = name, "skipping malformed station entry");
            continue;
        };
        let code = match items.first() {
            Some(Value::String(code)) => LineCode::parse(code),
            Some(Value::Number(number)) => match number.as_u64() {
                Some(code) => LineCode::Numeric(code as u32),
                None => {
                    warn!(station = name, "skipping station entry with no line code");
                    continue;
                }
            },
            _ => {
                warn!(station = name, "skipping station entry with no line code");
                continue;
            }
        };
        let index = items.get(1).and_then(Value::as_u64).map(|index| index as u32);
        entries.push(StationEntry { code, index });
    }
    entries.into()
}
