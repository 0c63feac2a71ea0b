use std::{collections::HashMap, fs, io, path::Path};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

mod config;
pub mod models;
pub use config::*;
use models::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed table {table}: {source}")]
    Json {
        table: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Could not find required table: {0}")]
    FileNotFound(String),
}

/// The four reference tables, parsed but not yet typed.
///
/// Loaded once at startup; the route and station tables are required, the
/// translation and color tables default to empty when their files are absent.
#[derive(Default, Debug)]
pub struct RefData {
    pub(crate) routes: HashMap<String, LineRecord>,
    pub(crate) stations: StationTable,
    pub(crate) translations: TranslationTable,
    pub(crate) colors: ColorTable,
    config: Config,
}

impl RefData {
    pub fn new(config: Config) -> Self {
        Self {
            routes: Default::default(),
            stations: Default::default(),
            translations: Default::default(),
            colors: Default::default(),
            config,
        }
    }

    /// Reads the reference tables from a directory. Malformed JSON fails the
    /// whole load; nothing is partially applied.
    pub fn load_dir<P: AsRef<Path>>(mut self, dir: P) -> Result<Self, Error> {
        let dir = dir.as_ref();
        self.routes = read_table(dir, &self.config.route_path)?
            .ok_or_else(|| Error::FileNotFound(self.config.route_path.clone()))?;
        self.stations = read_table(dir, &self.config.station_path)?
            .ok_or_else(|| Error::FileNotFound(self.config.station_path.clone()))?;
        self.translations = read_table(dir, &self.config.translation_path)?.unwrap_or_default();
        self.colors = read_table(dir, &self.config.color_path)?.unwrap_or_default();
        info!(
            lines = self.routes.len(),
            stations = self.stations.len(),
            "loaded reference tables"
        );
        Ok(self)
    }

    pub fn routes(&self) -> &HashMap<String, LineRecord> {
        &self.routes
    }

    pub fn stations(&self) -> &StationTable {
        &self.stations
    }

    pub fn translations(&self) -> &TranslationTable {
        &self.translations
    }

    pub fn colors(&self) -> &ColorTable {
        &self.colors
    }
}

fn read_table<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<Option<T>, Error> {
    let path = dir.join(name);
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(&path)?;
    let table = serde_json::from_str(&raw).map_err(|source| Error::Json {
        table: name.to_string(),
        source,
    })?;
    Ok(Some(table))
}
