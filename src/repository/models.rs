use std::sync::Arc;

use crate::shared::LineCode;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineKind {
    #[default]
    Linear,
    Loop,
}

#[derive(Debug, Clone)]
pub struct Line {
    pub key: Arc<str>,
    /// Full declared name, possibly `Name-EnglishName`.
    pub name: Arc<str>,
    pub display_name: Arc<str>,
    pub en_name: Arc<str>,
    pub code: LineCode,
    pub kind: LineKind,
    /// Theme color declared inline by the route table, if any.
    pub color: Option<Arc<str>>,
    pub services: Box<[Service]>,
}

impl Line {
    pub fn is_loop(&self) -> bool {
        self.kind == LineKind::Loop
    }

    /// First service matching the given name, in stored order.
    pub fn service(&self, name: &str) -> Option<&Service> {
        self.services.iter().find(|service| &*service.name == name)
    }
}

#[derive(Debug, Clone)]
pub struct Service {
    pub name: Arc<str>,
    /// Stored order is the canonical direction.
    pub stations: Box<[Arc<str>]>,
    /// Declared terminus override, used by loop lines.
    pub terminal: Option<Arc<str>>,
}

/// One `[line-code, index]` pair recorded for a station.
#[derive(Debug, Clone)]
pub struct StationEntry {
    pub code: LineCode,
    pub index: Option<u32>,
}
