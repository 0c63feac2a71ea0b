use std::sync::Arc;

use crate::{
    display::{Error, resolve},
    repository::Repository,
    shared::LineCode,
};

/// Transfer badge rendered next to a station: the display code of the other
/// line and its resolved theme color.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferBadge {
    pub code: String,
    pub color: Arc<str>,
}

/// One station of the line map, enriched for display.
#[derive(Debug, Clone)]
pub struct StationView {
    pub name: Arc<str>,
    pub translated: Arc<str>,
    /// Position of the station on the current line, when recorded.
    pub index: Option<u32>,
    pub is_transfer: bool,
    /// Other lines serving the station, deduplicated, first-seen order.
    pub transfer_lines: Vec<LineCode>,
    pub badges: Vec<TransferBadge>,
}

/// Enriches the station sequence of a service with translations, per-line
/// indexes and transfer information.
///
/// Secondary data degrades instead of failing: a missing translation falls
/// back to the original name, a missing color to the default, a missing
/// per-line index stays None.
pub fn line_map(
    repo: &Repository,
    line_key: &str,
    service_name: &str,
) -> Result<Vec<StationView>, Error> {
    let current = resolve::line(repo, line_key)?.code.clone();
    let stations = resolve(repo, line_key, service_name)?;

    let mut views = Vec::with_capacity(stations.len());
    for name in stations {
        let entries = repo.station_entries(name);

        // A station that lists the same line twice, or once padded and once
        // not, still counts that line once.
        let mut distinct: Vec<LineCode> = Vec::new();
        for entry in entries {
            if !distinct.contains(&entry.code) {
                distinct.push(entry.code.clone());
            }
        }
        let is_transfer = distinct.len() > 1;

        let index = entries
            .iter()
            .find(|entry| entry.code == current)
            .and_then(|entry| entry.index);

        let transfer_lines: Vec<LineCode> = distinct
            .into_iter()
            .filter(|code| *code != current)
            .collect();
        let badges = transfer_lines
            .iter()
            .map(|code| TransferBadge {
                code: code.to_string(),
                color: repo.color_by_code(code),
            })
            .collect();

        views.push(StationView {
            name: name.clone(),
            translated: repo.translated_name(name),
            index,
            is_transfer,
            transfer_lines,
            badges,
        });
    }
    Ok(views)
}
