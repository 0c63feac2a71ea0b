use std::sync::Arc;

use crate::{
    display::{
        DisplayState, Error, ServiceSummary, StationView, TransferBadge, aggregate,
        containing_service, endpoints, line_map, resolve,
    },
    repository::Repository,
    shared::Direction,
};

/// Full line-map page payload.
#[derive(Debug, Clone)]
pub struct LineMapView {
    pub line_key: Arc<str>,
    pub display_name: Arc<str>,
    pub en_name: Arc<str>,
    pub color: Arc<str>,
    /// Displayed sequence; the containing service's when one exists.
    pub stations: Vec<StationView>,
    /// Names of the active sub-sequence, for graying out the rest.
    pub active_stations: Vec<Arc<str>>,
    pub full_route_mode: bool,
    pub reversed: bool,
    pub is_loop: bool,
    pub loop_has_terminal: bool,
    pub loop_terminal: String,
}

/// Assembles the line map for the active service, substituting the longest
/// containing sibling when one exists and applying the direction flag.
pub fn line_map_view(
    repo: &Repository,
    line_key: &str,
    service_name: &str,
    direction: Direction,
) -> Result<LineMapView, Error> {
    let line = resolve::line(repo, line_key)?;
    let active_stations: Vec<Arc<str>> = resolve(repo, line_key, service_name)?.to_vec();

    let containing = containing_service(repo, line_key, service_name)?;
    let full_route_mode = containing.is_some();
    let shown = match &containing {
        Some(larger) => line_map(repo, line_key, larger)?,
        None => line_map(repo, line_key, service_name)?,
    };

    let reversed = direction.is_reversed();
    let stations = if reversed {
        shown.into_iter().rev().collect()
    } else {
        shown
    };

    // Loop flags always describe the active service, not the substituted one.
    let service = resolve::service(repo, line_key, service_name)?;
    let loop_terminal = service.terminal.as_deref().unwrap_or("").to_string();

    Ok(LineMapView {
        line_key: line.key.clone(),
        display_name: line.display_name.clone(),
        en_name: line.en_name.clone(),
        color: repo.line_color(line_key),
        stations,
        active_stations,
        full_route_mode,
        reversed,
        is_loop: line.is_loop(),
        loop_has_terminal: !loop_terminal.is_empty(),
        loop_terminal,
    })
}

/// Home/next-station page payload.
#[derive(Debug, Clone)]
pub struct BoardView {
    pub color: Arc<str>,
    pub start: String,
    pub terminal: String,
    pub services: Vec<ServiceSummary>,
    /// Ring label of the main service; empty for linear lines.
    pub ring_label: String,
    /// Declared loop terminus of the main service; empty when absent.
    pub ring_terminal: String,
}

/// Assembles the board for the current snapshot.
pub fn board_view(repo: &Repository, state: &DisplayState) -> Result<BoardView, Error> {
    let ends = endpoints(repo, &state.line, &state.service, state.direction)?;
    let services = aggregate(repo, &state.line, &state.service, state.direction)?;

    let (ring_label, ring_terminal) = services
        .iter()
        .find(|summary| summary.is_main)
        .filter(|summary| summary.is_loop)
        .map(|summary| {
            let label = summary
                .ring
                .map(|running| running.label().to_string())
                .unwrap_or_default();
            let terminal = if summary.has_terminal {
                summary.end.clone()
            } else {
                String::new()
            };
            (label, terminal)
        })
        .unwrap_or_default();

    Ok(BoardView {
        color: repo.line_color(&state.line),
        start: ends.start_label().to_string(),
        terminal: ends.terminal_label().to_string(),
        services,
        ring_label,
        ring_terminal,
    })
}

/// Station detail / arrival page payload: the approaching station and its
/// predecessor on the stored sequence.
#[derive(Debug, Clone)]
pub struct StationDetail {
    pub current: Option<StationView>,
    pub next: Option<StationView>,
    /// Display names of the next station's transfer lines.
    pub transfer_line_names: Vec<Arc<str>>,
    pub badges: Vec<TransferBadge>,
    pub color: Arc<str>,
}

/// Assembles the detail payload for the snapshot's next station.
pub fn station_detail(repo: &Repository, state: &DisplayState) -> Result<StationDetail, Error> {
    let stations = line_map(repo, &state.line, &state.service)?;

    let mut current = None;
    let mut next = None;
    if let Some(position) = stations
        .iter()
        .position(|station| &*station.name == state.next_station.as_str())
    {
        if position > 0 {
            current = Some(stations[position - 1].clone());
        }
        next = Some(stations[position].clone());
    }

    let mut transfer_line_names = Vec::new();
    let mut badges = Vec::new();
    if let Some(next) = &next {
        for code in &next.transfer_lines {
            let key = code.to_line_key();
            let name = repo
                .line_by_key(&key)
                .map(|line| line.display_name.clone())
                .unwrap_or_else(|| Arc::from(key.as_str()));
            transfer_line_names.push(name);
        }
        badges = next.badges.clone();
    }

    Ok(StationDetail {
        current,
        next,
        transfer_line_names,
        badges,
        color: repo.line_color(&state.line),
    })
}
