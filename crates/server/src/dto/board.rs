use metroboard::display::{BoardView, LineMapView, StationDetail};
use serde::Serialize;

use crate::dto::{BadgeDto, ServiceSummaryDto, StationDto};

#[derive(Serialize)]
pub struct BoardDto {
    pub color: String,
    pub start: String,
    pub terminal: String,
    pub services: Vec<ServiceSummaryDto>,
    pub ring_label: String,
    pub ring_terminal: String,
}

impl From<&BoardView> for BoardDto {
    fn from(value: &BoardView) -> Self {
        Self {
            color: value.color.to_string(),
            start: value.start.clone(),
            terminal: value.terminal.clone(),
            services: value.services.iter().map(ServiceSummaryDto::from).collect(),
            ring_label: value.ring_label.clone(),
            ring_terminal: value.ring_terminal.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct LineMapDto {
    pub line: String,
    pub display_name: String,
    pub en_name: String,
    pub color: String,
    pub stations: Vec<StationDto>,
    pub active_stations: Vec<String>,
    pub full_route_mode: bool,
    pub reversed: bool,
    pub is_loop: bool,
    pub loop_has_terminal: bool,
    pub loop_terminal: String,
}

impl From<&LineMapView> for LineMapDto {
    fn from(value: &LineMapView) -> Self {
        Self {
            line: value.line_key.to_string(),
            display_name: value.display_name.to_string(),
            en_name: value.en_name.to_string(),
            color: value.color.to_string(),
            stations: value.stations.iter().map(StationDto::from).collect(),
            active_stations: value
                .active_stations
                .iter()
                .map(|station| station.to_string())
                .collect(),
            full_route_mode: value.full_route_mode,
            reversed: value.reversed,
            is_loop: value.is_loop,
            loop_has_terminal: value.loop_has_terminal,
            loop_terminal: value.loop_terminal.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct StationDetailDto {
    pub current: Option<StationDto>,
    pub next: Option<StationDto>,
    pub transfer_line_names: Vec<String>,
    pub badges: Vec<BadgeDto>,
    pub color: String,
}

impl From<&StationDetail> for StationDetailDto {
    fn from(value: &StationDetail) -> Self {
        Self {
            current: value.current.as_ref().map(StationDto::from),
            next: value.next.as_ref().map(StationDto::from),
            transfer_line_names: value
                .transfer_line_names
                .iter()
                .map(|name| name.to_string())
                .collect(),
            badges: value.badges.iter().map(BadgeDto::from).collect(),
            color: value.color.to_string(),
        }
    }
}
