use metroboard::display::ServiceSummary;
use serde::Serialize;

#[derive(Serialize)]
pub struct ServiceSummaryDto {
    pub name: String,
    pub is_main: bool,
    pub is_loop: bool,
    pub ring_label: String,
    pub has_terminal: bool,
    pub start: String,
    pub end: String,
    pub count: usize,
    pub total: usize,
    pub stations: Vec<String>,
}

impl From<&ServiceSummary> for ServiceSummaryDto {
    fn from(value: &ServiceSummary) -> Self {
        Self {
            name: value.name.to_string(),
            is_main: value.is_main,
            is_loop: value.is_loop,
            ring_label: value
                .ring
                .map(|running| running.label().to_string())
                .unwrap_or_default(),
            has_terminal: value.has_terminal,
            start: value.start.clone(),
            end: value.end.clone(),
            count: value.count,
            total: value.total,
            stations: value
                .stations
                .iter()
                .map(|station| station.to_string())
                .collect(),
        }
    }
}
