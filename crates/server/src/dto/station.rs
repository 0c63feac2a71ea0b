use metroboard::display::{StationView, TransferBadge};
use serde::Serialize;

#[derive(Serialize)]
pub struct BadgeDto {
    pub code: String,
    pub color: String,
}

impl From<&TransferBadge> for BadgeDto {
    fn from(value: &TransferBadge) -> Self {
        Self {
            code: value.code.clone(),
            color: value.color.to_string(),
        }
    }
}

#[derive(Serialize)]
pub struct StationDto {
    pub name: String,
    pub translated: String,
    pub index: Option<u32>,
    pub is_transfer: bool,
    pub transfer_lines: Vec<String>,
    pub badges: Vec<BadgeDto>,
}

impl From<&StationView> for StationDto {
    fn from(value: &StationView) -> Self {
        Self {
            name: value.name.to_string(),
            translated: value.translated.to_string(),
            index: value.index,
            is_transfer: value.is_transfer,
            transfer_lines: value
                .transfer_lines
                .iter()
                .map(|code| code.to_string())
                .collect(),
            badges: value.badges.iter().map(BadgeDto::from).collect(),
        }
    }
}
