use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::shared::Direction;

/// The display snapshot driven by the controlling operator.
///
/// Single-writer by assumption: updates overwrite fields in place with no
/// cross-field atomicity, and a render may observe a half-applied update.
/// Callers needing multi-writer safety must add a lock or swap in versioned
/// snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayState {
    pub line: String,
    pub service: String,
    pub next_station: String,
    pub direction: Direction,
    pub door_side: String,
    pub time: String,
    pub carriage: u32,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            line: String::new(),
            service: String::new(),
            next_station: String::new(),
            direction: Direction::Forward,
            door_side: "this side".into(),
            time: Local::now().format("%H:%M").to_string(),
            carriage: 1,
        }
    }
}

/// Partial update for the snapshot. Fields left out keep their value;
/// unknown fields in the payload are ignored by the deserializer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StateUpdate {
    pub line: Option<String>,
    pub service: Option<String>,
    pub next_station: Option<String>,
    pub direction: Option<Direction>,
    pub door_side: Option<String>,
    pub time: Option<String>,
    pub carriage: Option<u32>,
}

impl DisplayState {
    /// Applies every present field verbatim. No validation beyond the
    /// direction flag collapsing to its two variants.
    pub fn apply(&mut self, update: StateUpdate) {
        if let Some(line) = update.line {
            self.line = line;
        }
        if let Some(service) = update.service {
            self.service = service;
        }
        if let Some(next_station) = update.next_station {
            self.next_station = next_station;
        }
        if let Some(direction) = update.direction {
            self.direction = direction;
        }
        if let Some(door_side) = update.door_side {
            self.door_side = door_side;
        }
        if let Some(time) = update.time {
            self.time = time;
        }
        if let Some(carriage) = update.carriage {
            self.carriage = carriage;
        }
    }
}
