use metroboard::{display::DisplayState, repository::Repository};
use tokio::sync::RwLock;

/// Shared server state: the immutable repository and the operator-driven
/// display snapshot. The lock documents the single-writer assumption;
/// concurrent writers are last-write-wins per request.
pub struct AppState {
    pub repository: Repository,
    pub display: RwLock<DisplayState>,
}

impl AppState {
    /// Seeds the snapshot from the first line and service in the table.
    pub fn new(repository: Repository) -> Option<Self> {
        let line = repository.lines.first()?;
        let service = line.services.first()?;
        let display = DisplayState {
            line: line.key.to_string(),
            service: service.name.to_string(),
            next_station: service
                .stations
                .first()
                .map(|station| station.to_string())
                .unwrap_or_default(),
            ..Default::default()
        };
        Some(Self {
            repository,
            display: RwLock::new(display),
        })
    }
}
