use std::sync::Arc;

use crate::{
    display::{Error, resolve},
    repository::Repository,
    shared::{Direction, RingDirection},
};

/// Start and terminal labels for a service, direction applied.
///
/// Loop lines replace the terminal with a ring-direction label. The declared
/// terminus, when present, is independent of direction and only shown as a
/// supplementary marker.
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoints {
    Linear {
        start: Arc<str>,
        terminal: Arc<str>,
    },
    Ring {
        running: RingDirection,
        terminal: Option<Arc<str>>,
    },
}

impl Endpoints {
    /// Label shown on the departure side of the display.
    pub fn start_label(&self) -> &str {
        match self {
            Self::Linear { start, .. } => start,
            Self::Ring { running, .. } => running.label(),
        }
    }

    /// Label shown on the terminal side; empty for a ring with no declared
    /// terminus.
    pub fn terminal_label(&self) -> &str {
        match self {
            Self::Linear { terminal, .. } => terminal,
            Self::Ring { terminal, .. } => terminal.as_deref().unwrap_or(""),
        }
    }
}

/// Computes the displayed endpoints of a service.
pub fn endpoints(
    repo: &Repository,
    line_key: &str,
    service_name: &str,
    direction: Direction,
) -> Result<Endpoints, Error> {
    let line = resolve::line(repo, line_key)?;
    let service = resolve::service(repo, line_key, service_name)?;
    let (Some(first), Some(last)) = (service.stations.first(), service.stations.last()) else {
        return Err(Error::EmptyService {
            line: line_key.to_string(),
            service: service_name.to_string(),
        });
    };

    if line.is_loop() {
        return Ok(Endpoints::Ring {
            running: direction.into(),
            terminal: service.terminal.clone(),
        });
    }
    Ok(match direction {
        Direction::Forward => Endpoints::Linear {
            start: first.clone(),
            terminal: last.clone(),
        },
        Direction::Reversed => Endpoints::Linear {
            start: last.clone(),
            terminal: first.clone(),
        },
    })
}
