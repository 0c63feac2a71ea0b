use std::sync::Arc;

use tracing::warn;

use crate::{
    display::{Endpoints, Error, endpoints, resolve},
    repository::Repository,
    shared::{Direction, RingDirection},
};

/// Clamp bounds for the compact service list next to the line map.
const COUNT_MIN: usize = 2;
const COUNT_MAX: usize = 6;

/// Sort sentinel for service names without a trailing number.
const NO_SUFFIX: u64 = u64::MAX;

/// Summary of one service operating on the active line.
#[derive(Debug, Clone)]
pub struct ServiceSummary {
    pub name: Arc<str>,
    pub is_main: bool,
    pub is_loop: bool,
    pub ring: Option<RingDirection>,
    pub has_terminal: bool,
    pub start: String,
    pub end: String,
    /// Station count clamped for compact display.
    pub count: usize,
    pub total: usize,
    /// Full sequence, direction applied.
    pub stations: Vec<Arc<str>>,
}

/// Builds the summary list for every service on a line.
///
/// The active service always resolves (its errors propagate) and is marked
/// `is_main`; a sibling with malformed data is skipped so the rest still
/// renders. The result is stably sorted by the trailing number of the
/// service name, names without one last.
pub fn aggregate(
    repo: &Repository,
    line_key: &str,
    active_service: &str,
    direction: Direction,
) -> Result<Vec<ServiceSummary>, Error> {
    let line = resolve::line(repo, line_key)?;
    resolve(repo, line_key, active_service)?;

    let mut summaries = Vec::with_capacity(line.services.len());
    for service in line.services.iter() {
        let is_main = &*service.name == active_service;
        match summarize(repo, line_key, &service.name, direction, is_main) {
            Ok(summary) => summaries.push(summary),
            Err(err) if is_main => return Err(err),
            Err(err) => {
                warn!(
                    line = line_key,
                    service = &*service.name,
                    %err,
                    "skipping service with malformed data"
                );
            }
        }
    }

    summaries.sort_by_key(|summary| trailing_number(&summary.name));
    Ok(summaries)
}

fn summarize(
    repo: &Repository,
    line_key: &str,
    service_name: &str,
    direction: Direction,
    is_main: bool,
) -> Result<ServiceSummary, Error> {
    let line = resolve::line(repo, line_key)?;
    let stations = resolve(repo, line_key, service_name)?;
    let ends = endpoints(repo, line_key, service_name, direction)?;

    let oriented = direction.orient(stations);
    let total = oriented.len();
    let (ring, has_terminal) = match &ends {
        Endpoints::Ring { running, terminal } => (Some(*running), terminal.is_some()),
        Endpoints::Linear { .. } => (None, true),
    };

    Ok(ServiceSummary {
        name: service_name.into(),
        is_main,
        is_loop: line.is_loop(),
        ring,
        has_terminal,
        start: ends.start_label().to_string(),
        end: ends.terminal_label().to_string(),
        count: total.clamp(COUNT_MIN, COUNT_MAX),
        total,
        stations: oriented,
    })
}

/// Trailing numeric suffix of a service name; names without one sort last,
/// keeping their relative order under the stable sort.
fn trailing_number(name: &str) -> u64 {
    let suffix_len = name
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .count();
    if suffix_len == 0 {
        return NO_SUFFIX;
    }
    name[name.len() - suffix_len..].parse().unwrap_or(NO_SUFFIX)
}

#[test]
fn trailing_numbers() {
    assert_eq!(trailing_number("route1"), 1);
    assert_eq!(trailing_number("route10"), 10);
    assert_eq!(trailing_number("expressA"), NO_SUFFIX);
    assert_eq!(trailing_number("loop2"), 2);
}
