use std::sync::Arc;

use tracing::warn;

use crate::{
    display::{Error, resolve},
    repository::Repository,
};

/// Finds the longest sibling service whose station sequence contains the
/// active one as a contiguous block, as stored or reversed.
///
/// Ties go to the first sibling in stored order. Only the query is reversed,
/// never rotated, so wrap-around containment on loop lines is not detected.
pub fn containing_service(
    repo: &Repository,
    line_key: &str,
    active_service: &str,
) -> Result<Option<Arc<str>>, Error> {
    let line = resolve::line(repo, line_key)?;
    let active = resolve(repo, line_key, active_service)?;

    let mut candidate: Option<Arc<str>> = None;
    let mut candidate_len = active.len();
    for service in line.services.iter() {
        if &*service.name == active_service {
            continue;
        }
        let stations = match resolve(repo, line_key, &service.name) {
            Ok(stations) => stations,
            Err(err) => {
                warn!(
                    line = line_key,
                    service = &*service.name,
                    %err,
                    "skipping service in containment scan"
                );
                continue;
            }
        };
        if stations.len() > candidate_len && contains_block(active, stations) {
            candidate = Some(service.name.clone());
            candidate_len = stations.len();
        }
    }
    Ok(candidate)
}

/// Whether `query` appears in `sequence` as a contiguous block, forward or
/// with the query reversed.
fn contains_block(query: &[Arc<str>], sequence: &[Arc<str>]) -> bool {
    if query.is_empty() || query.len() > sequence.len() {
        return false;
    }
    if sequence.windows(query.len()).any(|window| window == query) {
        return true;
    }
    let reversed: Vec<Arc<str>> = query.iter().rev().cloned().collect();
    sequence
        .windows(query.len())
        .any(|window| window == reversed.as_slice())
}
