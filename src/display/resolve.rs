use std::sync::Arc;

use crate::{
    display::Error,
    repository::{Line, Repository, Service},
};

/// Looks up a line by key.
pub(crate) fn line<'a>(repo: &'a Repository, line_key: &str) -> Result<&'a Line, Error> {
    repo.line_by_key(line_key)
        .ok_or_else(|| Error::LineNotFound(line_key.to_string()))
}

/// Looks up a service under a line, first match in stored order.
pub(crate) fn service<'a>(
    repo: &'a Repository,
    line_key: &str,
    service_name: &str,
) -> Result<&'a Service, Error> {
    line(repo, line_key)?
        .service(service_name)
        .ok_or_else(|| Error::ServiceNotFound {
            line: line_key.to_string(),
            service: service_name.to_string(),
        })
}

/// Resolves the ordered station sequence for a service, verbatim as stored.
pub fn resolve<'a>(
    repo: &'a Repository,
    line_key: &str,
    service_name: &str,
) -> Result<&'a [Arc<str>], Error> {
    let service = service(repo, line_key, service_name)?;
    if service.stations.is_empty() {
        return Err(Error::EmptyService {
            line: line_key.to_string(),
            service: service_name.to_string(),
        });
    }
    Ok(&service.stations)
}

/// Names of every service operating on a line, in stored order.
pub fn services_for_line(repo: &Repository, line_key: &str) -> Result<Vec<Arc<str>>, Error> {
    Ok(line(repo, line_key)?
        .services
        .iter()
        .map(|service| service.name.clone())
        .collect())
}

/// The station after `current` in stored order. None at the end of the line
/// or when the station is not on the service.
pub fn next_station_after(
    repo: &Repository,
    line_key: &str,
    service_name: &str,
    current: &str,
) -> Result<Option<Arc<str>>, Error> {
    let stations = resolve(repo, line_key, service_name)?;
    let position = stations.iter().position(|name| &**name == current);
    Ok(position.and_then(|i| stations.get(i + 1)).cloned())
}
