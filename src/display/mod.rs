use thiserror::Error;

mod containment;
mod endpoints;
mod line_map;
mod resolve;
mod services;
mod state;
mod views;

pub use containment::*;
pub use endpoints::*;
pub use line_map::*;
pub use resolve::*;
pub use services::*;
pub use state::*;
pub use views::*;

/// Lookup failures for an explicitly requested line/service pair. These are
/// caller errors and are surfaced, never retried internally.
#[derive(Error, Debug)]
pub enum Error {
    #[error("line '{0}' does not exist")]
    LineNotFound(String),
    #[error("service '{service}' does not exist on line '{line}'")]
    ServiceNotFound { line: String, service: String },
    #[error("service '{service}' on line '{line}' has no stations")]
    EmptyService { line: String, service: String },
}
