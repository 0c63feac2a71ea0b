mod board;
mod error;
mod service;
mod station;

pub use board::*;
pub use error::*;
pub use service::*;
pub use station::*;
