pub mod display;
pub mod refdata;
pub mod repository;
pub mod shared;

pub mod prelude {
    pub use crate::display::*;
    pub use crate::refdata::{Config, RefData};
    pub use crate::repository::{
        DEFAULT_LINE_COLOR, Line, LineKind, Repository, Service, StationEntry,
    };
    pub use crate::shared::*;
}
