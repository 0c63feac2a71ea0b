mod board;
mod info;
mod state;

pub use board::*;
pub use info::*;
pub use state::*;
