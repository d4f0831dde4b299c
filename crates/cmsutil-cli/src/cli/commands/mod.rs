//! CLI command handlers, one file per command.

mod check;
mod join;
mod levelize;
mod media;
mod params;

pub use check::run_check;
pub use join::run_join;
pub use levelize::run_levelize;
pub use media::run_media;
pub use params::run_params;
