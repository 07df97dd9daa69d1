//! Leveled logger
//! Filters by a severity threshold, colors console output per level and
//! routes lines to stdout, stderr or an append-only file.

pub mod args;
pub mod config;
pub mod error;
pub mod level;
pub mod logger;
pub mod output;

pub use config::Config;
pub use error::Error;
pub use level::Level;
pub use logger::{LevelLogger, get_logger};
pub use output::{Destination, Output};
