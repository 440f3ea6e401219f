//! Runtime configuration for the tessellation tools.
//!
//! Settings persist to disk as RON files and can be overridden via clap CLI
//! flags. Unknown fields are tolerated and missing fields fall back to
//! defaults, so config files stay forward/backward compatible.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{DebugSection, PlanetSection, TesseraConfig, TessellationSection};
pub use error::ConfigError;
