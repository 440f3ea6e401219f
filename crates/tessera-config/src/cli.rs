//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::TesseraConfig;

/// Command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "tessera", about = "Ellipsoid polygon tessellation")]
pub struct CliArgs {
    /// Maximum angular edge extent in degrees.
    #[arg(long)]
    pub granularity_deg: Option<f64>,

    /// Height offset above the reference surface in meters.
    #[arg(long)]
    pub height: Option<f64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl TesseraConfig {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(granularity) = args.granularity_deg {
            self.tessellation.granularity_deg = granularity;
        }
        if let Some(height) = args.height {
            self.tessellation.height_m = height;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
