//! File-based logging using simplelog
//!
//! The terminal belongs to the game, so log records go to a file instead.

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::Path;

use crate::error::Result;

/// `RUST_LOG` wins over the level given on the command line.
fn level_from_env(fallback: LevelFilter) -> LevelFilter {
    std::env::var("RUST_LOG")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(fallback)
}

/// Initialize file-based logging, truncating `path`.
pub fn init(path: &Path, level: LevelFilter) -> Result<()> {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c) // Fallback if local time offset fails
        .build();

    let file = File::create(path)?;
    WriteLogger::init(level_from_env(level), config, file)?;
    Ok(())
}
