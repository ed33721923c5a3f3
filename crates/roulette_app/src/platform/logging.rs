//! Logging initialization for the roulette app.
//!
//! The terminal belongs to the UI, so logs only ever go to a file.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{Config, ConfigBuilder, WriteLogger};

pub const LOG_FILENAME: &str = "roulette.log";

/// Destination for log output.
pub enum LogDestination {
    /// Write to the given file, truncating it.
    File(PathBuf),
    /// Discard all log output.
    Off,
}

pub fn initialize(destination: LogDestination) {
    let LogDestination::File(log_path) = destination else {
        return;
    };
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    match create_log_file(&log_path) {
        Ok(file) => {
            let _ = WriteLogger::init(level, build_config(), file);
        }
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
        }
    }
}

/// Creates (truncating) the log file, along with its directory if the data
/// directory has not been created yet.
fn create_log_file(path: &Path) -> io::Result<File> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    File::create(path)
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
