//! Optional RON configuration.
//!
//! Looked up at `$TOPIC_ROULETTE_CONFIG`, falling back to `./roulette.ron`.
//! A missing file means defaults; a malformed one is a startup error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use roulette_core::SpinTiming;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_ENV: &str = "TOPIC_ROULETTE_CONFIG";
pub const CONFIG_FILENAME: &str = "roulette.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinSettings {
    pub total_ms: u64,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for SpinSettings {
    fn default() -> Self {
        let timing = SpinTiming::default();
        Self {
            total_ms: timing.total.as_millis() as u64,
            base_delay_ms: timing.base_delay.as_millis() as u64,
            max_delay_ms: timing.max_delay.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouletteConfig {
    /// Where topics and the log file live. Defaults to the working directory.
    pub data_dir: Option<PathBuf>,
    pub tick_rate_ms: u64,
    pub log_to_file: bool,
    pub spin: SpinSettings,
}

impl Default for RouletteConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            tick_rate_ms: 50,
            log_to_file: true,
            spin: SpinSettings::default(),
        }
    }
}

impl RouletteConfig {
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
        })
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn timing(&self) -> SpinTiming {
        SpinTiming {
            total: Duration::from_millis(self.spin.total_ms),
            base_delay: Duration::from_millis(self.spin.base_delay_ms),
            max_delay: Duration::from_millis(self.spin.max_delay_ms),
        }
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::Invalid("tick_rate_ms must be positive".into()));
        }
        if self.spin.total_ms == 0 {
            return Err(ConfigError::Invalid("spin.total_ms must be positive".into()));
        }
        if self.spin.max_delay_ms < self.spin.base_delay_ms {
            return Err(ConfigError::Invalid(format!(
                "spin.max_delay_ms ({}) is below spin.base_delay_ms ({})",
                self.spin.max_delay_ms, self.spin.base_delay_ms
            )));
        }
        Ok(self)
    }
}

pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME))
}

pub fn load(path: &Path) -> Result<RouletteConfig, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(RouletteConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    parse(path, &text)
}

fn parse(path: &Path, text: &str) -> Result<RouletteConfig, ConfigError> {
    let config: RouletteConfig = ron::from_str(text).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    config.validate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load(&temp.path().join(CONFIG_FILENAME)).unwrap();

        assert_eq!(config, RouletteConfig::default());
        assert_eq!(config.timing(), SpinTiming::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, "(log_to_file: false, spin: (total_ms: 3000))").unwrap();

        let config = load(&path).unwrap();

        assert!(!config.log_to_file);
        assert_eq!(config.tick_rate_ms, 50);
        assert_eq!(config.timing().total, Duration::from_millis(3000));
        assert_eq!(config.timing().base_delay, Duration::from_millis(30));
    }

    #[test]
    fn data_dir_is_taken_from_file() {
        let config = parse(Path::new("x"), "(data_dir: Some(\"/tmp/roulette\"))").unwrap();
        assert_eq!(config.data_dir(), PathBuf::from("/tmp/roulette"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let err = parse(Path::new("x"), "(tick_rate_ms: \"fast\")").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }), "got {err:?}");
    }

    #[test]
    fn inverted_delays_are_rejected() {
        let err = parse(
            Path::new("x"),
            "(spin: (base_delay_ms: 300, max_delay_ms: 100))",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "got {err:?}");
    }
}
