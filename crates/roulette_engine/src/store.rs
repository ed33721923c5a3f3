use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use roulette_logging::roulette_debug;

use crate::{AtomicFileWriter, PersistError};

/// Storage key of the topic list.
pub const TOPICS_KEY: &str = "roulette-topics";

/// Durable copy of the topic list: one JSON array of strings per data directory.
#[derive(Debug, Clone)]
pub struct TopicStore {
    writer: AtomicFileWriter,
}

impl TopicStore {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            writer: AtomicFileWriter::new(dir),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.writer.dir().join(Self::filename())
    }

    fn filename() -> String {
        format!("{TOPICS_KEY}.json")
    }

    /// Reads the stored list. `Ok(None)` means nothing has been stored yet.
    pub fn read(&self) -> Result<Option<Vec<String>>, PersistError> {
        let path = self.path();
        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let topics: Vec<String> = serde_json::from_str(&content)?;
        roulette_debug!("Read {} topics from {:?}", topics.len(), path);
        Ok(Some(topics))
    }

    /// Overwrites the stored list.
    pub fn write(&self, topics: &[String]) -> Result<PathBuf, PersistError> {
        let content = serde_json::to_string(topics)?;
        let path = self.writer.write(&Self::filename(), &content)?;
        roulette_debug!("Wrote {} topics to {:?}", topics.len(), path);
        Ok(path)
    }
}
