use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use words::{Alphabet, AlphabetCodec, ConfigurationError};

/// Corpus read when none is given on the command line.
pub const DEFAULT_CORPUS: &str = "corpus.txt";
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Letters counted by the search, in bit order.
    pub alphabet: String,
    pub corpus: PathBuf,
    pub parallel: bool,
    /// Masks per chunk when filtering in parallel.
    pub chunk_size: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            alphabet: words::LATIN.to_owned(),
            corpus: PathBuf::from(DEFAULT_CORPUS),
            parallel: false,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl RunConfig {
    pub fn from_json(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// Validate the alphabet and build its codec.
    pub fn codec(&self) -> Result<AlphabetCodec, ConfigurationError> {
        Alphabet::new(&self.alphabet).map(AlphabetCodec::new)
    }
}
