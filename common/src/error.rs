use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal configuration problems. Any of these means no configuration is handed out.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A key outside the fixed schema was found.
    #[error("configuration file line {line}: invalid variable '{key}'")]
    InvalidVariable { line: usize, key: String },
    /// A `*_config` key names a file that cannot be opened for reading.
    #[error("in lvsm configuration file line {line}: {source}: '{}'", .path.display())]
    MissingFile {
        line: usize,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConfigError {
    /// 1-based line number the error was found on.
    pub fn line(&self) -> usize {
        match self {
            ConfigError::InvalidVariable { line, .. } => *line,
            ConfigError::MissingFile { line, .. } => *line,
        }
    }
}

#[derive(Debug, Error)]
pub enum FileError {
    #[error("unable to open '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unable to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
