use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use lvsm_common::error::FileError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("invalid port number: {0}")]
    PortOutOfRange(String),
    #[error("service/proto not found: {0}")]
    UnknownService(String),
    #[error("service database {}: {source}", .path.display())]
    ServiceDatabase {
        path: PathBuf,
        #[source]
        source: FileError,
    },
    #[error("{host}: {source}")]
    HostLookup {
        host: String,
        #[source]
        source: io::Error,
    },
    #[error("{0}: no IPv4 address associated with hostname")]
    NoAddress(String),
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("no command given")]
    EmptyCommand,
    #[error("unable to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("'{command}' failed ({status}): {stderr}")]
    Failed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
}

#[derive(Debug, Error)]
pub enum PagerError {
    #[error("no pager configured")]
    EmptyCommand,
    #[error("unable to start pager '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("unable to write to '{program}': {source}")]
    Io {
        program: String,
        #[source]
        source: io::Error,
    },
}
