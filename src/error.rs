//! Error types for gsd.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Main error type for gsd operations.
#[derive(Debug, Error)]
pub enum GsdError {
    /// Bad arguments or an unrecognised mode token; the message is the usage line.
    #[error("{0}")]
    Usage(String),

    #[error("unknown mode: {0}")]
    UnknownMode(String),

    #[error("{0} mode already set")]
    ModeAlreadyActive(String),

    #[error("please run gsd as root")]
    NotPrivileged,

    #[error("`{command}` exited with {status}")]
    Refresh { command: String, status: ExitStatus },

    #[error("failed to run `{command}`: {source}")]
    RefreshSpawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Hosts(#[from] HostsError),
}

/// Errors loading the sites file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read sites file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse sites file: {0}")]
    Parse(#[source] ini::ParseError),

    #[error("no sites.ini found (looked in {})", join_paths(.searched))]
    NotFound { searched: Vec<PathBuf> },

    #[error("mode [{0}] is defined more than once")]
    DuplicateMode(String),

    #[error("mode [{0}] has no `sites` key")]
    MissingSites(String),

    #[error("mode [{mode}] has invalid domain {domain:?}: {reason}")]
    InvalidDomain {
        mode: String,
        domain: String,
        reason: String,
    },
}

/// Errors reading or rewriting the hosts file.
#[derive(Debug, Error)]
pub enum HostsError {
    #[error("failed to access hosts file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("hosts file has a `## start gsd` line with no `## end gsd` after it; fix it by hand")]
    UnterminatedBlock,
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias using [`GsdError`].
pub type Result<T> = std::result::Result<T, GsdError>;
