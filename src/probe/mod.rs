//! Socket probe - bind a Unix domain socket at a path, then clean it up

mod runner;

pub use runner::{remove_best_effort, SocketProbe};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Filesystem location of the socket entry a probe creates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SocketPath {
    path: PathBuf,
}

impl SocketPath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// Check whether anything currently occupies the path
    pub fn is_occupied(&self) -> bool {
        self.path.exists()
    }
}

impl AsRef<Path> for SocketPath {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl From<PathBuf> for SocketPath {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for SocketPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl fmt::Display for SocketPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Result of a single bind attempt
#[derive(Debug)]
pub enum ProbeOutcome {
    /// The socket was bound at the path
    Bound,
    /// The OS refused the bind
    BindFailed(io::Error),
}

impl ProbeOutcome {
    pub fn is_bound(&self) -> bool {
        matches!(self, ProbeOutcome::Bound)
    }

    /// The OS error behind a failed bind, if any
    pub fn error(&self) -> Option<&io::Error> {
        match self {
            ProbeOutcome::Bound => None,
            ProbeOutcome::BindFailed(e) => Some(e),
        }
    }
}

/// Failures that stop a probe before it can attempt the bind
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Failed to create Unix socket: {0}")]
    Acquire(#[source] io::Error),
}
