//! Probe execution

use super::{ProbeError, ProbeOutcome, SocketPath};
use std::path::Path;
use tokio::net::UnixSocket;

/// Runs one bind-and-release cycle against a socket path
pub struct SocketProbe {
    path: SocketPath,
}

impl SocketProbe {
    /// Create a new probe for the given path
    pub fn new(path: impl Into<SocketPath>) -> Self {
        Self { path: path.into() }
    }

    /// Get the probed path
    pub fn path(&self) -> &SocketPath {
        &self.path
    }

    /// Run the probe
    ///
    /// Removes whatever occupies the path, binds a stream socket there,
    /// closes it and removes the path again. A refused bind is reported
    /// through [`ProbeOutcome::BindFailed`]; only failing to create the
    /// socket itself is an error.
    pub fn run(&self) -> Result<ProbeOutcome, ProbeError> {
        let path = self.path.as_path();

        if self.path.is_occupied() {
            tracing::debug!("Removing existing entry: {:?}", path);
            remove_best_effort(path);
        }

        let outcome = bind_once(path);

        if self.path.is_occupied() {
            remove_best_effort(path);
        }

        outcome
    }
}

/// Create a socket, bind it and drop it before returning
fn bind_once(path: &Path) -> Result<ProbeOutcome, ProbeError> {
    let socket = UnixSocket::new_stream().map_err(ProbeError::Acquire)?;

    let outcome = match socket.bind(path) {
        Ok(()) => {
            tracing::debug!("Bound socket at {:?}", path);
            ProbeOutcome::Bound
        }
        Err(e) => {
            tracing::debug!("Bind failed at {:?}: {}", path, e);
            ProbeOutcome::BindFailed(e)
        }
    };

    drop(socket);
    Ok(outcome)
}

/// Remove a filesystem entry, ignoring any error.
///
/// Best-effort: a failed removal is neither reported nor retried.
pub fn remove_best_effort(path: &Path) {
    let _ = std::fs::remove_file(path);
}
