//! Error types for host helpers.

use std::process::ExitStatus;

use thiserror::Error;

/// Errors from running external programs.
#[derive(Debug, Error)]
pub enum HostError {
    /// The program could not be started.
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The program ran but did not exit successfully.
    #[error("{program} failed: {status}")]
    Failed { program: String, status: ExitStatus },
}
