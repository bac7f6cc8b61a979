//! Starter workflow error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for starter operations.
pub type StarterResult<T> = Result<T, StarterError>;

/// Errors that can occur while talking to the starter service or handling
/// the downloaded archive.
#[derive(Debug, Error)]
pub enum StarterError {
    /// Transport-level failure: the request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with an error status.
    #[error("Starter service returned HTTP {status}")]
    BadResponse { status: u16 },

    /// The support matrix payload did not match the expected schema.
    #[error("Malformed support matrix: {0}")]
    MalformedMatrix(String),

    /// Archive extraction failed. The archive is left on disk.
    #[error("Failed to extract archive: {0}")]
    Extraction(String),

    /// Deleting the archive after extraction failed. Non-fatal.
    #[error("Failed to delete {file}: {source}")]
    Cleanup { file: PathBuf, source: io::Error },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl StarterError {
    /// The single message shown to the user for this failure.
    ///
    /// Status codes and debug detail are logged, never surfaced here.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => {
                "Could not reach the MicroProfile Starter service. \
                 Check your network connection and try again."
                    .to_string()
            }
            Self::BadResponse { .. } | Self::MalformedMatrix(_) | Self::Io(_) => {
                "Failed to generate the MicroProfile starter project.".to_string()
            }
            Self::Extraction(_) => {
                "Failed to extract the project archive. \
                 The downloaded zip was kept for inspection."
                    .to_string()
            }
            Self::Cleanup { file, .. } => {
                format!("Could not delete {} after extraction.", file.display())
            }
        }
    }

    /// Whether the workflow can continue after reporting this error.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Cleanup { .. })
    }
}
