use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing compiled output.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Output path has no file name component.
    #[error("Output path has no file name: {0}")]
    InvalidPath(PathBuf),
    /// Backup directory cannot be created or written to.
    #[error("Backup directory not writable: {0}")]
    BackupDirNotWritable(PathBuf),
    /// Failed to create backup file.
    #[error("Failed to create backup: {0}")]
    BackupFailed(String),
    /// Atomic write operation failed.
    #[error("Atomic write failed: {0}")]
    WriteFailed(String),
    /// Container could not be serialised.
    #[error("Failed to serialise output: {0}")]
    Serialize(#[from] serde_json::Error),
}
