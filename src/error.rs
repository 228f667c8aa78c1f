//! Error types for mirrorup
//!
//! Uses `thiserror` for library errors; the binary wraps these in `anyhow`.

use thiserror::Error;

/// Result type alias for mirrorup operations
pub type SyncResult<T> = Result<T, SyncError>;

/// Main error type for mirrorup operations
#[derive(Error, Debug)]
pub enum SyncError {
    /// The transfer process exited non-zero. Carries both paths and the
    /// captured stderr so the failure can be diagnosed without re-running.
    #[error("rsync of {hostpath} to {guestpath} failed:\n{stderr}")]
    TransferFailed {
        hostpath: String,
        guestpath: String,
        stderr: String,
    },

    /// Remote directory creation or ownership change reported failure.
    /// Raised before any transfer is attempted for the mapping.
    #[error("failed to prepare remote directory '{guestpath}': {message}")]
    PrepareFailed { guestpath: String, message: String },

    /// The remote-execution collaborator itself failed (connection-level),
    /// before the remote command could report a status.
    #[error("remote command execution failed: {0}")]
    RemoteExec(String),

    /// The transfer process could not be started at all.
    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_failed_display_carries_both_paths_and_stderr() {
        let err = SyncError::TransferFailed {
            hostpath: "/home/me/project/".to_string(),
            guestpath: "/vagrant".to_string(),
            stderr: "rsync: mkdir failed".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("/home/me/project/"));
        assert!(rendered.contains("/vagrant"));
        assert!(rendered.contains("rsync: mkdir failed"));
    }

    #[test]
    fn prepare_failed_display_names_guestpath() {
        let err = SyncError::PrepareFailed {
            guestpath: "/srv/app".to_string(),
            message: "`mkdir -p '/srv/app'` exited with status 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to prepare remote directory '/srv/app': `mkdir -p '/srv/app'` exited with status 1"
        );
    }
}
