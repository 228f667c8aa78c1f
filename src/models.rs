//! Core data types for a sync run
//!
//! Everything here is ephemeral: a [`TransferSpec`] lives for one rsync
//! invocation, a [`TransferOutcome`] is consumed immediately to decide
//! success or failure. Nothing is persisted between runs.

use std::path::PathBuf;

use serde::Deserialize;

/// One configured (local path, remote path) pair to mirror.
///
/// The host path may be relative; it is expanded against the project root
/// before transfer. The guest path must be absolute on the remote machine.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FolderMapping {
    /// Opaque identifier, used only for reporting
    pub id: String,
    pub hostpath: String,
    pub guestpath: String,
}

/// SSH connection parameters for the remote machine.
///
/// Supplied per sync run, treated as immutable input, never persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteConnectionInfo {
    pub host: String,
    #[serde(default = "default_ssh_port")]
    pub port: u16,
    pub username: String,
    pub private_key_path: PathBuf,
    /// When false (the default), the remote-shell command passes
    /// `-o StrictHostKeyChecking=no`. An accepted trust trade-off for
    /// ephemeral dev/test machines; set true to keep host-key verification.
    #[serde(default)]
    pub strict_host_key_checking: bool,
}

fn default_ssh_port() -> u16 {
    22
}

/// Host operating-system family, as far as rsync path syntax cares.
///
/// Threaded explicitly through path normalization rather than read from
/// ambient process state, so behavior is deterministic under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    /// Native Windows, MinGW, or Cygwin
    Windows,
    Unix,
}

impl HostOs {
    /// Classify a host-OS identifier string (e.g. `x86_64-pc-mingw32`).
    ///
    /// Identifiers containing `mswin`, `mingw`, or `cygwin` are
    /// Windows-family; everything else is treated as Unix.
    pub fn from_identifier(identifier: &str) -> Self {
        let identifier = identifier.to_ascii_lowercase();
        if ["mswin", "mingw", "cygwin"]
            .iter()
            .any(|family| identifier.contains(family))
        {
            Self::Windows
        } else {
            Self::Unix
        }
    }

    /// The OS family this binary was built for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }
}

/// Everything needed to build one rsync invocation.
///
/// Derived per [`FolderMapping`] and discarded after the transfer.
#[derive(Debug)]
pub struct TransferSpec<'a> {
    /// Normalized local source path (trailing slash guaranteed)
    pub hostpath: String,
    /// Absolute destination path on the remote machine
    pub guestpath: &'a str,
    pub conn: &'a RemoteConnectionInfo,
    /// Ignore files discovered at the sync root, in discovery order
    pub ignore_files: Vec<PathBuf>,
}

/// Captured result of one external process execution.
#[derive(Debug, Clone)]
pub struct TransferOutcome {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TransferOutcome {
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_os_classifies_windows_family_identifiers() {
        assert_eq!(HostOs::from_identifier("mswin32"), HostOs::Windows);
        assert_eq!(HostOs::from_identifier("x86_64-pc-mingw32"), HostOs::Windows);
        assert_eq!(HostOs::from_identifier("i686-cygwin"), HostOs::Windows);
        assert_eq!(HostOs::from_identifier("MINGW64"), HostOs::Windows);
    }

    #[test]
    fn host_os_treats_everything_else_as_unix() {
        assert_eq!(HostOs::from_identifier("x86_64-linux-gnu"), HostOs::Unix);
        assert_eq!(HostOs::from_identifier("darwin23"), HostOs::Unix);
        assert_eq!(HostOs::from_identifier(""), HostOs::Unix);
    }

    #[test]
    fn outcome_success_is_exit_code_zero() {
        let ok = TransferOutcome {
            exit_code: 0,
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(ok.is_success());

        let failed = TransferOutcome {
            exit_code: 23,
            stdout: String::new(),
            stderr: "rsync: mkdir failed".to_string(),
        };
        assert!(!failed.is_success());
    }
}
