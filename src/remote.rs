//! Remote directory preparation
//!
//! Before rsync runs, the destination directory must exist and be owned by
//! the connecting user. Both commands run through the [`RemoteExec`] port so
//! tests can observe them without a network; the real implementation shells
//! out to `ssh`.

use std::process::{Command, Stdio};

use crate::error::{SyncError, SyncResult};
use crate::models::RemoteConnectionInfo;

/// Privileged remote command execution capability.
///
/// `Ok(code)` means the command ran and reported `code`; `Err` means the
/// collaborator itself failed (e.g. the connection could not be opened).
pub trait RemoteExec: Send + Sync {
    fn sudo(&self, command: &str) -> SyncResult<i32>;
}

/// Create `guestpath` (with intermediate directories) and hand it to
/// `username`, failing fast if either command reports a non-zero status.
///
/// `mkdir -p` is idempotent for existing directories, so re-running a sync
/// against a prepared guest is safe.
pub fn prepare(guestpath: &str, username: &str, remote: &dyn RemoteExec) -> SyncResult<()> {
    run_checked(remote, &format!("mkdir -p '{}'", guestpath), guestpath)?;
    run_checked(
        remote,
        &format!("chown -R {} '{}'", username, guestpath),
        guestpath,
    )?;
    Ok(())
}

fn run_checked(remote: &dyn RemoteExec, command: &str, guestpath: &str) -> SyncResult<()> {
    let code = remote.sudo(command)?;
    if code != 0 {
        return Err(SyncError::PrepareFailed {
            guestpath: guestpath.to_string(),
            message: format!("`{}` exited with status {}", command, code),
        });
    }
    Ok(())
}

/// [`RemoteExec`] backed by the system `ssh` client.
pub struct SshRemoteExec {
    conn: RemoteConnectionInfo,
}

impl SshRemoteExec {
    pub fn new(conn: RemoteConnectionInfo) -> Self {
        Self { conn }
    }
}

impl RemoteExec for SshRemoteExec {
    fn sudo(&self, command: &str) -> SyncResult<i32> {
        let mut ssh = Command::new("ssh");
        ssh.arg("-p")
            .arg(self.conn.port.to_string())
            .arg("-i")
            .arg(&self.conn.private_key_path);
        if !self.conn.strict_host_key_checking {
            ssh.arg("-o").arg("StrictHostKeyChecking=no");
        }
        ssh.arg(format!("{}@{}", self.conn.username, self.conn.host))
            .arg(format!("sudo {}", command))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        let status = ssh
            .status()
            .map_err(|e| SyncError::RemoteExec(e.to_string()))?;
        Ok(status.code().unwrap_or(-1))
    }
}
