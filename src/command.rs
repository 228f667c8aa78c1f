//! rsync argument construction
//!
//! Pure argv assembly from an already-validated [`TransferSpec`]; no I/O and
//! no failure cases. The argument order is part of the contract and covered
//! by tests.

use crate::models::{RemoteConnectionInfo, TransferSpec};

/// Program name placed at index 0 of the built argv.
pub const RSYNC_PROGRAM: &str = "rsync";

/// Build the full rsync argument vector for one transfer.
///
/// Layout: base flags, remote-shell argument, one `--exclude-from` pair per
/// discovered ignore file (discovery order), then source and
/// `user@host:guestpath`. `.hg/` gets an explicit exclude because
/// `--cvs-exclude` does not cover Mercurial metadata.
pub fn build(spec: &TransferSpec) -> Vec<String> {
    let conn = spec.conn;

    let mut argv: Vec<String> = [
        RSYNC_PROGRAM,
        "--verbose",
        "--archive",
        "-z",
        "--cvs-exclude",
        "--exclude",
        ".hg/",
        "-e",
    ]
    .iter()
    .map(|arg| arg.to_string())
    .collect();
    argv.push(remote_shell(conn));

    for ignore_file in &spec.ignore_files {
        argv.push("--exclude-from".to_string());
        argv.push(ignore_file.display().to_string());
    }

    argv.push(spec.hostpath.clone());
    argv.push(format!(
        "{}@{}:{}",
        conn.username, conn.host, spec.guestpath
    ));
    argv
}

/// The `-e` value: how rsync opens its control connection.
///
/// Embeds the SSH port and identity file; host-key checking is relaxed
/// unless the connection opts into strict verification.
fn remote_shell(conn: &RemoteConnectionInfo) -> String {
    let mut shell = format!(
        "ssh -p {} -i '{}'",
        conn.port,
        conn.private_key_path.display()
    );
    if !conn.strict_host_key_checking {
        shell.push_str(" -o StrictHostKeyChecking=no");
    }
    shell
}
