//! Sync orchestration
//!
//! Drives the per-mapping pipeline: expand and normalize the host path,
//! report intent, prepare the remote directory, build the rsync argv, run
//! it, and classify the outcome. Mappings are processed sequentially in
//! configuration order; the first failure aborts the remaining mappings.
//!
//! External effects go through ports ([`ProcessRunner`], [`RemoteExec`],
//! [`SyncEventSink`]) so the whole pipeline runs under test with no network
//! and no rsync binary.

use std::path::Path;
use std::process::Command;

use crate::error::{SyncError, SyncResult};
use crate::models::{FolderMapping, HostOs, RemoteConnectionInfo, TransferOutcome, TransferSpec};
use crate::remote::RemoteExec;
use crate::{command, ignores, path};

/// Blocking external-process execution port.
pub trait ProcessRunner: Send + Sync {
    /// Run `argv[0]` with `argv[1..]`, capturing output.
    fn run(&self, argv: &[String]) -> SyncResult<TransferOutcome>;
}

/// [`ProcessRunner`] backed by `std::process::Command`.
pub struct SystemProcessRunner;

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, argv: &[String]) -> SyncResult<TransferOutcome> {
        let output = Command::new(&argv[0])
            .args(&argv[1..])
            .output()
            .map_err(|e| SyncError::Spawn {
                program: argv[0].clone(),
                source: e,
            })?;

        Ok(TransferOutcome {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Progress events emitted while syncing.
///
/// Default implementations are no-ops, so sinks implement only what they
/// render.
pub trait SyncEventSink: Send + Sync {
    /// A mapping is about to be transferred.
    fn folder_started(&self, _hostpath: &str, _guestpath: &str) {}

    /// A mapping finished successfully.
    fn folder_synced(&self, _id: &str) {}

    /// Dry-run mode: the argv that would have been executed.
    fn command_planned(&self, _argv: &[String]) {}
}

/// Sink that discards all events.
pub struct NoopEventSink;

impl SyncEventSink for NoopEventSink {}

/// Options for one sync run.
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// Prepare and plan, but do not execute the transfer
    pub dry_run: bool,
}

/// Top-level driver over the configured folder mappings.
pub struct SyncOrchestrator<'a> {
    conn: &'a RemoteConnectionInfo,
    remote: &'a dyn RemoteExec,
    runner: &'a dyn ProcessRunner,
    events: &'a dyn SyncEventSink,
    host_os: HostOs,
}

impl<'a> SyncOrchestrator<'a> {
    pub fn new(
        conn: &'a RemoteConnectionInfo,
        remote: &'a dyn RemoteExec,
        runner: &'a dyn ProcessRunner,
        events: &'a dyn SyncEventSink,
        host_os: HostOs,
    ) -> Self {
        Self {
            conn,
            remote,
            runner,
            events,
            host_os,
        }
    }

    /// Mirror every mapping to the remote machine, in order.
    ///
    /// Stops at the first failing mapping; later mappings are not attempted.
    /// Each mapping is attempted exactly once, with no timeout.
    pub fn sync_folders(
        &self,
        root: &Path,
        folders: &[FolderMapping],
        options: &SyncOptions,
    ) -> SyncResult<()> {
        for mapping in folders {
            self.sync_one(root, mapping, options)?;
        }
        Ok(())
    }

    fn sync_one(
        &self,
        root: &Path,
        mapping: &FolderMapping,
        options: &SyncOptions,
    ) -> SyncResult<()> {
        let hostpath = path::normalize(&path::expand(&mapping.hostpath, root), self.host_os);
        let guestpath = mapping.guestpath.as_str();

        self.events.folder_started(&hostpath, guestpath);

        crate::remote::prepare(guestpath, &self.conn.username, self.remote)?;

        let spec = TransferSpec {
            hostpath: hostpath.clone(),
            guestpath,
            conn: self.conn,
            ignore_files: ignores::discover_ignore_files(root),
        };
        let argv = command::build(&spec);

        if options.dry_run {
            self.events.command_planned(&argv);
            return Ok(());
        }

        let outcome = self.runner.run(&argv)?;
        if !outcome.is_success() {
            return Err(SyncError::TransferFailed {
                hostpath,
                guestpath: guestpath.to_string(),
                stderr: outcome.stderr,
            });
        }

        self.events.folder_synced(&mapping.id);
        Ok(())
    }
}
