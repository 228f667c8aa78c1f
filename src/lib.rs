//! Mirrorup - one-shot local-to-remote directory mirroring over SSH
//!
//! Mirrorup takes a set of configured folder mappings and mirrors each local
//! directory to its counterpart on a remote machine, delegating the actual
//! delta transfer to rsync. It prepares the remote directory (mkdir/chown
//! over SSH), honors `.hgignore`/`.gitignore` at the sync root, and surfaces
//! transfer failures with both paths and the captured stderr.

pub mod command;
pub mod config;
pub mod error;
pub mod ignores;
pub mod models;
pub mod orchestrator;
pub mod path;
pub mod remote;

// Re-exports for convenience
pub use config::{Config, ConfigError};
pub use error::{SyncError, SyncResult};
pub use models::{FolderMapping, HostOs, RemoteConnectionInfo, TransferOutcome, TransferSpec};
pub use orchestrator::{
    NoopEventSink, ProcessRunner, SyncEventSink, SyncOptions, SyncOrchestrator,
    SystemProcessRunner,
};
pub use remote::{RemoteExec, SshRemoteExec};
