//! Mirrorup CLI - one-shot local-to-remote directory mirroring
//!
//! Usage: mirrorup <COMMAND>
//!
//! Commands:
//!   sync    Mirror configured folders to the remote machine

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use mirrorup::{
    Config, HostOs, SshRemoteExec, SyncEventSink, SyncOptions, SyncOrchestrator,
    SystemProcessRunner,
};

/// Mirrorup - one-shot local-to-remote directory mirroring
#[derive(Parser, Debug)]
#[command(name = "mirrorup")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output machine-readable JSON events
    #[arg(long, default_value = "false")]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Mirror configured folders to the remote machine
    Sync {
        /// Path to the config file
        #[arg(short, long, default_value = "mirrorup.toml")]
        config: PathBuf,

        /// Project root for relative host paths and ignore-file discovery
        /// (defaults to the config file's directory)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Build and show the rsync commands without executing them
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sync {
            config,
            root,
            dry_run,
        } => cmd_sync(&config, root, dry_run, cli.json),
    }
}

/// Plain-text progress sink
struct CliEventSink;

impl SyncEventSink for CliEventSink {
    fn folder_started(&self, hostpath: &str, guestpath: &str) {
        println!("Rsyncing folder: {} => {}", hostpath, guestpath);
    }

    fn folder_synced(&self, id: &str) {
        println!("  ✓ Synced: {}", id);
    }

    fn command_planned(&self, argv: &[String]) {
        println!("  (dry run) {}", argv.join(" "));
    }
}

/// Line-delimited JSON event sink
struct JsonEventSink;

impl SyncEventSink for JsonEventSink {
    fn folder_started(&self, hostpath: &str, guestpath: &str) {
        println!(
            "{}",
            serde_json::json!({
                "event": "folder_started",
                "hostpath": hostpath,
                "guestpath": guestpath,
            })
        );
    }

    fn folder_synced(&self, id: &str) {
        println!(
            "{}",
            serde_json::json!({ "event": "folder_synced", "id": id })
        );
    }

    fn command_planned(&self, argv: &[String]) {
        println!(
            "{}",
            serde_json::json!({ "event": "command_planned", "argv": argv })
        );
    }
}

fn cmd_sync(config_path: &PathBuf, root: Option<PathBuf>, dry_run: bool, json: bool) -> Result<()> {
    let config = Config::load(config_path)?;

    let root = match root {
        Some(root) => root,
        None => config_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".")),
    };

    if !json {
        println!("📦 Mirrorup Sync");
        println!("Remote: {}@{}", config.remote.username, config.remote.host);
        println!("Root: {}", root.display());
        if dry_run {
            println!("Mode: Dry run");
        }
        println!();
    }

    let remote = SshRemoteExec::new(config.remote.clone());
    let runner = SystemProcessRunner;
    let events: Box<dyn SyncEventSink> = if json {
        Box::new(JsonEventSink)
    } else {
        Box::new(CliEventSink)
    };

    let orchestrator = SyncOrchestrator::new(
        &config.remote,
        &remote,
        &runner,
        events.as_ref(),
        HostOs::current(),
    );

    orchestrator
        .sync_folders(&root, &config.folders, &SyncOptions { dry_run })
        .context("sync failed")?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "sync",
                "status": "success",
                "folders": config.folders.len(),
            })
        );
    } else {
        println!();
        println!("✓ Synced {} folder(s)", config.folders.len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_sync() {
        let cli = Cli::try_parse_from(["mirrorup", "sync"]).unwrap();
        assert!(matches!(cli.command, Commands::Sync { .. }));
    }

    #[test]
    fn test_cli_parse_sync_with_args() {
        let cli = Cli::try_parse_from([
            "mirrorup",
            "sync",
            "--config",
            "deploy/mirrorup.toml",
            "--root",
            "/proj",
            "--dry-run",
        ])
        .unwrap();

        let Commands::Sync {
            config,
            root,
            dry_run,
        } = cli.command;
        assert_eq!(config, PathBuf::from("deploy/mirrorup.toml"));
        assert_eq!(root, Some(PathBuf::from("/proj")));
        assert!(dry_run);
    }

    #[test]
    fn test_cli_json_flag() {
        let cli = Cli::try_parse_from(["mirrorup", "--json", "sync"]).unwrap();
        assert!(cli.json);
    }
}
