//! VCS ignore-file discovery
//!
//! rsync itself does the pattern matching via `--exclude-from`; this module
//! only finds which conventional ignore files exist at the sync root.

use std::path::{Path, PathBuf};

/// Conventional ignore files honored during transfer, in check order.
const IGNORE_FILES: [&str; 2] = [".hgignore", ".gitignore"];

/// Return the ignore files present at the top level of `root`.
///
/// Only the root itself is checked; nested ignore files are the transfer
/// tool's concern, not ours. Order follows [`IGNORE_FILES`].
pub fn discover_ignore_files(root: &Path) -> Vec<PathBuf> {
    IGNORE_FILES
        .iter()
        .map(|name| root.join(name))
        .filter(|candidate| candidate.exists())
        .collect()
}
