//! Host path normalization for rsync
//!
//! rsync treats `src/` and `src` differently: without the trailing slash the
//! source directory itself is recreated under the destination, adding an
//! extra nesting level. Normalization guarantees exactly one trailing slash.
//!
//! On Windows-family hosts the bundled rsync is a cygwin build, so drive
//! letters must be rewritten into the `/cygdrive/<letter>/` mount convention.

use std::path::Path;

use crate::models::HostOs;

/// Normalize a local path into the syntax rsync expects on `host_os`.
///
/// Pure and infallible: malformed input passes through with only the
/// trailing slash added.
pub fn normalize(path: &str, host_os: HostOs) -> String {
    let with_slash = if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{}/", path)
    };

    match host_os {
        HostOs::Windows => rewrite_drive_prefix(&with_slash),
        HostOs::Unix => with_slash,
    }
}

/// Expand a possibly-relative host path against the project root.
///
/// Absolute paths pass through unchanged.
pub fn expand(hostpath: &str, root: &Path) -> String {
    if Path::new(hostpath).is_absolute() {
        return hostpath.to_string();
    }
    let root = root.display().to_string();
    let root = root.trim_end_matches('/');
    let rel = hostpath.trim_start_matches("./");
    if rel.is_empty() || rel == "." {
        root.to_string()
    } else {
        format!("{}/{}", root, rel)
    }
}

/// Rewrite a leading `X:/` drive prefix into `/cygdrive/x/`.
///
/// Anything without that exact prefix is returned unchanged.
fn rewrite_drive_prefix(path: &str) -> String {
    let bytes = path.as_bytes();
    if bytes.len() >= 3
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && bytes[2] == b'/'
    {
        format!(
            "/cygdrive/{}/{}",
            bytes[0].to_ascii_lowercase() as char,
            &path[3..]
        )
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn appends_single_trailing_slash() {
        assert_eq!(normalize("/home/me/project", HostOs::Unix), "/home/me/project/");
    }

    #[test]
    fn preserves_existing_trailing_slash() {
        assert_eq!(normalize("/home/me/project/", HostOs::Unix), "/home/me/project/");
    }

    #[test]
    fn rewrites_drive_letter_on_windows_family() {
        assert_eq!(
            normalize("C:/foo/bar", HostOs::Windows),
            "/cygdrive/c/foo/bar/"
        );
        assert_eq!(normalize("d:/work", HostOs::Windows), "/cygdrive/d/work/");
    }

    #[test]
    fn leaves_drive_letter_alone_on_unix() {
        assert_eq!(normalize("C:/foo/bar", HostOs::Unix), "C:/foo/bar/");
    }

    #[test]
    fn non_drive_path_passes_through_on_windows() {
        assert_eq!(normalize("/srv/data", HostOs::Windows), "/srv/data/");
    }

    #[test]
    fn drive_prefix_must_be_leading() {
        assert_eq!(
            normalize("/mnt/C:/foo", HostOs::Windows),
            "/mnt/C:/foo/"
        );
    }

    #[test]
    fn expand_keeps_absolute_paths() {
        assert_eq!(expand("/data/src", Path::new("/proj")), "/data/src");
    }

    #[test]
    fn expand_joins_relative_paths_to_root() {
        assert_eq!(expand("src", Path::new("/proj")), "/proj/src");
        assert_eq!(expand("./src", Path::new("/proj")), "/proj/src");
        assert_eq!(expand("src", Path::new("/proj/")), "/proj/src");
    }

    #[test]
    fn expand_maps_dot_to_root_itself() {
        assert_eq!(expand(".", Path::new("/proj")), "/proj");
        assert_eq!(expand("./", Path::new("/proj")), "/proj");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(path in "[a-zA-Z0-9_/.:-]{0,64}", windows in any::<bool>()) {
            let host_os = if windows { HostOs::Windows } else { HostOs::Unix };
            let once = normalize(&path, host_os);
            let twice = normalize(&once, host_os);
            prop_assert_eq!(&once, &twice);
        }

        #[test]
        fn normalize_always_ends_with_exactly_one_slash(path in "[a-zA-Z0-9_/.:-]{0,64}") {
            let normalized = normalize(&path, HostOs::Unix);
            prop_assert!(normalized.ends_with('/'));
            // No doubled slash unless the input already carried one
            if !path.ends_with("//") && !path.is_empty() {
                prop_assert!(!normalized.ends_with("//") || path.ends_with('/'));
            }
        }
    }
}
