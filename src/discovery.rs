// src/discovery.rs
//! Collects analyzable source files under a directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::LimitsConfig;
use crate::error::{ResurrectError, Result};
use crate::lang::Lang;
use crate::project::packages::MANIFEST;
use crate::types::SourceFile;

pub const PRUNE_DIRS: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    "node_modules",
    "bower_components",
    "dist",
    "build",
    "target",
    "vendor",
    "third_party",
    "coverage",
    ".cache",
    ".next",
    ".venv",
    "venv",
    "__pycache__",
];

#[must_use]
pub fn should_prune(name: &str) -> bool {
    PRUNE_DIRS.contains(&name)
}

/// Returns true for files the analyzer understands, plus `package.json`.
#[must_use]
pub fn is_candidate(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name == MANIFEST || Lang::from_filename(name).is_some()
}

/// Walks `root` and reads every candidate file.
///
/// Paths are relative to `root`, use forward slashes and come back sorted.
/// Oversized, empty and non-UTF-8 files are skipped; the result is capped at
/// `limits.max_batch_files`.
///
/// # Errors
/// Returns error if `root` is not a readable directory.
pub fn discover(root: &Path, limits: &LimitsConfig) -> Result<Vec<SourceFile>> {
    if !root.is_dir() {
        return Err(ResurrectError::InvalidInput(format!(
            "Not a directory: {}",
            root.display()
        )));
    }

    let mut paths = walk(root)?;
    paths.sort();

    let mut files = Vec::new();
    for path in paths {
        if files.len() >= limits.max_batch_files {
            log::warn!(
                "stopping at {} files (max_batch_files); remaining files skipped",
                limits.max_batch_files
            );
            break;
        }
        if let Some(file) = read_candidate(root, &path, limits.max_file_bytes) {
            files.push(file);
        }
    }

    log::debug!("discovered {} files under {}", files.len(), root.display());
    Ok(files)
}

fn walk(root: &Path) -> Result<Vec<PathBuf>> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !should_prune(&e.file_name().to_string_lossy()));

    let mut paths = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            // The root itself must be walkable; anything below is best-effort.
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                log::warn!("skipping unreadable entry: {e}");
                continue;
            }
        };
        if entry.file_type().is_file() && is_candidate(entry.path()) {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}

/// Reads one walked file; unreadable files are skipped like unreadable
/// walk entries.
fn read_candidate(root: &Path, path: &Path, max_bytes: u64) -> Option<SourceFile> {
    let size = match fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(e) => {
            log::warn!("skipping unreadable entry {}: {e}", path.display());
            return None;
        }
    };
    if size > max_bytes {
        log::warn!("skipping {} ({size} bytes exceeds max_file_bytes)", path.display());
        return None;
    }

    let code = match fs::read_to_string(path) {
        Ok(code) => code,
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            log::warn!("skipping {} (not UTF-8 text)", path.display());
            return None;
        }
        Err(e) => {
            log::warn!("skipping unreadable entry {}: {e}", path.display());
            return None;
        }
    };
    if code.is_empty() {
        log::debug!("skipping empty file {}", path.display());
        return None;
    }

    Some(SourceFile::new(relative(root, path), code))
}

/// Normalizes to forward slashes relative to `root`.
fn relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates() {
        assert!(is_candidate(Path::new("web/app.js")));
        assert!(is_candidate(Path::new("package.json")));
        assert!(is_candidate(Path::new("lib/Main.CS")));
        assert!(!is_candidate(Path::new("styles.css")));
        assert!(!is_candidate(Path::new("composer.json")));
    }

    #[test]
    fn prunes_vendor_dirs() {
        assert!(should_prune("node_modules"));
        assert!(should_prune(".git"));
        assert!(!should_prune("src"));
    }

    #[test]
    fn unreadable_candidates_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        assert!(read_candidate(root, &root.join("gone.js"), 1024).is_none());

        fs::create_dir(root.join("folder.js")).unwrap();
        assert!(read_candidate(root, &root.join("folder.js"), 1024).is_none());

        fs::write(root.join("bin.js"), [0xff, 0xfe, 0x00]).unwrap();
        assert!(read_candidate(root, &root.join("bin.js"), 1024).is_none());

        fs::write(root.join("ok.js"), "var a;").unwrap();
        let file = read_candidate(root, &root.join("ok.js"), 1024).unwrap();
        assert_eq!(file.path, "ok.js");
    }

    #[test]
    fn relative_paths_use_forward_slashes() {
        let root = Path::new("/repo");
        assert_eq!(relative(root, Path::new("/repo/js/app.js")), "js/app.js");
    }
}
