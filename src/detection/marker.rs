//! Marker-file search for Windows and Linux installs.

use super::{is_file, SearchStrategy, Walk};
use crate::Signature;
use globset::GlobMatcher;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Finds executables sitting next to a runtime marker file.
///
/// A root that is itself a file is checked directly instead of walked.
#[derive(Debug, Clone)]
pub(crate) struct MarkerSearch {
    marker: GlobMatcher,
    secondary: GlobMatcher,
    walk: Walk,
}

impl MarkerSearch {
    pub(crate) fn new(marker: GlobMatcher, secondary: GlobMatcher, walk: Walk) -> Self {
        Self {
            marker,
            secondary,
            walk,
        }
    }

    /// Candidate executables in `dir` that carry the signature.
    fn scan_siblings(&self, dir: &Path, signature: &Signature) -> Vec<PathBuf> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(path = %dir.display(), error = %e, "skipping unreadable directory");
                return Vec::new();
            }
        };

        entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!(path = %dir.display(), error = %e, "skipping unreadable entry");
                    None
                }
            })
            .filter(|entry| self.secondary.is_match(entry.file_name()))
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter(|path| signature.matches_file(path))
            .collect()
    }
}

impl SearchStrategy for MarkerSearch {
    fn search(&self, root: &Path, signature: &Signature) -> Vec<PathBuf> {
        if root.is_file() {
            if signature.matches_file(root) {
                return vec![root.to_path_buf()];
            }
            return Vec::new();
        }

        let mut apps = Vec::new();
        for entry in self.walk.entries(root) {
            if !self.marker.is_match(entry.file_name()) || !is_file(&entry) {
                continue;
            }
            let Some(dir) = entry.path().parent() else {
                continue;
            };

            trace!(marker = %entry.path().display(), "found marker file");
            apps.extend(self.scan_siblings(dir, signature));
        }
        apps
    }
}
