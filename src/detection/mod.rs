//! Traversal strategies.
//!
//! This module contains the per-platform filesystem walks that turn a
//! search root into confirmed application paths:
//!
//! - `BundleSearch`: `.app` bundles carrying a runtime framework (macOS)
//! - `MarkerSearch`: executables next to a runtime marker file (Windows, Linux)
//!
//! Neither strategy returns errors. Entries that cannot be read are logged
//! at debug level and treated as non-matching.

mod bundle;
mod marker;

pub(crate) use bundle::BundleSearch;
pub(crate) use marker::MarkerSearch;

use crate::{DetectorError, Platform, SearchOptions, Signature};
use globset::{GlobBuilder, GlobMatcher};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// A way of finding confirmed applications beneath one root.
pub(crate) trait SearchStrategy {
    /// Confirmed application paths under `root`, in traversal order.
    fn search(&self, root: &Path, signature: &Signature) -> Vec<PathBuf>;
}

/// The strategy selected for a platform.
#[derive(Debug, Clone)]
pub(crate) enum Strategy {
    Bundle(BundleSearch),
    Marker(MarkerSearch),
}

impl Strategy {
    pub(crate) fn for_platform(
        platform: Platform,
        options: &SearchOptions,
    ) -> Result<Self, DetectorError> {
        let walk = Walk {
            follow_links: options.follow_links,
            max_depth: options.max_depth,
        };

        match platform {
            Platform::MacOs => Ok(Self::Bundle(BundleSearch::new(
                options.bundle_suffix.clone(),
                walk,
            ))),
            Platform::Windows | Platform::Linux => {
                let case_insensitive = platform.case_insensitive_names();
                let marker = name_matcher(&options.marker_pattern, case_insensitive)?;
                let secondary =
                    name_matcher(options.secondary_pattern_for(platform), case_insensitive)?;
                Ok(Self::Marker(MarkerSearch::new(marker, secondary, walk)))
            }
        }
    }
}

impl SearchStrategy for Strategy {
    fn search(&self, root: &Path, signature: &Signature) -> Vec<PathBuf> {
        match self {
            Self::Bundle(strategy) => strategy.search(root, signature),
            Self::Marker(strategy) => strategy.search(root, signature),
        }
    }
}

/// Recursive walk settings shared by the strategies.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Walk {
    pub(crate) follow_links: bool,
    pub(crate) max_depth: Option<usize>,
}

impl Walk {
    /// Walk `root` and everything beneath it, skipping unreadable entries.
    pub(crate) fn entries(&self, root: &Path) -> impl Iterator<Item = walkdir::DirEntry> {
        let mut walker = WalkDir::new(root).follow_links(self.follow_links);
        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        walker.into_iter().filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                debug!(path = ?err.path(), error = %err, "skipping unreadable entry");
                None
            }
        })
    }
}

/// Whether a walked entry is a directory, resolving symlinks.
pub(crate) fn is_dir(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}

/// Whether a walked entry is a regular file, resolving symlinks.
pub(crate) fn is_file(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

/// Compile a file-name glob.
pub(crate) fn name_matcher(
    pattern: &str,
    case_insensitive: bool,
) -> Result<GlobMatcher, DetectorError> {
    GlobBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|e| DetectorError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })
}
