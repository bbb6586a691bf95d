//! Bundle search for macOS `.app` directories.

use super::{is_dir, SearchStrategy, Walk};
use crate::Signature;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Finds application bundles that carry one of the signature's frameworks
/// at `Contents/Frameworks/<name>`.
#[derive(Debug, Clone)]
pub(crate) struct BundleSearch {
    suffix: String,
    walk: Walk,
}

impl BundleSearch {
    pub(crate) fn new(suffix: String, walk: Walk) -> Self {
        Self { suffix, walk }
    }

    fn is_bundle(&self, entry: &walkdir::DirEntry) -> bool {
        entry.file_name().to_string_lossy().ends_with(&self.suffix) && is_dir(entry)
    }
}

impl SearchStrategy for BundleSearch {
    fn search(&self, root: &Path, signature: &Signature) -> Vec<PathBuf> {
        self.walk
            .entries(root)
            .filter(|entry| self.is_bundle(entry))
            .filter(|entry| find_framework(entry.path(), signature.frameworks()).is_some())
            .map(walkdir::DirEntry::into_path)
            .collect()
    }
}

/// The first framework in `frameworks` present inside `bundle`.
fn find_framework<'a>(bundle: &Path, frameworks: &'a [String]) -> Option<&'a str> {
    let dir = bundle.join("Contents").join("Frameworks");

    let found = frameworks.iter().find(|name| {
        let path = dir.join(name.as_str());
        match path.try_exists() {
            Ok(exists) => exists,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipping framework check");
                false
            }
        }
    });

    if let Some(name) = found {
        trace!(bundle = %bundle.display(), framework = %name, "bundle matched");
    }
    found.map(String::as_str)
}
