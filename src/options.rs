//! Search options configuration.
//!
//! This module provides the [`SearchOptions`] struct for tuning how the
//! traversal strategies walk the filesystem.

use crate::Platform;

/// Configuration options for application search.
///
/// # Default Behavior
///
/// The defaults reproduce the standard layout: Electron and NW.js ship a
/// `v8_context_snapshot.bin` next to their executables, macOS bundles end
/// in `.app`, symlinks are not followed and recursion depth is unbounded.
///
/// # Example
///
/// ```rust
/// use electron_search::SearchOptions;
///
/// // Only look three levels deep, following symlinks
/// let opts = SearchOptions {
///     max_depth: Some(3),
///     follow_links: true,
///     ..Default::default()
/// };
/// assert_eq!(opts.marker_pattern, "v8_context_snapshot.bin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// File name pattern of the marker file searched for recursively.
    ///
    /// Default: `v8_context_snapshot.bin`
    pub marker_pattern: String,

    /// File name pattern for candidate executables next to a marker.
    ///
    /// `None` selects the platform default: `*.exe` on Windows and `*`
    /// elsewhere.
    pub secondary_pattern: Option<String>,

    /// Directory suffix identifying an application bundle.
    ///
    /// Default: `.app`
    pub bundle_suffix: String,

    /// Follow symbolic links while walking directories.
    ///
    /// Default: `false`
    pub follow_links: bool,

    /// Maximum recursion depth below each search root.
    ///
    /// Default: `None` (unbounded)
    pub max_depth: Option<usize>,
}

impl SearchOptions {
    /// The secondary pattern in effect on `platform`.
    pub fn secondary_pattern_for(&self, platform: Platform) -> &str {
        match &self.secondary_pattern {
            Some(pattern) => pattern,
            None if platform == Platform::Windows => "*.exe",
            None => "*",
        }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            marker_pattern: "v8_context_snapshot.bin".to_string(),
            secondary_pattern: None,
            bundle_suffix: ".app".to_string(),
            follow_links: false,
            max_depth: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = SearchOptions::default();
        assert_eq!(opts.marker_pattern, "v8_context_snapshot.bin");
        assert_eq!(opts.bundle_suffix, ".app");
        assert!(!opts.follow_links);
        assert!(opts.max_depth.is_none());
    }

    #[test]
    fn test_secondary_pattern_platform_default() {
        let opts = SearchOptions::default();
        assert_eq!(opts.secondary_pattern_for(Platform::Windows), "*.exe");
        assert_eq!(opts.secondary_pattern_for(Platform::Linux), "*");
    }

    #[test]
    fn test_secondary_pattern_override() {
        let opts = SearchOptions {
            secondary_pattern: Some("*.bin".to_string()),
            ..Default::default()
        };
        assert_eq!(opts.secondary_pattern_for(Platform::Windows), "*.bin");
        assert_eq!(opts.secondary_pattern_for(Platform::Linux), "*.bin");
    }
}
