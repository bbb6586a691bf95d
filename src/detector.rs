//! The detector: configuration resolution and result aggregation.

use crate::detection::{SearchStrategy, Strategy};
use crate::{DetectorError, Platform, SearchOptions, Signature, Variant};
use std::path::{Path, PathBuf};
use tracing::debug;

/// An ordered list of search roots.
///
/// Converts from a single path or from a sequence of paths, so callers can
/// pass either.
///
/// # Example
///
/// ```rust
/// use electron_search::SearchPaths;
///
/// let single = SearchPaths::from("/opt");
/// let many = SearchPaths::from(vec!["/usr/share", "/opt"]);
/// assert_eq!(single.len(), 1);
/// assert_eq!(many.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPaths(Vec<PathBuf>);

impl SearchPaths {
    /// Number of roots.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no roots.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The roots in submission order.
    pub fn as_slice(&self) -> &[PathBuf] {
        &self.0
    }
}

impl From<&str> for SearchPaths {
    fn from(path: &str) -> Self {
        Self(vec![PathBuf::from(path)])
    }
}

impl From<String> for SearchPaths {
    fn from(path: String) -> Self {
        Self(vec![PathBuf::from(path)])
    }
}

impl From<&Path> for SearchPaths {
    fn from(path: &Path) -> Self {
        Self(vec![path.to_path_buf()])
    }
}

impl From<PathBuf> for SearchPaths {
    fn from(path: PathBuf) -> Self {
        Self(vec![path])
    }
}

impl<T: Into<PathBuf>> From<Vec<T>> for SearchPaths {
    fn from(paths: Vec<T>) -> Self {
        Self(paths.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<PathBuf>, const N: usize> From<[T; N]> for SearchPaths {
    fn from(paths: [T; N]) -> Self {
        Self(paths.into_iter().map(Into::into).collect())
    }
}

/// Searches the filesystem for applications of one runtime variant.
///
/// Platform, variant, signature and search roots are resolved once at
/// construction. Each call to [`list_applications`](Self::list_applications)
/// walks the filesystem again from scratch.
///
/// # Example
///
/// ```rust,no_run
/// use electron_search::{Detector, Platform, Variant};
///
/// let detector = Detector::new(Platform::Linux, Variant::Electron).unwrap();
/// for app in detector.list_applications() {
///     println!("{}", app.display());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Detector {
    platform: Platform,
    variant: Variant,
    search_paths: Vec<PathBuf>,
    signature: Signature,
    strategy: Strategy,
}

impl Detector {
    /// Detector over the platform's default search roots.
    pub fn new(platform: Platform, variant: Variant) -> Result<Self, DetectorError> {
        Self::with_options(None, platform, variant, &SearchOptions::default())
    }

    /// Detector over explicit search roots.
    ///
    /// # Example
    ///
    /// ```rust
    /// use electron_search::{Detector, Platform, Variant};
    ///
    /// let detector =
    ///     Detector::with_search_paths("/opt", Platform::Linux, Variant::NwJs).unwrap();
    /// assert_eq!(detector.search_paths().len(), 1);
    /// ```
    pub fn with_search_paths(
        search_paths: impl Into<SearchPaths>,
        platform: Platform,
        variant: Variant,
    ) -> Result<Self, DetectorError> {
        Self::with_options(
            Some(search_paths.into()),
            platform,
            variant,
            &SearchOptions::default(),
        )
    }

    /// Detector with explicit search options.
    ///
    /// `None` search paths select the platform defaults.
    pub fn with_options(
        search_paths: Option<SearchPaths>,
        platform: Platform,
        variant: Variant,
        options: &SearchOptions,
    ) -> Result<Self, DetectorError> {
        let signature = Signature::resolve(platform, variant)?;
        let strategy = Strategy::for_platform(platform, options)?;
        let search_paths = match search_paths {
            Some(paths) => paths.0,
            None => platform.default_search_paths()?,
        };

        Ok(Self {
            platform,
            variant,
            search_paths,
            signature,
            strategy,
        })
    }

    /// Detector for Electron applications on the running platform.
    pub fn host() -> Result<Self, DetectorError> {
        Self::new(Platform::current()?, Variant::default())
    }

    /// Detector configured from string identifiers.
    ///
    /// `None` selects the running platform and the Electron variant.
    /// Unknown identifiers fail with [`DetectorError::UnsupportedPlatform`]
    /// or [`DetectorError::UnsupportedVariant`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use electron_search::{Detector, DetectorError};
    ///
    /// let result = Detector::from_names(Some("/opt".into()), Some("beos"), None);
    /// assert!(matches!(result, Err(DetectorError::UnsupportedPlatform(_))));
    /// ```
    pub fn from_names(
        search_paths: Option<SearchPaths>,
        platform: Option<&str>,
        variant: Option<&str>,
    ) -> Result<Self, DetectorError> {
        let platform = match platform {
            Some(name) => Platform::from_name(name)?,
            None => Platform::current()?,
        };
        let variant = match variant {
            Some(name) => Variant::from_name(name)?,
            None => Variant::default(),
        };

        Self::with_options(search_paths, platform, variant, &SearchOptions::default())
    }

    /// The platform whose layout is searched.
    ///
    /// Fixed at construction; it selects both the default roots and the
    /// traversal strategy.
    ///
    /// # Example
    ///
    /// ```rust
    /// use electron_search::{Detector, Platform, Variant};
    ///
    /// let detector = Detector::new(Platform::MacOs, Variant::Electron).unwrap();
    /// assert_eq!(detector.platform(), Platform::MacOs);
    /// ```
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// The runtime variant being detected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use electron_search::{Detector, Variant};
    ///
    /// let detector = Detector::from_names(None, Some("linux"), None).unwrap();
    /// assert_eq!(detector.variant(), Variant::Electron);
    /// ```
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The search roots, in the order they are searched.
    ///
    /// These are either the roots given at construction or the platform
    /// defaults from [`Platform::default_search_paths`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use electron_search::{Detector, Platform, Variant};
    /// use std::path::PathBuf;
    ///
    /// let detector = Detector::new(Platform::Linux, Variant::NwJs).unwrap();
    /// assert_eq!(
    ///     detector.search_paths(),
    ///     &[
    ///         PathBuf::from("/usr/share"),
    ///         PathBuf::from("/usr/bin"),
    ///         PathBuf::from("/opt"),
    ///     ]
    /// );
    /// ```
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// The signature confirming a candidate.
    ///
    /// Resolved once from the platform and variant at construction.
    ///
    /// # Example
    ///
    /// ```rust
    /// use electron_search::{Detector, Platform, Variant};
    ///
    /// let detector = Detector::new(Platform::MacOs, Variant::NwJs).unwrap();
    /// assert!(detector.signature().strings().is_empty());
    /// assert_eq!(detector.signature().frameworks().len(), 2);
    /// ```
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Paths of every confirmed application beneath the search roots.
    ///
    /// Roots are searched in order and their results concatenated without
    /// deduplication. Unreadable entries are skipped, so an empty result
    /// does not distinguish "nothing installed" from "nothing readable".
    pub fn list_applications(&self) -> Vec<PathBuf> {
        let mut apps = Vec::new();
        for root in &self.search_paths {
            let found = self.strategy.search(root, &self.signature);
            debug!(
                root = %root.display(),
                variant = %self.variant,
                count = found.len(),
                "searched root"
            );
            apps.extend(found);
        }
        apps
    }

    /// [`list_applications`](Self::list_applications) as strings.
    ///
    /// Non-UTF-8 path components are replaced lossily.
    pub fn list_application_strings(&self) -> Vec<String> {
        self.list_applications()
            .into_iter()
            .map(|path| path.to_string_lossy().into_owned())
            .collect()
    }
}

/// Search for every supported variant on `platform`.
///
/// Returns one entry per variant, in [`Variant::all`] order.
///
/// # Example
///
/// ```rust,no_run
/// use electron_search::{search_all_variants, Platform};
///
/// for (variant, apps) in search_all_variants(Platform::Linux, None).unwrap() {
///     println!("{}: {} found", variant.display_name(), apps.len());
/// }
/// ```
pub fn search_all_variants(
    platform: Platform,
    search_paths: Option<SearchPaths>,
) -> Result<Vec<(Variant, Vec<PathBuf>)>, DetectorError> {
    Variant::all()
        .map(|variant| {
            let detector = Detector::with_options(
                search_paths.clone(),
                platform,
                variant,
                &SearchOptions::default(),
            )?;
            Ok((variant, detector.list_applications()))
        })
        .collect()
}
