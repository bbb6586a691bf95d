//! Target platform enum selecting default roots and traversal strategy.

use crate::DetectorError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use strum::IntoEnumIterator;

/// Environment variables consulted, in order, for the login name.
const LOGIN_NAME_VARS: &[&str] = &["USERNAME", "USER", "LOGNAME"];

/// The operating system whose installation layout is searched.
///
/// Identifiers follow the usual platform tags: `darwin`, `win32` and
/// `linux`. The aliases `macos` and `windows` are also accepted when
/// parsing.
///
/// # Example
///
/// ```rust
/// use electron_search::Platform;
///
/// let platform = Platform::from_name("win32").unwrap();
/// assert_eq!(platform, Platform::Windows);
/// assert_eq!(platform.to_string(), "win32");
/// assert!(Platform::from_name("sunos5").is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
pub enum Platform {
    /// macOS. Applications are `.app` bundles.
    #[serde(rename = "darwin", alias = "macos")]
    #[strum(to_string = "darwin", serialize = "macos")]
    MacOs,
    /// Windows. Applications are `.exe` files next to their runtime data.
    #[serde(rename = "win32", alias = "windows")]
    #[strum(to_string = "win32", serialize = "windows")]
    Windows,
    /// Linux. Applications are extension-less executables.
    #[serde(rename = "linux")]
    #[strum(to_string = "linux")]
    Linux,
}

impl Platform {
    /// Parse a platform identifier.
    ///
    /// Fails with [`DetectorError::UnsupportedPlatform`] for anything other
    /// than the supported identifiers.
    pub fn from_name(name: &str) -> Result<Self, DetectorError> {
        Self::from_str(name).map_err(|_| DetectorError::UnsupportedPlatform(name.to_string()))
    }

    /// The platform this process is running on.
    ///
    /// This is resolved from the compile-time target OS, so it never
    /// changes for the lifetime of the process. Hosts other than macOS,
    /// Windows and Linux fail with [`DetectorError::UnsupportedPlatform`]
    /// carrying the OS name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use electron_search::Platform;
    ///
    /// match Platform::current() {
    ///     Ok(platform) => println!("searching the {} layout", platform),
    ///     Err(e) => println!("cannot search this host: {}", e),
    /// }
    /// ```
    pub fn current() -> Result<Self, DetectorError> {
        match std::env::consts::OS {
            "macos" => Ok(Self::MacOs),
            "windows" => Ok(Self::Windows),
            "linux" => Ok(Self::Linux),
            other => Err(DetectorError::UnsupportedPlatform(other.to_string())),
        }
    }

    /// Iterator over all supported platforms.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }

    /// Default search roots for this platform.
    ///
    /// - macOS: `/Applications`
    /// - Windows: both program-install directories plus the user's
    ///   `AppData\Local`, built from the current login name
    /// - Linux: `/usr/share`, `/usr/bin`, `/opt`
    ///
    /// Only Windows can fail, with [`DetectorError::LoginNameUnavailable`]
    /// when no login name is set in the environment.
    pub fn default_search_paths(&self) -> Result<Vec<PathBuf>, DetectorError> {
        self.default_search_paths_for(login_name().as_deref())
    }

    pub(crate) fn default_search_paths_for(
        &self,
        login: Option<&str>,
    ) -> Result<Vec<PathBuf>, DetectorError> {
        let paths = match self {
            Self::MacOs => vec![PathBuf::from("/Applications")],
            Self::Windows => {
                let login = login.ok_or(DetectorError::LoginNameUnavailable)?;
                vec![
                    PathBuf::from(r"C:\Program Files"),
                    PathBuf::from(r"C:\Program Files (x86)"),
                    PathBuf::from(format!(r"C:\Users\{}\AppData\Local", login)),
                ]
            }
            Self::Linux => vec![
                PathBuf::from("/usr/share"),
                PathBuf::from("/usr/bin"),
                PathBuf::from("/opt"),
            ],
        };
        Ok(paths)
    }

    /// Whether file names compare case-insensitively on this platform.
    ///
    /// Marker and candidate patterns are matched with this setting, so
    /// `*.exe` also finds `Teams.EXE` on Windows.
    ///
    /// # Example
    ///
    /// ```rust
    /// use electron_search::Platform;
    ///
    /// assert!(Platform::Windows.case_insensitive_names());
    /// assert!(!Platform::Linux.case_insensitive_names());
    /// ```
    pub fn case_insensitive_names(&self) -> bool {
        matches!(self, Self::Windows)
    }
}

fn login_name() -> Option<String> {
    LOGIN_NAME_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|name| !name.is_empty())
}
