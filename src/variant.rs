//! Runtime variant enum identifying the application family to detect.

use crate::DetectorError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;

/// The desktop runtime family being searched for.
///
/// # Example
///
/// ```rust
/// use electron_search::Variant;
///
/// for variant in Variant::all() {
///     println!("{} ({})", variant.display_name(), variant);
/// }
/// assert_eq!(Variant::default(), Variant::Electron);
/// ```
#[derive(
    Debug,
    Default,
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
pub enum Variant {
    /// Electron applications.
    #[default]
    #[serde(rename = "electron")]
    #[strum(to_string = "electron")]
    Electron,
    /// NW.js (formerly node-webkit) applications.
    #[serde(rename = "nwjs", alias = "nw.js")]
    #[strum(to_string = "nwjs", serialize = "nw.js")]
    NwJs,
}

impl Variant {
    /// Parse a variant identifier.
    ///
    /// Fails with [`DetectorError::UnsupportedVariant`] for anything other
    /// than `electron` or `nwjs`.
    pub fn from_name(name: &str) -> Result<Self, DetectorError> {
        Self::from_str(name).map_err(|_| DetectorError::UnsupportedVariant(name.to_string()))
    }

    /// Human-readable name of the runtime.
    ///
    /// This is a friendly name suitable for reports, as opposed to the
    /// identifier produced by `Display` and accepted by [`from_name`](Self::from_name).
    ///
    /// # Example
    ///
    /// ```rust
    /// use electron_search::Variant;
    ///
    /// assert_eq!(Variant::Electron.display_name(), "Electron");
    /// assert_eq!(Variant::NwJs.display_name(), "NW.js");
    /// assert_eq!(Variant::NwJs.to_string(), "nwjs");
    /// ```
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Electron => "Electron",
            Self::NwJs => "NW.js",
        }
    }

    /// Iterator over all supported variants.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}
