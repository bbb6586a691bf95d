//! # electron-search
//!
//! Locate installed Electron and NW.js applications by filesystem signature.
//!
//! Applications are confirmed by structure and binary content rather than
//! by name or package metadata:
//!
//! - macOS: `.app` bundles shipping the runtime framework under
//!   `Contents/Frameworks`
//! - Windows and Linux: executables that sit next to a
//!   `v8_context_snapshot.bin` marker and contain every signature string
//!
//! ## Features
//!
//! - `Platform` and `Variant` enums selecting the search layout and runtime
//! - `Signature` tables of byte strings and framework names per variant
//! - `Detector` resolving roots once and listing confirmed application paths
//! - `search_all_variants()` for scanning every runtime in one call
//!
//! Filesystem errors never abort a search. Unreadable entries are logged
//! through `tracing` at debug level and skipped.
//!
//! ## Example
//!
//! ```rust,no_run
//! use electron_search::{Detector, Platform, Variant};
//!
//! let detector = Detector::with_search_paths(
//!     vec!["/opt", "/usr/share"],
//!     Platform::Linux,
//!     Variant::Electron,
//! )
//! .unwrap();
//!
//! for app in detector.list_applications() {
//!     println!("{}", app.display());
//! }
//! ```

mod detection;
mod detector;
mod error;
mod options;
mod platform;
mod signature;
mod variant;

pub use detector::{search_all_variants, Detector, SearchPaths};
pub use error::DetectorError;
pub use options::SearchOptions;
pub use platform::Platform;
pub use signature::Signature;
pub use variant::Variant;
