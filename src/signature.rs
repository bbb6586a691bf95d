//! Signature tables distinguishing runtime variants.

use crate::{DetectorError, Platform, Variant};
use regex::bytes::RegexSet;
use std::path::Path;
use tracing::{debug, trace};

const ELECTRON_STRINGS: &[&[u8]] = &[b"Electron/", b"v8_context_snapshot.bin"];
const NWJS_WINDOWS_STRINGS: &[&[u8]] = &[b"nw.exe", b"nw_elf.dll"];
const NWJS_LINUX_STRINGS: &[&[u8]] = &[b".js.map", b"libnw.so"];

const ELECTRON_FRAMEWORKS: &[&str] = &["Electron Framework.framework"];
// NW.js renamed its framework from node-webkit, both names ship in the wild.
const NWJS_FRAMEWORKS: &[&str] = &["nwjs Framework.framework", "node-webkit Framework.framework"];

/// Byte strings and framework names that confirm a runtime variant.
///
/// A binary matches when it contains every byte string. A macOS bundle
/// matches when any of the framework directories is present under
/// `Contents/Frameworks`.
#[derive(Debug, Clone)]
pub struct Signature {
    strings: Vec<Vec<u8>>,
    frameworks: Vec<String>,
    matcher: RegexSet,
}

impl Signature {
    /// Build a signature from explicit byte strings and framework names.
    pub(crate) fn new<S, F>(strings: S, frameworks: F) -> Result<Self, DetectorError>
    where
        S: IntoIterator,
        S::Item: Into<Vec<u8>>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        let strings: Vec<Vec<u8>> = strings.into_iter().map(Into::into).collect();
        let frameworks = frameworks.into_iter().map(Into::into).collect();

        let patterns: Vec<String> = strings.iter().map(|s| literal_pattern(s)).collect();
        let matcher = RegexSet::new(&patterns).map_err(|e| DetectorError::InvalidPattern {
            pattern: patterns.join(" | "),
            message: e.to_string(),
        })?;

        Ok(Self {
            strings,
            frameworks,
            matcher,
        })
    }

    /// The signature for `variant` on `platform`.
    ///
    /// macOS detection relies on framework directories only, so the byte
    /// string list is empty there.
    pub fn resolve(platform: Platform, variant: Variant) -> Result<Self, DetectorError> {
        let strings: &[&[u8]] = match (variant, platform) {
            (_, Platform::MacOs) => &[],
            (Variant::Electron, _) => ELECTRON_STRINGS,
            (Variant::NwJs, Platform::Windows) => NWJS_WINDOWS_STRINGS,
            (Variant::NwJs, Platform::Linux) => NWJS_LINUX_STRINGS,
        };
        let frameworks = match variant {
            Variant::Electron => ELECTRON_FRAMEWORKS,
            Variant::NwJs => NWJS_FRAMEWORKS,
        };

        Self::new(strings.iter().copied(), frameworks.iter().copied())
    }

    /// Byte strings that must all appear in a matching binary.
    pub fn strings(&self) -> &[Vec<u8>] {
        &self.strings
    }

    /// Framework directory names, any of which confirms a bundle.
    pub fn frameworks(&self) -> &[String] {
        &self.frameworks
    }

    /// Whether `bytes` contains every byte string of this signature.
    pub fn matches_bytes(&self, bytes: &[u8]) -> bool {
        if self.strings.is_empty() {
            return true;
        }
        self.matcher.matches(bytes).matched_all()
    }

    /// Read `path` and check its contents.
    ///
    /// Unreadable files never match.
    pub fn matches_file(&self, path: &Path) -> bool {
        match std::fs::read(path) {
            Ok(bytes) => {
                let matched = self.matches_bytes(&bytes);
                trace!(path = %path.display(), matched, "checked binary signature");
                matched
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipping unreadable file");
                false
            }
        }
    }
}

/// Regex matching `bytes` literally, byte for byte.
fn literal_pattern(bytes: &[u8]) -> String {
    let escaped: String = bytes.iter().map(|b| format!(r"\x{:02X}", b)).collect();
    format!("(?-u){}", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_electron_strings() {
        for platform in [Platform::Windows, Platform::Linux] {
            let sig = Signature::resolve(platform, Variant::Electron).unwrap();
            assert_eq!(
                sig.strings(),
                &[b"Electron/".to_vec(), b"v8_context_snapshot.bin".to_vec()]
            );
            assert_eq!(sig.frameworks(), &["Electron Framework.framework"]);
        }
    }

    #[test]
    fn test_nwjs_strings_per_platform() {
        let sig = Signature::resolve(Platform::Windows, Variant::NwJs).unwrap();
        assert_eq!(sig.strings(), &[b"nw.exe".to_vec(), b"nw_elf.dll".to_vec()]);

        let sig = Signature::resolve(Platform::Linux, Variant::NwJs).unwrap();
        assert_eq!(sig.strings(), &[b".js.map".to_vec(), b"libnw.so".to_vec()]);
    }

    #[test]
    fn test_macos_uses_frameworks_only() {
        let sig = Signature::resolve(Platform::MacOs, Variant::NwJs).unwrap();
        assert!(sig.strings().is_empty());
        assert_eq!(
            sig.frameworks(),
            &["nwjs Framework.framework", "node-webkit Framework.framework"]
        );

        let sig = Signature::resolve(Platform::MacOs, Variant::Electron).unwrap();
        assert!(sig.strings().is_empty());
        assert_eq!(sig.frameworks().len(), 1);
    }

    #[test]
    fn test_matches_bytes_requires_all_strings() {
        let sig = Signature::resolve(Platform::Linux, Variant::Electron).unwrap();
        assert!(sig.matches_bytes(b"\x7fELF...Electron/33.0 ... v8_context_snapshot.bin\0"));
        assert!(!sig.matches_bytes(b"\x7fELF...Electron/33.0 only"));
        assert!(!sig.matches_bytes(b"v8_context_snapshot.bin only"));
        assert!(!sig.matches_bytes(b""));
    }

    #[test]
    fn test_matches_bytes_is_byte_exact() {
        let sig = Signature::new([vec![0xff, 0x00, b'a'], b".*".to_vec()], Vec::<String>::new())
            .unwrap();
        assert!(sig.matches_bytes(b"xx\xff\x00a yy .*"));
        assert!(!sig.matches_bytes(b"xx\xff\x00A yy .*"));
        // Regex metacharacters in a signature are literal.
        assert!(!sig.matches_bytes(b"xx\xff\x00a yy .x"));
    }

    #[test]
    fn test_empty_signature_matches_anything() {
        let sig = Signature::new(Vec::<Vec<u8>>::new(), ["x.framework"]).unwrap();
        assert!(sig.matches_bytes(b""));
    }

    #[test]
    fn test_matches_file_unreadable() {
        let sig = Signature::resolve(Platform::Linux, Variant::Electron).unwrap();
        assert!(!sig.matches_file(Path::new("/nonexistent/electron/binary")));
    }

    #[test]
    fn test_matches_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app");
        std::fs::write(&path, b"libnw.so\0\0app.js.map").unwrap();

        let sig = Signature::resolve(Platform::Linux, Variant::NwJs).unwrap();
        assert!(sig.matches_file(&path));
    }

    #[test]
    fn test_literal_pattern() {
        assert_eq!(literal_pattern(b"a."), r"(?-u)\x61\x2E");
        assert_eq!(literal_pattern(&[0xff, 0x00]), r"(?-u)\xFF\x00");
        assert_eq!(literal_pattern(b""), "(?-u)");
    }
}
