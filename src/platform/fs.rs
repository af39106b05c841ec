// PlantSafe - platform/fs.rs
//
// Filesystem probes: source file fingerprints for catalog invalidation and
// image lookup by stem.

use crate::core::image::image_stem;
use crate::util::constants::IMAGE_EXTENSIONS;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Cheap change detector for a source file: size plus modification time.
///
/// Two fingerprints that compare equal mean the file is assumed unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFingerprint {
    pub len: u64,
    pub modified: Option<SystemTime>,
}

/// Fingerprint a file. Fails if the file cannot be stat'ed.
///
/// Platforms without modification times yield `modified: None`, in which
/// case only the length participates in change detection.
pub fn fingerprint(path: &Path) -> io::Result<FileFingerprint> {
    let meta = std::fs::metadata(path)?;
    Ok(FileFingerprint {
        len: meta.len(),
        modified: meta.modified().ok(),
    })
}

/// Locate the image for a plant inside `images_dir`.
///
/// Probes `{stem}.jpg`, `{stem}.jpeg`, `{stem}.png`, `{stem}.webp` in that
/// order and returns the first that exists. `None` means "no image".
pub fn find_image(images_dir: &Path, plant_name: &str) -> Option<PathBuf> {
    let stem = image_stem(plant_name);
    if stem.is_empty() {
        return None;
    }

    let found = IMAGE_EXTENSIONS
        .iter()
        .map(|ext| images_dir.join(format!("{stem}.{ext}")))
        .find(|candidate| candidate.is_file());

    tracing::debug!(
        plant = plant_name,
        stem = %stem,
        found = ?found.as_ref().map(|p| p.display().to_string()),
        "Image probe"
    );

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_image_priority() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("peace_lily.png"), b"png").unwrap();
        fs::write(dir.path().join("peace_lily.jpeg"), b"jpeg").unwrap();
        fs::write(dir.path().join("peace_lily.webp"), b"webp").unwrap();

        let found = find_image(dir.path(), "Peace Lily").expect("image present");
        assert_eq!(found, dir.path().join("peace_lily.jpeg"));

        fs::write(dir.path().join("peace_lily.jpg"), b"jpg").unwrap();
        let found = find_image(dir.path(), "Peace Lily (Spathiphyllum)").unwrap();
        assert_eq!(found, dir.path().join("peace_lily.jpg"));
    }

    #[test]
    fn test_find_image_missing() {
        let dir = TempDir::new().unwrap();
        assert!(find_image(dir.path(), "Aloe").is_none());
        assert!(find_image(&dir.path().join("no_such_dir"), "Aloe").is_none());
    }

    #[test]
    fn test_empty_stem_never_matches() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".jpg"), b"jpg").unwrap();
        assert!(find_image(dir.path(), "(unknown)").is_none());
    }

    #[test]
    fn test_fingerprint_tracks_length() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plants.txt");
        fs::write(&path, "a|b|c|d\n").unwrap();
        let before = fingerprint(&path).unwrap();
        fs::write(&path, "a|b|c|d\ne|f|g|h\n").unwrap();
        let after = fingerprint(&path).unwrap();
        assert_ne!(before, after);
        assert!(fingerprint(&dir.path().join("missing.txt")).is_err());
    }
}
