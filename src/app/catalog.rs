// PlantSafe - app/catalog.rs
//
// Memoised plant catalog: load -> dedupe once, then serve the cached list
// until the source files change or the cache is invalidated explicitly.
//
// Invalidation point: `refresh()` compares the current fingerprints of both
// source files with the ones taken at the last load. A failed reload leaves
// the previous list in place and reports the error.

use crate::core::dedupe::dedupe_plants;
use crate::core::loader::load_all_plants;
use crate::core::model::{LoadSummary, Plant, PlantSources};
use crate::platform::fs::{fingerprint, FileFingerprint};
use crate::util::error::LoadError;

/// Fingerprints of both source files at load time. `None` for a file that
/// could not be stat'ed; a catalog holding one is marked stale so the next
/// refresh reloads.
type SourceStamps = (Option<FileFingerprint>, Option<FileFingerprint>);

#[derive(Debug)]
pub struct PlantCatalog {
    sources: PlantSources,
    plants: Vec<Plant>,
    summary: LoadSummary,
    stamps: SourceStamps,
    stale: bool,
}

impl PlantCatalog {
    /// Load and deduplicate both source files.
    ///
    /// Fails if either file is missing or unreadable.
    pub fn open(sources: PlantSources) -> Result<Self, LoadError> {
        let (plants, summary, stamps) = load(&sources)?;
        let stale = stamps_incomplete(&stamps);
        Ok(Self {
            sources,
            plants,
            summary,
            stamps,
            stale,
        })
    }

    /// The deduplicated plants, toxic-file records first.
    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn sources(&self) -> &PlantSources {
        &self.sources
    }

    /// Counts from the most recent successful load.
    pub fn summary(&self) -> LoadSummary {
        self.summary
    }

    /// Force the next `refresh()` to reload regardless of fingerprints.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Reload if the source files changed since the last load (or the cache
    /// was invalidated). Returns `true` when a reload happened.
    pub fn refresh(&mut self) -> Result<bool, LoadError> {
        if !self.stale && current_stamps(&self.sources) == self.stamps {
            tracing::trace!("Plant sources unchanged; serving cached catalog");
            return Ok(false);
        }

        let (plants, summary, stamps) = load(&self.sources)?;
        self.plants = plants;
        self.summary = summary;
        self.stale = stamps_incomplete(&stamps);
        self.stamps = stamps;
        Ok(true)
    }
}

fn current_stamps(sources: &PlantSources) -> SourceStamps {
    (
        fingerprint(&sources.toxic_path).ok(),
        fingerprint(&sources.nontoxic_path).ok(),
    )
}

fn stamps_incomplete(stamps: &SourceStamps) -> bool {
    stamps.0.is_none() || stamps.1.is_none()
}

fn load(sources: &PlantSources) -> Result<(Vec<Plant>, LoadSummary, SourceStamps), LoadError> {
    // Stamp before reading so a write racing the read triggers another reload.
    let stamps = current_stamps(sources);
    let (plants, mut summary) = load_all_plants(sources)?;

    let before = plants.len();
    let plants = dedupe_plants(plants);
    summary.duplicates_removed = before - plants.len();

    tracing::info!(
        toxic = summary.toxic_records,
        nontoxic = summary.nontoxic_records,
        skipped = summary.skipped_lines,
        duplicates = summary.duplicates_removed,
        plants = plants.len(),
        "Plant catalog loaded"
    );

    Ok((plants, summary, stamps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_sources(dir: &TempDir, toxic: &str, safe: &str) -> PlantSources {
        let sources = PlantSources::in_dir(dir.path());
        fs::write(&sources.toxic_path, toxic).unwrap();
        fs::write(&sources.nontoxic_path, safe).unwrap();
        sources
    }

    #[test]
    fn test_open_dedupes() {
        let dir = TempDir::new().unwrap();
        let sources = write_sources(
            &dir,
            "Aloe||Aloe vera|Asphodelaceae\n",
            "aloe||Aloe vera|Asphodelaceae\nFern||Nephrolepis|Lomariopsidaceae\n",
        );
        let catalog = PlantCatalog::open(sources).unwrap();
        assert_eq!(catalog.plants().len(), 2);
        assert!(catalog.plants()[0].toxic);
        assert_eq!(catalog.summary().duplicates_removed, 1);
        assert_eq!(catalog.summary().total_records(), 3);
    }

    #[test]
    fn test_refresh_without_changes_is_noop() {
        let dir = TempDir::new().unwrap();
        let sources = write_sources(&dir, "Aloe||Aloe vera|Asphodelaceae\n", "");
        let mut catalog = PlantCatalog::open(sources).unwrap();
        assert!(!catalog.refresh().unwrap());
    }

    #[test]
    fn test_refresh_reloads_changed_file() {
        let dir = TempDir::new().unwrap();
        let sources = write_sources(&dir, "Aloe||Aloe vera|Asphodelaceae\n", "");
        let mut catalog = PlantCatalog::open(sources.clone()).unwrap();

        fs::write(
            &sources.nontoxic_path,
            "Fern||Nephrolepis|Lomariopsidaceae\nPalm||Chamaedorea|Arecaceae\n",
        )
        .unwrap();

        assert!(catalog.refresh().unwrap());
        assert_eq!(catalog.plants().len(), 3);
    }

    #[test]
    fn test_invalidate_forces_reload() {
        let dir = TempDir::new().unwrap();
        let sources = write_sources(&dir, "Aloe||Aloe vera|Asphodelaceae\n", "");
        let mut catalog = PlantCatalog::open(sources).unwrap();
        catalog.invalidate();
        assert!(catalog.refresh().unwrap());
        assert!(!catalog.refresh().unwrap());
    }

    #[test]
    fn test_failed_reload_keeps_previous_list() {
        let dir = TempDir::new().unwrap();
        let sources = write_sources(&dir, "Aloe||Aloe vera|Asphodelaceae\n", "");
        let mut catalog = PlantCatalog::open(sources.clone()).unwrap();

        fs::remove_file(&sources.toxic_path).unwrap();
        let err = catalog.refresh().unwrap_err();
        assert_eq!(err.path(), &sources.toxic_path);
        assert_eq!(catalog.plants().len(), 1);
    }

    #[test]
    fn test_missing_fingerprint_reloads_on_refresh() {
        let dir = TempDir::new().unwrap();
        let sources = write_sources(&dir, "Aloe||Aloe vera|Asphodelaceae\n", "");
        let stamps = (None, None);
        let mut catalog = PlantCatalog {
            sources,
            plants: Vec::new(),
            summary: LoadSummary::default(),
            stale: stamps_incomplete(&stamps),
            stamps,
        };

        // Unchanged files, but the cache cannot prove it: reload.
        assert!(catalog.refresh().unwrap());
        assert_eq!(catalog.plants().len(), 1);
        assert!(!catalog.refresh().unwrap());
    }

    #[test]
    fn test_stamps_incomplete() {
        let dir = TempDir::new().unwrap();
        let sources = write_sources(&dir, "", "");
        let stamp = fingerprint(&sources.toxic_path).ok();
        assert!(stamp.is_some());
        assert!(stamps_incomplete(&(None, stamp)));
        assert!(stamps_incomplete(&(stamp, None)));
        assert!(!stamps_incomplete(&(stamp, stamp)));
    }
}
