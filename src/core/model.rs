// PlantSafe - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::constants;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

// =============================================================================
// Plant record
// =============================================================================

/// A single plant entry read from one of the source files.
///
/// Created once at load time and never mutated afterwards. Toxicity is not
/// stored in the source line; it is implied by which file the line came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plant {
    /// Display name. May carry a parenthetical qualifier, e.g.
    /// "Lily (Easter)".
    pub name: String,

    /// Alternate common names. May be empty.
    pub other: String,

    /// Scientific name.
    pub scientific: String,

    /// Taxonomic family.
    pub family: String,

    /// Whether the plant is toxic to cats.
    pub toxic: bool,
}

impl Plant {
    /// Identity key used for deduplication: the lower-cased name.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Table column label: "Toxic" or "Safe".
    pub fn toxicity_label(&self) -> &'static str {
        if self.toxic {
            constants::LABEL_TOXIC
        } else {
            constants::LABEL_SAFE
        }
    }

    /// Lower-case label included in the searchable text, so a query of
    /// "safe" or "toxic" matches by toxicity.
    pub fn search_label(&self) -> &'static str {
        if self.toxic {
            "toxic"
        } else {
            "safe"
        }
    }

    /// Long-form toxicity text for the detail view.
    pub fn toxicity_description(&self) -> &'static str {
        if self.toxic {
            constants::DESCRIPTION_TOXIC
        } else {
            constants::DESCRIPTION_SAFE
        }
    }

    /// Label used by pickers: "{name} ({scientific})".
    pub fn selection_label(&self) -> String {
        format!("{} ({})", self.name, self.scientific)
    }
}

// =============================================================================
// Toxicity selector
// =============================================================================

/// Tri-state toxicity selector used by the toxicity gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToxicityFilter {
    #[default]
    All,
    Toxic,
    Safe,
}

impl ToxicityFilter {
    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            ToxicityFilter::All => "All",
            ToxicityFilter::Toxic => "Toxic",
            ToxicityFilter::Safe => "Safe",
        }
    }

    /// True if a plant with the given toxicity passes this selector.
    pub fn admits(&self, toxic: bool) -> bool {
        match self {
            ToxicityFilter::All => true,
            ToxicityFilter::Toxic => toxic,
            ToxicityFilter::Safe => !toxic,
        }
    }
}

impl std::fmt::Display for ToxicityFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ToxicityFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(ToxicityFilter::All),
            "toxic" => Ok(ToxicityFilter::Toxic),
            "safe" => Ok(ToxicityFilter::Safe),
            other => Err(format!(
                "unknown toxicity filter '{other}' (expected all, toxic or safe)"
            )),
        }
    }
}

// =============================================================================
// Sources and load summary
// =============================================================================

/// The two flat files a catalog is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantSources {
    /// Every record in this file is toxic.
    pub toxic_path: PathBuf,

    /// Every record in this file is safe.
    pub nontoxic_path: PathBuf,
}

impl PlantSources {
    pub fn new(toxic_path: impl Into<PathBuf>, nontoxic_path: impl Into<PathBuf>) -> Self {
        Self {
            toxic_path: toxic_path.into(),
            nontoxic_path: nontoxic_path.into(),
        }
    }

    /// Sources using the default file names inside `data_dir`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(
            data_dir.join(constants::TOXIC_FILE_NAME),
            data_dir.join(constants::NONTOXIC_FILE_NAME),
        )
    }
}

/// Counts gathered during a load, for logging and status display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Records read from the toxic file.
    pub toxic_records: usize,

    /// Records read from the non-toxic file.
    pub nontoxic_records: usize,

    /// Lines skipped because they did not split into exactly four fields.
    pub skipped_lines: usize,

    /// Records dropped by name deduplication.
    pub duplicates_removed: usize,
}

impl LoadSummary {
    /// Total records read before deduplication.
    pub fn total_records(&self) -> usize {
        self.toxic_records + self.nontoxic_records
    }
}
