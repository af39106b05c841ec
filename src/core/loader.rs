// PlantSafe - core/loader.rs
//
// Reads the two pipe-delimited plant files into a uniform record list.
//
// Line format: `name|other|scientific|family`, no header, no escaping.
// Lines that do not split into exactly four fields are skipped without error.
// A missing or unreadable file aborts the whole load.

use crate::core::model::{LoadSummary, Plant, PlantSources};
use crate::util::constants::{DEBUG_MAX_LINE_PREVIEW, FIELD_DELIMITER, RECORD_FIELD_COUNT};
use crate::util::error::LoadError;
use std::path::Path;

/// Parse one source line into a plant record.
///
/// Fields are trimmed of surrounding whitespace. Returns `None` when the
/// line does not split into exactly four fields.
pub fn parse_line(line: &str, toxic: bool) -> Option<Plant> {
    let parts: Vec<&str> = line.split(FIELD_DELIMITER).map(str::trim).collect();
    if parts.len() != RECORD_FIELD_COUNT {
        return None;
    }

    Some(Plant {
        name: parts[0].to_string(),
        other: parts[1].to_string(),
        scientific: parts[2].to_string(),
        family: parts[3].to_string(),
        toxic,
    })
}

/// Parse the full content of one source file.
///
/// Returns the records in file order and the number of skipped lines.
pub fn parse_content(content: &str, toxic: bool) -> (Vec<Plant>, usize) {
    let mut plants = Vec::new();
    let mut skipped = 0;

    for (idx, line) in content.lines().enumerate() {
        match parse_line(line, toxic) {
            Some(plant) => plants.push(plant),
            None => {
                skipped += 1;
                let preview: String = line.chars().take(DEBUG_MAX_LINE_PREVIEW).collect();
                tracing::trace!(line_number = idx + 1, line = %preview, "Skipping malformed line");
            }
        }
    }

    (plants, skipped)
}

/// Read and parse one source file, tagging every record with `toxic`.
pub fn load_plant_file(path: &Path, toxic: bool) -> Result<(Vec<Plant>, usize), LoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let (plants, skipped) = parse_content(&content, toxic);

    tracing::debug!(
        path = %path.display(),
        toxic,
        records = plants.len(),
        skipped,
        "Plant file parsed"
    );

    Ok((plants, skipped))
}

/// Load both source files: toxic records first, then non-toxic records,
/// each in file order.
///
/// No deduplication happens here; see [`crate::core::dedupe`].
pub fn load_all_plants(sources: &PlantSources) -> Result<(Vec<Plant>, LoadSummary), LoadError> {
    let (mut plants, toxic_skipped) = load_plant_file(&sources.toxic_path, true)?;
    let (nontoxic, nontoxic_skipped) = load_plant_file(&sources.nontoxic_path, false)?;

    let summary = LoadSummary {
        toxic_records: plants.len(),
        nontoxic_records: nontoxic.len(),
        skipped_lines: toxic_skipped + nontoxic_skipped,
        duplicates_removed: 0,
    };

    plants.extend(nontoxic);

    if summary.skipped_lines > 0 {
        tracing::debug!(
            skipped = summary.skipped_lines,
            "Malformed lines skipped during load"
        );
    }

    Ok((plants, summary))
}
