// PlantSafe - core/export.rs
//
// CSV and JSON export of filtered plants.
// Core layer: writes to any Write trait object.

use crate::core::model::Plant;
use crate::util::constants::MAX_EXPORT_ENTRIES;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Export format, chosen explicitly or inferred from the output extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Infer the format from a file extension; anything but `.json` is CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ExportFormat::Json,
            _ => ExportFormat::Csv,
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!("unknown export format '{other}' (expected csv or json)")),
        }
    }
}

/// Export plants in the requested format.
pub fn export<W: Write>(
    plants: &[&Plant],
    writer: W,
    export_path: &Path,
    format: ExportFormat,
) -> Result<usize, ExportError> {
    if plants.len() > MAX_EXPORT_ENTRIES {
        return Err(ExportError::TooManyEntries {
            count: plants.len(),
            max: MAX_EXPORT_ENTRIES,
        });
    }

    match format {
        ExportFormat::Csv => export_csv(plants, writer, export_path),
        ExportFormat::Json => export_json(plants, writer, export_path),
    }
}

/// Export plants to CSV format.
///
/// Writes: name, other, scientific, family, toxicity
pub fn export_csv<W: Write>(
    plants: &[&Plant],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let csv_err = |e| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };

    csv_writer
        .write_record(["name", "other", "scientific", "family", "toxicity"])
        .map_err(csv_err)?;

    let mut count = 0;
    for plant in plants {
        csv_writer
            .write_record([
                plant.name.as_str(),
                plant.other.as_str(),
                plant.scientific.as_str(),
                plant.family.as_str(),
                plant.toxicity_label(),
            ])
            .map_err(csv_err)?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

/// Export plants to JSON format (array of objects).
pub fn export_json<W: Write>(
    plants: &[&Plant],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, plants).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(plants.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_plant(name: &str, other: &str, toxic: bool) -> Plant {
        Plant {
            name: name.to_string(),
            other: other.to_string(),
            scientific: "Genus species".to_string(),
            family: "Familyaceae".to_string(),
            toxic,
        }
    }

    #[test]
    fn test_csv_export() {
        let plants = vec![
            make_plant("Aloe", "Medicine Plant, Burn Plant", true),
            make_plant("Fern", "", false),
        ];
        let refs: Vec<&Plant> = plants.iter().collect();
        let mut buf = Vec::new();
        let count = export_csv(&refs, &mut buf, Path::new("out.csv")).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("name,other,scientific,family,toxicity"));
        assert!(output.contains("\"Medicine Plant, Burn Plant\""));
        assert!(output.contains("Fern,,Genus species,Familyaceae,Safe"));
    }

    #[test]
    fn test_json_export() {
        let plants = vec![make_plant("Aloe", "", true)];
        let refs: Vec<&Plant> = plants.iter().collect();
        let mut buf = Vec::new();
        let count = export_json(&refs, &mut buf, Path::new("out.json")).unwrap();
        assert_eq!(count, 1);

        let parsed: Vec<Plant> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, plants);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ExportFormat::from_path(Path::new("a.JSON")), ExportFormat::Json);
        assert_eq!(ExportFormat::from_path(Path::new("a.csv")), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_path(Path::new("plants")), ExportFormat::Csv);
    }
}
