// PlantSafe - ui/detail.rs
//
// Plant detail view: names, family, toxicity, and the image that would be
// displayed for it.

use crate::core::model::Plant;
use crate::util::constants::EMPTY_FIELD_PLACEHOLDER;
use std::io::{self, Write};
use std::path::Path;

/// Render the detail view for the selected plant, or a hint when nothing
/// is selected.
pub fn render<W: Write>(out: &mut W, plant: Option<&Plant>, image: Option<&Path>) -> io::Result<()> {
    let Some(plant) = plant else {
        return writeln!(out, "Select a plant to see details and image.");
    };

    let other = if plant.other.is_empty() {
        EMPTY_FIELD_PLACEHOLDER
    } else {
        plant.other.as_str()
    };

    writeln!(out, "{}", plant.name)?;
    writeln!(out, "Scientific name: {}", plant.scientific)?;
    writeln!(out, "Family:          {}", plant.family)?;
    writeln!(out, "Other names:     {other}")?;
    writeln!(out, "Toxicity:        {}", plant.toxicity_description())?;

    match image {
        Some(path) => writeln!(out, "Image:           {}", path.display()),
        None => writeln!(out, "No image available for this plant."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peace_lily() -> Plant {
        Plant {
            name: "Peace Lily".to_string(),
            other: String::new(),
            scientific: "Spathiphyllum".to_string(),
            family: "Araceae".to_string(),
            toxic: true,
        }
    }

    fn rendered(plant: Option<&Plant>, image: Option<&Path>) -> String {
        let mut buf = Vec::new();
        render(&mut buf, plant, image).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_no_selection() {
        assert_eq!(rendered(None, None), "Select a plant to see details and image.\n");
    }

    #[test]
    fn test_detail_without_image() {
        let plant = peace_lily();
        let output = rendered(Some(&plant), None);
        assert!(output.starts_with("Peace Lily\n"));
        assert!(output.contains("Other names:     -\n"));
        assert!(output.contains("Toxicity:        Toxic to cats\n"));
        assert!(output.ends_with("No image available for this plant.\n"));
    }

    #[test]
    fn test_detail_with_image() {
        let plant = peace_lily();
        let output = rendered(Some(&plant), Some(Path::new("images/peace_lily.jpg")));
        assert!(output.contains("Image:           images/peace_lily.jpg\n"));
    }
}
