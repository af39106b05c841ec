// PlantSafe - core/dedupe.rs
//
// Name-based deduplication of loaded plant records.

use crate::core::model::Plant;
use std::collections::HashSet;

/// Keep only the first record for each case-insensitive name.
///
/// Stable: surviving records keep their relative order. Because toxic
/// records are loaded first, a plant listed in both files stays toxic.
pub fn dedupe_plants(plants: Vec<Plant>) -> Vec<Plant> {
    let mut seen: HashSet<String> = HashSet::with_capacity(plants.len());
    plants
        .into_iter()
        .filter(|plant| seen.insert(plant.key()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plant(name: &str, toxic: bool) -> Plant {
        Plant {
            name: name.to_string(),
            other: String::new(),
            scientific: String::new(),
            family: String::new(),
            toxic,
        }
    }

    fn names(plants: &[Plant]) -> Vec<&str> {
        plants.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_first_occurrence_wins_case_insensitive() {
        let result = dedupe_plants(vec![plant("Aloe", true), plant("aloe", false)]);
        assert_eq!(result, vec![plant("Aloe", true)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(dedupe_plants(Vec::new()).is_empty());
    }

    #[test]
    fn test_preserves_order() {
        let input = vec![
            plant("Tulip", true),
            plant("Aloe", true),
            plant("TULIP", false),
            plant("Fern", false),
            plant("aloe", false),
        ];
        let result = dedupe_plants(input);
        assert_eq!(names(&result), vec!["Tulip", "Aloe", "Fern"]);
    }

    #[test]
    fn test_idempotent() {
        let input = vec![
            plant("Ivy", true),
            plant("ivy", true),
            plant("Palm", false),
            plant("Ivy", false),
        ];
        let once = dedupe_plants(input);
        let twice = dedupe_plants(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_output_is_subsequence_of_input() {
        let input = vec![
            plant("A", true),
            plant("b", true),
            plant("a", false),
            plant("C", false),
            plant("B", false),
        ];
        let result = dedupe_plants(input.clone());
        assert!(result.len() <= input.len());

        let mut cursor = input.iter();
        for kept in &result {
            assert!(
                cursor.any(|p| p == kept),
                "{} is out of order in the deduplicated output",
                kept.name
            );
        }
    }
}
