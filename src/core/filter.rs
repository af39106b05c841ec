// PlantSafe - core/filter.rs
//
// Search/filter predicate shared by every front end.
// A plant is shown iff it passes both the toxicity gate and the text gate.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{Plant, ToxicityFilter};

/// Complete filter state. Both gates are AND-combined when applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Toxicity gate selector.
    pub toxicity: ToxicityFilter,

    /// Substring text search (case-insensitive). Empty = no filter.
    pub text_search: String,
}

impl FilterState {
    /// Returns true if no filters are active.
    pub fn is_empty(&self) -> bool {
        self.toxicity == ToxicityFilter::All && self.text_search.is_empty()
    }

    /// Reset both gates so every plant is shown.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Quick-filter showing only plants that are toxic to cats.
    pub fn toxic_only() -> Self {
        Self {
            toxicity: ToxicityFilter::Toxic,
            ..Default::default()
        }
    }

    /// Quick-filter showing only plants that are safe for cats.
    pub fn safe_only() -> Self {
        Self {
            toxicity: ToxicityFilter::Safe,
            ..Default::default()
        }
    }
}

/// Lower-cased text the text gate searches: name, other names, scientific
/// name, family and the "toxic"/"safe" label, joined by single spaces.
pub fn searchable_text(plant: &Plant) -> String {
    [
        plant.name.as_str(),
        plant.other.as_str(),
        plant.scientific.as_str(),
        plant.family.as_str(),
        plant.search_label(),
    ]
    .join(" ")
    .to_lowercase()
}

/// Check a single plant against both gates.
pub fn matches(plant: &Plant, filter: &FilterState) -> bool {
    matches_all(plant, filter, &filter.text_search.to_lowercase())
}

/// Apply filters to a slice of plants, returning indices of matching plants.
///
/// Indices are into the original slice, in its order.
pub fn apply_filters(plants: &[Plant], filter: &FilterState) -> Vec<usize> {
    if filter.is_empty() {
        return (0..plants.len()).collect();
    }

    let text_lower = filter.text_search.to_lowercase();

    plants
        .iter()
        .enumerate()
        .filter(|(_, plant)| matches_all(plant, filter, &text_lower))
        .map(|(idx, _)| idx)
        .collect()
}

fn matches_all(plant: &Plant, filter: &FilterState, text_lower: &str) -> bool {
    if !filter.toxicity.admits(plant.toxic) {
        return false;
    }

    // Empty query always passes
    text_lower.is_empty() || searchable_text(plant).contains(text_lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_plant(name: &str, other: &str, scientific: &str, family: &str, toxic: bool) -> Plant {
        Plant {
            name: name.to_string(),
            other: other.to_string(),
            scientific: scientific.to_string(),
            family: family.to_string(),
            toxic,
        }
    }

    fn sample() -> Vec<Plant> {
        vec![
            make_plant("Peace Lily", "", "Spathiphyllum", "Araceae", true),
            make_plant("Boston Fern", "Sword Fern", "Nephrolepis exaltata", "Lomariopsidaceae", false),
            make_plant("Easter Lily", "", "Lilium longiflorum", "Liliaceae", true),
            make_plant("Spider Plant", "Ribbon Plant", "Chlorophytum comosum", "Asparagaceae", false),
        ]
    }

    #[test]
    fn test_empty_filter_returns_all() {
        let plants = sample();
        let result = apply_filters(&plants, &FilterState::default());
        assert_eq!(result, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_safe_with_empty_query_returns_all_nontoxic() {
        let plants = sample();
        let result = apply_filters(&plants, &FilterState::safe_only());
        assert_eq!(result, vec![1, 3]);
        assert!(result.iter().all(|&i| !plants[i].toxic));
    }

    #[test]
    fn test_toxic_only() {
        let plants = sample();
        assert_eq!(apply_filters(&plants, &FilterState::toxic_only()), vec![0, 2]);
    }

    #[test]
    fn test_query_matches_name_case_insensitive() {
        let peace_lily = make_plant("Peace Lily", "", "Spathiphyllum", "Araceae", true);
        let filter = FilterState {
            text_search: "lily".to_string(),
            ..Default::default()
        };
        assert!(matches(&peace_lily, &filter));

        let upper = FilterState {
            text_search: "LILY".to_string(),
            ..Default::default()
        };
        assert!(matches(&peace_lily, &upper));
    }

    #[test]
    fn test_query_matches_other_scientific_and_family() {
        let plants = sample();
        let by_other = FilterState {
            text_search: "sword".to_string(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&plants, &by_other), vec![1]);

        let by_scientific = FilterState {
            text_search: "chlorophytum".to_string(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&plants, &by_scientific), vec![3]);

        let by_family = FilterState {
            text_search: "liliaceae".to_string(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&plants, &by_family), vec![2]);
    }

    #[test]
    fn test_query_matches_toxicity_label() {
        let plants = sample();
        let filter = FilterState {
            text_search: "safe".to_string(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&plants, &filter), vec![1, 3]);
    }

    #[test]
    fn test_query_spans_field_boundary() {
        // Fields are joined with single spaces, so a query may straddle two.
        let plant = make_plant("Peace Lily", "", "Spathiphyllum", "Araceae", true);
        assert_eq!(searchable_text(&plant), "peace lily  spathiphyllum araceae toxic");
        let filter = FilterState {
            text_search: "araceae tox".to_string(),
            ..Default::default()
        };
        assert!(matches(&plant, &filter));
    }

    #[test]
    fn test_combined_gates() {
        let plants = sample();
        let filter = FilterState {
            toxicity: ToxicityFilter::Safe,
            text_search: "lily".to_string(),
        };
        assert!(apply_filters(&plants, &filter).is_empty());
    }

    #[test]
    fn test_clear_resets_both_gates() {
        let mut filter = FilterState {
            toxicity: ToxicityFilter::Toxic,
            text_search: "fern".to_string(),
        };
        assert!(!filter.is_empty());
        filter.clear();
        assert!(filter.is_empty());
    }
}
