// PlantSafe - app/state.rs
//
// Front-end-agnostic view state: the catalog, filter and sort selection,
// the filtered view, and the current selection. Every front end drives
// this instead of re-implementing the search predicate.

use crate::app::catalog::PlantCatalog;
use crate::core::filter::{apply_filters, FilterState};
use crate::core::model::{Plant, ToxicityFilter};
use crate::core::sort::{sort_indices, SortColumn, SortState};
use crate::util::error::LoadError;

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Memoised plant catalog.
    pub catalog: PlantCatalog,

    /// Current filter configuration.
    pub filter_state: FilterState,

    /// Current column sort.
    pub sort_state: SortState,

    /// Indices of plants matching the current filter (into the catalog),
    /// in display order.
    pub filtered_indices: Vec<usize>,

    /// Position of the selected plant in `filtered_indices`.
    pub selected_index: Option<usize>,

    /// Catalog index of the selected plant. `selected_index` is re-derived
    /// from this after every re-filter or re-sort.
    pub selected_plant_index: Option<usize>,
}

impl AppState {
    /// Create state over a loaded catalog, showing every plant.
    pub fn new(catalog: PlantCatalog) -> Self {
        let mut state = Self {
            catalog,
            filter_state: FilterState::default(),
            sort_state: SortState::default(),
            filtered_indices: Vec::new(),
            selected_index: None,
            selected_plant_index: None,
        };
        state.apply_filters();
        state
    }

    /// Recompute filtered indices from the catalog, filter and sort state.
    pub fn apply_filters(&mut self) {
        let plants = self.catalog.plants();
        let mut indices = apply_filters(plants, &self.filter_state);
        sort_indices(plants, &mut indices, self.sort_state);
        self.filtered_indices = indices;

        // Follow the selected plant to its new position; drop it if filtered out
        self.selected_index = self
            .selected_plant_index
            .and_then(|plant_idx| self.filtered_indices.iter().position(|&i| i == plant_idx));
        if self.selected_index.is_none() {
            self.selected_plant_index = None;
        }

        tracing::debug!(
            toxicity = %self.filter_state.toxicity,
            query = %self.filter_state.text_search,
            shown = self.filtered_indices.len(),
            "Filters applied"
        );
    }

    pub fn set_toxicity(&mut self, toxicity: ToxicityFilter) {
        self.filter_state.toxicity = toxicity;
        self.apply_filters();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter_state.text_search = query.into();
        self.apply_filters();
    }

    /// Reset the query and the toxicity selector to show every plant.
    pub fn clear_search(&mut self) {
        self.filter_state.clear();
        self.apply_filters();
    }

    /// Sort by `column`, reversing direction if it is already the sort column.
    pub fn sort_by(&mut self, column: SortColumn) {
        self.sort_state.toggle(column);
        self.apply_filters();
    }

    /// Plants in the filtered view, in display order.
    pub fn filtered(&self) -> impl Iterator<Item = &Plant> + '_ {
        let plants = self.catalog.plants();
        self.filtered_indices.iter().filter_map(move |&i| plants.get(i))
    }

    /// Select the first plant in the filtered view whose name or picker
    /// label equals `name`, ignoring case. Returns the selected plant.
    pub fn select_by_name(&mut self, name: &str) -> Option<&Plant> {
        let wanted = name.trim().to_lowercase();
        let pos = self.filtered().position(|p| {
            p.name.to_lowercase() == wanted || p.selection_label().to_lowercase() == wanted
        });
        self.selected_index = pos;
        self.selected_plant_index = pos.and_then(|pos| self.filtered_indices.get(pos).copied());
        self.selected_plant()
    }

    /// Get the currently selected plant, if any.
    pub fn selected_plant(&self) -> Option<&Plant> {
        self.selected_plant_index
            .and_then(|plant_idx| self.catalog.plants().get(plant_idx))
    }

    /// Reload the catalog if its source files changed, then re-filter.
    ///
    /// The selection is dropped on reload since indices no longer line up.
    pub fn refresh(&mut self) -> Result<bool, LoadError> {
        let reloaded = self.catalog.refresh()?;
        if reloaded {
            self.selected_index = None;
            self.selected_plant_index = None;
            self.apply_filters();
        }
        Ok(reloaded)
    }

    /// Status bar text.
    pub fn status_line(&self) -> String {
        format!("Showing {} plants", self.filtered_indices.len())
    }
}
