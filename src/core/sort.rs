// PlantSafe - core/sort.rs
//
// Column sorting for the filtered plant table.
// Sorting reorders indices only; the plant list itself is never touched.

use crate::core::model::Plant;
use std::str::FromStr;

/// Sortable table columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Name,
    Scientific,
    Family,
    Toxicity,
}

impl SortColumn {
    /// Returns all variants in display order.
    pub fn all() -> &'static [SortColumn] {
        &[
            SortColumn::Name,
            SortColumn::Scientific,
            SortColumn::Family,
            SortColumn::Toxicity,
        ]
    }

    /// Column header text.
    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::Name => "Name",
            SortColumn::Scientific => "Scientific",
            SortColumn::Family => "Family",
            SortColumn::Toxicity => "Toxicity",
        }
    }

    /// The text a plant shows in this column.
    pub fn cell<'a>(&self, plant: &'a Plant) -> &'a str {
        match self {
            SortColumn::Name => &plant.name,
            SortColumn::Scientific => &plant.scientific,
            SortColumn::Family => &plant.family,
            SortColumn::Toxicity => plant.toxicity_label(),
        }
    }
}

impl FromStr for SortColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortColumn::Name),
            "scientific" => Ok(SortColumn::Scientific),
            "family" => Ok(SortColumn::Family),
            "toxicity" => Ok(SortColumn::Toxicity),
            other => Err(format!(
                "unknown sort column '{other}' (expected name, scientific, family or toxicity)"
            )),
        }
    }
}

/// Current sort selection. No column means "keep filtered order".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub column: Option<SortColumn>,
    pub descending: bool,
}

impl SortState {
    /// Sort ascending by `column`.
    pub fn by(column: SortColumn) -> Self {
        Self {
            column: Some(column),
            descending: false,
        }
    }

    /// Header-click behaviour: choosing the active column again flips the
    /// direction, choosing another column sorts it ascending.
    pub fn toggle(&mut self, column: SortColumn) {
        if self.column == Some(column) {
            self.descending = !self.descending;
        } else {
            *self = Self::by(column);
        }
    }
}

/// Sort `indices` (into `plants`) by the displayed column text.
///
/// Ascending order is a stable sort on the plain string order of the cell
/// text. Descending is the exact reverse of ascending, ties included, so
/// tied rows come out in reverse of their filtered order.
pub fn sort_indices(plants: &[Plant], indices: &mut [usize], sort: SortState) {
    let Some(column) = sort.column else {
        return;
    };

    indices.sort_by(|&a, &b| column.cell(&plants[a]).cmp(column.cell(&plants[b])));
    if sort.descending {
        indices.reverse();
    }
}
