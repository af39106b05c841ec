// PlantSafe - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library, serde, csv/serde_json for export.
// Must NOT depend on: ui, platform, app.

pub mod dedupe;
pub mod export;
pub mod filter;
pub mod image;
pub mod loader;
pub mod model;
pub mod sort;
