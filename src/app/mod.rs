// PlantSafe - app/mod.rs
//
// Application layer: catalog memoisation and view state.
// Dependencies: core layer, platform fingerprints.
// Must NOT depend on: ui.

pub mod catalog;
pub mod state;
