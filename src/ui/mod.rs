// PlantSafe - ui/mod.rs
//
// UI layer: terminal presentation only.
// Dependencies: core (read-only models).
// Must NOT depend on: platform, direct file I/O.

pub mod detail;
pub mod table;
