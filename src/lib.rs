// PlantSafe - lib.rs
//
// Library entry point, exposing all modules for integration testing and
// for alternative front ends over the same plant catalog.

pub mod app;
pub mod core;
pub mod platform;
pub mod ui;
pub mod util;
