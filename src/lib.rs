//! Conquest - turn-based territory conquest with dice combat

pub mod campaign;
pub mod core;
pub mod ui;
