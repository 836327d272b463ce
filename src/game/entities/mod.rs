//! Game entities module.
//!
//! This module organizes player and board feature (obstacle, gem) logic.

pub mod player;
pub mod features;

pub use player::*;
pub use features::*;
