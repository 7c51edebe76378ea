//! Core game module - states and fundamental systems.
//!
//! This module provides the foundation that the other game systems build upon.

mod plugin;
mod states;

pub use plugin::CorePlugin;
pub use states::*;
