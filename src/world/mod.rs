//! World module - scene assets, background, camera, and world bounds.

mod plugin;
mod spawning;

pub use plugin::WorldPlugin;
pub use spawning::*;
