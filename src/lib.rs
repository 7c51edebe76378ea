//! Littleroot - a 2D top-down walking demo in Bevy.
//!
//! One scene: a static town background and a player sprite that walks in
//! four directions, driven by the arrow keys.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states and flow (asset loading gate)
//! - **Player**: Player entity, animation clips, input-to-motion bindings
//! - **World**: Scene assets, camera, background, world bounds

pub mod core;
pub mod player;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct LittlerootPlugin;

impl Plugin for LittlerootPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // World systems
            .add_plugins(world::WorldPlugin);
    }
}
