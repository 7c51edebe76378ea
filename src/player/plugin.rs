//! Player plugin - definition loading, animation clips, and controls.

use bevy::prelude::*;

use super::animation::{animate_sprites, register_animations, ClipLibrary};
use super::controls::{build_direction_bindings, setup_control_systems};
use super::data::{load_player_definition, PlayerDefinition};
use crate::core::GameState;

/// Player plugin - handles the player's data, animations, and input.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerDefinition>()
            .init_resource::<ClipLibrary>()
            .add_systems(
                Startup,
                (
                    load_player_definition,
                    register_animations,
                    build_direction_bindings,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                animate_sprites.run_if(in_state(GameState::InGame)),
            );

        // Set up control systems
        setup_control_systems(app);
    }
}
