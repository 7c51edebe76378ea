//! Core plugin that sets up game states.

use bevy::prelude::*;

use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up the game states (Loading, InGame). The transition
/// out of Loading is owned by the world plugin, which knows which assets
/// it is waiting on.
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>();
    }
}
