//! World plugin - scene assets, loading gate, and scene lifecycle.

use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::core::GameState;
use crate::player::load_player_definition;

use super::spawning::{cleanup_scene, queue_scene_assets, setup_scene, SceneAssets};

/// World plugin - owns the scene's assets and its setup/teardown.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneAssets>()
            .add_systems(Startup, queue_scene_assets.after(load_player_definition))
            .add_systems(
                Update,
                advance_when_loaded.run_if(in_state(GameState::Loading)),
            )
            .add_systems(OnEnter(GameState::InGame), setup_scene)
            .add_systems(OnExit(GameState::InGame), cleanup_scene);
    }
}

/// Move to InGame once both images have settled.
///
/// A failed load is reported and the scene still starts; rendering with a
/// missing texture is the engine's concern, not ours.
fn advance_when_loaded(
    asset_server: Res<AssetServer>,
    assets: Res<SceneAssets>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let background = asset_server.load_state(&assets.background);
    let sheet = asset_server.load_state(&assets.player_sheet);
    if !settled(&background) || !settled(&sheet) {
        return;
    }

    for (name, state) in [("background", &background), ("spritesheet", &sheet)] {
        if let LoadState::Failed(err) = state {
            error!("Failed to load {}: {}", name, err);
        }
    }

    next_state.set(GameState::InGame);
}

fn settled(state: &LoadState) -> bool {
    matches!(state, LoadState::Loaded | LoadState::Failed(_))
}
