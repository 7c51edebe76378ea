//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. Player input and
//! animation only run in the InGame state, while the Loading state waits
//! for the scene's images to arrive.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// The demo has exactly one scene, so the flow is short:
/// - Start in `Loading` while the background and spritesheet load
/// - Move to `InGame` once both handles have settled
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading images and the player definition
    #[default]
    Loading,
    /// Active gameplay
    InGame,
}
