//! Player module - the player entity, its animation clips, and controls.

mod animation;
mod components;
mod controls;
mod data;
mod error;
mod plugin;

pub use animation::*;
pub use components::*;
pub use controls::{spawn_player, DirectionBinding, DirectionBindings};
pub use data::*;
pub use error::DefinitionError;
pub use plugin::PlayerPlugin;
