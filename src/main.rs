//! Littleroot - Entry Point
//!
//! A tiny top-down walking demo: Sara strolls around Littleroot Town on a
//! 320x320 canvas.
//!
//! Controls:
//! - Arrow keys: Walk up/down/left/right

use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_rapier2d::prelude::*;

use littleroot::world::CANVAS_SIZE;

fn main() {
    App::new()
        // Teal backdrop behind the town image
        .insert_resource(ClearColor(Color::srgb_u8(0x12, 0x55, 0x55)))

        // Bevy default plugins
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Littleroot".to_string(),
                        resolution: WindowResolution::new(CANVAS_SIZE, CANVAS_SIZE)
                            .with_scale_factor_override(1.0),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                // Nearest-neighbor sampling keeps the 64x64 frames crisp
                .set(ImagePlugin::default_nearest()),
        )

        // Physics (no debug render)
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())

        // Our game plugin
        .add_plugins(littleroot::LittlerootPlugin)

        .run();
}
