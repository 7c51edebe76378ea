//! Scene assets and entity spawning: camera, background, bounds, player.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::player::{spawn_player, ClipLibrary, PlayerDefinition};

/// Logical canvas size in pixels; the window and the world share it.
pub const CANVAS_SIZE: f32 = 320.0;

/// Background image path relative to the assets root.
const BACKGROUND_PATH: &str = "LittlerootTown.png";

/// Wall thickness for the world-bounds colliders.
const WALL_THICKNESS: f32 = 16.0;

/// Handles for the scene's two images and the spritesheet's atlas layout.
#[derive(Resource, Default)]
pub struct SceneAssets {
    pub background: Handle<Image>,
    pub player_sheet: Handle<Image>,
    pub player_layout: Handle<TextureAtlasLayout>,
}

/// Marker for scene entities so they get cleaned up on state exit.
#[derive(Component)]
pub struct SceneEntity;

/// Kick off the two image loads and slice the spritesheet grid.
pub fn queue_scene_assets(
    asset_server: Res<AssetServer>,
    definition: Res<PlayerDefinition>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
    mut assets: ResMut<SceneAssets>,
) {
    assets.background = asset_server.load(BACKGROUND_PATH);
    assets.player_sheet = asset_server.load(definition.sprite_sheet.clone());
    assets.player_layout = layouts.add(TextureAtlasLayout::from_grid(
        UVec2::new(definition.frame_size.0, definition.frame_size.1),
        definition.sheet_columns,
        definition.sheet_rows,
        None,
        None,
    ));
}

/// Set up the scene: camera, town background, bounds, and the player.
pub fn setup_scene(
    mut commands: Commands,
    assets: Res<SceneAssets>,
    definition: Res<PlayerDefinition>,
    clips: Res<ClipLibrary>,
) {
    let center = Vec2::splat(CANVAS_SIZE / 2.0);

    commands.spawn((
        Camera2d,
        Transform::from_xyz(center.x, center.y, 0.0),
        SceneEntity,
    ));

    commands.spawn((
        Sprite::from_image(assets.background.clone()),
        Transform::from_xyz(center.x, center.y, 0.0),
        SceneEntity,
    ));

    for (wall_center, half_extents) in bounds_walls() {
        commands.spawn((
            RigidBody::Fixed,
            Collider::cuboid(half_extents.x, half_extents.y),
            Transform::from_xyz(wall_center.x, wall_center.y, 0.0),
            SceneEntity,
        ));
    }

    spawn_player(&mut commands, &assets, &definition, &clips, center);

    info!("Scene ready");
}

/// The four static walls framing the canvas, as (center, half-extents).
///
/// Order: left, right, bottom, top. The vertical walls run past the
/// horizontal ones so the corners stay closed.
pub fn bounds_walls() -> [(Vec2, Vec2); 4] {
    let half = CANVAS_SIZE / 2.0;
    let t = WALL_THICKNESS / 2.0;
    [
        (Vec2::new(-t, half), Vec2::new(t, half + WALL_THICKNESS)),
        (
            Vec2::new(CANVAS_SIZE + t, half),
            Vec2::new(t, half + WALL_THICKNESS),
        ),
        (Vec2::new(half, -t), Vec2::new(half, t)),
        (Vec2::new(half, CANVAS_SIZE + t), Vec2::new(half, t)),
    ]
}

/// Clean up scene entities when leaving the InGame state.
pub fn cleanup_scene(
    mut commands: Commands,
    scene_query: Query<Entity, With<SceneEntity>>,
    player_query: Query<Entity, With<crate::player::Player>>,
) {
    for entity in scene_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
    for entity in player_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
