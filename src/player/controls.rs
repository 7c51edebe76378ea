//! Keyboard controls: the direction binding table and input systems.
//!
//! Each arrow key carries a (walking clip, standing clip, flip, velocity)
//! record. A press flips the sprite, starts the walking clip, and overwrites
//! the body's velocity; a release only reverts to the standing clip if that
//! direction's walking clip is still the one playing, so a stale release
//! never cancels a newer key's motion.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::animation::{AnimationKey, Clip, ClipLibrary, SpriteAnimation};
use super::components::Player;
use super::data::PlayerDefinition;
use crate::core::GameState;
use crate::world::SceneAssets;

/// One arrow key's press/release configuration.
#[derive(Debug, Clone, Copy)]
pub struct DirectionBinding {
    pub key: KeyCode,
    pub walking: AnimationKey,
    pub standing: AnimationKey,
    pub flip_x: bool,
    pub velocity: Vec2,
}

/// Resource holding the four direction bindings.
#[derive(Resource, Default)]
pub struct DirectionBindings(Vec<DirectionBinding>);

impl DirectionBindings {
    pub fn iter(&self) -> impl Iterator<Item = &DirectionBinding> {
        self.0.iter()
    }
}

/// Set up control systems and resources.
pub fn setup_control_systems(app: &mut App) {
    app.init_resource::<DirectionBindings>().add_systems(
        Update,
        (apply_walk_input, release_walk_input)
            .chain()
            .run_if(in_state(GameState::InGame)),
    );
}

/// Build the binding table from the player definition's walk speed.
///
/// The spritesheet has dedicated rows for all four directions, so no
/// binding needs a horizontal flip; the flag is still wired through so a
/// sheet without a left row could mirror the right one.
pub fn build_direction_bindings(
    definition: Res<PlayerDefinition>,
    mut bindings: ResMut<DirectionBindings>,
) {
    let speed = definition.walk_speed;
    bindings.0 = vec![
        DirectionBinding {
            key: KeyCode::ArrowDown,
            walking: AnimationKey::DownWalking,
            standing: AnimationKey::Down,
            flip_x: false,
            velocity: Vec2::new(0.0, -speed),
        },
        DirectionBinding {
            key: KeyCode::ArrowUp,
            walking: AnimationKey::UpWalking,
            standing: AnimationKey::Up,
            flip_x: false,
            velocity: Vec2::new(0.0, speed),
        },
        DirectionBinding {
            key: KeyCode::ArrowLeft,
            walking: AnimationKey::LeftWalking,
            standing: AnimationKey::Left,
            flip_x: false,
            velocity: Vec2::new(-speed, 0.0),
        },
        DirectionBinding {
            key: KeyCode::ArrowRight,
            walking: AnimationKey::RightWalking,
            standing: AnimationKey::Right,
            flip_x: false,
            velocity: Vec2::new(speed, 0.0),
        },
    ];
}

/// Key-down: flip, start the walking clip, set the velocity.
///
/// If the same walking clip is already playing it is left running rather
/// than restarted from its first frame. The velocity vector is overwritten
/// whole, so with two keys held the most recent press wins.
pub fn apply_walk_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<DirectionBindings>,
    clips: Res<ClipLibrary>,
    mut query: Query<(&mut SpriteAnimation, &mut Sprite, &mut Velocity), With<Player>>,
) {
    let Ok((mut animation, mut sprite, mut velocity)) = query.get_single_mut() else {
        return;
    };

    for binding in bindings.iter() {
        if !keyboard.just_pressed(binding.key) {
            continue;
        }
        let Some(clip) = clips.get(binding.walking) else {
            continue;
        };

        sprite.flip_x = binding.flip_x;
        if animation.key != binding.walking {
            animation.play(binding.walking, clip, &mut sprite);
        }
        velocity.linvel = binding.velocity;
    }
}

/// Key-up: revert to the standing clip only if this direction still owns
/// the current animation and flip state.
pub fn release_walk_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<DirectionBindings>,
    clips: Res<ClipLibrary>,
    mut query: Query<(&mut SpriteAnimation, &mut Sprite, &mut Velocity), With<Player>>,
) {
    let Ok((mut animation, mut sprite, mut velocity)) = query.get_single_mut() else {
        return;
    };

    for binding in bindings.iter() {
        if !keyboard.just_released(binding.key) {
            continue;
        }
        let still_active = animation.playing
            && animation.key == binding.walking
            && sprite.flip_x == binding.flip_x;
        if !still_active {
            continue;
        }
        let Some(clip) = clips.get(binding.standing) else {
            continue;
        };

        animation.play(binding.standing, clip, &mut sprite);
        velocity.linvel = Vec2::ZERO;
    }
}

/// Spawn the player sprite with its dynamic physics body.
pub fn spawn_player(
    commands: &mut Commands,
    assets: &SceneAssets,
    definition: &PlayerDefinition,
    clips: &ClipLibrary,
    position: Vec2,
) -> Entity {
    let standing = clips
        .get(AnimationKey::Down)
        .copied()
        .unwrap_or(Clip {
            first: definition.default_frame,
            last: definition.default_frame,
            fps: definition.stand_frame_rate,
        });

    commands
        .spawn((
            Player,
            Sprite::from_atlas_image(
                assets.player_sheet.clone(),
                TextureAtlas {
                    layout: assets.player_layout.clone(),
                    index: definition.default_frame,
                },
            ),
            SpriteAnimation::new(AnimationKey::Down, &standing),
            Transform::from_xyz(position.x, position.y, 1.0),
            // Rapier physics components: a flat world, so no gravity, no
            // spin, and frictionless wall contact
            RigidBody::Dynamic,
            Velocity::zero(),
            GravityScale(0.0),
            LockedAxes::ROTATION_LOCKED,
            Collider::cuboid(
                definition.frame_size.0 as f32 / 2.0,
                definition.frame_size.1 as f32 / 2.0,
            ),
            Friction::coefficient(0.0),
            Restitution::coefficient(0.0),
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::animation::register_animations;
    use bevy::state::app::StatesPlugin;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin));
        app.init_resource::<ButtonInput<KeyCode>>();
        app.insert_state(GameState::InGame);
        app.insert_resource(PlayerDefinition::default());
        app.init_resource::<ClipLibrary>();
        app.add_systems(
            Startup,
            (register_animations, build_direction_bindings).chain(),
        );
        setup_control_systems(&mut app);
        app
    }

    fn spawn_test_player(app: &mut App) -> Entity {
        let definition = PlayerDefinition::default();
        let clips = ClipLibrary::from_definition(&definition);
        let standing = *clips.get(AnimationKey::Down).unwrap();
        app.world_mut()
            .spawn((
                Player,
                Sprite::from_atlas_image(
                    Handle::default(),
                    TextureAtlas {
                        layout: Handle::default(),
                        index: definition.default_frame,
                    },
                ),
                SpriteAnimation::new(AnimationKey::Down, &standing),
                Velocity::zero(),
            ))
            .id()
    }

    fn press(app: &mut App, key: KeyCode) {
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
        app.update();
        app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
    }

    fn release(app: &mut App, key: KeyCode) {
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .release(key);
        app.update();
        app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
    }

    fn atlas_index(app: &App, player: Entity) -> usize {
        app.world()
            .get::<Sprite>(player)
            .unwrap()
            .texture_atlas
            .as_ref()
            .unwrap()
            .index
    }

    #[test]
    fn arrow_press_sets_velocity_and_walking_clip() {
        let cases = [
            (KeyCode::ArrowDown, Vec2::new(0.0, -40.0), AnimationKey::DownWalking),
            (KeyCode::ArrowUp, Vec2::new(0.0, 40.0), AnimationKey::UpWalking),
            (KeyCode::ArrowLeft, Vec2::new(-40.0, 0.0), AnimationKey::LeftWalking),
            (KeyCode::ArrowRight, Vec2::new(40.0, 0.0), AnimationKey::RightWalking),
        ];

        for (key, expected_velocity, expected_clip) in cases {
            let mut app = test_app();
            let player = spawn_test_player(&mut app);
            press(&mut app, key);

            let velocity = app.world().get::<Velocity>(player).unwrap();
            assert_eq!(velocity.linvel, expected_velocity);

            let animation = app.world().get::<SpriteAnimation>(player).unwrap();
            assert_eq!(animation.key, expected_clip);

            let sprite = app.world().get::<Sprite>(player).unwrap();
            assert!(!sprite.flip_x);
        }
    }

    #[test]
    fn release_reverts_to_standing_and_stops() {
        let mut app = test_app();
        let player = spawn_test_player(&mut app);

        press(&mut app, KeyCode::ArrowDown);
        release(&mut app, KeyCode::ArrowDown);

        let velocity = app.world().get::<Velocity>(player).unwrap();
        assert_eq!(velocity.linvel, Vec2::ZERO);

        let animation = app.world().get::<SpriteAnimation>(player).unwrap();
        assert_eq!(animation.key, AnimationKey::Down);
        assert_eq!(atlas_index(&app, player), 130);
    }

    #[test]
    fn stale_release_does_not_cancel_newer_motion() {
        let mut app = test_app();
        let player = spawn_test_player(&mut app);

        press(&mut app, KeyCode::ArrowDown);
        press(&mut app, KeyCode::ArrowLeft);
        release(&mut app, KeyCode::ArrowDown);

        let velocity = app.world().get::<Velocity>(player).unwrap();
        assert_eq!(velocity.linvel, Vec2::new(-40.0, 0.0));

        let animation = app.world().get::<SpriteAnimation>(player).unwrap();
        assert_eq!(animation.key, AnimationKey::LeftWalking);
    }

    #[test]
    fn releasing_the_active_direction_stops_even_with_another_key_held() {
        let mut app = test_app();
        let player = spawn_test_player(&mut app);

        press(&mut app, KeyCode::ArrowDown);
        press(&mut app, KeyCode::ArrowLeft);
        release(&mut app, KeyCode::ArrowLeft);

        let velocity = app.world().get::<Velocity>(player).unwrap();
        assert_eq!(velocity.linvel, Vec2::ZERO);

        let animation = app.world().get::<SpriteAnimation>(player).unwrap();
        assert_eq!(animation.key, AnimationKey::Left);
    }

    #[test]
    fn repress_of_running_clip_keeps_frame_position() {
        let mut app = test_app();
        let player = spawn_test_player(&mut app);

        press(&mut app, KeyCode::ArrowDown);

        // Pretend the walk cycle has advanced a few frames
        app.world_mut()
            .get_mut::<Sprite>(player)
            .unwrap()
            .texture_atlas
            .as_mut()
            .unwrap()
            .index = 134;

        // Drop the key without letting the release system observe it, then
        // press again: the running clip must not be restarted
        {
            let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            input.release(KeyCode::ArrowDown);
            input.clear();
        }
        press(&mut app, KeyCode::ArrowDown);

        assert_eq!(atlas_index(&app, player), 134);

        let velocity = app.world().get::<Velocity>(player).unwrap();
        assert_eq!(velocity.linvel, Vec2::new(0.0, -40.0));
    }
}
