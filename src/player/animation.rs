//! Player animation clips and the frame-stepping system.
//!
//! Eight clips are registered from the player definition: a single-frame
//! standing clip and a multi-frame walking clip per direction. All clips
//! loop forever; the walking clips step through their atlas range at the
//! definition's frame rate.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::{FrameRange, PlayerDefinition};

/// Names for the eight registered clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKey {
    Up,
    Down,
    Left,
    Right,
    UpWalking,
    DownWalking,
    LeftWalking,
    RightWalking,
}

/// An immutable clip: an inclusive atlas index range and a frame rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clip {
    pub first: usize,
    pub last: usize,
    pub fps: f32,
}

/// Resource holding all registered clips.
#[derive(Resource, Default)]
pub struct ClipLibrary {
    clips: HashMap<AnimationKey, Clip>,
}

impl ClipLibrary {
    /// Build the eight directional clips from a player definition.
    pub fn from_definition(definition: &PlayerDefinition) -> Self {
        let mut clips = HashMap::new();

        let mut add_direction = |standing: AnimationKey, walking: AnimationKey, range: FrameRange| {
            // Standing pose is the first frame of the walking range
            clips.insert(
                standing,
                Clip {
                    first: range.start,
                    last: range.start,
                    fps: definition.stand_frame_rate,
                },
            );
            clips.insert(
                walking,
                Clip {
                    first: range.start,
                    last: range.end,
                    fps: definition.walk_frame_rate,
                },
            );
        };

        add_direction(AnimationKey::Up, AnimationKey::UpWalking, definition.animations.up);
        add_direction(AnimationKey::Left, AnimationKey::LeftWalking, definition.animations.left);
        add_direction(AnimationKey::Down, AnimationKey::DownWalking, definition.animations.down);
        add_direction(AnimationKey::Right, AnimationKey::RightWalking, definition.animations.right);

        Self { clips }
    }

    /// Get a clip by key.
    pub fn get(&self, key: AnimationKey) -> Option<&Clip> {
        self.clips.get(&key)
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

/// Tracks which clip a sprite is playing and when its next frame is due.
#[derive(Component)]
pub struct SpriteAnimation {
    pub key: AnimationKey,
    pub first: usize,
    pub last: usize,
    pub frame_timer: Timer,
    pub playing: bool,
}

impl SpriteAnimation {
    pub fn new(key: AnimationKey, clip: &Clip) -> Self {
        Self {
            key,
            first: clip.first,
            last: clip.last,
            frame_timer: frame_timer(clip.fps),
            playing: true,
        }
    }

    /// Switch to a clip from its first frame.
    pub fn play(&mut self, key: AnimationKey, clip: &Clip, sprite: &mut Sprite) {
        self.key = key;
        self.first = clip.first;
        self.last = clip.last;
        self.frame_timer = frame_timer(clip.fps);
        self.playing = true;
        if let Some(atlas) = sprite.texture_atlas.as_mut() {
            atlas.index = clip.first;
        }
    }
}

fn frame_timer(fps: f32) -> Timer {
    Timer::from_seconds(1.0 / fps, TimerMode::Repeating)
}

/// Populate the clip library once the player definition is in place.
pub fn register_animations(
    definition: Res<PlayerDefinition>,
    mut library: ResMut<ClipLibrary>,
) {
    *library = ClipLibrary::from_definition(&definition);
    info!("Registered {} animation clips", library.len());
}

/// Advance every playing animation's atlas index on its frame timer.
pub fn animate_sprites(
    time: Res<Time>,
    mut query: Query<(&mut SpriteAnimation, &mut Sprite)>,
) {
    for (mut animation, mut sprite) in query.iter_mut() {
        if !animation.playing {
            continue;
        }

        animation.frame_timer.tick(time.delta());
        if !animation.frame_timer.just_finished() {
            continue;
        }

        let (first, last) = (animation.first, animation.last);
        if let Some(atlas) = sprite.texture_atlas.as_mut() {
            atlas.index = next_frame(atlas.index, first, last);
        }
    }
}

/// Next atlas index within an inclusive range, wrapping at the end.
fn next_frame(index: usize, first: usize, last: usize) -> usize {
    if index >= last {
        first
    } else {
        index + 1
    }
}
