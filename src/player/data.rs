//! Player definition loading from RON.
//!
//! The spritesheet layout, walk speed, and animation frame ranges live in
//! `assets/data/player.ron`. A compiled-in default with the same values
//! keeps the demo running if the file is missing or malformed.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::error::DefinitionError;

/// Where the player definition is expected on disk.
pub const PLAYER_DEFINITION_PATH: &str = "assets/data/player.ron";

/// An inclusive frame index range within the spritesheet.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameRange {
    pub start: usize,
    pub end: usize,
}

/// Walking frame ranges for the four directions.
///
/// Each direction's standing frame is the first frame of its walking range.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirectionFrames {
    pub up: FrameRange,
    pub left: FrameRange,
    pub down: FrameRange,
    pub right: FrameRange,
}

/// Player definition loaded from RON file.
#[derive(Resource, Deserialize, Clone, Debug, PartialEq)]
pub struct PlayerDefinition {
    pub name: String,
    /// Spritesheet path relative to the assets root.
    pub sprite_sheet: String,
    /// Frame dimensions in pixels (width, height).
    pub frame_size: (u32, u32),
    pub sheet_columns: u32,
    pub sheet_rows: u32,
    /// Atlas index the player spawns with (down-facing standing pose).
    pub default_frame: usize,
    /// Walking speed in pixels per second.
    pub walk_speed: f32,
    pub walk_frame_rate: f32,
    pub stand_frame_rate: f32,
    pub animations: DirectionFrames,
}

impl Default for PlayerDefinition {
    fn default() -> Self {
        Self {
            name: "Sara".to_string(),
            sprite_sheet: "LPC_Sara/SaraFullSheet.png".to_string(),
            frame_size: (64, 64),
            sheet_columns: 13,
            sheet_rows: 21,
            default_frame: 130,
            walk_speed: 40.0,
            walk_frame_rate: 9.0,
            stand_frame_rate: 1.0,
            animations: DirectionFrames {
                up: FrameRange { start: 104, end: 112 },
                left: FrameRange { start: 117, end: 126 },
                down: FrameRange { start: 130, end: 138 },
                right: FrameRange { start: 143, end: 151 },
            },
        }
    }
}

impl PlayerDefinition {
    /// Total number of frames the sheet is sliced into.
    pub fn frame_count(&self) -> usize {
        (self.sheet_columns * self.sheet_rows) as usize
    }

    /// Check frame ranges and rates against the sheet layout.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        let frames = self.frame_count();
        let ranges = [
            ("up", self.animations.up),
            ("left", self.animations.left),
            ("down", self.animations.down),
            ("right", self.animations.right),
        ];

        for (clip, range) in ranges {
            if range.start > range.end {
                return Err(DefinitionError::InvertedRange {
                    clip,
                    start: range.start,
                    end: range.end,
                });
            }
            if range.end >= frames {
                return Err(DefinitionError::FrameOutOfRange {
                    clip,
                    frame: range.end,
                    frames,
                });
            }
        }

        if self.default_frame >= frames {
            return Err(DefinitionError::FrameOutOfRange {
                clip: "default",
                frame: self.default_frame,
                frames,
            });
        }

        // Walking clips must not share frames with each other
        for (i, &(first, a)) in ranges.iter().enumerate() {
            for &(second, b) in ranges.iter().skip(i + 1) {
                if a.start <= b.end && b.start <= a.end {
                    return Err(DefinitionError::OverlappingRanges { first, second });
                }
            }
        }

        for rate in [self.walk_frame_rate, self.stand_frame_rate] {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(DefinitionError::InvalidFrameRate { value: rate });
            }
        }

        Ok(())
    }
}

/// Load the player definition from `assets/data/player.ron`.
///
/// Falls back to the compiled-in default on any failure so a broken data
/// file never takes the demo down.
pub fn load_player_definition(mut definition: ResMut<PlayerDefinition>) {
    match read_player_definition(Path::new(PLAYER_DEFINITION_PATH)) {
        Ok(loaded) => {
            info!("Loaded player definition: {}", loaded.name);
            *definition = loaded;
        }
        Err(err) => {
            warn!("Using built-in player definition: {}", err);
        }
    }
}

fn read_player_definition(path: &Path) -> Result<PlayerDefinition, DefinitionError> {
    if !path.exists() {
        return Err(DefinitionError::FileNotFound(path.display().to_string()));
    }

    let contents = fs::read_to_string(path).map_err(|err| DefinitionError::ReadError {
        path: path.display().to_string(),
        details: err.to_string(),
    })?;

    let definition: PlayerDefinition =
        ron::from_str(&contents).map_err(|err| DefinitionError::ParseError {
            path: path.display().to_string(),
            details: err.to_string(),
        })?;

    definition.validate()?;
    Ok(definition)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_definition_is_valid() {
        PlayerDefinition::default().validate().unwrap();
    }

    #[test]
    fn shipped_definition_matches_defaults() {
        let loaded = read_player_definition(Path::new(PLAYER_DEFINITION_PATH)).unwrap();
        assert_eq!(loaded, PlayerDefinition::default());
    }

    #[test]
    fn walking_ranges_must_not_overlap() {
        let mut definition = PlayerDefinition::default();
        definition.animations.down = FrameRange { start: 130, end: 145 };
        assert!(matches!(
            definition.validate(),
            Err(DefinitionError::OverlappingRanges { first: "down", second: "right" })
        ));
    }

    #[test]
    fn frames_must_fit_the_sheet() {
        let mut definition = PlayerDefinition::default();
        definition.animations.up = FrameRange { start: 104, end: 400 };
        assert!(matches!(
            definition.validate(),
            Err(DefinitionError::FrameOutOfRange { clip: "up", frame: 400, .. })
        ));
    }

    #[test]
    fn inverted_ranges_are_rejected() {
        let mut definition = PlayerDefinition::default();
        definition.animations.left = FrameRange { start: 126, end: 117 };
        assert!(matches!(
            definition.validate(),
            Err(DefinitionError::InvertedRange { clip: "left", .. })
        ));
    }

    #[test]
    fn zero_frame_rate_is_rejected() {
        let mut definition = PlayerDefinition::default();
        definition.walk_frame_rate = 0.0;
        assert!(matches!(
            definition.validate(),
            Err(DefinitionError::InvalidFrameRate { .. })
        ));
    }
}
