//! Error types for player definition loading.

use thiserror::Error;

/// Errors that can occur when loading or validating the player definition.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// A clip's frame range runs backwards.
    #[error("Clip '{clip}' has an inverted frame range ({start}..={end})")]
    InvertedRange {
        clip: &'static str,
        start: usize,
        end: usize,
    },

    /// A frame index points past the end of the spritesheet.
    #[error("Frame {frame} of clip '{clip}' is outside the {frames}-frame sheet")]
    FrameOutOfRange {
        clip: &'static str,
        frame: usize,
        frames: usize,
    },

    /// Two walking clips claim the same frames.
    #[error("Walking clips '{first}' and '{second}' share frames")]
    OverlappingRanges {
        first: &'static str,
        second: &'static str,
    },

    /// A frame rate that cannot drive a timer.
    #[error("Frame rate {value} is not a positive number")]
    InvalidFrameRate { value: f32 },
}
