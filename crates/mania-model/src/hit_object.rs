use serde::{Deserialize, Serialize};

use crate::error::BeatmapError;

/// Horizontal half-width of one mania column in playfield units. Column
/// centers sit at odd multiples of this across the playfield.
pub const COLUMN_HALF_WIDTH: i64 = 64;

/// Fixed y coordinate emitted for every mania hit object
pub const OBJECT_Y: i64 = 192;

/// The shape of a hit object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitShape {
    Circle = 1,
    Hold = 128,
}

impl HitShape {
    /// Wire value of the object's type field
    pub fn type_flag(self) -> u32 {
        self as u32
    }
}

/// A single placed note in the output beatmap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitObject {
    /// Position in milliseconds from the start of the audio
    pub time_ms: i64,
    /// 1-based column index
    pub track: usize,
    pub shape: HitShape,
    /// Release time for hold notes. The NBS note stream has no end-tick to
    /// derive one from, so converted holds leave this `None`; the field
    /// exists because the output format carries it.
    pub end_ms: Option<i64>,
    /// Sample volume (0-100)
    pub sample_volume: u8,
    /// Hit sample file, empty for the default
    pub sample_file: String,
}

impl HitObject {
    pub fn circle(time_ms: i64, track: usize) -> Self {
        Self {
            time_ms,
            track,
            shape: HitShape::Circle,
            end_ms: None,
            sample_volume: 0,
            sample_file: String::new(),
        }
    }

    pub fn hold(time_ms: i64, track: usize) -> Self {
        Self {
            shape: HitShape::Hold,
            ..Self::circle(time_ms, track)
        }
    }

    /// Attach a release time, validated to come after the start.
    pub fn with_end(mut self, end_ms: i64) -> Result<Self, BeatmapError> {
        if self.shape != HitShape::Hold {
            return Err(BeatmapError::EndOnNonHold);
        }
        if end_ms <= self.time_ms {
            return Err(BeatmapError::HoldEndNotAfterStart {
                start_ms: self.time_ms,
                end_ms,
            });
        }
        self.end_ms = Some(end_ms);
        Ok(self)
    }

    /// Set the sample volume, validated to 0-100.
    pub fn with_sample_volume(mut self, volume: u8) -> Result<Self, BeatmapError> {
        if volume > 100 {
            return Err(BeatmapError::VolumeOutOfRange(volume));
        }
        self.sample_volume = volume;
        Ok(self)
    }

    /// Playfield x coordinate of this object's column center
    pub fn column_x(&self) -> i64 {
        track_to_x(self.track)
    }
}

/// Map a 1-based track index to its column-center x coordinate.
pub fn track_to_x(track: usize) -> i64 {
    (2 * track as i64 - 1) * COLUMN_HALF_WIDTH
}

/// Inverse of [`track_to_x`]: recover the track index from a raw x.
pub fn x_to_track(x: i64) -> usize {
    ((x + COLUMN_HALF_WIDTH) / (2 * COLUMN_HALF_WIDTH)) as usize
}
