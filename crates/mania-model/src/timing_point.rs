use serde::{Deserialize, Serialize};

use crate::error::BeatmapError;

/// Milliseconds per minute; gap × BPM = this
pub const BPM_FACTOR: f64 = 60_000.0;

/// Base of the raw slider-velocity encoding: raw = -100 / multiplier
pub const VELOCITY_BASE: f64 = -100.0;

/// Sample set a timing point switches the map to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SampleSet {
    Normal = 1,
    #[default]
    Soft = 2,
    Drum = 3,
}

/// What a timing point changes from its offset onward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TimingKind {
    /// Establishes a tempo: the gap between two beats in milliseconds
    Normal { gap_ms: f64 },
    /// Scales slider velocity; stored as -100 / multiplier
    Inherited { raw_velocity: f64 },
}

/// A tempo or velocity change event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingPoint {
    /// Position in milliseconds. Fractional offsets are preserved.
    pub offset_ms: f64,
    pub kind: TimingKind,
    /// Beats per bar (2-8)
    pub time_signature: u8,
    pub sample_set: SampleSet,
    /// Index of the sample subset (0 = default)
    pub sample_subset: u32,
    /// Sample volume (0-100)
    pub volume: u8,
    /// Strip the bar line at the start of this section. Only meaningful on
    /// the first point.
    pub omit_first_barline: bool,
}

impl TimingPoint {
    /// A tempo-establishing point at the given BPM.
    pub fn normal(offset_ms: f64, bpm: f64, time_signature: u8) -> Result<Self, BeatmapError> {
        Ok(Self {
            offset_ms,
            kind: TimingKind::Normal {
                gap_ms: BPM_FACTOR / bpm,
            },
            time_signature: checked_time_signature(time_signature)?,
            sample_set: SampleSet::default(),
            sample_subset: 0,
            volume: 0,
            omit_first_barline: false,
        })
    }

    /// A velocity-scaling point, validated to the 0.01-10 multiplier range.
    pub fn inherited(
        offset_ms: f64,
        velocity: f64,
        time_signature: u8,
    ) -> Result<Self, BeatmapError> {
        if !(0.01..=10.0).contains(&velocity) {
            return Err(BeatmapError::VelocityOutOfRange(velocity));
        }
        Ok(Self {
            offset_ms,
            kind: TimingKind::Inherited {
                raw_velocity: VELOCITY_BASE / velocity,
            },
            time_signature: checked_time_signature(time_signature)?,
            sample_set: SampleSet::default(),
            sample_subset: 0,
            volume: 0,
            omit_first_barline: false,
        })
    }

    /// Set the sample volume, validated to 0-100.
    pub fn with_volume(mut self, volume: u8) -> Result<Self, BeatmapError> {
        if volume > 100 {
            return Err(BeatmapError::VolumeOutOfRange(volume));
        }
        self.volume = volume;
        Ok(self)
    }

    /// Beat gap in milliseconds; `None` for inherited points
    pub fn gap_ms(&self) -> Option<f64> {
        match self.kind {
            TimingKind::Normal { gap_ms } => Some(gap_ms),
            TimingKind::Inherited { .. } => None,
        }
    }

    /// Tempo in BPM; `None` for inherited points
    pub fn bpm(&self) -> Option<f64> {
        self.gap_ms().map(|gap| BPM_FACTOR / gap)
    }

    /// Slider-velocity multiplier; `None` for normal points
    pub fn velocity(&self) -> Option<f64> {
        match self.kind {
            TimingKind::Normal { .. } => None,
            TimingKind::Inherited { raw_velocity } => Some(VELOCITY_BASE / raw_velocity),
        }
    }

    pub fn is_inherited(&self) -> bool {
        matches!(self.kind, TimingKind::Inherited { .. })
    }
}

fn checked_time_signature(value: u8) -> Result<u8, BeatmapError> {
    if !(2..=8).contains(&value) {
        return Err(BeatmapError::TimeSignatureOutOfRange(value));
    }
    Ok(value)
}
