use thiserror::Error;

/// Range violations in beatmap construction
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BeatmapError {
    #[error("sample volume {0} out of range (expected 0-100)")]
    VolumeOutOfRange(u8),

    #[error("slider velocity {0} out of range (expected 0.01-10)")]
    VelocityOutOfRange(f64),

    #[error("time signature {0} out of range (expected 2-8)")]
    TimeSignatureOutOfRange(u8),

    #[error("hold end {end_ms}ms does not come after start {start_ms}ms")]
    HoldEndNotAfterStart { start_ms: i64, end_ms: i64 },

    #[error("only hold objects carry an end time")]
    EndOnNonHold,
}
