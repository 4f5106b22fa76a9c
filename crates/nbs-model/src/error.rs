use thiserror::Error;

/// NBS decode error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NbsError {
    #[error("stream ended unexpectedly")]
    UnexpectedEof,

    #[error("integer width {0} out of range (expected 1-8)")]
    InvalidWidth(usize),

    #[error("unsupported NBS format version {found}, expected {expected}")]
    UnsupportedVersion { found: u8, expected: u8 },

    #[error("time signature {0} out of range (expected 2-8)")]
    TimeSignatureOutOfRange(u8),

    #[error("note placed outside the declared grid (tick {tick}, layer {layer})")]
    NoteOutOfRange { tick: i32, layer: i32 },
}
