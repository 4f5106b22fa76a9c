use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while converting an NBS song to a beatmap
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("no layer named \"Timing\" in the song")]
    TimingLayerNotFound,

    #[error("track layer \"Track{0}\" not found")]
    TrackLayerMissing(usize),

    #[error("bad value {value:?} for song property {key:?}")]
    BadProperty { key: String, value: String },

    #[error(transparent)]
    Nbs(#[from] nbs_model::NbsError),

    #[error(transparent)]
    Beatmap(#[from] mania_model::BeatmapError),

    #[error("failed to read NBS file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write beatmap file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
