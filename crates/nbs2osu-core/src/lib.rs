// NBS → mania conversion: embedded properties, tick walk, file orchestration

mod convert;
mod error;
mod properties;

use std::path::{Path, PathBuf};

use mania_model::Beatmap;
use nbs_model::NbsDecoder;

pub use convert::convert;
pub use error::ConvertError;
pub use properties::{BeatmapProperties, DEFAULT_DIFFICULTY, DEFAULT_KEYS};

/// File extension of emitted beatmaps
pub const OUTPUT_EXTENSION: &str = "osu";

/// Derived output file name: `Artist - Title (Creator) [Difficulty].osu`
pub fn output_file_name(map: &Beatmap) -> String {
    format!(
        "{} - {} ({}) [{}].{}",
        map.artist, map.title, map.creator, map.version, OUTPUT_EXTENSION
    )
}

/// Read an NBS file, convert it, and write the beatmap into `dest_dir`.
///
/// Conversion settings come from the song's embedded description
/// properties; `offset_override` replaces the embedded offset when given.
/// The beatmap text is rendered completely before the single write, so a
/// failed conversion never leaves a partial output file behind.
pub fn convert_file(
    input: &Path,
    dest_dir: &Path,
    offset_override: Option<f64>,
) -> Result<PathBuf, ConvertError> {
    let data = std::fs::read(input).map_err(|source| ConvertError::FileRead {
        path: input.to_path_buf(),
        source,
    })?;
    let song = NbsDecoder::decode(&data)?;

    let mut props = BeatmapProperties::parse(&song.description)?;
    if let Some(offset) = offset_override {
        props.offset = offset;
    }

    let map = convert(&song, &props)?;
    let text = mania_model::write::render(&map);

    let out_path = dest_dir.join(output_file_name(&map));
    std::fs::write(&out_path, text).map_err(|source| ConvertError::FileWrite {
        path: out_path.clone(),
        source,
    })?;
    Ok(out_path)
}
