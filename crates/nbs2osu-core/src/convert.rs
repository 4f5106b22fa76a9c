//! The tick walk: NBS note grid → placed hit objects and tempo events.

use mania_model::{BPM_FACTOR, Beatmap, HitObject, TimingPoint};
use nbs_model::{Layer, NbsSong};

use crate::error::ConvertError;
use crate::properties::BeatmapProperties;

/// Name of the layer holding tempo-change notes
const TIMING_LAYER: &str = "Timing";

/// Prefix of the per-column layers ("Track1".."TrackN")
const TRACK_LAYER_PREFIX: &str = "Track";

/// Note keys rendered as circles; anything outside [33, 57] becomes a hold
const CIRCLE_KEY_MIN: u8 = 33;
const CIRCLE_KEY_MAX: u8 = 57;

/// Convert a decoded NBS song into a mania beatmap.
///
/// Walks the tick grid once, front to back. "TrackN" layers supply hit
/// objects at the running millisecond clock; the "Timing" layer supplies
/// tempo changes, with the song's base BPM opening the timeline when
/// tick 0 carries no tempo note. Each tick advances the clock by a quarter
/// of the active beat gap.
pub fn convert(song: &NbsSong, props: &BeatmapProperties) -> Result<Beatmap, ConvertError> {
    let timing_layer = song
        .layer_named(TIMING_LAYER)
        .ok_or(ConvertError::TimingLayerNotFound)?;
    let tracks = track_layers(song, props.keys)?;

    let mut map = Beatmap {
        title: song.name.clone(),
        artist: song.original_author.clone(),
        creator: song.author.clone(),
        version: props.difficulty.clone(),
        keys: props.keys,
        hit_objects: Vec::new(),
        timing_points: Vec::new(),
    };

    let mut clock_ms = props.offset;
    let mut gap_ms = BPM_FACTOR / song.bpm();

    for tick in 0..u32::from(song.song_length) {
        let tempo_note = timing_layer.note_at(tick);
        if tick == 0 && tempo_note.is_none() {
            // No tempo note on the first tick: the song's base BPM opens
            // the timeline.
            map.timing_points.push(TimingPoint::normal(
                props.offset,
                song.bpm(),
                song.time_signature,
            )?);
        }

        for (index, track) in tracks.iter().enumerate() {
            if let Some(note) = track.note_at(tick) {
                let time_ms = clock_ms as i64;
                let track_number = index + 1;
                let object = if (CIRCLE_KEY_MIN..=CIRCLE_KEY_MAX).contains(&note.key) {
                    HitObject::circle(time_ms, track_number)
                } else {
                    HitObject::hold(time_ms, track_number)
                };
                map.hit_objects.push(object);
            }
        }

        if let Some(note) = tempo_note {
            // The new tempo takes effect at this tick's (untruncated)
            // clock value and governs the advance below.
            let bpm = f64::from(note.pitch.unsigned_abs());
            map.timing_points.push(TimingPoint::normal(
                clock_ms,
                bpm,
                song.time_signature,
            )?);
            gap_ms = BPM_FACTOR / bpm;
        }

        // One tick is a quarter of a beat.
        clock_ms += gap_ms / 4.0;
    }

    Ok(map)
}

/// Resolve the "Track1".."TrackN" layers, failing on the first missing one.
fn track_layers<'a>(song: &'a NbsSong, keys: usize) -> Result<Vec<&'a Layer>, ConvertError> {
    (1..=keys)
        .map(|index| {
            song.layer_named(&format!("{TRACK_LAYER_PREFIX}{index}"))
                .ok_or(ConvertError::TrackLayerMissing(index))
        })
        .collect()
}
