use serde::{Deserialize, Serialize};

/// A single note block in the song grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Instrument id. Ids below the song's vanilla instrument count are
    /// built-in; the rest index into the custom instrument list.
    pub instrument: u8,
    /// Pitch key of the note block (0-87)
    pub key: u8,
    /// Playback velocity (0-100)
    pub velocity: u8,
    /// Stereo panning (0-200, 100 = center)
    pub panning: u8,
    /// Fine pitch, signed. Tempo-change notes on the "Timing" layer reuse
    /// this field to carry the new BPM.
    pub pitch: i16,
}

impl Note {
    /// Create a note with editor-default velocity and panning.
    pub fn new(instrument: u8, key: u8) -> Self {
        Self {
            instrument,
            key,
            velocity: 100,
            panning: 100,
            pitch: 0,
        }
    }
}
