use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::note::Note;

/// One layer of the song: metadata plus a sparse tick → note map.
///
/// The map is only ever queried by tick index; consumers walk their own
/// tick range rather than iterating storage order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Layer name shown in the editor. Conversion looks layers up by name.
    pub name: String,
    /// Whether the layer is locked against edits
    pub locked: bool,
    /// Layer volume (0-100)
    pub volume: u8,
    /// Stereo offset (0-200, 100 = center)
    pub stereo: u8,
    /// Notes keyed by tick index, unique per layer
    pub notes: BTreeMap<u32, Note>,
}

impl Default for Layer {
    fn default() -> Self {
        Self {
            name: String::new(),
            locked: false,
            volume: 0,
            stereo: 100,
            notes: BTreeMap::new(),
        }
    }
}

impl Layer {
    /// The note at a tick, if any
    pub fn note_at(&self, tick: u32) -> Option<&Note> {
        self.notes.get(&tick)
    }

    pub fn note_count(&self) -> usize {
        self.notes.len()
    }

    /// Highest occupied tick index, or `None` for an empty layer
    pub fn last_tick(&self) -> Option<u32> {
        self.notes.last_key_value().map(|(tick, _)| *tick)
    }
}
