use serde::{Deserialize, Serialize};

use crate::instrument::CustomInstrument;
use crate::layer::Layer;

/// The NBS format version this crate decodes
pub const SUPPORTED_VERSION: u8 = 5;

/// Factor between the stored tempo (ticks/s × 100) and BPM
pub const TEMPO_FACTOR: f64 = 0.15;

/// Complete NBS song document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NbsSong {
    pub format_version: u8,
    /// Number of built-in instruments when the song was saved; custom
    /// instrument ids start here. Usually 16.
    pub vanilla_instrument_count: u8,
    /// Song length in ticks
    pub song_length: u16,
    /// Number of layers stored in the file
    pub layer_count: u16,
    pub name: String,
    pub author: String,
    pub original_author: String,
    /// Free-text description; conversion reads its `key=value` properties
    pub description: String,
    /// Tempo in ticks per second, multiplied by 100 (1225 = 12.25 t/s)
    pub tempo: u16,
    /// Beats per bar (2-8)
    pub time_signature: u8,
    /// Name of the file the song was imported from, if any
    pub source_file: String,
    /// Layers in file order; the vector index is the layer id
    pub layers: Vec<Layer>,
    pub custom_instruments: Vec<CustomInstrument>,
}

impl NbsSong {
    /// Base tempo in BPM, derived from the stored ticks/s value.
    pub fn bpm(&self) -> f64 {
        f64::from(self.tempo) * TEMPO_FACTOR
    }

    /// Find a layer by exact name. Later layers shadow earlier ones with
    /// the same name.
    pub fn layer_named(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().rev().find(|layer| layer.name == name)
    }

    /// Total number of notes across all layers
    pub fn total_notes(&self) -> usize {
        self.layers.iter().map(|layer| layer.note_count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bpm_from_tempo() {
        let song = NbsSong {
            tempo: 300,
            ..Default::default()
        };
        assert!((song.bpm() - 45.0).abs() < f64::EPSILON);

        let song = NbsSong {
            tempo: 2000,
            ..Default::default()
        };
        assert!((song.bpm() - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn serde_json_roundtrip() {
        let mut layer = Layer {
            name: "Track1".to_string(),
            ..Default::default()
        };
        layer.notes.insert(3, crate::Note::new(0, 45));
        let song = NbsSong {
            name: "Song".to_string(),
            tempo: 300,
            layers: vec![layer],
            ..Default::default()
        };

        let json = serde_json::to_string(&song).unwrap();
        let back: NbsSong = serde_json::from_str(&json).unwrap();
        assert_eq!(back, song);
    }

    #[test]
    fn layer_named_last_wins() {
        let song = NbsSong {
            layers: vec![
                Layer {
                    name: "Timing".to_string(),
                    volume: 10,
                    ..Default::default()
                },
                Layer {
                    name: "Timing".to_string(),
                    volume: 90,
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert_eq!(song.layer_named("Timing").map(|l| l.volume), Some(90));
        assert!(song.layer_named("Track1").is_none());
    }
}
