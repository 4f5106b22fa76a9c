use std::path::Path;

use anyhow::Result;

use crate::error::NbsError;
use crate::instrument::CustomInstrument;
use crate::layer::Layer;
use crate::model::{NbsSong, SUPPORTED_VERSION};
use crate::note::Note;
use crate::stream::NbsReader;

/// Ignored editor state (auto-save settings) between tempo and time signature
const EDITOR_DATA_BYTES: u64 = 2;
/// Ignored usage statistics (minutes in editor, click counts, ...)
const STAT_BYTES: u64 = 20;
/// Ignored loop settings (on/off, loop count, start tick)
const LOOP_DATA_BYTES: u64 = 4;

/// NBS binary decoder
pub struct NbsDecoder;

impl NbsDecoder {
    /// Decode a complete NBS document from a byte slice.
    ///
    /// The stream is consumed strictly forward through its four sections:
    /// header, note blocks, layer metadata, custom instruments. Any failure
    /// aborts the parse; no partial document is returned. Trailing bytes
    /// after the last section are ignored.
    pub fn decode(data: &[u8]) -> Result<NbsSong, NbsError> {
        let mut r = NbsReader::new(data);
        let mut song = Self::read_header(&mut r)?;
        Self::read_note_blocks(&mut r, &mut song)?;
        Self::read_layer_meta(&mut r, &mut song)?;
        Self::read_instruments(&mut r, &mut song)?;
        Ok(song)
    }

    /// Read and decode an NBS file from disk.
    pub fn decode_file(path: &Path) -> Result<NbsSong> {
        let data = std::fs::read(path)?;
        Ok(Self::decode(&data)?)
    }

    fn read_header(r: &mut NbsReader) -> Result<NbsSong, NbsError> {
        let mut song = NbsSong::default();
        // The first two bytes are always zero in the new format (the
        // classic format stored the song length here).
        r.skip(2)?;
        song.format_version = r.read_u8()?;
        if song.format_version != SUPPORTED_VERSION {
            return Err(NbsError::UnsupportedVersion {
                found: song.format_version,
                expected: SUPPORTED_VERSION,
            });
        }
        song.vanilla_instrument_count = r.read_u8()?;
        song.song_length = r.read_u16()?;
        song.layer_count = r.read_u16()?;
        song.name = r.read_string()?;
        song.author = r.read_string()?;
        song.original_author = r.read_string()?;
        song.description = r.read_string()?;
        song.tempo = r.read_u16()?;
        r.skip(EDITOR_DATA_BYTES)?;
        song.time_signature = r.read_u8()?;
        if !(2..=8).contains(&song.time_signature) {
            return Err(NbsError::TimeSignatureOutOfRange(song.time_signature));
        }
        r.skip(STAT_BYTES)?;
        song.source_file = r.read_string()?;
        r.skip(LOOP_DATA_BYTES)?;
        song.layers = vec![Layer::default(); song.layer_count as usize];
        Ok(song)
    }

    /// Decode the delta-encoded note-block stream.
    ///
    /// Both axes are position-free: the outer walk advances a running tick
    /// counter by signed deltas and the inner walk advances a running layer
    /// counter the same way, each starting at -1. A zero delta terminates
    /// the stream (outer) or the current tick (inner).
    fn read_note_blocks(r: &mut NbsReader, song: &mut NbsSong) -> Result<(), NbsError> {
        let mut tick: i32 = -1;
        loop {
            let tick_delta = r.read_i16()?;
            if tick_delta == 0 {
                break;
            }
            tick += i32::from(tick_delta);

            let mut layer: i32 = -1;
            loop {
                let layer_delta = r.read_i16()?;
                if layer_delta == 0 {
                    break;
                }
                layer += i32::from(layer_delta);

                let note = Note {
                    instrument: r.read_u8()?,
                    key: r.read_u8()?,
                    velocity: r.read_u8()?,
                    panning: r.read_u8()?,
                    pitch: r.read_i16()?,
                };
                if tick < 0 || layer < 0 || layer as usize >= song.layers.len() {
                    return Err(NbsError::NoteOutOfRange { tick, layer });
                }
                song.layers[layer as usize].notes.insert(tick as u32, note);
            }
        }
        Ok(())
    }

    fn read_layer_meta(r: &mut NbsReader, song: &mut NbsSong) -> Result<(), NbsError> {
        for layer in &mut song.layers {
            layer.name = r.read_string()?;
            layer.locked = r.read_u8()? != 0;
            layer.volume = r.read_u8()?;
            layer.stereo = r.read_u8()?;
        }
        Ok(())
    }

    fn read_instruments(r: &mut NbsReader, song: &mut NbsSong) -> Result<(), NbsError> {
        let count = r.read_u8()?;
        song.custom_instruments = Vec::with_capacity(count as usize);
        for _ in 0..count {
            song.custom_instruments.push(CustomInstrument {
                name: r.read_string()?,
                file: r.read_string()?,
                pitch: r.read_u8()?,
                press_key: r.read_u8()? != 0,
            });
        }
        Ok(())
    }
}
