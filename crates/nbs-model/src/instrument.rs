use serde::{Deserialize, Serialize};

/// A custom (non-vanilla) instrument definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomInstrument {
    pub name: String,
    /// Sound file, relative to the editor's sounds directory
    pub file: String,
    /// Key the sound is pitched at (45 = F#4)
    pub pitch: u8,
    /// Whether notes of this instrument press the key visually in the editor
    pub press_key: bool,
}
