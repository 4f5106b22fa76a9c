use crate::error::ConvertError;

/// Default difficulty name when the song description doesn't set one
pub const DEFAULT_DIFFICULTY: &str = "Notusu";

/// Default column count
pub const DEFAULT_KEYS: usize = 4;

/// Conversion settings embedded in the song description as `key=value`
/// lines. Unrecognized keys are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct BeatmapProperties {
    /// Offset of tick 0 in milliseconds
    pub offset: f64,
    /// Number of mania columns, each backed by a "TrackN" layer
    pub keys: usize,
    /// Difficulty (version) name of the output map
    pub difficulty: String,
}

impl Default for BeatmapProperties {
    fn default() -> Self {
        Self {
            offset: 0.0,
            keys: DEFAULT_KEYS,
            difficulty: DEFAULT_DIFFICULTY.to_string(),
        }
    }
}

impl BeatmapProperties {
    /// Parse properties from a song description.
    ///
    /// Recognized keys: `offset` (milliseconds, float), `keys` (integer),
    /// `diff` (string). A recognized key with an unparseable value is a
    /// hard error; everything else, including lines without `=`, is
    /// silently skipped.
    pub fn parse(text: &str) -> Result<Self, ConvertError> {
        let mut props = Self::default();
        for line in text.lines() {
            if line.is_empty() {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            match key {
                "offset" => props.offset = parse_value(key, value)?,
                "keys" => props.keys = parse_value(key, value)?,
                "diff" => props.difficulty = value.to_string(),
                _ => {}
            }
        }
        Ok(props)
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConvertError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConvertError::BadProperty {
            key: key.to_string(),
            value: value.to_string(),
        })
}
