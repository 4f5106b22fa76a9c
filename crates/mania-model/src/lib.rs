// Mania beatmap data model: hit objects, timing points, text serialization

mod beatmap;
mod error;
mod hit_object;
mod timing_point;
pub mod write;

pub use beatmap::Beatmap;
pub use error::BeatmapError;
pub use hit_object::{COLUMN_HALF_WIDTH, HitObject, HitShape, OBJECT_Y, track_to_x, x_to_track};
pub use timing_point::{BPM_FACTOR, SampleSet, TimingKind, TimingPoint, VELOCITY_BASE};
