//! Text serialization of a finished beatmap.
//!
//! Pure formatting: every decision (placement, classification, ordering)
//! has already been made by the time a [`Beatmap`] reaches this module.

use crate::beatmap::Beatmap;
use crate::hit_object::{HitObject, OBJECT_Y};
use crate::timing_point::{TimingKind, TimingPoint};

/// Render the whole beatmap: header properties, then one line per timing
/// point, then one line per hit object.
pub fn render(map: &Beatmap) -> String {
    let mut out = String::new();
    out.push_str(&format!("Title={}\n", map.title));
    out.push_str(&format!("Artist={}\n", map.artist));
    out.push_str(&format!("Creator={}\n", map.creator));
    out.push_str(&format!("Version={}\n", map.version));
    for point in &map.timing_points {
        out.push_str(&timing_point_line(point));
        out.push('\n');
    }
    for object in &map.hit_objects {
        out.push_str(&hit_object_line(object));
        out.push('\n');
    }
    out
}

/// One timing-point line:
/// `offset,gap,timeSignature,sampleSet,sampleSubset,volume,uninherited,effects`.
///
/// The second field carries the beat gap for normal points and the raw
/// velocity for inherited points. The `uninherited` flag is inverted
/// relative to the internal kind: 1 = normal, 0 = inherited.
pub fn timing_point_line(point: &TimingPoint) -> String {
    let (value, uninherited) = match point.kind {
        TimingKind::Normal { gap_ms } => (gap_ms, 1),
        TimingKind::Inherited { raw_velocity } => (raw_velocity, 0),
    };
    format!(
        "{},{},{},{},{},{},{},{}",
        point.offset_ms,
        value,
        point.time_signature,
        point.sample_set as u32,
        point.sample_subset,
        point.volume,
        uninherited,
        if point.omit_first_barline { 8 } else { 0 },
    )
}

/// One hit-object line: `x,192,time,type,0,extras`.
pub fn hit_object_line(object: &HitObject) -> String {
    let extras = match object.end_ms {
        Some(end_ms) => format!(
            "{}:0:0:0:{}:{}",
            end_ms, object.sample_volume, object.sample_file
        ),
        None => format!("0:0:0:{}:{}", object.sample_volume, object.sample_file),
    };
    format!(
        "{},{},{},{},0,{}",
        object.column_x(),
        OBJECT_Y,
        object.time_ms,
        object.shape.type_flag(),
        extras,
    )
}
