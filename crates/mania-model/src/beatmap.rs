use serde::{Deserialize, Serialize};

use crate::hit_object::{HitObject, HitShape};
use crate::timing_point::TimingPoint;

/// Complete converted beatmap
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Beatmap {
    pub title: String,
    pub artist: String,
    pub creator: String,
    /// Difficulty name
    pub version: String,
    /// Number of mania columns
    pub keys: usize,
    /// Hit objects in placement order (time, then track)
    pub hit_objects: Vec<HitObject>,
    /// Timing points in non-decreasing offset order
    pub timing_points: Vec<TimingPoint>,
}

impl Beatmap {
    pub fn circle_count(&self) -> usize {
        self.hit_objects
            .iter()
            .filter(|h| h.shape == HitShape::Circle)
            .count()
    }

    pub fn hold_count(&self) -> usize {
        self.hit_objects
            .iter()
            .filter(|h| h.shape == HitShape::Hold)
            .count()
    }

    /// Time of the last hit object in milliseconds, including hold ends
    pub fn last_object_ms(&self) -> i64 {
        self.hit_objects
            .iter()
            .map(|h| h.end_ms.unwrap_or(h.time_ms))
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_by_shape() {
        let map = Beatmap {
            hit_objects: vec![
                HitObject::circle(0, 1),
                HitObject::hold(100, 2),
                HitObject::circle(200, 1),
            ],
            ..Default::default()
        };
        assert_eq!(map.circle_count(), 2);
        assert_eq!(map.hold_count(), 1);
        assert_eq!(map.last_object_ms(), 200);
    }

    #[test]
    fn last_object_includes_hold_end() {
        let map = Beatmap {
            hit_objects: vec![HitObject::hold(100, 1).with_end(900).unwrap()],
            ..Default::default()
        };
        assert_eq!(map.last_object_ms(), 900);
    }

    #[test]
    fn empty_map_last_object_is_zero() {
        assert_eq!(Beatmap::default().last_object_ms(), 0);
    }
}
