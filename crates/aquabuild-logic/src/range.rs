//! Numeric interval intersection.
//!
//! Every water-chemistry axis (temperature, pH, hardness) is a closed
//! `[min, max]` range on a species. The safe envelope for a community is the
//! intersection of all individual ranges; an empty intersection means no
//! single water value satisfies every inhabitant.

use serde::{Deserialize, Serialize};

/// A closed numeric range `[min, max]` over one physical quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Width of the range. Zero-width ranges are valid (a single viable value).
    pub fn width(self) -> f32 {
        self.max - self.min
    }

    pub fn contains(self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Intersect all ranges: `{max of mins, min of maxes}` when that is still a
/// valid range, `None` when the ranges have no common value.
///
/// An empty slice also returns `None`; callers guard with "no inhabitants
/// means no envelope to compute".
pub fn overlap(ranges: &[Range]) -> Option<Range> {
    let first = ranges.first()?;
    let mut min = first.min;
    let mut max = first.max;

    for r in ranges {
        min = min.max(r.min);
        max = max.min(r.max);
    }

    if min > max {
        None
    } else {
        Some(Range { min, max })
    }
}
