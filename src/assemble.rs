//! Result assembly: the solved per-segment output.

use serde::{Deserialize, Serialize};

/// A segment's solved layout: `distance = base + expand_delta` always holds.
///
/// In the compression regime `expand_delta` is always `0.0`; in the expansion
/// regime `base` always equals the validated preferred base. The two regimes
/// touch disjoint fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub name: String,
    pub base: f32,
    pub expand_delta: f32,
    pub distance: f32,
}

impl Segment {
    pub(crate) fn blank(name: String) -> Self {
        Self {
            name,
            base: 0.0,
            expand_delta: 0.0,
            distance: 0.0,
        }
    }
}

/// Writes a solved `(base, expand_delta)` pair into `out[segment_index]`,
/// deriving `distance` so the `distance = base + expand_delta` invariant
/// holds by construction. Both solver passes funnel their per-segment result
/// through this single entry point rather than writing the three fields
/// separately.
pub(crate) fn assemble(out: &mut [Segment], segment_index: usize, base: f32, expand_delta: f32) {
    let segment = &mut out[segment_index];
    segment.base = base;
    segment.expand_delta = expand_delta;
    segment.distance = base + expand_delta;
}

/// Sum of the final distances across all segments.
///
/// Under infeasible minima or an all-zero expand-ratio surplus, this may
/// legitimately differ from the requested root distance (accepted
/// overflow/under-fill, see the crate's error-handling notes); callers that
/// need an exact fill must check this themselves.
pub fn total_distance(segments: &[Segment]) -> f32 {
    segments.iter().map(|s| s.distance).sum()
}
