//! Expansion solver: distributes a surplus across segments in proportion to
//! their expand weight, greedy in listed order.

use crate::assemble::{assemble, Segment};
use crate::metrics::{AggregateMetrics, SegmentMetrics};

/// Runs the expansion solver, writing `(base, expand_delta, distance)` into
/// `out` for every segment named in `metrics`.
///
/// Maxima are not enforced here: a segment with a large `expand_ratio_v` can
/// grow past its `max_v`. This matches the source this solver was distilled
/// from; a symmetric cascaded re-solve against upper bounds would be needed to
/// change it (see the crate's design notes).
pub fn solve_expansion(
    input_distance: f32,
    metrics: &[SegmentMetrics],
    aggregate: AggregateMetrics,
    out: &mut [Segment],
) {
    let mut remain_surplus = (input_distance - aggregate.accum_base).max(0.0);
    let mut remain_ratio = aggregate.accum_expand_ratio;

    for m in metrics {
        let delta = if remain_ratio <= 0.0 || m.expand_ratio_v <= 0.0 {
            0.0
        } else {
            (remain_surplus / remain_ratio) * m.expand_ratio_v
        };

        assemble(out, m.segment_index, m.base_v, delta);

        remain_surplus -= delta;
        remain_ratio -= m.expand_ratio_v;
    }
}
