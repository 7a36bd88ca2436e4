//! Compression solver: distributes a deficit across segments in proportion to
//! their compressible capacity, honoring minimums via a cascaded re-solve.

use crate::assemble::{assemble, Segment};
use crate::metrics::{AggregateMetrics, SegmentMetrics};
use log::trace;

/// Result of a single (non-cascaded) pass over an active set of segments.
struct PassResult {
    final_value: f32,
    /// True once this segment must be excluded from the next cascade round:
    /// either the minimum clamp fired (`final_value > raw`), or the segment
    /// had no compressible capacity to begin with.
    fixed: bool,
}

/// The single-pass inner algorithm: one left-to-right sweep that
/// proportionally distributes `input_distance` across `segments` in proportion
/// to `compress_capacity`, clamping each segment to its minimum as it goes.
fn single_pass(
    segments: &[SegmentMetrics],
    input_distance: f32,
    aggregate: AggregateMetrics,
) -> Vec<PassResult> {
    let mut remain_distance = input_distance;
    let mut remain_base = aggregate.accum_base;
    let mut remain_solidify = aggregate.accum_solidify;

    let mut results = Vec::with_capacity(segments.len());

    for m in segments {
        let share_space = remain_distance - remain_solidify;
        let share_capacity = remain_base - remain_solidify;

        let raw = if share_space <= 0.0 || share_capacity <= 0.0 || m.compress_capacity <= 0.0 {
            m.compress_solidify
        } else {
            (share_space / share_capacity) * m.compress_capacity + m.compress_solidify
        };

        let final_value = raw.max(m.min_v);
        let fixed = final_value > raw || m.compress_capacity <= 0.0;

        remain_distance -= final_value;
        remain_solidify -= m.compress_solidify;
        remain_base -= m.base_v;

        results.push(PassResult { final_value, fixed });
    }

    results
}

/// Runs the compression solver, writing `(base, expand_delta, distance)` into
/// `out` for every segment named in `metrics`.
///
/// Recurses whenever a pass fixes at least one segment to its minimum: the
/// fixed segments consume deterministic space, and the proportional split
/// among the segments still eligible to donate must be recomputed against the
/// reduced input distance. Recursion depth is bounded by the segment count,
/// since each recursive call strictly shrinks the active set.
pub fn solve_compression(
    input_distance: f32,
    metrics: &[SegmentMetrics],
    aggregate: AggregateMetrics,
    out: &mut [Segment],
) {
    trace!(
        "[CASCADE] pass over {} active segments, input_distance={:.3}",
        metrics.len(),
        input_distance
    );

    let results = single_pass(metrics, input_distance, aggregate);

    let mut any_fixed = false;
    let mut fixed_sum = 0.0f32;
    let mut pending: Vec<(SegmentMetrics, f32)> = Vec::new();

    for (m, r) in metrics.iter().zip(results.into_iter()) {
        if r.fixed {
            any_fixed = true;
            fixed_sum += r.final_value;
            assemble(out, m.segment_index, r.final_value, 0.0);
        } else {
            pending.push((*m, r.final_value));
        }
    }

    if pending.is_empty() {
        return;
    }

    if !any_fixed {
        for (m, value) in pending {
            assemble(out, m.segment_index, value, 0.0);
        }
        return;
    }

    let mut next_aggregate = AggregateMetrics::default();
    let next_metrics: Vec<SegmentMetrics> = pending
        .into_iter()
        .map(|(m, _)| {
            next_aggregate.accum_base += m.base_v;
            next_aggregate.accum_solidify += m.compress_solidify;
            next_aggregate.accum_expand_ratio += m.expand_ratio_v;
            m
        })
        .collect();

    solve_compression(input_distance - fixed_sum, &next_metrics, next_aggregate, out);
}
