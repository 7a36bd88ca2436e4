//! Validation and per-segment / aggregate metrics.
//!
//! This is the pre-compute stage: it normalizes a raw [`SegmentConfig`] list into
//! the derived quantities both solver passes need, and classifies which regime
//! (compression or expansion) applies.

use serde::{Deserialize, Serialize};

/// One segment's configuration, as supplied by the caller, in listed order.
///
/// Order is part of the contract: both solver passes are strictly sequential in
/// listed order, and ties are broken by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentConfig {
    /// Opaque identifier, carried through to the result for reporting only.
    pub name: String,
    /// Preferred distance before any compression or expansion is applied.
    pub base: f32,
    /// Fraction of `base` that may be given up under compression.
    pub compress_ratio: f32,
    /// Relative weight used to distribute surplus under expansion.
    pub expand_ratio: f32,
    /// Inclusive lower bound on the final distance.
    pub min: f32,
    /// Inclusive upper bound on the final distance.
    pub max: f32,
}

/// Validated, derived metrics for a single segment.
///
/// `segment_index` ties a metrics record back to its position in the original
/// `configs` slice, so solver passes can write results into a parallel output
/// array by index rather than through the original source's raw back-pointers.
#[derive(Debug, Clone, Copy)]
pub struct SegmentMetrics {
    pub segment_index: usize,
    pub min_v: f32,
    pub max_v: f32,
    pub base_v: f32,
    pub compress_ratio_v: f32,
    pub expand_ratio_v: f32,
    /// How much this segment may shrink from `base_v`.
    pub compress_capacity: f32,
    /// The floor pure compression cannot cross; the minimum may push higher.
    pub compress_solidify: f32,
}

/// Sums of the validated per-segment metrics across an active set of segments.
#[derive(Debug, Clone, Copy, Default)]
pub struct AggregateMetrics {
    pub accum_base: f32,
    pub accum_solidify: f32,
    pub accum_expand_ratio: f32,
}

/// Which solver pass applies to a validated input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// Container smaller than the aggregate preferred size.
    Compression,
    /// Container at least as large as the aggregate preferred size (includes
    /// the exact-fit case, where expansion is a no-op).
    Expansion,
}

/// The output of the validator / pre-compute stage.
pub struct ValidatedInput {
    pub input_distance: f32,
    pub metrics: Vec<SegmentMetrics>,
    pub aggregate: AggregateMetrics,
    pub regime: Regime,
}

/// Normalizes `configs` and `root_distance`, derives per-segment and aggregate
/// metrics, and classifies the regime.
///
/// Saturates rather than rejects pathological input: negative bounds, inverted
/// min/max, out-of-range base, and negative ratios are all clamped into a valid
/// range instead of producing an error (see the crate's error-handling notes).
pub fn validate_and_classify(configs: &[SegmentConfig], root_distance: f32) -> ValidatedInput {
    let input_distance = root_distance.max(0.0);
    let mut metrics = Vec::with_capacity(configs.len());
    let mut aggregate = AggregateMetrics::default();

    for (segment_index, cfg) in configs.iter().enumerate() {
        let min_v = cfg.min.max(0.0);
        let max_v = min_v.max(cfg.max);
        let base_v = cfg.base.clamp(min_v, max_v);
        let compress_ratio_v = cfg.compress_ratio.max(0.0);
        let expand_ratio_v = cfg.expand_ratio.max(0.0);

        let compress_capacity = base_v * compress_ratio_v;
        let compress_solidify = (base_v - compress_capacity).max(0.0);

        aggregate.accum_base += base_v;
        aggregate.accum_solidify += compress_solidify;
        aggregate.accum_expand_ratio += expand_ratio_v;

        metrics.push(SegmentMetrics {
            segment_index,
            min_v,
            max_v,
            base_v,
            compress_ratio_v,
            expand_ratio_v,
            compress_capacity,
            compress_solidify,
        });
    }

    let regime = if input_distance < aggregate.accum_base {
        Regime::Compression
    } else {
        Regime::Expansion
    };

    ValidatedInput {
        input_distance,
        metrics,
        aggregate,
        regime,
    }
}
