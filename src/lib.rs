//! Discadelta: a proportional layout solver for an ordered strip of segments.
//!
//! Given a container distance and an ordered list of [`SegmentConfig`]s,
//! [`solve`] partitions the container into a [`Segment`] per input, handling
//! two regimes: compression (the container is smaller than the aggregate
//! preferred size) and expansion (the container is at least as large). See
//! [`metrics`], [`compress`] and [`expand`] for the three stages of the
//! pipeline, and [`assemble`] for the output type.

pub mod assemble;
pub mod compress;
pub mod config;
pub mod error;
pub mod expand;
pub mod metrics;
pub mod util;

pub use assemble::{total_distance, Segment};
pub use config::{SolverConfig, DEFAULT_SOLVER_CONFIG};
pub use error::DiscadeltaError;
pub use metrics::{validate_and_classify, Regime, SegmentConfig};

use log::trace;

/// Partitions `root_distance` across `configs`, in listed order.
///
/// Pure function: single-threaded, O(N) per cascade pass (recursion depth
/// bounded by `configs.len()`), no I/O, and it never fails — pathological
/// input is resolved by saturation rather than by returning an error.
pub fn solve(configs: &[SegmentConfig], root_distance: f32) -> Vec<Segment> {
    let validated = metrics::validate_and_classify(configs, root_distance);
    let mut segments: Vec<Segment> = configs
        .iter()
        .map(|c| Segment::blank(c.name.clone()))
        .collect();

    trace!(
        "[SOLVE] {} segments, root_distance={:.3}, regime={:?}",
        segments.len(),
        validated.input_distance,
        validated.regime
    );

    match validated.regime {
        Regime::Compression => compress::solve_compression(
            validated.input_distance,
            &validated.metrics,
            validated.aggregate,
            &mut segments,
        ),
        Regime::Expansion => expand::solve_expansion(
            validated.input_distance,
            &validated.metrics,
            validated.aggregate,
            &mut segments,
        ),
    }

    segments
}
