//! Ambient solver configuration.
//!
//! [`solve`](crate::solve) itself takes no configuration — it has no tunable
//! behavior per its specification. [`SolverConfig`] exists for the surfaces
//! around it: the demo CLI's fill reporting and the property tests' tolerance
//! for comparing a solved total against a requested root distance.

#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Tolerance used when comparing a solved total distance against the
    /// requested root distance.
    pub epsilon: f32,
}

pub const DEFAULT_SOLVER_CONFIG: SolverConfig = SolverConfig { epsilon: 1e-3 };
