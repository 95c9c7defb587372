//! Fixed limits and numeric constants shared across the controller.

/// Constants governing circuit capacity and rendering defaults.
pub mod quantalizer_constants {
    /// Maximum number of logical operations a circuit may hold.
    pub const MAX_OPERATIONS: usize = 10;
    /// Used for rotation angles (`m * π`)
    pub const PI: f64 = std::f64::consts::PI;
    /// Animation frames produced for each gate of a trajectory.
    pub const DEFAULT_FRAMES_PER_GATE: usize = 100;
    /// Allowed deviation of a norm from 1.0 before a state counts as degenerate.
    pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;
}
