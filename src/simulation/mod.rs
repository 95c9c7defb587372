// src/simulation/mod.rs

//! Reconstructs the Bloch sphere trajectory of a gate sequence.
//!
//! The [`TrajectoryRenderer`] trait is the boundary to whatever animates the
//! sequence. [`BlochTransitionRenderer`] is the built-in implementation: it
//! turns every gate into a rigid rotation of the Bloch vector and samples
//! that rotation into frames, cross-checking the end point against the
//! state-vector evolution in [`engine`].

mod trajectory;
pub mod engine;

pub use trajectory::Trajectory;

use crate::config::RendererSettings;
use crate::core::{BlochVector, MAX_OPERATIONS, VisualizationError};
use crate::operations::GateOperation;
use crate::validation::{check_bloch_vector, check_normalization};

/// Anything that can animate an ordered gate sequence starting from |0⟩.
pub trait TrajectoryRenderer {
    /// What a successful render produces. Opaque to the controller.
    type Output;

    /// Renders `operations`, or reports that the transition cannot be drawn.
    fn render(&mut self, operations: &[GateOperation]) -> Result<Self::Output, VisualizationError>;
}

/// Renders gate sequences into sampled Bloch vector trajectories.
#[derive(Debug, Clone, Default)]
pub struct BlochTransitionRenderer {
    settings: RendererSettings,
}

impl BlochTransitionRenderer {
    pub fn new(settings: RendererSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &RendererSettings {
        &self.settings
    }

    /// Checks the sequence can be animated at all, before any frame is built.
    fn check_sequence(operations: &[GateOperation]) -> Result<(), VisualizationError> {
        if operations.is_empty() {
            return Err(VisualizationError::EmptyCircuit);
        }
        if operations.len() > MAX_OPERATIONS {
            return Err(VisualizationError::TooManyGates {
                count: operations.len(),
                limit: MAX_OPERATIONS,
            });
        }
        if let Some(index) = operations
            .iter()
            .position(|op| op.theta().is_some_and(|theta| !theta.is_finite()))
        {
            return Err(VisualizationError::NonFiniteAngle { index });
        }
        Ok(())
    }
}

impl TrajectoryRenderer for BlochTransitionRenderer {
    type Output = Trajectory;

    fn render(&mut self, operations: &[GateOperation]) -> Result<Trajectory, VisualizationError> {
        Self::check_sequence(operations)?;

        let frames_per_gate = self.settings.frames_per_gate.max(1);
        let tolerance = Some(self.settings.norm_tolerance);
        let mut frames = Vec::with_capacity(operations.len() * frames_per_gate + 1);
        let mut current = BlochVector::new(0.0, 0.0, 1.0);
        frames.push(current);

        for op in operations {
            let (axis, angle) = op.bloch_rotation();
            let start = current;
            for step in 1..=frames_per_gate {
                let fraction = step as f64 / frames_per_gate as f64;
                let point = start.rotated(&axis, angle * fraction);
                if check_bloch_vector(&point, tolerance).is_err() {
                    return Err(VisualizationError::DegenerateTrajectory {
                        frame: frames.len(),
                        norm: point.norm(),
                    });
                }
                frames.push(point);
                current = point;
            }
        }

        // The sampled path must land where the unitary evolution does.
        let final_state = engine::evolve(operations);
        check_normalization(&final_state, tolerance)
            .map_err(|e| VisualizationError::Renderer(e.to_string()))?;
        let expected = final_state.bloch_vector();
        let deviation = ((current.x - expected.x).powi(2)
            + (current.y - expected.y).powi(2)
            + (current.z - expected.z).powi(2))
        .sqrt();
        if deviation > self.settings.norm_tolerance {
            return Err(VisualizationError::Renderer(format!(
                "trajectory ends at {} but the state evolves to {}",
                current, expected
            )));
        }

        tracing::debug!(
            gates = operations.len(),
            frames = frames.len(),
            "rendered Bloch trajectory"
        );
        Ok(Trajectory::new(frames, frames_per_gate))
    }
}
