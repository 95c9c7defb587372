//! The visualization trigger: hands the finished circuit to a renderer and
//! applies the fail-fast policy when rendering is impossible.

use std::fmt;

use crate::circuits::CircuitState;
use crate::core::VisualizationError;
use crate::host::Surface;
use crate::simulation::TrajectoryRenderer;

/// Result of one `Visualize` command, as seen by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum VisualizationOutcome {
    /// The renderer accepted the sequence.
    Rendered {
        /// Number of operations handed over.
        operations: usize,
    },
    /// The renderer refused the sequence and the hosting window was closed.
    WindowClosed {
        reason: VisualizationError,
    },
}

impl VisualizationOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, VisualizationOutcome::Rendered { .. })
    }
}

impl fmt::Display for VisualizationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisualizationOutcome::Rendered { operations } => write!(f, "rendered {} operations", operations),
            VisualizationOutcome::WindowClosed { reason } => write!(f, "window closed: {}", reason),
        }
    }
}

/// Owns the renderer and keeps the output of its last successful render.
pub struct VisualizationTrigger<R: TrajectoryRenderer> {
    renderer: R,
    last_output: Option<R::Output>,
}

impl<R: TrajectoryRenderer> VisualizationTrigger<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer, last_output: None }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Output of the most recent successful render.
    pub fn last_output(&self) -> Option<&R::Output> {
        self.last_output.as_ref()
    }

    /// Renders `circuit`. A `VisualizationError` closes the window through
    /// `surface`; it is never returned to the caller. The circuit itself is
    /// only read.
    pub fn visualize<S: Surface>(&mut self, circuit: &CircuitState, surface: &mut S) -> VisualizationOutcome {
        match self.renderer.render(circuit.operations()) {
            Ok(output) => {
                tracing::info!(operations = circuit.len(), "visualization rendered");
                self.last_output = Some(output);
                VisualizationOutcome::Rendered { operations: circuit.len() }
            }
            Err(reason) => {
                tracing::error!("Visualization failed, closing window: {}", reason);
                surface.close_window(&reason);
                VisualizationOutcome::WindowClosed { reason }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HeadlessSurface;
    use crate::operations::{FixedGate, GateOperation};
    use crate::simulation::BlochTransitionRenderer;

    #[test]
    fn test_failure_closes_window() {
        let mut trigger = VisualizationTrigger::new(BlochTransitionRenderer::default());
        let mut surface = HeadlessSurface::new();
        let outcome = trigger.visualize(&CircuitState::new(), &mut surface);
        assert_eq!(outcome, VisualizationOutcome::WindowClosed { reason: VisualizationError::EmptyCircuit });
        assert!(surface.is_closed());
        assert!(trigger.last_output().is_none());
    }

    #[test]
    fn test_success_keeps_window_open() -> Result<(), crate::core::QuantalizerError> {
        let mut circuit = CircuitState::new();
        circuit.apply(GateOperation::fixed(FixedGate::H))?;
        let mut trigger = VisualizationTrigger::new(BlochTransitionRenderer::default());
        let mut surface = HeadlessSurface::new();
        let outcome = trigger.visualize(&circuit, &mut surface);
        assert!(outcome.is_rendered());
        assert!(!surface.is_closed());
        assert_eq!(trigger.last_output().map(|t| t.gate_count()), Some(1));
        Ok(())
    }
}
