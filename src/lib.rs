// src/lib.rs

//! `quantalizer` - Compose single-qubit gate sequences and hand them to a
//! Bloch sphere renderer.
//!
//! The [`GateController`] is the heart of the crate: it tracks the gates a
//! user presses, mirrors them as display tokens, stops accepting gates at ten
//! operations, runs the angle menu for rotation gates, and closes the window
//! when a sequence cannot be visualized.

pub mod core;
pub mod operations;
pub mod circuits;
pub mod display;
pub mod controller;
pub mod simulation;
pub mod validation;
pub mod visualization;
pub mod host;
pub mod config;

// Re-export the most common types for easier top-level use
pub use crate::core::{BlochVector, QubitState, QuantalizerError, VisualizationError, MAX_OPERATIONS};
pub use crate::operations::{FixedGate, GateOperation, RotationAxis};
pub use crate::circuits::{CircuitBuilder, CircuitState};
pub use crate::display::DisplayBuffer;
pub use crate::controller::{AngleChoice, Availability, Command, GateController, Mode, Response};
pub use crate::simulation::{BlochTransitionRenderer, Trajectory, TrajectoryRenderer};
pub use crate::visualization::VisualizationOutcome;
pub use crate::host::{HeadlessSurface, Surface};
pub use crate::config::{AngleMenuPolicy, Settings};

// Example: a five-gate session ending in a visualization.
/// ```
/// use quantalizer::{
///     AngleChoice, Availability, Command, FixedGate, GateController, HeadlessSurface,
///     QuantalizerError, Response, RotationAxis, Settings, VisualizationOutcome,
/// };
///
/// # fn main() -> Result<(), QuantalizerError> {
/// let mut controller = GateController::from_settings(Settings::default(), HeadlessSurface::new());
///
/// for gate in [FixedGate::X, FixedGate::H, FixedGate::S, FixedGate::T] {
///     controller.dispatch(Command::ApplyFixedGate(gate))?;
/// }
/// controller.dispatch(Command::RequestParameterizedGate(RotationAxis::X))?;
/// controller.dispatch(Command::SelectAngle(AngleChoice::HalfPi))?;
///
/// assert_eq!(controller.display().text(), "xhSTRx");
/// assert_eq!(controller.circuit().len(), 5);
/// assert_eq!(controller.availability(), Availability::Enabled);
///
/// let response = controller.dispatch(Command::Visualize)?;
/// assert_eq!(response, Response::Visualized(VisualizationOutcome::Rendered { operations: 5 }));
/// println!("{}", controller.circuit());
/// # Ok(())
/// # }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
