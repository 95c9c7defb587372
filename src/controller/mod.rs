// src/controller/mod.rs

//! The gate sequence controller.
//!
//! One [`GateController`] owns the circuit, its display tokens and the
//! availability flag. The UI layer feeds it [`Command`]s; each command runs to
//! completion inside [`GateController::dispatch`] before the next is taken.
//!
//! The angle selector is modelled as an explicit [`Mode`]:
//!
//! ```text
//!  Main ──RequestParameterizedGate──▶ AwaitingAngle
//!   ▲                                   │
//!   └──────SelectAngle / Dismiss────────┘
//! ```
//!
//! While in `AwaitingAngle`, every main-flow command is refused.
//!
//! # Examples
//!
//! ```
//! use quantalizer::{
//!     AngleChoice, Availability, Command, FixedGate, GateController, HeadlessSurface,
//!     QuantalizerError, RotationAxis, Settings,
//! };
//!
//! # fn main() -> Result<(), QuantalizerError> {
//! let mut controller = GateController::from_settings(Settings::default(), HeadlessSurface::new());
//! controller.dispatch(Command::ApplyFixedGate(FixedGate::H))?;
//! controller.dispatch(Command::RequestParameterizedGate(RotationAxis::Z))?;
//! controller.dispatch(Command::SelectAngle(AngleChoice::QuarterPi))?;
//!
//! assert_eq!(controller.display().tokens(), ["h", "Rz"]);
//! assert_eq!(controller.availability(), Availability::Enabled);
//! # Ok(())
//! # }
//! ```

pub mod angle;
pub mod limit;

pub use angle::{AngleChoice, AngleSelector};
pub use limit::Availability;

use std::fmt;

use crate::circuits::CircuitState;
use crate::config::Settings;
use crate::core::QuantalizerError;
use crate::display::DisplayBuffer;
use crate::host::Surface;
use crate::operations::{FixedGate, GateOperation, RotationAxis};
use crate::simulation::{BlochTransitionRenderer, TrajectoryRenderer};
use crate::visualization::{VisualizationOutcome, VisualizationTrigger};

/// Commands the UI layer can send.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    ApplyFixedGate(FixedGate),
    /// Opens the angle selector for RX, RY or RZ.
    RequestParameterizedGate(RotationAxis),
    /// Valid only while the angle selector is open.
    SelectAngle(AngleChoice),
    DismissAngleSelector,
    Clear,
    Visualize,
}

impl Command {
    /// Whether the command belongs to the main flow (blocked by the selector).
    pub fn is_main_flow(&self) -> bool {
        !matches!(self, Command::SelectAngle(_) | Command::DismissAngleSelector)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::ApplyFixedGate(gate) => write!(f, "ApplyFixedGate({})", gate),
            Command::RequestParameterizedGate(axis) => write!(f, "RequestParameterizedGate({})", axis),
            Command::SelectAngle(choice) => write!(f, "SelectAngle({})", choice),
            Command::DismissAngleSelector => write!(f, "DismissAngleSelector"),
            Command::Clear => write!(f, "Clear"),
            Command::Visualize => write!(f, "Visualize"),
        }
    }
}

/// Where the controller is in its two-state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Main,
    AwaitingAngle(AngleSelector),
}

/// What an accepted command did.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// An operation was appended and its token recorded.
    Applied {
        operation: GateOperation,
        availability: Availability,
    },
    AngleSelectorOpened {
        axis: RotationAxis,
    },
    /// The pending rotation was abandoned; nothing was appended.
    AngleSelectorDismissed {
        axis: RotationAxis,
    },
    Cleared,
    Visualized(VisualizationOutcome),
}

/// Owns the circuit, the display, the availability flag and the renderer.
pub struct GateController<R: TrajectoryRenderer, S: Surface> {
    settings: Settings,
    circuit: CircuitState,
    display: DisplayBuffer,
    availability: Availability,
    mode: Mode,
    trigger: VisualizationTrigger<R>,
    surface: S,
}

impl<R: TrajectoryRenderer, S: Surface> GateController<R, S> {
    /// Creates a controller with an empty circuit and pushes the initial
    /// (empty, enabled) view to `surface`.
    pub fn new(settings: Settings, renderer: R, surface: S) -> Self {
        let mut controller = Self {
            settings,
            circuit: CircuitState::new(),
            display: DisplayBuffer::new(),
            availability: Availability::Enabled,
            mode: Mode::Main,
            trigger: VisualizationTrigger::new(renderer),
            surface,
        };
        controller.publish();
        controller
    }

    /// Runs one command to completion.
    ///
    /// # Errors
    /// Rejections are returned as errors and leave every piece of state
    /// untouched:
    /// * `AngleSelectionPending` for a main-flow command while the selector is open.
    /// * `NoPendingRotation` for an angle command while no selector is open.
    /// * `CapacityExceeded` for a gate command once the circuit is full.
    pub fn dispatch(&mut self, command: Command) -> Result<Response, QuantalizerError> {
        if let Mode::AwaitingAngle(selector) = self.mode {
            if command.is_main_flow() {
                tracing::warn!("Refusing {} while R{} awaits an angle", command, selector.axis());
                return Err(QuantalizerError::AngleSelectionPending { axis: selector.axis() });
            }
        }

        let result = match command {
            Command::ApplyFixedGate(gate) => self.apply_fixed_gate(gate),
            Command::RequestParameterizedGate(axis) => self.request_parameterized_gate(axis),
            Command::SelectAngle(choice) => self.select_angle(choice),
            Command::DismissAngleSelector => self.dismiss_angle_selector(),
            Command::Clear => Ok(self.clear()),
            Command::Visualize => Ok(self.visualize()),
        };
        if let Err(e) = &result {
            tracing::warn!("Rejected {}: {}", command, e);
        }
        result
    }

    fn apply_fixed_gate(&mut self, gate: FixedGate) -> Result<Response, QuantalizerError> {
        self.append(GateOperation::fixed(gate))
    }

    fn request_parameterized_gate(&mut self, axis: RotationAxis) -> Result<Response, QuantalizerError> {
        self.ensure_capacity()?;
        self.mode = Mode::AwaitingAngle(AngleSelector::open(axis));
        tracing::debug!("Angle selector opened for R{}", axis);
        Ok(Response::AngleSelectorOpened { axis })
    }

    fn select_angle(&mut self, choice: AngleChoice) -> Result<Response, QuantalizerError> {
        let Mode::AwaitingAngle(selector) = self.mode else {
            return Err(QuantalizerError::NoPendingRotation);
        };
        let operation = selector.select(choice, self.settings.angle_menu);
        let response = self.append(operation)?;
        self.mode = Mode::Main;
        Ok(response)
    }

    fn dismiss_angle_selector(&mut self) -> Result<Response, QuantalizerError> {
        let Mode::AwaitingAngle(selector) = self.mode else {
            return Err(QuantalizerError::NoPendingRotation);
        };
        let axis = selector.dismiss();
        self.mode = Mode::Main;
        tracing::debug!("Angle selector for R{} dismissed", axis);
        Ok(Response::AngleSelectorDismissed { axis })
    }

    fn clear(&mut self) -> Response {
        self.circuit.reset();
        self.display.clear();
        self.mode = Mode::Main;
        self.publish();
        tracing::info!("Circuit cleared");
        Response::Cleared
    }

    fn visualize(&mut self) -> Response {
        Response::Visualized(self.trigger.visualize(&self.circuit, &mut self.surface))
    }

    fn ensure_capacity(&self) -> Result<(), QuantalizerError> {
        if self.circuit.is_full() {
            return Err(QuantalizerError::CapacityExceeded {
                limit: crate::core::MAX_OPERATIONS,
            });
        }
        Ok(())
    }

    /// Appends one operation and its token, then re-evaluates availability.
    /// Both checks run before anything is written.
    fn append(&mut self, operation: GateOperation) -> Result<Response, QuantalizerError> {
        self.ensure_capacity()?;
        self.display.check_append(self.circuit.len(), operation.token())?;
        self.circuit.apply(operation)?;
        self.display.record(operation.token());
        self.publish();
        tracing::debug!(
            operations = self.circuit.len(),
            availability = %self.availability,
            "Applied {}",
            operation
        );
        Ok(Response::Applied {
            operation,
            availability: self.availability,
        })
    }

    /// Recomputes availability and pushes tokens and the flag to the surface.
    fn publish(&mut self) {
        self.availability = limit::evaluate(&self.circuit);
        self.surface.show_tokens(self.display.tokens());
        self.surface.set_availability(self.availability);
    }

    pub fn circuit(&self) -> &CircuitState {
        &self.circuit
    }

    pub fn display(&self) -> &DisplayBuffer {
        &self.display
    }

    pub fn availability(&self) -> Availability {
        self.availability
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn renderer(&self) -> &R {
        self.trigger.renderer()
    }

    /// Output of the last successful render.
    pub fn last_render(&self) -> Option<&R::Output> {
        self.trigger.last_output()
    }
}

impl<S: Surface> GateController<BlochTransitionRenderer, S> {
    /// Creates a controller whose built-in renderer is tuned by
    /// `settings.renderer`.
    pub fn from_settings(settings: Settings, surface: S) -> Self {
        let renderer = BlochTransitionRenderer::new(settings.renderer.clone());
        Self::new(settings, renderer, surface)
    }
}
