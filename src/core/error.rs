//! Error handling logic

use thiserror::Error;

use crate::operations::RotationAxis;

/// Errors raised by the gate sequence controller and its collaborators.
///
/// None of these are fatal to the controller: a rejected command leaves the
/// circuit and the display exactly as they were.
#[derive(Debug, Error)]
pub enum QuantalizerError {
    /// An append was attempted while the circuit already holds the maximum
    /// number of operations. Normally prevented by control availability.
    #[error("Capacity exceeded: the circuit already holds {limit} operations")]
    CapacityExceeded {
        /// The fixed operation cap.
        limit: usize,
    },

    /// A main-flow command arrived while the angle selector is open.
    #[error("Angle selection for R{axis} is pending; select an angle or dismiss the selector first")]
    AngleSelectionPending {
        /// Axis of the rotation awaiting its angle.
        axis: RotationAxis,
    },

    /// An angle command arrived while no rotation is awaiting an angle.
    #[error("No rotation gate is awaiting an angle")]
    NoPendingRotation,

    /// The display tokens no longer correspond one-to-one with the operations.
    #[error("Display out of sync: {tokens} tokens shown for {operations} operations")]
    DisplayDesync {
        /// Number of tokens in the display buffer.
        tokens: usize,
        /// Number of logical operations in the circuit.
        operations: usize,
    },

    /// A rotation multiple outside the fixed menu.
    #[error("Invalid angle: {message}")]
    InvalidAngle {
        /// InvalidAngle failure message
        message: String,
    },

    /// A qubit state or Bloch vector left the unit sphere.
    #[error("Incoherent state: {message}")]
    Incoherence {
        /// Incoherence failure message
        message: String,
    },

    /// Settings file could not be parsed.
    #[error("Failed to parse settings: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Settings could not be written as TOML.
    #[error("Failed to serialize settings: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Circuit JSON could not be read or written.
    #[error("Circuit serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Signal returned by a renderer that cannot animate a gate sequence.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VisualizationError {
    /// There is no transition to animate.
    #[error("Nothing to visualize: the circuit holds no operations")]
    EmptyCircuit,

    #[error("At most {limit} gates can be visualized at once, got {count}")]
    TooManyGates {
        /// Number of gates handed to the renderer.
        count: usize,
        /// Largest sequence the renderer accepts.
        limit: usize,
    },

    /// A rotation angle was NaN or infinite.
    #[error("Gate {index} carries a non-finite rotation angle")]
    NonFiniteAngle {
        /// Position of the offending gate in the sequence.
        index: usize,
    },

    /// A trajectory point fell off the unit sphere.
    #[error("Degenerate trajectory at frame {frame}: Bloch vector norm is {norm:.6}")]
    DegenerateTrajectory {
        /// Index of the offending frame.
        frame: usize,
        /// Norm of the Bloch vector at that frame.
        norm: f64,
    },

    /// Failure reported by an external renderer.
    #[error("Renderer failure: {0}")]
    Renderer(String),
}
