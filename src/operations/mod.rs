// src/operations/mod.rs

//! The gate catalog: every single-qubit operation a user can press, its
//! display token, its unitary and its rotation on the Bloch sphere.
//!
//! Fixed gates carry no parameters. The three rotation gates carry an angle
//! `theta` in radians chosen through the angle selector.

pub mod catalog;

pub use catalog::{ControlKind, GateControl, catalog};

use num_complex::Complex;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4, PI};
use std::fmt;

use crate::core::{BlochVector, Matrix2};

/// Gates without parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FixedGate {
    #[serde(rename = "x")]
    X,
    #[serde(rename = "y")]
    Y,
    #[serde(rename = "z")]
    Z,
    #[serde(rename = "h")]
    H,
    #[serde(rename = "s")]
    S,
    #[serde(rename = "sdg")]
    SDagger,
    #[serde(rename = "t")]
    T,
    #[serde(rename = "tdg")]
    TDagger,
}

impl FixedGate {
    /// All fixed gates, in catalog order.
    pub const ALL: [FixedGate; 8] = [
        FixedGate::X,
        FixedGate::Y,
        FixedGate::Z,
        FixedGate::H,
        FixedGate::S,
        FixedGate::SDagger,
        FixedGate::T,
        FixedGate::TDagger,
    ];

    /// Token appended to the display when this gate is applied.
    pub fn token(&self) -> &'static str {
        match self {
            FixedGate::X => "x",
            FixedGate::Y => "y",
            FixedGate::Z => "z",
            FixedGate::H => "h",
            FixedGate::S => "S",
            FixedGate::SDagger => "S†",
            FixedGate::T => "T",
            FixedGate::TDagger => "T†",
        }
    }

    pub fn matrix(&self) -> Matrix2 {
        let i = Complex::i();
        let one = Complex::one();
        let zero = Complex::zero();
        match self {
            FixedGate::X => [[zero, one], [one, zero]],
            FixedGate::Y => [[zero, -i], [i, zero]],
            FixedGate::Z => [[one, zero], [zero, -one]],
            FixedGate::H => {
                let h = Complex::new(FRAC_1_SQRT_2, 0.0);
                [[h, h], [h, -h]]
            }
            FixedGate::S => [[one, zero], [zero, i]],
            FixedGate::SDagger => [[one, zero], [zero, -i]],
            FixedGate::T => [[one, zero], [zero, Complex::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2)]],
            FixedGate::TDagger => [[one, zero], [zero, Complex::new(FRAC_1_SQRT_2, -FRAC_1_SQRT_2)]],
        }
    }

    /// Rotation axis and angle this gate performs on the Bloch sphere.
    pub fn bloch_rotation(&self) -> (BlochVector, f64) {
        let z_axis = RotationAxis::Z.unit_vector();
        match self {
            FixedGate::X => (RotationAxis::X.unit_vector(), PI),
            FixedGate::Y => (RotationAxis::Y.unit_vector(), PI),
            FixedGate::Z => (z_axis, PI),
            // Hadamard is a half turn about the diagonal between x and z.
            FixedGate::H => (BlochVector::new(FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2), PI),
            FixedGate::S => (z_axis, FRAC_PI_2),
            FixedGate::SDagger => (z_axis, -FRAC_PI_2),
            FixedGate::T => (z_axis, FRAC_PI_4),
            FixedGate::TDagger => (z_axis, -FRAC_PI_4),
        }
    }
}

impl fmt::Display for FixedGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FixedGate::X => "X",
            FixedGate::Y => "Y",
            FixedGate::Z => "Z",
            FixedGate::H => "H",
            FixedGate::S => "S",
            FixedGate::SDagger => "S†",
            FixedGate::T => "T",
            FixedGate::TDagger => "T†",
        };
        f.write_str(name)
    }
}

/// Axis of a parameterized rotation gate (RX, RY, RZ).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationAxis {
    X,
    Y,
    Z,
}

impl RotationAxis {
    pub const ALL: [RotationAxis; 3] = [RotationAxis::X, RotationAxis::Y, RotationAxis::Z];

    /// Display token; the leading `R` is the rotation-prefix marker.
    pub fn token(&self) -> &'static str {
        match self {
            RotationAxis::X => "Rx",
            RotationAxis::Y => "Ry",
            RotationAxis::Z => "Rz",
        }
    }

    pub fn unit_vector(&self) -> BlochVector {
        match self {
            RotationAxis::X => BlochVector::new(1.0, 0.0, 0.0),
            RotationAxis::Y => BlochVector::new(0.0, 1.0, 0.0),
            RotationAxis::Z => BlochVector::new(0.0, 0.0, 1.0),
        }
    }

    /// `exp(-iθσ/2)` for this axis.
    pub fn matrix(&self, theta: f64) -> Matrix2 {
        let half = theta / 2.0;
        let (sin_a, cos_a) = half.sin_cos();
        let i = Complex::i();
        let zero = Complex::zero();
        match self {
            RotationAxis::X => [
                [Complex::new(cos_a, 0.0), -i * sin_a],
                [-i * sin_a, Complex::new(cos_a, 0.0)],
            ],
            RotationAxis::Y => [
                [Complex::new(cos_a, 0.0), Complex::new(-sin_a, 0.0)],
                [Complex::new(sin_a, 0.0), Complex::new(cos_a, 0.0)],
            ],
            RotationAxis::Z => [
                [Complex::new(cos_a, -sin_a), zero],
                [zero, Complex::new(cos_a, sin_a)],
            ],
        }
    }
}

impl fmt::Display for RotationAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RotationAxis::X => "X",
            RotationAxis::Y => "Y",
            RotationAxis::Z => "Z",
        };
        f.write_str(name)
    }
}

/// One logical operation applied to the qubit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)] // f64 angle rules out Eq
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GateOperation {
    /// A gate from the fixed set.
    Fixed {
        gate: FixedGate,
    },
    /// RX, RY or RZ by `theta` radians.
    Rotation {
        axis: RotationAxis,
        theta: f64,
    },
}

impl GateOperation {
    pub fn fixed(gate: FixedGate) -> Self {
        GateOperation::Fixed { gate }
    }

    pub fn rotation(axis: RotationAxis, theta: f64) -> Self {
        GateOperation::Rotation { axis, theta }
    }

    /// Canonical display token.
    pub fn token(&self) -> &'static str {
        match self {
            GateOperation::Fixed { gate } => gate.token(),
            GateOperation::Rotation { axis, .. } => axis.token(),
        }
    }

    /// The rotation angle, for parameterized gates only.
    pub fn theta(&self) -> Option<f64> {
        match self {
            GateOperation::Fixed { .. } => None,
            GateOperation::Rotation { theta, .. } => Some(*theta),
        }
    }

    /// Unitary of this operation.
    pub fn matrix(&self) -> Matrix2 {
        match self {
            GateOperation::Fixed { gate } => gate.matrix(),
            GateOperation::Rotation { axis, theta } => axis.matrix(*theta),
        }
    }

    /// Axis and signed angle of the equivalent Bloch sphere rotation.
    pub fn bloch_rotation(&self) -> (BlochVector, f64) {
        match self {
            GateOperation::Fixed { gate } => gate.bloch_rotation(),
            GateOperation::Rotation { axis, theta } => (axis.unit_vector(), *theta),
        }
    }
}

impl fmt::Display for GateOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateOperation::Fixed { gate } => write!(f, "{}", gate),
            GateOperation::Rotation { axis, theta } => write!(f, "R{}({:.4})", axis, theta),
        }
    }
}
