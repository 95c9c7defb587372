//! Points on the Bloch sphere and rotations between them.
//!
//! Any pure single-qubit state `cos(θ/2)|0⟩ + e^(iφ)sin(θ/2)|1⟩` maps to a
//! unit vector; a gate is a rigid rotation of that vector.

use num_complex::Complex;
use std::fmt;

/// A point on (or, for broken states, near) the Bloch sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlochVector {
    pub x: f64,
    pub y: f64,
    /// +Z is |0⟩ and -Z is |1⟩
    pub z: f64,
}

impl BlochVector {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Converts `[α, β]` using Pauli expectation values:
    /// `x = 2Re(α*β)`, `y = 2Im(α*β)`, `z = |α|² - |β|²`.
    pub fn from_amplitudes(amplitudes: &[Complex<f64>; 2]) -> Self {
        let [alpha, beta] = *amplitudes;
        let alpha_conj_beta = alpha.conj() * beta;
        Self {
            x: 2.0 * alpha_conj_beta.re,
            y: 2.0 * alpha_conj_beta.im,
            z: alpha.norm_sqr() - beta.norm_sqr(),
        }
    }

    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn dot(&self, other: &BlochVector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &BlochVector) -> BlochVector {
        BlochVector {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Rotates this vector by `angle` radians about the unit vector `axis`
    /// (Rodrigues' formula).
    pub fn rotated(&self, axis: &BlochVector, angle: f64) -> BlochVector {
        let (sin, cos) = angle.sin_cos();
        let k_cross_v = axis.cross(self);
        let k_dot_v = axis.dot(self);
        BlochVector {
            x: self.x * cos + k_cross_v.x * sin + axis.x * k_dot_v * (1.0 - cos),
            y: self.y * cos + k_cross_v.y * sin + axis.y * k_dot_v * (1.0 - cos),
            z: self.z * cos + k_cross_v.z * sin + axis.z * k_dot_v * (1.0 - cos),
        }
    }
}

impl fmt::Display for BlochVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}
