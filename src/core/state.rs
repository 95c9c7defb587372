// src/core/state.rs

use num_complex::Complex;
use num_traits::{One, Zero};
use std::fmt;

use super::bloch::BlochVector;

/// A 2x2 unitary acting on one qubit, row-major.
pub type Matrix2 = [[Complex<f64>; 2]; 2];

/// Pure state of the single qubit the circuit acts on.
///
/// Stored as the amplitude pair `[α, β]` of `α|0⟩ + β|1⟩`. Every circuit
/// starts from [`QubitState::zero`].
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct QubitState {
    amplitudes: [Complex<f64>; 2],
}

impl QubitState {
    /// The |0⟩ state, north pole of the Bloch sphere.
    pub fn zero() -> Self {
        Self {
            amplitudes: [Complex::one(), Complex::zero()],
        }
    }

    /// Builds a state from raw amplitudes. Normalization is not enforced here;
    /// see [`crate::validation::check_normalization`].
    pub fn from_amplitudes(alpha: Complex<f64>, beta: Complex<f64>) -> Self {
        Self { amplitudes: [alpha, beta] }
    }

    /// Read-only access to `[α, β]`.
    pub fn amplitudes(&self) -> &[Complex<f64>; 2] {
        &self.amplitudes
    }

    /// Applies `matrix` to the state: `[α', β'] = M · [α, β]`.
    pub fn apply_matrix(&mut self, matrix: &Matrix2) {
        let [psi_0, psi_1] = self.amplitudes;
        self.amplitudes = [
            matrix[0][0] * psi_0 + matrix[0][1] * psi_1,
            matrix[1][0] * psi_0 + matrix[1][1] * psi_1,
        ];
    }

    /// Sum of squared amplitude magnitudes.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum()
    }

    /// Projects the state onto the Bloch sphere.
    pub fn bloch_vector(&self) -> BlochVector {
        BlochVector::from_amplitudes(&self.amplitudes)
    }
}

impl Default for QubitState {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for QubitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.4})|0⟩ + ({:.4})|1⟩",
            self.amplitudes[0], self.amplitudes[1]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_zero_state_is_north_pole() {
        let bloch = QubitState::zero().bloch_vector();
        assert_abs_diff_eq!(bloch.z, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bloch.x, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_apply_flip_matrix() {
        let mut state = QubitState::zero();
        let flip: Matrix2 = [
            [Complex::zero(), Complex::one()],
            [Complex::one(), Complex::zero()],
        ];
        state.apply_matrix(&flip);
        assert_eq!(state.amplitudes()[1], Complex::one());
        assert_abs_diff_eq!(state.bloch_vector().z, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(state.norm_sqr(), 1.0, epsilon = 1e-12);
    }
}
