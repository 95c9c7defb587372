// src/validation/mod.rs

//! Provides functions to validate qubit states and Bloch vectors.

use crate::core::{BlochVector, DEFAULT_NORM_TOLERANCE, QuantalizerError, QubitState};

/// Checks if the state vector is normalized (sum of squared amplitudes ≈ 1.0).
///
/// # Arguments
/// * `state` - The `QubitState` to check.
/// * `tolerance` - Allowed deviation from 1.0; defaults to `DEFAULT_NORM_TOLERANCE`.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(QuantalizerError::Incoherence)` if normalization fails.
pub fn check_normalization(state: &QubitState, tolerance: Option<f64>) -> Result<(), QuantalizerError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm_sq = state.norm_sqr();
    if !norm_sq.is_finite() || (norm_sq - 1.0).abs() > effective_tolerance {
        Err(QuantalizerError::Incoherence {
            message: format!(
                "State vector normalization failed. Sum(|c_i|^2) = {} (Deviation > {})",
                norm_sq, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}

/// Checks that a Bloch vector lies on the unit sphere.
///
/// # Returns
/// * `Err(QuantalizerError::Incoherence)` if any component is non-finite or
///   the norm deviates from 1.0 by more than `tolerance`.
pub fn check_bloch_vector(vector: &BlochVector, tolerance: Option<f64>) -> Result<(), QuantalizerError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    if !vector.is_finite() || (vector.norm() - 1.0).abs() > effective_tolerance {
        return Err(QuantalizerError::Incoherence {
            message: format!("Bloch vector {} is off the unit sphere (tolerance {})", vector, effective_tolerance),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    #[test]
    fn test_zero_state_is_normalized() {
        assert!(check_normalization(&QubitState::zero(), None).is_ok());
    }

    #[test]
    fn test_unnormalized_state_is_incoherent() {
        let state = QubitState::from_amplitudes(Complex::new(1.0, 0.0), Complex::new(1.0, 0.0));
        assert!(matches!(
            check_normalization(&state, Some(1e-6)),
            Err(QuantalizerError::Incoherence { .. })
        ));
    }

    #[test]
    fn test_bloch_vector_checks() {
        assert!(check_bloch_vector(&BlochVector::new(0.0, 1.0, 0.0), None).is_ok());
        assert!(check_bloch_vector(&BlochVector::new(0.0, 0.5, 0.0), None).is_err());
        assert!(check_bloch_vector(&BlochVector::new(f64::NAN, 0.0, 1.0), None).is_err());
    }
}
