// src/simulation/engine.rs

//! State-vector evolution of the single qubit.

use crate::core::QubitState;
use crate::operations::GateOperation;

/// Evolves |0⟩ through `operations` in order and returns the final state.
pub fn evolve(operations: &[GateOperation]) -> QubitState {
    let mut state = QubitState::zero();
    for op in operations {
        state.apply_matrix(&op.matrix());
    }
    state
}

/// Every intermediate state, starting with |0⟩; one more entry than `operations`.
pub fn evolve_steps(operations: &[GateOperation]) -> Vec<QubitState> {
    let mut states = Vec::with_capacity(operations.len() + 1);
    let mut state = QubitState::zero();
    states.push(state.clone());
    for op in operations {
        state.apply_matrix(&op.matrix());
        states.push(state.clone());
    }
    states
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::{FixedGate, RotationAxis};
    use crate::validation::check_normalization;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    #[test]
    fn test_hadamard_gives_plus_state() {
        let state = evolve(&[GateOperation::fixed(FixedGate::H)]);
        assert_abs_diff_eq!(state.amplitudes()[0].re, FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_abs_diff_eq!(state.amplitudes()[1].re, FRAC_1_SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn test_s_then_s_dagger_is_identity_on_bloch_sphere() {
        let ops = [
            GateOperation::fixed(FixedGate::H),
            GateOperation::fixed(FixedGate::S),
            GateOperation::fixed(FixedGate::SDagger),
        ];
        let bloch = evolve(&ops).bloch_vector();
        assert_abs_diff_eq!(bloch.x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_steps_stay_normalized() {
        let ops = [
            GateOperation::fixed(FixedGate::T),
            GateOperation::rotation(RotationAxis::Y, PI / 3.0),
            GateOperation::fixed(FixedGate::TDagger),
            GateOperation::rotation(RotationAxis::X, -2.0 * PI),
        ];
        let steps = evolve_steps(&ops);
        assert_eq!(steps.len(), ops.len() + 1);
        for state in &steps {
            assert!(check_normalization(state, None).is_ok());
        }
    }
}
