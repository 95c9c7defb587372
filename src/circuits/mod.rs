// src/circuits/mod.rs

//! The circuit state store: the ordered, capped sequence of operations applied
//! to a single qubit that starts in |0⟩.
//!
//! Operations are only ever appended. The sole way to shrink a circuit is a
//! full [`CircuitState::reset`].

use crate::core::{MAX_OPERATIONS, QuantalizerError, QubitState};
use crate::operations::GateOperation;
use crate::simulation::engine;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered sequence of operations applied left-to-right to one qubit.
///
/// Invariant: `len() <= MAX_OPERATIONS`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CircuitState {
    /// The order is the order in which the user pressed the gates.
    operations: Vec<GateOperation>,
}

impl CircuitState {
    /// Creates a new, empty circuit (the bare |0⟩ state).
    pub fn new() -> Self {
        Self {
            operations: Vec::with_capacity(MAX_OPERATIONS),
        }
    }

    /// Appends `op` if there is room for it.
    ///
    /// # Errors
    /// `QuantalizerError::CapacityExceeded` when the circuit already holds
    /// `MAX_OPERATIONS` operations. The circuit is left untouched.
    pub fn apply(&mut self, op: GateOperation) -> Result<(), QuantalizerError> {
        if self.is_full() {
            return Err(QuantalizerError::CapacityExceeded { limit: MAX_OPERATIONS });
        }
        self.operations.push(op);
        Ok(())
    }

    /// Empties the circuit, returning the qubit to |0⟩.
    pub fn reset(&mut self) {
        self.operations.clear();
    }

    /// Returns a slice containing the ordered sequence of operations.
    pub fn operations(&self) -> &[GateOperation] {
        &self.operations
    }

    /// Logical length: number of operations, never characters.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.operations.len() >= MAX_OPERATIONS
    }

    /// Operations that can still be appended before the cap.
    pub fn remaining(&self) -> usize {
        MAX_OPERATIONS.saturating_sub(self.operations.len())
    }

    /// The qubit state reached by applying every operation to |0⟩.
    pub fn final_state(&self) -> QubitState {
        engine::evolve(&self.operations)
    }

    /// Serializes the sequence in the renderer's JSON request shape.
    pub fn to_json(&self) -> Result<String, QuantalizerError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Rebuilds a circuit from JSON, enforcing the operation cap.
    pub fn from_json(json: &str) -> Result<Self, QuantalizerError> {
        let raw: CircuitJson = serde_json::from_str(json)?;
        let mut circuit = Self::new();
        for op in raw.operations {
            circuit.apply(op)?;
        }
        Ok(circuit)
    }
}

/// Unchecked wire form; goes through `apply` before becoming a `CircuitState`.
#[derive(Deserialize)]
struct CircuitJson {
    operations: Vec<GateOperation>,
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// Builds a `CircuitState` by method chaining; the cap is checked in `build`.
#[derive(Debug, Default)]
pub struct CircuitBuilder {
    operations: Vec<GateOperation>,
}

impl CircuitBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_op(mut self, op: GateOperation) -> Self {
        self.operations.push(op);
        self
    }

    pub fn add_ops<I>(mut self, ops: I) -> Self
    where
        I: IntoIterator<Item = GateOperation>,
    {
        self.operations.extend(ops);
        self
    }

    /// Finalizes the circuit.
    ///
    /// # Errors
    /// `QuantalizerError::CapacityExceeded` if more than `MAX_OPERATIONS`
    /// operations were added.
    pub fn build(self) -> Result<CircuitState, QuantalizerError> {
        let mut circuit = CircuitState::new();
        for op in self.operations {
            circuit.apply(op)?;
        }
        Ok(circuit)
    }
}

impl fmt::Display for CircuitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const GATE_WIDTH: usize = 7; // e.g., "───H───"
        const H_WIRE: char = '─';

        fn format_gate(symbol: &str) -> String {
            let slen = symbol.chars().count();
            if slen >= GATE_WIDTH {
                symbol.chars().take(GATE_WIDTH).collect()
            } else {
                let total_dashes = GATE_WIDTH - slen;
                let pre_dashes = total_dashes / 2;
                let post_dashes = total_dashes - pre_dashes;
                format!(
                    "{}{}{}",
                    H_WIRE.to_string().repeat(pre_dashes),
                    symbol,
                    H_WIRE.to_string().repeat(post_dashes)
                )
            }
        }

        writeln!(f, "quantalizer::Circuit[{}/{} operations]", self.len(), MAX_OPERATIONS)?;
        let wire: String = self
            .operations
            .iter()
            .map(|op| match op {
                GateOperation::Fixed { gate } => format_gate(&gate.to_string()),
                GateOperation::Rotation { axis, .. } => format_gate(&format!("R{}", axis)),
            })
            .collect();
        writeln!(f, "q0: {}", wire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::{FixedGate, RotationAxis};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_apply_until_full() -> Result<(), QuantalizerError> {
        let mut circuit = CircuitState::new();
        for _ in 0..MAX_OPERATIONS {
            circuit.apply(GateOperation::fixed(FixedGate::Z))?;
        }
        assert!(circuit.is_full());
        assert_eq!(circuit.remaining(), 0);

        let err = circuit.apply(GateOperation::fixed(FixedGate::X));
        assert!(matches!(err, Err(QuantalizerError::CapacityExceeded { limit: 10 })));
        assert_eq!(circuit.len(), MAX_OPERATIONS);
        assert!(circuit.operations().iter().all(|op| *op == GateOperation::fixed(FixedGate::Z)));
        Ok(())
    }

    #[test]
    fn test_reset_returns_to_empty() -> Result<(), QuantalizerError> {
        let mut circuit = CircuitBuilder::new()
            .add_op(GateOperation::fixed(FixedGate::H))
            .add_op(GateOperation::rotation(RotationAxis::Z, 1.0))
            .build()?;
        circuit.reset();
        assert!(circuit.is_empty());
        assert_eq!(circuit.final_state(), QubitState::zero());
        Ok(())
    }

    #[test]
    fn test_builder_enforces_cap() {
        let result = CircuitBuilder::new()
            .add_ops(std::iter::repeat_n(GateOperation::fixed(FixedGate::T), MAX_OPERATIONS + 1))
            .build();
        assert!(matches!(result, Err(QuantalizerError::CapacityExceeded { .. })));
    }

    #[test]
    fn test_final_state_of_x_is_one() -> Result<(), QuantalizerError> {
        let circuit = CircuitBuilder::new().add_op(GateOperation::fixed(FixedGate::X)).build()?;
        let bloch = circuit.final_state().bloch_vector();
        assert_abs_diff_eq!(bloch.z, -1.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_json_round_trip_rejects_overfull() -> Result<(), QuantalizerError> {
        let circuit = CircuitBuilder::new()
            .add_op(GateOperation::fixed(FixedGate::SDagger))
            .add_op(GateOperation::rotation(RotationAxis::X, 0.25))
            .build()?;
        let json = circuit.to_json()?;
        assert_eq!(CircuitState::from_json(&json)?, circuit);

        let op = r#"{"kind":"fixed","gate":"x"}"#;
        let overfull = format!("{{\"operations\":[{}]}}", vec![op; 11].join(","));
        assert!(matches!(
            CircuitState::from_json(&overfull),
            Err(QuantalizerError::CapacityExceeded { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_display_draws_single_wire() -> Result<(), QuantalizerError> {
        let circuit = CircuitBuilder::new()
            .add_op(GateOperation::fixed(FixedGate::H))
            .add_op(GateOperation::rotation(RotationAxis::Y, 1.0))
            .build()?;
        let drawn = circuit.to_string();
        assert!(drawn.contains("[2/10 operations]"));
        assert!(drawn.contains("q0: ───H─────RY───"));
        Ok(())
    }
}
