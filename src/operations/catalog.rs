//! Button-level metadata for the eleven gate controls.

use super::{FixedGate, RotationAxis};

/// What pressing a control does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Applies the gate immediately.
    Fixed(FixedGate),
    /// Opens the angle selector for this axis.
    Rotation(RotationAxis),
}

/// A gate button as the UI layer lays it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateControl {
    /// Button caption.
    pub label: &'static str,
    pub kind: ControlKind,
    pub description: &'static str,
    /// Grid position `(row, column)`.
    pub position: (u8, u8),
}

impl GateControl {
    /// Token the display shows once the gate is applied.
    pub fn token(&self) -> &'static str {
        match self.kind {
            ControlKind::Fixed(gate) => gate.token(),
            ControlKind::Rotation(axis) => axis.token(),
        }
    }
}

const fn control(
    label: &'static str,
    kind: ControlKind,
    description: &'static str,
    position: (u8, u8),
) -> GateControl {
    GateControl {
        label,
        kind,
        description,
        position,
    }
}

static CONTROLS: [GateControl; 11] = [
    control("X", ControlKind::Fixed(FixedGate::X), "Flips the qubit state", (0, 0)),
    control("Y", ControlKind::Fixed(FixedGate::Y), "Half turn about the Y axis", (0, 1)),
    control("Z", ControlKind::Fixed(FixedGate::Z), "Half turn about the Z axis", (0, 2)),
    control(
        "RX",
        ControlKind::Rotation(RotationAxis::X),
        "Parameterized rotation about the X axis",
        (1, 0),
    ),
    control(
        "RY",
        ControlKind::Rotation(RotationAxis::Y),
        "Parameterized rotation about the Y axis",
        (1, 1),
    ),
    control(
        "RZ",
        ControlKind::Rotation(RotationAxis::Z),
        "Parameterized rotation about the Z axis",
        (1, 2),
    ),
    control("S", ControlKind::Fixed(FixedGate::S), "Rotates about the Z axis by π/2", (2, 0)),
    control(
        "S†",
        ControlKind::Fixed(FixedGate::SDagger),
        "Rotates about the Z axis by -π/2",
        (2, 1),
    ),
    control(
        "H",
        ControlKind::Fixed(FixedGate::H),
        "Creates an equal superposition from |0⟩",
        (2, 2),
    ),
    control("T", ControlKind::Fixed(FixedGate::T), "Rotates about the Z axis by π/4", (3, 0)),
    control(
        "T†",
        ControlKind::Fixed(FixedGate::TDagger),
        "Rotates about the Z axis by -π/4",
        (3, 1),
    ),
];

/// Every gate control, in layout order. Availability applies to all of them.
pub fn catalog() -> &'static [GateControl] {
    &CONTROLS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_covers_every_gate_once() {
        let fixed: HashSet<FixedGate> = catalog()
            .iter()
            .filter_map(|c| match c.kind {
                ControlKind::Fixed(g) => Some(g),
                ControlKind::Rotation(_) => None,
            })
            .collect();
        assert_eq!(fixed.len(), FixedGate::ALL.len());
        let rotations = catalog()
            .iter()
            .filter(|c| matches!(c.kind, ControlKind::Rotation(_)))
            .count();
        assert_eq!(rotations, 3);
    }

    #[test]
    fn test_positions_are_unique() {
        let positions: HashSet<(u8, u8)> = catalog().iter().map(|c| c.position).collect();
        assert_eq!(positions.len(), catalog().len());
    }

    #[test]
    fn test_control_token_matches_gate_token() {
        let dagger = catalog().iter().find(|c| c.label == "T†").map(GateControl::token);
        assert_eq!(dagger, Some("T†"));
    }

    #[test]
    fn test_layout_order() {
        let labels: Vec<&str> = catalog().iter().map(|c| c.label).collect();
        assert_eq!(labels, ["X", "Y", "Z", "RX", "RY", "RZ", "S", "S†", "H", "T", "T†"]);
        assert_eq!(catalog()[3].kind, ControlKind::Rotation(RotationAxis::X));
        assert_eq!(catalog()[10].position, (3, 1));
    }
}
