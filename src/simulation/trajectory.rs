// src/simulation/trajectory.rs
use crate::core::BlochVector;
use std::fmt;

/// The animated path of the Bloch vector produced by a renderer.
///
/// Frame 0 is |0⟩; each gate contributes `frames_per_gate` further frames,
/// the last of which is the state after that gate.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    frames: Vec<BlochVector>,
    frames_per_gate: usize,
}

impl Trajectory {
    pub(crate) fn new(frames: Vec<BlochVector>, frames_per_gate: usize) -> Self {
        Self { frames, frames_per_gate }
    }

    pub fn frames(&self) -> &[BlochVector] {
        &self.frames
    }

    pub fn frames_per_gate(&self) -> usize {
        self.frames_per_gate
    }

    /// Number of gates animated.
    pub fn gate_count(&self) -> usize {
        self.frames.len().saturating_sub(1) / self.frames_per_gate.max(1)
    }

    /// The resting point after gate `index` (0-based), if it exists.
    pub fn after_gate(&self, index: usize) -> Option<&BlochVector> {
        self.frames.get((index + 1) * self.frames_per_gate)
    }

    pub fn final_point(&self) -> Option<&BlochVector> {
        self.frames.last()
    }
}

impl fmt::Display for Trajectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trajectory[{} gates, {} frames]:", self.gate_count(), self.frames.len())?;
        if let Some(start) = self.frames.first() {
            writeln!(f, "  start: {}", start)?;
        }
        for gate in 0..self.gate_count() {
            if let Some(point) = self.after_gate(gate) {
                writeln!(f, "  after gate {}: {}", gate, point)?;
            }
        }
        Ok(())
    }
}
