// src/core/mod.rs

//! Core data structures and types

pub mod bloch;
pub mod error;
pub mod state;

// Re-export public types for convenient access via `quantalizer::core::TypeName`
pub use bloch::BlochVector;
pub use error::{QuantalizerError, VisualizationError};
pub use state::{Matrix2, QubitState};

pub mod constants;
pub use constants::quantalizer_constants::{
    DEFAULT_FRAMES_PER_GATE, DEFAULT_NORM_TOLERANCE, MAX_OPERATIONS, PI,
};
