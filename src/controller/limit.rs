//! The gate limit enforcer.

use std::fmt;

use crate::circuits::CircuitState;
use crate::core::MAX_OPERATIONS;

/// Whether the gate controls accept presses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Availability {
    #[default]
    Enabled,
    Disabled,
}

impl Availability {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Availability::Enabled)
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::Enabled => write!(f, "enabled"),
            Availability::Disabled => write!(f, "disabled"),
        }
    }
}

/// Availability as a pure function of the circuit's operation count.
///
/// Disabled exactly when the count reaches `MAX_OPERATIONS`; only a reset can
/// bring it back down.
pub fn evaluate(circuit: &CircuitState) -> Availability {
    if circuit.len() == MAX_OPERATIONS {
        Availability::Disabled
    } else {
        Availability::Enabled
    }
}
