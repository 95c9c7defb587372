//! The angle selector: a modal choice among eight multiples of π, opened by
//! a rotation gate command.

use std::fmt;

use crate::config::AngleMenuPolicy;
use crate::core::{PI, QuantalizerError};
use crate::operations::{GateOperation, RotationAxis};

/// One entry of the angle menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AngleChoice {
    QuarterPi,
    HalfPi,
    Pi,
    TwoPi,
    MinusQuarterPi,
    MinusHalfPi,
    MinusPi,
    MinusTwoPi,
}

impl AngleChoice {
    /// The menu in button order: positive row first, then negative row.
    pub const MENU: [AngleChoice; 8] = [
        AngleChoice::QuarterPi,
        AngleChoice::HalfPi,
        AngleChoice::Pi,
        AngleChoice::TwoPi,
        AngleChoice::MinusQuarterPi,
        AngleChoice::MinusHalfPi,
        AngleChoice::MinusPi,
        AngleChoice::MinusTwoPi,
    ];

    /// Button caption.
    pub fn label(&self) -> &'static str {
        match self {
            AngleChoice::QuarterPi => "π/4",
            AngleChoice::HalfPi => "π/2",
            AngleChoice::Pi => "π",
            AngleChoice::TwoPi => "2π",
            AngleChoice::MinusQuarterPi => "-π/4",
            AngleChoice::MinusHalfPi => "-π/2",
            AngleChoice::MinusPi => "-π",
            AngleChoice::MinusTwoPi => "-2π",
        }
    }

    /// Multiple `m` of π this entry stands for under `policy`.
    pub fn multiple(&self, policy: AngleMenuPolicy) -> f64 {
        match self {
            AngleChoice::QuarterPi => 0.25,
            AngleChoice::HalfPi => 0.5,
            AngleChoice::Pi => 1.0,
            AngleChoice::TwoPi => 2.0,
            AngleChoice::MinusQuarterPi => -0.25,
            AngleChoice::MinusHalfPi => -0.5,
            AngleChoice::MinusPi => match policy {
                AngleMenuPolicy::Symmetric => -1.0,
                AngleMenuPolicy::Legacy => -0.1,
            },
            AngleChoice::MinusTwoPi => -2.0,
        }
    }

    /// `theta = m · π` in radians.
    pub fn theta(&self, policy: AngleMenuPolicy) -> f64 {
        self.multiple(policy) * PI
    }

    /// Looks up the menu entry producing `multiple` under `policy`.
    ///
    /// # Errors
    /// `QuantalizerError::InvalidAngle` if no entry matches.
    pub fn from_multiple(multiple: f64, policy: AngleMenuPolicy) -> Result<Self, QuantalizerError> {
        Self::MENU
            .iter()
            .copied()
            .find(|choice| (choice.multiple(policy) - multiple).abs() < 1e-12)
            .ok_or_else(|| QuantalizerError::InvalidAngle {
                message: format!("{} π is not on the angle menu", multiple),
            })
    }
}

impl fmt::Display for AngleChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An open angle selector, holding the axis of the rotation it was opened for.
///
/// Consumed by either [`AngleSelector::select`] or [`AngleSelector::dismiss`],
/// so a selector can resolve only once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AngleSelector {
    axis: RotationAxis,
}

impl AngleSelector {
    pub fn open(axis: RotationAxis) -> Self {
        Self { axis }
    }

    pub fn axis(&self) -> RotationAxis {
        self.axis
    }

    /// Resolves the selector into the rotation to apply.
    pub fn select(self, choice: AngleChoice, policy: AngleMenuPolicy) -> GateOperation {
        GateOperation::rotation(self.axis, choice.theta(policy))
    }

    /// Abandons the pending rotation; nothing is produced.
    pub fn dismiss(self) -> RotationAxis {
        self.axis
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_symmetric_menu_is_symmetric() {
        let multiples: Vec<f64> = AngleChoice::MENU
            .iter()
            .map(|c| c.multiple(AngleMenuPolicy::Symmetric))
            .collect();
        assert_eq!(multiples, [0.25, 0.5, 1.0, 2.0, -0.25, -0.5, -1.0, -2.0]);
        for (pos, neg) in multiples[..4].iter().zip(&multiples[4..]) {
            assert_eq!(*pos, -*neg);
        }
    }

    #[test]
    fn test_legacy_menu_reproduces_minus_point_one() {
        assert_eq!(AngleChoice::MinusPi.multiple(AngleMenuPolicy::Legacy), -0.1);
        assert_eq!(AngleChoice::Pi.multiple(AngleMenuPolicy::Legacy), 1.0);
    }

    #[test]
    fn test_select_builds_rotation_on_axis() {
        let op = AngleSelector::open(RotationAxis::X).select(AngleChoice::HalfPi, AngleMenuPolicy::Symmetric);
        match op {
            GateOperation::Rotation { axis, theta } => {
                assert_eq!(axis, RotationAxis::X);
                assert_relative_eq!(theta, PI / 2.0);
            }
            other => panic!("expected a rotation, got {}", other),
        }
    }

    #[test]
    fn test_from_multiple() -> Result<(), QuantalizerError> {
        assert_eq!(AngleChoice::from_multiple(-2.0, AngleMenuPolicy::Symmetric)?, AngleChoice::MinusTwoPi);
        assert_eq!(AngleChoice::from_multiple(-0.1, AngleMenuPolicy::Legacy)?, AngleChoice::MinusPi);
        assert!(AngleChoice::from_multiple(-0.1, AngleMenuPolicy::Symmetric).is_err());
        assert!(AngleChoice::from_multiple(0.3, AngleMenuPolicy::Symmetric).is_err());
        Ok(())
    }
}
