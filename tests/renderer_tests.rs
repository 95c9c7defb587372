// tests/renderer_tests.rs

use quantalizer::config::RendererSettings;
use quantalizer::{
    BlochTransitionRenderer, BlochVector, CircuitBuilder, FixedGate, GateOperation,
    QuantalizerError, RotationAxis, TrajectoryRenderer, VisualizationError, MAX_OPERATIONS,
};

use approx::assert_abs_diff_eq;
use std::f64::consts::PI;

fn renderer(frames_per_gate: usize) -> BlochTransitionRenderer {
    BlochTransitionRenderer::new(RendererSettings {
        frames_per_gate,
        ..RendererSettings::default()
    })
}

fn assert_point(actual: &BlochVector, x: f64, y: f64, z: f64) {
    assert_abs_diff_eq!(actual.x, x, epsilon = 1e-9);
    assert_abs_diff_eq!(actual.y, y, epsilon = 1e-9);
    assert_abs_diff_eq!(actual.z, z, epsilon = 1e-9);
}

#[test]
fn test_resting_points_follow_each_gate() -> Result<(), VisualizationError> {
    // |0> -H-> |+> -S-> |+i> -X-> |-i>
    let ops = [
        GateOperation::fixed(FixedGate::H),
        GateOperation::fixed(FixedGate::S),
        GateOperation::fixed(FixedGate::X),
    ];
    let trajectory = renderer(16).render(&ops)?;

    assert_point(&trajectory.frames()[0], 0.0, 0.0, 1.0);
    assert_point(trajectory.after_gate(0).expect("gate 0"), 1.0, 0.0, 0.0);
    assert_point(trajectory.after_gate(1).expect("gate 1"), 0.0, 1.0, 0.0);
    assert_point(trajectory.after_gate(2).expect("gate 2"), 0.0, -1.0, 0.0);
    assert!(trajectory.after_gate(3).is_none());
    Ok(())
}

#[test]
fn test_every_frame_stays_on_the_sphere() -> Result<(), VisualizationError> {
    let ops = [
        GateOperation::fixed(FixedGate::H),
        GateOperation::fixed(FixedGate::TDagger),
        GateOperation::rotation(RotationAxis::Y, 0.25 * PI),
        GateOperation::fixed(FixedGate::SDagger),
        GateOperation::rotation(RotationAxis::Z, -2.0 * PI),
    ];
    let trajectory = BlochTransitionRenderer::default().render(&ops)?;
    assert_eq!(trajectory.frames().len(), ops.len() * trajectory.frames_per_gate() + 1);
    for frame in trajectory.frames() {
        assert_abs_diff_eq!(frame.norm(), 1.0, epsilon = 1e-9);
    }
    Ok(())
}

#[test]
fn test_end_point_matches_state_evolution() -> Result<(), QuantalizerError> {
    let circuit = CircuitBuilder::new()
        .add_op(GateOperation::rotation(RotationAxis::X, 0.5 * PI))
        .add_op(GateOperation::fixed(FixedGate::T))
        .add_op(GateOperation::fixed(FixedGate::H))
        .add_op(GateOperation::rotation(RotationAxis::Z, -0.25 * PI))
        .build()?;

    let trajectory = renderer(5)
        .render(circuit.operations())
        .map_err(|e| QuantalizerError::Incoherence { message: e.to_string() })?;
    let expected = circuit.final_state().bloch_vector();
    let end = trajectory.final_point().expect("non-empty trajectory");
    assert_point(end, expected.x, expected.y, expected.z);
    Ok(())
}

#[test]
fn test_oversized_sequence_is_refused() {
    let ops = vec![GateOperation::fixed(FixedGate::Z); MAX_OPERATIONS + 1];
    assert_eq!(
        renderer(2).render(&ops),
        Err(VisualizationError::TooManyGates {
            count: MAX_OPERATIONS + 1,
            limit: MAX_OPERATIONS,
        })
    );
}

#[test]
fn test_infinite_angle_is_refused() {
    let ops = [GateOperation::rotation(RotationAxis::Y, f64::INFINITY)];
    assert_eq!(renderer(2).render(&ops), Err(VisualizationError::NonFiniteAngle { index: 0 }));
}
