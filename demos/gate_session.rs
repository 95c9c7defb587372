//! A scripted session: press a few gates, pick a rotation angle, run into the
//! operation cap, clear, and visualize.
//!
//! Run with `RUST_LOG=quantalizer=debug` to watch the controller's decisions.

use quantalizer::{
    AngleChoice, Command, FixedGate, GateController, HeadlessSurface, QuantalizerError,
    RotationAxis, Settings,
};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), QuantalizerError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Falls back to defaults when the file is absent.
    let settings = Settings::load_from(Path::new("quantalizer.toml"))?;
    let half_turn = AngleChoice::from_multiple(0.5, settings.angle_menu)?;
    let mut controller = GateController::from_settings(settings, HeadlessSurface::new());
    println!(
        "Renderer samples {} frames per gate",
        controller.renderer().settings().frames_per_gate
    );

    let script = [
        Command::ApplyFixedGate(FixedGate::X),
        Command::ApplyFixedGate(FixedGate::H),
        Command::ApplyFixedGate(FixedGate::S),
        Command::ApplyFixedGate(FixedGate::T),
        Command::RequestParameterizedGate(RotationAxis::X),
        Command::ApplyFixedGate(FixedGate::Z), // refused: the angle menu is open
        Command::SelectAngle(half_turn),
        Command::Visualize,
    ];

    for command in script {
        match controller.dispatch(command) {
            Ok(response) => println!("{:<32} -> {:?}", command.to_string(), response),
            Err(e) => println!("{:<32} -> refused: {}", command.to_string(), e),
        }
    }

    println!(
        "\nDisplay: {} ({} operations left)",
        controller.display().text(),
        controller.circuit().remaining()
    );
    println!("{}", controller.circuit());
    if let Some(trajectory) = controller.last_render() {
        println!("{}", trajectory);
    }
    println!("Circuit JSON: {}", controller.circuit().to_json()?);

    // Fill up to the cap, then try one more.
    println!("\nFilling the circuit...");
    while controller.availability().is_enabled() {
        controller.dispatch(Command::ApplyFixedGate(FixedGate::TDagger))?;
    }
    println!("Display: {} ({})", controller.display().text(), controller.availability());
    if let Err(e) = controller.dispatch(Command::ApplyFixedGate(FixedGate::Y)) {
        println!("Eleventh gate refused: {}", e);
    }

    controller.dispatch(Command::Clear)?;
    println!("After clear: '{}' ({})", controller.display().text(), controller.availability());

    // An empty circuit cannot be animated; the window closes.
    let outcome = controller.dispatch(Command::Visualize)?;
    println!("Visualize empty circuit -> {:?}", outcome);
    println!("Window closed: {}", controller.surface().is_closed());

    Ok(())
}
