//! Light Switch State Machine
//!
//! This example drives a small machine with events, explicit changes and
//! undo/redo.
//!
//! Key concepts:
//! - Declaring a configuration with `fsm_config!`
//! - Firing events and handling `InvalidEvent`
//! - Walking history back and forth
//!
//! Run with: RUST_LOG=debug cargo run --example light_switch

use rewind::fsm_config;
use rewind::machine::{Fsm, FsmError};
use stillwater::validation::Validation;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), FsmError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Light Switch State Machine ===\n");

    let config = fsm_config! {
        initial: off,
        states: {
            off: { turnOn => on },
            on: { turnOff => off, dim => dimmed },
            dimmed: { brighten => on, turnOff => off },
        }
    };

    if let Validation::Failure(issues) = config.validate() {
        for issue in issues.iter() {
            println!("Configuration issue: {issue}");
        }
        return Ok(());
    }

    let mut fsm = Fsm::new(config);
    println!("Initial state: {}", fsm.state());
    println!("States that can dim: {:?}\n", fsm.states(Some("dim")));

    fsm.trigger("turnOn")?;
    fsm.trigger("dim")?;
    println!("After turnOn, dim: {}", fsm.state());

    match fsm.trigger("dim") {
        Err(err) => println!("Rejected: {err}"),
        Ok(()) => println!("Unexpectedly dimmed twice"),
    }

    fsm.change_state("off")?;
    println!("After change_state(off): {}\n", fsm.state());

    while fsm.undo() {
        println!("Undo -> {}", fsm.state());
    }
    while fsm.redo() {
        println!("Redo -> {}", fsm.state());
    }

    println!("\nPath: {}", fsm.journal().get_path().join(" -> "));

    println!("\n=== Example Complete ===");
    Ok(())
}
