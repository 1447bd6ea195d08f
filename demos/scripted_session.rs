//! Scripted Session
//!
//! This example drives a controller from a command script and exports
//! the resulting event log as JSON.
//!
//! Key concepts:
//! - Parsing the three commands with `Operation::from_str`
//! - Defined handling of out-of-order commands
//! - Serializable event log
//!
//! Run with: cargo run --example scripted_session

use cashpoint::core::Operation;
use cashpoint::machine::MachineController;

fn main() {
    println!("=== Scripted Session ===\n");

    // Deliberately out of order: the machine answers every command.
    let script = "dispenseCash resetMachine insertCard insertCard dispenseCash resetMachine";
    println!("Script: {script}\n");

    let mut atm = MachineController::new();

    for command in script.split_whitespace() {
        match command.parse::<Operation>() {
            Ok(operation) => {
                let notification = atm.apply(operation);
                println!("  {command:>12} -> {notification}");
            }
            Err(err) => println!("  {command:>12} -> skipped ({err})"),
        }
    }

    println!("\nFinal state: {}", atm.state());
    println!("Path: {:?}", atm.log().path());

    match serde_json::to_string_pretty(atm.log()) {
        Ok(json) => println!("\nEvent log as JSON:\n{json}"),
        Err(err) => eprintln!("could not serialize log: {err}"),
    }

    println!("\n=== Example Complete ===");
}
