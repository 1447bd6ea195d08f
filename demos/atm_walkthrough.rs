//! ATM Walkthrough
//!
//! This example demonstrates the cash dispenser's full session cycle.
//!
//! Key concepts:
//! - Closed three-state machine (Reset, CardInserted, CashDispensed)
//! - Total operations: no-op responses instead of errors
//! - Injectable event sink rendering notifications to the console
//!
//! Run with: cargo run --example atm_walkthrough

use cashpoint::core::MachineEvent;
use cashpoint::machine::MachineController;

fn main() {
    println!("=== ATM Walkthrough ===\n");

    let mut atm = MachineController::with_sink(|event: &MachineEvent| {
        println!(
            "  [{} -> {}] {}",
            event.state, event.next, event.notification
        );
    });

    println!("Fresh machine, state: {}\n", atm.state());

    println!("insertCard:");
    atm.insert_card();

    println!("dispenseCash:");
    atm.dispense_cash();

    println!("dispenseCash (again - cash still in the tray):");
    atm.dispense_cash();

    println!("resetMachine:");
    atm.reset_machine();

    println!("insertCard (next customer):");
    atm.insert_card();

    println!("\nFinal state: {}", atm.state());
    println!("Operations handled: {}", atm.log().events().len());

    println!("\n=== Example Complete ===");
}
