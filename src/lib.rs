//! Cashpoint: a cash-dispensing machine controller modeled as a pure
//! state machine.
//!
//! The classic State-pattern rendition of this machine gives each state
//! its own object holding a back-reference to the controller. With a
//! closed set of three states that cycle is pure overhead: Cashpoint
//! collapses the states into one exhaustive enum and the per-state
//! behaviors into one total transition function
//! `(state, operation) -> (next state, notification)`, with no virtual
//! dispatch and no allocation per state.
//!
//! The crate follows a "pure core, imperative shell" split:
//!
//! - [`core`] holds the enums, the transition function, and the
//!   immutable event log - all pure, no side effects.
//! - [`machine`] holds [`MachineController`], the single mutable shell
//!   that applies transitions and routes events to an injectable
//!   [`EventSink`].
//!
//! No operation can fail. Invoking an operation that is not meaningful
//! in the current state (dispensing with no card inserted, say) is a
//! defined, stable outcome: the state is unchanged and the notification
//! explains why.
//!
//! # Example
//!
//! ```rust
//! use cashpoint::core::{MachineState, Notification};
//! use cashpoint::machine::MachineController;
//!
//! let mut atm = MachineController::new();
//!
//! assert_eq!(atm.insert_card(), Notification::CardAccepted);
//! assert_eq!(atm.dispense_cash(), Notification::Dispensing);
//! assert_eq!(atm.dispense_cash(), Notification::AlreadyDispensed);
//! assert_eq!(atm.reset_machine(), Notification::Resetting);
//! assert_eq!(atm.insert_card(), Notification::CardAccepted);
//!
//! assert_eq!(atm.state(), MachineState::CardInserted);
//! ```

pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{transition, MachineState, Notification, Operation};
pub use crate::machine::{EventSink, MachineController};
