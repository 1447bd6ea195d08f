//! Pure functional core of the dispenser.
//!
//! This module contains everything that is a pure function of its
//! inputs:
//! - The closed state and operation enumerations
//! - The total transition function and its notifications
//! - Immutable event logging
//!
//! Nothing here performs I/O or holds mutable state; the imperative
//! shell lives in [`crate::machine`].

mod log;
mod operation;
mod state;
mod transition;

pub use log::{EventLog, MachineEvent};
pub use operation::{Operation, ParseOperationError};
pub use state::MachineState;
pub use transition::{transition, Notification, Transition};
