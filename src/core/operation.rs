//! The three externally invocable operations.
//!
//! The operation surface is analogous to a CLI with three argument-less
//! commands: `insertCard`, `dispenseCash`, `resetMachine`. Operations
//! carry no payload; the controller's response is a function of the
//! (state, operation) pair alone.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the three actions a user can invoke on the dispenser.
///
/// # Example
///
/// ```rust
/// use cashpoint::core::Operation;
///
/// let op: Operation = "dispenseCash".parse().unwrap();
/// assert_eq!(op, Operation::DispenseCash);
/// assert!("ejectCard".parse::<Operation>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operation {
    /// Insert a card into the machine.
    InsertCard,
    /// Dispense cash for the inserted card.
    DispenseCash,
    /// Reset the machine to its idle condition.
    ResetMachine,
}

/// Error returned when parsing an unrecognized command string.
///
/// This is the only error type in the crate. It belongs to the command
/// parsing surface; dispatching an operation on a controller can never
/// fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operation '{0}', expected insertCard, dispenseCash, or resetMachine")]
pub struct ParseOperationError(pub String);

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Operation; 3] = [
        Operation::InsertCard,
        Operation::DispenseCash,
        Operation::ResetMachine,
    ];

    /// Get the operation's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InsertCard => "insertCard",
            Self::DispenseCash => "dispenseCash",
            Self::ResetMachine => "resetMachine",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "insertCard" => Ok(Self::InsertCard),
            "dispenseCash" => Ok(Self::DispenseCash),
            "resetMachine" => Ok(Self::ResetMachine),
            other => Err(ParseOperationError(other.to_string())),
        }
    }
}
