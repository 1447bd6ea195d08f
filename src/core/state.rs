//! Machine states for the cash dispenser.
//!
//! The state set is closed: a controller always occupies exactly one of
//! the three states below, and the legal response to every operation is
//! determined entirely by which one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three conditions the dispenser can occupy.
///
/// States are plain values with no behavior of their own - the response
/// to each operation lives in the pure transition function, keyed on
/// the (state, operation) pair.
///
/// # Example
///
/// ```rust
/// use cashpoint::core::MachineState;
///
/// let state = MachineState::default();
/// assert_eq!(state, MachineState::Reset);
/// assert_eq!(state.name(), "Reset");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum MachineState {
    /// No card present, no cash dispensed. The initial state.
    #[default]
    Reset,
    /// A card is present and has not yet triggered a dispense.
    CardInserted,
    /// Cash has been dispensed for the inserted card and the machine
    /// has not yet been reset.
    CashDispensed,
}

impl MachineState {
    /// Every state, in declaration order.
    ///
    /// Useful for exhaustively exercising the transition table.
    pub const ALL: [MachineState; 3] = [
        MachineState::Reset,
        MachineState::CardInserted,
        MachineState::CashDispensed,
    ];

    /// Get the state's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reset => "Reset",
            Self::CardInserted => "CardInserted",
            Self::CashDispensed => "CashDispensed",
        }
    }
}

impl fmt::Display for MachineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
