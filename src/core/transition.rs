//! The pure transition function and its notifications.
//!
//! The entire behavioral contract of the dispenser is the nine-cell
//! table encoded in [`transition`]: three states crossed with three
//! operations, each cell total and deterministic. There is no failure
//! path - an operation that is not meaningful in the current state is a
//! defined no-op with an explanatory notification, not an error.

use super::operation::Operation;
use super::state::MachineState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The user-visible message produced by handling one operation.
///
/// One variant per distinct message; `Resetting` is shared by the two
/// states that a reset actually moves out of. The rendered strings
/// reproduce the machine's console output verbatim.
///
/// # Example
///
/// ```rust
/// use cashpoint::core::Notification;
///
/// assert_eq!(Notification::Dispensing.message(), "Dispensing cash...");
/// assert_eq!(Notification::AlreadyReset.to_string(), "Machine is already reset");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Notification {
    /// A card was accepted by an idle machine.
    CardAccepted,
    /// A card is already present; the insert was ignored.
    CardAlreadyInserted,
    /// Dispensed cash is still in the tray; the insert was ignored.
    TakeCashFirst,
    /// Cash is being dispensed for the inserted card.
    Dispensing,
    /// No card is present; nothing to dispense.
    InsertCardFirst,
    /// Cash was already dispensed for this card.
    AlreadyDispensed,
    /// The machine is returning to its idle condition.
    Resetting,
    /// The machine is already idle; the reset was ignored.
    AlreadyReset,
}

impl Notification {
    /// The exact console message for this notification.
    pub fn message(&self) -> &'static str {
        match self {
            Self::CardAccepted => "Card inserted",
            Self::CardAlreadyInserted => "Card is already inserted",
            Self::TakeCashFirst => "Please take the cash before inserting a new card",
            Self::Dispensing => "Dispensing cash...",
            Self::InsertCardFirst => "Please insert a card first",
            Self::AlreadyDispensed => "Cash already dispensed",
            Self::Resetting => "Machine is resetting...",
            Self::AlreadyReset => "Machine is already reset",
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of handling one operation: the resulting state and the
/// notification to emit.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Transition {
    /// State the machine occupies after the operation.
    pub next: MachineState,
    /// Message describing what the machine did.
    pub notification: Notification,
}

/// Compute the outcome of one operation in one state.
///
/// This is a total pure function - every (state, operation) pair maps
/// to a defined outcome, and equal inputs always produce equal outputs.
/// The match is deliberately written without wildcards so that adding a
/// state or an operation forces every affected cell to be revisited.
///
/// # Example
///
/// ```rust
/// use cashpoint::core::{transition, MachineState, Notification, Operation};
///
/// let outcome = transition(MachineState::Reset, Operation::InsertCard);
/// assert_eq!(outcome.next, MachineState::CardInserted);
/// assert_eq!(outcome.notification, Notification::CardAccepted);
///
/// // Dispensing without a card is a defined no-op, not an error.
/// let outcome = transition(MachineState::Reset, Operation::DispenseCash);
/// assert_eq!(outcome.next, MachineState::Reset);
/// assert_eq!(outcome.notification, Notification::InsertCardFirst);
/// ```
pub fn transition(state: MachineState, operation: Operation) -> Transition {
    use MachineState::{CardInserted, CashDispensed, Reset};
    use Operation::{DispenseCash, InsertCard, ResetMachine};

    let (next, notification) = match (state, operation) {
        (Reset, InsertCard) => (CardInserted, Notification::CardAccepted),
        (Reset, DispenseCash) => (Reset, Notification::InsertCardFirst),
        (Reset, ResetMachine) => (Reset, Notification::AlreadyReset),

        (CardInserted, InsertCard) => (CardInserted, Notification::CardAlreadyInserted),
        (CardInserted, DispenseCash) => (CashDispensed, Notification::Dispensing),
        (CardInserted, ResetMachine) => (Reset, Notification::Resetting),

        (CashDispensed, InsertCard) => (CashDispensed, Notification::TakeCashFirst),
        (CashDispensed, DispenseCash) => (CashDispensed, Notification::AlreadyDispensed),
        (CashDispensed, ResetMachine) => (Reset, Notification::Resetting),
    };

    Transition { next, notification }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_card_from_reset_accepts_the_card() {
        let outcome = transition(MachineState::Reset, Operation::InsertCard);
        assert_eq!(outcome.next, MachineState::CardInserted);
        assert_eq!(outcome.notification, Notification::CardAccepted);
    }

    #[test]
    fn dispense_requires_an_inserted_card() {
        let outcome = transition(MachineState::Reset, Operation::DispenseCash);
        assert_eq!(outcome.next, MachineState::Reset);
        assert_eq!(outcome.notification, Notification::InsertCardFirst);
    }

    #[test]
    fn dispense_from_card_inserted_dispenses() {
        let outcome = transition(MachineState::CardInserted, Operation::DispenseCash);
        assert_eq!(outcome.next, MachineState::CashDispensed);
        assert_eq!(outcome.notification, Notification::Dispensing);
    }

    #[test]
    fn second_dispense_is_a_no_op() {
        let outcome = transition(MachineState::CashDispensed, Operation::DispenseCash);
        assert_eq!(outcome.next, MachineState::CashDispensed);
        assert_eq!(outcome.notification, Notification::AlreadyDispensed);
    }

    #[test]
    fn insert_while_cash_waiting_asks_to_take_it() {
        let outcome = transition(MachineState::CashDispensed, Operation::InsertCard);
        assert_eq!(outcome.next, MachineState::CashDispensed);
        assert_eq!(outcome.notification, Notification::TakeCashFirst);
    }

    #[test]
    fn reset_reaches_reset_from_every_state() {
        for state in MachineState::ALL {
            let outcome = transition(state, Operation::ResetMachine);
            assert_eq!(outcome.next, MachineState::Reset);
        }
    }

    #[test]
    fn reset_from_reset_reports_already_reset() {
        let outcome = transition(MachineState::Reset, Operation::ResetMachine);
        assert_eq!(outcome.notification, Notification::AlreadyReset);
    }

    #[test]
    fn no_op_cells_preserve_state() {
        let no_ops = [
            (MachineState::Reset, Operation::DispenseCash),
            (MachineState::Reset, Operation::ResetMachine),
            (MachineState::CardInserted, Operation::InsertCard),
            (MachineState::CashDispensed, Operation::InsertCard),
            (MachineState::CashDispensed, Operation::DispenseCash),
        ];

        for (state, operation) in no_ops {
            assert_eq!(transition(state, operation).next, state);
        }
    }

    #[test]
    fn every_cell_yields_a_defined_state() {
        for state in MachineState::ALL {
            for operation in Operation::ALL {
                let outcome = transition(state, operation);
                assert!(MachineState::ALL.contains(&outcome.next));
            }
        }
    }

    #[test]
    fn messages_match_console_output() {
        assert_eq!(Notification::CardAccepted.message(), "Card inserted");
        assert_eq!(
            Notification::CardAlreadyInserted.message(),
            "Card is already inserted"
        );
        assert_eq!(
            Notification::TakeCashFirst.message(),
            "Please take the cash before inserting a new card"
        );
        assert_eq!(Notification::Dispensing.message(), "Dispensing cash...");
        assert_eq!(
            Notification::InsertCardFirst.message(),
            "Please insert a card first"
        );
        assert_eq!(
            Notification::AlreadyDispensed.message(),
            "Cash already dispensed"
        );
        assert_eq!(Notification::Resetting.message(), "Machine is resetting...");
        assert_eq!(
            Notification::AlreadyReset.message(),
            "Machine is already reset"
        );
    }
}
