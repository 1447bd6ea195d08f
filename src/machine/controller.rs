//! The machine controller: the one mutable shell around the pure core.

use crate::core::{transition, EventLog, MachineEvent, MachineState, Notification, Operation};
use crate::machine::sink::{EventSink, NullSink};
use chrono::Utc;

/// Controller for one cash dispenser.
///
/// Owns exactly one [`MachineState`] (starting in
/// [`Reset`](MachineState::Reset)), an immutable [`EventLog`], and an
/// injectable [`EventSink`]. The three user operations delegate to
/// [`apply`](MachineController::apply), which evaluates the pure
/// transition function, records the event, updates the state, and
/// forwards the event to the sink as one atomic unit before returning.
///
/// No operation can fail: an operation that is not meaningful in the
/// current state leaves the state unchanged and reports why.
///
/// # Example
///
/// ```rust
/// use cashpoint::core::{MachineState, Notification};
/// use cashpoint::machine::MachineController;
///
/// let mut controller = MachineController::new();
///
/// assert_eq!(controller.insert_card(), Notification::CardAccepted);
/// assert_eq!(controller.dispense_cash(), Notification::Dispensing);
/// assert_eq!(controller.dispense_cash(), Notification::AlreadyDispensed);
/// assert_eq!(controller.reset_machine(), Notification::Resetting);
///
/// assert_eq!(controller.state(), MachineState::Reset);
/// ```
pub struct MachineController {
    current: MachineState,
    log: EventLog,
    sink: Box<dyn EventSink>,
}

impl MachineController {
    /// Create a controller in the `Reset` state with a [`NullSink`].
    pub fn new() -> Self {
        Self::with_sink(NullSink)
    }

    /// Create a controller in the `Reset` state routing events to the
    /// given sink.
    pub fn with_sink(sink: impl EventSink + 'static) -> Self {
        Self {
            current: MachineState::Reset,
            log: EventLog::new(),
            sink: Box::new(sink),
        }
    }

    /// Insert a card into the machine.
    pub fn insert_card(&mut self) -> Notification {
        self.apply(Operation::InsertCard)
    }

    /// Dispense cash for the inserted card.
    pub fn dispense_cash(&mut self) -> Notification {
        self.apply(Operation::DispenseCash)
    }

    /// Reset the machine to its idle condition.
    pub fn reset_machine(&mut self) -> Notification {
        self.apply(Operation::ResetMachine)
    }

    /// Handle one operation.
    ///
    /// The read-modify-emit sequence completes before this returns, so
    /// sequential calls on one controller observe a strict total order:
    /// each operation sees exactly the state left by the previous one.
    pub fn apply(&mut self, operation: Operation) -> Notification {
        let outcome = transition(self.current, operation);

        let event = MachineEvent {
            state: self.current,
            operation,
            notification: outcome.notification,
            next: outcome.next,
            timestamp: Utc::now(),
        };

        self.log = self.log.record(event);
        self.current = outcome.next;
        self.sink.emit(&event);

        outcome.notification
    }

    /// Get the current state (pure).
    pub fn state(&self) -> MachineState {
        self.current
    }

    /// Get the log of every operation handled so far (pure).
    pub fn log(&self) -> &EventLog {
        &self.log
    }
}

impl Default for MachineController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::sink::MemorySink;

    #[test]
    fn controller_starts_in_reset() {
        let controller = MachineController::new();
        assert_eq!(controller.state(), MachineState::Reset);
        assert!(controller.log().events().is_empty());
    }

    #[test]
    fn insert_card_moves_to_card_inserted() {
        let mut controller = MachineController::new();
        assert_eq!(controller.insert_card(), Notification::CardAccepted);
        assert_eq!(controller.state(), MachineState::CardInserted);
    }

    #[test]
    fn insert_card_twice_is_idempotent() {
        let mut controller = MachineController::new();
        controller.insert_card();
        assert_eq!(controller.insert_card(), Notification::CardAlreadyInserted);
        assert_eq!(controller.state(), MachineState::CardInserted);
    }

    #[test]
    fn dispense_without_card_stays_reset() {
        let mut controller = MachineController::new();
        assert_eq!(controller.dispense_cash(), Notification::InsertCardFirst);
        assert_eq!(controller.state(), MachineState::Reset);
    }

    #[test]
    fn reset_is_the_only_exit_from_cash_dispensed() {
        let mut controller = MachineController::new();
        controller.insert_card();
        controller.dispense_cash();
        assert_eq!(controller.state(), MachineState::CashDispensed);

        assert_eq!(controller.insert_card(), Notification::TakeCashFirst);
        assert_eq!(controller.state(), MachineState::CashDispensed);
        assert_eq!(controller.dispense_cash(), Notification::AlreadyDispensed);
        assert_eq!(controller.state(), MachineState::CashDispensed);

        assert_eq!(controller.reset_machine(), Notification::Resetting);
        assert_eq!(controller.state(), MachineState::Reset);
    }

    #[test]
    fn five_step_walkthrough() {
        let mut controller = MachineController::new();

        assert_eq!(controller.insert_card(), Notification::CardAccepted);
        assert_eq!(controller.dispense_cash(), Notification::Dispensing);
        assert_eq!(controller.dispense_cash(), Notification::AlreadyDispensed);
        assert_eq!(controller.reset_machine(), Notification::Resetting);
        assert_eq!(controller.insert_card(), Notification::CardAccepted);

        assert_eq!(controller.state(), MachineState::CardInserted);
    }

    #[test]
    fn log_records_every_operation() {
        let mut controller = MachineController::new();
        controller.insert_card();
        controller.dispense_cash();
        controller.reset_machine();

        let events = controller.log().events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].operation, Operation::InsertCard);
        assert_eq!(events[1].operation, Operation::DispenseCash);
        assert_eq!(events[2].operation, Operation::ResetMachine);
        assert_eq!(
            controller.log().path(),
            vec![
                MachineState::Reset,
                MachineState::CardInserted,
                MachineState::CashDispensed,
                MachineState::Reset,
            ]
        );
    }

    #[test]
    fn sink_sees_events_as_they_happen() {
        let sink = MemorySink::new();
        let mut controller = MachineController::with_sink(sink.clone());

        controller.insert_card();
        controller.reset_machine();

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].state, MachineState::Reset);
        assert_eq!(events[0].next, MachineState::CardInserted);
        assert_eq!(events[1].state, MachineState::CardInserted);
        assert_eq!(events[1].next, MachineState::Reset);
    }

    #[test]
    fn apply_matches_named_operations() {
        let mut by_name = MachineController::new();
        let mut by_apply = MachineController::new();

        by_name.insert_card();
        by_apply.apply(Operation::InsertCard);

        assert_eq!(by_name.state(), by_apply.state());
        assert_eq!(
            by_name.log().notifications(),
            by_apply.log().notifications()
        );
    }
}
