//! Event log for handled operations.
//!
//! Provides immutable tracking of everything a controller has done,
//! following functional programming principles: recording an event
//! returns a new log and leaves the original untouched.

use super::operation::Operation;
use super::state::MachineState;
use super::transition::Notification;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of one handled operation.
///
/// Events are immutable values capturing the full `{state, operation,
/// notification}` triple plus the resulting state and when it happened.
///
/// # Example
///
/// ```rust
/// use cashpoint::core::{MachineEvent, MachineState, Notification, Operation};
/// use chrono::Utc;
///
/// let event = MachineEvent {
///     state: MachineState::Reset,
///     operation: Operation::InsertCard,
///     notification: Notification::CardAccepted,
///     next: MachineState::CardInserted,
///     timestamp: Utc::now(),
/// };
/// assert_ne!(event.state, event.next);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MachineEvent {
    /// State the machine occupied when the operation arrived.
    pub state: MachineState,
    /// The operation that was invoked.
    pub operation: Operation,
    /// The message the machine emitted in response.
    pub notification: Notification,
    /// State the machine occupied after handling the operation.
    pub next: MachineState,
    /// When the operation was handled.
    pub timestamp: DateTime<Utc>,
}

/// Ordered, immutable log of handled operations.
///
/// The log is append-only through [`record`](EventLog::record), which
/// returns a new log rather than mutating the receiver.
///
/// # Example
///
/// ```rust
/// use cashpoint::core::{transition, EventLog, MachineEvent, MachineState, Operation};
/// use chrono::Utc;
///
/// let outcome = transition(MachineState::Reset, Operation::InsertCard);
/// let log = EventLog::new().record(MachineEvent {
///     state: MachineState::Reset,
///     operation: Operation::InsertCard,
///     notification: outcome.notification,
///     next: outcome.next,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(log.events().len(), 1);
/// assert_eq!(log.path(), vec![MachineState::Reset, MachineState::CardInserted]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<MachineEvent>,
}

impl EventLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Record an event, returning a new log.
    ///
    /// This is a pure function - it does not mutate the existing log
    /// but returns a new one with the event appended.
    pub fn record(&self, event: MachineEvent) -> Self {
        let mut events = self.events.clone();
        events.push(event);
        Self { events }
    }

    /// Get all recorded events in order.
    pub fn events(&self) -> &[MachineEvent] {
        &self.events
    }

    /// Get the sequence of states traversed.
    ///
    /// Returns the first event's pre-state followed by the post-state
    /// of every event. Empty for an empty log. A log recorded by one
    /// controller always yields a contiguous path: each event's
    /// pre-state equals the previous event's post-state.
    pub fn path(&self) -> Vec<MachineState> {
        let mut path = Vec::new();
        if let Some(first) = self.events.first() {
            path.push(first.state);
        }
        for event in &self.events {
            path.push(event.next);
        }
        path
    }

    /// Get the sequence of notifications emitted, in order.
    pub fn notifications(&self) -> Vec<Notification> {
        self.events.iter().map(|e| e.notification).collect()
    }

    /// Calculate elapsed time from the first to the last event.
    ///
    /// Returns `None` for an empty log.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.events.first(), self.events.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }
}
