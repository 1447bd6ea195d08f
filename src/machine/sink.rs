//! Injectable notification channels.
//!
//! The core decides *what* happened; where that report goes is the
//! surrounding application's business. A controller forwards every
//! handled operation to an [`EventSink`], and rendering (console,
//! display panel, test buffer) stays outside the library.

use crate::core::{MachineEvent, Notification};
use std::sync::{Arc, Mutex};

/// Receiver for the events a controller emits.
///
/// Any `FnMut(&MachineEvent)` closure is a sink, so the common case
/// needs no new type:
///
/// ```rust
/// use cashpoint::machine::MachineController;
///
/// let mut controller =
///     MachineController::with_sink(|event: &cashpoint::core::MachineEvent| {
///         println!("{}", event.notification);
///     });
/// controller.insert_card();
/// ```
pub trait EventSink: Send {
    /// Receive one event. Called exactly once per handled operation,
    /// in operation order.
    fn emit(&mut self, event: &MachineEvent);
}

impl<F> EventSink for F
where
    F: FnMut(&MachineEvent) + Send,
{
    fn emit(&mut self, event: &MachineEvent) {
        self(event);
    }
}

/// Sink that discards every event.
///
/// The default for controllers built with [`MachineController::new`].
///
/// [`MachineController::new`]: crate::machine::MachineController::new
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &MachineEvent) {}
}

/// Sink that collects events into a shared buffer.
///
/// Clones share one buffer, so a clone kept by the caller still sees
/// events after the original is handed to a controller.
///
/// # Example
///
/// ```rust
/// use cashpoint::core::Notification;
/// use cashpoint::machine::{MachineController, MemorySink};
///
/// let sink = MemorySink::new();
/// let mut controller = MachineController::with_sink(sink.clone());
///
/// controller.insert_card();
/// controller.dispense_cash();
///
/// assert_eq!(
///     sink.notifications(),
///     vec![Notification::CardAccepted, Notification::Dispensing],
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<MachineEvent>>>,
}

impl MemorySink {
    /// Create a sink with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every event received so far, in order.
    pub fn events(&self) -> Vec<MachineEvent> {
        self.events.lock().expect("event buffer poisoned").clone()
    }

    /// Snapshot of the notifications received so far, in order.
    pub fn notifications(&self) -> Vec<Notification> {
        self.events()
            .iter()
            .map(|event| event.notification)
            .collect()
    }

    /// Number of events received so far.
    pub fn len(&self) -> usize {
        self.events.lock().expect("event buffer poisoned").len()
    }

    /// Whether no events have been received.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for MemorySink {
    fn emit(&mut self, event: &MachineEvent) {
        self.events
            .lock()
            .expect("event buffer poisoned")
            .push(*event);
    }
}
