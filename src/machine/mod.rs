//! Imperative shell around the pure core.
//!
//! [`MachineController`] is the only mutable piece of the crate: it
//! owns the current state, delegates every operation to the pure
//! transition function, and routes the resulting events to an
//! injectable [`EventSink`].

mod controller;
mod sink;

pub use controller::MachineController;
pub use sink::{EventSink, MemorySink, NullSink};
