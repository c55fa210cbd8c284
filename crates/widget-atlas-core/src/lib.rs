//! Reactive substrate for Widget Atlas.
//!
//! This crate provides the foundational components the catalog application
//! is built on:
//!
//! - **Signal/Slot System**: Type-safe notification between components
//! - **Property System**: Value cells with change detection
//! - **Bindings**: Computed cells for derived state
//!
//! The application model is a single logical thread of control: all state
//! mutations are triggered synchronously by user-interaction events and
//! propagate to dependent state before the next event is processed. Slots
//! are therefore always invoked directly; there is no event loop.
//!
//! # Signal/Slot Example
//!
//! ```
//! use widget_atlas_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Property Example
//!
//! ```
//! use widget_atlas_core::{Property, Signal};
//!
//! // A reactive counter with change notification
//! struct Counter {
//!     value: Property<i32>,
//!     value_changed: Signal<i32>,
//! }
//!
//! impl Counter {
//!     fn new() -> Self {
//!         Self {
//!             value: Property::new(0),
//!             value_changed: Signal::new(),
//!         }
//!     }
//!
//!     fn increment(&self) {
//!         let new_value = self.value.get() + 1;
//!         if self.value.set(new_value) {
//!             self.value_changed.emit(new_value);
//!         }
//!     }
//! }
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use property::{Binding, Property, ReadOnlyProperty};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
