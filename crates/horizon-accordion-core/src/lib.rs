//! Core systems for Horizon Accordion.
//!
//! This crate provides the foundational pieces the accordion model is built on:
//!
//! - **Signal/Slot System**: Type-safe change notification
//! - **Property System**: Reactive properties with change detection
//! - **Logging**: `tracing` targets and debug tree visualization
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_accordion_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use logging::{DebugNode, TreeFormatter, TreeStyle};
pub use property::{Property, ReadOnlyProperty};
pub use signal::{ConnectionId, Signal};
