//! Knob registry and control-value state machine for knobkit.
//!
//! Content producers declare typed knobs inline while rendering example
//! content ("schema on first use"): each accessor on a [`Registrar`] both
//! declares a knob and returns its current value. The registry never mutates
//! committed state during a render pass — unknown names go into a pending
//! queue that [`KnobRegistry::flush_pending`] commits between passes, so a
//! render stays a pure projection of committed state while new controls
//! appear on the following pass.
//!
//! # Example
//!
//! ```rust
//! use knobkit_core::{KnobRegistry, KnobValue};
//!
//! let mut registry = KnobRegistry::new();
//!
//! // Render pass: the accessor queues the knob and returns the default.
//! let title = registry.registrar().text("title", "Hello");
//! assert_eq!(title, "Hello");
//!
//! // Post-render commit makes the knob visible to the next pass.
//! assert!(registry.flush_pending());
//!
//! // A user edit takes precedence over the producer's default from now on.
//! registry.set_value("title", KnobValue::Text("World".into()));
//! assert_eq!(registry.registrar().text("title", "Hello"), "World");
//! ```

pub mod registry;
pub mod rows;
pub mod value;

pub use registry::{KindConflict, Knob, KnobRegistry, Registrar};
pub use rows::{ArrayRows, Row};
pub use value::{KnobKind, KnobValue};
