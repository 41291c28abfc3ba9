//! egui control panel for knobkit knobs.
//!
//! [`KnobPanel`] wraps a [`knobkit_core::KnobRegistry`] and drives its
//! discover/commit cycle from an immediate-mode frame: controls render from
//! committed state, the caller's content runs with a fresh registrar, and
//! edits plus newly discovered knobs are committed after rendering.
//!
//! # Modules
//!
//! - [`panel`] — [`KnobPanel`], group layout and widget dispatch
//! - [`widgets`] — one control per knob kind
//! - [`theme`] — visual styling and egui theme application

pub mod panel;
pub mod theme;
pub mod widgets;

pub use panel::KnobPanel;
pub use theme::Theme;
