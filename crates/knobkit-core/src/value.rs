//! Knob kinds and their carried values.

use core::fmt;

/// The closed set of control kinds a knob can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnobKind {
    /// Free-form single-line text.
    Text,
    /// Numeric input, carried as an opaque string.
    Number,
    /// Binary toggle.
    Bool,
    /// Closed choice over a key→label option set.
    OneOf,
    /// Ordered, editable list of strings.
    Array,
}

impl KnobKind {
    /// Identifier used in logs and panel tooltips.
    pub const fn name(&self) -> &'static str {
        match self {
            KnobKind::Text => "text",
            KnobKind::Number => "number",
            KnobKind::Bool => "bool",
            KnobKind::OneOf => "oneOf",
            KnobKind::Array => "array",
        }
    }
}

impl fmt::Display for KnobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A knob's current value.
///
/// Text and number knobs both carry opaque strings — numeric coercion is the
/// host's concern, not the registry's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KnobValue {
    /// Raw input content of a text or number knob.
    Text(String),
    /// State of a bool knob.
    Bool(bool),
    /// Selected key of a one-of knob; `None` is the unselected sentinel.
    Choice(Option<String>),
    /// Ordered row values of an array knob; `None` when the list is empty.
    List(Option<Vec<String>>),
}
