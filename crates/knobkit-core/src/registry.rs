//! The knob registry: discover-then-commit state machine.
//!
//! A render pass only ever *reads* committed state. Accessors on a
//! [`Registrar`] queue descriptors for names they have not seen, and the
//! host calls [`KnobRegistry::flush_pending`] once the pass is done. Because
//! a committed name is never re-queued, a producer with a static set of
//! registrar calls reaches a fixed point after one extra pass.

use core::cell::RefCell;

use crate::value::{KnobKind, KnobValue};

/// A registered knob: a named, typed, stateful configuration value.
#[derive(Debug, Clone)]
pub struct Knob {
    /// Unique key within the registry.
    pub name: String,
    /// Control kind; fixed by the first registration.
    pub kind: KnobKind,
    /// Panel section this knob renders under. Empty string is the default group.
    pub group: String,
    /// Key→label pairs in declaration order. Only one-of knobs have entries.
    pub options: Vec<(String, String)>,
    value: KnobValue,
}

impl Knob {
    /// The knob's current value. Seeded from the first-seen default,
    /// overwritten only through [`KnobRegistry::set_value`].
    pub fn value(&self) -> &KnobValue {
        &self.value
    }
}

/// A registration whose kind disagrees with the already-committed knob.
///
/// The first registration wins: the committed knob keeps its kind and value,
/// the mismatched call falls back to its own literal default, and the
/// conflict is recorded so hosts can surface it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindConflict {
    /// The contested knob name.
    pub name: String,
    /// Kind of the committed knob.
    pub registered: KnobKind,
    /// Kind the later call asked for.
    pub requested: KnobKind,
}

/// Per-pass scratch state, merged into committed state by `flush_pending`.
#[derive(Debug, Default)]
struct PendingFrame {
    knobs: Vec<Knob>,
    conflicts: Vec<KindConflict>,
}

/// Registry of knobs discovered during rendering.
#[derive(Debug, Default)]
pub struct KnobRegistry {
    /// Committed knobs in first-commit order.
    knobs: Vec<Knob>,
    /// Queue filled by registrar accessors while a pass renders.
    pending: RefCell<PendingFrame>,
    /// Kind conflicts observed so far, one entry per name.
    conflicts: Vec<KindConflict>,
}

impl KnobRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registrar scoped to the default (unnamed) group.
    pub fn registrar(&self) -> Registrar<'_> {
        Registrar {
            registry: self,
            group: String::new(),
        }
    }

    /// Look up a committed knob by name.
    pub fn get(&self, name: &str) -> Option<&Knob> {
        self.knobs.iter().find(|knob| knob.name == name)
    }

    /// All committed knobs in first-commit order.
    pub fn knobs(&self) -> &[Knob] {
        &self.knobs
    }

    /// Number of committed knobs.
    pub fn len(&self) -> usize {
        self.knobs.len()
    }

    /// Whether no knobs have been committed.
    pub fn is_empty(&self) -> bool {
        self.knobs.is_empty()
    }

    /// Distinct group names in first-commit order.
    ///
    /// The empty group is a group like any other; it merely renders without
    /// a heading.
    pub fn group_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for knob in &self.knobs {
            if !names.contains(&knob.group.as_str()) {
                names.push(&knob.group);
            }
        }
        names
    }

    /// Committed knobs belonging to `group`, in first-commit order.
    pub fn knobs_in_group<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a Knob> {
        self.knobs.iter().filter(move |knob| knob.group == group)
    }

    /// Write a new value into the named knob.
    ///
    /// Unknown names are a silent no-op — only rendered controls call this,
    /// so a miss means the control outlived its knob. Returns whether a knob
    /// was updated.
    pub fn set_value(&mut self, name: &str, value: KnobValue) -> bool {
        if let Some(knob) = self.knobs.iter_mut().find(|knob| knob.name == name) {
            knob.value = value;
            true
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!("set_value: no knob named {name:?}, ignoring");
            false
        }
    }

    /// Merge the pending queue into committed state and clear it.
    ///
    /// Must be called after every render pass. The merge is a single state
    /// transition: readers either see the pass's discoveries in full or not
    /// at all. Returns `true` when anything changed, so the host can
    /// schedule the follow-up pass that shows the new controls.
    pub fn flush_pending(&mut self) -> bool {
        let frame = self.pending.take();
        let mut changed = false;
        for knob in frame.knobs {
            // A name committed by an earlier flush is never re-queued, but a
            // stale queue entry from the same pass must not duplicate it.
            if self.get(&knob.name).is_none() {
                #[cfg(feature = "tracing")]
                tracing::debug!(name = %knob.name, kind = %knob.kind, "committing knob");
                self.knobs.push(knob);
                changed = true;
            }
        }
        for conflict in frame.conflicts {
            if !self.conflicts.iter().any(|c| c.name == conflict.name) {
                self.conflicts.push(conflict);
                changed = true;
            }
        }
        changed
    }

    /// Kind conflicts observed so far, in first-seen order.
    pub fn conflicts(&self) -> &[KindConflict] {
        &self.conflicts
    }

    /// Queue a descriptor for commit. Re-registering the same name within
    /// one pass overwrites the queued entry instead of duplicating it.
    fn enqueue(&self, knob: Knob) {
        let mut pending = self.pending.borrow_mut();
        if let Some(existing) = pending.knobs.iter_mut().find(|k| k.name == knob.name) {
            *existing = knob;
        } else {
            pending.knobs.push(knob);
        }
    }

    fn note_conflict(&self, name: &str, registered: KnobKind, requested: KnobKind) {
        let mut pending = self.pending.borrow_mut();
        let seen = pending.conflicts.iter().any(|c| c.name == name)
            || self.conflicts.iter().any(|c| c.name == name);
        if !seen {
            pending.conflicts.push(KindConflict {
                name: name.to_string(),
                registered,
                requested,
            });
        }
    }
}

/// Group-scoped accessor family handed to content producers.
///
/// Each accessor declares a knob and returns its current value in one call.
/// Accessors take `&self` and queue through interior mutability, so a render
/// pass never holds a mutable borrow of the registry.
pub struct Registrar<'a> {
    registry: &'a KnobRegistry,
    group: String,
}

impl<'a> Registrar<'a> {
    /// A registrar whose knobs render under the `group` section.
    pub fn group(&self, group: &str) -> Registrar<'a> {
        Registrar {
            registry: self.registry,
            group: group.to_string(),
        }
    }

    /// Declare a text knob and read its current value.
    pub fn text(&self, name: &str, default: &str) -> String {
        let registered = self.register(name, KnobKind::Text, Vec::new(), || {
            KnobValue::Text(default.to_string())
        });
        match registered {
            Some(KnobValue::Text(value)) => value,
            _ => default.to_string(),
        }
    }

    /// Declare a number knob and read its current value.
    ///
    /// Values are carried as opaque strings; the host coerces if it needs a
    /// numeric type.
    pub fn number(&self, name: &str, default: &str) -> String {
        let registered = self.register(name, KnobKind::Number, Vec::new(), || {
            KnobValue::Text(default.to_string())
        });
        match registered {
            Some(KnobValue::Text(value)) => value,
            _ => default.to_string(),
        }
    }

    /// Declare a bool knob and read its current value.
    pub fn bool(&self, name: &str, default: bool) -> bool {
        let registered = self.register(name, KnobKind::Bool, Vec::new(), || {
            KnobValue::Bool(default)
        });
        match registered {
            Some(KnobValue::Bool(value)) => value,
            _ => default,
        }
    }

    /// Declare a one-of knob and read the currently selected key.
    ///
    /// `options` maps keys to display labels; the returned value is always a
    /// key, never a label. `None` means the unselected sentinel.
    pub fn one_of(
        &self,
        name: &str,
        default: Option<&str>,
        options: &[(&str, &str)],
    ) -> Option<String> {
        let opts = options
            .iter()
            .map(|(key, label)| ((*key).to_string(), (*label).to_string()))
            .collect();
        let registered = self.register(name, KnobKind::OneOf, opts, || {
            KnobValue::Choice(default.map(str::to_string))
        });
        match registered {
            Some(KnobValue::Choice(value)) => value,
            _ => default.map(str::to_string),
        }
    }

    /// Declare an array knob and read its current value.
    ///
    /// `None` means the list is empty — an emptied list and a never-touched
    /// empty default are deliberately indistinguishable.
    pub fn array(&self, name: &str, default: &[&str]) -> Option<Vec<String>> {
        let seed: Option<Vec<String>> = if default.is_empty() {
            None
        } else {
            Some(default.iter().map(|v| (*v).to_string()).collect())
        };
        let registered = self.register(name, KnobKind::Array, Vec::new(), || {
            KnobValue::List(seed.clone())
        });
        match registered {
            Some(KnobValue::List(value)) => value,
            _ => seed,
        }
    }

    /// Shared registration path.
    ///
    /// Known name with matching kind: pure read of the stored value. Known
    /// name with a different kind: record a conflict, return `None` so the
    /// caller falls back to its literal default. Unknown name: queue a
    /// descriptor seeded with the default and return `None`.
    fn register(
        &self,
        name: &str,
        kind: KnobKind,
        options: Vec<(String, String)>,
        seed: impl FnOnce() -> KnobValue,
    ) -> Option<KnobValue> {
        if let Some(knob) = self.registry.get(name) {
            if knob.kind == kind {
                return Some(knob.value.clone());
            }
            self.registry.note_conflict(name, knob.kind, kind);
            return None;
        }
        self.registry.enqueue(Knob {
            name: name.to_string(),
            kind,
            group: self.group.clone(),
            options,
            value: seed(),
        });
        None
    }
}
