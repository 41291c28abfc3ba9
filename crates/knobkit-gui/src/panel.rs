//! The knob panel: group sections, widget dispatch, and the discover/commit
//! cycle driven from an egui frame.

use std::collections::{HashMap, HashSet};

use egui::{Frame, RichText, Ui};
use knobkit_core::{ArrayRows, Knob, KnobKind, KnobRegistry, KnobValue, Registrar};

use crate::widgets;

/// Renders the control panel and drives the registry's two-phase protocol.
///
/// [`KnobPanel::show`] performs one frame: the controls render as a pure
/// projection of committed state while user changes collect into an edit
/// queue, then the caller's content runs with a fresh [`Registrar`], and
/// finally the commit phase applies edits, flushes pending knobs, and
/// requests a repaint when anything changed. Knobs discovered this frame
/// therefore show their controls on the next one, and the cycle reaches a
/// fixed point once the producer's registrar calls are all known.
pub struct KnobPanel {
    registry: KnobRegistry,
    /// Array widget row state, keyed by knob name. Lives as long as the panel.
    array_rows: HashMap<String, ArrayRows>,
    /// Conflict names already logged, so each warns exactly once.
    warned: HashSet<String>,
}

impl KnobPanel {
    /// Create a panel with an empty registry.
    pub fn new() -> Self {
        Self {
            registry: KnobRegistry::new(),
            array_rows: HashMap::new(),
            warned: HashSet::new(),
        }
    }

    /// The underlying registry.
    pub fn registry(&self) -> &KnobRegistry {
        &self.registry
    }

    /// Render the panel and the caller's content, then commit.
    ///
    /// `content` receives the ui below the panel and a registrar scoped to
    /// the default group; [`Registrar::group`] scopes knobs to named
    /// sections.
    pub fn show<R>(
        &mut self,
        ui: &mut Ui,
        content: impl FnOnce(&mut Ui, &Registrar<'_>) -> R,
    ) -> R {
        let mut edits: Vec<(String, KnobValue)> = Vec::new();

        // Render phase: committed state only.
        self.controls_ui(ui, &mut edits);
        let result = content(ui, &self.registry.registrar());

        // Commit phase: edits and this frame's discoveries land together.
        let mut changed = false;
        for (name, value) in edits {
            changed |= self.registry.set_value(&name, value);
        }
        changed |= self.registry.flush_pending();

        for conflict in self.registry.conflicts() {
            if self.warned.insert(conflict.name.clone()) {
                tracing::warn!(
                    name = %conflict.name,
                    registered = %conflict.registered,
                    requested = %conflict.requested,
                    "knob re-registered with a different kind; first registration wins"
                );
            }
        }

        if changed {
            ui.ctx().request_repaint();
        }
        result
    }

    /// One fieldset per group, a labelled control per knob.
    fn controls_ui(&mut self, ui: &mut Ui, edits: &mut Vec<(String, KnobValue)>) {
        let registry = &self.registry;
        let array_rows = &mut self.array_rows;
        for group in registry.group_names() {
            Frame::group(ui.style()).show(ui, |ui| {
                if !group.is_empty() {
                    ui.label(RichText::new(group).strong());
                }
                for knob in registry.knobs_in_group(group) {
                    ui.horizontal(|ui| {
                        ui.label(format!("{}:", knob.name));
                        if let Some(value) = knob_control(ui, knob, array_rows) {
                            edits.push((knob.name.clone(), value));
                        }
                    });
                }
            });
        }
    }
}

impl Default for KnobPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Dispatch a knob to the widget for its kind.
///
/// Returns the edited value when the user changed the control this frame.
/// A stored value whose variant disagrees with the knob's kind renders
/// nothing — `set_value` is permissive, so the mismatch degrades to an
/// inert control row rather than a panic.
fn knob_control(
    ui: &mut Ui,
    knob: &Knob,
    array_rows: &mut HashMap<String, ArrayRows>,
) -> Option<KnobValue> {
    match knob.kind {
        KnobKind::Text => {
            let KnobValue::Text(value) = knob.value() else {
                return None;
            };
            widgets::text_control(ui, &knob.name, value).map(KnobValue::Text)
        }
        KnobKind::Number => {
            let KnobValue::Text(value) = knob.value() else {
                return None;
            };
            widgets::number_control(ui, &knob.name, value).map(KnobValue::Text)
        }
        KnobKind::Bool => {
            let KnobValue::Bool(value) = knob.value() else {
                return None;
            };
            widgets::bool_control(ui, *value).map(KnobValue::Bool)
        }
        KnobKind::OneOf => {
            let KnobValue::Choice(selected) = knob.value() else {
                return None;
            };
            widgets::one_of_control(ui, &knob.name, &knob.options, selected.as_deref())
                .map(KnobValue::Choice)
        }
        KnobKind::Array => {
            // First sight of this knob: seed the rows from the committed
            // value so the widget and the content agree from the start.
            let rows = array_rows
                .entry(knob.name.clone())
                .or_insert_with(|| match knob.value() {
                    KnobValue::List(Some(values)) => ArrayRows::from_values(values),
                    _ => ArrayRows::new(),
                });
            widgets::array_control(ui, &knob.name, rows).map(KnobValue::List)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{CentralPanel, Context, RawInput};

    /// Drive one headless frame through the panel.
    fn frame(ctx: &Context, panel: &mut KnobPanel, producer: impl Fn(&Registrar<'_>)) {
        let _ = ctx.run(RawInput::default(), |ctx| {
            CentralPanel::default().show(ctx, |ui| {
                panel.show(ui, |_ui, knobs| producer(knobs));
            });
        });
    }

    #[test]
    fn knobs_commit_between_frames() {
        let ctx = Context::default();
        let mut panel = KnobPanel::new();

        frame(&ctx, &mut panel, |knobs| {
            assert_eq!(knobs.text("title", "Hello"), "Hello");
        });
        // Committed after the first frame, a pure read from then on.
        assert_eq!(panel.registry().len(), 1);
        for _ in 0..2 {
            frame(&ctx, &mut panel, |knobs| {
                knobs.text("title", "Hello");
            });
        }
        assert_eq!(panel.registry().len(), 1);
    }

    #[test]
    fn array_rows_seed_from_the_committed_default() {
        let ctx = Context::default();
        let mut panel = KnobPanel::new();

        frame(&ctx, &mut panel, |knobs| {
            knobs.array("tags", &["a", "b"]);
        });
        // Second frame renders the control; its rows must match the value
        // the content already sees.
        frame(&ctx, &mut panel, |knobs| {
            knobs.array("tags", &["a", "b"]);
        });

        let rows = panel.array_rows.get("tags").expect("rows created");
        assert_eq!(
            rows.value(),
            Some(vec!["a".to_string(), "b".to_string()])
        );

        // An empty default still starts with no rows.
        frame(&ctx, &mut panel, |knobs| {
            knobs.array("tags", &["a", "b"]);
            knobs.array("empty", &[]);
        });
        frame(&ctx, &mut panel, |knobs| {
            knobs.array("empty", &[]);
        });
        assert!(panel.array_rows.get("empty").expect("rows created").is_empty());
    }

    #[test]
    fn grouped_knobs_render_into_their_own_sections() {
        let ctx = Context::default();
        let mut panel = KnobPanel::new();

        frame(&ctx, &mut panel, |knobs| {
            knobs.group("layout").number("padding", "12");
            knobs.group("style").bool("wide", false);
            knobs.text("title", "Hello");
        });

        let registry = panel.registry();
        assert_eq!(registry.group_names(), vec!["layout", "style", ""]);
        assert_eq!(
            registry.knobs_in_group("layout").count()
                + registry.knobs_in_group("style").count()
                + registry.knobs_in_group("").count(),
            registry.len()
        );
    }
}
