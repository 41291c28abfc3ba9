//! Control widgets, one per knob kind.
//!
//! Widgets are stateless apart from the array control's row bookkeeping:
//! each takes the current value and reports `Some(new value)` when the user
//! changed it this frame. Reporting is the only channel back to the
//! registry — the panel routes changes into its edit queue and applies them
//! after the pass.

use egui::{ComboBox, TextEdit, Ui};
use knobkit_core::ArrayRows;

/// Sentinel entry shown first in every one-of selector.
const UNSELECTED: &str = "-- select --";

/// Single-line text input. Reports the raw content on every change.
pub fn text_control(ui: &mut Ui, id_salt: &str, value: &str) -> Option<String> {
    let mut buf = value.to_owned();
    let response = ui.add(
        TextEdit::singleline(&mut buf)
            .id_salt(id_salt.to_owned())
            .desired_width(180.0),
    );
    response.changed().then_some(buf)
}

/// Numeric input. The content stays an opaque string; coercion is the
/// host's concern.
pub fn number_control(ui: &mut Ui, id_salt: &str, value: &str) -> Option<String> {
    let mut buf = value.to_owned();
    let response = ui.add(
        TextEdit::singleline(&mut buf)
            .id_salt(id_salt.to_owned())
            .desired_width(80.0)
            .hint_text("0"),
    );
    response.changed().then_some(buf)
}

/// Binary toggle. Reports the new state on change.
pub fn bool_control(ui: &mut Ui, value: bool) -> Option<bool> {
    let mut checked = value;
    ui.checkbox(&mut checked, "").changed().then_some(checked)
}

/// Closed-choice selector seeded from key→label options.
///
/// The sentinel is always the first entry; picking it reports `Some(None)`.
/// Picking an option reports its key, never its label.
pub fn one_of_control(
    ui: &mut Ui,
    id_salt: &str,
    options: &[(String, String)],
    selected: Option<&str>,
) -> Option<Option<String>> {
    let mut picked = None;
    ComboBox::from_id_salt(id_salt.to_owned())
        .selected_text(selected_label(options, selected).to_owned())
        .show_ui(ui, |ui| {
            if ui.selectable_label(selected.is_none(), UNSELECTED).clicked() {
                picked = Some(None);
            }
            for (key, label) in options {
                if ui
                    .selectable_label(selected == Some(key.as_str()), label)
                    .clicked()
                {
                    picked = Some(Some(key.clone()));
                }
            }
        });
    picked
}

/// Label shown for the current selection; the sentinel covers both "nothing
/// selected" and a stored key the options no longer contain.
fn selected_label<'a>(options: &'a [(String, String)], selected: Option<&str>) -> &'a str {
    selected
        .and_then(|key| options.iter().find(|(k, _)| k == key))
        .map_or(UNSELECTED, |(_, label)| label.as_str())
}

/// Dynamic list editor over an [`ArrayRows`].
///
/// Each row is a text control plus a "remove" button; "add option" appends
/// an empty row. Every mutation re-reports the externally visible value,
/// `None` once no rows remain.
pub fn array_control(
    ui: &mut Ui,
    id_salt: &str,
    rows: &mut ArrayRows,
) -> Option<Option<Vec<String>>> {
    let mut mutated = false;
    ui.vertical(|ui| {
        let snapshot: Vec<(u64, String)> = rows
            .rows()
            .iter()
            .map(|row| (row.id, row.text.clone()))
            .collect();
        let mut removed = None;
        for (id, text) in &snapshot {
            ui.horizontal(|ui| {
                if let Some(new_text) = text_control(ui, &format!("{id_salt}#{id}"), text) {
                    rows.set(*id, new_text);
                    mutated = true;
                }
                if ui.button("remove").clicked() {
                    removed = Some(*id);
                }
            });
        }
        if let Some(id) = removed {
            rows.remove(id);
            mutated = true;
        }
        if ui.button("add option").clicked() {
            rows.add();
            mutated = true;
        }
    });
    mutated.then(|| rows.value())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<(String, String)> {
        vec![
            ("a".to_string(), "Label A".to_string()),
            ("b".to_string(), "Label B".to_string()),
        ]
    }

    #[test]
    fn selected_label_resolves_keys_to_labels() {
        let options = options();
        assert_eq!(selected_label(&options, Some("b")), "Label B");
        assert_eq!(selected_label(&options, Some("a")), "Label A");
    }

    #[test]
    fn selected_label_falls_back_to_sentinel() {
        let options = options();
        assert_eq!(selected_label(&options, None), UNSELECTED);
        // A stored key the producer no longer offers.
        assert_eq!(selected_label(&options, Some("gone")), UNSELECTED);
        assert_eq!(selected_label(&[], None), UNSELECTED);
    }
}
