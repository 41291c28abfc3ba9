//! Property-based tests for the knob registry and array row set.
//!
//! Randomized registration sequences must always reach a fixed point without
//! duplicating names, and row edits must never reuse an id.

use proptest::prelude::*;

use knobkit_core::{ArrayRows, KnobRegistry};

/// A small name alphabet so sequences collide often.
fn name_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["a", "b", "c", "d", "e"]).prop_map(str::to_string)
}

/// One edit on an `ArrayRows`: add, remove one of the first 8 ids ever
/// issued, or set one of them.
#[derive(Debug, Clone)]
enum RowOp {
    Add,
    Remove(u64),
    Set(u64, String),
}

fn row_op_strategy() -> impl Strategy<Value = RowOp> {
    prop_oneof![
        Just(RowOp::Add),
        (0u64..8).prop_map(RowOp::Remove),
        ((0u64..8), "[a-z]{0,4}").prop_map(|(id, text)| RowOp::Set(id, text)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// For any sequence of text-knob names registered on every pass, the
    /// render/flush cycle stabilizes after at most distinct-names + 1
    /// passes and commits exactly one knob per distinct name.
    #[test]
    fn registration_reaches_fixed_point(names in prop::collection::vec(name_strategy(), 1..24)) {
        let mut registry = KnobRegistry::new();
        let mut distinct: Vec<&str> = Vec::new();
        for name in &names {
            if !distinct.contains(&name.as_str()) {
                distinct.push(name);
            }
        }

        let mut passes = 0usize;
        loop {
            passes += 1;
            {
                let knobs = registry.registrar();
                for name in &names {
                    knobs.text(name, "default");
                }
            }
            if !registry.flush_pending() {
                break;
            }
            prop_assert!(passes <= distinct.len() + 1, "no fixed point after {passes} passes");
        }

        prop_assert_eq!(registry.len(), distinct.len());
        for name in &distinct {
            prop_assert!(registry.get(name).is_some());
        }
    }

    /// Repeating the same pass is a pure read: committed state is identical
    /// before and after.
    #[test]
    fn repeated_passes_are_pure_reads(names in prop::collection::vec(name_strategy(), 1..12)) {
        let mut registry = KnobRegistry::new();
        {
            let knobs = registry.registrar();
            for name in &names {
                knobs.text(name, "seed");
            }
        }
        registry.flush_pending();
        let committed = registry.len();

        for _ in 0..3 {
            {
                let knobs = registry.registrar();
                for name in &names {
                    knobs.text(name, "seed");
                }
            }
            prop_assert!(!registry.flush_pending());
            prop_assert_eq!(registry.len(), committed);
        }
    }

    /// Ids are issued strictly increasing and never reappear after removal;
    /// the reported value is `None` exactly when no rows remain.
    #[test]
    fn row_ids_are_never_reused(ops in prop::collection::vec(row_op_strategy(), 0..32)) {
        let mut rows = ArrayRows::new();
        let mut issued: Vec<u64> = Vec::new();
        let mut removed: Vec<u64> = Vec::new();

        for op in ops {
            match op {
                RowOp::Add => {
                    let id = rows.add();
                    prop_assert!(!issued.contains(&id), "id {id} issued twice");
                    if let Some(last) = issued.last() {
                        prop_assert!(id > *last);
                    }
                    issued.push(id);
                }
                RowOp::Remove(id) => {
                    rows.remove(id);
                    if issued.contains(&id) && !removed.contains(&id) {
                        removed.push(id);
                    }
                }
                RowOp::Set(id, text) => rows.set(id, text),
            }
            for row in rows.rows() {
                prop_assert!(!removed.contains(&row.id), "removed id {} came back", row.id);
            }
            prop_assert_eq!(rows.value().is_none(), rows.is_empty());
        }
    }
}
