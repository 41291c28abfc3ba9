//! Row bookkeeping for the array control.

/// One row of an array control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Stable identity of the row within its widget instance.
    pub id: u64,
    /// The row's current value; empty until edited.
    pub text: String,
}

/// Ordered rows with stable, never-reused ids.
///
/// Ids come from a counter that only increments, so a row keeps its identity
/// across interleaved add/remove edits. Removing rows never renumbers the
/// survivors and never frees an id for reuse.
#[derive(Debug, Clone, Default)]
pub struct ArrayRows {
    rows: Vec<Row>,
    next_id: u64,
}

impl ArrayRows {
    /// Create an empty row set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row set with one row per value, in order.
    ///
    /// Used to seed an array control from a knob's committed value so the
    /// widget starts out showing what the content already renders.
    pub fn from_values(values: &[String]) -> Self {
        let mut rows = Self::new();
        for value in values {
            let id = rows.add();
            rows.set(id, value.clone());
        }
        rows
    }

    /// Append a row with no value, returning its id.
    pub fn add(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.push(Row {
            id,
            text: String::new(),
        });
        id
    }

    /// Remove the row with `id`. Remaining rows keep their ids.
    pub fn remove(&mut self, id: u64) {
        self.rows.retain(|row| row.id != id);
    }

    /// Replace the value of the row with `id`. Unknown ids are ignored.
    pub fn set(&mut self, id: u64, text: impl Into<String>) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.id == id) {
            row.text = text.into();
        }
    }

    /// The rows in display order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no rows remain.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The externally visible value: `None` when no rows remain, otherwise
    /// the ordered row values. Unedited rows contribute the empty string.
    pub fn value(&self) -> Option<Vec<String>> {
        if self.rows.is_empty() {
            None
        } else {
            Some(self.rows.iter().map(|row| row.text.clone()).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let mut rows = ArrayRows::new();
        let first = rows.add();
        rows.set(first, "x");
        let second = rows.add();
        rows.set(second, "y");
        rows.remove(first);
        assert_eq!(rows.value(), Some(vec!["y".to_string()]));
    }

    #[test]
    fn from_values_seeds_rows_in_order() {
        let values = vec!["a".to_string(), "b".to_string()];
        let mut rows = ArrayRows::from_values(&values);
        assert_eq!(rows.value(), Some(values));
        // Seeded rows are ordinary rows: ids keep counting upward.
        assert_eq!(rows.add(), 2);
    }

    #[test]
    fn emptied_reports_none() {
        let mut rows = ArrayRows::new();
        let id = rows.add();
        rows.set(id, "x");
        rows.remove(id);
        assert_eq!(rows.value(), None);
        assert!(rows.is_empty());
    }

    #[test]
    fn ids_never_reused_after_removal() {
        let mut rows = ArrayRows::new();
        let a = rows.add();
        let b = rows.add();
        rows.remove(b);
        let c = rows.add();
        assert_eq!((a, b, c), (0, 1, 2));
        // The survivor keeps its id.
        assert_eq!(rows.rows()[0].id, a);
    }

    #[test]
    fn unedited_rows_contribute_empty_strings() {
        let mut rows = ArrayRows::new();
        rows.add();
        let id = rows.add();
        rows.set(id, "tail");
        assert_eq!(
            rows.value(),
            Some(vec![String::new(), "tail".to_string()])
        );
    }

    #[test]
    fn set_unknown_id_is_ignored() {
        let mut rows = ArrayRows::new();
        let id = rows.add();
        rows.set(id + 1, "ghost");
        assert_eq!(rows.value(), Some(vec![String::new()]));
    }
}
