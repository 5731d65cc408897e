/// In-memory record of which columns a destination table currently has.
///
/// Kept consistent with the physical table during a run so that column
/// presence never needs a metadata round-trip for fields already seen. The
/// tracked set is always a subset of the physical column set: it is seeded
/// from the table's CREATE and extended only after a successful ADD COLUMN.
#[derive(Debug, Default)]
pub struct SchemaTracker {
    columns: Vec<String>,
}

impl SchemaTracker {
    pub fn new() -> Self {
        SchemaTracker { columns: Vec::new() }
    }

    pub fn has(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Record a column as present. No-op if already tracked.
    pub fn add(&mut self, column: &str) {
        if !self.has(column) {
            self.columns.push(column.to_string());
        }
    }

    /// Tracked columns in first-seen order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_has() {
        let mut tracker = SchemaTracker::new();
        assert!(!tracker.has("a"));
        tracker.add("a");
        assert!(tracker.has("a"));
        assert!(!tracker.has("b"));
    }

    #[test]
    fn test_duplicate_add_is_noop() {
        let mut tracker = SchemaTracker::new();
        tracker.add("a");
        tracker.add("b");
        tracker.add("a");
        let cols: Vec<&str> = tracker.columns().collect();
        assert_eq!(cols, vec!["a", "b"]);
    }

    #[test]
    fn test_first_seen_order() {
        let mut tracker = SchemaTracker::new();
        for col in ["z", "a", "m"] {
            tracker.add(col);
        }
        let cols: Vec<&str> = tracker.columns().collect();
        assert_eq!(cols, vec!["z", "a", "m"]);
    }
}
