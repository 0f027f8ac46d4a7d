//! Bulk-selection state.
//!
//! The selection holds record ids, not page positions, so it survives
//! page changes: a record selected on page 1 stays selected while the user
//! browses page 3. The invariant that every member still exists in the
//! record store is maintained by calling [`SelectionSet::prune`] after every
//! delete.

use std::collections::HashSet;

#[derive(Debug, Default, Clone)]
pub struct SelectionSet {
    ids: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the id if absent, remove it if present.
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    /// Replace the selection with exactly the ids currently visible.
    /// Select-all is scoped to the rendered page, not the full filtered set.
    pub fn select_all_visible<I, S>(&mut self, visible_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = visible_ids.into_iter().map(Into::into).collect();
    }

    pub fn deselect_all(&mut self) {
        self.ids.clear();
    }

    /// Drop every member that no longer exists. Must run after any
    /// delete or bulk delete on the record store.
    pub fn prune<'a, I>(&mut self, existing_ids: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let existing: HashSet<&str> = existing_ids.into_iter().collect();
        self.ids.retain(|id| existing.contains(id.as_str()));
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Snapshot of the selected ids, for handing to a bulk delete.
    pub fn to_vec(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = SelectionSet::new();
        selection.toggle("a");
        assert!(selection.contains("a"));
        selection.toggle("a");
        assert!(selection.is_empty());
    }

    #[test]
    fn select_all_visible_replaces_previous_selection() {
        let mut selection = SelectionSet::new();
        selection.toggle("old");
        selection.select_all_visible(["p1", "p2", "p3"]);
        assert_eq!(selection.len(), 3);
        assert!(!selection.contains("old"));
        assert!(selection.contains("p2"));
    }

    #[test]
    fn select_all_then_deselect_all_is_empty() {
        let mut selection = SelectionSet::new();
        selection.select_all_visible((0..10).map(|i| format!("id{}", i)));
        assert_eq!(selection.len(), 10);
        selection.deselect_all();
        assert!(selection.is_empty());
    }

    #[test]
    fn prune_drops_stale_ids_only() {
        let mut selection = SelectionSet::new();
        selection.toggle("keep");
        selection.toggle("deleted");
        selection.prune(["keep", "other"]);
        assert!(selection.contains("keep"));
        assert!(!selection.contains("deleted"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn selection_is_independent_of_pages() {
        let mut selection = SelectionSet::new();
        // Toggled on "page 1", still selected after selecting nothing else.
        selection.toggle("page1-id");
        selection.toggle("page3-id");
        assert_eq!(selection.len(), 2);
        assert!(selection.contains("page1-id"));
        assert!(selection.contains("page3-id"));
    }
}
