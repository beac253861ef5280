use std::collections::BTreeSet;

use thiserror::Error;

use crate::selection::parser::parse_selection;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    #[error("page index {index} is out of range for a {page_count}-page document")]
    OutOfRange { index: usize, page_count: usize },
}

/// Tracks which pages of the loaded document are selected.
///
/// The store is the single source of truth for the selection: it owns the
/// page count and the selected set for the lifetime of one document, and
/// every member is always within `[0, page_count)`. Reporting layers read
/// from it; they never keep selection state of their own.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    page_count: usize,
    selected: BTreeSet<usize>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a newly loaded document.
    ///
    /// Clears the previous selection, so a reload with a smaller page
    /// count can never leave stale out-of-range members behind.
    pub fn load(&mut self, page_count: usize) {
        self.page_count = page_count;
        self.selected.clear();
    }

    /// Replace the selection wholesale with the pages named by `text`.
    pub fn set_from_text(&mut self, text: &str) {
        self.selected = parse_selection(text, self.page_count);
    }

    /// Flip membership of a single page.
    pub fn toggle(&mut self, index: usize) -> Result<(), SelectionError> {
        if index >= self.page_count {
            return Err(SelectionError::OutOfRange {
                index,
                page_count: self.page_count,
            });
        }
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
        Ok(())
    }

    pub fn select_all(&mut self) {
        self.selected = (0..self.page_count).collect();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn remaining_count(&self) -> usize {
        self.page_count - self.selected.len()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// The selected indices, ascending.
    pub fn selected(&self) -> &BTreeSet<usize> {
        &self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(page_count: usize, text: &str) -> SelectionStore {
        let mut store = SelectionStore::new();
        store.load(page_count);
        store.set_from_text(text);
        store
    }

    #[test]
    fn test_set_from_text_replaces() {
        let mut store = store_with(10, "1-3");
        assert_eq!(store.selected_count(), 3);

        store.set_from_text("8");
        assert_eq!(store.selected_count(), 1);
        assert!(store.is_selected(7));
        assert!(!store.is_selected(0));
    }

    #[test]
    fn test_set_from_text_idempotent() {
        let mut store = store_with(10, "2, 4-6, 9");
        let first = store.selected().clone();
        store.set_from_text("2, 4-6, 9");
        assert_eq!(store.selected(), &first);
    }

    #[test]
    fn test_toggle_flips_membership() {
        let mut store = store_with(10, "");
        store.toggle(4).unwrap();
        assert!(store.is_selected(4));
        assert_eq!(store.selected_count(), 1);

        store.toggle(4).unwrap();
        assert!(!store.is_selected(4));
        assert_eq!(store.selected_count(), 0);
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut store = store_with(3, "1-2");
        let before = store.selected().clone();

        assert_eq!(
            store.toggle(4),
            Err(SelectionError::OutOfRange {
                index: 4,
                page_count: 3
            })
        );
        assert_eq!(store.selected(), &before);
    }

    #[test]
    fn test_toggle_on_empty_document() {
        let mut store = SelectionStore::new();
        store.load(0);
        assert!(store.toggle(0).is_err());
    }

    #[test]
    fn test_select_all_and_clear() {
        let mut store = store_with(7, "");
        store.select_all();
        assert_eq!(store.selected_count(), 7);
        assert_eq!(store.remaining_count(), 0);

        store.clear();
        assert_eq!(store.selected_count(), 0);
        assert_eq!(store.remaining_count(), 7);
    }

    #[test]
    fn test_load_clears_stale_selection() {
        let mut store = store_with(10, "8-10");
        assert_eq!(store.selected_count(), 3);

        store.load(5);
        assert_eq!(store.page_count(), 5);
        assert_eq!(store.selected_count(), 0);
        for index in 0..5 {
            assert!(!store.is_selected(index));
        }
    }

    #[test]
    fn test_counts_track_page_count() {
        let store = store_with(10, "2, 4-6, 9");
        assert_eq!(store.selected_count(), 5);
        assert_eq!(store.remaining_count(), 5);
    }
}
