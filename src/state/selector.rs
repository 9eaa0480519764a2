//! Tab/selector state for the interface gallery.
//!
//! Tracks which of N catalog items is active and nothing else; the
//! detail panel is derived purely from the active index at draw time.

use crate::state::{Keyed, StateError};

#[derive(Debug)]
pub struct Selector<T: Keyed> {
    items: Vec<T>,
    active: usize,
}

impl<T: Keyed> Selector<T> {
    pub fn new(items: Vec<T>) -> Result<Self, StateError> {
        if items.is_empty() {
            return Err(StateError::EmptyItems {
                component: "selector",
            });
        }
        Ok(Self { items, active: 0 })
    }

    /// Activate the item with the given id. An unknown id leaves the
    /// current selection unchanged; ids are compile-time constants here,
    /// so a miss is silently ignored rather than surfaced.
    ///
    /// Returns true if the selection changed.
    pub fn set_active(&mut self, id: &str) -> bool {
        match self.items.iter().position(|item| item.key() == id) {
            Some(index) if index != self.active => {
                self.active = index;
                true
            }
            _ => false,
        }
    }

    /// Cycle forward through the catalog, wrapping at the end.
    pub fn next(&mut self) {
        self.active = (self.active + 1) % self.items.len();
    }

    /// Cycle backward, wrapping to the last item from the first.
    pub fn prev(&mut self) {
        self.active = self.active.checked_sub(1).unwrap_or(self.items.len() - 1);
    }

    pub fn active(&self) -> &T {
        &self.items[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Panel {
        id: &'static str,
    }

    impl Keyed for Panel {
        fn key(&self) -> &str {
            self.id
        }
    }

    fn panels() -> Vec<Panel> {
        vec![
            Panel { id: "home" },
            Panel { id: "qr" },
            Panel { id: "wallet" },
        ]
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let err = Selector::<Panel>::new(vec![]).unwrap_err();
        assert_eq!(
            err,
            StateError::EmptyItems {
                component: "selector"
            }
        );
    }

    #[test]
    fn set_active_by_id() {
        let mut selector = Selector::new(panels()).unwrap();
        assert!(selector.set_active("wallet"));
        assert_eq!(selector.active().key(), "wallet");
        assert_eq!(selector.active_index(), 2);
    }

    #[test]
    fn unknown_id_leaves_selection_unchanged() {
        let mut selector = Selector::new(panels()).unwrap();
        selector.set_active("qr");
        assert!(!selector.set_active("no-such-screen"));
        assert_eq!(selector.active().key(), "qr");
    }

    #[test]
    fn cycling_wraps_both_ways() {
        let mut selector = Selector::new(panels()).unwrap();
        selector.prev();
        assert_eq!(selector.active_index(), 2);
        selector.next();
        assert_eq!(selector.active_index(), 0);
    }
}
