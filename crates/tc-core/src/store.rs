//! Element store: the ordered list of placed elements.
//!
//! Order is z-order is paint order. The store hands out ids, appends
//! committed elements, and moves them on drag. Undo/redo swap the whole
//! element list through `snapshot` / `restore`; the id counter lives
//! outside the list so restoring an old snapshot never rewinds it.

use crate::config::IdAllocation;
use crate::error::StoreError;
use crate::id::ElementId;
use crate::model::{Element, Position, Style};

/// A full copy of the element list at one point in time.
pub type Snapshot = Vec<Element>;

#[derive(Debug, Clone, Default)]
pub struct ElementStore {
    elements: Vec<Element>,
    next_id: u64,
    ids: IdAllocation,
}

impl ElementStore {
    pub fn new(ids: IdAllocation) -> Self {
        Self {
            elements: Vec::new(),
            next_id: 0,
            ids,
        }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Append a new element near the bottom-left of a surface of height
    /// `container_height`, `spawn_offset` units above its bottom edge.
    ///
    /// Text is taken as given; callers gate on non-blank input.
    pub fn commit(
        &mut self,
        text: impl Into<String>,
        style: Style,
        container_height: f64,
        spawn_offset: f64,
    ) -> &[Element] {
        let id = self.allocate_id();
        let position = Position::new(0.0, container_height - spawn_offset);
        let element = Element::new(id, text, style, position);
        log::debug!(
            "commit {} {:?} at ({}, {})",
            id,
            element.text(),
            position.x,
            position.y
        );
        self.elements.push(element);
        &self.elements
    }

    /// Move element `index` to `(x, y)`. Text and style are untouched.
    ///
    /// # Errors
    /// `StoreError::IndexOutOfBounds` if no element sits at `index`; the
    /// store is left unchanged.
    pub fn reposition(&mut self, index: usize, x: f64, y: f64) -> Result<(), StoreError> {
        let len = self.elements.len();
        let element = self
            .elements
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfBounds { index, len })?;
        element.position = Position::new(x, y);
        log::debug!("reposition {} to ({x}, {y})", element.id());
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        self.elements.clone()
    }

    /// Replace the element list wholesale.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.elements = snapshot;
    }

    fn allocate_id(&mut self) -> ElementId {
        match self.ids {
            IdAllocation::Monotonic => {
                let id = ElementId::new(self.next_id);
                self.next_id += 1;
                id
            }
            IdAllocation::Positional => ElementId::new(self.elements.len() as u64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(store: &ElementStore) -> Vec<u64> {
        store.elements().iter().map(|e| e.id().get()).collect()
    }

    #[test]
    fn commit_appends_with_index_ids() {
        let mut store = ElementStore::default();
        for (i, text) in ["a", "b", "c"].into_iter().enumerate() {
            let len = store.commit(text, Style::default(), 300.0, 100.0).len();
            assert_eq!(len, i + 1);
        }
        assert_eq!(ids(&store), vec![0, 1, 2]);
    }

    #[test]
    fn commit_spawns_near_bottom_left() {
        let mut store = ElementStore::default();
        store.commit("Hello", Style::default(), 300.0, 100.0);
        assert_eq!(store.get(0).unwrap().position(), Position::new(0.0, 200.0));
    }

    #[test]
    fn reposition_changes_only_target_position() {
        let mut store = ElementStore::default();
        let bold = Style {
            bold: true,
            ..Style::default()
        };
        store.commit("a", Style::default(), 300.0, 100.0);
        store.commit("b", bold, 300.0, 100.0);
        let before = store.snapshot();

        store.reposition(1, 42.0, 17.5).unwrap();

        assert_eq!(store.get(0), before.first());
        let moved = store.get(1).unwrap();
        assert_eq!(moved.position(), Position::new(42.0, 17.5));
        assert_eq!(moved.text(), "b");
        assert_eq!(moved.style(), &bold);
        assert_eq!(moved.id(), before[1].id());
    }

    #[test]
    fn reposition_out_of_bounds_is_an_error() {
        let mut store = ElementStore::default();
        store.commit("a", Style::default(), 300.0, 100.0);
        let before = store.snapshot();

        let err = store.reposition(3, 1.0, 1.0).unwrap_err();
        assert_eq!(err, StoreError::IndexOutOfBounds { index: 3, len: 1 });
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn monotonic_ids_survive_restore() {
        let mut store = ElementStore::new(IdAllocation::Monotonic);
        store.commit("a", Style::default(), 300.0, 100.0);
        let empty = Vec::new();
        store.commit("b", Style::default(), 300.0, 100.0);
        store.restore(empty);
        store.commit("c", Style::default(), 300.0, 100.0);
        assert_eq!(ids(&store), vec![2]);
    }

    #[test]
    fn positional_ids_follow_length() {
        let mut store = ElementStore::new(IdAllocation::Positional);
        store.commit("a", Style::default(), 300.0, 100.0);
        store.commit("b", Style::default(), 300.0, 100.0);
        let first = store.elements()[..1].to_vec();
        store.restore(first);
        store.commit("c", Style::default(), 300.0, 100.0);
        assert_eq!(ids(&store), vec![0, 1]);
    }
}
