//! Per-row state for the multi-row user form.

use crate::models::{Role, RowState};

#[derive(Debug, Clone, Default)]
struct RowSlot {
    state: RowState,
    /// Pre-assigned roles that the picker cannot remove.
    mandatory: Vec<Role>,
}

/// Row slots indexed by form position. Writing one slot never touches another.
#[derive(Debug, Clone, Default)]
pub struct RowStateStore {
    rows: Vec<RowSlot>,
}

impl RowStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a blank row and return its index.
    pub fn push(&mut self) -> usize {
        self.rows.push(RowSlot::default());
        self.rows.len() - 1
    }

    /// Replace the state at `index`, adding blank rows up to it if needed.
    pub fn set(&mut self, index: usize, state: RowState) {
        self.ensure(index);
        self.rows[index].state = state;
    }

    pub fn get(&self, index: usize) -> Option<&RowState> {
        self.rows.get(index).map(|slot| &slot.state)
    }

    /// Remove the row at `index`; rows above it shift down by one.
    pub fn remove(&mut self, index: usize) -> Option<RowState> {
        if index < self.rows.len() {
            Some(self.rows.remove(index).state)
        } else {
            None
        }
    }

    /// Blank the row at `index`, dropping its mandatory roles as well.
    pub fn reset(&mut self, index: usize) {
        if let Some(slot) = self.rows.get_mut(index) {
            *slot = RowSlot::default();
        }
    }

    pub fn reset_all(&mut self) {
        self.rows.iter_mut().for_each(|slot| *slot = RowSlot::default());
    }

    pub fn set_mandatory(&mut self, index: usize, roles: Vec<Role>) {
        self.ensure(index);
        self.rows[index].mandatory = roles;
    }

    pub fn mandatory(&self, index: usize) -> &[Role] {
        self.rows
            .get(index)
            .map(|slot| slot.mandatory.as_slice())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn ensure(&mut self, index: usize) {
        if index >= self.rows.len() {
            self.rows.resize_with(index + 1, RowSlot::default);
        }
    }
}
