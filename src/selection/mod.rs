//! View-local selection state.

/// Tracks the single "currently selected record id" for one view.
///
/// Two states: empty, or selected with an id. `select` always replaces the
/// current value, so reselecting the same card keeps it selected rather
/// than toggling it off, and `clear` returns to empty. A tracker is owned
/// by exactly one view, created when the view mounts and dropped when it
/// unmounts; nothing is shared across views or persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<u32>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a record id unconditionally.
    ///
    /// The id is not validated against any catalog; selecting an id
    /// outside the currently displayed set is allowed and simply renders
    /// as "not found" in the detail pane.
    pub fn select(&mut self, id: u32) {
        self.current = Some(id);
    }

    /// Drop the selection.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// The currently selected id, if any.
    pub fn current(&self) -> Option<u32> {
        self.current
    }
}
