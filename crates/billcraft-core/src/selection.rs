//! Single-selection state machine shared by both canvases.

use serde::{Deserialize, Serialize};

/// Selection state: at most one selected id per canvas context.
///
/// Generic over the id type so the free canvas (integer ids) and the
/// invoice canvas (uuid ids) share one controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selection<Id> {
    /// Nothing selected.
    #[default]
    Unselected,
    /// A single id is selected.
    Selected(Id),
}

impl<Id: Copy + PartialEq> Selection<Id> {
    /// Create a new selection in the `Unselected` state.
    pub fn new() -> Self {
        Selection::Unselected
    }

    /// Handle a click on an item.
    ///
    /// Clicking the already-selected id toggles the selection off; any
    /// other id becomes the selection.
    pub fn select(&mut self, id: Id) {
        *self = match *self {
            Selection::Selected(current) if current == id => Selection::Unselected,
            _ => Selection::Selected(id),
        };
    }

    /// Handle a click on the canvas background: always deselect.
    ///
    /// Only fired when the event target is the background itself; item
    /// clicks consume the event before it reaches here.
    pub fn click_background(&mut self) {
        *self = Selection::Unselected;
    }

    /// Notify the controller that an item was deleted.
    ///
    /// Clears the selection when the deleted id was selected; otherwise
    /// leaves it untouched.
    pub fn item_deleted(&mut self, id: Id) {
        if *self == Selection::Selected(id) {
            *self = Selection::Unselected;
        }
    }

    /// The selected id, or `None`.
    pub fn selected(&self) -> Option<Id> {
        match *self {
            Selection::Selected(id) => Some(id),
            Selection::Unselected => None,
        }
    }

    /// Check whether the given id is selected.
    pub fn is_selected(&self, id: Id) -> bool {
        *self == Selection::Selected(id)
    }

    /// Check whether anything is selected.
    pub fn has_selection(&self) -> bool {
        matches!(self, Selection::Selected(_))
    }
}
