//! Free-canvas editor: routes user input into model mutations.

use crate::document::CanvasDocument;
use crate::events::{CanvasEvent, Observers, SubscriptionId};
use crate::input::{InputState, KeyEvent, MouseButton, PointerEvent, DELETE_KEY};
use crate::items::{Item, ItemId, ItemKind};
use crate::selection::Selection;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A transient text-edit session.
///
/// Exists only while the overlay editor is open; the item itself is
/// untouched until the session commits.
#[derive(Debug, Clone, PartialEq)]
struct TextEditSession {
    item: ItemId,
    draft: String,
}

/// Read-only view of the canvas for the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasSnapshot {
    /// Items in render order (back to front).
    pub items: Vec<Item>,
    /// The selected item, if any.
    pub selected: Option<ItemId>,
}

/// The free-canvas editor.
///
/// Owns the document, the selection controller, and the input state for
/// one canvas; all mutations go through here so every change is followed
/// by an explicit event publication.
#[derive(Debug)]
pub struct CanvasEditor {
    document: CanvasDocument,
    selection: Selection<ItemId>,
    input: InputState,
    text_edit: Option<TextEditSession>,
    observers: Observers<CanvasEvent>,
}

impl Default for CanvasEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasEditor {
    /// Create an editor with an empty canvas.
    pub fn new() -> Self {
        Self {
            document: CanvasDocument::new(),
            selection: Selection::new(),
            input: InputState::new(),
            text_edit: None,
            observers: Observers::new(),
        }
    }

    /// The underlying document.
    pub fn document(&self) -> &CanvasDocument {
        &self.document
    }

    /// The selected item id, if any.
    pub fn selection(&self) -> Option<ItemId> {
        self.selection.selected()
    }

    /// Whether a delete action currently has a target.
    pub fn can_delete(&self) -> bool {
        self.selection.has_selection()
    }

    /// The item currently in text-edit mode, if any.
    pub fn editing_item(&self) -> Option<ItemId> {
        self.text_edit.as_ref().map(|session| session.item)
    }

    /// The in-progress edit text, if a session is open.
    pub fn text_draft(&self) -> Option<&str> {
        self.text_edit.as_ref().map(|session| session.draft.as_str())
    }

    /// Take a read-only snapshot for rendering.
    pub fn snapshot(&self) -> CanvasSnapshot {
        CanvasSnapshot {
            items: self.document.iter().cloned().collect(),
            selected: self.selection.selected(),
        }
    }

    /// Register an observer for canvas events.
    pub fn subscribe(&mut self, observer: impl Fn(&CanvasEvent) + 'static) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    /// Remove a previously registered observer.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Create an item and append it to the canvas (toolbar action).
    pub fn add_item(&mut self, kind: ItemKind) -> ItemId {
        let id = self.document.add_item(kind);
        self.observers.notify(&CanvasEvent::ItemAdded { id });
        id
    }

    /// Delete an item by id; silent no-op when absent.
    ///
    /// Clears the selection (and any open edit session) when they point at
    /// the removed item.
    pub fn delete_item(&mut self, id: ItemId) {
        if self.document.remove_item(id).is_none() {
            return;
        }
        if self.editing_item() == Some(id) {
            // The edit surface vanished with its item; nothing to commit.
            self.text_edit = None;
        }
        let was_selected = self.selection.is_selected(id);
        self.selection.item_deleted(id);
        self.observers.notify(&CanvasEvent::ItemDeleted { id });
        if was_selected {
            self.observers
                .notify(&CanvasEvent::SelectionChanged { selected: None });
        }
    }

    /// Delete the selected item, if any (toolbar action or Delete key).
    pub fn delete_selected(&mut self) -> bool {
        match self.selection.selected() {
            Some(id) => {
                self.delete_item(id);
                true
            }
            None => false,
        }
    }

    /// Handle a click on an item: toggle selection.
    ///
    /// Unknown ids are ignored so the selection can never point at an
    /// absent item.
    pub fn select_item(&mut self, id: ItemId) {
        if self.document.get(id).is_none() {
            return;
        }
        self.selection.select(id);
        log::trace!("selection -> {:?}", self.selection.selected());
        self.observers.notify(&CanvasEvent::SelectionChanged {
            selected: self.selection.selected(),
        });
    }

    /// Handle a click on the canvas background.
    ///
    /// Commits any open text edit (the overlay loses focus) and clears
    /// the selection.
    pub fn click_background(&mut self) {
        self.commit_text_edit();
        if self.selection.has_selection() {
            self.selection.click_background();
            self.observers
                .notify(&CanvasEvent::SelectionChanged { selected: None });
        }
    }

    /// Handle a pointer-down on the canvas.
    ///
    /// Hit-tests topmost-first: an item hit consumes the click (selection
    /// toggle, and edit mode on a text double-click); a background hit
    /// deselects.
    pub fn pointer_down(&mut self, position: Point) {
        self.input.begin_dispatch();
        self.input.handle_pointer_event(PointerEvent::Down {
            position,
            button: MouseButton::Left,
        });

        match self.document.item_at_point(position, 0.0) {
            Some(id) => {
                if self.editing_item() == Some(id) {
                    // Clicks inside the open edit surface stay in the overlay.
                    return;
                }
                self.commit_text_edit();
                self.select_item(id);
                if self.input.is_double_click()
                    && self.document.get(id).is_some_and(Item::is_text)
                {
                    self.begin_text_edit(id);
                }
            }
            None => self.click_background(),
        }
    }

    /// Handle a pointer-up on the canvas.
    pub fn pointer_up(&mut self, position: Point) {
        self.input.begin_dispatch();
        self.input.handle_pointer_event(PointerEvent::Up {
            position,
            button: MouseButton::Left,
        });
    }

    /// Handle a key-down event.
    ///
    /// On the rising edge of Delete with a live selection, deletes the
    /// selected item. Held keys (platform auto-repeat) never re-fire.
    pub fn key_down(&mut self, key: &str) {
        self.input.begin_dispatch();
        self.input.handle_key_event(KeyEvent::Pressed(key.to_string()));
        if self.input.is_key_just_pressed(DELETE_KEY) && self.text_edit.is_none() {
            self.delete_selected();
        }
    }

    /// Handle a key-up event.
    pub fn key_up(&mut self, key: &str) {
        self.input.begin_dispatch();
        self.input.handle_key_event(KeyEvent::Released(key.to_string()));
    }

    /// Open a text-edit session on a text item (double-click action).
    ///
    /// Returns `false` for non-text items and unknown ids. Selection is
    /// left exactly as it was.
    pub fn begin_text_edit(&mut self, id: ItemId) -> bool {
        let Some(content) = self.document.get(id).and_then(Item::content) else {
            return false;
        };
        self.text_edit = Some(TextEditSession {
            item: id,
            draft: content.to_string(),
        });
        true
    }

    /// Replace the draft text of the open edit session.
    pub fn set_text_draft(&mut self, text: String) {
        if let Some(session) = &mut self.text_edit {
            session.draft = text;
        }
    }

    /// Commit the open edit session (focus loss), writing the draft back
    /// to the item. Returns the edited item id, if a session was open.
    pub fn commit_text_edit(&mut self) -> Option<ItemId> {
        let session = self.text_edit.take()?;
        if self.document.update_text_content(session.item, session.draft) {
            self.observers
                .notify(&CanvasEvent::ContentChanged { id: session.item });
        }
        Some(session.item)
    }

    /// Discard the open edit session without committing.
    pub fn cancel_text_edit(&mut self) {
        self.text_edit = None;
    }
}
