//! Explicit change notification for registered views.
//!
//! The model mutates, then publishes a typed event; views subscribe for
//! the lifetime of the editor that owns the canvas and unsubscribe when
//! they go away. This replaces framework-level reactive re-rendering.

use crate::items::ItemId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one subscription so it can be removed later.
pub type SubscriptionId = u64;

/// A registry of event observers.
///
/// Observers are plain callbacks; notification is synchronous and runs in
/// the order of subscription.
pub struct Observers<E> {
    next_id: SubscriptionId,
    subscribers: Vec<(SubscriptionId, Box<dyn Fn(&E)>)>,
}

impl<E> Observers<E> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            next_id: 1,
            subscribers: Vec::new(),
        }
    }

    /// Register an observer; returns the id used to unsubscribe.
    pub fn subscribe(&mut self, observer: impl Fn(&E) + 'static) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` when the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Publish an event to every registered observer.
    pub fn notify(&self, event: &E) {
        for (_, observer) in &self.subscribers {
            observer(event);
        }
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Check whether no observers are registered.
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl<E> Default for Observers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Observers<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

/// Events published by the free-canvas editor after each mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CanvasEvent {
    /// An item was created and appended.
    ItemAdded { id: ItemId },
    /// An item was removed.
    ItemDeleted { id: ItemId },
    /// The selection changed (including to nothing).
    SelectionChanged { selected: Option<ItemId> },
    /// A text item's content was committed.
    ContentChanged { id: ItemId },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_notify_reaches_subscribers() {
        let mut observers: Observers<CanvasEvent> = Observers::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        observers.subscribe(move |event: &CanvasEvent| {
            sink.borrow_mut().push(event.clone());
        });

        observers.notify(&CanvasEvent::ItemAdded { id: 1 });
        observers.notify(&CanvasEvent::ItemDeleted { id: 1 });

        assert_eq!(
            *seen.borrow(),
            vec![
                CanvasEvent::ItemAdded { id: 1 },
                CanvasEvent::ItemDeleted { id: 1 },
            ]
        );
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut observers: Observers<CanvasEvent> = Observers::new();
        let count = Rc::new(RefCell::new(0usize));

        let sink = Rc::clone(&count);
        let id = observers.subscribe(move |_| *sink.borrow_mut() += 1);

        observers.notify(&CanvasEvent::SelectionChanged { selected: None });
        assert!(observers.unsubscribe(id));
        observers.notify(&CanvasEvent::SelectionChanged { selected: None });

        assert_eq!(*count.borrow(), 1);
        assert!(!observers.unsubscribe(id)); // Already removed
    }

    #[test]
    fn test_event_json_shape() {
        let event = CanvasEvent::SelectionChanged { selected: Some(3) };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"event":"selection_changed","selected":3}"#);
    }
}
