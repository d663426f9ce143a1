//! Billcraft Core Library
//!
//! Item model, selection controller, and interaction logic for the
//! Billcraft canvas editor. Presentation is out of scope: the crate
//! exposes read-only snapshots, mutation operations, and change events,
//! and a rendering layer (in-process or across a command bus) draws
//! whatever the model computes.

pub mod command;
pub mod document;
pub mod editor;
pub mod events;
pub mod input;
pub mod items;
pub mod selection;

pub use command::CanvasCommand;
pub use document::CanvasDocument;
pub use editor::{CanvasEditor, CanvasSnapshot};
pub use events::{CanvasEvent, Observers, SubscriptionId};
pub use input::{InputState, KeyEvent, MouseButton, PointerEvent, DELETE_KEY};
pub use items::{CircleItem, Item, ItemId, ItemKind, ItemTrait, RectangleItem, TextItem};
pub use selection::Selection;
