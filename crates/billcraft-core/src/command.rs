//! Serializable command surface for a decoupled presentation layer.
//!
//! A view living in another process (e.g. a web view) sends these as JSON;
//! a same-process view calls the editor methods directly. Applying a
//! command is exactly equivalent to the corresponding direct call.

use crate::editor::CanvasEditor;
use crate::items::{ItemId, ItemKind};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// One mutation or input event for the free-canvas editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CanvasCommand {
    AddItem { kind: ItemKind },
    DeleteItem { id: ItemId },
    DeleteSelected,
    UpdateTextContent { id: ItemId, content: String },
    SelectItem { id: ItemId },
    ClickBackground,
    PointerDown { x: f64, y: f64 },
    PointerUp { x: f64, y: f64 },
    KeyDown { key: String },
    KeyUp { key: String },
    BeginTextEdit { id: ItemId },
    SetTextDraft { text: String },
    CommitTextEdit,
    CancelTextEdit,
}

impl CanvasCommand {
    /// Serialize the command to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize a command from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Apply the command to an editor.
    pub fn apply(self, editor: &mut CanvasEditor) {
        match self {
            CanvasCommand::AddItem { kind } => {
                editor.add_item(kind);
            }
            CanvasCommand::DeleteItem { id } => editor.delete_item(id),
            CanvasCommand::DeleteSelected => {
                editor.delete_selected();
            }
            CanvasCommand::UpdateTextContent { id, content } => {
                editor.begin_text_edit(id);
                editor.set_text_draft(content);
                editor.commit_text_edit();
            }
            CanvasCommand::SelectItem { id } => editor.select_item(id),
            CanvasCommand::ClickBackground => editor.click_background(),
            CanvasCommand::PointerDown { x, y } => editor.pointer_down(Point::new(x, y)),
            CanvasCommand::PointerUp { x, y } => editor.pointer_up(Point::new(x, y)),
            CanvasCommand::KeyDown { key } => editor.key_down(&key),
            CanvasCommand::KeyUp { key } => editor.key_up(&key),
            CanvasCommand::BeginTextEdit { id } => {
                editor.begin_text_edit(id);
            }
            CanvasCommand::SetTextDraft { text } => editor.set_text_draft(text),
            CanvasCommand::CommitTextEdit => {
                editor.commit_text_edit();
            }
            CanvasCommand::CancelTextEdit => editor.cancel_text_edit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_json_round_trip() {
        let commands = vec![
            CanvasCommand::AddItem {
                kind: ItemKind::Text,
            },
            CanvasCommand::PointerDown { x: 120.0, y: 80.0 },
            CanvasCommand::KeyDown {
                key: "Delete".to_string(),
            },
        ];
        for command in commands {
            let json = command.to_json().unwrap();
            assert_eq!(CanvasCommand::from_json(&json).unwrap(), command);
        }
    }

    #[test]
    fn test_command_json_shape() {
        let json = CanvasCommand::AddItem {
            kind: ItemKind::Rectangle,
        }
        .to_json()
        .unwrap();
        assert_eq!(json, r#"{"op":"add_item","kind":"rectangle"}"#);
    }

    #[test]
    fn test_apply_matches_direct_calls() {
        let mut via_commands = CanvasEditor::new();
        CanvasCommand::AddItem {
            kind: ItemKind::Rectangle,
        }
        .apply(&mut via_commands);
        assert_eq!(via_commands.document().len(), 1);

        let id = via_commands.document().iter().next().unwrap().id();
        CanvasCommand::SelectItem { id }.apply(&mut via_commands);
        assert_eq!(via_commands.selection(), Some(id));

        CanvasCommand::DeleteSelected.apply(&mut via_commands);
        assert!(via_commands.document().is_empty());
        assert_eq!(via_commands.selection(), None);
    }

    #[test]
    fn test_update_text_content_command() {
        let mut editor = CanvasEditor::new();
        CanvasCommand::AddItem {
            kind: ItemKind::Text,
        }
        .apply(&mut editor);
        let id = editor.document().iter().next().unwrap().id();

        CanvasCommand::UpdateTextContent {
            id,
            content: "from the bus".to_string(),
        }
        .apply(&mut editor);

        assert_eq!(
            editor.document().get(id).unwrap().content(),
            Some("from the bus")
        );
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(CanvasCommand::from_json(r#"{"op":"warp_item"}"#).is_err());
    }
}
