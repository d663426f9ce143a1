//! Input state management for pointer and keyboard events.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Instant;

/// Key name for the Delete key, as delivered by the platform layer.
pub const DELETE_KEY: &str = "Delete";

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer event type for unified mouse/touch handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point, button: MouseButton },
    Up { position: Point, button: MouseButton },
    Move { position: Point },
}

/// Keyboard event type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(String),
    Released(String),
}

/// Double-click detection constants.
const DOUBLE_CLICK_TIME_MS: u128 = 500;
const DOUBLE_CLICK_DISTANCE: f64 = 5.0;

/// Tracks the current input state across event dispatches.
///
/// Owned by the editor whose canvas receives the events; nothing here is
/// global. "Just pressed" state is edge-triggered: it lives from the event
/// that set it until the next [`InputState::begin_dispatch`], so a held key
/// (with platform auto-repeat delivering more key-down events) never
/// re-fires an action.
#[derive(Debug, Clone)]
pub struct InputState {
    /// Current pointer position in canvas coordinates.
    pub pointer_position: Point,
    /// Currently pressed mouse buttons.
    pressed_buttons: HashSet<MouseButton>,
    /// Buttons that were just pressed this dispatch.
    just_pressed_buttons: HashSet<MouseButton>,
    /// Currently held keys.
    pressed_keys: HashSet<String>,
    /// Keys that were just pressed this dispatch.
    just_pressed_keys: HashSet<String>,
    /// Last click time for double-click detection.
    last_click_time: Option<Instant>,
    /// Last click position for double-click detection.
    last_click_position: Option<Point>,
    /// Whether a double-click was detected this dispatch.
    double_click_detected: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            pointer_position: Point::ZERO,
            pressed_buttons: HashSet::new(),
            just_pressed_buttons: HashSet::new(),
            pressed_keys: HashSet::new(),
            just_pressed_keys: HashSet::new(),
            last_click_time: None,
            last_click_position: None,
            double_click_detected: false,
        }
    }
}

impl InputState {
    /// Create a new input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Call at the start of each event dispatch to reset edge state.
    pub fn begin_dispatch(&mut self) {
        self.just_pressed_buttons.clear();
        self.just_pressed_keys.clear();
        self.double_click_detected = false;
    }

    /// Process a pointer event.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position, button } => {
                self.pointer_position = position;
                if self.pressed_buttons.insert(button) {
                    self.just_pressed_buttons.insert(button);
                }

                // Double-click detection for the left button.
                if button == MouseButton::Left {
                    let now = Instant::now();
                    if let (Some(last_time), Some(last_pos)) =
                        (self.last_click_time, self.last_click_position)
                    {
                        let elapsed = now.duration_since(last_time).as_millis();
                        let distance = ((position.x - last_pos.x).powi(2)
                            + (position.y - last_pos.y).powi(2))
                        .sqrt();

                        if elapsed < DOUBLE_CLICK_TIME_MS && distance < DOUBLE_CLICK_DISTANCE {
                            self.double_click_detected = true;
                            // Reset so a triple-click is not another double-click.
                            self.last_click_time = None;
                            self.last_click_position = None;
                        } else {
                            self.last_click_time = Some(now);
                            self.last_click_position = Some(position);
                        }
                    } else {
                        self.last_click_time = Some(now);
                        self.last_click_position = Some(position);
                    }
                }
            }
            PointerEvent::Up { position, button } => {
                self.pointer_position = position;
                self.pressed_buttons.remove(&button);
            }
            PointerEvent::Move { position } => {
                self.pointer_position = position;
            }
        }
    }

    /// Process a key event.
    pub fn handle_key_event(&mut self, event: KeyEvent) {
        match event {
            KeyEvent::Pressed(key) => {
                if self.pressed_keys.insert(key.clone()) {
                    self.just_pressed_keys.insert(key);
                }
            }
            KeyEvent::Released(key) => {
                self.pressed_keys.remove(&key);
            }
        }
    }

    /// Check if a button is currently pressed.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.pressed_buttons.contains(&button)
    }

    /// Check if a button was just pressed this dispatch.
    pub fn is_button_just_pressed(&self, button: MouseButton) -> bool {
        self.just_pressed_buttons.contains(&button)
    }

    /// Check if a key is currently held.
    pub fn is_key_pressed(&self, key: &str) -> bool {
        self.pressed_keys.contains(key)
    }

    /// Check if a key transitioned from released to held this dispatch.
    pub fn is_key_just_pressed(&self, key: &str) -> bool {
        self.just_pressed_keys.contains(key)
    }

    /// Check if a double-click was detected this dispatch.
    pub fn is_double_click(&self) -> bool {
        self.double_click_detected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_press() {
        let mut input = InputState::new();

        input.handle_pointer_event(PointerEvent::Down {
            position: Point::new(100.0, 100.0),
            button: MouseButton::Left,
        });

        assert!(input.is_button_pressed(MouseButton::Left));
        assert!(input.is_button_just_pressed(MouseButton::Left));
        assert!(!input.is_button_pressed(MouseButton::Right));
    }

    #[test]
    fn test_begin_dispatch_clears_just_pressed() {
        let mut input = InputState::new();

        input.handle_key_event(KeyEvent::Pressed(DELETE_KEY.to_string()));
        assert!(input.is_key_just_pressed(DELETE_KEY));

        input.begin_dispatch();

        assert!(!input.is_key_just_pressed(DELETE_KEY));
        assert!(input.is_key_pressed(DELETE_KEY)); // Still held
    }

    #[test]
    fn test_held_key_does_not_refire() {
        let mut input = InputState::new();

        input.handle_key_event(KeyEvent::Pressed(DELETE_KEY.to_string()));
        assert!(input.is_key_just_pressed(DELETE_KEY));

        // Platform auto-repeat delivers another key-down while held.
        input.begin_dispatch();
        input.handle_key_event(KeyEvent::Pressed(DELETE_KEY.to_string()));
        assert!(!input.is_key_just_pressed(DELETE_KEY));

        // Release then press again: a new rising edge.
        input.begin_dispatch();
        input.handle_key_event(KeyEvent::Released(DELETE_KEY.to_string()));
        input.begin_dispatch();
        input.handle_key_event(KeyEvent::Pressed(DELETE_KEY.to_string()));
        assert!(input.is_key_just_pressed(DELETE_KEY));
    }

    #[test]
    fn test_double_click_detection() {
        let mut input = InputState::new();
        let pos = Point::new(100.0, 100.0);

        input.handle_pointer_event(PointerEvent::Down {
            position: pos,
            button: MouseButton::Left,
        });
        assert!(!input.is_double_click()); // First click is not a double-click

        input.handle_pointer_event(PointerEvent::Up {
            position: pos,
            button: MouseButton::Left,
        });
        input.begin_dispatch();

        input.handle_pointer_event(PointerEvent::Down {
            position: pos,
            button: MouseButton::Left,
        });
        assert!(input.is_double_click());

        input.begin_dispatch();
        assert!(!input.is_double_click()); // Cleared after dispatch
    }

    #[test]
    fn test_double_click_too_far() {
        let mut input = InputState::new();

        input.handle_pointer_event(PointerEvent::Down {
            position: Point::new(100.0, 100.0),
            button: MouseButton::Left,
        });
        input.handle_pointer_event(PointerEvent::Up {
            position: Point::new(100.0, 100.0),
            button: MouseButton::Left,
        });
        input.begin_dispatch();

        input.handle_pointer_event(PointerEvent::Down {
            position: Point::new(200.0, 200.0),
            button: MouseButton::Left,
        });
        assert!(!input.is_double_click());
    }
}
