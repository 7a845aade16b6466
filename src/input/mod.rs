use macroquad::prelude::*;

use crate::application::{Editor, InputEvent};
use crate::domain::CellChange;
use crate::ui::{Button, PanelAction, board_area_width};

/// Keys forwarded to the editor as characters
const KEYS: [(KeyCode, char); 3] = [(KeyCode::R, 'r'), (KeyCode::C, 'c'), (KeyCode::S, 's')];

/// Turns macroquad's polled mouse state into pointer events.
/// Drag events fire only when the pointer moved since the last frame.
#[derive(Default)]
pub struct PointerTracker {
    last_pos: Option<(f32, f32)>,
}

impl PointerTracker {
    /// Build this frame's pointer events from raw button state
    pub fn events(
        &mut self,
        mouse_pos: (f32, f32),
        pressed: bool,
        down: bool,
        released: bool,
    ) -> Vec<InputEvent> {
        let (x, y) = mouse_pos;
        let mut events = Vec::new();

        if pressed {
            events.push(InputEvent::PointerDown { x, y });
            self.last_pos = Some(mouse_pos);
        } else if down && self.last_pos.is_some_and(|last| last != mouse_pos) {
            events.push(InputEvent::PointerDrag { x, y });
            self.last_pos = Some(mouse_pos);
        }

        if released {
            events.push(InputEvent::PointerUp);
            self.last_pos = None;
        }
        events
    }

    /// Poll macroquad; presses over the panel are left to the buttons
    pub fn poll(&mut self, mouse_pos: (f32, f32)) -> Vec<InputEvent> {
        let pressed =
            is_mouse_button_pressed(MouseButton::Left) && mouse_pos.0 < board_area_width();
        self.events(
            mouse_pos,
            pressed,
            is_mouse_button_down(MouseButton::Left),
            is_mouse_button_released(MouseButton::Left),
        )
    }
}

/// Key presses this frame as editor events
pub fn poll_keys() -> Vec<InputEvent> {
    KEYS.iter()
        .filter(|(code, _)| is_key_pressed(*code))
        .map(|&(_, key)| InputEvent::KeyPress(key))
        .collect()
}

/// Feed all of this frame's input to the editor, collecting every change
pub fn process_input(
    editor: &mut Editor,
    tracker: &mut PointerTracker,
    buttons: &[(Button, PanelAction)],
    mouse_pos: (f32, f32),
) -> Vec<CellChange> {
    let mut changes = process_button_clicks(editor, buttons, mouse_pos);

    tracker
        .poll(mouse_pos)
        .into_iter()
        .chain(poll_keys())
        .for_each(|event| changes.extend(editor.handle(event)));
    changes
}

/// Process panel button clicks
pub fn process_button_clicks(
    editor: &mut Editor,
    buttons: &[(Button, PanelAction)],
    mouse_pos: (f32, f32),
) -> Vec<CellChange> {
    buttons
        .iter()
        .filter(|(btn, _)| btn.is_clicked(mouse_pos))
        .flat_map(|&(_, action)| match action {
            PanelAction::Run(command) => editor.run(command),
            PanelAction::CycleAlgorithm => {
                editor.set_algorithm(editor.algorithm().next());
                Vec::new()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_then_move_then_release() {
        let mut tracker = PointerTracker::default();
        assert_eq!(
            tracker.events((5.0, 5.0), true, true, false),
            vec![InputEvent::PointerDown { x: 5.0, y: 5.0 }]
        );
        // Holding still produces nothing
        assert!(tracker.events((5.0, 5.0), false, true, false).is_empty());
        assert_eq!(
            tracker.events((15.0, 5.0), false, true, false),
            vec![InputEvent::PointerDrag { x: 15.0, y: 5.0 }]
        );
        assert_eq!(
            tracker.events((15.0, 5.0), false, false, true),
            vec![InputEvent::PointerUp]
        );
    }

    #[test]
    fn test_no_drag_without_press() {
        let mut tracker = PointerTracker::default();
        assert!(tracker.events((5.0, 5.0), false, true, false).is_empty());
        assert!(tracker.events((9.0, 5.0), false, true, false).is_empty());
    }

    #[test]
    fn test_click_then_hold_keeps_toggle() {
        let mut editor = Editor::new(crate::EditorConfig::default().with_seed(0)).unwrap();
        let mut tracker = PointerTracker::default();

        // Clicking a wall opens it; holding without moving must not repaint it.
        editor.handle(InputEvent::PointerDown { x: 5.0, y: 5.0 });
        editor.handle(InputEvent::PointerUp);
        for event in tracker.events((5.0, 5.0), true, true, false) {
            editor.handle(event);
        }
        for event in tracker.events((5.0, 5.0), false, true, false) {
            editor.handle(event);
        }
        assert_eq!(editor.grid().get(0, 0), Ok(crate::Cell::Open));
    }
}
