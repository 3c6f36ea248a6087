//! Some code around handling events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::app::App;

/// Handle a [`MouseEvent`].
pub fn handle_mouse_event(event: MouseEvent, app: &mut App) {
    match event.kind {
        MouseEventKind::ScrollUp => app.handle_scroll_up(),
        MouseEventKind::ScrollDown => app.handle_scroll_down(),
        MouseEventKind::Down(button) => {
            let (x, y) = (event.column, event.row);
            match button {
                crossterm::event::MouseButton::Left => {
                    // Trigger left click widget activity
                    app.on_left_mouse_up(x, y);
                }
                crossterm::event::MouseButton::Right => {}
                _ => {}
            }
        }
        _ => {}
    };
}

/// Handle a [`KeyEvent`], returning `true` if the application should quit.
pub fn handle_key_event_or_break(event: KeyEvent, app: &mut App) -> bool {
    if event.modifiers.is_empty() {
        match event.code {
            KeyCode::Char('q') => return true,
            KeyCode::End => app.skip_to_last(),
            KeyCode::Home => app.skip_to_first(),
            KeyCode::Up => app.on_up_key(),
            KeyCode::Down => app.on_down_key(),
            KeyCode::Tab => app.on_tab(),
            _ => {}
        }
    } else if let KeyModifiers::CONTROL = event.modifiers {
        if event.code == KeyCode::Char('c') {
            return true;
        }
    }

    false
}
