use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, FormKey};
use crate::ui::form::{FieldEdit, Step};
use crate::ui::screen::Route;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.menu_open() {
        match key.code {
            KeyCode::Enter => app.logout(),
            KeyCode::Esc => app.close_menu(),
            _ if is_ctrl_char(key, 'p') => app.close_menu(),
            _ => {}
        }
        return;
    }

    if app.route().is_teacher_area() && app.screen().alert().is_none() {
        let target = if is_ctrl_char(key, 'r') {
            Some(Route::RequestForm)
        } else if is_ctrl_char(key, 'f') {
            Some(Route::Summary)
        } else if is_ctrl_char(key, 't') {
            Some(Route::StudentForm)
        } else {
            None
        };
        if let Some(route) = target {
            app.navigate(route);
            return;
        }
        if is_ctrl_char(key, 'p') {
            app.toggle_menu();
            return;
        }
    }

    if let Some(form_key) = form_key(key) {
        app.on_form_key(form_key);
    }
}

/// Decodes keys that address the visible form.
pub fn form_key(key: KeyEvent) -> Option<FormKey> {
    if is_ctrl_char(key, 'v') {
        return Some(FormKey::ToggleVisibility);
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => Some(FormKey::Focus(Step::Forward)),
        KeyCode::BackTab | KeyCode::Up => Some(FormKey::Focus(Step::Back)),
        KeyCode::Left => Some(FormKey::Adjust(Step::Back)),
        KeyCode::Right => Some(FormKey::Adjust(Step::Forward)),
        KeyCode::Enter => Some(FormKey::Activate),
        KeyCode::Esc => Some(FormKey::Escape),
        KeyCode::Backspace => Some(FormKey::Edit(FieldEdit::Backspace)),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(FormKey::Edit(FieldEdit::Insert(ch)))
        }
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
