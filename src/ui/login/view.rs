use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use crate::ui::layout::centered_rect_by_size;
use crate::ui::widgets::{button_line, field_line, section_block};

use super::state::{LoginField, LoginState};

pub fn render_login(frame: &mut Frame<'_>, area: Rect, state: &LoginState, tick: u8) {
    let form = centered_rect_by_size(56, 10, area);
    let block = section_block("Sign In");
    let inner = block.inner(form);
    frame.render_widget(Clear, form);
    frame.render_widget(block, form);

    let busy = state.phase.is_awaiting().then_some(tick);
    let lines = vec![
        Line::from(""),
        field_line(
            "Username",
            state.username.display(),
            state.focus == LoginField::Username,
        ),
        field_line(
            "Password",
            state.password.display(),
            state.focus == LoginField::Password,
        ),
        Line::from(""),
        button_line("Login", state.focus == LoginField::LoginButton, busy),
        button_line(
            "Don't have an account? Register",
            state.focus == LoginField::RegisterButton,
            None,
        ),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
