use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::LABEL_TEXT;
use crate::ui::widgets::{button_line, field_line, section_block};

use super::state::{SignupField, SignupState};

pub fn render_signup(frame: &mut Frame<'_>, area: Rect, state: &SignupState, tick: u8) {
    let form = centered_rect_by_size(60, 15, area);
    let block = section_block("Create Account");
    let inner = block.inner(form);
    frame.render_widget(Clear, form);
    frame.render_widget(block, form);

    let text_fields = [
        (SignupField::Username, "Username", &state.username),
        (SignupField::Name, "Name", &state.name),
        (SignupField::Email, "Email", &state.email),
        (SignupField::Password, "Password", &state.password),
        (SignupField::ConfirmPassword, "Confirm Password", &state.confirm_password),
    ];

    let mut lines = vec![Line::from("")];
    for (field, label, value) in text_fields {
        lines.push(field_line(label, value.display(), state.focus == field));
    }

    let visibility = if state.passwords_visible() {
        "Ctrl+V: hide passwords"
    } else {
        "Ctrl+V: show passwords"
    };
    lines.push(Line::from(Span::styled(
        format!("  {}", visibility),
        Style::default().fg(LABEL_TEXT),
    )));
    lines.push(Line::from(""));

    let busy = state.phase.is_awaiting().then_some(tick);
    lines.push(button_line(
        "Sign Up",
        state.focus == SignupField::SignUpButton,
        busy,
    ));
    lines.push(button_line(
        "Back to Login",
        state.focus == SignupField::BackButton,
        None,
    ));

    frame.render_widget(Paragraph::new(lines), inner);
}
