use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use crate::ui::form::FetchStatus;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::widgets::{button_line, field_line, picker_line, section_block};

use super::state::{RequestField, RequestFormState};

pub fn render_request_form(frame: &mut Frame<'_>, area: Rect, state: &RequestFormState, tick: u8) {
    let form = centered_rect_by_size(64, 11, area);
    let block = section_block("Request Form");
    let inner = block.inner(form);
    frame.render_widget(Clear, form);
    frame.render_widget(block, form);

    let course = match (state.selected_course(), state.courses_status) {
        (Some(name), _) => name.to_string(),
        (None, FetchStatus::Loading) => "loading...".to_string(),
        (None, _) => "no courses".to_string(),
    };

    let lines = vec![
        Line::from(""),
        picker_line("Course Name", course, state.focus == RequestField::Course),
        picker_line(
            "Date",
            state.date.format("%Y-%m-%d").to_string(),
            state.focus == RequestField::Date,
        ),
        field_line(
            "Topic",
            state.topic.display(),
            state.focus == RequestField::Topic,
        ),
        Line::from(""),
        button_line(
            "Submit",
            state.focus == RequestField::Submit,
            state.phase.is_awaiting().then_some(tick),
        ),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
