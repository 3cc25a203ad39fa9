use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use crate::ui::layout::centered_rect_by_size;
use crate::ui::widgets::{button_line, picker_line, section_block, summary_lines};

use super::state::{SummaryField, SummaryState};

pub fn render_summary(frame: &mut Frame<'_>, area: Rect, state: &SummaryState) {
    let form = centered_rect_by_size(64, 12, area);
    let block = section_block("Summarized Feedback List");
    let inner = block.inner(form);
    frame.render_widget(Clear, form);
    frame.render_widget(block, form);

    let mut lines = vec![
        Line::from(""),
        picker_line(
            "Course",
            state.filter_label().to_string(),
            state.focus == SummaryField::Course,
        ),
        picker_line(
            "Date",
            state.summary.date.format("%Y-%m-%d").to_string(),
            state.focus == SummaryField::Date,
        ),
        Line::from(""),
    ];
    lines.extend(summary_lines(&state.summary));
    lines.push(Line::from(""));
    lines.push(button_line(
        "Details",
        state.focus == SummaryField::Details,
        None,
    ));

    frame.render_widget(Paragraph::new(lines), inner);
}
