use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::form::FetchStatus;
use crate::ui::theme::{GLOBAL_BORDER, LABEL_TEXT};
use crate::ui::widgets::{info_line, section_block, summary_lines};

use super::state::DetailState;

pub fn render_detail(frame: &mut Frame<'_>, area: Rect, state: &DetailState) {
    frame.render_widget(Clear, area);
    let [header, list] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .areas(area);

    let header_block = section_block("Feedback Information");
    frame.render_widget(
        Paragraph::new(summary_lines(&state.summary)).block(header_block),
        header,
    );

    let title = format!(
        "Student Feedback ({}/{})",
        (state.scroll + 1).min(state.details.len()),
        state.details.len()
    );
    let list_block = section_block(&title);

    let lines = match (state.details.is_empty(), state.details_status) {
        (true, FetchStatus::Loading) => vec![placeholder("Loading feedback...")],
        (true, _) => vec![placeholder("No feedback received yet.")],
        (false, _) => detail_lines(state, list.width),
    };

    frame.render_widget(
        Paragraph::new(lines)
            .block(list_block)
            .wrap(Wrap { trim: false }),
        list,
    );
}

fn placeholder(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}", text),
        Style::default().fg(LABEL_TEXT),
    ))
}

fn detail_lines(state: &DetailState, width: u16) -> Vec<Line<'static>> {
    let separator = "─".repeat(width.saturating_sub(4) as usize);
    let mut lines = Vec::new();
    for (idx, detail) in state.visible_details().iter().enumerate() {
        if idx > 0 {
            lines.push(Line::from(Span::styled(
                format!(" {}", separator),
                Style::default().fg(GLOBAL_BORDER),
            )));
        }
        lines.push(info_line("Course Quality", detail.course_quality.clone()));
        lines.push(info_line("Course Content", detail.course_content.clone()));
        lines.push(info_line(
            "Teaching Methodology",
            detail.teaching_methodology.clone(),
        ));
    }
    lines
}
