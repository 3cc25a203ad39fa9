//! Line builders shared by the screen views.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

use crate::ui::form::RequestSummary;
use crate::ui::theme::{ACCENT_BLUE, ACTIVE_HIGHLIGHT, HEADER_TEXT, LABEL_TEXT, POPUP_BORDER};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Width reserved for field labels.
const LABEL_WIDTH: usize = 18;

pub fn spinner(tick: u8) -> &'static str {
    SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()]
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(HEADER_TEXT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT)
    }
}

fn label(text: &str) -> Span<'static> {
    Span::styled(
        format!("  {:<width$}", format!("{}:", text), width = LABEL_WIDTH),
        Style::default().fg(LABEL_TEXT),
    )
}

/// Editable text field. The focused field shows a cursor block.
pub fn field_line(name: &str, value: String, focused: bool) -> Line<'static> {
    let shown = if focused { format!("{}▏", value) } else { value };
    Line::from(vec![
        label(name),
        Span::styled(format!(" {} ", shown), focus_style(focused)),
    ])
}

/// Value chosen with Left/Right.
pub fn picker_line(name: &str, value: String, focused: bool) -> Line<'static> {
    let shown = if focused {
        format!(" ◀ {} ▶ ", value)
    } else {
        format!("   {}   ", value)
    };
    Line::from(vec![label(name), Span::styled(shown, focus_style(focused))])
}

/// Read-only label/value pair.
pub fn info_line(name: &str, value: String) -> Line<'static> {
    Line::from(vec![
        label(name),
        Span::styled(value, Style::default().fg(HEADER_TEXT)),
    ])
}

/// Button; `busy` carries the animation tick while a request is in flight.
pub fn button_line(text: &str, focused: bool, busy: Option<u8>) -> Line<'static> {
    let mut spans = vec![
        Span::raw("  "),
        Span::styled(
            format!(" {} ", text),
            focus_style(focused).fg(ACCENT_BLUE),
        ),
    ];
    if let Some(tick) = busy {
        spans.push(Span::styled(
            format!("  {} sending...", spinner(tick)),
            Style::default().fg(LABEL_TEXT),
        ));
    }
    Line::from(spans)
}

/// Topic, date and course of the open feedback request.
pub fn summary_lines(summary: &RequestSummary) -> Vec<Line<'static>> {
    vec![
        info_line("Topic", summary.topic.clone()),
        info_line("Date", summary.date.format("%Y-%m-%d").to_string()),
        info_line("Course Name", summary.course_name.clone()),
    ]
}

pub fn section_block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER))
}
