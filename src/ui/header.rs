use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::screen::Route;
use crate::ui::theme::{ACCENT_BLUE, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};

/// Tabs of the teacher navigation bar.
const TEACHER_TABS: [(Route, &str); 3] = [
    (Route::RequestForm, "Request Form"),
    (Route::Summary, "Feedbacks"),
    (Route::StudentForm, "Student Form"),
];

pub struct Header<'a> {
    route: Route,
    teacher_name: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(route: Route, teacher_name: &'a str) -> Self {
        Self {
            route,
            teacher_name,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![
            Span::styled("  Course Feedback", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(self.route.title(), text_style),
        ];

        if self.route.is_teacher_area() {
            for (route, label) in TEACHER_TABS {
                spans.push(Span::styled("  │  ", separator_style));
                // Detail belongs to the Feedbacks tab
                let active = route == self.route
                    || (route == Route::Summary && self.route == Route::Detail);
                let style = if active {
                    Style::default()
                        .fg(ACCENT_BLUE)
                        .bg(ACTIVE_HIGHLIGHT)
                        .add_modifier(Modifier::BOLD)
                } else {
                    text_style
                };
                spans.push(Span::styled(format!(" {} ", label), style));
            }
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(format!("👤 {}", self.teacher_name), text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
