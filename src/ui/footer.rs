use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::screen::Route;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    route: Route,
    alert_open: bool,
}

impl Footer {
    pub fn new(route: Route, alert_open: bool) -> Self {
        Self { route, alert_open }
    }

    fn hints(&self) -> &'static str {
        if self.alert_open {
            return " Enter/Esc: Close │ Ctrl+Q: Quit";
        }
        match self.route {
            Route::Login => " Tab: Next │ Enter: Submit │ Ctrl+Q: Quit",
            Route::Signup => " Tab: Next │ Enter: Submit │ Ctrl+V: Show Passwords │ Esc: Back │ Ctrl+Q: Quit",
            Route::RequestForm => {
                " Tab: Next │ ←/→: Change │ Ctrl+R/F/T: Navigate │ Ctrl+P: Menu │ Ctrl+Q: Quit"
            }
            Route::StudentForm => {
                " Tab: Next │ Enter: Submit │ Ctrl+R/F/T: Navigate │ Ctrl+P: Menu │ Ctrl+Q: Quit"
            }
            Route::Summary => {
                " Tab: Next │ ←/→: Change │ Enter: Details │ Ctrl+R/F/T: Navigate │ Ctrl+Q: Quit"
            }
            Route::Detail => " ↑/↓: Scroll │ Esc: Back │ Ctrl+R/F/T: Navigate │ Ctrl+Q: Quit",
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
