use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::detail::render_detail;
use crate::ui::footer::Footer;
use crate::ui::form::Alert;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::login::render_login;
use crate::ui::request_form::render_request_form;
use crate::ui::screen::Screen;
use crate::ui::signup::render_signup;
use crate::ui::student_form::render_student_form;
use crate::ui::summary::render_summary;
use crate::ui::theme::{HEADER_TEXT, POPUP_BORDER, STATUS_ERROR, STATUS_OK};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let alert = app.screen().alert();

    frame.render_widget(Header::new(app.route(), app.teacher_name()).widget(), header);
    frame.render_widget(Clear, body);

    let tick = app.tick();
    match app.screen() {
        Screen::Login(state) => render_login(frame, body, state, tick),
        Screen::Signup(state) => render_signup(frame, body, state, tick),
        Screen::RequestForm(state) => render_request_form(frame, body, state, tick),
        Screen::StudentForm(state) => render_student_form(frame, body, state, tick),
        Screen::Summary(state) => render_summary(frame, body, state),
        Screen::Detail(state) => render_detail(frame, body, state),
    }

    frame.render_widget(Footer::new(app.route(), alert.is_some()).widget(footer), footer);

    if let Some(alert) = alert {
        draw_alert(frame, body, alert);
    } else if app.menu_open() {
        draw_teacher_menu(frame, body, app.teacher_name());
    }
}

fn draw_alert(frame: &mut Frame<'_>, body: Rect, alert: Alert<'_>) {
    let color = if alert.is_error { STATUS_ERROR } else { STATUS_OK };
    let (width, height) = alert_size(alert.message.chars().count(), body);
    let area = centered_rect_by_size(width, height, body);

    let lines = vec![
        Line::from(Span::styled(
            alert.message.to_string(),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[ OK ]",
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ];

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled(format!(" {} ", alert.title), Style::default().fg(color)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    frame.render_widget(
        Paragraph::new(lines)
            .block(popup)
            .wrap(Wrap { trim: false }),
        area,
    );
}

/// Popup size for a message of `message_len` chars, never taller than `body`.
fn alert_size(message_len: usize, body: Rect) -> (u16, u16) {
    let max_width = usize::from(body.width.saturating_sub(4).max(30));
    let width = message_len.saturating_add(4).clamp(30, max_width);
    let inner_width = width.saturating_sub(2).max(1);
    let rows = message_len.div_ceil(inner_width).max(1).saturating_add(4);
    let height = rows.min(usize::from(body.height));
    (
        u16::try_from(width).unwrap_or(u16::MAX),
        u16::try_from(height).unwrap_or(u16::MAX),
    )
}

fn draw_teacher_menu(frame: &mut Frame<'_>, body: Rect, teacher_name: &str) {
    let lines = vec![
        Line::from(Span::styled(
            format!("Teacher Name: {}", teacher_name),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: Logout",
            Style::default().fg(STATUS_ERROR),
        )),
        Line::from("Esc: Close"),
    ];
    let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16 + 4;
    let height = lines.len() as u16 + 2;
    let area = Rect {
        x: body.x + body.width.saturating_sub(width),
        y: body.y,
        width: width.min(body.width),
        height: height.min(body.height),
    };

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(" Menu ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(popup), area);
}
