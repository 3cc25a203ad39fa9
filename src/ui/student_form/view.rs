use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use crate::ui::layout::centered_rect_by_size;
use crate::ui::widgets::{button_line, field_line, section_block, summary_lines};

use super::state::{StudentField, StudentFormState};

pub fn render_student_form(frame: &mut Frame<'_>, area: Rect, state: &StudentFormState, tick: u8) {
    let form = centered_rect_by_size(72, 14, area);
    let block = section_block("Student Feedback Form");
    let inner = block.inner(form);
    frame.render_widget(Clear, form);
    frame.render_widget(block, form);

    let mut lines = vec![Line::from("")];
    lines.extend(summary_lines(&state.summary));
    lines.push(Line::from(""));

    let comments = [
        (StudentField::CourseQuality, "Course Quality", &state.course_quality),
        (StudentField::CourseContent, "Course Content", &state.course_content),
        (
            StudentField::TeachingMethodology,
            "Teaching Methodology",
            &state.teaching_methodology,
        ),
    ];
    for (field, label, value) in comments {
        lines.push(field_line(label, value.display(), state.focus == field));
    }

    lines.push(Line::from(""));
    lines.push(button_line(
        "Submit",
        state.focus == StudentField::Submit,
        state.phase.is_awaiting().then_some(tick),
    ));

    frame.render_widget(Paragraph::new(lines), inner);
}
