use crate::ui::form::state::FormState;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const DIALOG_MIN_WIDTH: u16 = 44;

/// Render the create/edit dialog centered over `area`. No-op while hidden.
pub fn render_form_dialog(frame: &mut Frame<'_>, area: Rect, state: &FormState) {
    let FormState::Visible {
        title,
        fields,
        focused,
        editing,
        error,
    } = state
    else {
        return;
    };

    let label_width = fields
        .iter()
        .map(|field| field.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::new();
    for (idx, field) in fields.iter().enumerate() {
        let marker = if field.required { "*" } else { " " };
        let is_focused = idx == *focused;
        let label_style = if is_focused {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        let mut value_style = Style::default().fg(HEADER_TEXT);
        if is_focused {
            value_style = value_style.add_modifier(Modifier::UNDERLINED);
        }

        let mut spans = vec![
            Span::raw(" "),
            Span::styled(
                format!("{:<width$}{} ", field.label, marker, width = label_width),
                label_style,
            ),
            Span::styled(field.value.clone(), value_style),
        ];
        if is_focused {
            spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    if let Some(message) = error {
        lines.push(Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(STATUS_ERROR),
        )));
    }
    let submit = if editing.is_some() { "Update" } else { "Add" };
    lines.push(Line::from(Span::styled(
        format!(" Enter: {}  Tab: Next field  Esc: Cancel", submit),
        Style::default().fg(POPUP_BORDER),
    )));

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let width = content_width.saturating_add(4).max(DIALOG_MIN_WIDTH);
    let height = lines.len().saturating_add(2) as u16;
    let popup_area = centered_rect_by_size(area, width, height);

    frame.render_widget(Clear, popup_area);
    let block = Block::default()
        .title(Span::styled(title.clone(), Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}
