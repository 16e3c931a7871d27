use crate::model::Record;
use crate::ui::app::{App, EntityTab, Focus};
use crate::ui::footer::Footer;
use crate::ui::form::render_form_dialog;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::notify::{Notifications, ToastKind};
use crate::ui::pane::Pane;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.tab()), header);
    frame.render_widget(Clear, body);
    match app.tab() {
        EntityTab::Products => draw_pane(frame, body, app.products(), app.focus()),
        EntityTab::Users => draw_pane(frame, body, app.users(), app.focus()),
    }
    frame.render_widget(Footer::new().widget(footer), footer);

    draw_toasts(frame, body, app.notifications());

    match app.tab() {
        EntityTab::Products => render_form_dialog(frame, body, app.products().form()),
        EntityTab::Users => render_form_dialog(frame, body, app.users().form()),
    }
}

fn draw_pane<R: Record>(frame: &mut Frame<'_>, area: Rect, pane: &Pane<R>, focus: Focus) {
    if area.height == 0 {
        return;
    }
    let search_line = Rect { height: 1, ..area };
    let table_area = Rect {
        y: area.y + 1,
        height: area.height.saturating_sub(1),
        ..area
    };

    draw_search_line(frame, search_line, pane, focus);

    let status = pane.store().status();
    if let Some(error) = &status.error {
        // A failed fetch empties the list; its message takes the list's place.
        let message = Paragraph::new(Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(STATUS_ERROR),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
        frame.render_widget(message, table_area);
        return;
    }

    draw_table(frame, table_area, pane);
}

fn draw_search_line<R: Record>(frame: &mut Frame<'_>, area: Rect, pane: &Pane<R>, focus: Focus) {
    let query = pane.store().query();
    let searching = focus == Focus::Search;

    let mut spans = vec![Span::styled(" Search: ", Style::default().fg(HEADER_TEXT))];
    if query.is_empty() && !searching {
        spans.push(Span::styled(
            "Search...",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        ));
    } else {
        spans.push(Span::styled(
            query.to_string(),
            Style::default().fg(HEADER_TEXT),
        ));
    }
    if searching {
        spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
    }
    if pane.store().status().loading {
        spans.push(Span::styled(
            "  Loading...",
            Style::default().fg(ACCENT).add_modifier(Modifier::DIM),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_table<R: Record>(frame: &mut Frame<'_>, area: Rect, pane: &Pane<R>) {
    let sort = pane.store().sort();

    let mut header_cells = vec![Cell::from("#")];
    for spec in R::FIELDS {
        let mut label = spec.label.to_string();
        if let Some(criteria) = sort {
            if criteria.field == spec.name {
                label.push(' ');
                label.push_str(criteria.direction.indicator());
            }
        }
        let style = if sort.is_some_and(|c| c.field == spec.name) {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD)
        };
        header_cells.push(Cell::from(Span::styled(label, style)));
    }

    let rows: Vec<Row> = pane
        .store()
        .view()
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let mut cells = vec![Cell::from(format!("{}", idx + 1))];
            for spec in R::FIELDS {
                let text = record
                    .field(spec.name)
                    .map(|value| value.to_string())
                    .unwrap_or_default();
                cells.push(Cell::from(text));
            }
            Row::new(cells)
        })
        .collect();

    let empty = rows.is_empty();
    let mut widths = vec![Constraint::Length(4)];
    widths.extend(R::FIELDS.iter().map(|_| Constraint::Fill(1)));

    let table = Table::new(rows, widths)
        .header(Row::new(header_cells).style(Style::default().fg(HEADER_TEXT)))
        .row_highlight_style(
            Style::default()
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );

    let mut state = TableState::default();
    if !empty {
        state.select(Some(pane.selected()));
    }
    frame.render_stateful_widget(table, area, &mut state);
}

fn draw_toasts(frame: &mut Frame<'_>, area: Rect, notifications: &Notifications) {
    if notifications.is_empty() || area.height == 0 {
        return;
    }

    let toasts: Vec<_> = notifications.iter().collect();
    let width = toasts
        .iter()
        .map(|toast| toast.text.chars().count() + 2)
        .max()
        .unwrap_or(0)
        .min(area.width as usize) as u16;
    let height = (toasts.len() as u16).min(area.height);
    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y + area.height.saturating_sub(height),
        width,
        height,
    };

    let lines: Vec<Line> = toasts
        .iter()
        .rev()
        .take(height as usize)
        .rev()
        .map(|toast| {
            let color = match toast.kind {
                ToastKind::Success => STATUS_OK,
                ToastKind::Error => STATUS_ERROR,
            };
            Line::from(Span::styled(
                format!(" {} ", toast.text),
                Style::default().fg(color).bg(ACTIVE_HIGHLIGHT),
            ))
        })
        .collect();

    frame.render_widget(Clear, toast_area);
    frame.render_widget(Paragraph::new(lines), toast_area);
}
