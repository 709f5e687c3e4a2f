use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::formatting::truncate;
use crate::interactive::app::{RosterApp, FORM_FIELDS};
use crate::interactive::layout::centered_popup;
use crate::roster::Mode;

/// Draw the member add/edit form popup.
pub fn draw(frame: &mut Frame, area: Rect, app: &RosterApp) {
    let width: u16 = 56;
    let height: u16 = FORM_FIELDS.len() as u16 + 4;
    let popup_area = centered_popup(width, height, area);

    frame.render_widget(Clear, popup_area);

    let title = match app.editor.mode() {
        Mode::Editing(_) => " Edit Member ",
        _ => " New Member ",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Green));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let draft = app.editor.draft();
    let max_value_width = (inner.width as usize).saturating_sub(14);

    let values: Vec<String> = vec![
        placeholder(&draft.first_name, "<first name>", max_value_width),
        placeholder(&draft.last_name, "<last name>", max_value_width),
        placeholder(&draft.email, "<email>", max_value_width),
        placeholder(&app.hr_input, "<HR employee id>", max_value_width),
        draft
            .role
            .clone()
            .unwrap_or_else(|| "Select...".to_string()),
        format!("{}h", app.capacity_input),
        if draft.skills.is_empty() {
            "None".to_string()
        } else {
            truncate(
                &draft.skills.iter().collect::<Vec<_>>().join(", "),
                max_value_width,
            )
        },
    ];

    for (i, (label, value)) in FORM_FIELDS.iter().zip(values.iter()).enumerate() {
        let y = inner.y + i as u16;
        if y >= inner.y + inner.height.saturating_sub(1) {
            break;
        }

        let is_active = i == app.active_field;
        let is_missing = app
            .missing_field
            .map(|f| f.eq_ignore_ascii_case(label))
            .unwrap_or(false);

        let label_style = if is_missing {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else if is_active {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let value_style = if is_active {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let indicator = if is_active { "\u{25b6} " } else { "  " };

        let line = Line::from(vec![
            Span::styled(indicator, label_style),
            Span::styled(format!("{:<11}", label), label_style),
            Span::styled(value.clone(), value_style),
        ]);

        let row_area = Rect::new(inner.x, y, inner.width, 1);
        frame.render_widget(Paragraph::new(line), row_area);
    }

    let hints_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );
    let hints = Paragraph::new(Line::from(Span::styled(
        "Tab: Next field  Enter: Pick/Submit  Esc: Cancel",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(hints, hints_area);
}

fn placeholder(value: &str, empty: &str, max_width: usize) -> String {
    if value.is_empty() {
        empty.to_string()
    } else {
        truncate(value, max_width)
    }
}
