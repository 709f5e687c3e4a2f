use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::formatting::truncate;
use crate::interactive::app::{Popup, RosterApp};
use crate::interactive::layout::centered_popup;

/// Draw the role (single-select) or skill (multi-select) picker.
pub fn draw(frame: &mut Frame, area: Rect, app: &RosterApp) {
    let (title, options, hints) = match app.popup {
        Some(Popup::RolePicker) => {
            let current = app.editor.draft().role.as_deref();
            let opts: Vec<String> = app
                .roles
                .iter()
                .map(|role| {
                    let marker = if current == Some(role.as_str()) { "►" } else { " " };
                    format!("{} {}", marker, role)
                })
                .collect();
            (
                "Select Role",
                opts,
                "\u{2191}/\u{2193} Navigate  Enter: Select  Esc: Back",
            )
        }
        Some(Popup::SkillPicker) => {
            let opts: Vec<String> = app
                .skills
                .iter()
                .map(|skill| {
                    let checkbox = if app.editor.draft().skills.contains(skill) {
                        "[\u{2713}]"
                    } else {
                        "[ ]"
                    };
                    format!("{} {}", checkbox, skill)
                })
                .collect();
            (
                "Select Skills",
                opts,
                "Space: Toggle  Enter: Done  Esc: Back",
            )
        }
        _ => return,
    };

    let width: u16 = 36;
    let height: u16 = (options.len() as u16 + 4).min(20);
    let popup_area = centered_popup(width, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let max_visible = inner.height.saturating_sub(1) as usize;
    let scroll_offset = if app.picker_index >= max_visible {
        app.picker_index - max_visible + 1
    } else {
        0
    };

    let items: Vec<ListItem> = options
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(max_visible)
        .map(|(i, name)| {
            let display = truncate(name, (width - 4) as usize);
            let style = if i == app.picker_index {
                Style::default()
                    .fg(Color::Rgb(0, 0, 0))
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(format!(" {} ", display), style)))
        })
        .collect();

    let list_area = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(1));
    frame.render_widget(List::new(items), list_area);

    let hints_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(Color::DarkGray),
        ))),
        hints_area,
    );
}
