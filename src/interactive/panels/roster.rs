use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::formatting::{format_hours, format_role, truncate};
use crate::interactive::app::{Focus, RosterApp};

pub fn draw(frame: &mut Frame, area: Rect, app: &RosterApp) {
    let focused = app.focus == Focus::Roster;
    let border_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = match app.selected_team() {
        Some(team) => format!(" {} roster ({}) ", team.name, app.members.len()),
        None => " Roster ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style);

    if app.members.is_empty() {
        let empty = Paragraph::new("No team members yet")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = inner.height as usize;
    let scroll_offset = app.member_index.saturating_sub(visible.saturating_sub(1));
    let max_width = inner.width as usize;

    let items: Vec<ListItem> = app
        .members
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible)
        .map(|(i, member)| {
            // Rows outside the editor's gate render dimmed.
            let gated = !app.editor.can_modify(&member.id);
            let selected = focused && i == app.member_index;

            let row = format!(
                "{:<20} {:<24} {:<14} {:>4}  {}",
                truncate(&member.name, 20),
                truncate(&member.email, 24),
                truncate(&format_role(&member.role), 14),
                format_hours(member.capacity),
                member.skills.iter().collect::<Vec<_>>().join(", ")
            );

            let style = if selected {
                Style::default()
                    .bg(Color::Rgb(30, 35, 50))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else if gated {
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(Line::from(Span::styled(truncate(&row, max_width), style)))
        })
        .collect();

    frame.render_widget(List::new(items), inner);
}
