use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::interactive::app::{NotificationKind, RosterApp};

pub fn draw(frame: &mut Frame, area: Rect, app: &RosterApp) {
    if app.notifications.is_empty() || area.height == 0 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = app
        .notifications
        .iter()
        .take(3)
        .map(|n| {
            let (icon, color) = match n.kind {
                NotificationKind::Success => ("✓", Color::Green),
                NotificationKind::Error => ("✗", Color::Red),
                NotificationKind::Info => ("ⓘ", Color::Blue),
            };
            let remaining = match n.kind {
                NotificationKind::Error => 8u64.saturating_sub(n.created_at.elapsed().as_secs()),
                _ => 5u64.saturating_sub(n.created_at.elapsed().as_secs()),
            };
            Line::from(vec![
                Span::styled(
                    format!(" {} ", icon),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(n.message.clone(), Style::default().fg(color)),
                Span::styled(format!("  [{}s]", remaining), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
