use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::cards::{UtilizationLevel, UtilizationSummary, ViewMode};
use crate::formatting::{progress_bar, truncate};
use crate::interactive::app::{Focus, RosterApp};
use crate::models::Team;

const BAR_WIDTH: usize = 12;

fn level_color(level: UtilizationLevel) -> Color {
    match level {
        UtilizationLevel::Normal => Color::Green,
        UtilizationLevel::NearCapacity => Color::Yellow,
        UtilizationLevel::Overallocated => Color::Red,
    }
}

pub fn draw(frame: &mut Frame, area: Rect, app: &RosterApp) {
    let focused = app.focus == Focus::Teams;
    let border_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Teams ({}) ", app.teams.len()))
        .border_style(border_style);

    if app.teams.is_empty() {
        let empty = Paragraph::new("No teams found")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match app.view {
        ViewMode::List => draw_list(frame, inner, app, focused),
        ViewMode::Grid => draw_grid(frame, inner, app, focused),
    }
}

fn card_lines(app: &RosterApp, team: &Team, selected: bool, width: usize) -> Vec<Line<'static>> {
    let summary = UtilizationSummary::for_team(team, app.allocations.get(&team.id));
    let color = level_color(summary.level);
    let glyph = if summary.is_overallocated() { " ▲" } else { "" };

    let title_style = if selected {
        Style::default()
            .bg(Color::Rgb(30, 35, 50))
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };

    let header = format!("{} ({})", team.name, team.org_unit);
    let detail = format!(
        "  {} members · {:.0}h  {} {:.0}%{}",
        team.member_count,
        summary.capacity,
        progress_bar(summary.percentage, BAR_WIDTH),
        summary.percentage,
        glyph
    );

    vec![
        Line::from(Span::styled(truncate(&header, width), title_style)),
        Line::from(Span::styled(truncate(&detail, width), Style::default().fg(color))),
    ]
}

fn draw_list(frame: &mut Frame, area: Rect, app: &RosterApp, focused: bool) {
    // Two lines per card; scroll so the selection stays visible.
    let visible = (area.height as usize / 2).max(1);
    let scroll_offset = app.team_index.saturating_sub(visible - 1);

    let items: Vec<ListItem> = app
        .teams
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible)
        .map(|(i, team)| {
            let selected = focused && i == app.team_index;
            ListItem::new(card_lines(app, team, selected, area.width as usize))
        })
        .collect();

    frame.render_widget(List::new(items), area);
}

fn draw_grid(frame: &mut Frame, area: Rect, app: &RosterApp, focused: bool) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (col, col_area) in columns.iter().enumerate() {
        let items: Vec<ListItem> = app
            .teams
            .iter()
            .enumerate()
            .filter(|(i, _)| i % 2 == col)
            .map(|(i, team)| {
                let selected = focused && i == app.team_index;
                ListItem::new(card_lines(app, team, selected, col_area.width as usize))
            })
            .collect();
        frame.render_widget(List::new(items), *col_area);
    }
}
