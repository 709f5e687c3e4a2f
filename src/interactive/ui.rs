use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{Focus, Popup, RosterApp};
use super::layout::{app_layout, panel_layout};
use super::{notifications, panels, popups};
use crate::cards::ViewMode;

pub fn draw(frame: &mut Frame, app: &RosterApp) {
    let layout = app_layout(frame.size(), app.notifications.len());

    draw_header(frame, layout.header, app);

    let panes = panel_layout(layout.main);
    panels::teams::draw(frame, panes.teams, app);
    if panes.roster.width > 0 {
        panels::roster::draw(frame, panes.roster, app);
    }

    notifications::draw(frame, layout.notifications, app);
    draw_footer(frame, layout.footer, app);

    match app.popup {
        Some(Popup::MemberForm) => popups::member_form::draw(frame, frame.size(), app),
        Some(Popup::RolePicker) | Some(Popup::SkillPicker) => {
            popups::member_form::draw(frame, frame.size(), app);
            popups::picker::draw(frame, frame.size(), app);
        }
        None => {}
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &RosterApp) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(30)])
        .split(area);

    let title = match app.selected_team() {
        Some(team) => format!(" Roster — {} ({}) ", team.name, team.org_unit),
        None => " Roster ".to_string(),
    };
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .bg(Color::Black)
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(header, chunks[0]);

    let view = match app.view {
        ViewMode::List => "list",
        ViewMode::Grid => "grid",
    };
    let info = format!(" Teams: {} | View: {} ", app.teams.len(), view);
    let info_widget = Paragraph::new(info)
        .style(Style::default().bg(Color::Black).fg(Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(info_widget, chunks[1]);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &RosterApp) {
    let help_text = match app.popup {
        Some(Popup::MemberForm) => {
            "[Tab/↑↓] Field  [Enter] Pick/Submit  [Esc] Cancel  Type to edit..."
        }
        Some(Popup::RolePicker) => "[j/k] Navigate  [Enter] Select  [Esc] Back",
        Some(Popup::SkillPicker) => "[j/k] Navigate  [Space] Toggle  [Enter] Done  [Esc] Back",
        None => match app.focus {
            Focus::Teams => "[q] Quit  [Tab] Focus  [j/k] Nav  [v] View  [Enter] Roster  [a] Add  [r] Reload",
            Focus::Roster => "[q] Quit  [Tab] Focus  [j/k] Nav  [a] Add  [e] Edit  [d] Remove  [r] Reload",
        },
    };

    let footer = Paragraph::new(help_text)
        .style(Style::default().bg(Color::Black).fg(Color::Green))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
