use colored::Colorize;

use crate::cards::{UtilizationSummary, ViewMode};
use crate::formatting::theme::helpers::{utilization_color, utilization_glyph};
use crate::formatting::theme::{SemanticColor, ThemedColorize};
use crate::formatting::utils::{progress_bar, truncate};
use crate::models::{ResourceAllocation, Team};

const BAR_WIDTH: usize = 20;
const GRID_CARD_WIDTH: usize = 38;

pub fn print_team_cards(teams: &[(Team, Option<ResourceAllocation>)], view: ViewMode) {
    match view {
        ViewMode::List => print_list(teams),
        ViewMode::Grid => print_grid(teams),
    }
}

fn utilization_line(summary: &UtilizationSummary) -> String {
    let color = utilization_color(summary.level);
    let glyph = utilization_glyph(summary.level);
    let pct = format!("{:.0}%", summary.percentage);
    format!(
        "{} {} {}",
        progress_bar(summary.percentage, BAR_WIDTH).with_theme(color),
        pct.with_theme(color).bold(),
        glyph.with_theme(color)
    )
}

fn print_list(teams: &[(Team, Option<ResourceAllocation>)]) {
    for (team, allocation) in teams {
        let summary = UtilizationSummary::for_team(team, allocation.as_ref());

        println!(
            "{}  {}  {}",
            truncate(&team.name, 28).with_theme(SemanticColor::Team).bold(),
            team.org_unit.with_theme(SemanticColor::OrgUnit),
            format!("board {}", team.jira_board_id).with_theme(SemanticColor::Muted),
        );
        println!(
            "  {} members · capacity {:.0}h  {}",
            team.member_count,
            summary.capacity,
            utilization_line(&summary),
        );
        if !team.description.is_empty() {
            println!("  {}", truncate(&team.description, 76).with_theme(SemanticColor::Secondary));
        }
        if let Some(label) = &team.backlog_label {
            println!("  backlog: {}", label.with_theme(SemanticColor::Skill));
        }
        println!();
    }
}

fn print_grid(teams: &[(Team, Option<ResourceAllocation>)]) {
    for pair in teams.chunks(2) {
        let cards: Vec<Vec<String>> = pair.iter().map(|(t, a)| card_lines(t, a.as_ref())).collect();
        let height = cards.iter().map(Vec::len).max().unwrap_or(0);
        for row in 0..height {
            let mut line = String::new();
            for card in &cards {
                let cell = card.get(row).cloned().unwrap_or_default();
                line.push_str(&cell);
                line.push_str("  ");
            }
            println!("{}", line.trim_end());
        }
        println!();
    }
}

/// One boxed card, every line padded to the same printed width so two
/// cards align side by side. Color codes are applied after padding.
fn card_lines(team: &Team, allocation: Option<&ResourceAllocation>) -> Vec<String> {
    let summary = UtilizationSummary::for_team(team, allocation);
    let color = utilization_color(summary.level);
    let inner = GRID_CARD_WIDTH - 2;

    let pad = |s: &str| format!("{:<width$}", truncate(s, inner), width = inner);

    let mut lines = Vec::new();
    lines.push(format!("╭{}╮", "─".repeat(inner)));
    lines.push(format!(
        "│{}│",
        pad(&team.name).with_theme(SemanticColor::Team).bold()
    ));
    lines.push(format!(
        "│{}│",
        pad(&team.org_unit).with_theme(SemanticColor::OrgUnit)
    ));
    lines.push(format!(
        "│{}│",
        pad(&format!(
            "{} members · {:.0}h",
            team.member_count, summary.capacity
        ))
    ));
    let glyph = utilization_glyph(summary.level);
    lines.push(format!(
        "│{}│",
        pad(&format!(
            "{} {:.0}% {}",
            progress_bar(summary.percentage, 16),
            summary.percentage,
            glyph
        ))
        .with_theme(color)
    ));
    lines.push(format!("╰{}╯", "─".repeat(inner)));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team() -> Team {
        Team {
            id: "t-1".to_string(),
            name: "Platform".to_string(),
            description: String::new(),
            org_unit: "Engineering".to_string(),
            member_count: 3,
            jira_board_id: "PLAT".to_string(),
            backlog_label: None,
        }
    }

    #[test]
    fn test_card_lines_box_shape() {
        let lines = card_lines(&team(), None);
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with('╭'));
        assert!(lines[5].starts_with('╰'));
    }

    #[test]
    fn test_card_shows_fallback_capacity() {
        // 3 members, no allocation: 120h
        let lines = card_lines(&team(), None);
        assert!(lines.iter().any(|l| l.contains("120h")));
    }
}
