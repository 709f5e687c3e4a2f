use clap::ArgMatches;

use crate::cards::ViewMode;
use crate::config::load_config;
use crate::formatting::print_team_cards;
use crate::store::{open_store, RosterStore};

/// An explicit `--view` must be valid; the configured default quietly
/// falls back to list when it is not.
fn resolve_view(arg: Option<&String>, default_view: &str) -> Result<ViewMode, String> {
    match arg {
        Some(raw) => ViewMode::parse(raw)
            .ok_or_else(|| format!("Invalid view '{}'. Use 'list' or 'grid'.", raw)),
        None => Ok(ViewMode::parse(default_view).unwrap_or(ViewMode::List)),
    }
}

pub fn handle_teams(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config();
    let store = open_store(&config)?;

    let view = resolve_view(matches.get_one::<String>("view"), &config.default_view)?;

    let teams = store.teams()?;
    if teams.is_empty() {
        println!("No teams found.");
        return Ok(());
    }

    println!("Found {} teams:", teams.len());
    let cards: Vec<_> = teams
        .into_iter()
        .map(|team| {
            let allocation = store.allocation(&team.id).unwrap_or(None);
            (team, allocation)
        })
        .collect();
    print_team_cards(&cards, view);

    Ok(())
}

pub fn handle_update_team(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config();
    let mut store = open_store(&config)?;

    let id = matches
        .get_one::<String>("id")
        .ok_or("Team ID is required")?;

    let mut team = store.team(id)?;
    let mut changed = false;

    if let Some(name) = matches.get_one::<String>("name") {
        team.name = name.clone();
        changed = true;
    }
    if let Some(description) = matches.get_one::<String>("description") {
        team.description = description.clone();
        changed = true;
    }
    if let Some(org_unit) = matches.get_one::<String>("org-unit") {
        team.org_unit = org_unit.clone();
        changed = true;
    }
    if let Some(board) = matches.get_one::<String>("board") {
        team.jira_board_id = board.clone();
        changed = true;
    }
    if let Some(label) = matches.get_one::<String>("backlog-label") {
        team.backlog_label = if label.is_empty() { None } else { Some(label.clone()) };
        changed = true;
    }

    if !changed {
        return Err("No fields to update. Provide at least one field to update.".into());
    }

    store.update_team(team.clone())?;
    println!("Updated team {} ({})", team.id, team.name);

    Ok(())
}

pub fn handle_delete_team(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config();
    let mut store = open_store(&config)?;

    let id = matches
        .get_one::<String>("id")
        .ok_or("Team ID is required")?;

    let team = store.team(id)?;
    store.delete_team(&team.id, &team.name)?;
    println!("Deleted team {} ({})", team.id, team.name);

    Ok(())
}
