use clap::ArgMatches;
use colored::Colorize;
use regex::Regex;

use crate::config::{load_config, Config};
use crate::constants::{MAX_CAPACITY, MIN_CAPACITY};
use crate::error::{RosterError, RosterResult};
use crate::roster::RosterEditor;
use crate::store::{open_store, RosterStore};

fn validate_email(email: &str) -> RosterResult<()> {
    let pattern = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
        .map_err(|e| RosterError::InvalidInput(e.to_string()))?;
    if pattern.is_match(email) {
        Ok(())
    } else {
        Err(RosterError::InvalidInput(format!(
            "'{}' is not a valid email address",
            email
        )))
    }
}

fn validate_role(config: &Config, role: &str) -> RosterResult<()> {
    if config.roles.iter().any(|r| r == role) {
        Ok(())
    } else {
        Err(RosterError::InvalidInput(format!(
            "Unknown role '{}'. Available: {}",
            role,
            config.roles.join(", ")
        )))
    }
}

fn validate_skill(config: &Config, skill: &str) -> RosterResult<()> {
    if config.skills.iter().any(|s| s == skill) {
        Ok(())
    } else {
        Err(RosterError::InvalidInput(format!(
            "Unknown skill '{}'. Available: {}",
            skill,
            config.skills.join(", ")
        )))
    }
}

fn parse_capacity(raw: &str) -> RosterResult<u32> {
    let capacity: u32 = raw
        .parse()
        .map_err(|_| RosterError::InvalidInput(format!("Capacity must be a number, got '{}'", raw)))?;
    if !(MIN_CAPACITY..=MAX_CAPACITY).contains(&capacity) {
        return Err(RosterError::InvalidInput(format!(
            "Capacity must be between {} and {} hours",
            MIN_CAPACITY, MAX_CAPACITY
        )));
    }
    Ok(capacity)
}

pub fn handle_add(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config();
    let mut store = open_store(&config)?;

    let team_id = matches
        .get_one::<String>("team")
        .ok_or("Team ID is required")?;
    let team = store.team(team_id)?;

    let first = matches.get_one::<String>("first").ok_or("First name is required")?;
    let last = matches.get_one::<String>("last").ok_or("Last name is required")?;
    let email = matches.get_one::<String>("email").ok_or("Email is required")?;
    let hr_id: u32 = matches
        .get_one::<String>("hr-id")
        .ok_or("HR employee id is required")?
        .parse()
        .map_err(|_| "HR employee id must be a number")?;
    let role = matches.get_one::<String>("role").ok_or("Role is required")?;

    validate_email(email)?;
    validate_role(&config, role)?;

    // Drive the same editor the interactive mode uses so the submit rules
    // stay in one place.
    let mut editor = RosterEditor::new(team.id.clone());
    editor.start_add();
    {
        let draft = editor.draft_mut();
        draft.first_name = first.clone();
        draft.last_name = last.clone();
        draft.email = email.clone();
        draft.hr_emp_id = hr_id;
    }
    editor.set_role(role);

    if let Some(raw) = matches.get_one::<String>("capacity") {
        editor.set_capacity(parse_capacity(raw)?);
    }
    if let Some(skills) = matches.get_many::<String>("skill") {
        for skill in skills {
            validate_skill(&config, skill)?;
            editor.toggle_skill(skill);
        }
    }

    let command = editor
        .submit()
        .ok_or_else(|| RosterError::InvalidInput("Member record is incomplete".to_string()))?;
    store.dispatch(command)?;

    let members = store.members(&team.id)?;
    let added = members.last().ok_or("Member was not stored")?;
    println!(
        "{} Added {} to {}",
        "✓".green().bold(),
        added.name.bold(),
        team.name
    );
    println!("ID: {}", added.id);

    Ok(())
}

pub fn handle_update(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config();
    let mut store = open_store(&config)?;

    let member_id = matches
        .get_one::<String>("id")
        .ok_or("Member ID is required")?;

    let members = store
        .teams()?
        .iter()
        .map(|t| store.members(&t.id))
        .collect::<RosterResult<Vec<_>>>()?
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();
    let member = members
        .iter()
        .find(|m| &m.id == member_id)
        .ok_or_else(|| RosterError::member_not_found(member_id))?;

    let first = matches.get_one::<String>("first");
    let last = matches.get_one::<String>("last");
    let email = matches.get_one::<String>("email");
    let role = matches.get_one::<String>("role");
    let capacity = matches.get_one::<String>("capacity");
    let workload = matches.get_one::<String>("workload");
    let skills = matches.get_many::<String>("skill");

    if first.is_none()
        && last.is_none()
        && email.is_none()
        && role.is_none()
        && capacity.is_none()
        && workload.is_none()
        && skills.is_none()
    {
        return Err("No fields to update. Provide at least one field to update.".into());
    }

    let mut editor = RosterEditor::new(member.team_id.clone());
    editor.start_edit(member);

    if let Some(first) = first {
        editor.draft_mut().first_name = first.clone();
    }
    if let Some(last) = last {
        editor.draft_mut().last_name = last.clone();
    }
    if let Some(email) = email {
        validate_email(email)?;
        editor.draft_mut().email = email.clone();
    }
    if let Some(role) = role {
        validate_role(&config, role)?;
        editor.set_role(role);
    }
    if let Some(raw) = capacity {
        editor.set_capacity(parse_capacity(raw)?);
    }
    if let Some(raw) = workload {
        editor.draft_mut().current_workload = raw
            .parse()
            .map_err(|_| "Workload must be a number of hours")?;
    }
    if let Some(skills) = skills {
        editor.draft_mut().skills.clear();
        for skill in skills {
            validate_skill(&config, skill)?;
            editor.toggle_skill(skill);
        }
    }

    let command = editor.submit().ok_or("Nothing to submit")?;
    store.dispatch(command)?;

    println!("{} Updated member {}", "✓".green().bold(), member_id);

    Ok(())
}

pub fn handle_remove(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config();
    let mut store = open_store(&config)?;

    let member_id = matches
        .get_one::<String>("id")
        .ok_or("Member ID is required")?;

    let editor = RosterEditor::new(String::new());
    let command = editor.remove(member_id).ok_or("Remove is unavailable")?;
    store.dispatch(command)?;

    println!("{} Removed member {}", "✓".green().bold(), member_id);

    Ok(())
}
