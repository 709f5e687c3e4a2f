use std::process;

use clap::{Arg, ArgMatches, Command};

use roster_cli::commands::{
    handle_add, handle_config, handle_delete_team, handle_interactive, handle_members,
    handle_remove, handle_teams, handle_update, handle_update_team,
};
use roster_cli::logging::{init_logging, log_error, log_panic_info};

fn member_field_args(command: Command, required: bool) -> Command {
    command
        .arg(
            Arg::new("first")
                .long("first")
                .value_name("NAME")
                .help("First name")
                .required(required),
        )
        .arg(
            Arg::new("last")
                .long("last")
                .value_name("NAME")
                .help("Last name")
                .required(required),
        )
        .arg(
            Arg::new("email")
                .long("email")
                .value_name("EMAIL")
                .help("Email address")
                .required(required),
        )
        .arg(
            Arg::new("role")
                .long("role")
                .value_name("ROLE")
                .help("Role from the configured vocabulary")
                .required(required),
        )
        .arg(
            Arg::new("capacity")
                .long("capacity")
                .value_name("HOURS")
                .help("Weekly capacity in hours (1-60)"),
        )
        .arg(
            Arg::new("skill")
                .long("skill")
                .value_name("SKILL")
                .action(clap::ArgAction::Append)
                .help("Skill from the configured vocabulary (repeatable)"),
        )
}

fn build_cli() -> Command {
    Command::new("roster")
        .about("Roster CLI - Manage teams and their members from the command line")
        .version("1.0.0")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("teams").about("Render team cards").arg(
                Arg::new("view")
                    .long("view")
                    .value_name("VIEW")
                    .help("Card layout: list or grid"),
            ),
        )
        .subcommand(
            Command::new("team")
                .about("Operate on a single team")
                .subcommand_required(true)
                .subcommand(
                    Command::new("update")
                        .about("Update a team's details")
                        .arg(
                            Arg::new("id")
                                .value_name("TEAM_ID")
                                .help("Team ID")
                                .required(true),
                        )
                        .arg(Arg::new("name").long("name").value_name("NAME").help("Team name"))
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .value_name("TEXT")
                                .help("Team description"),
                        )
                        .arg(
                            Arg::new("org-unit")
                                .long("org-unit")
                                .value_name("NAME")
                                .help("Organizational unit"),
                        )
                        .arg(
                            Arg::new("board")
                                .long("board")
                                .value_name("BOARD_ID")
                                .help("Jira board id"),
                        )
                        .arg(
                            Arg::new("backlog-label")
                                .long("backlog-label")
                                .value_name("LABEL")
                                .help("Backlog label; empty clears it"),
                        ),
                )
                .subcommand(
                    Command::new("delete").about("Delete a team and its roster").arg(
                        Arg::new("id")
                            .value_name("TEAM_ID")
                            .help("Team ID")
                            .required(true),
                    ),
                ),
        )
        .subcommand(
            Command::new("members").about("List a team's roster").arg(
                Arg::new("team")
                    .value_name("TEAM_ID")
                    .help("Team ID")
                    .required(true),
            ),
        )
        .subcommand(
            member_field_args(
                Command::new("add").about("Add a member to a team").arg(
                    Arg::new("team")
                        .value_name("TEAM_ID")
                        .help("Team ID")
                        .required(true),
                ),
                true,
            )
            .arg(
                Arg::new("hr-id")
                    .long("hr-id")
                    .value_name("ID")
                    .help("HR employee id")
                    .required(true),
            ),
        )
        .subcommand(
            member_field_args(
                Command::new("update").about("Update a member").arg(
                    Arg::new("id")
                        .value_name("MEMBER_ID")
                        .help("Member ID")
                        .required(true),
                ),
                false,
            )
            .arg(
                Arg::new("workload")
                    .long("workload")
                    .value_name("HOURS")
                    .help("Current workload in hours"),
            ),
        )
        .subcommand(
            Command::new("remove").about("Remove a member").arg(
                Arg::new("id")
                    .value_name("MEMBER_ID")
                    .help("Member ID")
                    .required(true),
            ),
        )
        .subcommand(Command::new("interactive").about("Browse and edit the roster in a TUI"))
        .subcommand(
            Command::new("config")
                .about("Show or change configuration")
                .arg(
                    Arg::new("data-file")
                        .long("data-file")
                        .value_name("PATH")
                        .help("Path of the roster data file"),
                )
                .arg(
                    Arg::new("default-view")
                        .long("default-view")
                        .value_name("VIEW")
                        .help("Default card layout: list or grid"),
                )
                .arg(
                    Arg::new("role")
                        .long("role")
                        .value_name("ROLE")
                        .action(clap::ArgAction::Append)
                        .help("Replace the role vocabulary (repeatable)"),
                )
                .arg(
                    Arg::new("skill")
                        .long("skill")
                        .value_name("SKILL")
                        .action(clap::ArgAction::Append)
                        .help("Replace the skill vocabulary (repeatable)"),
                ),
        )
}

fn dispatch(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("teams", sub_matches)) => handle_teams(sub_matches),
        Some(("team", sub_matches)) => match sub_matches.subcommand() {
            Some(("update", update_matches)) => handle_update_team(update_matches),
            Some(("delete", delete_matches)) => handle_delete_team(delete_matches),
            _ => {
                eprintln!("Unknown team subcommand. Use 'roster team --help' for available options.");
                process::exit(1);
            }
        },
        Some(("members", sub_matches)) => handle_members(sub_matches),
        Some(("add", sub_matches)) => handle_add(sub_matches),
        Some(("update", sub_matches)) => handle_update(sub_matches),
        Some(("remove", sub_matches)) => handle_remove(sub_matches),
        Some(("interactive", sub_matches)) => handle_interactive(sub_matches),
        Some(("config", sub_matches)) => handle_config(sub_matches),
        _ => {
            eprintln!("Unknown command. Use 'roster --help' for available commands.");
            process::exit(1);
        }
    }
}

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }
    std::panic::set_hook(Box::new(|info| {
        log_panic_info(info);
    }));

    let matches = build_cli().get_matches();

    if let Err(e) = dispatch(&matches) {
        log_error(&format!("Command failed: {}", e));
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
