use clap::ArgMatches;

use crate::config::load_config;
use crate::formatting::print_members;
use crate::store::{open_store, RosterStore};

pub fn handle_members(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config();
    let store = open_store(&config)?;

    let team_id = matches
        .get_one::<String>("team")
        .ok_or("Team ID is required")?;

    let team = store.team(team_id)?;
    let members = store.members(&team.id)?;

    println!("Team {} ({})", team.name, team.org_unit);
    print_members(&members);

    Ok(())
}
