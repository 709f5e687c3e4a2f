use std::path::PathBuf;

use clap::ArgMatches;
use colored::Colorize;

use crate::cards::ViewMode;
use crate::config::{load_config, save_config};
use crate::store::data_file_path;

pub fn handle_config(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config();
    let mut changed = false;

    if let Some(path) = matches.get_one::<String>("data-file") {
        config.data_file = Some(PathBuf::from(path));
        changed = true;
    }
    if let Some(view) = matches.get_one::<String>("default-view") {
        if ViewMode::parse(view).is_none() {
            return Err(format!("Invalid view '{}'. Use 'list' or 'grid'.", view).into());
        }
        config.default_view = view.clone();
        changed = true;
    }
    if let Some(roles) = matches.get_many::<String>("role") {
        config.roles = roles.cloned().collect();
        changed = true;
    }
    if let Some(skills) = matches.get_many::<String>("skill") {
        config.skills = skills.cloned().collect();
        changed = true;
    }

    if changed {
        save_config(&config)?;
        println!("{} Configuration saved", "✓".green().bold());
        return Ok(());
    }

    println!("{}", "Configuration".bold());
    println!("Data file:    {}", data_file_path(&config).display());
    println!("Default view: {}", config.default_view);
    println!("Roles:        {}", config.roles.join(", "));
    println!("Skills:       {}", config.skills.join(", "));

    Ok(())
}
