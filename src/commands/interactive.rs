use clap::ArgMatches;

use crate::interactive::handlers::run_interactive_mode;

pub fn handle_interactive(_matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    run_interactive_mode()
}
