pub mod config_cmd;
pub mod interactive;
pub mod members;
pub mod mutate;
pub mod teams;

pub use config_cmd::handle_config;
pub use interactive::handle_interactive;
pub use members::handle_members;
pub use mutate::{handle_add, handle_remove, handle_update};
pub use teams::{handle_delete_team, handle_teams, handle_update_team};
