// Module declarations
pub mod cards;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod interactive;
pub mod logging;
pub mod models;
pub mod roster;
pub mod store;

// Re-export commonly used items
pub use cards::{UtilizationLevel, UtilizationSummary, ViewMode};
pub use config::{load_config, save_config, Config};
pub use error::{RosterError, RosterResult};
pub use models::*;
pub use roster::{Mode, RosterCommand, RosterEditor};
pub use store::{open_store, JsonStore, RosterStore};
