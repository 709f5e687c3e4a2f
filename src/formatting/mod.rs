pub mod cards;
pub mod members;
pub mod theme;
pub mod utils;

pub use cards::print_team_cards;
pub use members::print_members;
pub use utils::{format_hours, format_role, progress_bar, truncate};
