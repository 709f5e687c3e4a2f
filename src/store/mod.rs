pub mod json;

pub use json::JsonStore;

use std::path::PathBuf;

use crate::config::Config;
use crate::constants::{DATA_FILE, DATA_FILE_ENV};
use crate::error::RosterResult;
use crate::models::{MemberUpdate, NewMember, ResourceAllocation, Team, TeamMember};
use crate::roster::RosterCommand;

/// The persistence seam. UI layers emit `RosterCommand`s; whoever owns a
/// store dispatches them here. Team records are read-mostly: cards only
/// display them, and the edit/delete intents land on `update_team` /
/// `delete_team`.
pub trait RosterStore {
    fn teams(&self) -> RosterResult<Vec<Team>>;
    fn team(&self, id: &str) -> RosterResult<Team>;
    /// Derived externally; absent for teams with no allocation record.
    fn allocation(&self, team_id: &str) -> RosterResult<Option<ResourceAllocation>>;

    fn members(&self, team_id: &str) -> RosterResult<Vec<TeamMember>>;
    fn add_member(&mut self, new: NewMember) -> RosterResult<TeamMember>;
    fn update_member(&mut self, id: &str, update: MemberUpdate) -> RosterResult<TeamMember>;
    fn remove_member(&mut self, id: &str) -> RosterResult<()>;

    fn update_team(&mut self, team: Team) -> RosterResult<()>;
    /// Keyed by id; the name travels along for logging, mirroring the
    /// delete intent's payload.
    fn delete_team(&mut self, id: &str, name: &str) -> RosterResult<()>;

    fn dispatch(&mut self, command: RosterCommand) -> RosterResult<()> {
        match command {
            RosterCommand::Add(new) => self.add_member(new).map(|_| ()),
            RosterCommand::Update(id, update) => self.update_member(&id, update).map(|_| ()),
            RosterCommand::Remove(id) => self.remove_member(&id),
        }
    }
}

/// Resolve the data file path: env override, then config, then the
/// platform data dir.
pub fn data_file_path(config: &Config) -> PathBuf {
    if let Ok(path) = std::env::var(DATA_FILE_ENV) {
        return PathBuf::from(path);
    }
    if let Some(path) = &config.data_file {
        return path.clone();
    }
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("roster-cli")
        .join(DATA_FILE)
}

pub fn open_store(config: &Config) -> RosterResult<JsonStore> {
    JsonStore::open(data_file_path(config))
}
