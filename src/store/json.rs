use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RosterError, RosterResult};
use crate::logging::log_info;
use crate::models::{MemberUpdate, NewMember, ResourceAllocation, Team, TeamMember};

use super::RosterStore;

#[derive(Debug, Serialize, Deserialize, Clone)]
struct TeamRecord {
    #[serde(flatten)]
    team: Team,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    allocation: Option<ResourceAllocation>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct RosterDocument {
    teams: Vec<TeamRecord>,
    members: Vec<TeamMember>,
    #[serde(default)]
    next_member_id: u64,
}

/// File-backed store: one JSON document, loaded on open and written back
/// after every mutation.
pub struct JsonStore {
    path: PathBuf,
    document: RosterDocument,
}

impl JsonStore {
    /// Open the store at `path`, seeding an empty document when the file
    /// does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> RosterResult<Self> {
        let path = path.into();
        let document = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)
                .map_err(|e| RosterError::StoreError(format!("{}: {}", path.display(), e)))?
        } else {
            RosterDocument::default()
        };
        Ok(Self { path, document })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> RosterResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.document)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    fn team_record(&self, id: &str) -> RosterResult<&TeamRecord> {
        self.document
            .teams
            .iter()
            .find(|r| r.team.id == id)
            .ok_or_else(|| RosterError::team_not_found(id))
    }

    fn bump_member_count(&mut self, team_id: &str, delta: i64) {
        if let Some(record) = self.document.teams.iter_mut().find(|r| r.team.id == team_id) {
            let count = record.team.member_count as i64 + delta;
            record.team.member_count = count.max(0) as u32;
        }
    }
}

impl RosterStore for JsonStore {
    fn teams(&self) -> RosterResult<Vec<Team>> {
        Ok(self.document.teams.iter().map(|r| r.team.clone()).collect())
    }

    fn team(&self, id: &str) -> RosterResult<Team> {
        self.team_record(id).map(|r| r.team.clone())
    }

    fn allocation(&self, team_id: &str) -> RosterResult<Option<ResourceAllocation>> {
        self.team_record(team_id).map(|r| r.allocation)
    }

    fn members(&self, team_id: &str) -> RosterResult<Vec<TeamMember>> {
        self.team_record(team_id)?;
        Ok(self
            .document
            .members
            .iter()
            .filter(|m| m.team_id == team_id)
            .cloned()
            .collect())
    }

    fn add_member(&mut self, new: NewMember) -> RosterResult<TeamMember> {
        self.team_record(&new.team_id)?;

        self.document.next_member_id += 1;
        let member = TeamMember {
            id: format!("m-{}", self.document.next_member_id),
            team_id: new.team_id.clone(),
            hr_emp_id: new.hr_emp_id,
            first_name: new.first_name,
            last_name: new.last_name,
            name: new.name,
            email: new.email,
            role: new.role,
            skills: new.skills,
            capacity: new.capacity,
            current_workload: new.current_workload,
        };
        self.document.members.push(member.clone());
        self.bump_member_count(&new.team_id, 1);
        self.save()?;
        log_info(&format!("Added member {} to team {}", member.id, member.team_id));
        Ok(member)
    }

    fn update_member(&mut self, id: &str, update: MemberUpdate) -> RosterResult<TeamMember> {
        let member = self
            .document
            .members
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| RosterError::member_not_found(id))?;
        member.apply_update(update);
        let updated = member.clone();
        self.save()?;
        log_info(&format!("Updated member {}", id));
        Ok(updated)
    }

    fn remove_member(&mut self, id: &str) -> RosterResult<()> {
        let position = self
            .document
            .members
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| RosterError::member_not_found(id))?;
        let removed = self.document.members.remove(position);
        self.bump_member_count(&removed.team_id, -1);
        self.save()?;
        log_info(&format!("Removed member {}", id));
        Ok(())
    }

    fn update_team(&mut self, team: Team) -> RosterResult<()> {
        let record = self
            .document
            .teams
            .iter_mut()
            .find(|r| r.team.id == team.id)
            .ok_or_else(|| RosterError::team_not_found(&team.id))?;
        record.team = team;
        self.save()?;
        Ok(())
    }

    fn delete_team(&mut self, id: &str, name: &str) -> RosterResult<()> {
        let position = self
            .document
            .teams
            .iter()
            .position(|r| r.team.id == id)
            .ok_or_else(|| RosterError::team_not_found(id))?;
        self.document.teams.remove(position);
        self.document.members.retain(|m| m.team_id != id);
        self.save()?;
        log_info(&format!("Deleted team {} ({})", id, name));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SkillSet;
    use tempfile::TempDir;

    fn seeded_store(dir: &TempDir) -> JsonStore {
        let mut store = JsonStore::open(dir.path().join("roster.json")).unwrap();
        store.document.teams.push(TeamRecord {
            team: Team {
                id: "t-1".to_string(),
                name: "Platform".to_string(),
                description: "Infra".to_string(),
                org_unit: "Engineering".to_string(),
                member_count: 0,
                jira_board_id: "PLAT".to_string(),
                backlog_label: Some("plat-backlog".to_string()),
            },
            allocation: Some(ResourceAllocation {
                total_capacity: 120.0,
                utilization_pct: 90.0,
            }),
        });
        store.save().unwrap();
        store
    }

    fn new_member(team_id: &str) -> NewMember {
        NewMember {
            team_id: team_id.to_string(),
            hr_emp_id: 1001,
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            name: "A B".to_string(),
            email: "a@b.com".to_string(),
            role: "developer".to_string(),
            skills: SkillSet::new(),
            capacity: 40,
            current_workload: 0,
        }
    }

    #[test]
    fn test_add_assigns_id_and_bumps_member_count() {
        let dir = TempDir::new().unwrap();
        let mut store = seeded_store(&dir);

        let member = store.add_member(new_member("t-1")).unwrap();
        assert_eq!(member.id, "m-1");
        assert_eq!(store.team("t-1").unwrap().member_count, 1);
        assert_eq!(store.members("t-1").unwrap().len(), 1);
    }

    #[test]
    fn test_add_to_unknown_team_fails() {
        let dir = TempDir::new().unwrap();
        let mut store = seeded_store(&dir);
        let result = store.add_member(new_member("t-404"));
        assert!(matches!(result, Err(RosterError::NotFound(_, _))));
    }

    #[test]
    fn test_update_and_remove_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut store = seeded_store(&dir);
        let member = store.add_member(new_member("t-1")).unwrap();

        let updated = store
            .update_member(
                &member.id,
                MemberUpdate {
                    hr_emp_id: 1001,
                    first_name: "Ada".to_string(),
                    last_name: "B".to_string(),
                    name: "Ada B".to_string(),
                    email: "ada@b.com".to_string(),
                    role: "tech-lead".to_string(),
                    skills: vec!["rust".to_string()].into(),
                    capacity: 32,
                    current_workload: 12,
                },
            )
            .unwrap();
        assert_eq!(updated.name, "Ada B");
        assert_eq!(updated.team_id, "t-1");

        store.remove_member(&member.id).unwrap();
        assert!(store.members("t-1").unwrap().is_empty());
        assert_eq!(store.team("t-1").unwrap().member_count, 0);
        assert!(matches!(
            store.remove_member(&member.id),
            Err(RosterError::NotFound(_, _))
        ));
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.json");
        {
            let mut store = seeded_store(&dir);
            store.add_member(new_member("t-1")).unwrap();
            assert_eq!(store.path(), path.as_path());
        }

        let store = JsonStore::open(&path).unwrap();
        assert_eq!(store.teams().unwrap().len(), 1);
        assert_eq!(store.members("t-1").unwrap()[0].name, "A B");
        let allocation = store.allocation("t-1").unwrap().unwrap();
        assert_eq!(allocation.utilization_pct, 90.0);
    }

    #[test]
    fn test_delete_team_drops_its_members() {
        let dir = TempDir::new().unwrap();
        let mut store = seeded_store(&dir);
        store.add_member(new_member("t-1")).unwrap();

        store.delete_team("t-1", "Platform").unwrap();
        assert!(store.teams().unwrap().is_empty());
        assert!(matches!(
            store.members("t-1"),
            Err(RosterError::NotFound(_, _))
        ));
    }
}
