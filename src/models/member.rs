use serde::{Deserialize, Serialize};

use super::skills::SkillSet;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TeamMember {
    pub id: String,
    pub team_id: String,
    pub hr_emp_id: u32,
    pub first_name: String,
    pub last_name: String,
    /// Display name, derived from first + last at write time.
    pub name: String,
    pub email: String,
    pub role: String,
    pub skills: SkillSet,
    /// Weekly capacity in hours, bounded 1-60.
    pub capacity: u32,
    /// Currently assigned hours.
    pub current_workload: u32,
}

/// Payload for adding a member; the store assigns the id.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct NewMember {
    pub team_id: String,
    pub hr_emp_id: u32,
    pub first_name: String,
    pub last_name: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub skills: SkillSet,
    pub capacity: u32,
    pub current_workload: u32,
}

/// Updated-fields payload for an existing member. Carries no id or team id;
/// the target is keyed separately.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MemberUpdate {
    pub hr_emp_id: u32,
    pub first_name: String,
    pub last_name: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub skills: SkillSet,
    pub capacity: u32,
    pub current_workload: u32,
}

/// Space-join the non-empty name parts.
pub fn display_name(first: &str, last: &str) -> String {
    [first.trim(), last.trim()]
        .iter()
        .filter(|part| !part.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(" ")
}

impl TeamMember {
    pub fn apply_update(&mut self, update: MemberUpdate) {
        self.hr_emp_id = update.hr_emp_id;
        self.first_name = update.first_name;
        self.last_name = update.last_name;
        self.name = update.name;
        self.email = update.email;
        self.role = update.role;
        self.skills = update.skills;
        self.capacity = update.capacity;
        self.current_workload = update.current_workload;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_joins_with_space() {
        assert_eq!(display_name("A", "B"), "A B");
    }

    #[test]
    fn test_display_name_skips_empty_parts() {
        assert_eq!(display_name("Ada", ""), "Ada");
        assert_eq!(display_name("", "Lovelace"), "Lovelace");
    }

    #[test]
    fn test_apply_update_leaves_ids_alone() {
        let mut member = TeamMember {
            id: "m-1".to_string(),
            team_id: "t-1".to_string(),
            hr_emp_id: 7,
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            name: "A B".to_string(),
            email: "a@b.com".to_string(),
            role: "developer".to_string(),
            skills: SkillSet::new(),
            capacity: 40,
            current_workload: 0,
        };
        member.apply_update(MemberUpdate {
            hr_emp_id: 8,
            first_name: "C".to_string(),
            last_name: "D".to_string(),
            name: "C D".to_string(),
            email: "c@d.com".to_string(),
            role: "qa".to_string(),
            skills: vec!["rust".to_string()].into(),
            capacity: 30,
            current_workload: 10,
        });
        assert_eq!(member.id, "m-1");
        assert_eq!(member.team_id, "t-1");
        assert_eq!(member.name, "C D");
        assert_eq!(member.capacity, 30);
    }
}
