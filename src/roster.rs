//! The roster editor: a UI-agnostic state machine for adding, editing and
//! removing team members. The UI layers own navigation and rendering; this
//! module owns the draft, the mode transitions, and the commands emitted to
//! the store.

use crate::constants::{DEFAULT_CAPACITY, MAX_CAPACITY, MIN_CAPACITY};
use crate::models::member::display_name;
use crate::models::{MemberUpdate, NewMember, SkillSet, TeamMember};

pub type MemberId = String;

/// Mutually exclusive editor modes. At most one edit is in flight per
/// editor instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Adding,
    Editing(MemberId),
}

/// Working copy of a member's fields while a form is open.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub hr_emp_id: u32,
    pub role: Option<String>,
    pub capacity: u32,
    pub current_workload: u32,
    pub skills: SkillSet,
}

impl Default for MemberDraft {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            hr_emp_id: 0,
            role: None,
            capacity: DEFAULT_CAPACITY,
            current_workload: 0,
            skills: SkillSet::new(),
        }
    }
}

impl MemberDraft {
    pub fn from_member(member: &TeamMember) -> Self {
        Self {
            first_name: member.first_name.clone(),
            last_name: member.last_name.clone(),
            email: member.email.clone(),
            hr_emp_id: member.hr_emp_id,
            role: Some(member.role.clone()),
            capacity: member.capacity,
            current_workload: member.current_workload,
            skills: member.skills.clone(),
        }
    }

    pub fn display_name(&self) -> String {
        display_name(&self.first_name, &self.last_name)
    }

    /// The required-field gate for add-submit: role set, names and email
    /// present, HR id entered.
    pub fn is_complete(&self) -> bool {
        self.role.is_some()
            && !self.first_name.trim().is_empty()
            && !self.last_name.trim().is_empty()
            && !self.email.trim().is_empty()
            && self.hr_emp_id > 0
    }

    /// First incomplete field, for highlighting after a rejected submit.
    pub fn first_missing_field(&self) -> Option<&'static str> {
        if self.first_name.trim().is_empty() {
            Some("first name")
        } else if self.last_name.trim().is_empty() {
            Some("last name")
        } else if self.email.trim().is_empty() {
            Some("email")
        } else if self.hr_emp_id == 0 {
            Some("HR id")
        } else if self.role.is_none() {
            Some("role")
        } else {
            None
        }
    }
}

/// Mutation intents emitted to the store layer. The editor never touches
/// persistence itself; callers dispatch these.
#[derive(Debug, Clone, PartialEq)]
pub enum RosterCommand {
    Add(NewMember),
    Update(MemberId, MemberUpdate),
    Remove(MemberId),
}

pub struct RosterEditor {
    team_id: String,
    mode: Mode,
    draft: MemberDraft,
}

impl RosterEditor {
    pub fn new(team_id: impl Into<String>) -> Self {
        Self {
            team_id: team_id.into(),
            mode: Mode::Idle,
            draft: MemberDraft::default(),
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn draft(&self) -> &MemberDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut MemberDraft {
        &mut self.draft
    }

    pub fn team_id(&self) -> &str {
        &self.team_id
    }

    pub fn is_idle(&self) -> bool {
        self.mode == Mode::Idle
    }

    /// The add action is hidden while a form is already open.
    pub fn can_start_add(&self) -> bool {
        self.is_idle()
    }

    /// Whether a given member's edit/remove controls are active:
    /// everything in Idle, nothing while Adding, only the in-flight member
    /// while Editing.
    pub fn can_modify(&self, member_id: &str) -> bool {
        match &self.mode {
            Mode::Idle => true,
            Mode::Adding => false,
            Mode::Editing(id) => id == member_id,
        }
    }

    /// Idle -> Adding with a fresh draft. No-op from any other mode.
    pub fn start_add(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.draft = MemberDraft::default();
        self.mode = Mode::Adding;
        true
    }

    /// Idle -> Editing(id), draft populated from the member's current
    /// fields (skills included). No-op from any other mode.
    pub fn start_edit(&mut self, member: &TeamMember) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.draft = MemberDraft::from_member(member);
        self.mode = Mode::Editing(member.id.clone());
        true
    }

    /// Back to Idle, draft reset to defaults.
    pub fn cancel(&mut self) {
        self.mode = Mode::Idle;
        self.draft = MemberDraft::default();
    }

    pub fn toggle_skill(&mut self, skill: &str) {
        self.draft.skills.toggle(skill);
    }

    pub fn set_role(&mut self, role: &str) {
        self.draft.role = Some(role.to_string());
    }

    /// Capacity is bounded 1-60; out-of-range values clamp.
    pub fn set_capacity(&mut self, capacity: u32) {
        self.draft.capacity = capacity.clamp(MIN_CAPACITY, MAX_CAPACITY);
    }

    /// Submit the open form.
    ///
    /// Adding: emits `Add` with a computed display name and returns to
    /// Idle, or silently stays in Adding when required fields are missing.
    /// Editing: emits `Update` keyed by the in-flight member id and returns
    /// to Idle. Idle: nothing.
    pub fn submit(&mut self) -> Option<RosterCommand> {
        match self.mode.clone() {
            Mode::Idle => None,
            Mode::Adding => {
                if !self.draft.is_complete() {
                    return None;
                }
                let draft = self.draft_take();
                let command = RosterCommand::Add(NewMember {
                    team_id: self.team_id.clone(),
                    hr_emp_id: draft.hr_emp_id,
                    name: draft.display_name(),
                    first_name: draft.first_name,
                    last_name: draft.last_name,
                    email: draft.email,
                    role: draft.role.unwrap_or_default(),
                    skills: draft.skills,
                    capacity: draft.capacity,
                    current_workload: draft.current_workload,
                });
                self.mode = Mode::Idle;
                Some(command)
            }
            Mode::Editing(member_id) => {
                let draft = self.draft_take();
                let command = RosterCommand::Update(
                    member_id,
                    MemberUpdate {
                        hr_emp_id: draft.hr_emp_id,
                        name: draft.display_name(),
                        first_name: draft.first_name,
                        last_name: draft.last_name,
                        email: draft.email,
                        role: draft.role.unwrap_or_default(),
                        skills: draft.skills,
                        capacity: draft.capacity,
                        current_workload: draft.current_workload,
                    },
                );
                self.mode = Mode::Idle;
                Some(command)
            }
        }
    }

    /// Remove intent for a member. Unavailable while a form is open.
    pub fn remove(&self, member_id: &str) -> Option<RosterCommand> {
        if self.can_modify(member_id) && self.is_idle() {
            Some(RosterCommand::Remove(member_id.to_string()))
        } else {
            None
        }
    }

    fn draft_take(&mut self) -> MemberDraft {
        std::mem::take(&mut self.draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str) -> TeamMember {
        TeamMember {
            id: id.to_string(),
            team_id: "t-1".to_string(),
            hr_emp_id: 1001,
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            name: "A B".to_string(),
            email: "a@b.com".to_string(),
            role: "developer".to_string(),
            skills: vec!["rust".to_string()].into(),
            capacity: 40,
            current_workload: 20,
        }
    }

    fn complete_add_editor() -> RosterEditor {
        let mut editor = RosterEditor::new("t-1");
        assert!(editor.start_add());
        editor.draft_mut().first_name = "A".to_string();
        editor.draft_mut().last_name = "B".to_string();
        editor.draft_mut().email = "a@b.com".to_string();
        editor.draft_mut().hr_emp_id = 1001;
        editor.set_role("developer");
        editor
    }

    #[test]
    fn test_add_submit_without_role_is_a_noop() {
        let mut editor = complete_add_editor();
        editor.draft_mut().role = None;

        assert!(editor.submit().is_none());
        assert_eq!(editor.mode(), &Mode::Adding);
        // Draft survives the rejected submit.
        assert_eq!(editor.draft().first_name, "A");
    }

    #[test]
    fn test_add_submit_emits_once_with_joined_name_and_resets() {
        let mut editor = complete_add_editor();

        let command = editor.submit().expect("complete draft should submit");
        match command {
            RosterCommand::Add(new) => {
                assert_eq!(new.name, "A B");
                assert_eq!(new.team_id, "t-1");
                assert_eq!(new.role, "developer");
            }
            other => panic!("expected Add, got {:?}", other),
        }

        assert_eq!(editor.mode(), &Mode::Idle);
        assert_eq!(editor.draft(), &MemberDraft::default());
        assert_eq!(editor.draft().capacity, 40);
        assert_eq!(editor.draft().hr_emp_id, 0);

        // Nothing further to submit once Idle.
        assert!(editor.submit().is_none());
    }

    #[test]
    fn test_edit_submit_targets_the_inflight_member() {
        let mut editor = RosterEditor::new("t-1");
        let existing = member("m-9");
        assert!(editor.start_edit(&existing));
        assert_eq!(editor.draft().role.as_deref(), Some("developer"));
        assert!(editor.draft().skills.contains("rust"));

        editor.draft_mut().first_name = "Ada".to_string();
        let command = editor.submit().expect("editing always submits");
        match command {
            RosterCommand::Update(id, update) => {
                assert_eq!(id, "m-9");
                assert_eq!(update.name, "Ada B");
            }
            other => panic!("expected Update, got {:?}", other),
        }
        assert_eq!(editor.mode(), &Mode::Idle);
    }

    #[test]
    fn test_cancel_resets_draft_to_defaults() {
        let mut editor = complete_add_editor();
        editor.toggle_skill("rust");
        editor.cancel();

        assert_eq!(editor.mode(), &Mode::Idle);
        assert_eq!(editor.draft(), &MemberDraft::default());
    }

    #[test]
    fn test_only_one_form_open_at_a_time() {
        let mut editor = RosterEditor::new("t-1");
        assert!(editor.start_add());
        assert!(!editor.start_add());
        assert!(!editor.start_edit(&member("m-1")));
    }

    #[test]
    fn test_control_gating_while_adding_and_editing() {
        let mut editor = RosterEditor::new("t-1");
        assert!(editor.can_modify("m-1"));
        assert!(editor.can_modify("m-2"));

        editor.start_add();
        assert!(!editor.can_modify("m-1"));
        assert!(!editor.can_modify("m-2"));
        editor.cancel();

        editor.start_edit(&member("m-1"));
        assert!(editor.can_modify("m-1"));
        assert!(!editor.can_modify("m-2"));
    }

    #[test]
    fn test_remove_is_disabled_while_a_form_is_open() {
        let mut editor = RosterEditor::new("t-1");
        assert_eq!(
            editor.remove("m-1"),
            Some(RosterCommand::Remove("m-1".to_string()))
        );

        editor.start_add();
        assert!(editor.remove("m-1").is_none());
        editor.cancel();

        editor.start_edit(&member("m-1"));
        assert!(editor.remove("m-1").is_none());
        assert!(editor.remove("m-2").is_none());
    }

    #[test]
    fn test_skill_toggle_round_trip() {
        let mut editor = RosterEditor::new("t-1");
        editor.start_add();
        let before = editor.draft().skills.clone();
        editor.toggle_skill("sql");
        editor.toggle_skill("sql");
        assert_eq!(editor.draft().skills, before);
    }

    #[test]
    fn test_capacity_clamps_to_bounds() {
        let mut editor = RosterEditor::new("t-1");
        editor.start_add();
        editor.set_capacity(0);
        assert_eq!(editor.draft().capacity, 1);
        editor.set_capacity(90);
        assert_eq!(editor.draft().capacity, 60);
        editor.set_capacity(38);
        assert_eq!(editor.draft().capacity, 38);
    }
}
