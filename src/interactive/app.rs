use std::collections::HashMap;
use std::error::Error;
use std::time::Instant;

use crossterm::event::KeyCode;

use crate::cards::ViewMode;
use crate::config::load_config;
use crate::logging::log_error;
use crate::models::{ResourceAllocation, Team, TeamMember};
use crate::roster::{Mode, RosterEditor};
use crate::store::{open_store, JsonStore, RosterStore};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Focus {
    Teams,
    Roster,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Popup {
    MemberForm,
    RolePicker,
    SkillPicker,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
}

/// Fields of the member form, in tab order.
pub const FORM_FIELDS: &[&str] = &[
    "First name",
    "Last name",
    "Email",
    "HR ID",
    "Role",
    "Capacity",
    "Skills",
];

const FIELD_FIRST: usize = 0;
const FIELD_LAST: usize = 1;
const FIELD_EMAIL: usize = 2;
const FIELD_HR_ID: usize = 3;
const FIELD_ROLE: usize = 4;
const FIELD_CAPACITY: usize = 5;
const FIELD_SKILLS: usize = 6;

pub struct RosterApp {
    pub store: JsonStore,
    pub teams: Vec<Team>,
    pub allocations: HashMap<String, ResourceAllocation>,
    pub members: Vec<TeamMember>,
    pub editor: RosterEditor,
    pub focus: Focus,
    pub view: ViewMode,
    pub team_index: usize,
    pub member_index: usize,
    pub popup: Option<Popup>,
    pub active_field: usize,
    pub picker_index: usize,
    /// Digit buffers for the numeric form fields; parsed back into
    /// the draft on every keystroke.
    pub hr_input: String,
    pub capacity_input: String,
    pub roles: Vec<String>,
    pub skills: Vec<String>,
    pub missing_field: Option<&'static str>,
    pub notifications: Vec<Notification>,
    pub should_quit: bool,
}

impl RosterApp {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let config = load_config();
        let store = open_store(&config)?;

        let mut app = Self {
            store,
            teams: Vec::new(),
            allocations: HashMap::new(),
            members: Vec::new(),
            editor: RosterEditor::new(String::new()),
            focus: Focus::Teams,
            view: ViewMode::parse(&config.default_view).unwrap_or(ViewMode::List),
            team_index: 0,
            member_index: 0,
            popup: None,
            active_field: 0,
            picker_index: 0,
            hr_input: String::new(),
            capacity_input: String::new(),
            roles: config.roles,
            skills: config.skills,
            missing_field: None,
            notifications: Vec::new(),
            should_quit: false,
        };

        app.reload()?;
        Ok(app)
    }

    /// Re-read teams, allocations, and the selected team's roster.
    pub fn reload(&mut self) -> Result<(), Box<dyn Error>> {
        self.teams = self.store.teams()?;
        self.allocations.clear();
        for team in &self.teams {
            if let Some(allocation) = self.store.allocation(&team.id)? {
                self.allocations.insert(team.id.clone(), allocation);
            }
        }
        if self.team_index >= self.teams.len() {
            self.team_index = self.teams.len().saturating_sub(1);
        }
        self.refresh_members()?;
        Ok(())
    }

    fn refresh_members(&mut self) -> Result<(), Box<dyn Error>> {
        match self.selected_team() {
            Some(team) => {
                let team_id = team.id.clone();
                self.members = self.store.members(&team_id)?;
                if self.editor.is_idle() {
                    self.editor = RosterEditor::new(team_id);
                }
            }
            None => self.members.clear(),
        }
        if self.member_index >= self.members.len() {
            self.member_index = self.members.len().saturating_sub(1);
        }
        Ok(())
    }

    pub fn selected_team(&self) -> Option<&Team> {
        self.teams.get(self.team_index)
    }

    pub fn selected_member(&self) -> Option<&TeamMember> {
        self.members.get(self.member_index)
    }

    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.notifications.push(Notification {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        });
    }

    /// Drop notifications past their display window. Called on tick.
    pub fn expire_notifications(&mut self) {
        self.notifications.retain(|n| {
            let ttl = match n.kind {
                NotificationKind::Error => 8,
                _ => 5,
            };
            n.created_at.elapsed().as_secs() < ttl
        });
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        match self.popup {
            Some(Popup::MemberForm) => self.handle_form_key(key),
            Some(Popup::RolePicker) | Some(Popup::SkillPicker) => self.handle_picker_key(key),
            None => self.handle_normal_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Teams => Focus::Roster,
                    Focus::Roster => Focus::Teams,
                };
            }
            KeyCode::Char('j') | KeyCode::Down => self.move_down(),
            KeyCode::Char('k') | KeyCode::Up => self.move_up(),
            KeyCode::Char('v') => self.view = self.view.toggle(),
            KeyCode::Char('r') => {
                if let Err(e) = self.reload() {
                    self.notify(NotificationKind::Error, format!("Reload failed: {}", e));
                }
            }
            KeyCode::Enter if self.focus == Focus::Teams => {
                if self.selected_team().is_some() {
                    self.focus = Focus::Roster;
                }
            }
            KeyCode::Char('a') => self.open_add_form(),
            KeyCode::Char('e') if self.focus == Focus::Roster => self.open_edit_form(),
            KeyCode::Char('d') if self.focus == Focus::Roster => self.remove_selected(),
            _ => {}
        }
    }

    fn move_down(&mut self) {
        match self.focus {
            Focus::Teams => {
                if !self.teams.is_empty() {
                    self.team_index = (self.team_index + 1) % self.teams.len();
                    self.on_team_changed();
                }
            }
            Focus::Roster => {
                if !self.members.is_empty() {
                    self.member_index = (self.member_index + 1) % self.members.len();
                }
            }
        }
    }

    fn move_up(&mut self) {
        match self.focus {
            Focus::Teams => {
                if !self.teams.is_empty() {
                    self.team_index = self.team_index.checked_sub(1).unwrap_or(self.teams.len() - 1);
                    self.on_team_changed();
                }
            }
            Focus::Roster => {
                if !self.members.is_empty() {
                    self.member_index =
                        self.member_index.checked_sub(1).unwrap_or(self.members.len() - 1);
                }
            }
        }
    }

    fn on_team_changed(&mut self) {
        self.member_index = 0;
        if let Err(e) = self.refresh_members() {
            log_error(&format!("Failed to load members: {}", e));
            self.notify(NotificationKind::Error, format!("Failed to load members: {}", e));
        }
    }

    fn open_add_form(&mut self) {
        if self.selected_team().is_none() {
            return;
        }
        if !self.editor.start_add() {
            return;
        }
        self.open_form();
    }

    fn open_edit_form(&mut self) {
        let Some(member) = self.selected_member() else { return };
        if !self.editor.can_modify(&member.id) {
            return;
        }
        let member = member.clone();
        if !self.editor.start_edit(&member) {
            return;
        }
        self.open_form();
    }

    fn open_form(&mut self) {
        self.active_field = 0;
        self.missing_field = None;
        let draft = self.editor.draft();
        self.hr_input = if draft.hr_emp_id > 0 {
            draft.hr_emp_id.to_string()
        } else {
            String::new()
        };
        self.capacity_input = draft.capacity.to_string();
        self.popup = Some(Popup::MemberForm);
    }

    fn remove_selected(&mut self) {
        let Some(member) = self.selected_member() else { return };
        let id = member.id.clone();
        let name = member.name.clone();
        let Some(command) = self.editor.remove(&id) else { return };
        match self.store.dispatch(command) {
            Ok(()) => {
                self.notify(NotificationKind::Success, format!("Removed {}", name));
                if let Err(e) = self.reload() {
                    self.notify(NotificationKind::Error, format!("Reload failed: {}", e));
                }
            }
            Err(e) => self.notify(NotificationKind::Error, format!("Remove failed: {}", e)),
        }
    }

    fn handle_form_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.editor.cancel();
                self.popup = None;
                self.missing_field = None;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.active_field = (self.active_field + 1) % FORM_FIELDS.len();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.active_field =
                    self.active_field.checked_sub(1).unwrap_or(FORM_FIELDS.len() - 1);
            }
            KeyCode::Enter => match self.active_field {
                FIELD_ROLE => self.open_picker(Popup::RolePicker),
                FIELD_SKILLS => self.open_picker(Popup::SkillPicker),
                _ => self.submit_form(),
            },
            KeyCode::Char(c) => self.form_input(c),
            KeyCode::Backspace => self.form_backspace(),
            _ => {}
        }
    }

    fn open_picker(&mut self, popup: Popup) {
        self.picker_index = if popup == Popup::RolePicker {
            self.editor
                .draft()
                .role
                .as_ref()
                .and_then(|role| self.roles.iter().position(|r| r == role))
                .unwrap_or(0)
        } else {
            0
        };
        self.popup = Some(popup);
    }

    fn form_input(&mut self, c: char) {
        match self.active_field {
            FIELD_FIRST => self.editor.draft_mut().first_name.push(c),
            FIELD_LAST => self.editor.draft_mut().last_name.push(c),
            FIELD_EMAIL => self.editor.draft_mut().email.push(c),
            FIELD_HR_ID if c.is_ascii_digit() => {
                // Refuse digits that would overflow rather than zeroing the id.
                let mut candidate = self.hr_input.clone();
                candidate.push(c);
                if let Ok(id) = candidate.parse() {
                    self.editor.draft_mut().hr_emp_id = id;
                    self.hr_input = candidate;
                }
            }
            FIELD_CAPACITY if c.is_ascii_digit() => {
                self.capacity_input.push(c);
                if let Ok(capacity) = self.capacity_input.parse() {
                    self.editor.set_capacity(capacity);
                }
                // Display follows the clamped draft value.
                self.capacity_input = self.editor.draft().capacity.to_string();
            }
            _ => {}
        }
    }

    fn form_backspace(&mut self) {
        match self.active_field {
            FIELD_FIRST => {
                self.editor.draft_mut().first_name.pop();
            }
            FIELD_LAST => {
                self.editor.draft_mut().last_name.pop();
            }
            FIELD_EMAIL => {
                self.editor.draft_mut().email.pop();
            }
            FIELD_HR_ID => {
                self.hr_input.pop();
                self.editor.draft_mut().hr_emp_id = self.hr_input.parse().unwrap_or(0);
            }
            FIELD_CAPACITY => {
                self.capacity_input.pop();
                if let Ok(capacity) = self.capacity_input.parse() {
                    self.editor.set_capacity(capacity);
                    self.capacity_input = self.editor.draft().capacity.to_string();
                }
            }
            _ => {}
        }
    }

    fn submit_form(&mut self) {
        let was_adding = matches!(self.editor.mode(), Mode::Adding);
        let name = self.editor.draft().display_name();
        match self.editor.submit() {
            Some(command) => {
                let verb = if was_adding { "Added" } else { "Updated" };
                match self.store.dispatch(command) {
                    Ok(()) => {
                        self.popup = None;
                        self.missing_field = None;
                        let label = if name.is_empty() { "member".to_string() } else { name };
                        self.notify(NotificationKind::Success, format!("{} {}", verb, label));
                        if let Err(e) = self.reload() {
                            self.notify(NotificationKind::Error, format!("Reload failed: {}", e));
                        }
                    }
                    Err(e) => {
                        self.popup = None;
                        self.notify(NotificationKind::Error, format!("Save failed: {}", e));
                    }
                }
            }
            // Rejected add: form stays open, the first incomplete field
            // gets highlighted.
            None => {
                self.missing_field = self.editor.draft().first_missing_field();
            }
        }
    }

    fn handle_picker_key(&mut self, key: KeyCode) {
        let options = match self.popup {
            Some(Popup::RolePicker) => self.roles.len(),
            Some(Popup::SkillPicker) => self.skills.len(),
            _ => 0,
        };
        match key {
            KeyCode::Esc => self.popup = Some(Popup::MemberForm),
            KeyCode::Char('j') | KeyCode::Down => {
                if options > 0 {
                    self.picker_index = (self.picker_index + 1) % options;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if options > 0 {
                    self.picker_index = self.picker_index.checked_sub(1).unwrap_or(options - 1);
                }
            }
            KeyCode::Char(' ') if self.popup == Some(Popup::SkillPicker) => {
                if let Some(skill) = self.skills.get(self.picker_index) {
                    let skill = skill.clone();
                    self.editor.toggle_skill(&skill);
                }
            }
            KeyCode::Enter => {
                if self.popup == Some(Popup::RolePicker) {
                    if let Some(role) = self.roles.get(self.picker_index) {
                        let role = role.clone();
                        self.editor.set_role(&role);
                    }
                }
                self.popup = Some(Popup::MemberForm);
            }
            _ => {}
        }
    }
}
