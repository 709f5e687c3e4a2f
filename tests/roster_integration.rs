use roster_cli::models::{ResourceAllocation, SkillSet, Team, TeamMember};
use roster_cli::roster::{Mode, RosterCommand, RosterEditor};
use roster_cli::store::{JsonStore, RosterStore};
use roster_cli::{UtilizationLevel, UtilizationSummary};
use tempfile::TempDir;

fn seeded_store(dir: &TempDir) -> JsonStore {
    let path = dir.path().join("roster.json");
    std::fs::write(
        &path,
        serde_json::json!({
            "teams": [{
                "id": "t-1",
                "name": "Platform",
                "description": "Core infrastructure",
                "org_unit": "Engineering",
                "member_count": 0,
                "jira_board_id": "PLAT",
                "backlog_label": "plat-backlog",
                "allocation": { "total_capacity": 120.0, "utilization_pct": 104.0 }
            }],
            "members": [],
            "next_member_id": 0
        })
        .to_string(),
    )
    .unwrap();
    JsonStore::open(path).unwrap()
}

fn add_member(store: &mut JsonStore, first: &str, last: &str) -> TeamMember {
    let mut editor = RosterEditor::new("t-1");
    assert!(editor.start_add());
    {
        let draft = editor.draft_mut();
        draft.first_name = first.to_string();
        draft.last_name = last.to_string();
        draft.email = format!("{}@example.com", first.to_lowercase());
        draft.hr_emp_id = 1001;
    }
    editor.set_role("developer");
    editor.toggle_skill("rust");

    let command = editor.submit().expect("complete draft should submit");
    store.dispatch(command).unwrap();
    store.members("t-1").unwrap().last().cloned().unwrap()
}

#[test]
fn test_add_flow_end_to_end() {
    let dir = TempDir::new().unwrap();
    let mut store = seeded_store(&dir);

    let member = add_member(&mut store, "Ada", "Lovelace");
    assert_eq!(member.name, "Ada Lovelace");
    assert_eq!(member.id, "m-1");
    assert!(member.skills.contains("rust"));
    assert_eq!(store.team("t-1").unwrap().member_count, 1);
}

#[test]
fn test_rejected_add_leaves_store_untouched() {
    let dir = TempDir::new().unwrap();
    let mut store = seeded_store(&dir);

    let mut editor = RosterEditor::new("t-1");
    editor.start_add();
    editor.draft_mut().first_name = "Ada".to_string();
    // No role set: submit must refuse and stay in Adding.
    assert!(editor.submit().is_none());
    assert_eq!(editor.mode(), &Mode::Adding);
    assert!(store.members("t-1").unwrap().is_empty());
}

#[test]
fn test_edit_flow_updates_member() {
    let dir = TempDir::new().unwrap();
    let mut store = seeded_store(&dir);
    let member = add_member(&mut store, "Ada", "Lovelace");

    let mut editor = RosterEditor::new("t-1");
    assert!(editor.start_edit(&member));
    assert!(editor.can_modify(&member.id));
    assert!(!editor.can_modify("m-999"));

    editor.draft_mut().last_name = "Byron".to_string();
    editor.set_capacity(32);
    let command = editor.submit().expect("edit submit always emits");
    assert!(matches!(command, RosterCommand::Update(ref id, _) if id == &member.id));
    store.dispatch(command).unwrap();

    let updated = &store.members("t-1").unwrap()[0];
    assert_eq!(updated.name, "Ada Byron");
    assert_eq!(updated.capacity, 32);
    assert_eq!(updated.id, member.id);
}

#[test]
fn test_remove_only_from_idle() {
    let dir = TempDir::new().unwrap();
    let mut store = seeded_store(&dir);
    let member = add_member(&mut store, "Ada", "Lovelace");

    let mut editor = RosterEditor::new("t-1");
    editor.start_add();
    assert!(editor.remove(&member.id).is_none());

    editor.cancel();
    let command = editor.remove(&member.id).expect("idle editor may remove");
    store.dispatch(command).unwrap();
    assert!(store.members("t-1").unwrap().is_empty());
    assert_eq!(store.team("t-1").unwrap().member_count, 0);
}

#[test]
fn test_team_update_and_delete() {
    let dir = TempDir::new().unwrap();
    let mut store = seeded_store(&dir);
    add_member(&mut store, "Ada", "Lovelace");

    let mut team = store.team("t-1").unwrap();
    team.name = "Platform Core".to_string();
    team.backlog_label = None;
    store.update_team(team.clone()).unwrap();

    let updated = store.team("t-1").unwrap();
    assert_eq!(updated.name, "Platform Core");
    assert_eq!(updated.backlog_label, None);
    assert_eq!(updated.member_count, 1);

    store.delete_team("t-1", "Platform Core").unwrap();
    assert!(store.teams().unwrap().is_empty());
    assert!(store.members("t-1").is_err());
}

#[test]
fn test_changes_persist_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roster.json");
    {
        let mut store = seeded_store(&dir);
        add_member(&mut store, "Ada", "Lovelace");
        add_member(&mut store, "Grace", "Hopper");
    }

    let store = JsonStore::open(&path).unwrap();
    let members = store.members("t-1").unwrap();
    assert_eq!(members.len(), 2);
    assert_eq!(members[1].name, "Grace Hopper");
    assert_eq!(store.team("t-1").unwrap().member_count, 2);
}

#[test]
fn test_card_summary_from_stored_allocation() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir);

    let team = store.team("t-1").unwrap();
    let allocation = store.allocation("t-1").unwrap();
    let summary = UtilizationSummary::for_team(&team, allocation.as_ref());
    assert_eq!(summary.level, UtilizationLevel::Overallocated);
    assert_eq!(summary.capacity, 120.0);
    assert_eq!(summary.bar_ratio(), 1.0);
}

#[test]
fn test_card_summary_fallback_without_allocation() {
    let team = Team {
        id: "t-2".to_string(),
        name: "Design".to_string(),
        description: String::new(),
        org_unit: "Product".to_string(),
        member_count: 3,
        jira_board_id: "DES".to_string(),
        backlog_label: None,
    };
    let summary = UtilizationSummary::for_team(&team, None);
    assert_eq!(summary.percentage, 0.0);
    assert_eq!(summary.level, UtilizationLevel::Normal);
    assert_eq!(summary.capacity, 120.0);
}

#[test]
fn test_skill_toggle_round_trip() {
    let mut skills = SkillSet::from(vec!["rust".to_string(), "sql".to_string()]);
    let before: Vec<String> = skills.iter().map(str::to_string).collect();
    skills.toggle("python");
    assert!(skills.contains("python"));
    skills.toggle("python");
    let after: Vec<String> = skills.iter().map(str::to_string).collect();
    assert_eq!(before, after);
}
