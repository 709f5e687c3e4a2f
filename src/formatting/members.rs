use colored::Colorize;

use crate::formatting::theme::{SemanticColor, ThemedColorize};
use crate::formatting::utils::{format_hours, format_role, truncate};
use crate::models::TeamMember;

pub fn print_members(members: &[TeamMember]) {
    if !members.is_empty() {
        println!(
            "{:<8} {:<22} {:<28} {:<16} {:<9} {:<9} {:<30}",
            "ID".bold(),
            "Name".bold(),
            "Email".bold(),
            "Role".bold(),
            "Capacity".bold(),
            "Load".bold(),
            "Skills".bold()
        );
        println!("{}", "-".repeat(124));
    }

    for line in members_lines(members) {
        println!("{}", line);
    }
}

/// Body lines of the roster table; the empty roster renders its placeholder.
fn members_lines(members: &[TeamMember]) -> Vec<String> {
    if members.is_empty() {
        return vec!["No team members yet".to_string()];
    }
    members.iter().map(member_row).collect()
}

fn member_row(member: &TeamMember) -> String {
    let skills = member.skills.iter().collect::<Vec<_>>().join(", ");
    format!(
        "{:<8} {:<22} {:<28} {:<16} {:<9} {:<9} {:<30}",
        member.id.with_theme(SemanticColor::Muted),
        truncate(&member.name, 20).with_theme(SemanticColor::Member),
        truncate(&member.email, 26),
        truncate(&format_role(&member.role), 14).with_theme(SemanticColor::Role),
        format_hours(member.capacity),
        format_hours(member.current_workload),
        truncate(&skills, 28).with_theme(SemanticColor::Skill),
    )
}
