use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub description: String,
    pub org_unit: String,
    pub member_count: u32,
    pub jira_board_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backlog_label: Option<String>,
}

/// Capacity and utilization for a team, derived by the data layer.
/// Utilization may exceed 100 when a team is overbooked.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct ResourceAllocation {
    pub total_capacity: f64,
    pub utilization_pct: f64,
}
