use crate::constants::{DEFAULT_WEEKLY_HOURS, NEAR_CAPACITY_PCT, OVERALLOCATED_PCT};
use crate::models::{ResourceAllocation, Team};

/// How a team card should be laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    List,
    Grid,
}

impl ViewMode {
    pub fn toggle(self) -> Self {
        match self {
            ViewMode::List => ViewMode::Grid,
            ViewMode::Grid => ViewMode::List,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "list" => Some(ViewMode::List),
            "grid" => Some(ViewMode::Grid),
            _ => None,
        }
    }
}

/// Three-tier treatment applied to the utilization figure and its bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtilizationLevel {
    /// Green: at or below the near-capacity threshold.
    Normal,
    /// Amber: above 85%, at or below 100%.
    NearCapacity,
    /// Red, with an alert glyph: above 100%.
    Overallocated,
}

pub fn utilization_level(pct: f64) -> UtilizationLevel {
    if pct > OVERALLOCATED_PCT {
        UtilizationLevel::Overallocated
    } else if pct > NEAR_CAPACITY_PCT {
        UtilizationLevel::NearCapacity
    } else {
        UtilizationLevel::Normal
    }
}

/// Everything a card needs that is derived rather than stored.
/// Pure function of the team and its optional allocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtilizationSummary {
    pub percentage: f64,
    pub level: UtilizationLevel,
    /// Displayed capacity: the allocation's total, or member_count x 40.
    pub capacity: f64,
}

impl UtilizationSummary {
    pub fn for_team(team: &Team, allocation: Option<&ResourceAllocation>) -> Self {
        let percentage = allocation.map(|a| a.utilization_pct).unwrap_or(0.0);
        let capacity = allocation
            .map(|a| a.total_capacity)
            .unwrap_or(team.member_count as f64 * DEFAULT_WEEKLY_HOURS);
        Self {
            percentage,
            level: utilization_level(percentage),
            capacity,
        }
    }

    /// Bar fill as a fraction of full width, clamped even when the
    /// underlying percentage exceeds 100.
    pub fn bar_ratio(&self) -> f64 {
        (self.percentage / 100.0).clamp(0.0, 1.0)
    }

    pub fn is_overallocated(&self) -> bool {
        self.level == UtilizationLevel::Overallocated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(member_count: u32) -> Team {
        Team {
            id: "t-1".to_string(),
            name: "Platform".to_string(),
            description: "Infra and tooling".to_string(),
            org_unit: "Engineering".to_string(),
            member_count,
            jira_board_id: "PLAT".to_string(),
            backlog_label: None,
        }
    }

    fn allocation(total: f64, pct: f64) -> ResourceAllocation {
        ResourceAllocation {
            total_capacity: total,
            utilization_pct: pct,
        }
    }

    #[test]
    fn test_level_tiers() {
        assert_eq!(utilization_level(0.0), UtilizationLevel::Normal);
        assert_eq!(utilization_level(85.0), UtilizationLevel::Normal);
        assert_eq!(utilization_level(85.1), UtilizationLevel::NearCapacity);
        assert_eq!(utilization_level(100.0), UtilizationLevel::NearCapacity);
        assert_eq!(utilization_level(100.1), UtilizationLevel::Overallocated);
        assert_eq!(utilization_level(240.0), UtilizationLevel::Overallocated);
    }

    #[test]
    fn test_percentage_defaults_to_zero_without_allocation() {
        let summary = UtilizationSummary::for_team(&team(5), None);
        assert_eq!(summary.percentage, 0.0);
        assert_eq!(summary.level, UtilizationLevel::Normal);
    }

    #[test]
    fn test_capacity_fallback_is_member_count_times_forty() {
        let summary = UtilizationSummary::for_team(&team(5), None);
        assert_eq!(summary.capacity, 200.0);
    }

    #[test]
    fn test_capacity_prefers_allocation_total() {
        let alloc = allocation(320.0, 90.0);
        let summary = UtilizationSummary::for_team(&team(5), Some(&alloc));
        assert_eq!(summary.capacity, 320.0);
        assert_eq!(summary.level, UtilizationLevel::NearCapacity);
    }

    #[test]
    fn test_bar_ratio_caps_at_full_width() {
        let alloc = allocation(100.0, 150.0);
        let summary = UtilizationSummary::for_team(&team(2), Some(&alloc));
        assert_eq!(summary.bar_ratio(), 1.0);
        assert!(summary.is_overallocated());

        let alloc = allocation(100.0, 40.0);
        let summary = UtilizationSummary::for_team(&team(2), Some(&alloc));
        assert_eq!(summary.bar_ratio(), 0.4);
    }
}
