pub const CONFIG_FILE: &str = ".roster-cli-config.json";
pub const DATA_FILE: &str = "roster.json";
pub const DATA_FILE_ENV: &str = "ROSTER_DATA_FILE";

/// Weekly hours assumed per member when a team has no allocation record.
pub const DEFAULT_WEEKLY_HOURS: f64 = 40.0;

/// Default weekly capacity for a new member draft.
pub const DEFAULT_CAPACITY: u32 = 40;
pub const MIN_CAPACITY: u32 = 1;
pub const MAX_CAPACITY: u32 = 60;

/// Utilization above this percentage renders the amber treatment.
pub const NEAR_CAPACITY_PCT: f64 = 85.0;
/// Utilization above this percentage renders the red treatment.
pub const OVERALLOCATED_PCT: f64 = 100.0;

pub const DEFAULT_ROLES: &[&str] = &[
    "developer",
    "designer",
    "qa",
    "product-manager",
    "scrum-master",
    "tech-lead",
];

pub const DEFAULT_SKILLS: &[&str] = &[
    "rust",
    "typescript",
    "python",
    "kubernetes",
    "sql",
    "react",
    "terraform",
    "ux-research",
];
