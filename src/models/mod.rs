pub mod member;
pub mod skills;
pub mod team;

// Re-export commonly used types
pub use member::{MemberUpdate, NewMember, TeamMember};
pub use skills::SkillSet;
pub use team::{ResourceAllocation, Team};
