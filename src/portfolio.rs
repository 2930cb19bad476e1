//! Per-section view models derived from fetched backend data.

pub mod experience;
pub mod profile;
pub mod projects;
pub mod skills;

pub use experience::{compare_experiences, date_range, sort_experiences};
pub use profile::Headline;
pub use projects::{load_showcase_projects, ProjectSource, ProjectWindow, PROJECT_WINDOW};
pub use skills::{CategoryFilter, SkillGroups, SkillLevel, SkillSummary};
