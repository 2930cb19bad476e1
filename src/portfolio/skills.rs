use std::{collections::HashSet, fmt};

use crate::model::{Skill, SkillCategory};

const EXPERT_LEVEL: i32 = 8;

/// Display tier for a proficiency level. Total over all integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub fn from_level(level: i32) -> Self {
        match level {
            l if l >= EXPERT_LEVEL => SkillLevel::Expert,
            l if l >= 6 => SkillLevel::Advanced,
            l if l >= 4 => SkillLevel::Intermediate,
            _ => SkillLevel::Beginner,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Expert => "Expert",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Beginner => "Beginner",
        }
    }

    pub fn bar_class(self) -> &'static str {
        match self {
            SkillLevel::Expert => "bg-green-500",
            SkillLevel::Advanced => "bg-blue-500",
            SkillLevel::Intermediate => "bg-yellow-500",
            SkillLevel::Beginner => "bg-gray-400",
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            SkillLevel::Expert => "text-green-600",
            SkillLevel::Advanced => "text-blue-600",
            SkillLevel::Intermediate => "text-yellow-600",
            SkillLevel::Beginner => "text-gray-600",
        }
    }
}

/// Progress bar width. Clamped here only; the level itself is shown as sent.
pub fn bar_width_percent(level: i32) -> i32 {
    level.saturating_mul(10).clamp(0, 100)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(SkillCategory),
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Category(c) => write!(f, "{c}"),
        }
    }
}

/// Skills partitioned by category. Categories keep first-seen order and
/// skills keep fetch order inside each group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillGroups {
    groups: Vec<(SkillCategory, Vec<Skill>)>,
}

impl SkillGroups {
    pub fn from_skills(skills: &[Skill]) -> Self {
        let mut groups: Vec<(SkillCategory, Vec<Skill>)> = Vec::new();
        for skill in skills {
            match groups.iter_mut().find(|(c, _)| *c == skill.category) {
                Some((_, group)) => group.push(skill.clone()),
                None => groups.push((skill.category, vec![skill.clone()])),
            }
        }
        Self { groups }
    }

    pub fn get(&self, category: SkillCategory) -> &[Skill] {
        self.groups
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, group)| group.as_slice())
            .unwrap_or_default()
    }

    /// `all` followed by every observed category.
    pub fn filters(&self) -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(self.groups.iter().map(|(c, _)| CategoryFilter::Category(*c)))
            .collect()
    }

    pub fn filtered<'a>(&'a self, skills: &'a [Skill], filter: CategoryFilter) -> &'a [Skill] {
        match filter {
            CategoryFilter::All => skills,
            CategoryFilter::Category(c) => self.get(c),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkillSummary {
    pub total: usize,
    pub expert_count: usize,
    pub category_count: usize,
    pub featured_count: usize,
}

impl SkillSummary {
    pub fn from_skills(skills: &[Skill]) -> Self {
        Self {
            total: skills.len(),
            expert_count: skills
                .iter()
                .filter(|s| s.proficiency_level >= EXPERT_LEVEL)
                .count(),
            category_count: skills
                .iter()
                .map(|s| s.category)
                .collect::<HashSet<_>>()
                .len(),
            featured_count: skills.iter().filter(|s| s.is_featured).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn skill(id: i64, category: SkillCategory, level: i32) -> Skill {
        Skill {
            id,
            name: format!("skill-{id}"),
            category,
            proficiency_level: level,
            years_of_experience: None,
            is_featured: false,
            display_order: None,
        }
    }

    fn ids(skills: &[Skill]) -> Vec<i64> {
        skills.iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_level_boundaries() {
        assert_eq!(SkillLevel::from_level(8).label(), "Expert");
        assert_eq!(SkillLevel::from_level(7).label(), "Advanced");
        assert_eq!(SkillLevel::from_level(6).label(), "Advanced");
        assert_eq!(SkillLevel::from_level(5).label(), "Intermediate");
        assert_eq!(SkillLevel::from_level(4).label(), "Intermediate");
        assert_eq!(SkillLevel::from_level(3).label(), "Beginner");
        assert_eq!(SkillLevel::from_level(-5), SkillLevel::Beginner);
        assert_eq!(SkillLevel::from_level(42), SkillLevel::Expert);
        assert_eq!(SkillLevel::from_level(8).bar_class(), "bg-green-500");
        assert_eq!(SkillLevel::from_level(3).bar_class(), "bg-gray-400");
    }

    #[test]
    fn test_level_is_monotonic() {
        for level in -20..30 {
            assert!(SkillLevel::from_level(level) <= SkillLevel::from_level(level + 1));
        }
    }

    #[test]
    fn test_bar_width_clamps() {
        assert_eq!(bar_width_percent(7), 70);
        assert_eq!(bar_width_percent(12), 100);
        assert_eq!(bar_width_percent(-1), 0);
        assert_eq!(bar_width_percent(300_000_000), 100);
        assert_eq!(bar_width_percent(i32::MAX), 100);
        assert_eq!(bar_width_percent(i32::MIN), 0);
    }

    #[test]
    fn test_groups_partition_in_first_seen_order() {
        let skills = vec![
            skill(1, SkillCategory::Backend, 9),
            skill(2, SkillCategory::Frontend, 7),
            skill(3, SkillCategory::Backend, 5),
            skill(4, SkillCategory::Tools, 3),
            skill(5, SkillCategory::Frontend, 8),
        ];
        let groups = SkillGroups::from_skills(&skills);

        assert_eq!(
            groups.filters(),
            vec![
                CategoryFilter::All,
                CategoryFilter::Category(SkillCategory::Backend),
                CategoryFilter::Category(SkillCategory::Frontend),
                CategoryFilter::Category(SkillCategory::Tools),
            ]
        );
        assert_eq!(ids(groups.get(SkillCategory::Backend)), vec![1, 3]);
        assert_eq!(ids(groups.get(SkillCategory::Frontend)), vec![2, 5]);

        let mut recovered = Vec::new();
        for filter in groups.filters() {
            if let CategoryFilter::Category(category) = filter {
                let group = groups.get(category);
                assert!(group.iter().all(|s| s.category == category));
                recovered.extend(ids(group));
            }
        }
        recovered.sort();
        assert_eq!(recovered, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_filtering() {
        let skills = vec![
            skill(1, SkillCategory::Backend, 9),
            skill(2, SkillCategory::Database, 7),
        ];
        let groups = SkillGroups::from_skills(&skills);

        assert_eq!(ids(groups.filtered(&skills, CategoryFilter::All)), vec![1, 2]);
        assert_eq!(
            ids(groups.filtered(&skills, CategoryFilter::Category(SkillCategory::Database))),
            vec![2]
        );
        assert!(groups
            .filtered(&skills, CategoryFilter::Category(SkillCategory::Frontend))
            .is_empty());
        assert_eq!(CategoryFilter::default(), CategoryFilter::All);
    }

    #[test]
    fn test_filter_display() {
        assert_eq!(CategoryFilter::All.to_string(), "all");
        assert_eq!(
            CategoryFilter::Category(SkillCategory::Tools).to_string(),
            "TOOLS"
        );
    }

    #[test]
    fn test_summary() {
        let skills = vec![
            skill(1, SkillCategory::Backend, 9),
            skill(2, SkillCategory::Frontend, 7),
            skill(3, SkillCategory::Backend, 3),
        ];
        assert_eq!(
            SkillSummary::from_skills(&skills),
            SkillSummary {
                total: 3,
                expert_count: 1,
                category_count: 2,
                featured_count: 0,
            }
        );

        let mut featured = skills.clone();
        featured[1].is_featured = true;
        assert_eq!(SkillSummary::from_skills(&featured).featured_count, 1);
        assert_eq!(SkillSummary::from_skills(&[]), SkillSummary::default());
    }
}
