use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::model::Experience;

/// Current roles first, then most recent start date first.
pub fn compare_experiences(a: &Experience, b: &Experience) -> Ordering {
    b.is_current
        .cmp(&a.is_current)
        .then_with(|| b.start_date.cmp(&a.start_date))
}

/// Stable, so equal entries keep their fetch order.
pub fn sort_experiences(mut experiences: Vec<Experience>) -> Vec<Experience> {
    experiences.sort_by(compare_experiences);
    experiences
}

pub fn format_month(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

pub fn date_range(experience: &Experience) -> String {
    let end = experience
        .end_date
        .map(format_month)
        .unwrap_or_else(|| "Present".to_string());
    format!("{} - {}", format_month(experience.start_date), end)
}
