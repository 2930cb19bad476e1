use std::future::Future;

use crate::{
    api::{ApiClient, ApiError, FetchOutcome},
    model::Project,
};

/// Projects shown before "show all" is toggled.
pub const PROJECT_WINDOW: usize = 6;
/// Technology badges shown per card.
pub const TECH_PREVIEW: usize = 3;

pub trait ProjectSource {
    fn featured(&self) -> impl Future<Output = Result<Vec<Project>, ApiError>>;
    fn all(&self) -> impl Future<Output = Result<Vec<Project>, ApiError>>;
}

impl ProjectSource for ApiClient {
    fn featured(&self) -> impl Future<Output = Result<Vec<Project>, ApiError>> {
        self.featured_projects()
    }

    fn all(&self) -> impl Future<Output = Result<Vec<Project>, ApiError>> {
        self.projects()
    }
}

/// Featured projects, or the first few of all projects when the featured
/// endpoint fails. If both fail the section stays empty.
pub async fn load_showcase_projects<S: ProjectSource>(source: &S) -> FetchOutcome<Vec<Project>> {
    match source.featured().await {
        Ok(projects) => FetchOutcome::from_list(Ok(projects), "featured projects"),
        Err(e) => {
            log::error!("Error fetching featured projects: {e}");
            let all = source.all().await.map(|mut projects| {
                projects.truncate(PROJECT_WINDOW);
                projects
            });
            FetchOutcome::from_list(all, "all projects")
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectWindow {
    show_all: bool,
}

impl ProjectWindow {
    pub fn show_all(self) -> bool {
        self.show_all
    }

    pub fn toggle(&mut self) {
        self.show_all = !self.show_all;
    }

    pub fn displayed<T>(self, items: &[T]) -> &[T] {
        if self.show_all {
            items
        } else {
            &items[..items.len().min(PROJECT_WINDOW)]
        }
    }

    /// Whether the toggle is worth showing at all.
    pub fn has_overflow(total: usize) -> bool {
        total > PROJECT_WINDOW
    }

    pub fn toggle_label(self, total: usize) -> String {
        if self.show_all {
            "Show Less".to_string()
        } else {
            format!("Show All Projects ({total})")
        }
    }
}

/// First few technologies plus how many were left out.
pub fn tech_preview(project: &Project) -> (&[String], usize) {
    let shown = project.technologies.len().min(TECH_PREVIEW);
    (
        &project.technologies[..shown],
        project.technologies.len() - shown,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    fn project(id: i64) -> Project {
        Project {
            id,
            title: format!("Project {id}"),
            description: String::new(),
            short_description: None,
            image_url: None,
            github_url: None,
            live_url: None,
            technologies: vec![],
            start_date: "2023-01-01".parse().unwrap(),
            end_date: None,
            is_featured: false,
            display_order: 0,
        }
    }

    fn projects(n: i64) -> Vec<Project> {
        (1..=n).map(project).collect()
    }

    fn unavailable() -> ApiError {
        ApiError::Status {
            status: 503,
            message: "unavailable".to_string(),
        }
    }

    struct FakeSource {
        featured: Option<Vec<Project>>,
        all: Option<Vec<Project>>,
        all_calls: Cell<usize>,
    }

    impl FakeSource {
        fn new(featured: Option<Vec<Project>>, all: Option<Vec<Project>>) -> Self {
            Self {
                featured,
                all,
                all_calls: Cell::new(0),
            }
        }
    }

    impl ProjectSource for FakeSource {
        async fn featured(&self) -> Result<Vec<Project>, ApiError> {
            self.featured.clone().ok_or_else(unavailable)
        }

        async fn all(&self) -> Result<Vec<Project>, ApiError> {
            self.all_calls.set(self.all_calls.get() + 1);
            self.all.clone().ok_or_else(unavailable)
        }
    }

    #[tokio::test]
    async fn test_featured_success_skips_fallback() {
        let source = FakeSource::new(Some(projects(8)), Some(projects(20)));
        let loaded = load_showcase_projects(&source).await.into_items();
        assert_eq!(loaded.len(), 8);
        assert_eq!(source.all_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_falls_back_to_truncated_all() {
        let source = FakeSource::new(None, Some(projects(10)));
        let loaded = load_showcase_projects(&source).await.into_items();
        assert_eq!(
            loaded.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5, 6]
        );
        assert_eq!(source.all_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_both_failing_leaves_section_empty() {
        let source = FakeSource::new(None, None);
        let outcome = load_showcase_projects(&source).await;
        assert!(outcome.is_failed());
        assert!(outcome.into_items().is_empty());
    }

    #[test]
    fn test_window_caps_at_six() {
        let window = ProjectWindow::default();
        assert!(!window.show_all());
        assert_eq!(window.displayed(&projects(10)).len(), 6);
        assert_eq!(window.displayed(&projects(4)).len(), 4);
        assert_eq!(window.displayed::<Project>(&[]).len(), 0);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let all = projects(9);
        let mut window = ProjectWindow::default();
        window.toggle();
        assert_eq!(window.displayed(&all).len(), 9);
        assert_eq!(window.toggle_label(all.len()), "Show Less");
        window.toggle();
        assert_eq!(window, ProjectWindow::default());
        assert_eq!(window.toggle_label(all.len()), "Show All Projects (9)");
    }

    #[test]
    fn test_overflow() {
        assert!(!ProjectWindow::has_overflow(6));
        assert!(ProjectWindow::has_overflow(7));
    }

    #[test]
    fn test_tech_preview() {
        let mut p = project(1);
        p.technologies = ["Rust", "Leptos", "Axum", "Tailwind", "Postgres"]
            .map(String::from)
            .to_vec();
        let (shown, rest) = tech_preview(&p);
        assert_eq!(shown, ["Rust", "Leptos", "Axum"].map(String::from).as_slice());
        assert_eq!(rest, 2);

        p.technologies.truncate(2);
        assert_eq!(tech_preview(&p).1, 0);
    }
}
