//! View model of the directory page.
//!
//! A `PageView` starts out in the loading state and is driven by the page
//! session: the title is set from the configuration, the projects are rendered
//! or replaced by an error, and the repository panel is rendered when there is
//! anything to show. The view never holds project cards and an error at the
//! same time.

use crate::configuration::{Project, Repository};
use crate::error::{DirectoryError, Result};
use crate::fuzzy::{fold, is_subsequence, normalize_term};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    pub default_title: String,
    pub show_repositories: bool,
    pub repository_search: bool,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            default_title: "Organization Index".to_string(),
            show_repositories: true,
            repository_search: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub name: String,
    pub url: String,
    pub description: String,
}

impl ProjectCard {
    pub fn aria_label(&self) -> String {
        format!("Open {}", self.name)
    }
}

impl From<&Project> for ProjectCard {
    fn from(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            url: project.url.clone(),
            description: project.description().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryItem {
    pub name: String,
    pub url: String,
    /// Folded copy of the name, what the search runs against.
    pub search_key: String,
    pub hidden: bool,
}

impl RepositoryItem {
    pub fn aria_label(&self) -> String {
        format!("Open {} repository on GitHub", self.name)
    }

    pub fn is_visible(&self) -> bool {
        !self.hidden
    }
}

impl From<&Repository> for RepositoryItem {
    fn from(repository: &Repository) -> Self {
        Self {
            name: repository.name.clone(),
            url: repository.url.clone(),
            search_key: fold(&repository.name),
            hidden: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryPanel {
    search_enabled: bool,
    query: String,
    items: Vec<RepositoryItem>,
}

impl RepositoryPanel {
    pub fn new(repositories: &[Repository], search_enabled: bool) -> Self {
        Self {
            search_enabled,
            query: String::new(),
            items: repositories.iter().map(RepositoryItem::from).collect(),
        }
    }

    pub fn search_enabled(&self) -> bool {
        self.search_enabled
    }

    /// The term as the user typed it.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn items(&self) -> &[RepositoryItem] {
        &self.items
    }

    pub fn visible_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_visible()).count()
    }

    /// Re-evaluates every item against `term`. Items that don't match are
    /// hidden, never removed. Does nothing when search is disabled.
    pub fn filter(&mut self, term: &str) {
        if !self.search_enabled {
            return;
        }

        self.query = term.to_string();
        let term = normalize_term(term);

        for item in &mut self.items {
            item.hidden = !term.is_empty() && !is_subsequence(&term, &item.search_key);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    title: String,
    loading: bool,
    error: Option<String>,
    projects: Vec<ProjectCard>,
    projects_visible: bool,
    repositories: Option<RepositoryPanel>,
    options: PageOptions,
}

impl PageView {
    pub fn loading(options: &PageOptions) -> Self {
        Self {
            title: options.default_title.clone(),
            loading: true,
            error: None,
            projects: vec![],
            projects_visible: true,
            repositories: None,
            options: options.clone(),
        }
    }

    pub fn set_title(&mut self, title: Option<&str>) {
        if let Some(title) = title {
            self.title = title.to_string();
        }
    }

    pub fn render_projects(&mut self, projects: &[Project]) -> Result<()> {
        self.loading = false;

        if projects.is_empty() {
            return Err(DirectoryError::NoProjects);
        }

        self.projects = projects.iter().map(ProjectCard::from).collect();
        self.projects_visible = true;

        Ok(())
    }

    /// Leaves the panel hidden when there is nothing to list.
    pub fn render_repositories(&mut self, repositories: &[Repository]) {
        if !self.options.show_repositories || repositories.is_empty() {
            return;
        }

        self.repositories = Some(RepositoryPanel::new(
            repositories,
            self.options.repository_search,
        ));
    }

    pub fn show_error(&mut self, error: &DirectoryError) {
        self.loading = false;
        self.projects.clear();
        self.projects_visible = false;
        self.error = Some(error.to_string());
    }

    pub fn filter_repositories(&mut self, term: &str) {
        if let Some(panel) = self.repositories.as_mut() {
            panel.filter(term);
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn projects(&self) -> &[ProjectCard] {
        &self.projects
    }

    pub fn projects_visible(&self) -> bool {
        self.projects_visible
    }

    pub fn repositories(&self) -> Option<&RepositoryPanel> {
        self.repositories.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(name: &str) -> Project {
        Project {
            name: name.to_string(),
            url: format!("https://{name}.dev"),
            description: None,
        }
    }

    fn repository(name: &str) -> Repository {
        Repository {
            name: name.to_string(),
            url: format!("https://github.com/acme/{name}"),
        }
    }

    fn repositories() -> Vec<Repository> {
        vec![
            repository("GitHub-Actions"),
            repository("vibe-index"),
            repository("hub"),
        ]
    }

    #[test]
    fn loading_view_uses_default_title() {
        let view = PageView::loading(&PageOptions::default());

        assert!(view.is_loading());
        assert_eq!(view.title(), "Organization Index");
        assert_eq!(view.error(), None);
    }

    #[test]
    fn title_is_replaced_only_when_given() {
        let mut view = PageView::loading(&PageOptions::default());

        view.set_title(None);
        assert_eq!(view.title(), "Organization Index");

        view.set_title(Some("Acme"));
        assert_eq!(view.title(), "Acme");
    }

    #[test]
    fn projects_render_in_order() {
        let mut view = PageView::loading(&PageOptions::default());

        view.render_projects(&[project("b"), project("a")]).unwrap();

        assert!(!view.is_loading());
        assert!(view.projects_visible());
        let names: Vec<&str> = view.projects().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(view.projects()[0].description, "No description available");
        assert_eq!(view.projects()[0].aria_label(), "Open b");
    }

    #[test]
    fn empty_projects_is_an_error() {
        let mut view = PageView::loading(&PageOptions::default());

        let err = view.render_projects(&[]).unwrap_err();

        assert_eq!(err, DirectoryError::NoProjects);
        assert!(!view.is_loading());
    }

    #[test]
    fn error_hides_projects() {
        let mut view = PageView::loading(&PageOptions::default());
        view.render_projects(&[project("a")]).unwrap();

        view.show_error(&DirectoryError::NoProjects);

        assert_eq!(view.error(), Some("No projects found in configuration"));
        assert!(!view.projects_visible());
        assert!(view.projects().is_empty());
    }

    #[test]
    fn no_repositories_keeps_panel_hidden() {
        let mut view = PageView::loading(&PageOptions::default());

        view.render_repositories(&[]);

        assert!(view.repositories().is_none());
        assert_eq!(view.error(), None);
    }

    #[test]
    fn repositories_disabled_keeps_panel_hidden() {
        let options = PageOptions {
            show_repositories: false,
            ..Default::default()
        };
        let mut view = PageView::loading(&options);

        view.render_repositories(&repositories());

        assert!(view.repositories().is_none());
    }

    #[test]
    fn repository_items_carry_folded_names() {
        let mut view = PageView::loading(&PageOptions::default());
        view.render_repositories(&repositories());

        let panel = view.repositories().unwrap();
        assert_eq!(panel.items()[0].search_key, "github-actions");
        assert_eq!(
            panel.items()[0].aria_label(),
            "Open GitHub-Actions repository on GitHub"
        );
        assert_eq!(panel.visible_count(), 3);
    }

    #[test]
    fn filter_hides_without_removing() {
        let mut panel = RepositoryPanel::new(&repositories(), true);

        panel.filter("HUB");

        assert_eq!(panel.items().len(), 3);
        let visible: Vec<&str> = panel
            .items()
            .iter()
            .filter(|item| item.is_visible())
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(visible, vec!["GitHub-Actions", "hub"]);
        assert_eq!(panel.query(), "HUB");
    }

    #[test]
    fn blank_filter_shows_everything_again() {
        let mut panel = RepositoryPanel::new(&repositories(), true);

        panel.filter("zzz");
        assert_eq!(panel.visible_count(), 0);

        panel.filter("   ");
        assert_eq!(panel.visible_count(), 3);
    }

    #[test]
    fn filter_is_ignored_without_search() {
        let mut panel = RepositoryPanel::new(&repositories(), false);

        panel.filter("zzz");

        assert_eq!(panel.visible_count(), 3);
        assert_eq!(panel.query(), "");
    }

    #[test]
    fn filter_on_view_without_panel_is_noop() {
        let mut view = PageView::loading(&PageOptions::default());
        view.filter_repositories("abc");
        assert!(view.repositories().is_none());
    }
}
