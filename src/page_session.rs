use uuid::Uuid;
use vibe_core::error::DirectoryError;
use vibe_core::page::{PageOptions, PageView};

use crate::config_source::{load_config, ConfigSource};

/// Controller state for a single page view. Created when the page is
/// requested and dropped once it has been rendered.
pub struct PageSession {
    id: Uuid,
    view: PageView,
    load_error: Option<DirectoryError>,
}

impl PageSession {
    pub async fn open<S: ConfigSource>(source: &S, options: &PageOptions) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!("Page session {id} opened");

        let mut view = PageView::loading(options);
        let mut load_error = None;

        match load_config(source).await {
            Ok(config) => {
                view.set_title(config.title());

                if let Err(e) = view.render_projects(&config.projects) {
                    report(id, &e);
                    view.show_error(&e);
                }

                view.render_repositories(&config.github_repositories);
            }
            Err(e) => {
                report(id, &e);
                view.show_error(&e);
                load_error = Some(e);
            }
        }

        Self {
            id,
            view,
            load_error,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// One search input event.
    pub fn search(&mut self, term: &str) {
        self.view.filter_repositories(term);

        if let Some(panel) = self.view.repositories() {
            tracing::trace!(
                "Session {}: {} of {} repositories match {term:?}",
                self.id,
                panel.visible_count(),
                panel.items().len()
            );
        }
    }

    pub fn view(&self) -> &PageView {
        &self.view
    }

    /// Set when the configuration document itself could not be used.
    pub fn load_error(&self) -> Option<&DirectoryError> {
        self.load_error.as_ref()
    }
}

fn report(id: Uuid, e: &DirectoryError) {
    let span = tracing::error_span!("page_session", %id);
    span.in_scope(|| match e {
        DirectoryError::ConfigLoad(reason) => tracing::error!("{e}: {reason}"),
        DirectoryError::ConfigParse(_) => tracing::error!("{e}"),
        DirectoryError::NoProjects => tracing::warn!("{e}"),
    });
}
