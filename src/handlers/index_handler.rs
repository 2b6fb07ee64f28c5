use std::sync::Arc;

use axum::extract::Query;
use axum::response::Html;
use axum::Extension;

use crate::app_state::AppState;
use crate::handlers::SearchParams;
use crate::page_session::PageSession;
use crate::render::render_page;

/// Renders the directory page. Errors are part of the page, so this always
/// answers 200.
pub async fn index_handler(
    Query(params): Query<SearchParams>,
    Extension(state): Extension<Arc<AppState>>,
) -> Html<String> {
    let mut session = PageSession::open(&state.source, &state.settings.page).await;
    tracing::info!("Rendering page for session {}", session.id());

    if let Some(term) = params.q.as_deref() {
        session.search(term);
    }

    Html(render_page(session.view()))
}
