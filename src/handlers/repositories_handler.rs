use std::sync::Arc;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde_json::json;
use vibe_core::error::DirectoryError;

use crate::app_state::AppState;
use crate::handlers::SearchParams;
use crate::page_session::PageSession;

#[derive(Debug, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct RepositoryHit {
    pub name: String,
    pub url: String,
    pub visible: bool,
}

/// Repository list with the visibility a search term gives each entry, in
/// document order.
pub async fn repositories_handler(
    Query(params): Query<SearchParams>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<RepositoryHit>>, (StatusCode, Json<serde_json::Value>)> {
    let mut session = PageSession::open(&state.source, &state.settings.page).await;

    if let Some(e) = session.load_error() {
        let status = match e {
            DirectoryError::ConfigLoad(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        return Err((status, Json(json!({ "error": e.to_string() }))));
    }

    session.search(params.q.as_deref().unwrap_or_default());

    let hits = session
        .view()
        .repositories()
        .map(|panel| {
            panel
                .items()
                .iter()
                .map(|item| RepositoryHit {
                    name: item.name.clone(),
                    url: item.url.clone(),
                    visible: item.is_visible(),
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(Json(hits))
}
