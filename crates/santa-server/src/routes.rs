use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use uuid::Uuid;

use crate::error::{PageError, WRONG_LINK_MESSAGE};
use crate::state::AppState;
use crate::templates;
use santa_core::{lookup, SantaError};

/// GET / (and every unmatched path) — the visitor mangled their link.
pub async fn wrong_link() -> (StatusCode, Html<String>) {
    (
        StatusCode::BAD_REQUEST,
        Html(templates::render_error(WRONG_LINK_MESSAGE)),
    )
}

/// GET /qui-hem-toca-a-mi/{id} — reveal this participant's assignment.
pub async fn reveal(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    tracing::debug!(%id, "personal link requested");

    // A malformed id gets the same page as an unknown one.
    let Ok(id) = id.parse::<Uuid>() else {
        return Err(PageError(SantaError::LinkNotFound(id).into()));
    };

    let root = app.root.clone();
    let config = app.config.clone();
    let revelation =
        tokio::task::spawn_blocking(move || lookup::resolve_link(&root, &config, &id))
            .await
            .map_err(|e| PageError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Html(templates::render_reveal(
        &revelation.self_name,
        &revelation.target_name,
    )))
}
