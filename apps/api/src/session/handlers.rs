//! Axum route handlers for the Session API.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::session::{Selection, Session, SharedSession};
use crate::sheet::{normalize, read_xlsx, CanonicalField};
use crate::state::AppState;

const UPLOAD_FIELD: &str = "file";

pub async fn find_session(state: &AppState, id: Uuid) -> Result<SharedSession, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

fn snapshot(session: &Session) -> Result<Value, AppError> {
    serde_json::to_value(session.view()).map_err(|e| AppError::Internal(e.into()))
}

/// POST /api/v1/sessions
///
/// Multipart upload of the KLD sheet. Parses and normalizes it, then opens a
/// session with category and brand pre-detected but not yet confirmed.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
        upload = Some((file_name, bytes));
        break;
    }

    let (file_name, bytes) = upload.ok_or_else(|| {
        AppError::Validation(format!("Multipart field '{UPLOAD_FIELD}' is required"))
    })?;
    if bytes.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }

    // Workbook decoding is CPU-bound; keep it off the async executor.
    let product = tokio::task::spawn_blocking(move || read_xlsx(&bytes).and_then(normalize))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed parsing sheet: {e}")))??;

    let session = Session::open(product, &state.catalog, file_name);
    info!(
        "Session {} opened for '{}' (detected category {}, brand {})",
        session.id,
        session.product.get(CanonicalField::ProductName),
        session.detected_category,
        session.detected_brand.map_or("none", |b| b.name)
    );
    let body = snapshot(&session)?;
    state.sessions.insert(session).await;

    Ok((StatusCode::CREATED, Json(body)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let session = find_session(&state, id).await?;
    let session = session.lock().await;
    Ok(Json(snapshot(&session)?))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.sessions.remove(id).await {
        return Err(AppError::NotFound(format!("Session {id} not found")));
    }
    info!("Session {id} discarded");
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/v1/sessions/:id/selection
///
/// Confirms category, brand, and keyword list. Returns the updated snapshot.
pub async fn handle_update_selection(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(selection): Json<Selection>,
) -> Result<Json<Value>, AppError> {
    let session = find_session(&state, id).await?;
    let mut session = session.lock().await;
    session.apply_selection(&state.catalog, selection);
    info!(
        "Session {id} selection: category={:?}, brand={:?}, {} keyword(s)",
        session.category,
        session.brand.map(|b| b.name),
        session.keywords.as_slice().len()
    );
    Ok(Json(snapshot(&session)?))
}
