//! Axum route handlers for the Generation API.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::brand::Brand;
use crate::errors::AppError;
use crate::generation::builder::PreconditionError;
use crate::generation::keywords::{suggest_keywords, KeywordSuggestion};
use crate::generation::sections::ContentSection;
use crate::generation::store::ListingDocument;
use crate::sheet::CanonicalField;
use crate::session::handlers::find_session;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct BrandListResponse {
    pub brands: &'static [Brand],
}

#[derive(Debug, Serialize)]
pub struct KeywordSuggestResponse {
    pub suggestions: Vec<KeywordSuggestion>,
}

#[derive(Debug, Deserialize)]
pub struct EditSectionRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SectionResponse {
    pub section: ContentSection,
    pub heading: &'static str,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub cleared: usize,
}

fn parse_section(raw: &str) -> Result<ContentSection, AppError> {
    raw.parse::<ContentSection>().map_err(AppError::NotFound)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/brands
pub async fn handle_list_brands(State(state): State<AppState>) -> Json<BrandListResponse> {
    Json(BrandListResponse {
        brands: state.catalog.brands(),
    })
}

/// POST /api/v1/sessions/:id/keywords/suggest
///
/// Advisory keyword suggestions. Does not change the session's keyword list.
/// Needs a confirmed category, like section generation.
pub async fn handle_suggest_keywords(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<KeywordSuggestResponse>, AppError> {
    let session = find_session(&state, id).await?;
    let session = session.lock().await;
    let category = session
        .category
        .ok_or(PreconditionError::CategoryNotSelected)?;

    let suggestions = suggest_keywords(state.llm.as_ref(), &session.product, category)
        .await
        .map_err(|e| {
            warn!("Session {id}: keyword suggestion failed: {e}");
            AppError::Llm(format!("Error generating keywords: {e}"))
        })?;

    Ok(Json(KeywordSuggestResponse { suggestions }))
}

/// POST /api/v1/sessions/:id/sections/:section
///
/// Builds the section's request, calls the LLM, and stores the result.
pub async fn handle_generate_section(
    State(state): State<AppState>,
    Path((id, section)): Path<(Uuid, String)>,
) -> Result<Json<SectionResponse>, AppError> {
    let section = parse_section(&section)?;
    let session = find_session(&state, id).await?;
    let mut session = session.lock().await;

    let text = session
        .generate_section(state.llm.as_ref(), section)
        .await?
        .to_string();

    Ok(Json(SectionResponse {
        section,
        heading: section.heading(),
        text,
    }))
}

/// PUT /api/v1/sessions/:id/sections/:section
///
/// Manual edit. Blank text removes the section.
pub async fn handle_edit_section(
    State(state): State<AppState>,
    Path((id, section)): Path<(Uuid, String)>,
    Json(request): Json<EditSectionRequest>,
) -> Result<Json<SectionResponse>, AppError> {
    let section = parse_section(&section)?;
    let session = find_session(&state, id).await?;
    let mut session = session.lock().await;

    session.content.edit(section, &request.text);

    Ok(Json(SectionResponse {
        section,
        heading: section.heading(),
        text: session.content.get(section).unwrap_or_default().to_string(),
    }))
}

/// DELETE /api/v1/sessions/:id/sections
pub async fn handle_clear_sections(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClearResponse>, AppError> {
    let session = find_session(&state, id).await?;
    let mut session = session.lock().await;
    let cleared = session.content.len();
    if !session.content.is_empty() {
        session.content.clear();
        info!("Session {id}: cleared {cleared} sections");
    }
    Ok(Json(ClearResponse { cleared }))
}

/// GET /api/v1/sessions/:id/export/json
///
/// Flat pretty-printed `{section_key: text}` with every section key.
pub async fn handle_export_json(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let session = find_session(&state, id).await?;
    let session = session.lock().await;
    let body = session
        .content
        .export_json()
        .map_err(|e| AppError::Internal(e.into()))?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"listing_content.json\"",
            ),
        ],
        body,
    ))
}

/// GET /api/v1/sessions/:id/export/document
///
/// Markdown document: title heading, then heading + paragraph per non-empty
/// section in fixed order.
pub async fn handle_export_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let session = find_session(&state, id).await?;
    let session = session.lock().await;
    let document: ListingDocument = session
        .content
        .export_document(session.product.get(CanonicalField::ProductName));

    Ok((
        [
            (header::CONTENT_TYPE, "text/markdown; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"product_listing.md\"",
            ),
        ],
        document.to_markdown(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_section_is_not_found() {
        assert!(matches!(parse_section("web_full"), Err(AppError::NotFound(_))));
        assert_eq!(parse_section("a_plus_prompts").unwrap(), ContentSection::APlusPrompts);
    }
}
