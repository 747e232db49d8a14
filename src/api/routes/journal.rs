//! Journal Routes
//!
//! - GET /api/v1/journal - Journal view
//! - POST /api/v1/journal/category - Switch prompt category
//! - POST /api/v1/journal/prompt - Draw another prompt
//! - POST /api/v1/journal/entries - Save an entry
//! - POST /api/v1/journal/entries/:id/select - Open an entry
//! - POST /api/v1/journal/pane - Switch between the new and view panes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{
    CategoryRequest, JournalEntryResponse, JournalResponse, JournalSaveResponse,
    JournalWriteRequest, PaneRequest, PromptResponse,
};
use crate::api::error::ApiResult;
use crate::api::extract::ValidJson;
use crate::api::state::AppState;
use crate::journal::{Journal, Pane, PromptCategory, NO_ENTRIES_MESSAGE};

fn journal_view(journal: &Journal) -> JournalResponse {
    let entries: Vec<JournalEntryResponse> =
        journal.entries().iter().map(JournalEntryResponse::from).collect();

    JournalResponse {
        pane: journal.pane(),
        category: journal.category(),
        category_label: journal.category().label(),
        prompt: journal.prompt().to_string(),
        draft: journal.draft().to_string(),
        can_save: journal.can_save(),
        message: entries.is_empty().then_some(NO_ENTRIES_MESSAGE),
        entries,
        selected: journal.selected_entry().map(JournalEntryResponse::from),
    }
}

/// GET /api/v1/journal
pub async fn get_journal(State(state): State<Arc<AppState>>) -> Json<JournalResponse> {
    let journal = state.journal.read().await;
    Json(journal_view(&journal))
}

/// POST /api/v1/journal/category
///
/// Switching category also draws a fresh prompt from its pool.
pub async fn set_category(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CategoryRequest>,
) -> ApiResult<Json<PromptResponse>> {
    let category: PromptCategory = req.category.parse()?;

    let mut journal = state.journal.write().await;
    let prompt = journal.set_category(category).to_string();

    Ok(Json(PromptResponse { category, prompt }))
}

/// POST /api/v1/journal/prompt
pub async fn next_prompt(State(state): State<Arc<AppState>>) -> Json<PromptResponse> {
    let mut journal = state.journal.write().await;
    let prompt = journal.next_prompt().to_string();

    Json(PromptResponse {
        category: journal.category(),
        prompt,
    })
}

/// POST /api/v1/journal/entries
///
/// Returns 201 with the new entry, or 200 with `saved: false` when the
/// content was blank.
pub async fn save_entry(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<JournalWriteRequest>,
) -> (StatusCode, Json<JournalSaveResponse>) {
    let mut journal = state.journal.write().await;

    let entry = journal.save_entry(&req.content).map(JournalEntryResponse::from);
    let status = if entry.is_some() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    (
        status,
        Json(JournalSaveResponse {
            saved: entry.is_some(),
            entry,
            total: journal.entries().len(),
        }),
    )
}

/// POST /api/v1/journal/entries/:id/select
pub async fn select_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<JournalEntryResponse>> {
    let mut journal = state.journal.write().await;
    let entry = journal.select_entry(id)?;
    Ok(Json(JournalEntryResponse::from(entry)))
}

/// POST /api/v1/journal/pane
pub async fn set_pane(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<PaneRequest>,
) -> ApiResult<Json<JournalResponse>> {
    let pane: Pane = req.pane.parse()?;

    let mut journal = state.journal.write().await;
    journal.set_pane(pane)?;
    Ok(Json(journal_view(&journal)))
}
