//! Tracker Routes
//!
//! - GET /api/v1/tracker - Selected date and its draft
//! - POST /api/v1/tracker/select - Select a date
//! - PUT /api/v1/tracker/draft - Edit the draft
//! - POST /api/v1/tracker/save - Upsert the draft
//! - GET /api/v1/tracker/calendar?year=&month= - Month calendar
//! - GET /api/v1/tracker/trends - Trend strip

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{
    CalendarQuery, DraftUpdateRequest, MoodSaveResponse, SelectDateRequest, TrackerResponse,
    TrendsResponse,
};
use crate::api::error::{ApiError, ApiResult};
use crate::api::extract::ValidJson;
use crate::api::state::AppState;
use crate::mood::{parse_date, CalendarMonth, Level, MoodTracker, SleepHours};

fn tracker_view(tracker: &MoodTracker) -> TrackerResponse {
    let draft = tracker.draft().clone();
    TrackerResponse {
        today: tracker.today(),
        selected_date: tracker.selected_date(),
        has_entry: tracker.has_entry(tracker.selected_date()),
        mood_emoji: draft.mood.emoji(),
        draft,
        entry_count: tracker.entries().len(),
    }
}

/// GET /api/v1/tracker
pub async fn get_tracker(State(state): State<Arc<AppState>>) -> Json<TrackerResponse> {
    let tracker = state.tracker.read().await;
    Json(tracker_view(&tracker))
}

/// POST /api/v1/tracker/select
pub async fn select_date(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<SelectDateRequest>,
) -> ApiResult<Json<TrackerResponse>> {
    let date = parse_date(&req.date)?;

    let mut tracker = state.tracker.write().await;
    tracker.select_date(date);
    Ok(Json(tracker_view(&tracker)))
}

/// PUT /api/v1/tracker/draft
///
/// Every field is validated before any is applied.
pub async fn update_draft(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<DraftUpdateRequest>,
) -> ApiResult<Json<TrackerResponse>> {
    let mood = req.mood.map(Level::try_from).transpose()?;
    let energy = req.energy.map(Level::try_from).transpose()?;
    let sleep = req.sleep.map(SleepHours::try_from).transpose()?;

    let mut tracker = state.tracker.write().await;
    if let Some(mood) = mood {
        tracker.set_mood(mood);
    }
    if let Some(energy) = energy {
        tracker.set_energy(energy);
    }
    if let Some(sleep) = sleep {
        tracker.set_sleep(sleep);
    }
    if let Some(notes) = req.notes {
        tracker.set_notes(notes);
    }

    Ok(Json(tracker_view(&tracker)))
}

/// POST /api/v1/tracker/save
pub async fn save_entry(State(state): State<Arc<AppState>>) -> Json<MoodSaveResponse> {
    let mut tracker = state.tracker.write().await;
    let outcome = tracker.save_entry();

    Json(MoodSaveResponse {
        outcome,
        entry: tracker.draft().clone(),
        entry_count: tracker.entries().len(),
    })
}

/// GET /api/v1/tracker/calendar
///
/// Year and month must be given together; neither means the selected month.
pub async fn get_calendar(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CalendarQuery>,
) -> ApiResult<Json<CalendarMonth>> {
    let tracker = state.tracker.read().await;

    let month = match (query.year, query.month) {
        (Some(year), Some(month)) => tracker.calendar_month(year, month)?,
        (None, None) => tracker.selected_month(),
        _ => {
            return Err(ApiError::Validation(
                "year and month must be provided together".to_string(),
            ))
        }
    };

    Ok(Json(month))
}

/// GET /api/v1/tracker/trends
pub async fn get_trends(State(state): State<Arc<AppState>>) -> Json<TrendsResponse> {
    let points = state.tracker.read().await.trends();
    Json(TrendsResponse {
        total: points.len(),
        points,
    })
}
