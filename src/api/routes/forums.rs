//! Forum Routes
//!
//! - GET /api/v1/forums/topics?search=&category= - Filter topics
//! - GET /api/v1/forums/categories - Category tabs
//! - GET /api/v1/forums/post - The open post with its comments
//! - POST /api/v1/forums/post/comments - Add an anonymous comment
//! - POST /api/v1/forums/post/comments/:id/like - Toggle a comment like

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{
    CommentRequest, CommentSubmitResponse, ThreadResponse, TopicListResponse, TopicQuery,
};
use crate::api::error::ApiResult;
use crate::api::extract::ValidJson;
use crate::api::state::AppState;
use crate::forum::{category_tabs, filter_topics, CategoryFilter, CategoryTab, Comment};

/// GET /api/v1/forums/topics
pub async fn list_topics(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TopicQuery>,
) -> ApiResult<Json<TopicListResponse>> {
    let category: CategoryFilter = query.category.as_deref().unwrap_or("all").parse()?;
    let search = query.search.as_deref().unwrap_or("");

    let result = filter_topics(&state.topics, search, category);

    Ok(Json(TopicListResponse {
        total: result.len(),
        category: category.as_str().to_string(),
        message: result.empty_message(),
        topics: result.matches.into_iter().cloned().collect(),
    }))
}

/// GET /api/v1/forums/categories
pub async fn list_categories() -> Json<Vec<CategoryTab>> {
    Json(category_tabs())
}

/// GET /api/v1/forums/post
pub async fn get_thread(State(state): State<Arc<AppState>>) -> Json<ThreadResponse> {
    let thread = state.thread.read().await;

    Json(ThreadResponse {
        post: thread.post().clone(),
        comment_count: thread.comment_count(),
        comments: thread.comments().to_vec(),
    })
}

/// POST /api/v1/forums/post/comments
///
/// Blank content is ignored and reported with `submitted: false`.
pub async fn submit_comment(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CommentRequest>,
) -> (StatusCode, Json<CommentSubmitResponse>) {
    let mut thread = state.thread.write().await;

    let comment = thread.submit_comment(&req.content).cloned();
    let status = if comment.is_some() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    (
        status,
        Json(CommentSubmitResponse {
            submitted: comment.is_some(),
            comment,
            comment_count: thread.comment_count(),
        }),
    )
}

/// POST /api/v1/forums/post/comments/:id/like
pub async fn toggle_comment_like(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Comment>> {
    let mut thread = state.thread.write().await;
    let comment = thread.toggle_comment_like(id)?;
    Ok(Json(comment.clone()))
}
