//! Resource Routes
//!
//! - GET /api/v1/resources?search=&types=&categories= - Filter the catalog
//! - GET /api/v1/resources/facets - Types and categories to filter by
//! - POST /api/v1/resources/:id/like - Toggle a like

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{
    FacetValue, FacetsResponse, ResourceListResponse, ResourceQuery, ResourceResponse,
};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::resources::{category_label, ResourceFilter, ResourceType};

/// GET /api/v1/resources
///
/// `types` and `categories` are comma-separated. A resource must match the
/// search text, one of the types (if any) and one of the categories (if any).
pub async fn list_resources(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ResourceQuery>,
) -> ApiResult<Json<ResourceListResponse>> {
    let filter = ResourceFilter::from_lists(
        query.search.as_deref().unwrap_or(""),
        query.types.as_deref().unwrap_or(""),
        query.categories.as_deref().unwrap_or(""),
    )?;

    let directory = state.resources.read().await;
    let result = directory.filter(&filter);

    Ok(Json(ResourceListResponse {
        total: result.len(),
        message: result.empty_message(),
        resources: result.matches.into_iter().map(ResourceResponse::from).collect(),
    }))
}

/// GET /api/v1/resources/facets
pub async fn get_facets(State(state): State<Arc<AppState>>) -> Json<FacetsResponse> {
    let directory = state.resources.read().await;

    let types = ResourceType::all()
        .iter()
        .map(|t| FacetValue {
            value: t.as_str().to_string(),
            label: t.as_str().to_string(),
        })
        .collect();

    let categories = directory
        .all_categories()
        .into_iter()
        .map(|c| FacetValue {
            value: c.to_string(),
            label: category_label(c),
        })
        .collect();

    Json(FacetsResponse { types, categories })
}

/// POST /api/v1/resources/:id/like
pub async fn toggle_like(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> ApiResult<Json<ResourceResponse>> {
    let mut directory = state.resources.write().await;
    let resource = directory.toggle_like(id)?;
    Ok(Json(ResourceResponse::from(resource)))
}
