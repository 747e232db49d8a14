//! Site Routes
//!
//! - GET /api/v1/site/navigation?path= - Navigation bar with the active page
//! - GET /api/v1/site/home - Home page copy
//! - GET /api/v1/site/pages/:route - Intro copy for a page

use axum::{
    extract::{Path, Query},
    Json,
};

use chrono::{Datelike, Local};

use crate::api::dto::{HomeResponse, NavigationQuery};
use crate::api::error::{ApiError, ApiResult};
use crate::site::{footer, home_page, navigation, NavItem, PageIntro, Route, SiteError};

/// GET /api/v1/site/navigation
pub async fn get_navigation(Query(query): Query<NavigationQuery>) -> Json<Vec<NavItem>> {
    let path = query.path.as_deref().unwrap_or("/");
    Json(navigation(path))
}

/// GET /api/v1/site/home
pub async fn get_home() -> Json<HomeResponse> {
    Json(HomeResponse {
        page: home_page(),
        footer: footer(Local::now().year()),
    })
}

/// GET /api/v1/site/pages/:route
///
/// Accepts a bare page name such as "journal" or "home".
pub async fn get_page(Path(route): Path<String>) -> ApiResult<Json<PageIntro>> {
    let route: Route = route
        .parse()
        .map_err(|e: SiteError| ApiError::NotFound(e.to_string()))?;
    Ok(Json(route.intro()))
}
