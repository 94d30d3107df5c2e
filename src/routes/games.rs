//! Games catalogue endpoints under `/api/v1/games`.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use time::OffsetDateTime;

use crate::error::ApiError;
use crate::media::SearchResponse;
use crate::media::rawg::{RawgClient, is_valid_game_id};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GameSearchRequest {
    pub query: String,
    pub page: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
}

fn catalogue(state: &AppState) -> Result<&RawgClient, ApiError> {
    state.media.as_deref().ok_or(ApiError::Unavailable("Game catalogue"))
}

/// Pages are 1-based; absent or zero means the first page.
fn page_or_first(page: Option<u32>) -> u32 {
    page.filter(|p| *p > 0).unwrap_or(1)
}

/// `POST /api/v1/games/search`
pub async fn search(
    State(state): State<AppState>,
    Json(request): Json<GameSearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let client = catalogue(&state)?;
    let query = request.query.trim();
    if query.is_empty() {
        return Err(ApiError::BadRequest("query is required".into()));
    }
    Ok(Json(client.search(query, page_or_first(request.page)).await?))
}

/// `GET /api/v1/games/{id}`
pub async fn game(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<serde_json::Value>, ApiError> {
    let client = catalogue(&state)?;
    if !is_valid_game_id(&id) {
        return Err(ApiError::BadRequest("invalid game id".into()));
    }
    Ok(Json(client.game(&id).await?))
}

/// `GET /api/v1/games/popular`
pub async fn popular(State(state): State<AppState>, Query(q): Query<PageQuery>) -> Result<Json<serde_json::Value>, ApiError> {
    let client = catalogue(&state)?;
    Ok(Json(client.popular(page_or_first(q.page)).await?))
}

/// `GET /api/v1/games/new`
pub async fn new_releases(
    State(state): State<AppState>,
    Query(q): Query<PageQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let client = catalogue(&state)?;
    let today = OffsetDateTime::now_utc().date();
    Ok(Json(client.new_releases(page_or_first(q.page), today).await?))
}

/// `GET /api/v1/games/upcoming`
pub async fn upcoming(
    State(state): State<AppState>,
    Query(q): Query<PageQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let client = catalogue(&state)?;
    let today = OffsetDateTime::now_utc().date();
    Ok(Json(client.upcoming(page_or_first(q.page), today).await?))
}

#[cfg(test)]
#[path = "games_test.rs"]
mod tests;
