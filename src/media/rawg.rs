//! RAWG games catalogue client.
//!
//! Thin HTTP wrapper over `https://api.rawg.io/api/games`. Result mapping
//! and date windows are pure functions for testability.

use std::time::Duration;

use serde::Deserialize;
use time::Date;

use super::{MediaError, MediaType, PAGE_SIZE, Screenshot, SearchResponse, SearchResult, Tagged, total_pages};

const API_URL: &str = "https://api.rawg.io/api";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Days back from today counted as a new release.
pub const NEW_RELEASE_DAYS: i64 = 30;
/// Days ahead of today counted as upcoming.
pub const UPCOMING_DAYS: i64 = 180;

// =============================================================================
// CLIENT
// =============================================================================

pub struct RawgClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RawgClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(api_key: String) -> Result<Self, MediaError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| MediaError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: API_URL.to_owned(), api_key })
    }

    /// Free-text game search.
    pub async fn search(&self, query: &str, page: u32) -> Result<SearchResponse, MediaError> {
        let body = self.get("/games", &[("search", query.to_owned())], Some(page)).await?;
        parse_search(&body, page)
    }

    /// Full RAWG record for one game, passed through as JSON.
    pub async fn game(&self, id: &str) -> Result<serde_json::Value, MediaError> {
        let body = self.get(&format!("/games/{id}"), &[], None).await?;
        parse_json(&body)
    }

    pub async fn popular(&self, page: u32) -> Result<serde_json::Value, MediaError> {
        let body = self.get("/games", &[("ordering", "-rating".to_owned())], Some(page)).await?;
        parse_json(&body)
    }

    /// Games released in the [`NEW_RELEASE_DAYS`] up to `today`.
    pub async fn new_releases(&self, page: u32, today: Date) -> Result<serde_json::Value, MediaError> {
        let dates = new_release_window(today);
        let params = [("dates", dates), ("ordering", "-added".to_owned())];
        parse_json(&self.get("/games", &params, Some(page)).await?)
    }

    /// Games releasing in the [`UPCOMING_DAYS`] from `today`.
    pub async fn upcoming(&self, page: u32, today: Date) -> Result<serde_json::Value, MediaError> {
        let dates = upcoming_window(today);
        let params = [("dates", dates), ("ordering", "-added".to_owned())];
        parse_json(&self.get("/games", &params, Some(page)).await?)
    }

    async fn get(&self, path: &str, params: &[(&str, String)], page: Option<u32>) -> Result<String, MediaError> {
        let mut request = self
            .http
            .get(format!("{}{path}", self.base_url))
            .query(&[("key", self.api_key.as_str())])
            .query(params);
        if let Some(page) = page {
            request = request.query(&[("page", page), ("page_size", PAGE_SIZE)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| MediaError::Transport(e.without_url().to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| MediaError::Transport(e.without_url().to_string()))?;

        if !(200..300).contains(&status) {
            return Err(MediaError::Upstream { status });
        }
        Ok(text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Deserialize)]
struct RawgSearchResponse {
    count: u32,
    #[serde(default)]
    results: Vec<RawgGame>,
}

#[derive(Deserialize)]
struct RawgGame {
    id: u32,
    name: String,
    background_image: Option<String>,
    released: Option<String>,
    rating: Option<f32>,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    metacritic: Option<u32>,
    rating_top: Option<i32>,
    playtime: Option<i32>,
    #[serde(default)]
    genres: Vec<Tagged>,
    #[serde(default)]
    platforms: Vec<RawgPlatformEntry>,
    esrb_rating: Option<Tagged>,
    #[serde(default)]
    tags: Vec<Tagged>,
    #[serde(default)]
    short_screenshots: Vec<Screenshot>,
}

#[derive(Deserialize)]
struct RawgPlatformEntry {
    platform: Tagged,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_json(body: &str) -> Result<serde_json::Value, MediaError> {
    serde_json::from_str(body).map_err(|e| MediaError::Parse(e.to_string()))
}

fn parse_search(body: &str, page: u32) -> Result<SearchResponse, MediaError> {
    let raw: RawgSearchResponse = serde_json::from_str(body).map_err(|e| MediaError::Parse(e.to_string()))?;
    Ok(SearchResponse {
        results: raw.results.into_iter().map(map_game).collect(),
        total_results: raw.count,
        total_pages: total_pages(raw.count),
        current_page: page,
    })
}

fn map_game(game: RawgGame) -> SearchResult {
    SearchResult {
        id: game.id.to_string(),
        title: game.name,
        media_type: MediaType::Game,
        poster_path: game.background_image,
        release_date: game.released,
        rating: game.rating,
        description: None,
        slug: game.slug,
        rating_top: game.rating_top,
        metacritic: game.metacritic,
        playtime: game.playtime,
        genres: Some(game.genres),
        platforms: Some(game.platforms.into_iter().map(|p| p.platform).collect()),
        esrb_rating: game.esrb_rating,
        tags: Some(game.tags),
        screenshots: Some(game.short_screenshots),
    }
}

// =============================================================================
// DATE WINDOWS
// =============================================================================

/// RAWG `dates` filter value: `from,to` as ISO dates.
fn date_range(from: Date, to: Date) -> String {
    format!("{},{}", iso_date(from), iso_date(to))
}

fn iso_date(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

pub fn new_release_window(today: Date) -> String {
    date_range(today.saturating_sub(time::Duration::days(NEW_RELEASE_DAYS)), today)
}

pub fn upcoming_window(today: Date) -> String {
    date_range(today, today.saturating_add(time::Duration::days(UPCOMING_DAYS)))
}

/// RAWG accepts numeric ids and slugs; anything else would change the path.
#[must_use]
pub fn is_valid_game_id(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

#[cfg(test)]
#[path = "rawg_test.rs"]
mod tests;
