//! Media catalogue lookups.
//!
//! SYSTEM CONTEXT
//! ==============
//! The JSON API under `/api/v1` proxies third-party catalogues and reshapes
//! their results into provider-neutral [`SearchResult`]s. Games come from
//! RAWG; other media types share the same result shape.

pub mod rawg;

use serde::{Deserialize, Serialize};

pub use rawg::RawgClient;

/// Results per page for every catalogue query.
pub const PAGE_SIZE: u32 = 20;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Anime,
    Manga,
    Movie,
    TvShow,
    Game,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub total_results: u32,
    pub total_pages: u32,
    pub current_page: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub media_type: MediaType,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub rating: Option<f32>,
    pub description: Option<String>,
    pub slug: Option<String>,
    pub rating_top: Option<i32>,
    pub metacritic: Option<u32>,
    pub playtime: Option<i32>,
    pub genres: Option<Vec<Tagged>>,
    pub platforms: Option<Vec<Tagged>>,
    pub esrb_rating: Option<Tagged>,
    pub tags: Option<Vec<Tagged>>,
    pub screenshots: Option<Vec<Screenshot>>,
}

/// Id/name/slug triple used for genres, platforms, ratings and tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tagged {
    pub id: i32,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screenshot {
    pub id: i32,
    pub image: String,
}

/// Pages needed to hold `total_results` at [`PAGE_SIZE`] per page.
#[must_use]
pub const fn total_pages(total_results: u32) -> u32 {
    total_results.div_ceil(PAGE_SIZE)
}

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("catalogue request failed: {0}")]
    Transport(String),

    #[error("catalogue returned {status}")]
    Upstream { status: u16 },

    #[error("catalogue response parse failed: {0}")]
    Parse(String),

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
