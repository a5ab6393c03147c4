//! Remote artwork lookup against the iTunes search API.
//!
//! Query by the free text `"<artist> <title>"`, take the first result's
//! `artworkUrl100`, ask for a larger rendition by rewriting the size token in
//! the URL, then download the image.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use serde::Deserialize;
use tracing::debug;

use crate::config::CoverSettings;
use crate::error::CoverError;

/// Source of cover images for (artist, title) pairs.
#[async_trait]
pub trait ArtworkLookup: Send + Sync {
    /// `Ok(None)` when the catalog has nothing usable.
    async fn fetch(&self, artist: &str, title: &str) -> Result<Option<Bytes>, CoverError>;
}

#[derive(Debug, Deserialize)]
pub(super) struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
pub(super) struct SearchResult {
    #[serde(rename = "artworkUrl100")]
    pub artwork_url_100: Option<String>,
}

impl SearchResponse {
    pub(super) fn first_artwork_url(&self) -> Option<&str> {
        self.results
            .first()
            .and_then(|r| r.artwork_url_100.as_deref())
            .filter(|u| !u.is_empty())
    }
}

/// Swap the image-size token so the catalog serves a higher resolution.
pub fn upscale_artwork_url(url: &str, from: &str, to: &str) -> String {
    url.replace(from, to)
}

pub struct ItunesLookup {
    client: reqwest::Client,
    search_url: String,
    size_token: String,
    upscaled_token: String,
}

impl ItunesLookup {
    pub fn new(settings: &CoverSettings) -> Result<Self, CoverError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(settings.request_timeout_ms))
            .build()?;

        Ok(Self {
            client,
            search_url: settings.lookup_url.clone(),
            size_token: settings.artwork_size_token.clone(),
            upscaled_token: settings.artwork_upscaled_token.clone(),
        })
    }

    pub(super) fn query_url(&self, artist: &str, title: &str) -> String {
        let term = format!("{artist} {title}");
        format!(
            "{}?term={}&limit=1&media=music",
            self.search_url,
            urlencoding::encode(&term)
        )
    }

    async fn artwork_url(&self, artist: &str, title: &str) -> Result<Option<String>, CoverError> {
        let response = self.client.get(self.query_url(artist, title)).send().await?;
        if !response.status().is_success() {
            debug!("artwork search for '{artist} - {title}' returned {}", response.status());
            return Ok(None);
        }

        let body: SearchResponse = response.json().await?;
        Ok(body
            .first_artwork_url()
            .map(|u| upscale_artwork_url(u, &self.size_token, &self.upscaled_token)))
    }
}

#[async_trait]
impl ArtworkLookup for ItunesLookup {
    async fn fetch(&self, artist: &str, title: &str) -> Result<Option<Bytes>, CoverError> {
        if artist.trim().is_empty() || title.trim().is_empty() {
            return Ok(None);
        }

        let Some(url) = self.artwork_url(artist, title).await? else {
            debug!("no artwork found for '{artist} - {title}'");
            return Ok(None);
        };

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            debug!("artwork download {url} returned {}", response.status());
            return Ok(None);
        }

        let bytes = response.bytes().await?;
        Ok(Some(bytes).filter(|b| !b.is_empty()))
    }
}
