//! HTTP client for the GDELT DOC 2.0 API.
//!
//! Each call compiles the filters, sends exactly one GET request, classifies
//! the status code, decodes the body through the repair loop and shapes the
//! result. There is no retry, caching or pagination.

use std::time::Duration;

use gdeltdoc_core::AppConfig;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Client;

use crate::decode::{decode, RawDocument};
use crate::error::{ApiError, GdeltError, ValidationError};
use crate::filters::FilterSet;
use crate::mode::Mode;
use crate::query::CompiledQuery;
use crate::shape::{shape_articles, shape_timeline};
use crate::types::{Article, TimelineResult};

/// Client for the DOC API.
///
/// Holds no per-request state, so a shared reference can serve concurrent
/// calls. The JSON repair depth is changed through `&mut self` and must be
/// configured before the client is shared.
#[derive(Debug, Clone)]
pub struct GdeltClient {
    client: Client,
    base_url: String,
    json_parse_depth: usize,
}

impl GdeltClient {
    /// Creates a client with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GdeltError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new() -> Result<Self, GdeltError> {
        Self::from_config(&AppConfig::default())
    }

    /// Creates a client from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GdeltError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, GdeltError> {
        let mut client =
            Self::with_base_url(&config.base_url, config.timeout_secs, &config.user_agent)?;
        client.json_parse_depth = config.json_parse_depth;
        Ok(client)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GdeltError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, GdeltError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches(['?', '/']).to_string(),
            json_parse_depth: gdeltdoc_core::DEFAULT_JSON_PARSE_DEPTH,
        })
    }

    #[must_use]
    pub fn json_parse_depth(&self) -> usize {
        self.json_parse_depth
    }

    /// Sets how many sanitization passes the JSON repair loop may run.
    pub fn set_json_parse_depth(&mut self, depth: usize) {
        self.json_parse_depth = depth;
    }

    /// Runs an `artlist` search.
    ///
    /// # Errors
    ///
    /// - [`GdeltError::Validation`] if the filters are invalid (no request is sent).
    /// - [`GdeltError::Http`] on connection failure or timeout.
    /// - [`GdeltError::Api`] for a non-200 status or an HTML error page.
    /// - [`GdeltError::Decode`] if the body is not JSON even after repair.
    /// - [`GdeltError::Shape`] if `articles` has an unexpected shape.
    pub async fn article_search(&self, filters: &FilterSet) -> Result<Vec<Article>, GdeltError> {
        let doc = self.query(Mode::ArtList, filters).await?;
        let articles = shape_articles(doc)?;
        tracing::debug!(count = articles.len(), "article search complete");
        Ok(articles)
    }

    /// Runs a timeline search in one of the `timeline*` modes.
    ///
    /// # Errors
    ///
    /// - [`GdeltError::Validation`] if `mode` is [`Mode::ArtList`] or the
    ///   filters are invalid (no request is sent).
    /// - [`GdeltError::Http`] on connection failure or timeout.
    /// - [`GdeltError::Api`] for a non-200 status or an HTML error page.
    /// - [`GdeltError::Decode`] if the body is not JSON even after repair.
    /// - [`GdeltError::Shape`] if the timeline is missing, mis-shaped, or
    ///   contains an unparseable timestamp.
    pub async fn timeline_search(
        &self,
        mode: Mode,
        filters: &FilterSet,
    ) -> Result<TimelineResult, GdeltError> {
        if !mode.is_timeline() {
            return Err(ValidationError::NotTimelineMode(mode.to_string()).into());
        }
        let doc = self.query(mode, filters).await?;
        Ok(shape_timeline(mode, doc)?)
    }

    async fn query(&self, mode: Mode, filters: &FilterSet) -> Result<RawDocument, GdeltError> {
        let compiled = filters.compile()?;
        let url = self.request_url(mode, &compiled);
        tracing::debug!(%mode, %url, "sending DOC API request");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status().as_u16();
        let is_html = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("text/html"));
        let body = response.bytes().await?;
        tracing::debug!(status, bytes = body.len(), "DOC API responded");

        check_response(status, is_html, &body)?;
        Ok(decode(&body, self.json_parse_depth)?)
    }

    /// Builds `<base>?query=<escaped>&<params>&mode=<mode>&format=json`.
    fn request_url(&self, mode: Mode, compiled: &CompiledQuery) -> String {
        let expression = utf8_percent_encode(compiled.expression(), NON_ALPHANUMERIC);
        format!(
            "{}?query={expression}&{}&mode={mode}&format=json",
            self.base_url,
            compiled.params()
        )
    }
}

/// Classifies the status code, then rejects HTML bodies served with 200.
fn check_response(status: u16, is_html: bool, body: &[u8]) -> Result<(), ApiError> {
    let text = || String::from_utf8_lossy(body);
    if let Some(err) = ApiError::from_status(status, &text()) {
        tracing::warn!(status, kind = %err.kind, "DOC API returned an error status");
        return Err(err);
    }
    if is_html {
        return Err(ApiError::invalid_query(&text()));
    }
    Ok(())
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
