//! The two call shapes exposed to service boundaries.
//!
//! Requests carry plain strings the way an RPC layer receives them; this
//! module normalizes them into a [`FilterSet`] with the defaults each call
//! applies, and maps errors onto coarse [`ErrorCode`]s.

use chrono::{DateTime, NaiveDate, Utc};

use crate::client::GdeltClient;
use crate::error::{ApiErrorKind, GdeltError, ValidationError};
use crate::filters::{FilterSet, MAX_RECORDS};
use crate::mode::Mode;
use crate::types::{Article, TimelineResult};

/// Records requested by [`GdeltClient::search_articles`] when the caller
/// does not say.
pub const DEFAULT_ARTICLE_RECORDS: u32 = 50;

/// Timeline calls always request the maximum.
pub const TIMELINE_RECORDS: u32 = MAX_RECORDS;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleSearchRequest {
    pub query: String,
    pub timespan: Option<String>,
    /// `YYYY-MM-DD`
    pub start_date: Option<String>,
    /// `YYYY-MM-DD`
    pub end_date: Option<String>,
    /// `None` or `0` means [`DEFAULT_ARTICLE_RECORDS`].
    pub max_records: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimelineRequest {
    pub query: String,
    /// Defaults to `timelinevol`.
    pub mode: Option<String>,
    pub timespan: Option<String>,
    /// `YYYY-MM-DD`
    pub start_date: Option<String>,
    /// `YYYY-MM-DD`
    pub end_date: Option<String>,
}

/// Coarse error classes for boundary layers to translate into their own
/// status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidArgument,
    NotFound,
    ResourceExhausted,
    Unavailable,
    Internal,
}

impl GdeltError {
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            GdeltError::Validation(_) => ErrorCode::InvalidArgument,
            GdeltError::Api(err) => match err.kind {
                ApiErrorKind::BadRequest => ErrorCode::InvalidArgument,
                ApiErrorKind::NotFound => ErrorCode::NotFound,
                ApiErrorKind::RateLimited => ErrorCode::ResourceExhausted,
                ApiErrorKind::ClientError(_)
                | ApiErrorKind::ServerError(_)
                | ApiErrorKind::Unclassified(_) => ErrorCode::Internal,
            },
            GdeltError::Http(_) => ErrorCode::Unavailable,
            GdeltError::Decode(_) | GdeltError::Shape(_) => ErrorCode::Internal,
        }
    }
}

/// Builds the filters for an article search.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDate`] for a malformed date. Other
/// rules are checked when the filters are compiled.
pub fn article_filters(request: &ArticleSearchRequest) -> Result<FilterSet, ValidationError> {
    let record_limit = request
        .max_records
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_ARTICLE_RECORDS);
    base_filters(
        &request.query,
        request.timespan.as_deref(),
        request.start_date.as_deref(),
        request.end_date.as_deref(),
        record_limit,
    )
}

/// Resolves the mode and builds the filters for a timeline call.
///
/// # Errors
///
/// - [`ValidationError::UnsupportedMode`] for an unknown mode.
/// - [`ValidationError::NotTimelineMode`] for `artlist`.
/// - [`ValidationError::InvalidDate`] for a malformed date.
pub fn timeline_filters(request: &TimelineRequest) -> Result<(Mode, FilterSet), ValidationError> {
    let mode = match request.mode.as_deref().filter(|m| !m.is_empty()) {
        Some(raw) => raw.parse::<Mode>()?,
        None => Mode::TimelineVol,
    };
    if !mode.is_timeline() {
        return Err(ValidationError::NotTimelineMode(mode.to_string()));
    }
    let filters = base_filters(
        &request.query,
        request.timespan.as_deref(),
        request.start_date.as_deref(),
        request.end_date.as_deref(),
        TIMELINE_RECORDS,
    )?;
    Ok((mode, filters))
}

fn base_filters(
    query: &str,
    timespan: Option<&str>,
    start_date: Option<&str>,
    end_date: Option<&str>,
    record_limit: u32,
) -> Result<FilterSet, ValidationError> {
    Ok(FilterSet {
        keyword: Some(query.to_string()).filter(|q| !q.is_empty()),
        timespan: timespan.filter(|t| !t.is_empty()).map(str::to_string),
        start_date: parse_request_date("start_date", start_date)?,
        end_date: parse_request_date("end_date", end_date)?,
        record_limit,
        ..FilterSet::default()
    })
}

/// Parses a `YYYY-MM-DD` date as midnight UTC. Empty means unset.
fn parse_request_date(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<DateTime<Utc>>, ValidationError> {
    let Some(raw) = value.filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Some(naive.and_utc()))
        .ok_or_else(|| ValidationError::InvalidDate {
            field,
            value: raw.to_string(),
        })
}

impl GdeltClient {
    /// Article search with boundary defaults (50 records unless given).
    ///
    /// # Errors
    ///
    /// Returns [`GdeltError::Validation`] for bad input, or any error from
    /// [`GdeltClient::article_search`].
    pub async fn search_articles(
        &self,
        request: &ArticleSearchRequest,
    ) -> Result<Vec<Article>, GdeltError> {
        let filters = article_filters(request)?;
        self.article_search(&filters).await
    }

    /// Timeline with boundary defaults (`timelinevol`, 250 records).
    ///
    /// # Errors
    ///
    /// Returns [`GdeltError::Validation`] for bad input, or any error from
    /// [`GdeltClient::timeline_search`].
    pub async fn get_timeline(
        &self,
        request: &TimelineRequest,
    ) -> Result<TimelineResult, GdeltError> {
        let (mode, filters) = timeline_filters(request)?;
        self.timeline_search(mode, &filters).await
    }
}
