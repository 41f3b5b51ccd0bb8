use std::fmt;

use thiserror::Error;

/// Filter combinations rejected before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("must provide either start/end dates or a timespan")]
    MissingDateRange,

    #[error("cannot provide both start/end dates and a timespan")]
    ConflictingDateRange,

    #[error("must provide both a start date and an end date")]
    IncompleteDateRange,

    #[error("timespan '{0}' is invalid (expected <integer><unit>, e.g. 24h)")]
    InvalidTimespan(String),

    #[error(
        "timespan unit '{unit}' is not supported (must be one of: min, h, hours, d, days, w, weeks, m, months)"
    )]
    UnsupportedTimespanUnit { unit: String },

    #[error("timespan must be at least 60 minutes when using the 'min' unit, got {minutes}")]
    TimespanTooShort { minutes: u64 },

    #[error("record limit must be 250 or less, got {0}")]
    RecordLimitExceeded(u32),

    #[error("{field} filter '{value}' must contain greater than (>) or less than (<)")]
    ToneMissingOperator { field: &'static str, value: String },

    #[error("{field} filter '{value}' cannot contain a standalone '='")]
    ToneBareEquals { field: &'static str, value: String },

    #[error("mode '{0}' is not supported")]
    UnsupportedMode(String),

    #[error("mode '{0}' does not return a timeline")]
    NotTimelineMode(String),

    #[error("invalid {field} '{value}': expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },
}

/// HTTP status classes reported by the DOC API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    BadRequest,
    NotFound,
    RateLimited,
    ClientError(u16),
    ServerError(u16),
    Unclassified(u16),
}

impl ApiErrorKind {
    /// Maps an HTTP status code to its error kind. Returns `None` for 200.
    #[must_use]
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200 => None,
            400 => Some(Self::BadRequest),
            404 => Some(Self::NotFound),
            429 => Some(Self::RateLimited),
            400..=499 => Some(Self::ClientError(status)),
            500..=599 => Some(Self::ServerError(status)),
            _ => Some(Self::Unclassified(status)),
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest => write!(f, "bad request"),
            Self::NotFound => write!(f, "not found"),
            Self::RateLimited => write!(f, "rate limit exceeded"),
            Self::ClientError(status) => write!(f, "client error (status {status})"),
            Self::ServerError(status) => write!(f, "server error (status {status})"),
            Self::Unclassified(status) => write!(f, "API error (status {status})"),
        }
    }
}

/// A response the API answered with something other than JSON data.
///
/// `body` is the raw response body, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
    pub body: String,
}

impl ApiError {
    /// Classifies a status code and body. Returns `None` for 200.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Option<Self> {
        let kind = ApiErrorKind::from_status(status)?;
        let message = match kind {
            ApiErrorKind::BadRequest
            | ApiErrorKind::NotFound
            | ApiErrorKind::RateLimited => kind.to_string(),
            ApiErrorKind::ClientError(_)
            | ApiErrorKind::ServerError(_)
            | ApiErrorKind::Unclassified(_) => body.trim().to_string(),
        };
        Some(Self {
            kind,
            message,
            body: body.to_string(),
        })
    }

    /// The API reports malformed queries as a 200 with an HTML page.
    #[must_use]
    pub fn invalid_query(html: &str) -> Self {
        let trimmed = html.trim();
        Self {
            kind: ApiErrorKind::BadRequest,
            message: format!("the query was not valid. The API error message was: {trimmed}"),
            body: html.to_string(),
        }
    }
}

/// The body could not be parsed as a JSON object, even after repair.
#[derive(Debug, Error)]
#[error("failed to parse JSON after {passes} repair pass(es): {source}")]
pub struct DecodeError {
    /// Sanitization passes that ran before giving up.
    pub passes: usize,
    #[source]
    pub source: serde_json::Error,
}

/// The decoded document did not have the shape the mode promises.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("response is missing the '{0}' key")]
    MissingKey(&'static str),

    #[error("failed to parse timestamp '{raw}': {source}")]
    Timestamp {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("unexpected shape for {context}: {source}")]
    Deserialize {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors returned by [`crate::GdeltClient`].
#[derive(Debug, Error)]
pub enum GdeltError {
    #[error("invalid query: {0}")]
    Validation(#[from] ValidationError),

    /// Connection failure, timeout, or TLS error. Never produced from an
    /// HTTP status code.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Shape(#[from] ShapeError),
}
