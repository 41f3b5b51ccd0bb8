//! DOC API response types.
//!
//! Upstream documents are loosely specified: any article field may be
//! missing or `null`, so every [`Article`] field defaults to an empty
//! string. Timeline fields follow the same rule with their zero values. Timeline types come in two flavours: the column-oriented
//! upstream shape ([`TimelineResponse`]) and the row-oriented shaped
//! output ([`TimelineResult`]).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ShapeError;
use crate::shape::parse_timestamp;

/// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// artlist
// ---------------------------------------------------------------------------

/// One entry of an `artlist` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url_mobile: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Upstream-formatted timestamp, e.g. `20250130T101500Z`.
    #[serde(rename = "seendate", default, deserialize_with = "null_as_default")]
    pub seen_date: String,
    #[serde(rename = "socialimage", default, deserialize_with = "null_as_default")]
    pub social_image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub domain: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(rename = "sourcecountry", default, deserialize_with = "null_as_default")]
    pub source_country: String,
}

impl Article {
    /// Parses [`Article::seen_date`].
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::Timestamp`] if the value is not in the compact
    /// upstream format.
    pub fn seen_at(&self) -> Result<DateTime<Utc>, ShapeError> {
        parse_timestamp(&self.seen_date)
    }
}

// ---------------------------------------------------------------------------
// timeline* (upstream shape)
// ---------------------------------------------------------------------------

/// Metadata the API attaches to every timeline response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDetails {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date_resolution: String,
}

#[derive(Debug, Deserialize)]
pub struct TimelineResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub query_details: QueryDetails,
    #[serde(deserialize_with = "null_as_default")]
    pub timeline: Vec<TimelineSeries>,
}

#[derive(Debug, Deserialize)]
pub struct TimelineSeries {
    #[serde(default, deserialize_with = "null_as_default")]
    pub series: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<TimelinePoint>,
}

#[derive(Debug, Deserialize)]
pub struct TimelinePoint {
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    /// Missing or `null` values count as zero.
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: f64,
    /// Total monitored articles for the interval. Only `timelinevolraw`
    /// sends it.
    #[serde(default)]
    pub norm: Option<i64>,
}

// ---------------------------------------------------------------------------
// timeline* (shaped output)
// ---------------------------------------------------------------------------

/// All series' values at one timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineRow {
    pub timestamp: DateTime<Utc>,
    /// Series name to value. Series shorter than the first one have no
    /// entry for trailing rows.
    pub series: BTreeMap<String, f64>,
    /// Total monitored articles; only set in `timelinevolraw` mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_articles: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimelineResult {
    pub query_details: QueryDetails,
    pub rows: Vec<TimelineRow>,
    /// Series names in upstream order, for stable column ordering.
    pub series_names: Vec<String>,
}

impl TimelineResult {
    /// `(timestamp, value)` pairs of the first series. Rows where that
    /// series has no value yield `0.0`.
    #[must_use]
    pub fn primary_series(&self) -> Vec<(DateTime<Utc>, f64)> {
        let Some(name) = self.series_names.first() else {
            return Vec::new();
        };
        self.rows
            .iter()
            .map(|row| (row.timestamp, row.series.get(name).copied().unwrap_or(0.0)))
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
