//! Converts decoded documents into typed results.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;

use crate::decode::RawDocument;
use crate::error::ShapeError;
use crate::mode::Mode;
use crate::types::{Article, TimelineResponse, TimelineResult, TimelineRow};

/// Response timestamp format, e.g. `20250130T101500Z`.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Parses a compact upstream timestamp.
///
/// # Errors
///
/// Returns [`ShapeError::Timestamp`] naming the raw string.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, ShapeError> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|source| ShapeError::Timestamp {
            raw: raw.to_string(),
            source,
        })
}

/// Extracts the article list. A document whose `articles` key is absent or
/// `null` is an empty result, not an error. `null` entries become
/// [`Article::default`].
///
/// # Errors
///
/// Returns [`ShapeError::Deserialize`] if `articles` is not a list of objects.
pub fn shape_articles(mut doc: RawDocument) -> Result<Vec<Article>, ShapeError> {
    let articles = match doc.remove("articles") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(articles) => articles,
    };
    let entries: Vec<Option<Article>> =
        serde_json::from_value(articles).map_err(|source| ShapeError::Deserialize {
            context: "articles",
            source,
        })?;
    Ok(entries.into_iter().map(Option::unwrap_or_default).collect())
}

/// Pivots the column-oriented timeline into one row per timestamp.
///
/// The first series drives the row count and the timestamps. Each other
/// series contributes a value only where it has a point at the same index.
/// In [`Mode::TimelineVolRaw`] the first series' `norm` becomes
/// [`TimelineRow::all_articles`].
///
/// # Errors
///
/// - [`ShapeError::MissingKey`] if there is no `timeline` key. A `null`
///   timeline is treated as zero series.
/// - [`ShapeError::Deserialize`] if the timeline is not a list of series.
/// - [`ShapeError::Timestamp`] if any first-series date is malformed; no
///   partial result is returned.
pub fn shape_timeline(mode: Mode, doc: RawDocument) -> Result<TimelineResult, ShapeError> {
    if !doc.contains_key("timeline") {
        return Err(ShapeError::MissingKey("timeline"));
    }

    let response: TimelineResponse =
        serde_json::from_value(Value::Object(doc)).map_err(|source| ShapeError::Deserialize {
            context: "timeline",
            source,
        })?;

    let Some(first) = response.timeline.first().filter(|s| !s.data.is_empty()) else {
        return Ok(TimelineResult {
            query_details: response.query_details,
            ..TimelineResult::default()
        });
    };

    let series_names: Vec<String> = response
        .timeline
        .iter()
        .map(|s| s.series.clone())
        .collect();

    let mut rows = Vec::with_capacity(first.data.len());
    for (i, point) in first.data.iter().enumerate() {
        let timestamp = parse_timestamp(&point.date)?;

        let series: BTreeMap<String, f64> = response
            .timeline
            .iter()
            .filter_map(|s| s.data.get(i).map(|p| (s.series.clone(), p.value)))
            .collect();

        let all_articles = if mode == Mode::TimelineVolRaw {
            point.norm
        } else {
            None
        };

        rows.push(TimelineRow {
            timestamp,
            series,
            all_articles,
        });
    }

    tracing::debug!(
        mode = %mode,
        rows = rows.len(),
        series = series_names.len(),
        "shaped timeline"
    );

    Ok(TimelineResult {
        query_details: response.query_details,
        rows,
        series_names,
    })
}

#[cfg(test)]
#[path = "shape_test.rs"]
mod tests;
