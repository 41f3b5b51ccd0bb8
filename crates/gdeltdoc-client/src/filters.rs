//! Search criteria for the DOC API and the rules a valid combination obeys.
//!
//! A [`FilterSet`] is plain data. [`FilterSet::validate`] checks it and
//! [`FilterSet::compile`] renders it; see [`crate::query`] for the grammar.

use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::error::ValidationError;
use crate::query::{self, CompiledQuery};

/// Upper bound the API accepts for `maxrecords`.
pub const MAX_RECORDS: u32 = 250;

const TIMESPAN_UNITS: &[&str] = &["min", "h", "hours", "d", "days", "w", "weeks", "m", "months"];

static TIMESPAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)([a-z]+)$").expect("valid timespan regex"));

/// Structured search criteria.
///
/// Exactly one of the date pair (`start_date` + `end_date`) or `timespan`
/// must be set. For each field family the primary value takes precedence
/// over the `_or` list when both are populated; the list is then ignored
/// rather than rejected. Empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    /// Relative window such as `24h`, `7d` or `90min`.
    pub timespan: Option<String>,
    pub record_limit: u32,

    pub keyword: Option<String>,
    pub keyword_or: Vec<String>,
    pub domain: Option<String>,
    pub domain_or: Vec<String>,
    pub domain_exact: Option<String>,
    pub domain_exact_or: Vec<String>,
    pub country: Option<String>,
    pub country_or: Vec<String>,
    pub language: Option<String>,
    pub language_or: Vec<String>,
    pub theme: Option<String>,
    pub theme_or: Vec<String>,

    /// Pre-rendered proximity fragment, see [`crate::fragments::near`].
    pub near: Option<String>,
    /// Pre-rendered repetition fragment, see [`crate::fragments::repeat`].
    pub repeat: Option<String>,
    /// Operator and value, e.g. `>5` or `<=-10`.
    pub tone: Option<String>,
    /// Operator and value for absolute tone, e.g. `>10`.
    pub tone_abs: Option<String>,
}

impl FilterSet {
    /// Criteria covering the last `timespan`.
    #[must_use]
    pub fn for_timespan(timespan: impl Into<String>, record_limit: u32) -> Self {
        Self {
            timespan: Some(timespan.into()),
            record_limit,
            ..Self::default()
        }
    }

    /// Criteria covering the closed window `start..=end`.
    #[must_use]
    pub fn for_dates(start: DateTime<Utc>, end: DateTime<Utc>, record_limit: u32) -> Self {
        Self {
            start_date: Some(start),
            end_date: Some(end),
            record_limit,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Checks the rules in order: date range, timespan format, record
    /// limit, tone syntax. The first violation wins.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let has_start = self.start_date.is_some();
        let has_end = self.end_date.is_some();
        let timespan = non_empty(self.timespan.as_ref());

        match (has_start || has_end, timespan) {
            (false, None) => return Err(ValidationError::MissingDateRange),
            (true, Some(_)) => return Err(ValidationError::ConflictingDateRange),
            (true, None) if has_start != has_end => {
                return Err(ValidationError::IncompleteDateRange)
            }
            (false, Some(span)) => validate_timespan(span)?,
            (true, None) => {}
        }

        if self.record_limit > MAX_RECORDS {
            return Err(ValidationError::RecordLimitExceeded(self.record_limit));
        }

        if let Some(tone) = non_empty(self.tone.as_ref()) {
            validate_tone("tone", tone)?;
        }
        if let Some(tone_abs) = non_empty(self.tone_abs.as_ref()) {
            validate_tone("toneabs", tone_abs)?;
        }

        Ok(())
    }

    /// Validates and renders the filters.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the combination is invalid; no
    /// partial output is produced.
    pub fn compile(&self) -> Result<CompiledQuery, ValidationError> {
        query::compile(self)
    }
}

/// Treats `Some("")` the same as `None`.
pub(crate) fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

/// Checks a relative timespan such as `24h` or `90min`.
///
/// # Errors
///
/// - [`ValidationError::InvalidTimespan`] if the value is not `<integer><unit>`.
/// - [`ValidationError::UnsupportedTimespanUnit`] for an unknown unit.
/// - [`ValidationError::TimespanTooShort`] for fewer than 60 `min`.
pub fn validate_timespan(timespan: &str) -> Result<(), ValidationError> {
    let caps = TIMESPAN_RE
        .captures(timespan)
        .ok_or_else(|| ValidationError::InvalidTimespan(timespan.to_string()))?;

    let unit = &caps[2];
    if !TIMESPAN_UNITS.contains(&unit) {
        return Err(ValidationError::UnsupportedTimespanUnit {
            unit: unit.to_string(),
        });
    }

    let magnitude: u64 = caps[1]
        .parse()
        .map_err(|_| ValidationError::InvalidTimespan(timespan.to_string()))?;

    // The API rejects sub-hour windows expressed in minutes.
    if unit == "min" && magnitude < 60 {
        return Err(ValidationError::TimespanTooShort { minutes: magnitude });
    }

    Ok(())
}

/// Checks a tone fragment such as `>5` or `<=-10`.
///
/// # Errors
///
/// - [`ValidationError::ToneMissingOperator`] if neither `<` nor `>` appears.
/// - [`ValidationError::ToneBareEquals`] if an `=` is not part of `>=`/`<=`.
pub fn validate_tone(field: &'static str, tone: &str) -> Result<(), ValidationError> {
    if !tone.contains(['<', '>']) {
        return Err(ValidationError::ToneMissingOperator {
            field,
            value: tone.to_string(),
        });
    }

    let bytes = tone.as_bytes();
    let bare_equals = bytes
        .iter()
        .enumerate()
        .any(|(i, &b)| b == b'=' && (i == 0 || !matches!(bytes[i - 1], b'<' | b'>')));
    if bare_equals {
        return Err(ValidationError::ToneBareEquals {
            field,
            value: tone.to_string(),
        });
    }

    Ok(())
}

/// Comparison operators accepted in tone filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneOp {
    Greater,
    Less,
    GreaterEqual,
    LessEqual,
}

impl ToneOp {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ToneOp::Greater => ">",
            ToneOp::Less => "<",
            ToneOp::GreaterEqual => ">=",
            ToneOp::LessEqual => "<=",
        }
    }

    /// Renders the value for [`FilterSet::tone`] or [`FilterSet::tone_abs`].
    ///
    /// ```
    /// use gdeltdoc_client::ToneOp;
    /// assert_eq!(ToneOp::LessEqual.with_value(-10), "<=-10");
    /// ```
    #[must_use]
    pub fn with_value(self, value: impl fmt::Display) -> String {
        format!("{}{value}", self.as_str())
    }
}

impl fmt::Display for ToneOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "filters_test.rs"]
mod tests;
