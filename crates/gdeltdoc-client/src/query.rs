//! Renders a [`FilterSet`] into the DOC API query grammar.
//!
//! The search expression is assembled from an ordered table of clauses.
//! Each clause has a predicate deciding whether it applies and a renderer
//! producing its text, so the rendering order lives in one place:
//!
//! keyword, `domain:`, `domainis:`, `sourcecountry:`, `sourcelang:`,
//! `theme:`, `tone`, `toneabs`, near fragment, repeat fragment.
//!
//! Every clause ends with a single space. Date range or timespan and
//! `maxrecords` go into a separate `&`-joined parameter block.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::ValidationError;
use crate::filters::{non_empty, FilterSet};

/// Request date format (`YYYYMMDDHHMMSS`, UTC).
pub const REQUEST_DATE_FORMAT: &str = "%Y%m%d%H%M%S";

/// A validated, rendered query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledQuery {
    expression: String,
    params: String,
}

impl CompiledQuery {
    /// The search expression, unescaped. Goes into the `query=` parameter.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The `&`-joined parameter block, e.g. `timespan=24h&maxrecords=10`.
    #[must_use]
    pub fn params(&self) -> &str {
        &self.params
    }

    /// Expression and parameter block joined by `&`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        format!("{}&{}", self.expression, self.params)
    }
}

impl fmt::Display for CompiledQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}&{}", self.expression, self.params)
    }
}

struct Clause {
    applies: fn(&FilterSet) -> bool,
    render: fn(&FilterSet) -> String,
}

const CLAUSES: &[Clause] = &[
    Clause {
        applies: |f| has_family(f.keyword.as_ref(), &f.keyword_or),
        render: render_keyword,
    },
    Clause {
        applies: |f| has_family(f.domain.as_ref(), &f.domain_or),
        render: |f| render_family("domain", f.domain.as_ref(), &f.domain_or),
    },
    Clause {
        applies: |f| has_family(f.domain_exact.as_ref(), &f.domain_exact_or),
        render: |f| render_family("domainis", f.domain_exact.as_ref(), &f.domain_exact_or),
    },
    Clause {
        applies: |f| has_family(f.country.as_ref(), &f.country_or),
        render: |f| render_family("sourcecountry", f.country.as_ref(), &f.country_or),
    },
    Clause {
        applies: |f| has_family(f.language.as_ref(), &f.language_or),
        render: |f| render_family("sourcelang", f.language.as_ref(), &f.language_or),
    },
    Clause {
        applies: |f| has_family(f.theme.as_ref(), &f.theme_or),
        render: |f| render_family("theme", f.theme.as_ref(), &f.theme_or),
    },
    Clause {
        applies: |f| non_empty(f.tone.as_ref()).is_some(),
        render: |f| format!("tone{} ", f.tone.as_deref().unwrap_or_default()),
    },
    Clause {
        applies: |f| non_empty(f.tone_abs.as_ref()).is_some(),
        render: |f| format!("toneabs{} ", f.tone_abs.as_deref().unwrap_or_default()),
    },
    Clause {
        applies: |f| non_empty(f.near.as_ref()).is_some(),
        render: |f| f.near.clone().unwrap_or_default(),
    },
    Clause {
        applies: |f| non_empty(f.repeat.as_ref()).is_some(),
        render: |f| f.repeat.clone().unwrap_or_default(),
    },
];

/// Validates `filters` and renders them.
///
/// # Errors
///
/// Returns the first [`ValidationError`] from [`FilterSet::validate`].
pub fn compile(filters: &FilterSet) -> Result<CompiledQuery, ValidationError> {
    filters.validate()?;

    let expression: String = CLAUSES
        .iter()
        .filter(|clause| (clause.applies)(filters))
        .map(|clause| (clause.render)(filters))
        .collect();

    let mut params = Vec::with_capacity(3);
    match (filters.start_date, filters.end_date) {
        (Some(start), Some(end)) => {
            params.push(format!("startdatetime={}", format_request_date(start)));
            params.push(format!("enddatetime={}", format_request_date(end)));
        }
        _ => {
            if let Some(span) = non_empty(filters.timespan.as_ref()) {
                params.push(format!("timespan={span}"));
            }
        }
    }
    params.push(format!("maxrecords={}", filters.record_limit));

    Ok(CompiledQuery {
        expression,
        params: params.join("&"),
    })
}

#[must_use]
pub fn format_request_date(date: DateTime<Utc>) -> String {
    date.format(REQUEST_DATE_FORMAT).to_string()
}

fn has_family(primary: Option<&String>, alternatives: &[String]) -> bool {
    non_empty(primary).is_some() || !alternatives.is_empty()
}

fn render_keyword(filters: &FilterSet) -> String {
    if let Some(keyword) = non_empty(filters.keyword.as_ref()) {
        return format!("\"{keyword}\" ");
    }
    or_group(filters.keyword_or.iter().map(|kw| {
        if kw.contains(char::is_whitespace) {
            format!("\"{kw}\"")
        } else {
            kw.clone()
        }
    }))
}

fn render_family(prefix: &str, primary: Option<&String>, alternatives: &[String]) -> String {
    match non_empty(primary) {
        Some(value) => format!("{prefix}:{value} "),
        None => or_group(alternatives.iter().map(|v| format!("{prefix}:{v}"))),
    }
}

fn or_group(items: impl Iterator<Item = String>) -> String {
    format!("({}) ", items.collect::<Vec<_>>().join(" OR "))
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
