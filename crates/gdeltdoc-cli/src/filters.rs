//! Filter flags shared by both subcommands.

use anyhow::{bail, Context};
use clap::{Args, ValueEnum};
use gdeltdoc_client::{multi_near, multi_repeat, Combinator, FilterSet, NearConfig, RepeatConfig};
use gdeltdoc_core::codes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Join {
    And,
    Or,
}

impl From<Join> for Combinator {
    fn from(join: Join) -> Self {
        match join {
            Join::And => Combinator::And,
            Join::Or => Combinator::Or,
        }
    }
}

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Source domain; repeat to OR several together
    #[arg(long)]
    pub domain: Vec<String>,

    /// Exact source domain; repeat to OR several together
    #[arg(long)]
    pub domain_exact: Vec<String>,

    /// FIPS country code of the source (e.g. US, UK); repeatable.
    /// Unrecognised codes are sent anyway with a warning
    #[arg(long)]
    pub country: Vec<String>,

    /// ISO 639 language code of the source (e.g. en); repeatable.
    /// Unrecognised codes are sent anyway with a warning
    #[arg(long)]
    pub language: Vec<String>,

    /// GKG theme (e.g. `ENV_CLIMATECHANGE`); repeatable
    #[arg(long)]
    pub theme: Vec<String>,

    /// Tone comparison such as ">5" or "<=-10"
    #[arg(long, allow_hyphen_values = true)]
    pub tone: Option<String>,

    /// Absolute tone comparison such as ">10"
    #[arg(long, allow_hyphen_values = true)]
    pub tone_abs: Option<String>,

    /// Proximity filter "DISTANCE:word word ..."; repeatable
    #[arg(long)]
    pub near: Vec<String>,

    /// How multiple --near filters combine
    #[arg(long, value_enum, default_value_t = Join::And)]
    pub near_join: Join,

    /// Repetition filter "COUNT:word"; repeatable
    #[arg(long)]
    pub repeat: Vec<String>,

    /// How multiple --repeat filters combine
    #[arg(long, value_enum, default_value_t = Join::And)]
    pub repeat_join: Join,
}

impl FilterArgs {
    /// Copies the flags onto `filters`. A single value sets the primary
    /// field, several values set the OR-list.
    pub fn apply(&self, filters: &mut FilterSet) -> anyhow::Result<()> {
        for code in unknown_codes(&self.country, codes::country::is_known) {
            tracing::warn!(code, "unrecognised source country code");
        }
        for code in unknown_codes(&self.language, codes::language::is_known) {
            tracing::warn!(code, "unrecognised source language code");
        }

        (filters.domain, filters.domain_or) = split_family(&self.domain);
        (filters.domain_exact, filters.domain_exact_or) = split_family(&self.domain_exact);
        (filters.country, filters.country_or) = split_family(&self.country);
        (filters.language, filters.language_or) = split_family(&self.language);
        (filters.theme, filters.theme_or) = split_family(&self.theme);
        filters.tone.clone_from(&self.tone);
        filters.tone_abs.clone_from(&self.tone_abs);

        if !self.near.is_empty() {
            let configs = self
                .near
                .iter()
                .map(String::as_str)
                .map(parse_near)
                .collect::<anyhow::Result<Vec<_>>>()?;
            filters.near = Some(multi_near(&configs, self.near_join.into()));
        }

        if !self.repeat.is_empty() {
            let configs = self
                .repeat
                .iter()
                .map(String::as_str)
                .map(parse_repeat)
                .collect::<anyhow::Result<Vec<_>>>()?;
            filters.repeat = Some(multi_repeat(&configs, self.repeat_join.into()));
        }

        Ok(())
    }
}

#[must_use]
pub fn unknown_codes<'a>(values: &'a [String], is_known: fn(&str) -> bool) -> Vec<&'a str> {
    values
        .iter()
        .map(String::as_str)
        .filter(|code| !is_known(code))
        .collect()
}

fn split_family(values: &[String]) -> (Option<String>, Vec<String>) {
    match values {
        [] => (None, Vec::new()),
        [single] => (Some(single.clone()), Vec::new()),
        many => (None, many.to_vec()),
    }
}

fn split_counted(raw: &str, flag: &str) -> anyhow::Result<(u32, String)> {
    let (count, rest) = raw
        .split_once(':')
        .with_context(|| format!("--{flag} expects \"N:words\", got '{raw}'"))?;
    let count = count
        .trim()
        .parse::<u32>()
        .with_context(|| format!("--{flag} count '{count}' is not a number"))?;
    Ok((count, rest.trim().to_string()))
}

pub fn parse_near(raw: &str) -> anyhow::Result<NearConfig> {
    let (distance, words) = split_counted(raw, "near")?;
    let words: Vec<String> = words.split_whitespace().map(str::to_string).collect();
    if words.len() < 2 {
        bail!("--near needs at least two words, got '{raw}'");
    }
    Ok(NearConfig { distance, words })
}

pub fn parse_repeat(raw: &str) -> anyhow::Result<RepeatConfig> {
    let (count, word) = split_counted(raw, "repeat")?;
    if word.is_empty() || word.contains(char::is_whitespace) {
        bail!("--repeat takes exactly one word, got '{raw}'");
    }
    Ok(RepeatConfig { count, word })
}
