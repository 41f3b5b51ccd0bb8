use std::collections::BTreeMap;

use gdeltdoc_client::{Article, FilterSet, QueryDetails, TimelineResult, TimelineRow};

use super::*;
use crate::filters::{parse_near, parse_repeat, unknown_codes, Join};

fn filters_of(cli: Cli) -> FilterArgs {
    match cli.command {
        Commands::Articles { filters, .. } | Commands::Timeline { filters, .. } => filters,
    }
}

#[test]
fn parses_articles_command() {
    let cli = Cli::try_parse_from([
        "gdeltdoc",
        "articles",
        "climate change",
        "--timespan",
        "24h",
        "--max-records",
        "20",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Articles {
            window,
            max_records,
            ..
        } => {
            assert_eq!(window.query, "climate change");
            assert_eq!(window.timespan.as_deref(), Some("24h"));
            assert_eq!(max_records, Some(20));
        }
        Commands::Timeline { .. } => panic!("expected articles command"),
    }
}

#[test]
fn parses_timeline_command_with_mode_and_json() {
    let cli = Cli::try_parse_from([
        "gdeltdoc",
        "timeline",
        "drought",
        "--start",
        "2025-01-01",
        "--end",
        "2025-01-31",
        "--mode",
        "timelinevolraw",
        "--json",
    ])
    .expect("expected valid cli args");

    assert!(cli.json);
    assert!(matches!(
        cli.command,
        Commands::Timeline { ref mode, .. } if mode.as_deref() == Some("timelinevolraw")
    ));
}

#[test]
fn negative_tone_values_are_accepted() {
    let cli = Cli::try_parse_from([
        "gdeltdoc", "articles", "x", "--timespan", "1d", "--tone", "<-5",
    ])
    .expect("expected valid cli args");
    assert_eq!(filters_of(cli).tone.as_deref(), Some("<-5"));
}

#[test]
fn repeated_flags_become_or_lists() {
    let cli = Cli::try_parse_from([
        "gdeltdoc",
        "articles",
        "x",
        "--timespan",
        "1d",
        "--country",
        "US",
        "--country",
        "UK",
        "--domain",
        "bbc.co.uk",
    ])
    .expect("expected valid cli args");

    let mut filter_set = FilterSet::for_timespan("1d", 10);
    filters_of(cli).apply(&mut filter_set).unwrap();
    assert_eq!(filter_set.country, None);
    assert_eq!(filter_set.country_or, vec!["US", "UK"]);
    assert_eq!(filter_set.domain.as_deref(), Some("bbc.co.uk"));
    assert!(filter_set.domain_or.is_empty());
}

#[test]
fn near_and_repeat_flags_render_fragments() {
    let cli = Cli::try_parse_from([
        "gdeltdoc",
        "articles",
        "x",
        "--timespan",
        "1d",
        "--near",
        "5:airline crisis",
        "--near",
        "10:airline climate",
        "--near-join",
        "or",
        "--repeat",
        "3:energy",
    ])
    .expect("expected valid cli args");

    let args = filters_of(cli);
    assert_eq!(args.near_join, Join::Or);

    let mut filter_set = FilterSet::for_timespan("1d", 10);
    args.apply(&mut filter_set).unwrap();
    assert_eq!(
        filter_set.near.as_deref(),
        Some("(near5:\"airline crisis\"  OR near10:\"airline climate\" ) ")
    );
    assert_eq!(filter_set.repeat.as_deref(), Some("repeat3:\"energy\" "));
}

#[test]
fn malformed_fragment_flags_are_errors() {
    assert!(parse_near("5:alone").is_err());
    assert!(parse_near("five:a b").is_err());
    assert!(parse_near("a b").is_err());
    assert!(parse_repeat("2:two words").is_err());
    assert!(parse_repeat("2:").is_err());
    assert_eq!(parse_repeat("2:word").unwrap().count, 2);
}

#[test]
fn timeline_table_uses_series_order_and_counts() {
    let timestamp = "2025-01-30T00:00:00Z".parse().unwrap();
    let mut series = BTreeMap::new();
    series.insert("Zeta".to_string(), 1.5);
    series.insert("Alpha".to_string(), 2.0);

    let timeline = TimelineResult {
        query_details: QueryDetails::default(),
        rows: vec![TimelineRow {
            timestamp,
            series,
            all_articles: Some(900),
        }],
        series_names: vec!["Zeta".to_string(), "Alpha".to_string()],
    };

    let table = output::render_timeline(&timeline);
    let mut lines = table.lines();
    assert_eq!(lines.next(), Some("timestamp\tZeta\tAlpha\tall_articles"));
    assert_eq!(lines.next(), Some("2025-01-30 00:00\t1.5\t2\t900"));
}

#[test]
fn article_listing_counts_results() {
    let articles = vec![Article {
        title: "Heat wave".to_string(),
        url: "https://example.com".to_string(),
        ..Article::default()
    }];
    let text = output::render_articles(&articles);
    assert!(text.contains("  1. Heat wave"));
    assert!(text.ends_with("1 article(s)\n"));
}

#[test]
fn empty_timeline_renders_header_only() {
    let table = output::render_timeline(&TimelineResult::default());
    assert_eq!(table, "timestamp\n");
}

#[test]
fn unknown_country_and_language_codes_are_reported() {
    let countries = vec!["US".to_string(), "GB".to_string(), "uk".to_string()];
    assert_eq!(
        unknown_codes(&countries, gdeltdoc_core::codes::country::is_known),
        vec!["GB"]
    );

    let languages = vec!["en".to_string(), "english".to_string()];
    assert_eq!(
        unknown_codes(&languages, gdeltdoc_core::codes::language::is_known),
        vec!["english"]
    );
}
