use chrono::TimeZone;

use super::*;

fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

#[test]
fn neither_dates_nor_timespan_fails() {
    let filters = FilterSet {
        record_limit: 50,
        ..FilterSet::default()
    }
    .with_keyword("test");
    assert_eq!(filters.validate(), Err(ValidationError::MissingDateRange));
}

#[test]
fn both_dates_and_timespan_fails() {
    let mut filters = FilterSet::for_dates(day(2025, 1, 1), day(2025, 1, 2), 10);
    filters.timespan = Some("24h".to_string());
    assert_eq!(filters.validate(), Err(ValidationError::ConflictingDateRange));
}

#[test]
fn start_date_alone_fails() {
    let filters = FilterSet {
        start_date: Some(day(2025, 1, 1)),
        record_limit: 10,
        ..FilterSet::default()
    };
    assert_eq!(filters.validate(), Err(ValidationError::IncompleteDateRange));
}

#[test]
fn end_date_alone_fails() {
    let filters = FilterSet {
        end_date: Some(day(2025, 1, 2)),
        record_limit: 10,
        ..FilterSet::default()
    };
    assert_eq!(filters.validate(), Err(ValidationError::IncompleteDateRange));
}

#[test]
fn one_date_with_timespan_is_a_conflict() {
    let filters = FilterSet {
        start_date: Some(day(2025, 1, 1)),
        timespan: Some("1d".to_string()),
        ..FilterSet::default()
    };
    assert_eq!(filters.validate(), Err(ValidationError::ConflictingDateRange));
}

#[test]
fn empty_timespan_counts_as_unset() {
    let filters = FilterSet::for_timespan("", 10);
    assert_eq!(filters.validate(), Err(ValidationError::MissingDateRange));
}

#[test]
fn record_limit_boundary() {
    assert!(FilterSet::for_timespan("24h", 250).validate().is_ok());
    assert_eq!(
        FilterSet::for_timespan("24h", 251).validate(),
        Err(ValidationError::RecordLimitExceeded(251))
    );
    assert!(FilterSet::for_timespan("24h", 0).validate().is_ok());
}

#[test]
fn date_rule_is_checked_before_record_limit() {
    let filters = FilterSet {
        record_limit: 300,
        ..FilterSet::default()
    };
    assert_eq!(filters.validate(), Err(ValidationError::MissingDateRange));
}

#[test]
fn timespan_rule_is_checked_before_record_limit() {
    let filters = FilterSet::for_timespan("45min", 300);
    assert_eq!(
        filters.validate(),
        Err(ValidationError::TimespanTooShort { minutes: 45 })
    );
}

#[test]
fn record_limit_is_checked_before_tone() {
    let mut filters = FilterSet::for_timespan("1h", 300);
    filters.tone = Some("5".to_string());
    assert_eq!(
        filters.validate(),
        Err(ValidationError::RecordLimitExceeded(300))
    );
}

#[test]
fn timespan_accepts_supported_units() {
    for ok in [
        "60min", "90min", "2h", "24hours", "7d", "30days", "2w", "4weeks", "3m", "6months",
    ] {
        assert!(validate_timespan(ok).is_ok(), "{ok} should be accepted");
    }
}

#[test]
fn timespan_under_sixty_minutes_fails() {
    assert_eq!(
        validate_timespan("45min"),
        Err(ValidationError::TimespanTooShort { minutes: 45 })
    );
    assert_eq!(
        validate_timespan("15min"),
        Err(ValidationError::TimespanTooShort { minutes: 15 })
    );
}

#[test]
fn timespan_with_unknown_unit_fails() {
    assert_eq!(
        validate_timespan("5x"),
        Err(ValidationError::UnsupportedTimespanUnit {
            unit: "x".to_string()
        })
    );
}

#[test]
fn malformed_timespans_fail() {
    for bad in ["invalid", "h24", "24", "1.5h", "-3d", "24 h", "24H"] {
        assert_eq!(
            validate_timespan(bad),
            Err(ValidationError::InvalidTimespan(bad.to_string())),
            "{bad} should be rejected as malformed"
        );
    }
}

#[test]
fn oversized_timespan_magnitude_fails() {
    let span = "99999999999999999999999d";
    assert_eq!(
        validate_timespan(span),
        Err(ValidationError::InvalidTimespan(span.to_string()))
    );
}

#[test]
fn tone_requires_an_operator() {
    assert_eq!(
        validate_tone("tone", "5"),
        Err(ValidationError::ToneMissingOperator {
            field: "tone",
            value: "5".to_string()
        })
    );
}

#[test]
fn tone_rejects_bare_equals() {
    assert!(matches!(
        validate_tone("tone", "=5"),
        Err(ValidationError::ToneMissingOperator { .. })
    ));
    assert!(matches!(
        validate_tone("tone", ">5=3"),
        Err(ValidationError::ToneBareEquals { .. })
    ));
    assert!(matches!(
        validate_tone("toneabs", "=>5"),
        Err(ValidationError::ToneBareEquals { field: "toneabs", .. })
    ));
}

#[test]
fn tone_accepts_comparisons() {
    for ok in [">5", "<-5", ">=10", "<=-10"] {
        assert!(validate_tone("tone", ok).is_ok(), "{ok} should be accepted");
    }
}

#[test]
fn tone_abs_is_validated_through_filter_set() {
    let mut filters = FilterSet::for_timespan("24h", 10);
    filters.tone_abs = Some("10".to_string());
    assert!(matches!(
        filters.validate(),
        Err(ValidationError::ToneMissingOperator {
            field: "toneabs",
            ..
        })
    ));
}

#[test]
fn tone_op_renders_filter_values() {
    assert_eq!(ToneOp::Greater.with_value(5), ">5");
    assert_eq!(ToneOp::Less.with_value("-2.5"), "<-2.5");
    assert_eq!(ToneOp::GreaterEqual.to_string(), ">=");
    assert!(validate_tone("tone", &ToneOp::LessEqual.with_value(-10)).is_ok());
}
