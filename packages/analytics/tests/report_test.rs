//! End-to-end report building from endpoint payloads.

use factorview_analytics::config::{AnalyticsConfig, load_config_from_string};
use factorview_analytics::report::{
    FactorReport, NumericField, QueryEvent, ReportQuery, StrategyReport, SummaryColumn,
    SummaryTable, TableEvent,
};
use factorview_analytics::series::{
    DateRange, FactorPerfPayload, PeriodPreset, StrategyPerfPayload, SummaryPayload,
};
use factorview_analytics::{AnalyticsError, ErrorCode};

const FACTOR_JSON: &str = r#"{
    "ic": {
        "index": ["2024-01-02", "2024-01-03", "2024-01-04", "2024-01-05"],
        "values": [[0.05, null], [-0.02, null], [0.03, 0.02], [0.01, 0.0175]]
    },
    "group": {
        "index": ["2024-01-02", "2024-01-03", "2024-01-04", "2024-01-05"],
        "values": [
            [-0.01, 0.0, 0.01, 0.02],
            [0.0, 0.01, -0.01, 0.01],
            [0.01, null, 0.02, 0.01],
            [-0.02, 0.0, 0.0, 0.02]
        ]
    },
    "backtest_ret": {
        "index": ["2024-01-02", "2024-01-03", "2024-01-04", "2024-01-05"],
        "values": [
            [0.1, 0.05, 0.05, 80, 0.3, 0.001],
            [-0.2, -0.1, -0.1, 82, 0.2, 0.001],
            [0.1, 0.05, 0.05, 81, 0.1, 0.0005],
            [0.02, 0.01, 0.01, 79, 0.0, 0.0]
        ]
    }
}"#;

fn factor_payload() -> FactorPerfPayload {
    match FactorPerfPayload::from_json(FACTOR_JSON) {
        Ok(p) => p,
        Err(e) => panic!("factor payload decodes: {e}"),
    }
}

fn small_layout() -> AnalyticsConfig {
    let yaml = r"
report:
  group_count: 3
  hedge_label: Long-Short
";
    match load_config_from_string(yaml) {
        Ok(c) => c,
        Err(e) => panic!("config loads: {e}"),
    }
}

#[test]
fn test_factor_report_from_json() {
    let config = small_layout();
    let report = match FactorReport::build(
        "reversal_5d",
        &factor_payload(),
        &DateRange::all(),
        &config.report,
        &config.rolling_ic,
    ) {
        Ok(r) => r,
        Err(e) => panic!("report builds: {e}"),
    };

    let labels: Vec<&str> = report.group.curves.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(labels, vec!["Group 1", "Group 2", "Group 3", "Long-Short"]);

    // IC matches the dashboard reference numbers
    assert_eq!(report.ic.stats.positive_ratio, 0.75);
    assert!((report.ic.stats.mean_ic - 0.0175).abs() < 1e-12);

    // Null group return reads as zero
    let group_two = &report.group.curves[1].values;
    assert!((group_two[3] - group_two[2]).abs() < 1e-15);

    // Excess drawdown: 1.05, 0.945, 0.99225
    assert!((report.backtest.drawdown.values[2] + 0.1).abs() < 1e-12);
}

#[test]
fn test_factor_report_serializes_for_the_page() {
    let config = AnalyticsConfig::default();
    let report = match FactorReport::build(
        "reversal_5d",
        &factor_payload(),
        &DateRange::since("2024-01-04"),
        &config.report,
        &config.rolling_ic,
    ) {
        Ok(r) => r,
        Err(e) => panic!("report builds: {e}"),
    };

    let json = match serde_json::to_value(&report) {
        Ok(v) => v,
        Err(e) => panic!("report serializes: {e}"),
    };
    assert_eq!(json["ic"]["index"][0], "2024-01-04");
    assert!(json["ic"]["stats"]["icir"].is_number());
    assert_eq!(json["ic"]["points"][0][1], 0.02);
    assert!(json["group"]["rows"][0]["sharpeRatio"].is_number());
}

#[test]
fn test_factor_report_errors_carry_codes() {
    let config = AnalyticsConfig::default();
    let mut payload = factor_payload();
    if let Some(ic) = payload.ic.as_mut() {
        ic.index.pop();
    }

    let Err(err) = FactorReport::build(
        "reversal_5d",
        &payload,
        &DateRange::all(),
        &config.report,
        &config.rolling_ic,
    ) else {
        panic!("misaligned IC must fail");
    };
    assert_eq!(err.code(), ErrorCode::ShapeMismatch);

    let Err(err) = FactorReport::build(
        "reversal_5d",
        &factor_payload(),
        &DateRange::until("2023-12-31"),
        &config.report,
        &config.rolling_ic,
    ) else {
        panic!("window before the data must fail");
    };
    assert_eq!(err.code(), ErrorCode::EmptyWindow);
}

#[test]
fn test_strategy_report_over_preset_window() {
    let json = r#"{
        "backtest_ret": {
            "index": ["2023-12-29", "2024-03-01", "2024-06-28"],
            "values": [
                [0.01, 0.0, 0.01, 100, 0.5, 0.002],
                [0.02, 0.01, 0.01, 110, 0.5, 0.002],
                [-0.01, 0.0, -0.01, 120, 0.5, 0.002]
            ]
        }
    }"#;
    let payload = match StrategyPerfPayload::from_json(json) {
        Ok(p) => p,
        Err(e) => panic!("strategy payload decodes: {e}"),
    };

    let query = match ReportQuery::default().apply(QueryEvent::Period {
        preset: PeriodPreset::YearToDate,
        reference: chrono::NaiveDate::from_ymd_opt(2024, 6, 30).unwrap_or_default(),
    }) {
        Ok(q) => q,
        Err(e) => panic!("preset applies: {e}"),
    };

    let report = match StrategyReport::build(
        "alpha_v2",
        &payload,
        &query.date_range(),
        &AnalyticsConfig::default().report,
    ) {
        Ok(r) => r,
        Err(e) => panic!("report builds: {e}"),
    };

    assert_eq!(report.backtest.index, vec!["2024-03-01", "2024-06-28"]);
    let row = &report.rows[0];
    assert_eq!(row.activity.avg_position, 115.0);
    assert!((row.activity.total_years - 119.0 / 365.0).abs() < 1e-12);
    assert!((row.summary.cumulative_return - (1.02 * 0.99 - 1.0)).abs() < 1e-12);
}

#[test]
fn test_strategy_payload_without_backtest() {
    let Ok(payload) = StrategyPerfPayload::from_json("{}") else {
        panic!("empty object decodes");
    };
    let result = StrategyReport::build(
        "alpha_v2",
        &payload,
        &DateRange::all(),
        &AnalyticsConfig::default().report,
    );
    assert!(matches!(result, Err(AnalyticsError::MissingSeries(_))));
}

#[test]
fn test_summary_table_from_payload() {
    let json = r#"{
        "factor_info": {
            "index": ["bp", "ep", "mom_20d"],
            "values": {
                "class_name": ["value", "value", "momentum"],
                "ic": [0.021, 0.034, null],
                "group_pnl": [0.05, 0.07, 0.11],
                "backtest_ret": [0.08, 0.12, 0.15]
            }
        }
    }"#;
    let payload = match SummaryPayload::from_json(json) {
        Ok(p) => p,
        Err(e) => panic!("summary decodes: {e}"),
    };
    let record = match payload.table("factor_info") {
        Ok(r) => r,
        Err(e) => panic!("table present: {e}"),
    };
    let table = match SummaryTable::from_record(record) {
        Ok(t) => t,
        Err(e) => panic!("table builds: {e}"),
    };

    let table = table
        .apply(TableEvent::SelectClasses {
            classes: vec!["value".to_string()],
        })
        .toggle_sort(SummaryColumn::Numeric(NumericField::Ic))
        .toggle_sort(SummaryColumn::Numeric(NumericField::Ic));

    let names: Vec<&str> = table.visible_rows().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["ep", "bp"]);
}

#[test]
fn test_invalid_json_maps_to_invalid_payload() {
    let Err(err) = FactorPerfPayload::from_json("{\"ic\": [1, 2]") else {
        panic!("truncated JSON must fail");
    };
    assert_eq!(err.code(), ErrorCode::InvalidPayload);
}
