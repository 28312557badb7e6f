//! Property tests for the metrics and date-filter contracts.
//!
//! Return series are drawn from (-0.5, 0.5) so NAV curves stay finite and
//! positive; date indexes are chronological, as served by the endpoints.

use chrono::{Days, NaiveDate};
use factorview_analytics::metrics::{
    IcStats, PerformanceSummary, annualized_return, annualized_volatility, build_nav,
    calmar_ratio, drawdown, max_drawdown, sharpe_ratio,
};
use factorview_analytics::series::{DateRange, filter_by_date};
use proptest::prelude::*;

fn returns() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-0.5f64..0.5, 0..200)
}

fn iso(offset: u64) -> String {
    let Some(base) = NaiveDate::from_ymd_opt(2020, 1, 1) else {
        panic!("valid base date");
    };
    let Some(date) = base.checked_add_days(Days::new(offset)) else {
        panic!("offset in range");
    };
    date.format("%Y-%m-%d").to_string()
}

/// Chronological index with gaps, like a trading calendar.
fn calendar() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(1u64..5, 0..120).prop_map(|gaps| {
        gaps.iter()
            .scan(0u64, |day, gap| {
                *day += gap;
                Some(iso(*day))
            })
            .collect()
    })
}

fn bound() -> impl Strategy<Value = Option<String>> {
    prop::option::of((0u64..500).prop_map(iso))
}

proptest! {
    #[test]
    fn nav_starts_at_one_and_compounds(r in returns()) {
        let nav = build_nav(&r);
        prop_assert_eq!(nav.len(), r.len() + 1);
        prop_assert_eq!(nav[0], 1.0);
        for i in 1..nav.len() {
            prop_assert_eq!(nav[i], nav[i - 1] * (1.0 + r[i - 1]));
        }
    }

    #[test]
    fn drawdown_is_non_positive(r in returns()) {
        let dd = drawdown(&r);
        prop_assert_eq!(dd.len(), r.len() + 1);
        prop_assert_eq!(dd[0], 0.0);
        prop_assert!(dd.iter().all(|d| *d <= 0.0));
    }

    #[test]
    fn max_drawdown_is_curve_minimum(r in returns()) {
        let dd = drawdown(&r);
        let minimum = dd.iter().copied().fold(f64::INFINITY, f64::min);
        prop_assert_eq!(max_drawdown(&r), minimum);
    }

    #[test]
    fn non_negative_returns_never_draw_down(r in prop::collection::vec(0.0f64..0.5, 0..200)) {
        prop_assert_eq!(max_drawdown(&r), 0.0);
        prop_assert_eq!(calmar_ratio(&r), 0.0);
    }

    #[test]
    fn volatility_is_non_negative(r in returns()) {
        prop_assert!(annualized_volatility(&r) >= 0.0);
    }

    #[test]
    fn estimators_are_idempotent(r in returns()) {
        prop_assert_eq!(build_nav(&r), build_nav(&r));
        prop_assert_eq!(drawdown(&r), drawdown(&r));
        prop_assert_eq!(annualized_return(&r), annualized_return(&r));
        prop_assert_eq!(sharpe_ratio(&r), sharpe_ratio(&r));
        prop_assert_eq!(
            PerformanceSummary::from_returns(&r),
            PerformanceSummary::from_returns(&r)
        );
    }

    #[test]
    fn summary_matches_individual_estimators(r in returns()) {
        let summary = PerformanceSummary::from_returns(&r);
        let nav = build_nav(&r);
        prop_assert_eq!(summary.cumulative_return, nav[nav.len() - 1] - 1.0);
        prop_assert_eq!(summary.annualized_return, annualized_return(&r));
        prop_assert_eq!(summary.annualized_volatility, annualized_volatility(&r));
        prop_assert_eq!(summary.max_drawdown, max_drawdown(&r));
        prop_assert_eq!(summary.sharpe_ratio, sharpe_ratio(&r));
        prop_assert_eq!(summary.calmar_ratio, calmar_ratio(&r));
    }

    #[test]
    fn ic_ratios_partition_at_most_one(ics in prop::collection::vec(-1.0f64..1.0, 1..100)) {
        let stats = IcStats::from_ics(&ics);
        prop_assert!(stats.positive_ratio + stats.negative_ratio <= 1.0 + 1e-12);
        prop_assert!(stats.mean_ic.is_finite());
    }

    #[test]
    fn filter_keeps_contiguous_run_inside_bounds(
        index in calendar(),
        start in bound(),
        end in bound(),
    ) {
        let values: Vec<usize> = (0..index.len()).collect();
        let range = DateRange { start_date: start.clone(), end_date: end.clone() };

        let Ok(kept) = filter_by_date(&values, &index, &range) else {
            panic!("aligned input never fails");
        };

        prop_assert_eq!(kept.values.len(), kept.index.len());
        for (position, date) in kept.values.iter().zip(&kept.index) {
            prop_assert_eq!(&index[*position], date);
            prop_assert!(start.as_ref().is_none_or(|s| date >= s));
            prop_assert!(end.as_ref().is_none_or(|e| date <= e));
        }
        // Positions come from the input in order with no holes
        prop_assert!(kept.values.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn filter_rejects_misaligned_input(
        index in calendar(),
        extra in 1usize..5,
    ) {
        let values = vec![0.0; index.len() + extra];
        prop_assert!(filter_by_date(&values, &index, &DateRange::all()).is_err());
    }
}
