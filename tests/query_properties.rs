//! Property-style tests for the query engine
//!
//! These tests assert the algebraic guarantees of filter, sort, and paginate
//! over representative record sets rather than single hand-picked rows.

use fiscalview_core::{
    filter, page_count, paginate, sort, toggle_sort, FilterSpec, FinancialRecord, FiscalDate,
    SortDirection, SortField, SortSpec, PAGE_SIZE,
};
use fiscalview_tests::summary_row as record;

/// Eleven fiscal years with duplicate revenues, a missing net income, and
/// dates out of order, as providers tend to return them.
fn statements() -> Vec<FinancialRecord> {
    vec![
        record("2023-09-30", Some(383.0), Some(97.0)),
        record("2022-09-24", Some(394.0), Some(99.8)),
        record("2021-09-25", Some(365.8), Some(94.7)),
        record("2020-09-26", Some(274.5), Some(57.4)),
        record("2019-09-28", Some(260.2), None),
        record("2018-09-29", Some(265.6), Some(59.5)),
        record("2017-09-30", Some(229.2), Some(48.4)),
        record("2016-09-24", Some(215.6), Some(45.7)),
        record("2015-09-26", Some(233.7), Some(53.4)),
        record("2014-09-27", Some(182.8), Some(39.5)),
        record("2013-09-28", Some(383.0), Some(37.0)),
    ]
}

fn filter_specs() -> Vec<FilterSpec> {
    vec![
        FilterSpec::default(),
        FilterSpec {
            min_revenue: Some(250.0),
            ..FilterSpec::default()
        },
        FilterSpec {
            start_date: Some(FiscalDate::parse("2016-01-01").expect("date")),
            end_date: Some(FiscalDate::parse("2021-12-31").expect("date")),
            ..FilterSpec::default()
        },
        FilterSpec {
            min_net_income: Some(40.0),
            max_net_income: Some(60.0),
            max_revenue: Some(270.0),
            ..FilterSpec::default()
        },
        FilterSpec {
            min_revenue: Some(10_000.0),
            ..FilterSpec::default()
        },
    ]
}

fn all_sorts() -> Vec<SortSpec> {
    SortField::ALL
        .into_iter()
        .flat_map(|field| {
            [SortDirection::Asc, SortDirection::Desc]
                .into_iter()
                .map(move |direction| SortSpec::new(field, direction))
        })
        .collect()
}

fn is_subsequence(needle: &[FinancialRecord], haystack: &[FinancialRecord]) -> bool {
    let mut remaining = haystack.iter();
    needle
        .iter()
        .all(|wanted| remaining.any(|candidate| candidate == wanted))
}

// =============================================================================
// Filter Engine
// =============================================================================

#[test]
fn filtering_always_yields_a_subsequence_of_the_input() {
    let records = statements();
    for spec in filter_specs() {
        let kept = filter(&records, &spec);
        assert!(is_subsequence(&kept, &records), "spec={spec:?}");
    }
}

#[test]
fn filtering_is_idempotent() {
    let records = statements();
    for spec in filter_specs() {
        let once = filter(&records, &spec);
        assert_eq!(filter(&once, &spec), once, "spec={spec:?}");
    }
}

#[test]
fn filtering_never_modifies_the_input() {
    let records = statements();
    let snapshot = records.clone();
    for spec in filter_specs() {
        let _ = filter(&records, &spec);
    }
    assert_eq!(records, snapshot);
}

#[test]
fn filtering_an_empty_set_with_any_spec_is_empty() {
    for spec in filter_specs() {
        assert!(filter(&[], &spec).is_empty());
    }
}

// =============================================================================
// Sort Engine
// =============================================================================

#[test]
fn sorting_commutes_with_filtering() {
    let records = statements();
    for spec in filter_specs() {
        for order in all_sorts() {
            let filter_then_sort = sort(&filter(&records, &spec), order.field, order.direction);
            let sort_then_filter = filter(&sort(&records, order.field, order.direction), &spec);
            assert_eq!(filter_then_sort, sort_then_filter, "spec={spec:?} sort={order:?}");
        }
    }
}

#[test]
fn sorting_twice_equals_sorting_once() {
    let records = statements();
    for order in all_sorts() {
        let once = sort(&records, order.field, order.direction);
        assert_eq!(sort(&once, order.field, order.direction), once);
    }
}

#[test]
fn date_sort_is_monotonic_in_both_directions() {
    let records = statements();

    let ascending = sort(&records, SortField::Date, SortDirection::Asc);
    assert!(ascending.windows(2).all(|pair| pair[0].date <= pair[1].date));

    let descending = sort(&records, SortField::Date, SortDirection::Desc);
    assert!(descending.windows(2).all(|pair| pair[0].date >= pair[1].date));
}

#[test]
fn equal_revenues_keep_their_input_order_in_both_directions() {
    let records = statements();
    let tied_years = |sorted: &[FinancialRecord]| -> Vec<i32> {
        sorted
            .iter()
            .filter(|r| r.revenue == Some(383.0))
            .map(|r| r.date.year())
            .collect()
    };

    assert_eq!(
        tied_years(&sort(&records, SortField::Revenue, SortDirection::Asc)),
        vec![2023, 2013]
    );
    assert_eq!(
        tied_years(&sort(&records, SortField::Revenue, SortDirection::Desc)),
        vec![2023, 2013]
    );
}

#[test]
fn toggle_follows_header_click_semantics() {
    let date_asc = SortSpec::new(SortField::Date, SortDirection::Asc);

    assert_eq!(
        toggle_sort(date_asc, SortField::Date),
        SortSpec::new(SortField::Date, SortDirection::Desc)
    );
    assert_eq!(
        toggle_sort(date_asc, SortField::Revenue),
        SortSpec::new(SortField::Revenue, SortDirection::Asc)
    );
}

// =============================================================================
// Paginate Engine
// =============================================================================

#[test]
fn pages_never_exceed_page_size_and_reassemble_the_sequence() {
    let records = sort(&statements(), SortField::Date, SortDirection::Desc);
    for page_size in 1..=records.len() + 1 {
        let pages = page_count(records.len(), page_size);
        let mut reassembled = Vec::new();
        for index in 1..=pages {
            let page = paginate(&records, index, page_size);
            assert!(page.len() <= page_size);
            reassembled.extend_from_slice(page);
        }
        assert_eq!(reassembled, records, "page_size={page_size}");
        assert!(paginate(&records, pages + 1, page_size).is_empty());
    }
}

#[test]
fn empty_record_set_has_one_empty_page() {
    let empty: Vec<FinancialRecord> = Vec::new();
    assert_eq!(page_count(empty.len(), PAGE_SIZE), 1);
    for index in 0..4 {
        assert!(paginate(&empty, index, PAGE_SIZE).is_empty());
    }
}

// =============================================================================
// Worked scenario
// =============================================================================

#[test]
fn filter_sort_then_page_through_three_years() {
    // Given: three fiscal years in provider order
    let records = vec![
        record("2023-01-01", Some(100.0), None),
        record("2022-01-01", Some(90.0), None),
        record("2021-01-01", Some(150.0), None),
    ];

    // When: the user keeps revenue >= 95
    let spec = FilterSpec {
        min_revenue: Some(95.0),
        ..FilterSpec::default()
    };
    let kept = filter(&records, &spec);

    // Then: order is preserved
    assert_eq!(kept, vec![records[0].clone(), records[2].clone()]);

    // When: they sort by revenue
    let order = toggle_sort(SortSpec::default(), SortField::Revenue);
    let sorted = sort(&kept, order.field, order.direction);

    // Then: ascending revenue leaves the order unchanged
    assert_eq!(order.direction, SortDirection::Asc);
    assert_eq!(sorted, kept);

    // And: with one row per page, page two is the 2021 row
    assert_eq!(paginate(&sorted, 2, 1), &[records[2].clone()]);
}
