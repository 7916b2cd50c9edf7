//! Behavior-driven tests for browsing sessions
//!
//! These tests drive the reducer with the same event sequences a user
//! produces in the table UI and check what the rendered page would show.

use fiscalview_core::{
    reduce, Event, FetchError, FetchOutcome, FetchStatus, FilterBound, FilterEdit,
    FinancialRecord, SortDirection, SortField, SortSpec, ViewState,
};
use fiscalview_tests::{summary_row, years};

fn record(date: &str, revenue: f64, net_income: f64) -> FinancialRecord {
    summary_row(date, Some(revenue), Some(net_income))
}

fn decade() -> Vec<FinancialRecord> {
    (2014..2024)
        .rev()
        .map(|year| {
            let step = f64::from(year - 2014);
            record(&format!("{year}-09-30"), 180.0 + step * 20.0, 40.0 + step * 5.0)
        })
        .collect()
}

fn run(events: impl IntoIterator<Item = Event>) -> ViewState {
    events.into_iter().fold(ViewState::new(), reduce)
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn user_sees_first_page_of_provider_order_after_load() {
    // Given: a fetch that returns ten fiscal years, newest first
    // When: it completes
    let state = run([
        Event::FetchStarted,
        Event::FetchCompleted(Ok(FetchOutcome {
            records: decade(),
            skipped: 0,
        })),
    ]);

    // Then: the first five rows appear unsorted, with two pages available
    let view = state.view();
    assert_eq!(years(view.rows), vec![2023, 2022, 2021, 2020, 2019]);
    assert_eq!(view.indicator(), "Page 1 of 2");
    assert!(!view.has_previous);
    assert!(view.has_next);
    assert_eq!(view.status, &FetchStatus::Ready { skipped: 0 });
}

#[test]
fn reload_resets_page_but_keeps_filter_and_sort_choices() {
    // Given: a user on page 2 with a pending filter edit and a sort chosen
    let state = run([
        Event::RecordsArrived(decade()),
        Event::SortBy(SortField::Revenue),
        Event::NextPage,
        Event::EditFilter(FilterEdit::from_input(FilterBound::MinRevenue, "300")),
    ]);
    assert_eq!(state.page().index, 2);

    // When: fresh records arrive
    let state = reduce(state, Event::RecordsArrived(decade()));

    // Then: page resets, rows are the new unfiltered set, choices persist
    assert_eq!(state.page().index, 1);
    assert_eq!(state.filtered(), decade().as_slice());
    assert_eq!(state.filter().min_revenue, Some(300.0));
    assert_eq!(
        state.sort(),
        SortSpec::new(SortField::Revenue, SortDirection::Asc)
    );
}

// =============================================================================
// Filtering
// =============================================================================

#[test]
fn user_narrows_to_a_date_window_and_lands_on_page_one() {
    // Given: a loaded table on page 2
    let state = run([Event::RecordsArrived(decade()), Event::NextPage]);

    // When: they pick 2016..2019 and press Apply Filters
    let state = run_from(
        state,
        [
            Event::EditFilter(FilterEdit::from_input(FilterBound::StartDate, "2016-01-01")),
            Event::EditFilter(FilterEdit::from_input(FilterBound::EndDate, "2019-09-30")),
            Event::ApplyFilters,
        ],
    );

    // Then: only those years remain, in provider order, on page 1 of 1
    let view = state.view();
    assert_eq!(years(view.rows), vec![2019, 2018, 2017, 2016]);
    assert_eq!(view.indicator(), "Page 1 of 1");
    assert!(!view.has_next);
}

#[test]
fn garbage_in_a_numeric_box_means_no_bound() {
    // Given: a loaded table
    // When: the user types text into the min revenue box and applies
    let state = run([
        Event::RecordsArrived(decade()),
        Event::EditFilter(FilterEdit::from_input(FilterBound::MinRevenue, "a lot")),
        Event::ApplyFilters,
    ]);

    // Then: nothing is filtered out and no error is raised
    assert_eq!(state.filter().min_revenue, None);
    assert_eq!(state.filtered().len(), 10);
}

#[test]
fn filtering_after_sorting_shows_provider_order_again() {
    // Given: rows sorted by ascending revenue
    let state = run([
        Event::RecordsArrived(decade()),
        Event::SortBy(SortField::Revenue),
    ]);
    assert_eq!(years(state.visible()), vec![2014, 2015, 2016, 2017, 2018]);

    // When: a filter is applied
    let state = run_from(
        state,
        [
            Event::EditFilter(FilterEdit::from_input(FilterBound::MaxNetIncome, "70")),
            Event::ApplyFilters,
        ],
    );

    // Then: the subset comes back in provider order while the header still
    // shows revenue ascending; the sort is not re-applied
    assert_eq!(years(state.visible()), vec![2020, 2019, 2018, 2017, 2016]);
    assert_eq!(
        state.sort(),
        SortSpec::new(SortField::Revenue, SortDirection::Asc)
    );
}

// =============================================================================
// Sorting and paging
// =============================================================================

#[test]
fn clicking_a_header_twice_flips_direction() {
    let state = run([
        Event::RecordsArrived(decade()),
        Event::SortBy(SortField::NetIncome),
        Event::SortBy(SortField::NetIncome),
    ]);

    assert_eq!(
        state.sort(),
        SortSpec::new(SortField::NetIncome, SortDirection::Desc)
    );
    assert_eq!(years(state.visible()), vec![2023, 2022, 2021, 2020, 2019]);
}

#[test]
fn clicking_date_first_sorts_descending_because_date_ascending_is_the_default() {
    let state = run([Event::RecordsArrived(decade()), Event::SortBy(SortField::Date)]);

    assert_eq!(state.sort().direction, SortDirection::Desc);
    assert_eq!(years(state.visible()), vec![2023, 2022, 2021, 2020, 2019]);
}

#[test]
fn sorting_on_a_later_page_keeps_the_page() {
    let state = run([
        Event::RecordsArrived(decade()),
        Event::NextPage,
        Event::SortBy(SortField::Revenue),
    ]);

    assert_eq!(state.page().index, 2);
    assert_eq!(years(state.visible()), vec![2019, 2020, 2021, 2022, 2023]);
}

#[test]
fn next_and_previous_stop_at_the_ends() {
    let state = run([
        Event::RecordsArrived(decade()),
        Event::NextPage,
        Event::NextPage,
        Event::NextPage,
    ]);
    assert_eq!(state.page().index, 2);

    let state = run_from(state, [Event::PreviousPage, Event::PreviousPage]);
    assert_eq!(state.page().index, 1);
}

#[test]
fn jumping_past_the_last_page_lands_on_it() {
    let state = run([Event::RecordsArrived(decade()), Event::JumpToPage(99)]);
    assert_eq!(state.page().index, 2);
}

// =============================================================================
// Failures and overlapping fetches
// =============================================================================

#[test]
fn failed_first_fetch_shows_message_and_empty_table() {
    let state = run([
        Event::FetchStarted,
        Event::FetchCompleted(Err(FetchError::schema())),
    ]);

    let view = state.view();
    assert!(view.rows.is_empty());
    assert_eq!(view.indicator(), "Page 1 of 1");
    assert_eq!(
        view.status.error_message(),
        Some("Unexpected API response format")
    );
}

#[test]
fn empty_table_ignores_paging() {
    let state = run([
        Event::RecordsArrived(Vec::new()),
        Event::NextPage,
        Event::JumpToPage(3),
        Event::SortBy(SortField::Revenue),
        Event::ApplyFilters,
    ]);

    assert_eq!(state.page().index, 1);
    assert_eq!(state.page_count(), 1);
    assert!(state.visible().is_empty());
}

#[test]
fn last_completion_wins_when_fetches_overlap() {
    // Given: two fetches started back to back
    let older = vec![record("2010-09-25", 65.2, 14.0)];
    let newer = decade();

    // When: the second one completes before the first
    let state = run([
        Event::FetchStarted,
        Event::FetchStarted,
        Event::FetchCompleted(Ok(FetchOutcome {
            records: newer,
            skipped: 0,
        })),
        Event::FetchCompleted(Ok(FetchOutcome {
            records: older.clone(),
            skipped: 1,
        })),
    ]);

    // Then: whichever arrived last is what the table shows
    assert_eq!(state.records(), older.as_slice());
    assert_eq!(state.status(), &FetchStatus::Ready { skipped: 1 });
}

#[test]
fn late_failure_overrides_status_but_keeps_loaded_rows() {
    let state = run([
        Event::FetchCompleted(Ok(FetchOutcome {
            records: decade(),
            skipped: 0,
        })),
        Event::FetchCompleted(Err(FetchError::status(502))),
    ]);

    assert_eq!(state.records().len(), 10);
    assert_eq!(
        state.status().error_message(),
        Some("API request failed with status 502")
    );
}

fn run_from(state: ViewState, events: impl IntoIterator<Item = Event>) -> ViewState {
    events.into_iter().fold(state, reduce)
}
