use std::process::ExitCode;

use fiscalview_core::{
    reduce, Event, FetchError, FilterBound, FilterEdit, RecordSource, SortField, ViewState,
};

use crate::cli::{OutputFormat, ShowArgs};
use crate::error::CliError;
use crate::output;

use super::load;

pub async fn run(
    args: &ShowArgs,
    source: &dyn RecordSource,
    format: OutputFormat,
    pretty: bool,
) -> Result<ExitCode, CliError> {
    let (state, failure) = session(args, source).await?;
    output::render(&state.view(), format, pretty)?;

    match failure {
        Some(error) => Err(CliError::Fetch(error)),
        None => Ok(ExitCode::SUCCESS),
    }
}

/// Replays the flags as the events a user would produce: load, type the
/// bounds, press apply, click headers, then page.
async fn session(
    args: &ShowArgs,
    source: &dyn RecordSource,
) -> Result<(ViewState, Option<FetchError>), CliError> {
    let sorts = args
        .sorts
        .iter()
        .map(|raw| raw.parse::<SortField>())
        .collect::<Result<Vec<_>, _>>()?;

    let (mut state, failure) = load(ViewState::new(), source).await;

    let edits = filter_edits(args);
    if !edits.is_empty() {
        for edit in edits {
            state = reduce(state, Event::EditFilter(edit));
        }
        state = reduce(state, Event::ApplyFilters);
    }

    for field in sorts {
        state = reduce(state, Event::SortBy(field));
    }

    Ok((reduce(state, Event::JumpToPage(args.page)), failure))
}

fn filter_edits(args: &ShowArgs) -> Vec<FilterEdit> {
    [
        (FilterBound::StartDate, &args.start_date),
        (FilterBound::EndDate, &args.end_date),
        (FilterBound::MinRevenue, &args.min_revenue),
        (FilterBound::MaxRevenue, &args.max_revenue),
        (FilterBound::MinNetIncome, &args.min_net_income),
        (FilterBound::MaxNetIncome, &args.max_net_income),
    ]
    .into_iter()
    .filter_map(|(bound, raw)| raw.as_deref().map(|input| FilterEdit::from_input(bound, input)))
    .collect()
}
