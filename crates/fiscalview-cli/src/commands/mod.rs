mod browse;
mod show;

use std::process::ExitCode;

use fiscalview_core::{
    reduce, Event, FetchError, FmpSource, JsonFileSource, RecordSource, SourceConfig, Symbol,
    ViewState,
};
use tracing::info;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    let source = build_source(cli)?;
    info!(source = %source.describe(), "record source selected");

    match &cli.command {
        Command::Show(args) => show::run(args, source.as_ref(), cli.format, cli.pretty).await,
        Command::Browse => browse::run(source.as_ref(), cli.format, cli.pretty).await,
    }
}

fn build_source(cli: &Cli) -> Result<Box<dyn RecordSource>, CliError> {
    let symbol = Symbol::parse(&cli.symbol)?;

    if let Some(path) = &cli.input {
        return Ok(Box::new(JsonFileSource::new(path.clone())));
    }

    let config = SourceConfig::from_env()
        .with_symbol(symbol)
        .with_timeout_ms(cli.timeout_ms);
    Ok(Box::new(FmpSource::new(config)))
}

/// Runs one fetch through the reducer. The error is handed back as well so
/// callers can choose an exit code.
async fn load(state: ViewState, source: &dyn RecordSource) -> (ViewState, Option<FetchError>) {
    let state = reduce(state, Event::FetchStarted);
    let result = source.fetch().await;
    let failure = result.as_ref().err().cloned();
    (reduce(state, Event::FetchCompleted(result)), failure)
}
