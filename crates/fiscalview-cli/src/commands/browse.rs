//! Interactive session over stdin.
//!
//! Each line is one user action. Navigation, sorting, applying filters and
//! reloading redraw the page; `set`/`clear` only stage a filter edit until
//! the next `apply`, matching the filter boxes of the table UI.

use std::io::{self, Write};
use std::process::ExitCode;

use fiscalview_core::{reduce, Event, FilterBound, FilterEdit, RecordSource, SortField, ViewState};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::{guard, write_view};

use super::load;

const HELP: &str = "\
commands:
  next | prev             move one page
  page <n>                jump to page n
  sort <field>            click a header: date, revenue, net-income
  set <bound> <value>     stage a filter bound
  clear <bound>           stage removal of a filter bound
  apply                   filter the loaded rows with the staged bounds
  reload                  fetch again
  show                    redraw the current page
  help                    this text
  quit
bounds: start-date end-date min-revenue max-revenue min-net-income max-net-income";

#[derive(Debug, PartialEq)]
enum Action {
    Apply(Event),
    Stage(FilterEdit),
    Reload,
    Show,
    Help,
    Quit,
}

fn parse_action(line: &str) -> Result<Option<Action>, CliError> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };

    let action = match command.to_ascii_lowercase().as_str() {
        "next" | "n" => Action::Apply(Event::NextPage),
        "prev" | "previous" | "p" => Action::Apply(Event::PreviousPage),
        "page" => {
            let raw = words.next().unwrap_or_default();
            let index = raw
                .parse::<usize>()
                .map_err(|_| CliError::Usage(format!("page expects a number, got `{raw}`")))?;
            Action::Apply(Event::JumpToPage(index))
        }
        "sort" => {
            let field = words.next().unwrap_or_default().parse::<SortField>()?;
            Action::Apply(Event::SortBy(field))
        }
        "set" => {
            let bound = words.next().unwrap_or_default().parse::<FilterBound>()?;
            let value = words.collect::<Vec<_>>().join(" ");
            Action::Stage(FilterEdit::from_input(bound, &value))
        }
        "clear" => {
            let bound = words.next().unwrap_or_default().parse::<FilterBound>()?;
            Action::Stage(FilterEdit::clear(bound))
        }
        "apply" => Action::Apply(Event::ApplyFilters),
        "reload" => Action::Reload,
        "show" => Action::Show,
        "help" | "?" => Action::Help,
        "quit" | "exit" | "q" => Action::Quit,
        other => return Err(CliError::Usage(format!("unknown command `{other}`, try help"))),
    };
    Ok(Some(action))
}

struct Session<'a> {
    source: &'a dyn RecordSource,
    state: ViewState,
    format: OutputFormat,
    pretty: bool,
}

impl<'a> Session<'a> {
    fn new(source: &'a dyn RecordSource, format: OutputFormat, pretty: bool) -> Self {
        Self {
            source,
            state: ViewState::new(),
            format,
            pretty,
        }
    }

    async fn reload(&mut self) {
        let state = std::mem::take(&mut self.state);
        let (state, _) = load(state, self.source).await;
        self.state = state;
    }

    fn draw<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        guard(|| write_view(out, &self.state.view(), self.format, self.pretty))
    }

    /// Returns `false` once the user quits.
    async fn step<W: Write>(&mut self, action: Action, out: &mut W) -> Result<bool, CliError> {
        match action {
            Action::Apply(event) => {
                self.state = reduce(std::mem::take(&mut self.state), event);
                self.draw(out)?;
            }
            Action::Stage(edit) => {
                debug!(bound = %edit.bound(), "staged filter edit");
                self.state = reduce(std::mem::take(&mut self.state), Event::EditFilter(edit));
                writeln!(out, "{} staged, type apply to filter", edit.bound())?;
            }
            Action::Reload => {
                self.reload().await;
                self.draw(out)?;
            }
            Action::Show => self.draw(out)?,
            Action::Help => writeln!(out, "{HELP}")?,
            Action::Quit => return Ok(false),
        }
        Ok(true)
    }
}

pub async fn run(
    source: &dyn RecordSource,
    format: OutputFormat,
    pretty: bool,
) -> Result<ExitCode, CliError> {
    let mut session = Session::new(source, format, pretty);
    let stdout = io::stdout();

    session.reload().await;
    session.draw(&mut stdout.lock())?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if format == OutputFormat::Table {
            let mut out = stdout.lock();
            write!(out, "> ")?;
            out.flush()?;
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let action = match parse_action(&line) {
            Ok(Some(action)) => action,
            Ok(None) => continue,
            Err(error) => {
                eprintln!("error: {error}");
                continue;
            }
        };

        let mut out = Vec::new();
        let keep_going = session.step(action, &mut out).await?;
        stdout.lock().write_all(&out)?;
        if !keep_going {
            break;
        }
    }

    Ok(ExitCode::SUCCESS)
}
