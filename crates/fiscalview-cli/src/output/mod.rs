mod table;

use std::any::Any;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};

use fiscalview_core::PageView;
use tracing::error;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub use self::table::render_table;

pub fn render(view: &PageView<'_>, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    guard(|| {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_view(&mut out, view, format, pretty)?;
        out.flush()?;
        Ok(())
    })
}

/// Runs a page render, turning panics and encoding failures into
/// [`CliError::Render`]. I/O errors pass through unchanged: a closed stdout is
/// not a rendering fault.
pub fn guard<F>(draw: F) -> Result<(), CliError>
where
    F: FnOnce() -> Result<(), CliError>,
{
    match panic::catch_unwind(AssertUnwindSafe(draw)) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(CliError::Io(io_error))) => Err(CliError::Io(io_error)),
        Ok(Err(cause)) => {
            error!(error = %cause, "page render failed");
            Err(CliError::Render)
        }
        Err(payload) => {
            error!(panic = panic_message(payload.as_ref()), "page render panicked");
            Err(CliError::Render)
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

pub fn write_view<W: Write>(
    out: &mut W,
    view: &PageView<'_>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(view)?
            } else {
                serde_json::to_string(view)?
            };
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Table => out.write_all(render_table(view).as_bytes())?,
    }

    Ok(())
}
