//! Commands module - CLI command implementations.

pub mod instructor;
pub mod migrate;
pub mod serve;
pub mod student;

use std::io::{self, BufRead, Write};

use serde::Serialize;

use common::{AppError, AppResult};

use crate::cli::OutputFormat;
use crate::table::Table;

pub(crate) fn io_error(err: io::Error) -> AppError {
    AppError::internal(format!("Terminal I/O failed: {}", err))
}

/// Print records either as a table or as pretty JSON.
pub(crate) fn emit<T: Serialize + ?Sized>(
    out: &mut impl Write,
    format: OutputFormat,
    table: Table,
    json: &T,
) -> AppResult<()> {
    match format {
        OutputFormat::Table => write!(out, "{}", table).map_err(io_error),
        OutputFormat::Json => {
            let body = serde_json::to_string_pretty(json)
                .map_err(|e| AppError::internal(format!("JSON encoding failed: {}", e)))?;
            writeln!(out, "{}", body).map_err(io_error)
        }
    }
}

/// Ask a yes/no question. Anything but `y`/`yes` is a no.
pub(crate) fn confirm(
    question: &str,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> AppResult<bool> {
    write!(out, "{} [y/N] ", question).map_err(io_error)?;
    out.flush().map_err(io_error)?;

    let mut answer = String::new();
    input.read_line(&mut answer).map_err(io_error)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}
