use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::Error;

#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One password per line
    Text,
    /// A JSON object with the request shape and the passwords
    Json,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    length: usize,
    count: usize,
    passwords: &'a [String],
}

/// Writes the generated passwords in the requested format, followed by a
/// trailing line separator.
pub fn write_passwords<W: Write>(
    mut out: W,
    format: OutputFormat,
    length: usize,
    passwords: &[String],
) -> Result<(), Error> {
    match format {
        OutputFormat::Text => {
            if !passwords.is_empty() {
                out.write_all(passwords.join(LINE_SEPARATOR).as_bytes())?;
                out.write_all(LINE_SEPARATOR.as_bytes())?;
            }
        }
        OutputFormat::Json => {
            let report = Report { length, count: passwords.len(), passwords };
            serde_json::to_writer(&mut out, &report)?;
            out.write_all(LINE_SEPARATOR.as_bytes())?;
        }
    }
    out.flush()?;
    Ok(())
}
