//! Command-line front end for [`pwgen_generator`].
//!
//! Reads options from flags or `PWGEN_*` environment variables, caps length and
//! count at their maxima, and prints the generated passwords as text or JSON.

pub mod args;
pub mod error;
pub mod output;

use std::io::Write;

pub use args::Args;
pub use error::Error;
pub use output::{LINE_SEPARATOR, OutputFormat, write_passwords};

/// Generates passwords for `args` and writes them to `out`.
pub async fn run<W: Write>(args: &Args, out: W) -> Result<(), Error> {
    let request = args.request();
    let length = request.length;

    let passwords = pwgen_generator::generate_async(request).await?;
    tracing::info!(count = passwords.len(), length, "generated passwords");

    write_passwords(out, args.format, length, &passwords)
}
