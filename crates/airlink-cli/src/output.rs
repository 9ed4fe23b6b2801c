//! Output formatting for command results.
//!
//! Every command builds a serialisable summary from the library and hands it
//! here together with its plain-text rendering.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Write `value` to stdout in this format. `plain` is used for text output.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization or writing fails.
    pub fn emit<T: Serialize>(self, value: &T, plain: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout, value, plain)
    }

    /// Same as [`OutputFormat::emit`] but writing to any sink.
    pub fn write_to<W: Write, T: Serialize>(
        self,
        writer: &mut W,
        value: &T,
        plain: &str,
    ) -> io::Result<()> {
        match self {
            OutputFormat::Text => writer.write_all(plain.as_bytes()),
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *writer, value).map_err(io::Error::other)?;
                writer.write_all(b"\n")
            }
        }
    }
}
