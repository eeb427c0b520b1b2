/// Metadata document output.
///
/// Wraps a generated mapping in the `{"metadata": ...}` envelope and
/// serializes it straight into a buffered file writer, with no intermediate
/// `String`.
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::metadata::{Entries, MetadataDocument};

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Indented, one entry per line, trailing newline.
    Pretty,
    /// Single line, no whitespace, no trailing newline.
    Compact,
}

/// Configuration for output formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub mode: OutputMode,
    /// Indentation string for `Pretty` (ignored for `Compact`).
    pub indent: String,
}

impl OutputConfig {
    pub fn pretty(indent: usize) -> Self {
        Self {
            mode: OutputMode::Pretty,
            indent: " ".repeat(indent),
        }
    }

    pub fn compact() -> Self {
        Self {
            mode: OutputMode::Compact,
            indent: String::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::pretty(4)
    }
}

/// Serialize any value to `out` using `config`.
///
/// Serializer failures surface as `io::Error`; the only way serializing a
/// generated mapping fails is the sink itself failing.
pub fn write_json<W: Write, T: Serialize + ?Sized>(
    out: &mut W,
    value: &T,
    config: &OutputConfig,
) -> io::Result<()> {
    match config.mode {
        OutputMode::Compact => serde_json::to_writer(&mut *out, value).map_err(io::Error::from),
        OutputMode::Pretty => {
            let formatter = serde_json::ser::PrettyFormatter::with_indent(config.indent.as_bytes());
            let mut ser = serde_json::Serializer::with_formatter(&mut *out, formatter);
            value.serialize(&mut ser).map_err(io::Error::from)?;
            out.write_all(b"\n")
        }
    }
}

/// Write `{"metadata": {<id>: <value>, ...}}` to `path`, replacing any
/// existing file.
pub fn write_metadata<V: Serialize>(
    path: &Path,
    entries: &[(String, V)],
    config: &OutputConfig,
) -> Result<()> {
    let write_err = |source: io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut out = BufWriter::with_capacity(128 * 1024, file);
    write_json(&mut out, &MetadataDocument::new(Entries(entries)), config).map_err(write_err)?;
    out.flush().map_err(write_err)?;

    tracing::debug!(
        path = %path.display(),
        entries = entries.len(),
        mode = ?config.mode,
        "wrote metadata"
    );
    Ok(())
}
