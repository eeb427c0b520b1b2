//! Metadata loading: read, BOM stripping, JSON parsing, envelope extraction.

use std::path::Path;

use serde_json::Value;

use crate::decompress;
use crate::error::{Error, Result};
use crate::metadata::RawMetadata;

/// Strip UTF-8 BOM (U+FEFF, bytes EF BB BF) from the beginning of a buffer.
fn strip_bom(buf: &[u8]) -> &[u8] {
    buf.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(buf)
}

/// Read `path` and return the object under its top-level `metadata` field.
///
/// Values are kept opaque; callers only care about the key set.
pub fn load_metadata(path: &Path) -> Result<RawMetadata> {
    let buf = decompress::read_file(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let metadata = parse_metadata(strip_bom(&buf), path)?;
    tracing::debug!(path = %path.display(), entries = metadata.len(), "loaded metadata");
    Ok(metadata)
}

/// Like [`load_metadata`], but every value must be a number (a file size).
pub fn load_file_sizes(path: &Path) -> Result<Vec<(String, f64)>> {
    load_metadata(path)?
        .into_iter()
        .map(|(key, value)| match value.as_f64() {
            Some(size) => Ok((key, size)),
            None => Err(Error::Schema {
                path: path.to_path_buf(),
                reason: format!("file size for `{key}` is not a number: {value}"),
            }),
        })
        .collect()
}

fn parse_metadata(buf: &[u8], path: &Path) -> Result<RawMetadata> {
    let schema = |reason: &str| Error::Schema {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    };

    let doc: Value = serde_json::from_slice(buf).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let Value::Object(mut root) = doc else {
        return Err(schema("top-level value is not an object"));
    };
    match root.remove("metadata") {
        Some(Value::Object(metadata)) => Ok(metadata),
        Some(other) => Err(schema(&format!(
            "`metadata` is {} rather than an object",
            type_name(&other)
        ))),
        None => Err(schema("missing `metadata` field")),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
