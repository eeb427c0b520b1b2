/// Document envelope shared by every input and output file.
///
/// Both sides are `{"metadata": {<id>: <value>, ...}}`. Key order follows the
/// input file (serde_json is built with `preserve_order`), so regenerated
/// outputs diff cleanly against each other.
use serde::{Deserialize, Serialize};

/// Input mapping with opaque values, as loaded from disk.
pub type RawMetadata = serde_json::Map<String, serde_json::Value>;

/// Output of the label generator: 0–3 digits per identifier.
pub type LabelMetadata = Vec<(String, Vec<u8>)>;

/// Output of the scatter generator: one `[x, y]` point per identifier.
pub type ScatterMetadata = Vec<(String, [f64; 2])>;

/// `{"metadata": ...}` wrapper used for both reading and writing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataDocument<M> {
    pub metadata: M,
}

impl<M> MetadataDocument<M> {
    pub fn new(metadata: M) -> Self {
        Self { metadata }
    }
}

/// Serializes an ordered list of entries as a JSON object.
///
/// Generators produce `Vec<(String, V)>` rather than a map so the output
/// keeps input order without requiring `V: Into<serde_json::Value>`.
#[derive(Debug, Clone, Copy)]
pub struct Entries<'a, V>(pub &'a [(String, V)]);

impl<V: Serialize> Serialize for Entries<'_, V> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
