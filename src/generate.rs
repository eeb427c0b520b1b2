//! Random value generators.
//!
//! Both generators walk the input mapping in order and draw fresh values per
//! key; the original values are never looked at. Callers pass the RNG so the
//! CLI can use the thread-local generator and tests can seed one.

use rand::Rng;

use crate::metadata::{LabelMetadata, RawMetadata, ScatterMetadata};

/// Longest label list produced for a single identifier.
pub const MAX_LABELS: usize = 3;
/// Largest label value (labels are single digits).
pub const MAX_LABEL: u8 = 9;

/// 0..=3 labels, each a digit in 0..=9.
pub fn label_list<R: Rng>(rng: &mut R) -> Vec<u8> {
    let len = rng.random_range(0..=MAX_LABELS);
    (0..len).map(|_| rng.random_range(0..=MAX_LABEL)).collect()
}

/// Uniform `[x, y]` with both coordinates in `[0, 1)`.
pub fn scatter_point<R: Rng>(rng: &mut R) -> [f64; 2] {
    [rng.random::<f64>(), rng.random::<f64>()]
}

pub fn label_lists<R: Rng>(input: &RawMetadata, rng: &mut R) -> LabelMetadata {
    input
        .keys()
        .map(|key| (key.clone(), label_list(rng)))
        .collect()
}

/// One random point per identifier. The file size stored under each key
/// does not feed either axis.
pub fn scatter_points<R: Rng>(input: &RawMetadata, rng: &mut R) -> ScatterMetadata {
    input
        .keys()
        .map(|key| (key.clone(), scatter_point(rng)))
        .collect()
}
