//! File-size distribution: summary statistics and fixed-count binning.
//!
//! Bins are `ceil((max - min + 1) / bin_count)` wide and start at `min`.
//! Values past the last bin's nominal end are clamped into it. The width is
//! rounded up, so the upper bins can stay empty: `max` only lands in the last
//! bin when the range divides evenly enough.

use std::num::NonZeroUsize;

use serde::Serialize;

/// Default number of bins.
pub const DEFAULT_BINS: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bin {
    /// Inclusive lower bound.
    pub start: f64,
    /// Exclusive upper bound.
    pub end: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub summary: Summary,
    pub bins: Vec<Bin>,
}

/// Returns `None` for an empty slice.
pub fn summarize(sizes: &[f64]) -> Option<Summary> {
    if sizes.is_empty() {
        return None;
    }
    let min = sizes.iter().copied().fold(f64::INFINITY, f64::min);
    let max = sizes.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let avg = sizes.iter().sum::<f64>() / sizes.len() as f64;
    Some(Summary {
        min,
        max,
        avg,
        count: sizes.len(),
    })
}

/// Width of each bin for values spanning `min..=max`.
pub fn bin_size(min: f64, max: f64, bin_count: NonZeroUsize) -> f64 {
    ((max - min + 1.0) / bin_count.get() as f64).ceil()
}

/// Index of the bin `size` falls into, clamped to the last bin.
pub fn bin_index(size: f64, min: f64, bin_size: f64, bin_count: NonZeroUsize) -> usize {
    let idx = ((size - min) / bin_size).floor() as usize;
    idx.min(bin_count.get() - 1)
}

/// Bin `sizes` into `bin_count` equal-width buckets. `None` for an empty slice.
pub fn histogram(sizes: &[f64], bin_count: NonZeroUsize) -> Option<Histogram> {
    let summary = summarize(sizes)?;
    let Summary { min, max, .. } = summary;

    let width = bin_size(min, max, bin_count);
    let mut counts = vec![0usize; bin_count.get()];
    for &size in sizes {
        counts[bin_index(size, min, width, bin_count)] += 1;
    }
    let bin_count = bin_count.get();

    let start = |i: usize| min + i as f64 * width;
    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| Bin {
            start: start(i),
            end: if i + 1 < bin_count {
                start(i + 1)
            } else {
                max + 1.0
            },
            count,
        })
        .collect();

    Some(Histogram { summary, bins })
}
