pub mod decompress;
pub mod error;
pub mod generate;
pub mod histogram;
pub mod input;
pub mod metadata;
pub mod output;

use std::num::NonZeroUsize;
use std::path::Path;

use rand::Rng;

pub use error::{Error, Result};
use output::OutputConfig;

/// Default input for `labels`.
pub const LABELS_INPUT: &str = "train_label_metadata.json";
/// Default output for `labels`.
pub const LABELS_OUTPUT: &str = "new_train_label_metadata.json";
/// Default input for `scatter` and `histogram`.
pub const SCATTER_INPUT: &str = "train_metadata.json";
/// Default output for `scatter`.
pub const SCATTER_OUTPUT: &str = "scatter_data_random.json";

/// Load `input`, draw 0–3 digit labels per identifier, write to `output`.
///
/// Returns the number of identifiers written. Nothing is written if loading
/// fails.
pub fn run_labels<R: Rng>(
    input: &Path,
    output: &Path,
    config: &OutputConfig,
    rng: &mut R,
) -> Result<usize> {
    let metadata = input::load_metadata(input)?;
    let labels = generate::label_lists(&metadata, rng);
    output::write_metadata(output, &labels, config)?;
    Ok(labels.len())
}

/// Load `input`, draw a random `[x, y]` point per identifier, write to
/// `output`.
pub fn run_scatter<R: Rng>(
    input: &Path,
    output: &Path,
    config: &OutputConfig,
    rng: &mut R,
) -> Result<usize> {
    let metadata = input::load_metadata(input)?;
    let points = generate::scatter_points(&metadata, rng);
    output::write_metadata(output, &points, config)?;
    Ok(points.len())
}

/// Summarize and bin the file sizes stored in `input`.
///
/// `bins` of zero is rejected before the file is read.
pub fn run_histogram(input: &Path, bins: usize) -> Result<histogram::Histogram> {
    let bins = NonZeroUsize::new(bins).ok_or(Error::InvalidBins)?;
    let sizes: Vec<f64> = input::load_file_sizes(input)?
        .into_iter()
        .map(|(_, size)| size)
        .collect();
    histogram::histogram(&sizes, bins).ok_or_else(|| Error::Empty {
        path: input.to_path_buf(),
    })
}
