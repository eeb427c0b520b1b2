use anyhow::{Context, Result};
use clap::builder::TypedValueParser;
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use metagen::output::OutputConfig;

#[derive(Parser)]
#[command(
    name = "metagen",
    about = "Generate placeholder label and scatter-plot datasets from metadata files",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replace every identifier's value with 0–3 random digits
    Labels {
        /// Metadata file to read identifiers from
        #[arg(short, long, default_value = metagen::LABELS_INPUT)]
        input: PathBuf,

        /// File to write the generated labels to (overwritten)
        #[arg(short, long, default_value = metagen::LABELS_OUTPUT)]
        output: PathBuf,

        /// Compact output (no pretty-printing)
        #[arg(short = 'c', long)]
        compact: bool,

        /// Number of spaces for indentation
        #[arg(long, default_value_t = 4, conflicts_with = "compact")]
        indent: usize,

        #[command(flatten)]
        gen_args: GenArgs,
    },

    /// Replace every identifier's value with a random [x, y] point in [0, 1)
    Scatter {
        /// Metadata file mapping identifiers to file sizes
        #[arg(short, long, default_value = metagen::SCATTER_INPUT)]
        input: PathBuf,

        /// File to write the generated points to (overwritten)
        #[arg(short, long, default_value = metagen::SCATTER_OUTPUT)]
        output: PathBuf,

        /// Pretty-print the output
        #[arg(short = 'p', long)]
        pretty: bool,

        /// Number of spaces for indentation (with --pretty)
        #[arg(long, default_value_t = 4, requires = "pretty")]
        indent: usize,

        #[command(flatten)]
        gen_args: GenArgs,
    },

    /// Print a file-size summary and histogram as JSON
    Histogram {
        /// Metadata file mapping identifiers to file sizes
        #[arg(short, long, default_value = metagen::SCATTER_INPUT)]
        input: PathBuf,

        /// Number of bins
        #[arg(long, default_value_t = metagen::histogram::DEFAULT_BINS,
              value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
        bins: usize,
    },
}

#[derive(Args)]
struct GenArgs {
    /// Seed the random generator for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

impl GenArgs {
    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("METAGEN_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Labels {
            input,
            output,
            compact,
            indent,
            gen_args,
        } => {
            let config = if compact {
                OutputConfig::compact()
            } else {
                OutputConfig::pretty(indent)
            };
            let count = metagen::run_labels(&input, &output, &config, &mut gen_args.rng())
                .with_context(|| format!("failed to generate labels from {}", input.display()))?;
            tracing::info!(entries = count, "labels generated");
            println!("Generated label metadata: {}", output.display());
        }
        Command::Scatter {
            input,
            output,
            pretty,
            indent,
            gen_args,
        } => {
            let config = if pretty {
                OutputConfig::pretty(indent)
            } else {
                OutputConfig::compact()
            };
            let count = metagen::run_scatter(&input, &output, &config, &mut gen_args.rng())
                .with_context(|| {
                    format!("failed to generate scatter data from {}", input.display())
                })?;
            tracing::info!(entries = count, "scatter points generated");
            println!("Scatter plot data has been generated and saved to {}", output.display());
        }
        Command::Histogram { input, bins } => {
            let histogram = metagen::run_histogram(&input, bins)
                .with_context(|| format!("failed to build histogram from {}", input.display()))?;
            let mut out = BufWriter::new(io::stdout().lock());
            metagen::output::write_json(&mut out, &histogram, &OutputConfig::pretty(2))
                .context("failed to write histogram")?;
            out.flush()?;
        }
    }

    Ok(())
}
