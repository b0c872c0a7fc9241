//! bilinear - run a bilinear layer on two random batches and print the
//! output shape.
//!
//! stdout carries exactly two lines, the output `size` and `shape`; logs go
//! to stderr.

use std::io::{self, Write};

use anyhow::{Context, Result};
use bl_nn::{Bilinear, BilinearConfig, PairwiseModule};
use bl_tensor::{CpuBackend, Tensor};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Apply `y = x1ᵗ A x2 + b` to random inputs and report the output shape.
#[derive(Parser, Debug)]
#[command(name = "bilinear")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of samples in each input batch
    #[arg(short = 'n', long, default_value_t = 128)]
    batch: usize,

    /// Features per sample of the first input
    #[arg(long, default_value_t = 20)]
    in1: usize,

    /// Features per sample of the second input
    #[arg(long, default_value_t = 30)]
    in2: usize,

    /// Output channels
    #[arg(long, default_value_t = 40)]
    out: usize,

    /// RNG seed; fresh entropy when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Disable the additive bias
    #[arg(long)]
    no_bias: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> BilinearConfig {
        BilinearConfig::new(self.in1, self.in2, self.out).with_bias(!self.no_bias)
    }
}

/// Builds the layer and inputs, runs the forward pass and returns the
/// output tensor.
fn run(args: &Args) -> Result<Tensor> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let backend = CpuBackend::new();

    let layer = Bilinear::new(args.config(), &mut rng).context("Failed to build bilinear layer")?;
    info!("{} ({} parameters)", layer, layer.num_parameters());

    let input1 = Tensor::randn([args.batch, args.in1], &mut rng);
    let input2 = Tensor::randn([args.batch, args.in2], &mut rng);
    debug!(input1 = %input1.shape(), input2 = %input2.shape(), "sampled inputs");

    layer
        .forward(&input1, &input2, &backend)
        .context("Bilinear forward pass failed")
}

fn report(out: &mut impl Write, output: &Tensor) -> io::Result<()> {
    writeln!(out, "size: {}", output.size())?;
    writeln!(out, "shape: {}", output.shape())
}

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose)?;

    let output = run(&args)?;
    debug!(numel = output.numel(), "forward complete");

    report(&mut io::stdout().lock(), &output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("bilinear").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_default_args() {
        let args = parse(&[]);
        assert_eq!((args.batch, args.in1, args.in2, args.out), (128, 20, 30, 40));
        assert!(args.config().bias);
        assert!(args.seed.is_none());
    }

    #[test]
    fn test_default_run_shape() {
        let output = run(&parse(&["--seed", "0"])).unwrap();
        assert_eq!(output.shape().dims(), &[128, 40]);
    }

    #[test]
    fn test_report_prints_identical_lines() {
        let output = run(&parse(&["--seed", "3", "-n", "4", "--no-bias"])).unwrap();
        let mut buf = Vec::new();
        report(&mut buf, &output).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "size: [4, 40]\nshape: [4, 40]\n");
    }

    #[test]
    fn test_seeded_runs_match() {
        let args = parse(&["--seed", "11", "-n", "8", "--in1", "3", "--in2", "2", "--out", "5"]);
        assert_eq!(run(&args).unwrap(), run(&args).unwrap());
    }

    #[test]
    fn test_zero_features_error() {
        let err = run(&parse(&["--out", "0"])).unwrap_err();
        assert!(format!("{:#}", err).contains("out_features"));
    }
}
