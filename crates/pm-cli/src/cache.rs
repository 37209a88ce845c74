use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use log::info;
use pm_engine::{SequentialMultiplier, ThreadedMultiplier};
use pm_matrix::Matrix;

use crate::fill::{fill_pair, rng};
use crate::timing::timed_multiply;

#[derive(Args, Debug)]
pub struct CliArgs {
    /// Edge length of the square matrices.
    #[arg(long, default_value_t = 1000)]
    pub edge: usize,

    /// Store A column-major and B row-major, so the inner loop strides
    /// through memory instead of walking it.
    #[arg(long)]
    pub unfriendly: bool,

    /// File receiving the operands, the product and the timing.
    #[arg(short, long, default_value = "matrix_result.txt")]
    pub output: PathBuf,

    /// Seed of the random fill. Defaults to OS entropy.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Multiply on this many threads instead of on the calling thread. Pass
    /// the flag without a value to use one thread per available core.
    #[arg(long, num_args = 0..=1, default_missing_value = "0")]
    pub threads: Option<usize>,
}

/// Times one multiply of random square matrices, sequential unless
/// `--threads` is given.
///
/// A starts row-major and B column-major, which keeps both operands' inner
/// loop contiguous. `--unfriendly` reinterprets both before filling, so the
/// same random values land in the opposite layouts.
pub fn main(args: CliArgs) -> Result<Duration> {
    let file = File::create(&args.output)
        .with_context(|| format!("Could not create {}", args.output.display()))?;
    let mut out = BufWriter::new(file);

    let mut a = Matrix::<i32>::row_major(args.edge, args.edge);
    let mut b = Matrix::<i32>::column_major(args.edge, args.edge);
    if args.unfriendly {
        a.reinterpret_as_column_major();
        b.reinterpret_as_row_major();
    }

    info!("Generating matrices...");
    fill_pair(&mut a, &mut b, &mut rng(args.seed))?;
    write!(out, "[MATRIX A]\n{}\n[MATRIX B]\n{}", a, b)?;

    let (c, elapsed) = match args.threads {
        None => timed_multiply(&SequentialMultiplier::new(), &a, &b)?,
        Some(0) => timed_multiply(&ThreadedMultiplier::default(), &a, &b)?,
        Some(workers) => timed_multiply(&ThreadedMultiplier::new(workers), &a, &b)?,
    };

    write!(
        out,
        "\n[MATRIX C]\n{}\nFinished in {:.6} seconds.\n",
        c,
        elapsed.as_secs_f64()
    )?;
    out.flush()
        .with_context(|| format!("Could not write {}", args.output.display()))?;
    Ok(elapsed)
}
