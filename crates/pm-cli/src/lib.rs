//! Command line driver for parmul.
//!
//! Everything here sits outside the computational core: argument parsing,
//! random fills, timing, and dumping matrices to the console or a file. The
//! core is reached only through matrix construction, element access and the
//! `pm-engine` multiplication strategies.

use std::ffi::OsString;
use std::io::Write;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod cache;
pub mod demo;
pub mod fill;
pub mod threaded;
pub mod timing;

#[derive(Parser, Debug)]
#[command(name = "parmul", version, about = "Dense matrix multiplication benchmarks")]
pub struct Cli {
    #[command(subcommand)]
    pub command: SubCommands,
}

#[derive(Subcommand, Debug)]
pub enum SubCommands {
    /// Multiplies two random square matrices on a fixed number of threads.
    Threaded(threaded::CliArgs),
    /// Times one multiply with cache-friendly or unfriendly layouts.
    Cache(cache::CliArgs),
    /// Prints the product of a small fixed 2x3 and 3x2 pair.
    Demo,
}

/// Initializes `env_logger` with an `info` default filter, tagging each
/// record with the emitting thread.
pub fn init_env_logger() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{:?}] {} - {}",
            record.level(),
            std::thread::current().id(),
            record.target(),
            record.args()
        )
    });
    builder.init();
}

/// Parses `args` and runs the selected subcommand, writing console output to
/// `out`.
pub fn main<I, T>(args: I, out: &mut impl Write) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    match cli.command {
        SubCommands::Threaded(args) => threaded::main(args, out).map(|_| ()),
        SubCommands::Cache(args) => cache::main(args).map(|_| ()),
        SubCommands::Demo => demo::main(out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_subcommand() {
        let mut out = Vec::new();
        main(["parmul", "demo"], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "58, 64\n139, 154\n");
    }

    #[test]
    fn test_threaded_subcommand() {
        let mut out = Vec::new();
        main(["parmul", "threaded", "5", "3", "--check"], &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_cache_threads_flag() {
        let cli = Cli::try_parse_from(["parmul", "cache", "--threads"]).unwrap();
        let SubCommands::Cache(args) = cli.command else {
            panic!("expected the cache subcommand");
        };
        assert_eq!(args.threads, Some(0));

        let cli = Cli::try_parse_from(["parmul", "cache", "--threads", "3"]).unwrap();
        let SubCommands::Cache(args) = cli.command else {
            panic!("expected the cache subcommand");
        };
        assert_eq!(args.threads, Some(3));
        assert_eq!(args.edge, 1000);
    }

    #[test]
    fn test_rejects_bad_numbers() {
        let mut out = Vec::new();
        assert!(main(["parmul", "threaded", "five", "3"], &mut out).is_err());
        assert!(main(["parmul", "threaded", "5"], &mut out).is_err());
    }
}
