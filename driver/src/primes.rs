use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use clap::Parser;
use primes_report::{DEFAULT_OUTPUT_FILE, PrimeReport, ReportSummary};
use primes_sieve::{DEFAULT_BOUND, Sieve};

use crate::{DriverError, Verbosity};

/// This struct provides the command-line interface used by `primes`
#[derive(Debug, Parser)]
#[command(name = "primes")]
#[command(
    version,
    about = "Find every prime below a bound and write them to a file",
    long_about = None
)]
pub struct Primes {
    /// Every prime strictly less than this number is reported
    #[arg(value_name = "BOUND", env = "PRIMES_BOUND", default_value_t = DEFAULT_BOUND)]
    pub bound: usize,
    /// The file to write the report to
    ///
    /// Relative paths are resolved against the working directory. The file is truncated if it
    /// already exists.
    #[arg(
        long,
        short = 'o',
        value_name = "FILE",
        env = "PRIMES_OUTPUT",
        default_value = DEFAULT_OUTPUT_FILE,
        help_heading = "Output"
    )]
    pub output: PathBuf,
    /// The directory relative output paths are resolved against
    ///
    /// By default this is the directory `primes` is executed from
    #[arg(long, value_name = "DIR", help_heading = "Output")]
    pub working_dir: Option<PathBuf>,
    /// Specify what level of informational output to emit
    #[arg(
        long = "verbose",
        short = 'v',
        value_enum,
        value_name = "LEVEL",
        default_value_t = Verbosity::Warn,
        default_missing_value = "debug",
        num_args(0..=1),
        help_heading = "Diagnostics"
    )]
    pub verbosity: Verbosity,
}

impl Primes {
    /// Parse `args` and write the resulting report, relative to `cwd`
    pub fn run<P, A>(cwd: P, args: A) -> Result<ReportSummary, DriverError>
    where
        P: Into<PathBuf>,
        A: IntoIterator<Item = OsString>,
    {
        Self::parse_from_args(args)?.execute(cwd)
    }

    /// Parse `args`, where the first item is the program name
    pub fn parse_from_args<A>(args: A) -> Result<Self, DriverError>
    where
        A: IntoIterator<Item = OsString>,
    {
        let command = <Self as clap::CommandFactory>::command();
        let mut matches = command.try_get_matches_from(args)?;
        let primes = <Self as clap::FromArgMatches>::from_arg_matches_mut(&mut matches)
            .map_err(format_error::<Self>)?;
        Ok(primes)
    }

    /// The path the report will be written to, given `cwd` as the fallback working directory
    pub fn output_path(&self, cwd: &Path) -> PathBuf {
        let working_dir = self.working_dir.as_deref().unwrap_or(cwd);
        working_dir.join(&self.output)
    }

    /// Sieve up to the configured bound and write the report
    pub fn execute<P>(self, cwd: P) -> Result<ReportSummary, DriverError>
    where
        P: Into<PathBuf>,
    {
        let cwd = cwd.into();
        log::trace!(target: "driver", "current working directory = {}", cwd.display());

        let output = self.output_path(&cwd);
        log::debug!(target: "driver", "sieving below {} into '{}'", self.bound, output.display());

        let sieve = Sieve::new(self.bound);
        let summary = PrimeReport::new(&sieve).write_to_file(&output)?;
        Ok(summary)
    }
}

fn format_error<I: clap::CommandFactory>(err: clap::Error) -> clap::Error {
    let mut cmd = I::command();
    err.format(&mut cmd)
}
