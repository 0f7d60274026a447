//! Emits the primes found by a [Sieve] as a plain-text report.
//!
//! The report has the following shape, one line per prime in increasing order, followed by a
//! blank line and a summary:
//!
//! ```text
//! 2 is prime.
//! 3 is prime.
//! 5 is prime.
//! 7 is prime.
//!
//! 4 primes found.
//! ```
#![deny(warnings)]

mod error;

use std::{
    fmt,
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use primes_sieve::Sieve;

pub use self::error::{ReportError, ReportErrorKind};

/// The name of the report file when none is provided
pub const DEFAULT_OUTPUT_FILE: &str = "primes.txt";

/// What was written by a successful report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    /// The number of primes listed in the report
    pub count: usize,
    /// The last prime listed in the report, if any were listed
    pub largest: Option<usize>,
    /// The file the report was written to, if it was written to a file
    pub path: Option<PathBuf>,
}

/// A report over the primes of a [Sieve]
#[derive(Debug, Copy, Clone)]
pub struct PrimeReport<'a> {
    sieve: &'a Sieve,
}

impl<'a> PrimeReport<'a> {
    pub fn new(sieve: &'a Sieve) -> Self {
        Self { sieve }
    }

    /// Write this report to `writer`, flushing it when done.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<ReportSummary> {
        write!(writer, "{self}")?;
        writer.flush()?;
        Ok(ReportSummary {
            count: self.sieve.count(),
            largest: self.sieve.largest(),
            path: None,
        })
    }

    /// Write this report to the file at `path`, creating it, or truncating it if it exists.
    ///
    /// Parent directories are not created. The file is closed before this returns, whether or
    /// not the report was written successfully.
    pub fn write_to_file(&self, path: &Path) -> Result<ReportSummary, ReportError> {
        log::debug!(target: "report", "opening '{}' for writing", path.display());
        let file = File::create(path).map_err(|source| ReportError::DestinationUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let summary =
            self.write_to(BufWriter::new(file)).map_err(|source| ReportError::WriteFailure {
                path: path.to_path_buf(),
                source,
            })?;

        log::info!(target: "report", "wrote {} primes to '{}'", summary.count, path.display());
        Ok(ReportSummary {
            path: Some(path.to_path_buf()),
            ..summary
        })
    }

    /// Render this report to a string, exactly as it would be written to a file
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PrimeReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut found = 0usize;
        for prime in self.sieve.primes() {
            writeln!(f, "{prime} is prime.")?;
            found += 1;
        }
        writeln!(f)?;
        writeln!(f, "{found} primes found.")
    }
}
