//! The driver for `primes`: argument handling, sieving and report emission.
#![deny(warnings)]

mod error;
mod primes;
mod verbosity;

pub use primes_report::{ReportError, ReportErrorKind, ReportSummary};

pub use self::{error::DriverError, primes::Primes, verbosity::Verbosity};
