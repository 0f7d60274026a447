use primes_report::ReportError;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// The command line could not be parsed, or help/version output was requested
    #[error(transparent)]
    Usage(#[from] clap::Error),
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl DriverError {
    /// The process exit code this error should terminate with
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(err) => err.exit_code(),
            Self::Report(_) => 1,
        }
    }

    /// Print this error to stderr, or stdout for help and version requests
    pub fn print(&self) {
        match self {
            Self::Usage(err) => {
                if err.print().is_err() {
                    eprintln!("{err}");
                }
            }
            Self::Report(err) => eprintln!("error: {err}"),
        }
    }
}
