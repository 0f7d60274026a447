use std::{io, path::PathBuf};

/// The ways in which emitting a prime report can fail
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The output file could not be created or opened for writing
    #[error("cannot open output file '{}': {source}", .path.display())]
    DestinationUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// An I/O error occurred after the output file was opened. Any output flushed before the
    /// failure is left in place.
    #[error("failed writing to '{}': {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The payload-free discriminant of a [ReportError]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReportErrorKind {
    DestinationUnavailable,
    WriteFailure,
}

impl ReportError {
    pub fn kind(&self) -> ReportErrorKind {
        match self {
            Self::DestinationUnavailable { .. } => ReportErrorKind::DestinationUnavailable,
            Self::WriteFailure { .. } => ReportErrorKind::WriteFailure,
        }
    }

    /// The output path the failed report was destined for
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::DestinationUnavailable { path, .. } | Self::WriteFailure { path, .. } => path,
        }
    }
}
