/// The amount of informational output to emit
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Verbosity {
    /// Emit nothing
    Silent,
    Error,
    /// Only warnings and errors
    #[default]
    Warn,
    Info,
    Debug,
    /// Everything, including each prime whose multiples are cleared
    Trace,
}

impl From<Verbosity> for log::LevelFilter {
    fn from(verbosity: Verbosity) -> Self {
        match verbosity {
            Verbosity::Silent => Self::Off,
            Verbosity::Error => Self::Error,
            Verbosity::Warn => Self::Warn,
            Verbosity::Info => Self::Info,
            Verbosity::Debug => Self::Debug,
            Verbosity::Trace => Self::Trace,
        }
    }
}
