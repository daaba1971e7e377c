/// How much the binaries log. Each level maps onto a maximum tracing level.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    #[clap(help = "Only errors.")]
    Silent,
    #[clap(help = "Search and planning summaries.")]
    Normal,
    #[clap(help = "Per-iteration planning progress.")]
    Verbose,
    #[clap(help = "Every single backup.")]
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}
