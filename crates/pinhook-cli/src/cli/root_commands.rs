use clap::Subcommand;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Strictly validate the descriptor, stopping at the first defect.
    Validate,
    /// Report every defect and pin-hygiene warning in the descriptor.
    Lint,
    /// List the hooks a valid descriptor would run.
    List,
    /// Print a minimal pinned starter descriptor.
    SampleConfig,
}
