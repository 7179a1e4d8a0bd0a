//!
//! The test builder binary arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The test builder binary arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Dumps every built test as JSON.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppresses the per-document output.
    #[arg(short, long)]
    pub quiet: bool,

    /// The execution identifier reported in test definition errors.
    #[arg(long, default_value = "test-builder")]
    pub execution_id: String,

    /// The resolved test documents, in YAML or JSON.
    #[arg(required = true)]
    pub documents: Vec<PathBuf>,
}

impl Arguments {
    ///
    /// Validates the arguments.
    ///
    pub fn validate(arguments: Self) -> anyhow::Result<Self> {
        if arguments.verbose && arguments.quiet {
            anyhow::bail!("`verbose` and `quiet` cannot be enabled simultaneously");
        }
        if arguments.execution_id.is_empty() {
            anyhow::bail!("`execution-id` cannot be empty");
        }

        Ok(arguments)
    }
}
