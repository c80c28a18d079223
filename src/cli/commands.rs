//! CLI subcommand definitions

use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Compare normal and context-cache cost across query counts (default)
    Project,
    /// Show catalog unit prices
    Prices {
        /// Only this model (e.g. "gemini15Flash"); all models when omitted
        #[arg(value_name = "MODEL")]
        only: Option<String>,
    },
    /// List supported models and whether they support context caching
    Models,
}
