mod app;
mod cli;
mod config;
mod consts;
mod error;
mod output;
mod pricing;
mod projection;
mod utils;

use clap::Parser;
use tracing::{debug, warn};

use app::{CommandContext, run};
use cli::Cli;
use config::Config;
use error::AppError;
use utils::init_logging;

fn load_cli() -> Result<Cli, AppError> {
    let cli = Cli::parse();

    let (config, found, skipped) = match &cli.config {
        Some(path) => (Config::load_from(path)?, Some(path.clone()), Vec::new()),
        None => {
            let discovered = Config::discover();
            (discovered.config, discovered.path, discovered.skipped)
        }
    };
    let cli = cli.with_config(&config);

    init_logging(cli.debug);
    for e in &skipped {
        warn!("Skipping config: {e}");
    }
    if let Some(path) = found {
        debug!(path = %path.display(), "loaded config");
    }
    Ok(cli)
}

fn main() {
    let result = load_cli().and_then(|cli| {
        let ctx = CommandContext::new(&cli)?;
        run(&ctx)
    });

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
