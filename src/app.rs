use tracing::{debug, warn};

use crate::cli::{Cli, Commands};
use crate::error::AppError;
use crate::output::{
    NumberFormat, PriceTableOptions, ProjectionTableOptions, output_models_json,
    output_prices_json, output_projection_csv, output_projection_json, print_model_list,
    print_price_table, print_projection_table,
};
use crate::pricing::Model;
use crate::projection::project;

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) number_format: NumberFormat,
}

impl<'a> CommandContext<'a> {
    pub(crate) fn new(cli: &'a Cli) -> Result<Self, AppError> {
        let number_format = NumberFormat::from_locale(cli.locale.as_deref())?;
        Ok(CommandContext { cli, number_format })
    }

    fn warn_csv_unsupported(&self, what: &str) {
        if self.cli.csv {
            warn!("CSV output is only available for projections; printing {what} as a table");
        }
    }
}

fn handle_project(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let params = ctx.cli.query_params()?;
    debug!(?params, "evaluating projection");
    let projection = project(&params)?;

    if ctx.cli.json {
        println!("{}", output_projection_json(&projection)?);
    } else if ctx.cli.csv {
        print!("{}", output_projection_csv(&projection));
    } else {
        print_projection_table(
            &projection,
            ProjectionTableOptions {
                use_color: ctx.cli.use_color(),
                compact: ctx.cli.compact,
                number_format: ctx.number_format,
            },
        );
    }
    Ok(())
}

fn handle_prices(only: Option<&str>, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let models = match only {
        Some(raw) => vec![raw.parse::<Model>()?],
        None => Model::ALL.to_vec(),
    };

    if ctx.cli.json {
        println!("{}", output_prices_json(&models)?);
    } else {
        ctx.warn_csv_unsupported("prices");
        print_price_table(
            &models,
            PriceTableOptions {
                use_color: ctx.cli.use_color(),
                number_format: ctx.number_format,
            },
        );
    }
    Ok(())
}

fn handle_models(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if ctx.cli.json {
        println!("{}", output_models_json()?);
    } else {
        ctx.warn_csv_unsupported("models");
        print_model_list(ctx.cli.use_color());
    }
    Ok(())
}

/// Dispatch the parsed command. Nothing is printed to stdout on error.
pub(crate) fn run(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    match &ctx.cli.command {
        None | Some(Commands::Project) => handle_project(ctx),
        Some(Commands::Prices { only }) => handle_prices(only.as_deref(), ctx),
        Some(Commands::Models) => handle_models(ctx),
    }
}
