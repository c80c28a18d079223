mod csv;
mod format;
mod json;
mod prices;
mod table;

pub(crate) use csv::output_projection_csv;
pub(crate) use format::NumberFormat;
pub(crate) use json::{output_models_json, output_prices_json, output_projection_json};
pub(crate) use prices::{PriceTableOptions, print_model_list, print_price_table};
pub(crate) use table::{ProjectionTableOptions, print_projection_table};
