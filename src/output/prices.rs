use comfy_table::{Cell, Color};

use crate::output::format::{
    NumberFormat, create_styled_table, format_unit_price, header_cell, right_cell, styled_cell,
};
use crate::pricing::{Model, ModelPricing, PriceEntry, SizeTier, model_pricing};

#[derive(Debug, Clone, Copy)]
pub(crate) struct PriceTableOptions {
    pub(crate) use_color: bool,
    pub(crate) number_format: NumberFormat,
}

pub(super) fn entry_json(entry: PriceEntry) -> serde_json::Value {
    match entry {
        PriceEntry::Tiered { small, large } => serde_json::json!({ "small": small, "large": large }),
        PriceEntry::Flat(price) => serde_json::json!({ "flat": price }),
    }
}

fn entry_cells(entry: Option<PriceEntry>, fmt: NumberFormat) -> [Cell; 2] {
    let Some(entry) = entry else {
        return [right_cell("-", None, false), right_cell("-", None, false)];
    };
    [
        right_cell(&format_unit_price(entry.price(SizeTier::Small), fmt), None, false),
        right_cell(&format_unit_price(entry.price(SizeTier::Large), fmt), None, false),
    ]
}

fn model_rows(model: Model, pricing: &ModelPricing, opts: &PriceTableOptions) -> Vec<Vec<Cell>> {
    let fmt = opts.number_format;
    let name_color = opts.use_color.then_some(Color::Yellow);

    pricing
        .regular
        .iter()
        .enumerate()
        .map(|(i, (modality, entry))| {
            let name = if i == 0 { model.id() } else { "" };
            let cached = pricing.cached_input_entry(model, *modality).ok();
            let storage = pricing
                .storage_price(model, *modality)
                .map(|p| format!("{}/h", format_unit_price(p, fmt)))
                .unwrap_or_else(|_| "-".to_string());

            let mut row = vec![
                styled_cell(name, name_color, i == 0),
                styled_cell(&format!("{} /{}", modality.id(), modality.unit()), None, false),
            ];
            row.extend(entry_cells(Some(*entry), fmt));
            row.extend(entry_cells(cached, fmt));
            row.push(right_cell(&storage, None, false));
            row
        })
        .collect()
}

/// Print catalog prices as a table, one block of rows per model
pub(crate) fn print_price_table(models: &[Model], opts: PriceTableOptions) {
    let c = opts.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Model", c),
        header_cell("Modality", c),
        header_cell("Regular ≤128K", c),
        header_cell("Regular >128K", c),
        header_cell("Cached ≤128K", c),
        header_cell("Cached >128K", c),
        header_cell("Storage", c),
    ]);

    for model in models {
        for row in model_rows(*model, model_pricing(*model), &opts) {
            table.add_row(row);
        }
    }

    println!("\n  Gemini Pricing (USD)\n");
    println!("{table}");
    println!("\n  Output prices follow the input context tier.\n");
}

/// Print supported model ids and whether each can be used for a cache comparison
pub(crate) fn print_model_list(use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Id", use_color),
        header_cell("Name", use_color),
        header_cell("Context Caching", use_color),
    ]);
    for model in Model::ALL {
        let supported = model_pricing(model).supports_caching();
        let color = use_color.then_some(if supported { Color::Green } else { Color::Red });
        table.add_row(vec![
            styled_cell(model.id(), None, true),
            styled_cell(model.display_name(), None, false),
            styled_cell(if supported { "yes" } else { "no" }, color, false),
        ]);
    }
    println!("{table}");
}
