use comfy_table::{Cell, Color};

use crate::output::format::{
    NumberFormat, create_styled_table, format_cost, format_unit_price, header_cell, right_cell,
    styled_cell,
};
use crate::projection::{CostPoint, Projection};

#[derive(Debug, Clone, Copy)]
pub(crate) struct ProjectionTableOptions {
    pub(crate) use_color: bool,
    pub(crate) compact: bool,
    pub(crate) number_format: NumberFormat,
}

fn build_header(opts: &ProjectionTableOptions) -> Vec<Cell> {
    let c = opts.use_color;
    if opts.compact {
        vec![
            header_cell("Q", c),
            header_cell("Normal", c),
            header_cell("Cache", c),
        ]
    } else {
        vec![
            header_cell("Queries", c),
            header_cell("Normal Cost", c),
            header_cell("Cache Cost", c),
            header_cell("Savings", c),
            header_cell("Cheaper", c),
        ]
    }
}

fn savings_color(point: &CostPoint, use_color: bool) -> Option<Color> {
    if !use_color {
        return None;
    }
    if point.savings() > 0.0 {
        Some(Color::Green)
    } else {
        Some(Color::Red)
    }
}

fn build_row(point: &CostPoint, is_break_even: bool, opts: &ProjectionTableOptions) -> Vec<Cell> {
    let fmt = opts.number_format;
    let bold = is_break_even;
    let queries = right_cell(&point.queries.to_string(), None, bold);
    let normal = right_cell(&format_cost(point.normal_cost, fmt), None, bold);
    let cache = right_cell(
        &format_cost(point.cache_cost, fmt),
        savings_color(point, opts.use_color),
        bold,
    );
    if opts.compact {
        return vec![queries, normal, cache];
    }

    let cheaper = if point.savings() > 0.0 {
        "cache"
    } else if point.savings() < 0.0 {
        "normal"
    } else {
        "tie"
    };
    vec![
        queries,
        normal,
        cache,
        right_cell(
            &format_cost(point.savings(), fmt),
            savings_color(point, opts.use_color),
            bold,
        ),
        styled_cell(cheaper, None, bold),
    ]
}

fn print_unit_prices(projection: &Projection, fmt: NumberFormat) {
    let p = &projection.prices;
    println!(
        "  Per char: input {} | output {} | cached input {} | storage {}/h",
        format_unit_price(p.normal_input, fmt),
        format_unit_price(p.normal_output, fmt),
        format_unit_price(p.cached_input, fmt),
        format_unit_price(p.cache_storage, fmt),
    );
    println!(
        "  Single query {} | storage surcharge {}",
        format_cost(projection.single_query_cost, fmt),
        format_cost(projection.storage_surcharge, fmt),
    );
}

/// Print the normal-vs-cache comparison followed by its caption
pub(crate) fn print_projection_table(projection: &Projection, opts: ProjectionTableOptions) {
    let params = &projection.params;
    println!(
        "\n  {} Cache Cost Comparison ({}K in / {}K out, {} min retention)\n",
        params.model.display_name(),
        params.context_size_input,
        params.context_size_output,
        params.cache_retention_minutes,
    );

    let mut table = create_styled_table();
    table.set_header(build_header(&opts));

    let break_even = projection.break_even();
    for point in &projection.points {
        table.add_row(build_row(point, Some(point.queries) == break_even, &opts));
    }
    println!("{table}");

    if !opts.compact {
        print_unit_prices(projection, opts.number_format);
    }
    println!("\n  {}\n", projection.summary());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{QueryParams, project};

    fn opts(compact: bool) -> ProjectionTableOptions {
        ProjectionTableOptions {
            use_color: false,
            compact,
            number_format: NumberFormat::default(),
        }
    }

    #[test]
    fn full_rows_have_five_columns() {
        let proj = project(&QueryParams::default()).unwrap();
        assert_eq!(build_header(&opts(false)).len(), 5);
        for point in &proj.points {
            assert_eq!(build_row(point, false, &opts(false)).len(), 5);
        }
    }

    #[test]
    fn compact_rows_have_three_columns() {
        let proj = project(&QueryParams::default()).unwrap();
        assert_eq!(build_header(&opts(true)).len(), 3);
        assert_eq!(build_row(&proj.points[0], false, &opts(true)).len(), 3);
    }

    #[test]
    fn savings_color_only_when_enabled() {
        let point = CostPoint {
            queries: 2,
            normal_cost: 4.12,
            cache_cost: 3.58,
        };
        assert_eq!(savings_color(&point, false), None);
        assert_eq!(savings_color(&point, true), Some(Color::Green));
    }
}
