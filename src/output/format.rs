use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::error::AppError;

/// Decimal separator used when printing costs in tables
#[derive(Debug, Clone, Copy)]
pub(crate) struct NumberFormat {
    decimal_sep: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat { decimal_sep: '.' }
    }
}

impl NumberFormat {
    pub(crate) fn from_locale(locale: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = locale else {
            return Ok(NumberFormat::default());
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(NumberFormat::default());
        }
        let base = trimmed
            .split(['-', '_'])
            .next()
            .unwrap_or(trimmed)
            .to_ascii_lowercase();

        match base.as_str() {
            "de" | "fr" | "ru" => Ok(NumberFormat { decimal_sep: ',' }),
            "en" | "zh" => Ok(NumberFormat::default()),
            _ => Err(AppError::UnsupportedLocale {
                input: trimmed.to_string(),
            }),
        }
    }

    fn localize(self, s: String) -> String {
        if self.decimal_sep == '.' {
            s
        } else {
            s.replace('.', &self.decimal_sep.to_string())
        }
    }
}

/// Dollar amount at four decimals; projected costs routinely fall below a cent.
pub(super) fn format_cost(cost: f64, format: NumberFormat) -> String {
    if cost.is_nan() {
        return "N/A".to_string();
    }
    let sign = if cost < 0.0 { "-" } else { "" };
    format!("{sign}${}", format.localize(format!("{:.4}", cost.abs())))
}

/// Unit prices keep every significant digit from the catalog
pub(super) fn format_unit_price(price: f64, format: NumberFormat) -> String {
    format!("${}", format.localize(price.to_string()))
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

pub(super) fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(super) fn right_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    styled_cell(text, color, bold).set_alignment(CellAlignment::Right)
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}

#[cfg(test)]
mod tests {
    use super::{NumberFormat, format_cost, format_unit_price};

    #[test]
    fn format_cost_four_decimals() {
        let fmt = NumberFormat::default();
        assert_eq!(format_cost(10.3, fmt), "$10.3000");
        assert_eq!(format_cost(0.00006, fmt), "$0.0001");
        assert_eq!(format_cost(0.0, fmt), "$0.0000");
    }

    #[test]
    fn format_cost_negative_puts_sign_first() {
        assert_eq!(format_cost(-0.9, NumberFormat::default()), "-$0.9000");
    }

    #[test]
    fn format_cost_handles_nan() {
        assert_eq!(format_cost(f64::NAN, NumberFormat::default()), "N/A");
    }

    #[test]
    fn format_unit_price_keeps_precision() {
        let fmt = NumberFormat::default();
        assert_eq!(format_unit_price(0.000032875, fmt), "$0.000032875");
        assert_eq!(format_unit_price(35.0, fmt), "$35");
    }

    #[test]
    fn from_locale_none_returns_default() {
        let fmt = NumberFormat::from_locale(None).unwrap();
        assert_eq!(format_cost(1.5, fmt), "$1.5000");
    }

    #[test]
    fn from_locale_empty_returns_default() {
        let fmt = NumberFormat::from_locale(Some("  ")).unwrap();
        assert_eq!(format_cost(1.5, fmt), "$1.5000");
    }

    #[test]
    fn from_locale_de_uses_comma() {
        let fmt = NumberFormat::from_locale(Some("de")).unwrap();
        assert_eq!(format_cost(1.5, fmt), "$1,5000");
        assert_eq!(format_unit_price(0.0025, fmt), "$0,0025");
    }

    #[test]
    fn from_locale_with_region_suffix() {
        let fmt = NumberFormat::from_locale(Some("fr_FR")).unwrap();
        assert_eq!(format_cost(2.06, fmt), "$2,0600");
    }

    #[test]
    fn from_locale_unsupported_returns_error() {
        assert!(NumberFormat::from_locale(Some("ja")).is_err());
    }
}
