use comfy_table::{
    Attribute, Cell, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

/// Format seconds as `H:MM:SS`; zero is shown as a bare `0`.
pub(crate) fn format_duration(total_seconds: u64) -> String {
    if total_seconds == 0 {
        return "0".to_string();
    }
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours}:{minutes:02}:{seconds:02}")
}

pub(crate) fn format_optional_duration(total_seconds: Option<u64>) -> String {
    format_duration(total_seconds.unwrap_or(0))
}

pub(super) fn styled_cell(text: &str, color: Option<Color>) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    cell
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
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
    use super::*;

    #[test]
    fn zero_is_bare() {
        assert_eq!(format_duration(0), "0");
        assert_eq!(format_optional_duration(None), "0");
        assert_eq!(format_optional_duration(Some(0)), "0");
    }

    #[test]
    fn seconds_and_minutes_are_padded() {
        assert_eq!(format_duration(59), "0:00:59");
        assert_eq!(format_duration(60), "0:01:00");
        assert_eq!(format_duration(3661), "1:01:01");
        assert_eq!(format_optional_duration(Some(3599)), "0:59:59");
    }

    #[test]
    fn hours_are_unbounded() {
        assert_eq!(format_duration(36_000), "10:00:00");
        assert_eq!(format_duration(360_000 + 62), "100:01:02");
    }
}
