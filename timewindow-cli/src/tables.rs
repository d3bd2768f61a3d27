use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use timewindow::{WindowInstants, WindowResult, WindowSpec};

use crate::fmt::FormattedDuration;

pub fn build_window_table<Tz>(
    name: &str,
    spec: &WindowSpec,
    instants: WindowInstants<Tz>,
    result: WindowResult,
) -> Table
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec![
        "Window", "Days", "Start", "End", "Within", "To start", "To end", "Next start",
    ]);
    table.add_row(vec![
        Cell::new(name).add_attribute(Attribute::Bold),
        Cell::new(spec.weekdays).add_attribute(Attribute::Dim),
        Cell::new(format_instant(&instants.start)),
        Cell::new(format_instant(&instants.end)),
        Cell::new(if result.is_within { "yes" } else { "no" }).fg(if result.is_within {
            Color::Green
        } else {
            Color::Red
        }),
        Cell::new(FormattedDuration(result.time_to_start)).set_alignment(CellAlignment::Right),
        if result.is_within {
            Cell::new(FormattedDuration(result.time_to_end)).set_alignment(CellAlignment::Right)
        } else {
            Cell::new("—").add_attribute(Attribute::Dim)
        },
        Cell::new(format_instant(&instants.next_start)).add_attribute(Attribute::Dim),
    ]);
    table
}

fn format_instant<Tz>(timestamp: &DateTime<Tz>) -> impl Display
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp.format("%a %b %d %H:%M %:z")
}
