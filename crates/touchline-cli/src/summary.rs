//! Terminal summaries of loaded datasets.

use std::collections::BTreeMap;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use touchline_model::{EventDataset, Metadata, PeriodId, TrackingDataset};

/// Events per kind name, most frequent first, ties broken by name.
pub fn kind_counts(dataset: &EventDataset) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for event in &dataset.events {
        *counts.entry(event.kind_name()).or_default() += 1;
    }
    let mut ordered: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ordered
}

/// Frames per period, in period order.
pub fn frame_counts(dataset: &TrackingDataset) -> Vec<(PeriodId, usize)> {
    let mut counts: BTreeMap<PeriodId, usize> = BTreeMap::new();
    for frame in &dataset.frames {
        *counts.entry(frame.period_id).or_default() += 1;
    }
    counts.into_iter().collect()
}

pub fn print_event_summary(dataset: &EventDataset) {
    print_fixture(&dataset.metadata);
    let mut table = Table::new();
    table.set_header(vec![header_cell("Kind"), header_cell("Events")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (name, count) in kind_counts(dataset) {
        table.add_row(vec![Cell::new(name), Cell::new(count)]);
    }
    table.add_row(vec![
        total_cell("TOTAL"),
        Cell::new(dataset.len()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn print_tracking_summary(dataset: &TrackingDataset) {
    print_fixture(&dataset.metadata);
    let mut table = Table::new();
    table.set_header(vec![header_cell("Period"), header_cell("Frames")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (period_id, count) in frame_counts(dataset) {
        table.add_row(vec![Cell::new(period_id), Cell::new(count)]);
    }
    table.add_row(vec![
        total_cell("TOTAL"),
        Cell::new(dataset.len()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn print_fixture(metadata: &Metadata) {
    println!("Game: {}", metadata.game_id);
    println!(
        "Fixture: {} - {}",
        metadata.home_team.name, metadata.away_team.name
    );
    if let Some(score) = metadata.score {
        println!("Score: {score}");
    }
    if let Some(date) = metadata.date {
        println!("Date: {}", date.format("%Y-%m-%d"));
    }
    println!("Coordinates: {}", metadata.coordinate_system);
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(60);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(comfy_table::Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn total_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(comfy_table::Color::Cyan)
        .add_attribute(Attribute::Bold)
}
