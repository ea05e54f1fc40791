//! Table rendering for the CLI.

use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};
use strum::IntoEnumIterator;

use remapkit::config::KeymapConfig;
use remapkit::keycode::{Key, Media, Modifier, Mouse, Special};
use remapkit::planner::PendingWrite;
use remapkit::staging::StagingBuffer;

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Renders one layer as a row/col grid. Staged-but-unwritten cells are red,
/// matching what the graphical clients do.
pub fn print_layer_grid(buffer: &StagingBuffer, layer: u8) {
    let entries: Vec<_> = buffer
        .entries()
        .iter()
        .filter(|entry| entry.loc.layer == layer)
        .collect();
    if entries.is_empty() {
        println!("\n(layer {layer}: no keys)");
        return;
    }
    let max_row = entries.iter().map(|entry| entry.loc.row).max().unwrap_or(0);
    let max_col = entries.iter().map(|entry| entry.loc.col).max().unwrap_or(0);

    let mut table = base_table();
    let mut header = vec![Cell::new("")];
    header.extend((0..=max_col).map(|col| Cell::new(format!("c{col}"))));
    table.set_header(header);

    for row in 0..=max_row {
        let mut cells = vec![Cell::new(format!("r{row}"))];
        for col in 0..=max_col {
            let cell = match entries
                .iter()
                .find(|entry| entry.loc.row == row && entry.loc.col == col)
            {
                Some(entry) if entry.changed => {
                    Cell::new(entry.action.to_string()).fg(Color::Red)
                }
                Some(entry) => Cell::new(entry.action.to_string()),
                None => Cell::new(""),
            };
            cells.push(cell);
        }
        table.add_row(cells);
    }

    println!("\n=== Layer {layer} ===");
    println!("{table}");
}

pub fn print_pending_writes(writes: &[PendingWrite]) {
    if writes.is_empty() {
        println!("\nNo pending writes.");
        return;
    }
    let mut table = base_table();
    table.set_header(vec!["Layer", "Row", "Col", "Current", "Next"]);
    for write in writes {
        table.add_row(vec![
            Cell::new(write.loc.layer).set_alignment(CellAlignment::Right),
            Cell::new(write.loc.row).set_alignment(CellAlignment::Right),
            Cell::new(write.loc.col).set_alignment(CellAlignment::Right),
            Cell::new(write.current.to_string()),
            Cell::new(write.next.to_string()).fg(Color::Green),
        ]);
    }
    println!("\n{} pending write(s):", writes.len());
    println!("{table}");
}

pub fn print_config(config: &KeymapConfig) {
    let mut table = base_table();
    table.set_header(vec!["Setting", "Value"]);
    let rows: Vec<(&str, String)> = vec![
        ("mouse.auto_mouse_layer", config.mouse.auto_mouse_layer.to_string()),
        (
            "mouse.auto_mouse_duration_ms",
            config.mouse.auto_mouse_duration_ms.to_string(),
        ),
        (
            "mouse.auto_mouse_threshold",
            config.mouse.auto_mouse_threshold.to_string(),
        ),
        ("mouse.scroll_divider_x", config.mouse.scroll_divider_x.to_string()),
        ("mouse.scroll_divider_y", config.mouse.scroll_divider_y.to_string()),
        (
            "key_resolver.tap_hold.threshold_ms",
            config.key_resolver.tap_hold.threshold_ms.to_string(),
        ),
        (
            "key_resolver.tap_hold.hold_on_other_key",
            config.key_resolver.tap_hold.hold_on_other_key.to_string(),
        ),
        (
            "key_resolver.tap_dance.threshold_ms",
            config.key_resolver.tap_dance.threshold_ms.to_string(),
        ),
        (
            "key_resolver.combo.threshold_ms",
            config.key_resolver.combo.threshold_ms.to_string(),
        ),
    ];
    for (setting, value) in rows {
        table.add_row(vec![
            Cell::new(setting),
            Cell::new(value).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{table}");
}

pub fn print_key_catalog(filter: Option<&str>) {
    let filter = filter.map(str::to_lowercase);
    let matches = |name: &str| match &filter {
        Some(needle) => name.to_lowercase().contains(needle),
        None => true,
    };

    let mut table = base_table();
    table.set_header(vec!["Kind", "Name", "Code"]);
    let mut count = 0usize;

    let mut push = |kind: &str, name: String, code: u8| {
        if matches(&name) {
            table.add_row(vec![
                Cell::new(kind),
                Cell::new(name),
                Cell::new(format!("0x{code:02X}")).set_alignment(CellAlignment::Right),
            ]);
            count += 1;
        }
    };

    for key in Key::iter() {
        push("Key", key.to_string(), key as u8);
    }
    for modifier in Modifier::iter() {
        push("Modifier", modifier.to_string(), modifier as u8);
    }
    for button in Mouse::iter() {
        push("Mouse", button.to_string(), button as u8);
    }
    for usage in Media::iter() {
        push("Media", usage.to_string(), usage as u8);
    }
    for func in Special::iter() {
        push("Special", func.to_string(), func as u8);
    }

    println!("{table}");
    println!("{count} entries");
}
