use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use runegrid_core::RuneKind;

use super::styled_glyph;

pub fn run() -> Result<(), String> {
    println!("  {}", "Rune Kinds".bold().underline());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Kind", "Glyph", "Class", "Tag", "Directional", "Icon"]);

    for kind in RuneKind::ALL {
        table.add_row(vec![
            kind.name().to_string(),
            styled_glyph(kind).to_string(),
            kind.class_name().to_string(),
            kind.type_tag().to_string(),
            if kind.is_directional() { "yes" } else { "no" }.to_string(),
            kind.icon().to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {}",
        "Place runes with -r kind@x,y[:facing], e.g. -r transmit@0,1:east".dimmed()
    );
    Ok(())
}
