use colored::Colorize;
use runegrid_core::{Board, BoardConfig};

use super::styled_glyph;
use crate::layout::{build_board, placement};

pub fn run(specs: &[String], strict: bool) -> Result<(), String> {
    let board = build_board(specs, BoardConfig::default().with_placement(placement(strict)))?;

    let grid = render(&board)?;
    let bounds = board.bounds();
    println!(
        "  {} {}",
        "Board".bold(),
        format!(
            "({} runes, {} emitters, {}x{} cells)",
            board.len(),
            board.emitters().count(),
            bounds.width(),
            bounds.height()
        )
        .dimmed()
    );
    println!();
    print!("{grid}");
    println!();

    Ok(())
}

/// Largest envelope, in cells, that `render` will draw.
const MAX_RENDER_CELLS: u64 = 10_000;

/// Draw the occupied envelope with north at the top.
pub fn render(board: &Board) -> Result<String, String> {
    let bounds = board.bounds();
    if bounds.area() > MAX_RENDER_CELLS {
        return Err(format!(
            "board too large to render ({}x{})",
            bounds.width(),
            bounds.height()
        ));
    }
    let mut out = String::new();

    for y in (bounds.min.y..=bounds.max.y).rev() {
        out.push_str(&format!("  {y:>4} "));
        for x in bounds.min.x..=bounds.max.x {
            match board.rune_at(x, y) {
                Some(rune) => out.push_str(&format!("  {}", styled_glyph(rune.kind()))),
                None => out.push_str(&format!("  {}", "·".dimmed())),
            }
        }
        out.push('\n');
    }

    out.push_str("       ");
    for x in bounds.min.x..=bounds.max.x {
        out.push_str(&format!("{x:>3}"));
    }
    out.push('\n');
    Ok(out)
}
