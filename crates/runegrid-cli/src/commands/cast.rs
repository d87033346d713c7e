use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use runegrid_core::{Bank, BoardConfig, BoardEventKind};

use super::show::render;
use crate::layout::{build_board, parse_coord, placement};

/// Flags of the `cast` subcommand.
pub struct CastOptions {
    pub runes: Vec<String>,
    pub rotate: Vec<String>,
    pub casts: u64,
    pub strict: bool,
    pub trace: bool,
    pub verbose: bool,
    pub json: bool,
}

pub fn run(opts: &CastOptions) -> Result<(), String> {
    let config = BoardConfig::default()
        .with_trace(opts.trace)
        .with_placement(placement(opts.strict))
        .with_max_events(10_000);
    let mut board = build_board(&opts.runes, config)?;

    for target in &opts.rotate {
        let (x, y) = parse_coord(target)?;
        board.rotate(x, y).map_err(|e| e.to_string())?;
    }

    let mut bank = Bank::new();
    let reports = board.run(opts.casts, &mut bank);

    if opts.json {
        let casts: Vec<_> = reports
            .iter()
            .map(|r| {
                serde_json::json!({
                    "cast": r.cast,
                    "emitters": r.emitters,
                    "deliveries": r.deliveries,
                    "deposited": r.deposited,
                })
            })
            .collect();
        let out = serde_json::json!({
            "casts": casts,
            "bank": bank,
        });
        let text = serde_json::to_string_pretty(&out).map_err(|e| format!("JSON error: {e}"))?;
        println!("{text}");
        return Ok(());
    }

    let grid = if opts.verbose {
        Some(render(&board)?)
    } else {
        None
    };

    // Header
    println!(
        "  {} {}",
        "Cast".bold(),
        format!(
            "({} casts, {} runes, {} emitters)",
            opts.casts,
            board.len(),
            board.emitters().count()
        )
        .dimmed()
    );
    println!();

    if let Some(grid) = grid {
        print!("{grid}");
        println!();

        println!("  {}", "Event Log".bold().underline());
        println!();
        for event in board.events().events() {
            let cast_label = format!("[cast {:>3}]", event.cast).dimmed();
            let desc = colorize_event(&event.kind, &event.description);
            println!("  {cast_label} {desc}");
        }
        if board.events().is_empty() {
            println!("  {}", "(no events)".dimmed());
        }
        println!();
    }

    // Per-cast summary
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Cast", "Emitters", "Deliveries", "Deposited"]);
    for report in &reports {
        table.add_row(vec![
            report.cast.to_string(),
            report.emitters.to_string(),
            report.deliveries.to_string(),
            report.deposited.to_string(),
        ]);
    }
    println!("{table}");
    println!();

    // Bank
    println!("  {}", "Bank".bold().underline());
    println!();
    if bank.is_empty() {
        println!("  {}", "(empty)".dimmed());
    } else {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Resource", "Balance"]);
        for (resource, balance) in bank.iter() {
            table.add_row(vec![resource.to_string(), balance.to_string()]);
        }
        println!("{table}");
    }
    println!();

    Ok(())
}

fn colorize_event(kind: &BoardEventKind, description: &str) -> colored::ColoredString {
    match kind {
        BoardEventKind::RunePlaced { .. } => description.normal(),
        BoardEventKind::DirectionChanged { .. } => description.cyan(),
        BoardEventKind::Cast { .. } => description.yellow().bold(),
        BoardEventKind::Received { .. } => description.blue(),
        BoardEventKind::Deposited { .. } => description.green(),
        BoardEventKind::EdgeRevisited { .. } => description.red(),
    }
}
