//! CLI frontend for the runegrid packet-routing engine.

mod commands;
mod layout;

use std::process;

use clap::{Parser, Subcommand};

use commands::cast::CastOptions;

#[derive(Parser)]
#[command(
    name = "runegrid",
    about = "runegrid: route mana through a grid of runes",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the board as a text grid
    Show {
        /// Rune placement as kind@x,y[:facing] (default: the starter layout)
        #[arg(short = 'r', long = "rune", value_name = "SPEC", allow_hyphen_values = true)]
        runes: Vec<String>,

        /// Fail when two runes target the same cell
        #[arg(long)]
        strict: bool,
    },

    /// Cast the board and report the bank
    Cast {
        /// Rune placement as kind@x,y[:facing] (default: the starter layout)
        #[arg(short = 'r', long = "rune", value_name = "SPEC", allow_hyphen_values = true)]
        runes: Vec<String>,

        /// Rotate the directional rune at x,y one step clockwise before casting
        #[arg(long, value_name = "X,Y", allow_hyphen_values = true)]
        rotate: Vec<String>,

        /// Number of casts to run
        #[arg(short = 'n', long, default_value = "1")]
        casts: u64,

        /// Fail when two runes target the same cell
        #[arg(long)]
        strict: bool,

        /// Record packet routing in the event log
        #[arg(short, long)]
        trace: bool,

        /// Show the board and every logged event
        #[arg(short, long)]
        verbose: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available rune kinds
    Runes,
}

fn main() {
    let cli = Cli::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if matches!(cli.command, Commands::Cast { trace: true, .. }) {
        logger.filter_level(log::LevelFilter::Trace);
    }
    logger.init();

    let result = match cli.command {
        Commands::Show { runes, strict } => commands::show::run(&runes, strict),
        Commands::Cast {
            runes,
            rotate,
            casts,
            strict,
            trace,
            verbose,
            json,
        } => commands::cast::run(&CastOptions {
            runes,
            rotate,
            casts,
            strict,
            trace,
            verbose,
            json,
        }),
        Commands::Runes => commands::runes::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
