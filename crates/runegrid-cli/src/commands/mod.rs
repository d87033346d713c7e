pub mod cast;
pub mod runes;
pub mod show;

use colored::{ColoredString, Colorize};
use runegrid_core::{Direction, RuneKind};

/// Single-character symbol for a rune kind.
fn glyph(kind: RuneKind) -> char {
    match kind {
        RuneKind::Base => '#',
        RuneKind::Void => 'O',
        RuneKind::Emitter => 'E',
        RuneKind::ManaEmitter => '*',
        RuneKind::Amplifier => '+',
        RuneKind::Transmit { facing } => arrow(facing),
    }
}

fn arrow(direction: Direction) -> char {
    match direction {
        Direction::North => '↑',
        Direction::NorthEast => '↗',
        Direction::East => '→',
        Direction::SouthEast => '↘',
        Direction::South => '↓',
        Direction::SouthWest => '↙',
        Direction::West => '←',
        Direction::NorthWest => '↖',
    }
}

/// Colored glyph for a rune kind.
fn styled_glyph(kind: RuneKind) -> ColoredString {
    let symbol = glyph(kind).to_string();
    match kind {
        RuneKind::Void => symbol.magenta().bold(),
        RuneKind::ManaEmitter | RuneKind::Emitter => symbol.yellow().bold(),
        RuneKind::Transmit { .. } => symbol.cyan(),
        RuneKind::Amplifier => symbol.green().bold(),
        RuneKind::Base => symbol.normal(),
    }
}
