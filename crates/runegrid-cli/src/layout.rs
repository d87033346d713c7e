//! Board construction from command-line placements.

use runegrid_core::{Board, BoardConfig, Direction, Placement, Rune, RuneKind};

/// The layout a fresh session starts with: an emitter ringed by a transmit and three voids.
pub fn starter_layout() -> Vec<Rune> {
    vec![
        Rune::mana_emitter(0, 0),
        Rune::transmit(0, 1),
        Rune::void(0, -1),
        Rune::void(1, 0),
        Rune::void(-1, 0),
    ]
}

/// Parse `x,y`.
pub fn parse_coord(s: &str) -> Result<(i32, i32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got \"{s}\""))?;
    let x = x
        .trim()
        .parse()
        .map_err(|_| format!("invalid x coordinate in \"{s}\""))?;
    let y = y
        .trim()
        .parse()
        .map_err(|_| format!("invalid y coordinate in \"{s}\""))?;
    Ok((x, y))
}

/// Parse `kind@x,y[:facing]`, e.g. `transmit@0,1:east`.
pub fn parse_rune(spec: &str) -> Result<Rune, String> {
    let (kind, rest) = spec
        .split_once('@')
        .ok_or_else(|| format!("expected kind@x,y but got \"{spec}\""))?;
    let kind = RuneKind::parse(kind).map_err(|e| e.to_string())?;

    let (coords, facing) = match rest.split_once(':') {
        Some((coords, facing)) => (coords, Some(facing)),
        None => (rest, None),
    };
    let (x, y) = parse_coord(coords)?;
    let rune = Rune::new(kind, x, y);

    match facing {
        None => Ok(rune),
        Some(_) if !kind.is_directional() => Err(format!("{kind} in \"{spec}\" has no facing")),
        Some(facing) => {
            let direction = facing
                .parse::<Direction>()
                .map_err(|e| e.to_string())?;
            Ok(rune.facing(direction))
        }
    }
}

/// Build a board from placement specs, or the starter layout when none are given.
pub fn build_board(specs: &[String], config: BoardConfig) -> Result<Board, String> {
    let runes = if specs.is_empty() {
        starter_layout()
    } else {
        specs
            .iter()
            .map(String::as_str)
            .map(parse_rune)
            .collect::<Result<Vec<_>, _>>()?
    };

    let mut board = Board::new(config);
    for rune in runes {
        board.add_rune(rune).map_err(|e| e.to_string())?;
    }
    Ok(board)
}

/// Board configuration for the `--strict` flag.
pub fn placement(strict: bool) -> Placement {
    if strict {
        Placement::Reject
    } else {
        Placement::Overwrite
    }
}
