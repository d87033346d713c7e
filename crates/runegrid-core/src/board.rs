use std::ops::Deref;

use indexmap::map::Entry;
use indexmap::{IndexMap, IndexSet};

use crate::bank::Bank;
use crate::config::{BoardConfig, Placement};
use crate::context::CastContext;
use crate::coord::{Bounds, Coord};
use crate::direction::Direction;
use crate::error::{CoreError, CoreResult};
use crate::event::{BoardEvent, BoardEventKind, EventLog};
use crate::resource::Resources;
use crate::rune::Rune;

/// Sparse storage of placed runes, one per cell, in placement order.
#[derive(Debug, Clone, Default)]
pub struct Cells {
    runes: IndexMap<Coord, Rune>,
}

impl Cells {
    /// The rune at `at`, if any.
    pub fn get(&self, at: Coord) -> Option<&Rune> {
        self.runes.get(&at)
    }

    fn get_mut(&mut self, at: Coord) -> Option<&mut Rune> {
        self.runes.get_mut(&at)
    }

    /// Store `rune` at its own coordinate, replacing any occupant in place.
    fn place(&mut self, rune: Rune) -> &mut Rune {
        match self.runes.entry(rune.coord()) {
            Entry::Occupied(mut slot) => {
                slot.insert(rune);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(rune),
        }
    }

    /// Occupied cells directly north, east, south and west of `at`, in that order.
    ///
    /// Cells past the edge of the grid count as empty.
    pub fn neighbors(&self, at: Coord) -> Vec<(Direction, &Rune)> {
        Direction::CARDINALS
            .iter()
            .filter_map(|&dir| at.step(dir).and_then(|c| self.get(c)).map(|rune| (dir, rune)))
            .collect()
    }

    /// Returns true if a rune occupies `at`.
    pub fn contains(&self, at: Coord) -> bool {
        self.runes.contains_key(&at)
    }

    /// Iterate over runes in placement order.
    pub fn iter(&self) -> impl Iterator<Item = &Rune> {
        self.runes.values()
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.runes.len()
    }

    /// Returns true if no rune is placed.
    pub fn is_empty(&self) -> bool {
        self.runes.is_empty()
    }
}

/// Summary of one cast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastReport {
    /// 1-based cast number on this board.
    pub cast: u64,
    /// Emitters whose `on_cast` ran.
    pub emitters: usize,
    /// Packets that landed on a rune.
    pub deliveries: usize,
    /// Resources moved into the bank by sinks.
    pub deposited: Resources,
}

/// A rune stored on a board, as returned by [`Board::add_rune`].
///
/// Reads go through `Deref`. Facing changes go through [`PlacedRune::rotate`]
/// and [`PlacedRune::set_direction`], which record a `DirectionChanged`
/// notification on the board.
#[derive(Debug)]
pub struct PlacedRune<'b> {
    rune: &'b mut Rune,
    events: &'b mut EventLog,
    cast: u64,
}

impl PlacedRune<'_> {
    /// Point the rune in `direction`. Returns the previous facing.
    pub fn set_direction(&mut self, direction: Direction) -> CoreResult<Direction> {
        let from = self
            .rune
            .set_direction(direction)
            .ok_or_else(|| self.not_directional())?;
        self.announce(from, direction);
        Ok(from)
    }

    /// Rotate the rune one step clockwise. Returns the new facing.
    pub fn rotate(&mut self) -> CoreResult<Direction> {
        let to = self
            .rune
            .direction()
            .map(Direction::rotate_clockwise)
            .ok_or_else(|| self.not_directional())?;
        self.set_direction(to)?;
        Ok(to)
    }

    fn not_directional(&self) -> CoreError {
        CoreError::NotDirectional {
            x: self.rune.x(),
            y: self.rune.y(),
            kind: self.rune.kind().class_name(),
        }
    }

    fn announce(&mut self, from: Direction, to: Direction) {
        let at = self.rune.coord();
        let description = format!("Direction - {at} - {from} -> {to}");
        log::debug!("{description}");
        self.events.push(BoardEvent::new(
            self.cast,
            BoardEventKind::DirectionChanged { at, from, to },
            description,
        ));
    }
}

impl Deref for PlacedRune<'_> {
    type Target = Rune;

    fn deref(&self) -> &Rune {
        self.rune
    }
}

/// The grid: placed runes, the emitter set, the occupied envelope and the event log.
#[derive(Debug)]
pub struct Board {
    cells: Cells,
    emitters: IndexSet<Coord>,
    bounds: Bounds,
    casts: u64,
    events: EventLog,
    config: BoardConfig,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl Board {
    /// Create an empty board.
    pub fn new(config: BoardConfig) -> Self {
        Self {
            cells: Cells::default(),
            emitters: IndexSet::new(),
            bounds: Bounds::default(),
            casts: 0,
            events: EventLog::new(config.max_events),
            config,
        }
    }

    /// Place a rune at its own coordinate and run its `on_create` hook.
    ///
    /// Returns a handle to the stored rune so the caller can finish
    /// configuring it. Placing onto an occupied cell replaces the occupant
    /// unless the board was configured with [`Placement::Reject`].
    pub fn add_rune(&mut self, rune: Rune) -> CoreResult<PlacedRune<'_>> {
        let at = rune.coord();
        if let (Placement::Reject, Some(occupant)) = (self.config.placement, self.cells.get(at)) {
            return Err(CoreError::CellOccupied {
                x: at.x,
                y: at.y,
                occupant: occupant.kind().class_name(),
            });
        }

        self.bounds.include(at);
        if rune.is_emitter() {
            self.emitters.insert(at);
        } else {
            self.emitters.shift_remove(&at);
        }

        let placed = self.cells.place(rune);
        placed.on_create(&mut self.events, self.casts);
        Ok(PlacedRune {
            rune: placed,
            events: &mut self.events,
            cast: self.casts,
        })
    }

    /// Run one cast: every emitter's `on_cast`, in the order emitters were placed.
    ///
    /// Each emitter's packet traversal finishes before the next emitter starts.
    pub fn cast(&mut self, bank: &mut Bank) -> CastReport {
        self.casts += 1;
        let mut ctx = CastContext::new(
            &self.cells,
            bank,
            &mut self.events,
            self.casts,
            self.config.trace,
        );

        let mut fired = 0;
        for at in &self.emitters {
            if let Some(rune) = self.cells.get(*at) {
                rune.on_cast(&mut ctx);
                fired += 1;
            }
        }

        let report = ctx.finish(fired);
        log::debug!(
            "cast {} finished: {} emitters, {} deliveries, deposited {}",
            report.cast,
            report.emitters,
            report.deliveries,
            report.deposited
        );
        report
    }

    /// Run `n` casts in a row.
    pub fn run(&mut self, n: u64, bank: &mut Bank) -> Vec<CastReport> {
        (0..n).map(|_| self.cast(bank)).collect()
    }

    /// Rotate the directional rune at `(x, y)` one step clockwise.
    pub fn rotate(&mut self, x: i32, y: i32) -> CoreResult<Direction> {
        self.placed_mut(x, y)?.rotate()
    }

    /// Point the directional rune at `(x, y)` in `direction`. Returns the previous facing.
    pub fn set_direction(&mut self, x: i32, y: i32, direction: Direction) -> CoreResult<Direction> {
        self.placed_mut(x, y)?.set_direction(direction)
    }

    fn placed_mut(&mut self, x: i32, y: i32) -> CoreResult<PlacedRune<'_>> {
        let rune = self
            .cells
            .get_mut(Coord::new(x, y))
            .ok_or(CoreError::RuneNotFound { x, y })?;
        Ok(PlacedRune {
            rune,
            events: &mut self.events,
            cast: self.casts,
        })
    }

    /// The rune at `(x, y)`, if any.
    pub fn rune_at(&self, x: i32, y: i32) -> Option<&Rune> {
        self.cells.get(Coord::new(x, y))
    }

    /// Occupied cells adjacent to `(x, y)` in the four cardinal directions.
    ///
    /// Looks around the cell even when it is empty.
    pub fn neighbors(&self, x: i32, y: i32) -> Vec<(Direction, &Rune)> {
        self.cells.neighbors(Coord::new(x, y))
    }

    /// All placed runes.
    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    /// Iterate over runes in placement order.
    pub fn runes(&self) -> impl Iterator<Item = &Rune> {
        self.cells.iter()
    }

    /// Iterate over emitter runes in cast order.
    pub fn emitters(&self) -> impl Iterator<Item = &Rune> {
        self.emitters.iter().filter_map(|at| self.cells.get(*at))
    }

    /// The envelope of every placed rune and the origin.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of casts run so far.
    pub fn casts(&self) -> u64 {
        self.casts
    }

    /// Number of placed runes.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if no rune is placed.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Events recorded so far.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// The board's configuration.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }
}
