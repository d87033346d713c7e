use std::fmt;

use crate::board::Cells;
use crate::context::CastContext;
use crate::coord::Coord;
use crate::direction::Direction;
use crate::error::{CoreError, CoreResult};
use crate::event::{BoardEvent, BoardEventKind, EventLog};
use crate::packet::Packet;
use crate::resource::Resources;

/// Type tag of runes that take part in a cast.
pub const EMITTER_TAG: &str = "Emitter";

/// Type tag of every other rune.
pub const RUNE_TAG: &str = "Rune";

/// The closed family of rune behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuneKind {
    /// Plain rune with no behavior beyond tracing.
    Base,
    /// Sink: deposits every packet it receives into the bank.
    Void,
    /// Marker emitter with no cast behavior.
    Emitter,
    /// Emits one packet of mana to each cardinal neighbor per cast.
    ManaEmitter,
    /// Relay that forwards packets in the direction it faces.
    Transmit {
        /// Current facing.
        facing: Direction,
    },
    /// Relay that adds one of every resource and keeps the packet's heading.
    Amplifier,
}

impl RuneKind {
    /// Every kind, with directional kinds facing north.
    pub const ALL: [RuneKind; 6] = [
        Self::Void,
        Self::ManaEmitter,
        Self::Transmit {
            facing: Direction::North,
        },
        Self::Amplifier,
        Self::Emitter,
        Self::Base,
    ];

    /// Parse a lowercase kind name such as `mana_emitter`.
    pub fn parse(name: &str) -> CoreResult<Self> {
        let normalized: String = name
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_lowercase();
        let kind = match normalized.as_str() {
            "void" => Self::Void,
            "manaemitter" | "mana" => Self::ManaEmitter,
            "transmit" => Self::Transmit {
                facing: Direction::North,
            },
            "amplifier" | "amp" => Self::Amplifier,
            "emitter" => Self::Emitter,
            "rune" | "base" => Self::Base,
            _ => return Err(CoreError::UnknownRuneKind(name.to_string())),
        };
        Ok(kind)
    }

    /// Lowercase kind name, as accepted by [`RuneKind::parse`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Base => "rune",
            Self::Void => "void",
            Self::Emitter => "emitter",
            Self::ManaEmitter => "mana_emitter",
            Self::Transmit { .. } => "transmit",
            Self::Amplifier => "amplifier",
        }
    }

    /// Class name used in traces, e.g. `TransmitRune`.
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Base => "Rune",
            Self::Void => "VoidRune",
            Self::Emitter => "EmitterRune",
            Self::ManaEmitter => "ManaEmitterRune",
            Self::Transmit { .. } => "TransmitRune",
            Self::Amplifier => "AmplifierRune",
        }
    }

    /// Classification tag. Only runes tagged [`EMITTER_TAG`] are cast.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::Emitter | Self::ManaEmitter => EMITTER_TAG,
            Self::Base | Self::Void | Self::Transmit { .. } | Self::Amplifier => RUNE_TAG,
        }
    }

    /// Icon identifier for the presentation layer.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Base | Self::Emitter => "fa/sparkles.svg",
            Self::Void => "fa/arrows-to-dot.svg",
            Self::ManaEmitter => "fa/circle-quarters.svg",
            Self::Transmit { .. } => "fa/arrow-up-long.svg",
            Self::Amplifier => "fa/arrows-repeat-1.svg",
        }
    }

    /// Returns true for kinds that carry a facing.
    pub fn is_directional(&self) -> bool {
        matches!(self, Self::Transmit { .. })
    }
}

impl fmt::Display for RuneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// A rune placed on (or about to be placed on) the grid.
///
/// Position is fixed at construction. Directional runes can change facing
/// through [`Rune::rotate`] and [`Rune::set_direction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rune {
    at: Coord,
    kind: RuneKind,
}

impl Rune {
    /// Create a rune of `kind` at `(x, y)`.
    pub fn new(kind: RuneKind, x: i32, y: i32) -> Self {
        Self {
            at: Coord::new(x, y),
            kind,
        }
    }

    /// A plain rune.
    pub fn base(x: i32, y: i32) -> Self {
        Self::new(RuneKind::Base, x, y)
    }

    /// A void sink.
    pub fn void(x: i32, y: i32) -> Self {
        Self::new(RuneKind::Void, x, y)
    }

    /// A marker emitter.
    pub fn emitter(x: i32, y: i32) -> Self {
        Self::new(RuneKind::Emitter, x, y)
    }

    /// A mana emitter.
    pub fn mana_emitter(x: i32, y: i32) -> Self {
        Self::new(RuneKind::ManaEmitter, x, y)
    }

    /// A transmit relay facing north.
    pub fn transmit(x: i32, y: i32) -> Self {
        Self::new(
            RuneKind::Transmit {
                facing: Direction::North,
            },
            x,
            y,
        )
    }

    /// An amplifier relay.
    pub fn amplifier(x: i32, y: i32) -> Self {
        Self::new(RuneKind::Amplifier, x, y)
    }

    /// Builder: set the initial facing. Ignored by non-directional runes.
    pub fn facing(mut self, direction: Direction) -> Self {
        self.set_direction(direction);
        self
    }

    /// Column.
    pub fn x(&self) -> i32 {
        self.at.x
    }

    /// Row.
    pub fn y(&self) -> i32 {
        self.at.y
    }

    /// The cell this rune occupies.
    pub fn coord(&self) -> Coord {
        self.at
    }

    /// The rune's behavior variant.
    pub fn kind(&self) -> RuneKind {
        self.kind
    }

    /// Current facing, `None` for non-directional runes.
    pub fn direction(&self) -> Option<Direction> {
        match self.kind {
            RuneKind::Transmit { facing } => Some(facing),
            _ => None,
        }
    }

    /// Replace the facing and return the previous one. `None` if the rune has no facing.
    pub fn set_direction(&mut self, direction: Direction) -> Option<Direction> {
        match &mut self.kind {
            RuneKind::Transmit { facing } => Some(std::mem::replace(facing, direction)),
            _ => None,
        }
    }

    /// Step the facing one position clockwise and return the new facing.
    pub fn rotate(&mut self) -> Option<Direction> {
        let next = self.direction()?.rotate_clockwise();
        self.set_direction(next);
        Some(next)
    }

    /// Classification tag, see [`RuneKind::type_tag`].
    pub fn type_tag(&self) -> &'static str {
        self.kind.type_tag()
    }

    /// Returns true if the board should cast this rune.
    pub fn is_emitter(&self) -> bool {
        self.type_tag() == EMITTER_TAG
    }

    /// Occupied cells directly north, east, south and west, in that order.
    pub fn neighbors<'c>(&self, cells: &'c Cells) -> Vec<(Direction, &'c Rune)> {
        cells.neighbors(self.at)
    }

    /// Send `packet` to the rune `distance` cells away in `direction`, if any.
    /// A target past the edge of the grid is treated as an empty cell.
    pub fn pass(
        &self,
        packet: &Packet,
        direction: Direction,
        distance: i32,
        ctx: &mut CastContext<'_>,
    ) {
        let cells = ctx.cells();
        let target = self
            .at
            .offset(direction, distance)
            .and_then(|at| cells.get(at));
        if let Some(target) = target {
            packet.visit(target, direction, ctx);
        }
    }

    /// Hook run once when the rune is placed on a board.
    pub fn on_create(&self, events: &mut EventLog, cast: u64) {
        let facing = self.direction();
        let description = match facing {
            Some(dir) => format!("Create - {} - {} facing {dir}", self.at, self.kind),
            None => format!("Create - {} - {}", self.at, self.kind),
        };
        log::debug!("{description}");
        events.push(BoardEvent::new(
            cast,
            BoardEventKind::RunePlaced {
                at: self.at,
                rune: self.kind.class_name(),
                icon: self.kind.icon(),
                facing,
            },
            description,
        ));
    }

    /// Hook run on emitter runes once per cast.
    pub fn on_cast(&self, ctx: &mut CastContext<'_>) {
        ctx.trace(
            BoardEventKind::Cast { at: self.at },
            format!("Cast - {} - {}:{}", self.at, self.type_tag(), self.kind),
        );

        if let RuneKind::ManaEmitter = self.kind {
            for (direction, neighbor) in self.neighbors(ctx.cells()) {
                let packet = Packet::new(Resources::mana(1));
                packet.visit(neighbor, direction, ctx);
            }
        }
    }

    /// Hook run whenever a packet is routed onto this rune.
    pub fn on_receive(&self, packet: &Packet, arrival: Direction, ctx: &mut CastContext<'_>) {
        ctx.record_delivery();
        ctx.trace(
            BoardEventKind::Received {
                at: self.at,
                arrival,
                resources: packet.resources.clone(),
            },
            format!(
                "Receive - {arrival} - {} - {}:{} {}",
                self.at,
                self.type_tag(),
                self.kind,
                packet.resources
            ),
        );

        match self.kind {
            RuneKind::Void => ctx.deposit(self.at, &packet.resources),
            RuneKind::Transmit { facing } => self.pass(packet, facing, 1, ctx),
            RuneKind::Amplifier => {
                self.pass(&packet.amplified(), arrival, 1, ctx);
            }
            RuneKind::Base | RuneKind::Emitter | RuneKind::ManaEmitter => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_emitter_kinds_carry_the_emitter_tag() {
        let tagged: Vec<_> = RuneKind::ALL
            .iter()
            .filter(|k| k.type_tag() == EMITTER_TAG)
            .map(|k| k.name())
            .collect();
        assert_eq!(tagged, vec!["mana_emitter", "emitter"]);
        assert!(Rune::mana_emitter(0, 0).is_emitter());
        assert!(!Rune::amplifier(0, 0).is_emitter());
        assert!(!Rune::transmit(0, 0).is_emitter());
        assert!(!Rune::void(0, 0).is_emitter());
    }

    #[test]
    fn transmit_defaults_north_and_rotates_in_place() {
        let mut rune = Rune::transmit(3, -2);
        assert_eq!(rune.direction(), Some(Direction::North));
        assert_eq!(rune.rotate(), Some(Direction::NorthEast));
        for _ in 0..7 {
            rune.rotate();
        }
        assert_eq!(rune.direction(), Some(Direction::NorthEast));
        assert_eq!(rune.coord(), Coord::new(3, -2));
    }

    #[test]
    fn full_turn_restores_facing() {
        let mut rune = Rune::transmit(0, 0).facing(Direction::West);
        for _ in 0..8 {
            rune.rotate();
        }
        assert_eq!(rune.direction(), Some(Direction::West));
    }

    #[test]
    fn non_directional_runes_ignore_facing() {
        let mut rune = Rune::void(1, 1).facing(Direction::South);
        assert_eq!(rune.direction(), None);
        assert_eq!(rune.rotate(), None);
        assert_eq!(rune.set_direction(Direction::East), None);
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in RuneKind::ALL {
            assert_eq!(RuneKind::parse(kind.name()).unwrap(), kind);
        }
        assert_eq!(RuneKind::parse("Mana-Emitter").unwrap(), RuneKind::ManaEmitter);
        assert!(matches!(
            RuneKind::parse("teleporter"),
            Err(CoreError::UnknownRuneKind(_))
        ));
    }

    #[test]
    fn on_create_announces_placement() {
        let mut log = EventLog::new(0);
        Rune::transmit(0, 1)
            .facing(Direction::East)
            .on_create(&mut log, 0);
        assert_eq!(log.len(), 1);
        assert_eq!(
            log.events()[0].kind,
            BoardEventKind::RunePlaced {
                at: Coord::new(0, 1),
                rune: "TransmitRune",
                icon: "fa/arrow-up-long.svg",
                facing: Some(Direction::East),
            }
        );
    }
}
