use crate::coord::Coord;
use crate::direction::Direction;
use crate::resource::Resources;

/// What happened on the board.
///
/// `RunePlaced` and `DirectionChanged` are notifications for the presentation
/// layer and are always recorded. The remaining kinds trace packet routing and
/// are only recorded when tracing is enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEventKind {
    // Notifications
    /// A rune was placed and its `on_create` hook ran.
    RunePlaced {
        /// Cell the rune occupies.
        at: Coord,
        /// Class name of the rune, e.g. `VoidRune`.
        rune: &'static str,
        /// Icon identifier for rendering.
        icon: &'static str,
        /// Initial facing of directional runes.
        facing: Option<Direction>,
    },
    /// A directional rune changed its facing.
    DirectionChanged {
        /// Cell of the rotated rune.
        at: Coord,
        /// Facing before the change.
        from: Direction,
        /// Facing after the change.
        to: Direction,
    },

    // Trace
    /// An emitter's `on_cast` hook ran.
    Cast {
        /// Cell of the emitter.
        at: Coord,
    },
    /// A packet was routed onto a rune.
    Received {
        /// Cell of the receiving rune.
        at: Coord,
        /// Direction the packet travelled to get there.
        arrival: Direction,
        /// Resources carried at arrival.
        resources: Resources,
    },
    /// A sink moved packet resources into the bank.
    Deposited {
        /// Cell of the sink.
        at: Coord,
        /// Resources deposited.
        resources: Resources,
    },
    /// A packet reached an edge its chain had already crossed and stopped.
    EdgeRevisited {
        /// Cell the packet tried to enter.
        at: Coord,
        /// Arrival direction of the repeated edge.
        arrival: Direction,
    },
}

impl BoardEventKind {
    /// The cell this event concerns.
    pub fn at(&self) -> Coord {
        match self {
            Self::RunePlaced { at, .. }
            | Self::DirectionChanged { at, .. }
            | Self::Cast { at }
            | Self::Received { at, .. }
            | Self::Deposited { at, .. }
            | Self::EdgeRevisited { at, .. } => *at,
        }
    }

    /// Returns true for events the presentation layer must react to.
    pub fn is_notification(&self) -> bool {
        matches!(
            self,
            Self::RunePlaced { .. } | Self::DirectionChanged { .. }
        )
    }
}

/// A record of something that happened on the board.
#[derive(Debug, Clone)]
pub struct BoardEvent {
    /// Number of casts completed before this event, or the running cast.
    pub cast: u64,
    /// The specific kind of event.
    pub kind: BoardEventKind,
    /// A human-readable description of the event.
    pub description: String,
}

impl BoardEvent {
    /// Create a board event.
    pub fn new(cast: u64, kind: BoardEventKind, description: impl Into<String>) -> Self {
        Self {
            cast,
            kind,
            description: description.into(),
        }
    }
}

/// Accumulates board events.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<BoardEvent>,
    max_events: usize,
}

impl EventLog {
    /// Create a new event log with the given maximum capacity (0 = unlimited).
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Vec::new(),
            max_events,
        }
    }

    /// Append an event, dropping the oldest events if the log exceeds its capacity.
    pub fn push(&mut self, event: BoardEvent) {
        self.events.push(event);
        if self.max_events > 0 && self.events.len() > self.max_events {
            let drain_count = self.events.len() - self.max_events;
            self.events.drain(..drain_count);
        }
    }

    /// Return a slice of all recorded events.
    pub fn events(&self) -> &[BoardEvent] {
        &self.events
    }

    /// Return all events recorded during the given cast.
    pub fn events_in_cast(&self, cast: u64) -> Vec<&BoardEvent> {
        self.events.iter().filter(|e| e.cast == cast).collect()
    }

    /// Return all events concerning the given cell.
    pub fn events_at(&self, at: Coord) -> Vec<&BoardEvent> {
        self.events.iter().filter(|e| e.kind.at() == at).collect()
    }

    /// Return only the presentation notifications.
    pub fn notifications(&self) -> Vec<&BoardEvent> {
        self.events
            .iter()
            .filter(|e| e.kind.is_notification())
            .collect()
    }

    /// Return the number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Return `true` if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Remove all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cast_at(cast: u64, x: i32, y: i32) -> BoardEvent {
        BoardEvent::new(
            cast,
            BoardEventKind::Cast {
                at: Coord::new(x, y),
            },
            "test",
        )
    }

    #[test]
    fn log_max_events_trims_oldest() {
        let mut log = EventLog::new(2);
        for i in 0..5 {
            log.push(cast_at(i, 0, 0));
        }
        assert_eq!(log.len(), 2);
        assert_eq!(log.events()[0].cast, 3);
        assert_eq!(log.events()[1].cast, 4);
    }

    #[test]
    fn log_filters_by_cast_and_cell() {
        let mut log = EventLog::new(0);
        log.push(cast_at(1, 0, 0));
        log.push(cast_at(1, 2, 2));
        log.push(cast_at(2, 0, 0));
        assert_eq!(log.events_in_cast(1).len(), 2);
        assert_eq!(log.events_at(Coord::ORIGIN).len(), 2);
        assert!(log.events_at(Coord::new(9, 9)).is_empty());
        assert!(log.notifications().is_empty());
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn notifications_are_placement_and_rotation() {
        let placed = BoardEventKind::RunePlaced {
            at: Coord::ORIGIN,
            rune: "VoidRune",
            icon: "fa/arrows-to-dot.svg",
            facing: None,
        };
        let turned = BoardEventKind::DirectionChanged {
            at: Coord::new(1, 1),
            from: Direction::North,
            to: Direction::NorthEast,
        };
        let revisit = BoardEventKind::EdgeRevisited {
            at: Coord::ORIGIN,
            arrival: Direction::West,
        };
        assert!(placed.is_notification());
        assert!(turned.is_notification());
        assert!(!revisit.is_notification());
        assert_eq!(turned.at(), Coord::new(1, 1));
    }
}
