use crate::bank::Bank;
use crate::board::{CastReport, Cells};
use crate::coord::Coord;
use crate::event::{BoardEvent, BoardEventKind, EventLog};
use crate::resource::Resources;

/// Mutable state threaded through one cast's call tree.
///
/// Runes read the board through [`CastContext::cells`] and write only to the
/// bank and the event log.
pub struct CastContext<'a> {
    cells: &'a Cells,
    bank: &'a mut Bank,
    events: &'a mut EventLog,
    cast: u64,
    trace: bool,
    deliveries: usize,
    deposited: Resources,
}

impl<'a> CastContext<'a> {
    /// Start a context for cast number `cast`.
    pub fn new(
        cells: &'a Cells,
        bank: &'a mut Bank,
        events: &'a mut EventLog,
        cast: u64,
        trace: bool,
    ) -> Self {
        Self {
            cells,
            bank,
            events,
            cast,
            trace,
            deliveries: 0,
            deposited: Resources::new(),
        }
    }

    /// The runes on the board. The borrow is tied to the board, not to `self`.
    pub fn cells(&self) -> &'a Cells {
        self.cells
    }

    /// Count a packet landing on a rune.
    pub fn record_delivery(&mut self) {
        self.deliveries += 1;
    }

    /// Move `resources` into the bank on behalf of the sink at `at`.
    pub fn deposit(&mut self, at: Coord, resources: &Resources) {
        self.bank.add(resources);
        self.deposited.merge(resources);
        self.trace(
            BoardEventKind::Deposited {
                at,
                resources: resources.clone(),
            },
            format!("Deposit - {at} - {resources}"),
        );
    }

    /// Record a routing trace event. Always forwarded to the `log` facade;
    /// kept in the event log only when tracing is enabled.
    pub fn trace(&mut self, kind: BoardEventKind, description: impl Into<String>) {
        let description = description.into();
        log::trace!("{description}");
        if self.trace {
            self.events.push(BoardEvent::new(self.cast, kind, description));
        }
    }

    /// Close the context and summarize the cast.
    pub fn finish(self, emitters: usize) -> CastReport {
        CastReport {
            cast: self.cast,
            emitters,
            deliveries: self.deliveries,
            deposited: self.deposited,
        }
    }
}
