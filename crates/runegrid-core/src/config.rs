/// What happens when a rune is placed on an occupied cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Placement {
    /// The new rune replaces the occupant.
    #[default]
    Overwrite,
    /// The placement fails and the board is left unchanged.
    Reject,
}

/// Configuration for a board.
#[derive(Debug, Clone, Default)]
pub struct BoardConfig {
    /// Record cast, receive and deposit events in the event log.
    pub trace: bool,
    /// Maximum event log size (oldest events dropped when exceeded). 0 = unlimited.
    pub max_events: usize,
    /// Policy for placing onto occupied cells.
    pub placement: Placement,
}

impl BoardConfig {
    /// Enable or disable routing trace events.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Set the maximum event log size (0 = unlimited).
    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = max;
        self
    }

    /// Set the policy for placing onto occupied cells.
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }
}
