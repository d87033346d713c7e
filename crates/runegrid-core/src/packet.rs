use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::context::CastContext;
use crate::coord::Coord;
use crate::direction::Direction;
use crate::event::BoardEventKind;
use crate::resource::Resources;
use crate::rune::Rune;

/// A (target cell, arrival direction) pair. Each is crossed at most once per packet chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Cell being entered.
    pub at: Coord,
    /// Direction of travel when entering it.
    pub arrival: Direction,
}

impl Edge {
    /// Create an edge key.
    pub fn new(at: Coord, arrival: Direction) -> Self {
        Self { at, arrival }
    }
}

/// Visited-edge set shared by every packet derived from one emission.
pub type VisitedEdges = Rc<RefCell<HashSet<Edge>>>;

/// A bundle of resources in flight between runes.
#[derive(Debug, Clone)]
pub struct Packet {
    /// Quantities carried by this packet.
    pub resources: Resources,
    visited: VisitedEdges,
}

impl Packet {
    /// A freshly emitted packet with its own empty visited set.
    pub fn new(resources: Resources) -> Self {
        Self::with_visited(resources, VisitedEdges::default())
    }

    /// A packet that continues the chain tracked by `visited`.
    pub fn with_visited(resources: Resources, visited: VisitedEdges) -> Self {
        Self { resources, visited }
    }

    /// Handle to the visited-edge set.
    pub fn visited(&self) -> VisitedEdges {
        Rc::clone(&self.visited)
    }

    /// Returns true if this chain already crossed `edge`.
    pub fn has_visited(&self, edge: &Edge) -> bool {
        self.visited.borrow().contains(edge)
    }

    /// Number of edges crossed by this chain so far.
    pub fn visited_count(&self) -> usize {
        self.visited.borrow().len()
    }

    /// Returns true if both packets belong to the same chain.
    pub fn shares_chain_with(&self, other: &Packet) -> bool {
        Rc::ptr_eq(&self.visited, &other.visited)
    }

    /// Route this packet onto `target`, arriving in direction `arrival`.
    ///
    /// Crossing an edge a second time is a silent no-op, which is what keeps
    /// relay loops finite.
    pub fn visit(&self, target: &Rune, arrival: Direction, ctx: &mut CastContext<'_>) {
        let edge = Edge::new(target.coord(), arrival);
        let fresh = self.visited.borrow_mut().insert(edge);
        if !fresh {
            ctx.trace(
                BoardEventKind::EdgeRevisited {
                    at: edge.at,
                    arrival,
                },
                format!("Revisit - {arrival} - {}", edge.at),
            );
            return;
        }
        target.on_receive(self, arrival, ctx);
    }

    /// A new packet with an independent copy of the resources, in the same chain.
    pub fn copy(&self) -> Packet {
        Self::with_visited(self.resources.clone(), self.visited())
    }

    /// A copy carrying one more of every resource, in the same chain.
    pub fn amplified(&self) -> Packet {
        let mut packet = self.copy();
        packet.resources.increment_all(1);
        packet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::Resource;

    #[test]
    fn fresh_packets_do_not_share_chains() {
        let a = Packet::new(Resources::mana(1));
        let b = Packet::new(Resources::mana(1));
        assert!(!a.shares_chain_with(&b));
        assert_eq!(a.visited_count(), 0);
    }

    #[test]
    fn copy_shares_edges_but_not_resources() {
        let original = Packet::new(Resources::mana(1));
        let mut copy = original.copy();
        copy.resources.increment_all(1);
        assert_eq!(original.resources.get(&Resource::Mana), 1);
        assert_eq!(copy.resources.get(&Resource::Mana), 2);
        assert!(copy.shares_chain_with(&original));

        let edge = Edge::new(Coord::new(0, 1), Direction::North);
        copy.visited().borrow_mut().insert(edge);
        assert!(original.has_visited(&edge));
        assert_eq!(original.visited_count(), 1);
    }

    #[test]
    fn amplified_adds_one_of_each_resource() {
        let mut resources = Resources::mana(2);
        resources.set(Resource::Custom("ember".into()), 0);
        let packet = Packet::new(resources);

        let amplified = packet.amplified();
        assert_eq!(amplified.resources.get(&Resource::Mana), 3);
        assert_eq!(amplified.resources.get(&Resource::Custom("ember".into())), 1);
        assert_eq!(packet.resources.get(&Resource::Mana), 2);
        assert!(amplified.shares_chain_with(&packet));
    }
}
