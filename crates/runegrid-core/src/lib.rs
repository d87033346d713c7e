//! Packet-routing engine for runegrid.
//!
//! Runes placed on a [`Board`] route resource [`Packet`]s to each other along
//! the eight compass directions. A [`Board::cast`] fires every emitter rune;
//! packets travel depth-first through relays until a sink deposits them into
//! a [`Bank`] or the path runs out. Each packet chain remembers the
//! (cell, arrival direction) edges it has crossed, so routing always
//! terminates.
//!
//! Rendering and input are not part of this crate. A presentation layer
//! places runes, rotates them, triggers casts and reads the notifications in
//! the board's [`EventLog`].

/// The resource ledger.
pub mod bank;
/// The grid of runes and cast orchestration.
pub mod board;
/// Configuration types for boards.
pub mod config;
/// Mutable context passed through a cast.
pub mod context;
/// Cell coordinates and the occupied envelope.
pub mod coord;
/// The eight compass directions.
pub mod direction;
/// Error types for the engine.
pub mod error;
/// Board event types and the event log.
pub mod event;
/// Packets and visited-edge tracking.
pub mod packet;
/// Resource kinds and quantity maps.
pub mod resource;
/// Rune variants and their behavior hooks.
pub mod rune;

/// Re-export of [`bank::Bank`].
pub use bank::Bank;
/// Re-exports of [`board::Board`], [`board::CastReport`], [`board::Cells`] and [`board::PlacedRune`].
pub use board::{Board, CastReport, Cells, PlacedRune};
/// Re-exports of [`config::BoardConfig`] and [`config::Placement`].
pub use config::{BoardConfig, Placement};
/// Re-export of [`context::CastContext`].
pub use context::CastContext;
/// Re-exports of [`coord::Bounds`] and [`coord::Coord`].
pub use coord::{Bounds, Coord};
/// Re-export of [`direction::Direction`].
pub use direction::Direction;
/// Re-exports of [`error::CoreError`] and [`error::CoreResult`].
pub use error::{CoreError, CoreResult};
/// Re-exports of [`event::BoardEvent`], [`event::BoardEventKind`] and [`event::EventLog`].
pub use event::{BoardEvent, BoardEventKind, EventLog};
/// Re-exports of [`packet::Edge`] and [`packet::Packet`].
pub use packet::{Edge, Packet};
/// Re-exports of [`resource::Resource`] and [`resource::Resources`].
pub use resource::{Resource, Resources};
/// Re-exports of [`rune::Rune`] and [`rune::RuneKind`].
pub use rune::{Rune, RuneKind};
