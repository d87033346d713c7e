//! Error types for the rune engine.

use crate::resource::Resource;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by board construction and explicit ledger or rune operations.
///
/// Packet routing itself never fails: missing targets and revisited edges
/// simply end a path.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A rune already occupies the cell and the board rejects overwrites.
    #[error("cell ({x}, {y}) is already occupied by {occupant}")]
    CellOccupied {
        /// Column of the occupied cell.
        x: i32,
        /// Row of the occupied cell.
        y: i32,
        /// Class name of the rune already placed there.
        occupant: &'static str,
    },

    /// No rune is placed at the requested cell.
    #[error("no rune at ({x}, {y})")]
    RuneNotFound {
        /// Column of the empty cell.
        x: i32,
        /// Row of the empty cell.
        y: i32,
    },

    /// The rune at the requested cell has no facing to change.
    #[error("{kind} at ({x}, {y}) has no direction")]
    NotDirectional {
        /// Column of the rune.
        x: i32,
        /// Row of the rune.
        y: i32,
        /// Class name of the rune.
        kind: &'static str,
    },

    /// The bank cannot cover a withdrawal.
    #[error("insufficient {resource}: requested {requested}, available {available}")]
    InsufficientFunds {
        /// The first resource that fell short.
        resource: Resource,
        /// Amount requested.
        requested: i64,
        /// Amount held in the bank.
        available: i64,
    },

    /// A rune kind name could not be recognized.
    #[error("unknown rune kind: \"{0}\"")]
    UnknownRuneKind(String),

    /// A direction name could not be recognized.
    #[error("invalid direction: \"{0}\"")]
    InvalidDirection(String),
}
