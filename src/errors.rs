//! Errors used throughout the chess core.
//!
//! `ChessError` is the single error type returned by board construction, move
//! application, undo, move-text parsing, and the engines. Applying a move that
//! is not in the current legal set, or undoing with an empty history, are
//! contract violations: they are reported as errors and leave the board
//! untouched rather than corrupting it.

use thiserror::Error;

use crate::search::minimax::SearchError;

pub type ChessResult<T> = Result<T, ChessError>;

/// Unified error type for the chess core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// Explicit placements must contain exactly one king per player.
    #[error("a chess board must have a single king for each player (found {light} light, {dark} dark)")]
    KingCount { light: usize, dark: usize },

    /// The move is not a member of the legal-move set for the side to move.
    #[error("illegal move {0}")]
    IllegalMove(String),

    /// `undo_last_move` was called with no applied moves.
    #[error("no moves to undo")]
    EmptyHistory,

    /// A square string was not of the form `a1`..`h8`.
    #[error("invalid square notation: {0:?}")]
    InvalidSquare(String),

    /// Move text was not of the form `(start, end)` or `(start, end, Piece)`.
    #[error("invalid move text: {0:?}")]
    InvalidMoveText(String),

    /// The promotion suffix did not name a queen, rook, knight, or bishop.
    #[error("invalid promotion piece: {0:?}")]
    InvalidPromotion(String),

    /// The search was stopped through its cancellation flag.
    #[error("search cancelled")]
    SearchCancelled,

    /// A background search thread panicked.
    #[error("search worker thread panicked")]
    WorkerPanicked,
}

impl From<SearchError<ChessError>> for ChessError {
    fn from(err: SearchError<ChessError>) -> Self {
        match err {
            SearchError::Board(inner) => inner,
            SearchError::Cancelled => ChessError::SearchCancelled,
            SearchError::WorkerPanicked => ChessError::WorkerPanicked,
        }
    }
}
