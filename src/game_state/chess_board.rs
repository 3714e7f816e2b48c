//! The mutable game board.
//!
//! `ChessBoard` owns the packed squares, the move history, the half-move draw
//! counter, and the derived check/advantage flags. `apply_move` and
//! `undo_last_move` are the only operations that change square contents;
//! everything else is a query.
//!
//! Legal moves for the current position are cached after the first
//! enumeration. Applying a move stashes that cache and undoing restores it, so
//! a search that walks down and back up the tree only generates each
//! position's moves once.

use std::fmt;

use tracing::{trace, warn};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board_position::BoardPosition;
use crate::game_state::chess_rules::DRAW_COUNTER_LIMIT;
use crate::game_state::chess_types::{ChessPiece, GameAdvantage, PieceKind, Player};
use crate::game_state::packed_board::PackedBoard;
use crate::move_generation::attacked_squares::is_king_attacked;
use crate::move_generation::legal_move_apply::{apply_unchecked, undo_unchecked};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::chess_move::ChessMove;
use crate::search::board_scoring::material_advantage;

/// Where the game stands for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    /// The side to move is in check and has at least one reply.
    Check,
    /// The side to move is mated; carries the winner.
    Checkmate(Player),
    Stalemate,
    /// The half-move draw counter reached its limit.
    Draw,
}

impl GameStatus {
    #[inline]
    pub const fn is_finished(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate(_) | GameStatus::Stalemate | GameStatus::Draw
        )
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Check => write!(f, "check"),
            GameStatus::Checkmate(winner) => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "stalemate"),
            GameStatus::Draw => write!(f, "draw by the {DRAW_COUNTER_LIMIT} half-move rule"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChessBoard {
    pub(crate) squares: PackedBoard,
    pub(crate) history: Vec<ChessMove>,
    /// Half-move clock, one entry per applied move.
    pub(crate) draw_counter: Vec<u16>,
    pub(crate) current_player: Player,
    /// Whether the king of `current_player` is attacked.
    pub(crate) in_check: bool,
    pub(crate) advantage: GameAdvantage,
    pub(crate) legal_cache: Option<Vec<ChessMove>>,
    /// Caches of the positions below the current one, parallel to `history`.
    pub(crate) saved_moves: Vec<Option<Vec<ChessMove>>>,
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::new_game()
    }
}

impl ChessBoard {
    /// Standard starting position with Light to move.
    pub fn new_game() -> Self {
        Self::from_squares(PackedBoard::starting_position())
    }

    /// Builds a board from explicit placements. Light moves first.
    ///
    /// Empty pieces in the list clear their square; later placements win.
    /// Fails unless the result has exactly one king per player.
    pub fn from_placements<I>(placements: I) -> ChessResult<Self>
    where
        I: IntoIterator<Item = (BoardPosition, ChessPiece)>,
    {
        let mut squares = PackedBoard::empty();
        for (pos, piece) in placements {
            if !pos.in_bounds() {
                return Err(ChessError::InvalidSquare(pos.to_string()));
            }
            squares.set(pos, piece);
        }

        let light = squares.positions_of(PieceKind::King, Player::Light).len();
        let dark = squares.positions_of(PieceKind::King, Player::Dark).len();
        if light != 1 || dark != 1 {
            return Err(ChessError::KingCount { light, dark });
        }

        Ok(Self::from_squares(squares))
    }

    fn from_squares(squares: PackedBoard) -> Self {
        let in_check = is_king_attacked(&squares, Player::Light);
        let advantage = material_advantage(&squares);
        Self {
            squares,
            history: Vec::new(),
            draw_counter: Vec::new(),
            current_player: Player::Light,
            in_check,
            advantage,
            legal_cache: None,
            saved_moves: Vec::new(),
        }
    }

    #[inline]
    pub fn squares(&self) -> &PackedBoard {
        &self.squares
    }

    /// Piece on an in-bounds square.
    ///
    /// # Panics
    /// If `pos` is off the board.
    #[inline]
    pub fn piece_at(&self, pos: BoardPosition) -> ChessPiece {
        self.squares.get(pos)
    }

    /// Owner of the piece on `pos`, or `None` when empty or off the board.
    #[inline]
    pub fn player_at(&self, pos: BoardPosition) -> Option<Player> {
        if !pos.in_bounds() {
            return None;
        }
        self.squares.get(pos).player()
    }

    #[inline]
    pub fn is_empty(&self, pos: BoardPosition) -> bool {
        pos.in_bounds() && self.squares.get(pos).is_empty()
    }

    /// Whether `pos` holds a piece belonging to the opponent of `player`.
    #[inline]
    pub fn is_enemy(&self, pos: BoardPosition, player: Player) -> bool {
        self.player_at(pos) == Some(player.opposite())
    }

    #[inline]
    pub const fn is_in_bounds(pos: BoardPosition) -> bool {
        pos.in_bounds()
    }

    #[inline]
    pub fn positions_of(&self, kind: PieceKind, player: Player) -> Vec<BoardPosition> {
        self.squares.positions_of(kind, player)
    }

    #[inline]
    pub const fn current_player(&self) -> Player {
        self.current_player
    }

    #[inline]
    pub fn move_history(&self) -> &[ChessMove] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<&ChessMove> {
        self.history.last()
    }

    /// Current half-move clock; 0 before any move.
    #[inline]
    pub fn draw_counter(&self) -> u16 {
        self.draw_counter.last().copied().unwrap_or(0)
    }

    #[inline]
    pub const fn current_advantage(&self) -> GameAdvantage {
        self.advantage
    }

    /// Whether the side to move has its king attacked, regardless of replies.
    #[inline]
    pub const fn king_in_check(&self) -> bool {
        self.in_check
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Every legal move for the side to move, in generation order.
    pub fn legal_moves(&mut self) -> Vec<ChessMove> {
        self.cached_moves().to_vec()
    }

    fn cached_moves(&mut self) -> &[ChessMove] {
        if self.legal_cache.is_none() {
            let moves = generate_legal_moves(self);
            self.legal_cache = Some(moves);
        }
        self.legal_cache.as_deref().unwrap_or(&[])
    }

    fn has_legal_moves(&mut self) -> bool {
        !self.cached_moves().is_empty()
    }

    /// In check with at least one legal reply.
    pub fn is_check(&mut self) -> bool {
        self.in_check && self.has_legal_moves()
    }

    pub fn is_checkmate(&mut self) -> bool {
        self.in_check && !self.has_legal_moves()
    }

    pub fn is_stalemate(&mut self) -> bool {
        !self.in_check && !self.has_legal_moves()
    }

    #[inline]
    pub fn is_draw(&self) -> bool {
        self.draw_counter() >= DRAW_COUNTER_LIMIT
    }

    /// Checkmate, stalemate, or a draw by the half-move counter.
    pub fn is_finished(&mut self) -> bool {
        self.is_draw() || !self.has_legal_moves()
    }

    /// A position without legal moves is reported as mate or stalemate even
    /// when the draw counter has also run out.
    pub fn status(&mut self) -> GameStatus {
        if !self.has_legal_moves() {
            return if self.in_check {
                GameStatus::Checkmate(self.current_player.opposite())
            } else {
                GameStatus::Stalemate
            };
        }
        if self.is_draw() {
            GameStatus::Draw
        } else if self.in_check {
            GameStatus::Check
        } else {
            GameStatus::InProgress
        }
    }

    /// The legal move equal to `mv`, with its authoritative kind and mover.
    ///
    /// Move equality ignores the kind, so a plain `(e5, d6)` resolves to the
    /// en passant capture when that is what the position allows.
    pub fn resolve_move(&mut self, mv: &ChessMove) -> ChessResult<ChessMove> {
        self.cached_moves()
            .iter()
            .find(|legal| *legal == mv)
            .copied()
            .ok_or_else(|| ChessError::IllegalMove(mv.to_string()))
    }

    /// Applies a legal move and returns the recorded copy (with its capture).
    ///
    /// A move outside the legal set is rejected and the board is unchanged.
    pub fn apply_move(&mut self, mv: &ChessMove) -> ChessResult<ChessMove> {
        let resolved = match self.resolve_move(mv) {
            Ok(resolved) => resolved,
            Err(err) => {
                warn!(%mv, player = %self.current_player, "rejected move");
                return Err(err);
            }
        };
        let record = apply_unchecked(self, resolved)?;
        trace!(mv = %record, kind = ?record.kind(), "applied move");
        Ok(record)
    }

    /// Reverses the most recent move and returns it.
    pub fn undo_last_move(&mut self) -> ChessResult<ChessMove> {
        let mv = undo_unchecked(self).ok_or(ChessError::EmptyHistory)?;
        trace!(mv = %mv, "undid move");
        Ok(mv)
    }

    /// Undoes up to `plies` moves, stopping early when the history runs out.
    /// Returns how many were undone.
    pub fn undo_turn(&mut self, plies: usize) -> usize {
        let mut undone = 0;
        while undone < plies && undo_unchecked(self).is_some() {
            undone += 1;
        }
        undone
    }
}
