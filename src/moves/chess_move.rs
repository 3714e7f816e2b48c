//! The move value passed between the generator, the board, and search.
//!
//! A move records where a piece goes plus the metadata needed to reverse it:
//! the moving piece and player, and whatever was captured. The board fills in
//! the capture when the move is applied, so the copy kept in the move history
//! is the authoritative record for undo.

use std::fmt;

use crate::game_state::board_position::BoardPosition;
use crate::game_state::chess_types::{ChessPiece, PieceKind, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    PawnPromote,
    EnPassant,
    CastleKingSide,
    CastleQueenSide,
}

impl MoveKind {
    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self, MoveKind::CastleKingSide | MoveKind::CastleQueenSide)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ChessMove {
    start: BoardPosition,
    end: BoardPosition,
    kind: MoveKind,
    piece_kind: PieceKind,
    player: Option<Player>,
    captured: Option<ChessPiece>,
    promotion: Option<PieceKind>,
}

impl ChessMove {
    /// A plain move with no mover metadata, as parsed from text.
    #[inline]
    pub const fn new(start: BoardPosition, end: BoardPosition) -> Self {
        Self::with_kind(start, end, MoveKind::Normal)
    }

    #[inline]
    pub const fn with_kind(start: BoardPosition, end: BoardPosition, kind: MoveKind) -> Self {
        Self {
            start,
            end,
            kind,
            piece_kind: PieceKind::Empty,
            player: None,
            captured: None,
            promotion: None,
        }
    }

    /// A pawn promotion to `promoted`.
    #[inline]
    pub const fn promotion(start: BoardPosition, end: BoardPosition, promoted: PieceKind) -> Self {
        Self {
            start,
            end,
            kind: MoveKind::PawnPromote,
            piece_kind: PieceKind::Pawn,
            player: None,
            captured: None,
            promotion: Some(promoted),
        }
    }

    /// Stamps the moving piece and its owner.
    #[inline]
    pub(crate) const fn by(mut self, piece_kind: PieceKind, player: Player) -> Self {
        self.piece_kind = piece_kind;
        self.player = Some(player);
        self
    }

    #[inline]
    pub(crate) fn record_capture(&mut self, captured: Option<ChessPiece>) {
        self.captured = captured;
    }

    #[inline]
    pub const fn start(&self) -> BoardPosition {
        self.start
    }

    #[inline]
    pub const fn end(&self) -> BoardPosition {
        self.end
    }

    #[inline]
    pub const fn kind(&self) -> MoveKind {
        self.kind
    }

    /// Kind of the piece that moved (a promotion reports `Pawn`).
    #[inline]
    pub const fn piece_kind(&self) -> PieceKind {
        self.piece_kind
    }

    #[inline]
    pub const fn player(&self) -> Option<Player> {
        self.player
    }

    /// The piece removed by this move, once applied.
    #[inline]
    pub const fn captured(&self) -> Option<ChessPiece> {
        self.captured
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub const fn promoted_to(&self) -> Option<PieceKind> {
        self.promotion
    }
}

impl PartialEq for ChessMove {
    /// Start and end must match; promotions must also agree on the piece.
    /// The move kind is not compared.
    fn eq(&self, other: &Self) -> bool {
        if self.start != other.start || self.end != other.end {
            return false;
        }
        if self.kind == MoveKind::PawnPromote || other.kind == MoveKind::PawnPromote {
            return self.promotion == other.promotion;
        }
        true
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.promotion {
            Some(promoted) if self.kind == MoveKind::PawnPromote => {
                write!(f, "({}, {}, {})", self.start, self.end, promoted)
            }
            _ => write!(f, "({}, {})", self.start, self.end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> BoardPosition {
        s.parse().expect("test square should parse")
    }

    #[test]
    fn equality_ignores_move_kind() {
        let normal = ChessMove::new(pos("e5"), pos("d6"));
        let en_passant = ChessMove::with_kind(pos("e5"), pos("d6"), MoveKind::EnPassant);
        assert_eq!(normal, en_passant);
        assert_ne!(normal, ChessMove::new(pos("e5"), pos("e6")));
    }

    #[test]
    fn promotions_compare_the_promoted_piece() {
        let queen = ChessMove::promotion(pos("a7"), pos("a8"), PieceKind::Queen);
        let knight = ChessMove::promotion(pos("a7"), pos("a8"), PieceKind::Knight);
        assert_ne!(queen, knight);
        assert_eq!(queen, ChessMove::promotion(pos("a7"), pos("a8"), PieceKind::Queen));
        assert_ne!(queen, ChessMove::new(pos("a7"), pos("a8")));
    }

    #[test]
    fn displays_in_console_notation() {
        assert_eq!(ChessMove::new(pos("e2"), pos("e4")).to_string(), "(e2, e4)");
        assert_eq!(
            ChessMove::promotion(pos("a7"), pos("a8"), PieceKind::Queen).to_string(),
            "(a7, a8, Queen)"
        );
    }
}
