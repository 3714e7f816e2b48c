//! Ray attacks for bishops, rooks, and queens.
//!
//! A ray walks one square at a time. Empty squares are recorded and the walk
//! continues; the first occupied square is recorded (friend or foe) and the
//! walk stops. Recording friendly blockers lets the board weight see defended
//! pieces; the legal-move filter drops them as actual moves.

use crate::game_state::board_position::BoardPosition;
use crate::game_state::chess_types::{PieceKind, Player};
use crate::game_state::packed_board::PackedBoard;
use crate::moves::chess_move::ChessMove;

/// Up-right, up-left, down-left, down-right.
pub const DIAGONAL_STEPS: [(i8, i8); 4] = [(-1, 1), (-1, -1), (1, -1), (1, 1)];

/// Right, left, up, down.
pub const ORTHOGONAL_STEPS: [(i8, i8); 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];

/// Walks each of `steps` from `from`, pushing one attack per reached square.
/// With `single_step` the walk stops after the first square (king movement).
pub fn trace_rays(
    board: &PackedBoard,
    from: BoardPosition,
    steps: &[(i8, i8)],
    single_step: bool,
    piece_kind: PieceKind,
    player: Player,
    out: &mut Vec<ChessMove>,
) {
    for &(d_row, d_col) in steps {
        let mut target = from.translate(d_row, d_col);
        while target.in_bounds() {
            out.push(ChessMove::new(from, target).by(piece_kind, player));
            if single_step || !board.get(target).is_empty() {
                break;
            }
            target = target.translate(d_row, d_col);
        }
    }
}

#[inline]
pub fn bishop_attacks(board: &PackedBoard, from: BoardPosition, player: Player, out: &mut Vec<ChessMove>) {
    trace_rays(board, from, &DIAGONAL_STEPS, false, PieceKind::Bishop, player, out);
}

#[inline]
pub fn rook_attacks(board: &PackedBoard, from: BoardPosition, player: Player, out: &mut Vec<ChessMove>) {
    trace_rays(board, from, &ORTHOGONAL_STEPS, false, PieceKind::Rook, player, out);
}

#[inline]
pub fn queen_attacks(board: &PackedBoard, from: BoardPosition, player: Player, out: &mut Vec<ChessMove>) {
    trace_rays(board, from, &ORTHOGONAL_STEPS, false, PieceKind::Queen, player, out);
    trace_rays(board, from, &DIAGONAL_STEPS, false, PieceKind::Queen, player, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::ChessPiece;

    fn pos(s: &str) -> BoardPosition {
        s.parse().expect("test square should parse")
    }

    fn targets(moves: &[ChessMove]) -> Vec<String> {
        moves.iter().map(|m| m.end().to_string()).collect()
    }

    #[test]
    fn rook_on_empty_board_sees_fourteen_squares() {
        let board = PackedBoard::empty();
        let mut out = Vec::new();
        rook_attacks(&board, pos("d4"), Player::Light, &mut out);
        assert_eq!(out.len(), 14);
        assert!(out.iter().all(|m| m.piece_kind() == PieceKind::Rook));
    }

    #[test]
    fn rays_stop_on_and_include_the_first_blocker() {
        let mut board = PackedBoard::empty();
        board.set(pos("f6"), ChessPiece::new(PieceKind::Pawn, Player::Light));
        board.set(pos("b2"), ChessPiece::new(PieceKind::Knight, Player::Dark));
        let mut out = Vec::new();
        bishop_attacks(&board, pos("d4"), Player::Light, &mut out);

        let seen = targets(&out);
        assert!(seen.contains(&"f6".to_owned()), "friendly blocker is recorded");
        assert!(!seen.contains(&"g7".to_owned()));
        assert!(seen.contains(&"b2".to_owned()), "enemy blocker is recorded");
        assert!(!seen.contains(&"a1".to_owned()));
        // e5 f6 | c5 b6 a7 | c3 b2 | e3 f2 g1
        assert_eq!(out.len(), 10);
    }

    #[test]
    fn queen_from_corner_on_empty_board() {
        let board = PackedBoard::empty();
        let mut out = Vec::new();
        queen_attacks(&board, pos("a1"), Player::Dark, &mut out);
        assert_eq!(out.len(), 21);
    }
}
