//! Pawn captures and en passant candidates.
//!
//! Diagonal attacks become captures only when an enemy piece stands on the
//! target. An empty target is an en passant candidate when the previous move
//! was an enemy pawn's two-square advance landing beside the capturing pawn.

use crate::game_state::board_position::BoardPosition;
use crate::game_state::chess_board::ChessBoard;
use crate::game_state::chess_types::{PieceKind, Player};
use crate::moves::chess_move::{ChessMove, MoveKind};
use crate::moves::pawn_moves::{pawn_attacks, pawn_pushes, push_promotions};

/// Captures (with promotion variants on the last row) and en passant moves
/// for every pawn of `player`.
pub fn pawn_captures(board: &ChessBoard, player: Player, out: &mut Vec<ChessMove>) {
    let mut diagonals = Vec::with_capacity(2);
    for from in board.positions_of(PieceKind::Pawn, player) {
        diagonals.clear();
        pawn_attacks(from, player, &mut diagonals);

        for target in diagonals.iter().map(ChessMove::end) {
            if board.is_enemy(target, player) {
                if target.row() == player.promotion_row() {
                    push_promotions(from, target, player, out);
                } else {
                    out.push(ChessMove::new(from, target).by(PieceKind::Pawn, player));
                }
            } else if en_passant_available(board, from, target, player) {
                out.push(
                    ChessMove::with_kind(from, target, MoveKind::EnPassant)
                        .by(PieceKind::Pawn, player),
                );
            }
        }
    }
}

/// Forward pushes for every pawn of `player`.
pub fn pawn_advances(board: &ChessBoard, player: Player, out: &mut Vec<ChessMove>) {
    for from in board.positions_of(PieceKind::Pawn, player) {
        pawn_pushes(board.squares(), from, player, out);
    }
}

/// Whether the pawn on `from` may capture en passant onto `target`.
pub fn en_passant_available(
    board: &ChessBoard,
    from: BoardPosition,
    target: BoardPosition,
    player: Player,
) -> bool {
    if from.row() != player.en_passant_row() || !board.is_empty(target) {
        return false;
    }

    let beside = BoardPosition::new(from.row(), target.col());
    if !board.piece_at(beside).is(PieceKind::Pawn, player.opposite()) {
        return false;
    }

    let double_push_start = beside.translate(2 * player.forward(), 0);
    board.last_move().is_some_and(|last| {
        last.piece_kind() == PieceKind::Pawn
            && last.start() == double_push_start
            && last.end() == beside
    })
}
