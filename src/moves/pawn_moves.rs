//! Pawn pushes and pawn diagonal attacks.
//!
//! Pushes and attacks are separate generators: a push never captures, and the
//! diagonal attacks are enumerated whether or not anything stands on them.
//! Turning attacks into captures and en passant moves happens in
//! `move_generation::legal_moves_pawn`.

use crate::game_state::board_position::BoardPosition;
use crate::game_state::chess_rules::PROMOTION_KINDS;
use crate::game_state::chess_types::{PieceKind, Player};
use crate::game_state::packed_board::PackedBoard;
use crate::moves::chess_move::ChessMove;

/// Forward pushes for the pawn on `from`.
///
/// One square if empty (four promotion variants on the last row), and two
/// squares from the starting row when both squares ahead are empty.
pub fn pawn_pushes(board: &PackedBoard, from: BoardPosition, player: Player, out: &mut Vec<ChessMove>) {
    let forward = player.forward();
    let one = from.translate(forward, 0);
    if !one.in_bounds() || !board.get(one).is_empty() {
        return;
    }

    if one.row() == player.promotion_row() {
        push_promotions(from, one, player, out);
    } else {
        out.push(ChessMove::new(from, one).by(PieceKind::Pawn, player));
    }

    if from.row() == player.pawn_row() {
        let two = from.translate(2 * forward, 0);
        if two.in_bounds() && board.get(two).is_empty() {
            out.push(ChessMove::new(from, two).by(PieceKind::Pawn, player));
        }
    }
}

/// The two forward diagonals of `from`, whenever they are on the board.
pub fn pawn_attacks(from: BoardPosition, player: Player, out: &mut Vec<ChessMove>) {
    let forward = player.forward();
    for d_col in [-1, 1] {
        let target = from.translate(forward, d_col);
        if target.in_bounds() {
            out.push(ChessMove::new(from, target).by(PieceKind::Pawn, player));
        }
    }
}

/// One promotion move per entry of [`PROMOTION_KINDS`].
pub fn push_promotions(from: BoardPosition, to: BoardPosition, player: Player, out: &mut Vec<ChessMove>) {
    for promoted in PROMOTION_KINDS {
        out.push(ChessMove::promotion(from, to, promoted).by(PieceKind::Pawn, player));
    }
}
