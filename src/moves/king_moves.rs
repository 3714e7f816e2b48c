//! King step generation: the sliding rays cut to a single square.

use crate::game_state::board_position::BoardPosition;
use crate::game_state::chess_types::{PieceKind, Player};
use crate::game_state::packed_board::PackedBoard;
use crate::moves::chess_move::ChessMove;
use crate::moves::sliding_moves::{trace_rays, DIAGONAL_STEPS, ORTHOGONAL_STEPS};

#[inline]
pub fn king_attacks(board: &PackedBoard, from: BoardPosition, player: Player, out: &mut Vec<ChessMove>) {
    trace_rays(board, from, &ORTHOGONAL_STEPS, true, PieceKind::King, player, out);
    trace_rays(board, from, &DIAGONAL_STEPS, true, PieceKind::King, player, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn king_attacks_from_a1_has_three_targets() {
        let mut out = Vec::new();
        king_attacks(&PackedBoard::empty(), BoardPosition::new(7, 0), Player::Light, &mut out);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn king_attacks_from_centre_has_eight_targets() {
        let mut out = Vec::new();
        king_attacks(&PackedBoard::empty(), BoardPosition::new(3, 3), Player::Dark, &mut out);
        assert_eq!(out.len(), 8);
    }
}
