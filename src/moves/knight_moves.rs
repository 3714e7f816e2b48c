//! Knight jump generation.

use crate::game_state::board_position::BoardPosition;
use crate::game_state::chess_types::{PieceKind, Player};
use crate::moves::chess_move::ChessMove;

pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, 1),
    (-2, -1),
    (2, 1),
    (2, -1),
    (-1, 2),
    (1, 2),
    (-1, -2),
    (1, -2),
];

/// Every in-bounds jump from `from`, regardless of occupancy.
pub fn knight_attacks(from: BoardPosition, player: Player, out: &mut Vec<ChessMove>) {
    for (d_row, d_col) in KNIGHT_JUMPS {
        let target = from.translate(d_row, d_col);
        if target.in_bounds() {
            out.push(ChessMove::new(from, target).by(PieceKind::Knight, player));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_in_the_centre_has_eight_targets() {
        let mut out = Vec::new();
        knight_attacks(BoardPosition::new(4, 3), Player::Light, &mut out);
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn knight_in_the_corner_has_two_targets() {
        let mut out = Vec::new();
        knight_attacks(BoardPosition::new(7, 0), Player::Light, &mut out);
        let mut ends: Vec<_> = out.iter().map(|m| m.end()).collect();
        ends.sort();
        assert_eq!(ends, vec![BoardPosition::new(5, 1), BoardPosition::new(6, 2)]);
    }
}
