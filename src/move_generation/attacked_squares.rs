//! Attacked-square sets.
//!
//! The attack set of a player is the union of the pseudo-legal attack
//! destinations of all of its pieces. Check detection uses the deduplicated
//! [`AttackSet`]; the board weight also needs the raw list in which a square
//! attacked by two pieces appears twice.

use crate::game_state::board_position::BoardPosition;
use crate::game_state::chess_types::{PieceKind, Player};
use crate::game_state::packed_board::PackedBoard;
use crate::moves::chess_move::ChessMove;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::sliding_moves::{bishop_attacks, queen_attacks, rook_attacks};

/// A set of squares, one bit per `BoardPosition::index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AttackSet(u64);

impl AttackSet {
    pub const EMPTY: AttackSet = AttackSet(0);

    #[inline]
    pub fn insert(&mut self, pos: BoardPosition) {
        self.0 |= 1u64 << pos.index();
    }

    #[inline]
    pub fn contains(self, pos: BoardPosition) -> bool {
        pos.in_bounds() && self.0 & (1u64 << pos.index()) != 0
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in row-major order.
    pub fn iter(self) -> impl Iterator<Item = BoardPosition> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let index = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            Some(BoardPosition::from_index(index))
        })
    }
}

impl FromIterator<BoardPosition> for AttackSet {
    fn from_iter<I: IntoIterator<Item = BoardPosition>>(iter: I) -> Self {
        let mut set = AttackSet::EMPTY;
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}

/// Every pseudo-legal attack of `player`'s pieces, scanning the board once in
/// row-major order.
pub fn pseudo_attacks(board: &PackedBoard, player: Player) -> Vec<ChessMove> {
    let mut out = Vec::with_capacity(64);
    for (from, piece) in board.occupied() {
        if !piece.belongs_to(player) {
            continue;
        }
        match piece.kind() {
            PieceKind::Rook => rook_attacks(board, from, player, &mut out),
            PieceKind::Knight => knight_attacks(from, player, &mut out),
            PieceKind::Bishop => bishop_attacks(board, from, player, &mut out),
            PieceKind::Queen => queen_attacks(board, from, player, &mut out),
            PieceKind::King => king_attacks(board, from, player, &mut out),
            PieceKind::Pawn => pawn_attacks(from, player, &mut out),
            PieceKind::Empty => {}
        }
    }
    out
}

/// Squares attacked by `by_player`, each counted once.
pub fn attacked_positions(board: &PackedBoard, by_player: Player) -> AttackSet {
    pseudo_attacks(board, by_player)
        .iter()
        .map(ChessMove::end)
        .collect()
}

/// Squares attacked by `by_player`, once per attacking piece.
pub fn all_attacked_positions(board: &PackedBoard, by_player: Player) -> Vec<BoardPosition> {
    pseudo_attacks(board, by_player)
        .iter()
        .map(ChessMove::end)
        .collect()
}

#[inline]
pub fn is_position_attacked(board: &PackedBoard, pos: BoardPosition, by_player: Player) -> bool {
    attacked_positions(board, by_player).contains(pos)
}

#[inline]
pub fn king_position(board: &PackedBoard, player: Player) -> Option<BoardPosition> {
    board.positions_of(PieceKind::King, player).into_iter().next()
}

/// Whether `player`'s king stands on a square the opponent attacks.
pub fn is_king_attacked(board: &PackedBoard, player: Player) -> bool {
    king_position(board, player)
        .is_some_and(|king| is_position_attacked(board, king, player.opposite()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::ChessPiece;

    fn pos(s: &str) -> BoardPosition {
        s.parse().expect("test square should parse")
    }

    #[test]
    fn starting_position_attack_sets() {
        let board = PackedBoard::starting_position();
        let light = attacked_positions(&board, Player::Light);
        // Rank 2 and rank 3 are covered, plus the back-rank pieces defended
        // by neighbours (b1 c1 d1 e1 f1 g1).
        assert!(light.contains(pos("e3")));
        assert!(light.contains(pos("a3")));
        assert!(!light.contains(pos("e4")));
        assert_eq!(light.len(), 22);

        let dark = attacked_positions(&board, Player::Dark);
        assert!(dark.contains(pos("f6")));
        assert!(!dark.contains(pos("f5")));
    }

    #[test]
    fn duplicate_list_keeps_every_attacker() {
        let board = PackedBoard::starting_position();
        let all = all_attacked_positions(&board, Player::Light);
        let set = attacked_positions(&board, Player::Light);
        assert!(all.len() > set.len());
        let e3_count = all.iter().filter(|&&p| p == pos("e3")).count();
        // d2 and f2 pawns
        assert_eq!(e3_count, 2);
    }

    #[test]
    fn king_attack_detection() {
        let mut board = PackedBoard::empty();
        board.set(pos("e1"), ChessPiece::new(PieceKind::King, Player::Light));
        board.set(pos("e8"), ChessPiece::new(PieceKind::King, Player::Dark));
        board.set(pos("e5"), ChessPiece::new(PieceKind::Rook, Player::Dark));
        assert!(is_king_attacked(&board, Player::Light));
        assert!(!is_king_attacked(&board, Player::Dark));

        board.set(pos("e2"), ChessPiece::new(PieceKind::Bishop, Player::Light));
        assert!(!is_king_attacked(&board, Player::Light));
    }

    #[test]
    fn attack_set_iterates_row_major() {
        let set: AttackSet = [pos("h1"), pos("a8"), pos("d4")].into_iter().collect();
        let order: Vec<_> = set.iter().collect();
        assert_eq!(order, vec![pos("a8"), pos("d4"), pos("h1")]);
        assert!(!set.contains(BoardPosition::new(-1, 0)));
    }
}
