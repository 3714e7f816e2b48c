//! Static position scoring: material advantage and the board weight used by
//! search.
//!
//! The weight is from Light's point of view (positive favours Light). Its
//! terms mix material points with advancement and attack counts without any
//! normalisation, and the engine's play depends on exactly that mix.

use crate::game_state::chess_types::{GameAdvantage, PieceKind, Player};
use crate::game_state::packed_board::PackedBoard;
use crate::move_generation::attacked_squares::{all_attacked_positions, attacked_positions};

/// Total material points of `player`'s pieces.
pub fn material_points(board: &PackedBoard, player: Player) -> u32 {
    board
        .occupied()
        .filter(|(_, piece)| piece.belongs_to(player))
        .map(|(_, piece)| piece.kind().material_value())
        .sum()
}

/// Which player leads on material and by how much.
pub fn material_advantage(board: &PackedBoard) -> GameAdvantage {
    let light = material_points(board, Player::Light);
    let dark = material_points(board, Player::Dark);
    match light.cmp(&dark) {
        std::cmp::Ordering::Greater => GameAdvantage {
            leader: Some(Player::Light),
            magnitude: light - dark,
        },
        std::cmp::Ordering::Less => GameAdvantage {
            leader: Some(Player::Dark),
            magnitude: dark - light,
        },
        std::cmp::Ordering::Equal => GameAdvantage::EVEN,
    }
}

/// One side's positional score.
///
/// Sums pawn advancement from the starting row, one point per attack landing
/// on an own knight or bishop (counted once per attacker), and the threat
/// value of every enemy piece standing on an attacked square.
pub fn side_heuristic(board: &PackedBoard, player: Player) -> i64 {
    let opponent = player.opposite();

    let advancement: i64 = board
        .positions_of(PieceKind::Pawn, player)
        .into_iter()
        .map(|pos| i64::from((pos.row() - player.pawn_row()) * player.forward()))
        .sum();

    let defended_minors = all_attacked_positions(board, player)
        .into_iter()
        .filter(|&pos| {
            let piece = board.get(pos);
            piece.belongs_to(player) && piece.kind().is_minor()
        })
        .count() as i64;

    let threats: i64 = attacked_positions(board, player)
        .iter()
        .map(|pos| board.get(pos))
        .filter(|piece| piece.belongs_to(opponent))
        .map(|piece| piece.kind().threat_value())
        .sum();

    advancement + defended_minors + threats
}

/// Light's heuristic minus Dark's, shifted by the material lead.
pub fn board_weight(board: &PackedBoard, advantage: GameAdvantage) -> i64 {
    let positional = side_heuristic(board, Player::Light) - side_heuristic(board, Player::Dark);
    let material = i64::from(advantage.magnitude);
    match advantage.leader {
        Some(Player::Light) => positional + material,
        _ => positional - material,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board_position::BoardPosition;
    use crate::game_state::chess_types::ChessPiece;

    fn board_with(pieces: &[(&str, PieceKind, Player)]) -> PackedBoard {
        let mut board = PackedBoard::empty();
        for &(square, kind, player) in pieces {
            let pos: BoardPosition = square.parse().expect("test square should parse");
            board.set(pos, ChessPiece::new(kind, player));
        }
        board
    }

    #[test]
    fn starting_position_is_balanced() {
        let board = PackedBoard::starting_position();
        assert_eq!(material_points(&board, Player::Light), 39);
        assert_eq!(material_advantage(&board), GameAdvantage::EVEN);
        // b1 by the a1 rook, c1 by the queen, f1 by the king, g1 by the h1 rook.
        assert_eq!(side_heuristic(&board, Player::Light), 4);
        assert_eq!(side_heuristic(&board, Player::Dark), 4);
        assert_eq!(board_weight(&board, GameAdvantage::EVEN), 0);
    }

    #[test]
    fn advanced_pawn_and_material_count_for_light() {
        let board = board_with(&[
            ("a1", PieceKind::King, Player::Light),
            ("e4", PieceKind::Pawn, Player::Light),
            ("h8", PieceKind::King, Player::Dark),
        ]);
        let advantage = material_advantage(&board);
        assert_eq!(advantage.leader, Some(Player::Light));
        assert_eq!(advantage.magnitude, 1);
        assert_eq!(side_heuristic(&board, Player::Light), 2);
        assert_eq!(board_weight(&board, advantage), 3);
    }

    #[test]
    fn dark_pawn_advancement_counts_downwards() {
        let board = board_with(&[
            ("a1", PieceKind::King, Player::Light),
            ("c4", PieceKind::Pawn, Player::Dark),
            ("h8", PieceKind::King, Player::Dark),
        ]);
        // Row 4 is three rows below Dark's pawn row.
        assert_eq!(side_heuristic(&board, Player::Dark), 3);
    }

    #[test]
    fn forked_pieces_score_threats_against_material() {
        let board = board_with(&[
            ("a1", PieceKind::King, Player::Light),
            ("c3", PieceKind::Knight, Player::Light),
            ("h8", PieceKind::King, Player::Dark),
            ("d5", PieceKind::Rook, Player::Dark),
            ("e4", PieceKind::Queen, Player::Dark),
        ]);
        assert_eq!(side_heuristic(&board, Player::Light), 7);
        assert_eq!(side_heuristic(&board, Player::Dark), 0);
        let advantage = material_advantage(&board);
        assert_eq!(advantage.leader, Some(Player::Dark));
        assert_eq!(advantage.magnitude, 11);
        assert_eq!(board_weight(&board, advantage), -4);
    }
}
