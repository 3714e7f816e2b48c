//! Castling candidates.
//!
//! A side may castle when its king and that side's rook still stand on their
//! home squares untouched, the squares between them are empty, and the squares
//! the king crosses and lands on are not attacked. The caller only asks when
//! the king is not already in check.

use crate::game_state::board_position::BoardPosition;
use crate::game_state::chess_board::ChessBoard;
use crate::game_state::chess_rules::{KING_HOME_COL, KING_SIDE_ROOK_COL, QUEEN_SIDE_ROOK_COL};
use crate::game_state::chess_types::{PieceKind, Player};
use crate::move_generation::attacked_squares::attacked_positions;
use crate::moves::chess_move::{ChessMove, MoveKind};

/// Whether no move in the history started or ended on `pos`.
///
/// A piece still on its starting square has neither moved away nor been
/// captured there.
fn never_disturbed(board: &ChessBoard, pos: BoardPosition) -> bool {
    board
        .move_history()
        .iter()
        .all(|mv| mv.start() != pos && mv.end() != pos)
}

fn rook_ready(board: &ChessBoard, pos: BoardPosition, player: Player) -> bool {
    board.piece_at(pos).is(PieceKind::Rook, player) && never_disturbed(board, pos)
}

pub fn castle_moves(board: &ChessBoard, player: Player, out: &mut Vec<ChessMove>) {
    let home = player.home_row();
    let king = BoardPosition::new(home, KING_HOME_COL);
    if !board.piece_at(king).is(PieceKind::King, player) || !never_disturbed(board, king) {
        return;
    }

    let attacked = attacked_positions(board.squares(), player.opposite());

    let right1 = king.translate(0, 1);
    let right2 = king.translate(0, 2);
    if board.is_empty(right1)
        && board.is_empty(right2)
        && rook_ready(board, BoardPosition::new(home, KING_SIDE_ROOK_COL), player)
        && !attacked.contains(right1)
        && !attacked.contains(right2)
    {
        out.push(
            ChessMove::with_kind(king, right2, MoveKind::CastleKingSide)
                .by(PieceKind::King, player),
        );
    }

    let left1 = king.translate(0, -1);
    let left2 = king.translate(0, -2);
    let left3 = king.translate(0, -3);
    if board.is_empty(left1)
        && board.is_empty(left2)
        && board.is_empty(left3)
        && rook_ready(board, BoardPosition::new(home, QUEEN_SIDE_ROOK_COL), player)
        && !attacked.contains(left1)
        && !attacked.contains(left2)
    {
        out.push(
            ChessMove::with_kind(king, left2, MoveKind::CastleQueenSide)
                .by(PieceKind::King, player),
        );
    }
}
