//! Full legal move generation.
//!
//! Candidates are produced piece by piece (knights, pawn captures, pawn
//! pushes, rooks, bishops, queens, king) with own-occupied targets dropped.
//! Each candidate is then made on the board and kept only if the mover's king
//! is not attacked afterwards. Castles are appended last; their generation
//! already rules out crossing attacked squares, and none are offered while the
//! king is in check.

use crate::game_state::chess_board::ChessBoard;
use crate::game_state::chess_types::{PieceKind, Player};
use crate::move_generation::attacked_squares::is_king_attacked;
use crate::move_generation::castling::castle_moves;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_moves_pawn::{pawn_advances, pawn_captures};
use crate::moves::chess_move::ChessMove;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::sliding_moves::{bishop_attacks, queen_attacks, rook_attacks};

/// Pseudo-legal candidates for `player`, excluding castles.
pub fn candidate_moves(board: &ChessBoard, player: Player) -> Vec<ChessMove> {
    let squares = board.squares();
    let mut out = Vec::with_capacity(64);

    for from in board.positions_of(PieceKind::Knight, player) {
        knight_attacks(from, player, &mut out);
    }
    pawn_captures(board, player, &mut out);
    pawn_advances(board, player, &mut out);
    for from in board.positions_of(PieceKind::Rook, player) {
        rook_attacks(squares, from, player, &mut out);
    }
    for from in board.positions_of(PieceKind::Bishop, player) {
        bishop_attacks(squares, from, player, &mut out);
    }
    for from in board.positions_of(PieceKind::Queen, player) {
        queen_attacks(squares, from, player, &mut out);
    }
    for from in board.positions_of(PieceKind::King, player) {
        king_attacks(squares, from, player, &mut out);
    }

    out.retain(|mv| !squares.get(mv.end()).belongs_to(player));
    out
}

/// Legal moves for the side to move, in generation order.
///
/// The board is mutated while probing candidates and is restored exactly
/// before returning.
pub fn generate_legal_moves(board: &mut ChessBoard) -> Vec<ChessMove> {
    let player = board.current_player();
    let candidates = candidate_moves(board, player);

    let mut legal = Vec::with_capacity(candidates.len());
    for mv in candidates {
        if make_move(board, mv).is_err() {
            continue;
        }
        let exposed = is_king_attacked(board.squares(), player);
        unmake_move(board);
        if !exposed {
            legal.push(mv);
        }
    }

    if !board.king_in_check() {
        castle_moves(board, player, &mut legal);
    }
    legal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board_position::BoardPosition;
    use crate::game_state::chess_types::ChessPiece;

    fn pos(s: &str) -> BoardPosition {
        s.parse().expect("test square should parse")
    }

    #[test]
    fn start_position_order_is_knights_then_pawns() {
        let mut board = ChessBoard::new_game();
        let moves = generate_legal_moves(&mut board);
        assert_eq!(moves.len(), 20);
        assert!(moves[..4].iter().all(|m| m.piece_kind() == PieceKind::Knight));
        assert!(moves[4..].iter().all(|m| m.piece_kind() == PieceKind::Pawn));
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        let mut board = ChessBoard::from_placements([
            (pos("e1"), ChessPiece::new(PieceKind::King, Player::Light)),
            (pos("e2"), ChessPiece::new(PieceKind::Bishop, Player::Light)),
            (pos("e8"), ChessPiece::new(PieceKind::Rook, Player::Dark)),
            (pos("a8"), ChessPiece::new(PieceKind::King, Player::Dark)),
        ])
        .expect("valid placement");
        let moves = generate_legal_moves(&mut board);
        assert!(moves.iter().all(|m| m.start() != pos("e2")));
        assert!(moves.iter().all(|m| m.piece_kind() == PieceKind::King));
    }

    #[test]
    fn no_castling_out_of_check() {
        let mut board = ChessBoard::from_placements([
            (pos("e1"), ChessPiece::new(PieceKind::King, Player::Light)),
            (pos("h1"), ChessPiece::new(PieceKind::Rook, Player::Light)),
            (pos("e8"), ChessPiece::new(PieceKind::Rook, Player::Dark)),
            (pos("a8"), ChessPiece::new(PieceKind::King, Player::Dark)),
        ])
        .expect("valid placement");
        assert!(board.king_in_check());
        let moves = generate_legal_moves(&mut board);
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|m| !m.kind().is_castle()));
    }

    #[test]
    fn king_cannot_capture_a_defended_piece() {
        let mut board = ChessBoard::from_placements([
            (pos("e1"), ChessPiece::new(PieceKind::King, Player::Light)),
            (pos("e2"), ChessPiece::new(PieceKind::Queen, Player::Dark)),
            (pos("e3"), ChessPiece::new(PieceKind::Rook, Player::Dark)),
            (pos("a8"), ChessPiece::new(PieceKind::King, Player::Dark)),
        ])
        .expect("valid placement");
        let moves = generate_legal_moves(&mut board);
        assert!(moves.is_empty());
        assert!(board.is_checkmate());
    }
}
