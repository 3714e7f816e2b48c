//! Move application and exact reversal.
//!
//! `make_move`/`unmake_move` mutate the squares, the history, the draw
//! counter, and the side to move. The check flag and material advantage are
//! refreshed separately so the legality filter can probe a move without
//! paying for them.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board_position::BoardPosition;
use crate::game_state::chess_board::ChessBoard;
use crate::game_state::chess_types::{ChessPiece, PieceKind, Player};
use crate::move_generation::attacked_squares::is_king_attacked;
use crate::moves::chess_move::{ChessMove, MoveKind};
use crate::search::board_scoring::material_advantage;

/// Rook start and destination for a castle by the king moving `start -> end`.
fn castle_rook_squares(kind: MoveKind, start: BoardPosition, end: BoardPosition) -> Option<(BoardPosition, BoardPosition)> {
    match kind {
        MoveKind::CastleKingSide => Some((end.translate(0, 1), start.translate(0, 1))),
        MoveKind::CastleQueenSide => Some((end.translate(0, -2), start.translate(0, -1))),
        _ => None,
    }
}

/// Square of the pawn removed by an en passant capture landing on `end`.
#[inline]
fn en_passant_victim(end: BoardPosition, player: Player) -> BoardPosition {
    end.translate(-player.forward(), 0)
}

/// Applies `mv` without checking it against the legal set and refreshes the
/// derived flags. Returns the recorded move.
pub(crate) fn apply_unchecked(board: &mut ChessBoard, mv: ChessMove) -> ChessResult<ChessMove> {
    let record = make_move(board, mv)?;
    refresh_derived(board);
    Ok(record)
}

/// Reverses the last move and refreshes the derived flags.
pub(crate) fn undo_unchecked(board: &mut ChessBoard) -> Option<ChessMove> {
    let mv = unmake_move(board)?;
    refresh_derived(board);
    Some(mv)
}

fn refresh_derived(board: &mut ChessBoard) {
    board.in_check = is_king_attacked(&board.squares, board.current_player);
    board.advantage = material_advantage(&board.squares);
}

pub(crate) fn make_move(board: &mut ChessBoard, mv: ChessMove) -> ChessResult<ChessMove> {
    let start = mv.start();
    let end = mv.end();
    if !start.in_bounds() || !end.in_bounds() {
        return Err(ChessError::IllegalMove(mv.to_string()));
    }

    let moving = board.squares.get(start);
    let Some(player) = moving.player() else {
        return Err(ChessError::IllegalMove(mv.to_string()));
    };
    let opponent = player.opposite();

    let placed = match mv.kind() {
        MoveKind::PawnPromote => match mv.promoted_to() {
            Some(promoted) => ChessPiece::new(promoted, player),
            None => return Err(ChessError::IllegalMove(mv.to_string())),
        },
        _ => moving,
    };

    let captured = match mv.kind() {
        MoveKind::EnPassant => Some(ChessPiece::new(PieceKind::Pawn, opponent)),
        MoveKind::CastleKingSide | MoveKind::CastleQueenSide => None,
        MoveKind::Normal | MoveKind::PawnPromote => {
            let target = board.squares.get(end);
            (!target.is_empty()).then_some(target)
        }
    };

    let mut record = mv.by(moving.kind(), player);
    record.record_capture(captured);

    board.squares.set(start, ChessPiece::EMPTY);
    board.squares.set(end, placed);
    match mv.kind() {
        MoveKind::EnPassant => {
            board.squares.set(en_passant_victim(end, player), ChessPiece::EMPTY);
        }
        kind => {
            if let Some((rook_from, rook_to)) = castle_rook_squares(kind, start, end) {
                let rook = board.squares.get(rook_from);
                board.squares.set(rook_from, ChessPiece::EMPTY);
                board.squares.set(rook_to, rook);
            }
        }
    }

    let previous = board.draw_counter.last().copied().unwrap_or(0);
    let resets = !mv.kind().is_castle() && (moving.kind() == PieceKind::Pawn || captured.is_some());
    board.draw_counter.push(if resets { 0 } else { previous.saturating_add(1) });

    board.history.push(record);
    board.saved_moves.push(board.legal_cache.take());
    board.current_player = opponent;
    Ok(record)
}

pub(crate) fn unmake_move(board: &mut ChessBoard) -> Option<ChessMove> {
    let mv = board.history.pop()?;
    let player = mv.player().unwrap_or(board.current_player.opposite());
    let start = mv.start();
    let end = mv.end();
    let moved = ChessPiece::new(mv.piece_kind(), player);
    let captured = mv.captured().unwrap_or(ChessPiece::EMPTY);

    board.squares.set(start, moved);
    match mv.kind() {
        MoveKind::EnPassant => {
            board.squares.set(end, ChessPiece::EMPTY);
            board.squares.set(en_passant_victim(end, player), captured);
        }
        MoveKind::CastleKingSide | MoveKind::CastleQueenSide => {
            board.squares.set(end, ChessPiece::EMPTY);
            if let Some((rook_from, rook_to)) = castle_rook_squares(mv.kind(), start, end) {
                let rook = board.squares.get(rook_to);
                board.squares.set(rook_to, ChessPiece::EMPTY);
                board.squares.set(rook_from, rook);
            }
        }
        MoveKind::Normal | MoveKind::PawnPromote => {
            board.squares.set(end, captured);
        }
    }

    board.draw_counter.pop();
    board.legal_cache = board.saved_moves.pop().flatten();
    board.current_player = player;
    Some(mv)
}
