//! Perft: exhaustive move-path counting for validating the move generator.

use std::thread;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_board::ChessBoard;
use crate::move_generation::legal_move_apply::{apply_unchecked, undo_unchecked};
use crate::moves::chess_move::{ChessMove, MoveKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    /// Tallies the leaf reached by `mv`; `board` is the position after it.
    fn record_leaf(&mut self, mv: &ChessMove, board: &mut ChessBoard) {
        self.nodes += 1;
        if mv.is_capture() {
            self.captures += 1;
        }
        match mv.kind() {
            MoveKind::EnPassant => self.en_passant += 1,
            MoveKind::CastleKingSide | MoveKind::CastleQueenSide => self.castles += 1,
            MoveKind::PawnPromote => self.promotions += 1,
            MoveKind::Normal => {}
        }
        if board.king_in_check() {
            self.checks += 1;
            if board.is_checkmate() {
                self.checkmates += 1;
            }
        }
    }
}

/// Counts the leaves `depth` plies below `board`. The board is restored.
pub fn perft(board: &mut ChessBoard, depth: u8) -> ChessResult<PerftCounts> {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return Ok(counts);
    }
    perft_recurse(board, depth, &mut counts)?;
    Ok(counts)
}

/// Splits the root moves across threads, each with its own board clone.
pub fn perft_multi_threaded(board: &ChessBoard, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut root = board.clone();
    let root_moves = root.legal_moves();
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let mut local_board = root.clone();
        handles.push(thread::spawn(move || -> ChessResult<PerftCounts> {
            let mut local = PerftCounts::default();
            let record = apply_unchecked(&mut local_board, mv)?;
            if depth == 1 {
                local.record_leaf(&record, &mut local_board);
            } else {
                perft_recurse(&mut local_board, depth - 1, &mut local)?;
            }
            Ok(local)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let local = handle.join().map_err(|_| ChessError::WorkerPanicked)??;
        total.merge(local);
    }
    Ok(total)
}

fn perft_recurse(board: &mut ChessBoard, depth: u8, counts: &mut PerftCounts) -> ChessResult<()> {
    for mv in board.legal_moves() {
        let record = apply_unchecked(board, mv)?;
        let result = if depth == 1 {
            counts.record_leaf(&record, board);
            Ok(())
        } else {
            perft_recurse(board, depth - 1, counts)
        };
        undo_unchecked(board);
        result?;
    }
    Ok(())
}
