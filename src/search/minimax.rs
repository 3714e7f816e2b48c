//! Depth-limited minimax with alpha-beta pruning.
//!
//! Moves are visited in the board's own order with no reordering, so a given
//! board and depth always produce the same move and weight. The first player
//! maximises and the second minimises; at a cutoff the node returns the bound
//! that caused it (fail-hard).

use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tracing::debug;

use crate::game_state::chess_rules::DEFAULT_SEARCH_DEPTH;
use crate::search::game_tree::GameBoard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies to look ahead.
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

impl SearchConfig {
    #[inline]
    pub const fn with_depth(depth: u8) -> Self {
        Self { depth }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<M> {
    /// `None` only when the root position is already finished or `depth` is 0.
    pub best_move: Option<M>,
    pub weight: i64,
    /// Positions visited, root included.
    pub nodes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError<E> {
    /// The board refused to apply or undo a move during the search.
    #[error("board error during search: {0}")]
    Board(E),
    #[error("search cancelled")]
    Cancelled,
    #[error("search worker thread panicked")]
    WorkerPanicked,
}

struct SearchContext<'a> {
    nodes: u64,
    cancel: Option<&'a AtomicBool>,
}

impl SearchContext<'_> {
    #[inline]
    fn cancelled(&self) -> bool {
        self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// Searches `board` to `config.depth` plies. The board is restored on return.
pub fn find_best_move<B: GameBoard>(
    board: &mut B,
    config: &SearchConfig,
) -> Result<SearchOutcome<B::Move>, SearchError<B::Error>> {
    find_best_move_cancellable(board, config, None)
}

/// Like [`find_best_move`], but gives up with [`SearchError::Cancelled`] once
/// `cancel` is set. The board is restored either way.
pub fn find_best_move_cancellable<B: GameBoard>(
    board: &mut B,
    config: &SearchConfig,
    cancel: Option<&AtomicBool>,
) -> Result<SearchOutcome<B::Move>, SearchError<B::Error>> {
    let mut ctx = SearchContext { nodes: 0, cancel };
    let (best_move, weight) = minimax(board, config.depth, i64::MIN, i64::MAX, &mut ctx)?;

    match &best_move {
        Some(mv) => debug!(depth = config.depth, nodes = ctx.nodes, weight, best = %mv, "search complete"),
        None => debug!(depth = config.depth, nodes = ctx.nodes, weight, "search found no move"),
    }

    Ok(SearchOutcome {
        best_move,
        weight,
        nodes: ctx.nodes,
    })
}

fn minimax<B: GameBoard>(
    board: &mut B,
    depth: u8,
    mut alpha: i64,
    mut beta: i64,
    ctx: &mut SearchContext<'_>,
) -> Result<(Option<B::Move>, i64), SearchError<B::Error>> {
    ctx.nodes += 1;
    if ctx.cancelled() {
        return Err(SearchError::Cancelled);
    }
    if depth == 0 || board.is_finished() {
        return Ok((None, board.board_weight()));
    }

    let maximizing = board.is_first_player_to_move();
    let mut best = None;

    for mv in board.possible_moves() {
        board.apply_move(mv.clone()).map_err(SearchError::Board)?;
        let child = minimax(board, depth - 1, alpha, beta, ctx);
        board.undo_last_move().map_err(SearchError::Board)?;
        let (_, weight) = child?;

        if maximizing {
            if weight > alpha {
                alpha = weight;
                best = Some(mv);
            }
        } else if weight < beta {
            beta = weight;
            best = Some(mv);
        }

        if alpha >= beta {
            let bound = if maximizing { beta } else { alpha };
            return Ok((best, bound));
        }
    }

    Ok((best, if maximizing { alpha } else { beta }))
}
